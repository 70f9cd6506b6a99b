#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    /// The coordinator became active; loads the default listing once.
    Activated,
    /// User edited the query (full text, not a delta).
    QueryChanged(String),
    /// The debounce timer armed for `request_id` fired.
    DebounceElapsed { request_id: crate::RequestId },
    /// Engine delivered a result list for `request_id`.
    FetchSucceeded {
        request_id: crate::RequestId,
        movies: Vec<crate::Movie>,
    },
    /// Engine reported a transport or HTTP failure for `request_id`.
    FetchFailed {
        request_id: crate::RequestId,
        reason: String,
    },
}
