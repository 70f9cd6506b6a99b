use std::time::Duration;

use crate::{Intent, RequestId};

/// Side effects requested by [`crate::update`].
///
/// Both variants occupy the single request slot: executing one cancels
/// whatever timer or network call the slot held before.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Arm the debounce timer; report back with `Msg::DebounceElapsed`.
    Debounce { request_id: RequestId, delay: Duration },
    /// Start the network fetch for `intent`.
    Fetch { request_id: RequestId, intent: Intent },
}
