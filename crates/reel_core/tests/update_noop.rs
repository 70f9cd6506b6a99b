use reel_core::{update, AppState, Movie, Msg};

#[test]
fn unknown_request_messages_are_noops() {
    let state = AppState::new();
    let stale = [
        Msg::DebounceElapsed { request_id: 7 },
        Msg::FetchSucceeded {
            request_id: 7,
            movies: vec![Movie::default()],
        },
        Msg::FetchFailed {
            request_id: 7,
            reason: "network error".to_string(),
        },
    ];

    for msg in stale {
        let (next, effects) = update(state.clone(), msg);
        assert_eq!(state, next);
        assert!(effects.is_empty());
    }
}

#[test]
fn empty_query_before_activation_is_noop() {
    let state = AppState::new();
    let (next, effects) = update(state.clone(), Msg::QueryChanged(String::new()));

    assert_eq!(state, next);
    assert!(effects.is_empty());
}
