use crate::{AppState, Effect, Intent, Msg, Phase, SEARCH_DEBOUNCE};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::Activated => {
            if state.has_issued_requests() {
                Vec::new()
            } else {
                vec![fetch_now(&mut state, Intent::Popular)]
            }
        }
        Msg::QueryChanged(query) => {
            if query == state.query() {
                return (state, Vec::new());
            }
            let intent = Intent::for_query(&query);
            state.set_query(query);
            match intent {
                Intent::Popular => vec![fetch_now(&mut state, Intent::Popular)],
                search @ Intent::Search(_) => {
                    // Loading stays as it was until the timer fires.
                    let request_id = state.supersede(search, Phase::Debouncing);
                    vec![Effect::Debounce {
                        request_id,
                        delay: SEARCH_DEBOUNCE,
                    }]
                }
            }
        }
        Msg::DebounceElapsed { request_id } => match state.pending_debounce(request_id).cloned() {
            Some(intent) => {
                state.begin_fetch(request_id);
                vec![Effect::Fetch { request_id, intent }]
            }
            None => Vec::new(),
        },
        Msg::FetchSucceeded { request_id, movies } => {
            if state.in_flight(request_id).is_some() {
                state.commit_results(movies);
            }
            Vec::new()
        }
        Msg::FetchFailed { request_id, .. } => {
            if let Some(message) = state.in_flight(request_id).map(Intent::error_message) {
                state.commit_failure(message);
            }
            Vec::new()
        }
    };

    (state, effects)
}

fn fetch_now(state: &mut AppState, intent: Intent) -> Effect {
    let request_id = state.supersede(intent.clone(), Phase::InFlight);
    state.begin_fetch(request_id);
    Effect::Fetch { request_id, intent }
}
