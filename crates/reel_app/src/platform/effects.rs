use std::sync::{mpsc, Arc};

use reel_core::{Effect, Intent, Movie, Msg};
use reel_engine::{
    EngineError, EngineEvent, EngineHandle, EventSink, FetchSettings, Listing, MovieRecord,
};
use reel_logging::reel_debug;

use super::app::Inbox;

/// Executes core effects on the engine and feeds engine events back as messages.
pub struct EffectRunner {
    engine: EngineHandle,
}

impl EffectRunner {
    pub fn new(settings: FetchSettings, inbox: mpsc::Sender<Inbox>) -> Result<Self, EngineError> {
        let sink = Arc::new(MsgSink { inbox });
        let engine = EngineHandle::with_settings(settings, sink)?;
        Ok(Self { engine })
    }

    pub fn enqueue(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::Debounce { request_id, delay } => {
                    reel_debug!("Debounce request_id={} delay={:?}", request_id, delay);
                    self.engine.debounce(request_id, delay);
                }
                Effect::Fetch { request_id, intent } => {
                    self.engine.fetch(request_id, map_intent(intent));
                }
            }
        }
    }

    pub fn shutdown(&self) {
        self.engine.cancel_all();
    }
}

struct MsgSink {
    inbox: mpsc::Sender<Inbox>,
}

impl EventSink for MsgSink {
    fn emit(&self, event: EngineEvent) {
        let _ = self.inbox.send(Inbox::Core(map_event(event)));
    }
}

fn map_intent(intent: Intent) -> Listing {
    match intent {
        Intent::Popular => Listing::Popular,
        Intent::Search(term) => Listing::Search(term),
    }
}

fn map_event(event: EngineEvent) -> Msg {
    match event {
        EngineEvent::DebounceElapsed { request_id } => Msg::DebounceElapsed { request_id },
        EngineEvent::FetchCompleted { request_id, result } => match result {
            Ok(records) => Msg::FetchSucceeded {
                request_id,
                movies: records.into_iter().map(map_movie).collect(),
            },
            Err(err) => Msg::FetchFailed {
                request_id,
                reason: err.to_string(),
            },
        },
    }
}

fn map_movie(record: MovieRecord) -> Movie {
    Movie {
        id: record.id,
        title: record.title,
        poster_path: record.poster_path,
        vote_average: record.vote_average,
        original_language: record.original_language,
        release_date: record.release_date,
        overview: record.overview,
    }
}
