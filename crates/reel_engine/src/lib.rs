//! Reel engine: TMDB client, request slot and effect execution.
mod endpoint;
mod engine;
mod fetch;
mod sink;
mod slot;
mod types;

pub use endpoint::{Listing, DEFAULT_BASE_URL};
pub use engine::{EngineError, EngineHandle};
pub use fetch::{FetchSettings, Fetcher, ReqwestFetcher};
pub use sink::{ChannelEventSink, EventSink};
pub use slot::RequestSlot;
pub use types::{EngineEvent, FailureKind, FetchError, MovieRecord, MoviePage, RequestId};
