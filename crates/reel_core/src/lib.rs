//! Reel core: pure search coordinator state machine and view-model helpers.
mod effect;
mod msg;
mod state;
mod update;
mod view_model;

pub use effect::Effect;
pub use msg::Msg;
pub use state::{
    ActiveRequest, AppState, Intent, Movie, Phase, RequestId, BROWSE_ERROR_MESSAGE,
    SEARCH_DEBOUNCE, SEARCH_ERROR_MESSAGE,
};
pub use update::update;
pub use view_model::{AppViewModel, MovieCardView, POSTER_BASE_URL};
