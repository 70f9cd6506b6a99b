use std::time::Duration;

use crate::view_model::{AppViewModel, MovieCardView};

pub type RequestId = u64;

/// Quiet period a non-empty query must survive before it is searched.
pub const SEARCH_DEBOUNCE: Duration = Duration::from_millis(350);

pub const BROWSE_ERROR_MESSAGE: &str = "Failed to fetch movies. Please try again later.";
pub const SEARCH_ERROR_MESSAGE: &str = "Failed to search movies. Please try again later.";

/// Which result set the coordinator is currently after.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    /// Default listing, sorted by popularity.
    Popular,
    /// Title search for the contained term.
    Search(String),
}

impl Intent {
    pub fn for_query(query: &str) -> Self {
        if query.is_empty() {
            Intent::Popular
        } else {
            Intent::Search(query.to_string())
        }
    }

    pub(crate) fn error_message(&self) -> &'static str {
        match self {
            Intent::Popular => BROWSE_ERROR_MESSAGE,
            Intent::Search(_) => SEARCH_ERROR_MESSAGE,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Debouncing,
    InFlight,
}

/// The one request allowed to commit into state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveRequest {
    pub id: RequestId,
    pub intent: Intent,
    pub phase: Phase,
}

/// Movie record as rendered; display fields pass through from the API untouched.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Movie {
    pub id: u64,
    pub title: String,
    pub poster_path: Option<String>,
    pub vote_average: Option<f64>,
    pub original_language: Option<String>,
    pub release_date: Option<String>,
    pub overview: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct AppState {
    query: String,
    movies: Vec<Movie>,
    loading: bool,
    error: Option<String>,
    active: Option<ActiveRequest>,
    last_request_id: RequestId,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> AppViewModel {
        AppViewModel {
            query: self.query.clone(),
            loading: self.loading,
            error_message: self.error.clone(),
            movies: self.movies.iter().map(MovieCardView::from_movie).collect(),
            dirty: self.dirty,
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn movies(&self) -> &[Movie] {
        &self.movies
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Request still waiting on its timer or its response, if any.
    pub fn active_request(&self) -> Option<&ActiveRequest> {
        self.active.as_ref()
    }

    /// Intent that the latest query change selected; `None` before activation.
    pub fn intent(&self) -> Option<Intent> {
        if self.last_request_id == 0 {
            None
        } else {
            Some(Intent::for_query(&self.query))
        }
    }

    /// Returns whether the state changed since the last call and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn has_issued_requests(&self) -> bool {
        self.last_request_id != 0
    }

    pub(crate) fn set_query(&mut self, query: String) {
        self.query = query;
        self.dirty = true;
    }

    /// Allocates the next id and makes it the only request allowed to commit.
    pub(crate) fn supersede(&mut self, intent: Intent, phase: Phase) -> RequestId {
        self.last_request_id += 1;
        let id = self.last_request_id;
        self.active = Some(ActiveRequest { id, intent, phase });
        id
    }

    pub(crate) fn pending_debounce(&self, request_id: RequestId) -> Option<&Intent> {
        match &self.active {
            Some(active) if active.id == request_id && active.phase == Phase::Debouncing => {
                Some(&active.intent)
            }
            _ => None,
        }
    }

    pub(crate) fn in_flight(&self, request_id: RequestId) -> Option<&Intent> {
        match &self.active {
            Some(active) if active.id == request_id && active.phase == Phase::InFlight => {
                Some(&active.intent)
            }
            _ => None,
        }
    }

    pub(crate) fn begin_fetch(&mut self, request_id: RequestId) {
        if let Some(active) = self.active.as_mut() {
            if active.id == request_id {
                active.phase = Phase::InFlight;
            }
        }
        self.loading = true;
        self.error = None;
        self.dirty = true;
    }

    pub(crate) fn commit_results(&mut self, movies: Vec<Movie>) {
        self.movies = movies;
        self.loading = false;
        self.error = None;
        self.active = None;
        self.dirty = true;
    }

    pub(crate) fn commit_failure(&mut self, message: &str) {
        self.error = Some(message.to_string());
        self.loading = false;
        self.active = None;
        self.dirty = true;
    }
}
