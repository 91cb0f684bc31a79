use catalog_search::normalize_query;

use crate::{
    catalog::{CatalogItem, CatalogStore},
    config::Config,
    theme::Theme,
};

/// Queries must be strictly longer than this (after normalization) to
/// trigger a search. Three characters or fewer re-renders the full
/// catalog instead.
pub const MIN_QUERY_CHARS: usize = 3;

/// Root application state following Redux pattern
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub ui: UiState,
    pub catalog: CatalogState,
    pub search: SearchState,
    pub config: Config,
    pub theme: Theme,
}

/// UI-specific state (spinner animation, quit flag)
#[derive(Debug, Clone, Default)]
pub struct UiState {
    pub spinner_frame: usize,
    pub should_quit: bool,
}

/// Catalog store plus its load status
#[derive(Debug, Clone, Default)]
pub struct CatalogState {
    pub store: CatalogStore,
    pub loading: LoadingState,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoadingState {
    #[default]
    NotLoaded,
    Loading,
    Loaded,
    /// Load failed; the store keeps whatever it held before.
    Failed(String),
}

/// Query lifecycle phase.
///
/// `Pending` means a search has been accepted and its delayed run has not
/// reported back yet. `Displaying` covers both outcomes: results present,
/// or the empty-state panel when nothing matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchPhase {
    #[default]
    Idle,
    Pending,
    Displaying,
}

/// Search controller state
#[derive(Debug, Clone, Default)]
pub struct SearchState {
    /// Raw input as typed, one action per keystroke.
    pub input: String,
    pub phase: SearchPhase,
    /// Monotonic query sequence. Bumped on every edit, so a completed
    /// search can only publish results if no newer query superseded it.
    pub seq: u64,
    pub results: Vec<(CatalogItem, usize)>,
}

impl SearchState {
    /// The normalized query for the current input.
    pub fn query(&self) -> String {
        normalize_query(&self.input)
    }
}
