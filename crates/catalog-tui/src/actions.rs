use crate::catalog::CatalogItem;

/// Action enum - represents all possible actions in the application
/// Actions are dispatched to the reducer to update state
#[derive(Debug, Clone)]
pub enum Action {
    // User-initiated actions
    Bootstrap,
    SearchInput(char),
    SearchBackspace,
    SearchClear,

    // Background task completion notifications
    CatalogLoaded(Result<Vec<CatalogItem>, String>),
    SearchDone {
        seq: u64,
        results: Vec<(CatalogItem, usize)>,
    },

    TickSpinner, // Increment spinner animation frame

    Quit,
    None,
}
