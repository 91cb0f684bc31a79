use log::{debug, error};

use crate::{actions::Action, config::Config, effect::Effect, state::*};

/// Root reducer that delegates to sub-reducers based on action type
/// Pure function: takes state and action, returns (new state, effects to perform)
pub fn reduce(mut state: AppState, action: &Action) -> (AppState, Vec<Effect>) {
    let mut effects = Vec::new();

    let (ui_state, ui_effects) = ui_reducer(state.ui, action);
    state.ui = ui_state;
    effects.extend(ui_effects);

    let (catalog_state, catalog_effects) = catalog_reducer(state.catalog, action, &state.config);
    state.catalog = catalog_state;
    effects.extend(catalog_effects);

    let (search_state, search_effects) = search_reducer(state.search, action);
    state.search = search_state;
    effects.extend(search_effects);

    (state, effects)
}

/// UI state reducer - handles UI-related actions
fn ui_reducer(mut state: UiState, action: &Action) -> (UiState, Vec<Effect>) {
    match action {
        Action::Quit => {
            state.should_quit = true;
        }
        Action::TickSpinner => {
            // Increment spinner frame for animation (0-9 cycle)
            state.spinner_frame = (state.spinner_frame + 1) % 10;
        }
        _ => {}
    }

    (state, vec![])
}

/// Catalog state reducer - owns the load lifecycle
fn catalog_reducer(
    mut state: CatalogState,
    action: &Action,
    config: &Config,
) -> (CatalogState, Vec<Effect>) {
    match action {
        Action::Bootstrap => {
            state.loading = LoadingState::Loading;
            let effects = vec![Effect::LoadCatalog {
                url: config.source_url.clone(),
            }];
            return (state, effects);
        }
        Action::CatalogLoaded(Ok(items)) => {
            debug!("catalog loaded: {} items", items.len());
            state.store.replace(items.clone());
            state.loading = LoadingState::Loaded;
        }
        Action::CatalogLoaded(Err(err)) => {
            // Keep whatever the store held before; first load leaves it empty
            error!("catalog load failed: {err}");
            state.loading = LoadingState::Failed(err.clone());
        }
        _ => {}
    }

    (state, vec![])
}

/// Search state reducer - the query controller state machine
fn search_reducer(mut state: SearchState, action: &Action) -> (SearchState, Vec<Effect>) {
    match action {
        Action::SearchInput(ch) => {
            state.input.push(*ch);
            let effects = on_input_changed(&mut state);
            return (state, effects);
        }
        Action::SearchBackspace => {
            state.input.pop();
            let effects = on_input_changed(&mut state);
            return (state, effects);
        }
        Action::SearchClear => {
            state.input.clear();
            let effects = on_input_changed(&mut state);
            return (state, effects);
        }
        Action::SearchDone { seq, results } => {
            if *seq == state.seq {
                state.phase = SearchPhase::Displaying;
                state.results = results.clone();
            } else {
                // A newer query superseded this one while it waited out
                // its delay; its results must never reach the screen.
                debug!(
                    "discarding stale search results (seq {seq}, latest {})",
                    state.seq
                );
            }
        }
        _ => {}
    }

    (state, vec![])
}

/// Shared transition for every input edit.
///
/// Any edit bumps the query sequence, invalidating whatever search is in
/// flight. Queries longer than [`MIN_QUERY_CHARS`] go `Pending` and
/// schedule a delayed search; anything shorter (including empty) returns
/// to `Idle`, which shows the full unfiltered catalog again.
fn on_input_changed(state: &mut SearchState) -> Vec<Effect> {
    state.seq += 1;
    state.results.clear();

    let query = state.query();
    if query.chars().count() > MIN_QUERY_CHARS {
        state.phase = SearchPhase::Pending;
        vec![Effect::ScheduleSearch {
            query,
            seq: state.seq,
        }]
    } else {
        state.phase = SearchPhase::Idle;
        vec![]
    }
}
