/// Effect system for Redux architecture
/// Reducers return (State, Vec<Effect>) where Effects describe side effects to perform
/// The update() function executes these effects
use anyhow::{Result, anyhow};

use crate::{App, task::BackgroundTask};

/// Effects that reducers can request to be performed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Fetch and map the catalog endpoint
    LoadCatalog { url: String },

    /// Run a search after the configured delay.
    /// `seq` ties the eventual result back to the query that issued it;
    /// the reducer drops results whose sequence is no longer current.
    ScheduleSearch { query: String, seq: u64 },
}

/// Execute a single effect by handing it to the background task worker.
///
/// Effects never touch state directly; their outcomes come back into the
/// reducer as actions via the task-result channel.
pub fn execute_effect(app: &App, effect: Effect) -> Result<()> {
    let state = app.store.state();

    let task = match effect {
        Effect::LoadCatalog { url } => BackgroundTask::FetchCatalog {
            url,
            placeholder_image: state.config.placeholder_image.clone(),
        },
        Effect::ScheduleSearch { query, seq } => BackgroundTask::DelayedSearch {
            query,
            seq,
            // Snapshot of the catalog at schedule time; the store is only
            // replaced wholesale on reload, so the worker needs no lock
            items: state.catalog.store.current().to_vec(),
            delay_ms: state.config.search_delay_ms,
        },
    };

    app.task_tx
        .send(task)
        .map_err(|_| anyhow!("task worker channel closed"))
}
