use anyhow::Result;
use ratatui::{
    crossterm::{
        self,
        event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    },
    prelude::*,
};
use tokio::sync::mpsc;

use log::{debug, error};

use crate::actions::Action;
use crate::config::Config;
use crate::effect::execute_effect;
use crate::state::{AppState, SearchPhase};
use crate::store::Store;
use crate::task::{BackgroundTask, TaskResult, start_task_worker};
use crate::theme::Theme;

mod actions;
mod catalog;
mod config;
mod effect;
mod reducer;
mod state;
mod store;
mod task;
mod theme;
mod views;

pub struct App {
    // Redux store - centralized state management
    pub store: Store,
    // Communication channels
    pub action_tx: mpsc::UnboundedSender<Action>,
    pub task_tx: mpsc::UnboundedSender<BackgroundTask>,
}

impl App {
    fn new(
        action_tx: mpsc::UnboundedSender<Action>,
        task_tx: mpsc::UnboundedSender<BackgroundTask>,
    ) -> App {
        let initial_state = AppState {
            config: Config::load(),
            theme: Theme::default(),
            ..AppState::default()
        };

        App {
            store: Store::new(initial_state),
            action_tx,
            task_tx,
        }
    }
}

pub fn initialize_panic_handler() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = shutdown();
        original_hook(panic_info);
    }));
}

fn startup() -> Result<()> {
    crossterm::terminal::enable_raw_mode()?;
    crossterm::execute!(std::io::stderr(), crossterm::terminal::EnterAlternateScreen)?;
    Ok(())
}

fn shutdown() -> Result<()> {
    crossterm::execute!(std::io::stderr(), crossterm::terminal::LeaveAlternateScreen)?;
    crossterm::terminal::disable_raw_mode()?;
    Ok(())
}

/// Dispatch an action through the store and execute the effects it asks for
fn update(app: &mut App, msg: Action) -> Result<()> {
    let effects = app.store.dispatch(msg);
    for effect in effects {
        execute_effect(app, effect)?;
    }
    Ok(())
}

/// Translate a key press into an action.
///
/// Printable characters feed the search input one keystroke at a time;
/// Esc clears the query, Ctrl-C/Ctrl-Q quits.
fn map_key(key: KeyEvent) -> Action {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') | KeyCode::Char('q') => Action::Quit,
            _ => Action::None,
        };
    }

    match key.code {
        KeyCode::Char(c) => Action::SearchInput(c),
        KeyCode::Backspace => Action::SearchBackspace,
        KeyCode::Esc => Action::SearchClear,
        _ => Action::None,
    }
}

fn handle_events() -> Result<Action> {
    if let Event::Key(key) = event::read()?
        && key.kind == KeyEventKind::Press
    {
        return Ok(map_key(key));
    }
    Ok(Action::None)
}

fn start_event_handler(tx: mpsc::UnboundedSender<Action>) -> tokio::task::JoinHandle<()> {
    let tick_rate = std::time::Duration::from_millis(250);
    tokio::spawn(async move {
        loop {
            let action = if crossterm::event::poll(tick_rate).unwrap_or(false) {
                handle_events().unwrap_or(Action::None)
            } else {
                Action::None
            };

            if tx.send(action).is_err() {
                break;
            }
        }
    })
}

/// Convert TaskResult to Action - the single place where task results become actions
fn result_to_action(result: TaskResult) -> Action {
    match result {
        TaskResult::CatalogLoaded(data) => Action::CatalogLoaded(data),
        TaskResult::SearchDone { seq, results } => Action::SearchDone { seq, results },
    }
}

fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Fill(1)])
        .split(f.area());

    views::search::render_search_bar(f, chunks[0], app);

    // An active search replaces the grid; Idle always shows the full catalog
    if app.store.state().search.phase == SearchPhase::Idle {
        views::catalog_grid::render_catalog_grid(f, chunks[1], app);
    } else {
        views::search::render_results_panel(f, chunks[1], app);
    }
}

async fn run() -> Result<()> {
    let mut t = Terminal::new(CrosstermBackend::new(std::io::stderr()))?;

    let (action_tx, mut action_rx) = mpsc::unbounded_channel();
    let (task_tx, task_rx) = mpsc::unbounded_channel();
    let (result_tx, mut result_rx) = mpsc::unbounded_channel();

    let mut app = App::new(action_tx.clone(), task_tx);

    let _event_task = start_event_handler(app.action_tx.clone());
    let _worker_task = start_task_worker(task_rx, result_tx);

    app.action_tx
        .send(Action::Bootstrap)
        .expect("Failed to send bootstrap action");

    loop {
        t.draw(|f| {
            ui(f, &app);
        })?;

        // Handle both actions and task results; results first so search
        // completions land before the next keystroke is processed
        let maybe_action = tokio::time::timeout(std::time::Duration::from_millis(100), async {
            tokio::select! {
                biased;
                Some(result) = result_rx.recv() => Some(result_to_action(result)),
                Some(action) = action_rx.recv() => Some(action),
                else => None
            }
        })
        .await;

        match maybe_action {
            Ok(Some(action)) => {
                if let Err(err) = update(&mut app, action) {
                    error!("error updating app: {err}");
                    app.store.state_mut().ui.should_quit = true;
                    debug!("shutting down after update error");
                }
            }
            Ok(None) => break, // Channel closed
            Err(_) => {
                // Timeout - tick spinner animation so the pending-search
                // indicator keeps moving between events
                let _ = app.action_tx.send(Action::TickSpinner);
            }
        }

        if app.store.state().ui.should_quit {
            break;
        }
    }

    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    // Errors only on the terminal; RUST_LOG can raise verbosity when the
    // TUI is not occupying stderr (e.g. redirected to a file)
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Error)
        .init();

    initialize_panic_handler();
    startup()?;
    let result = run().await;
    shutdown()?;
    result
}
