use crate::app::{
    action::Action, command::Command, input::map_event_to_action, persistence::RecentSearches,
    persistence::RECENT_SEARCHES_KEY, reducer, state::AppState, ui,
};
use crate::domain::router::Router;

use anyhow::Result;
use crossterm::event::{self, Event};
use notify::{EventKind, RecursiveMode, Watcher};
use ratatui::{backend::Backend, Terminal};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::time::interval;

const TICK_RATE: Duration = Duration::from_millis(250);
const DEBOUNCE: Duration = Duration::from_millis(500);

/// Everything side effects run against.
#[derive(Clone)]
pub struct Services {
    pub router: Arc<dyn Router>,
    pub recent: RecentSearches,
    /// Directory holding the persisted history; watched for writes made by
    /// other instances.
    pub watch_dir: Option<PathBuf>,
}

pub async fn run_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    app_state: AppState<'_>,
    services: Services,
) -> Result<()> {
    // User input channel
    let (event_tx, event_rx) = mpsc::channel(100);
    tokio::task::spawn_blocking(move || loop {
        match event::read() {
            Ok(evt) => {
                if event_tx.blocking_send(Ok(evt)).is_err() {
                    break;
                }
            }
            Err(e) => {
                let _ = event_tx.blocking_send(Err(e));
                break;
            }
        }
    });

    run_loop_with_events(terminal, app_state, services, event_rx).await
}

pub async fn run_loop_with_events<B: Backend>(
    terminal: &mut Terminal<B>,
    mut app_state: AppState<'_>,
    services: Services,
    mut event_rx: mpsc::Receiver<Result<Event, std::io::Error>>,
) -> Result<()> {
    let (action_tx, mut action_rx) = mpsc::channel(100);
    let mut interval = interval(TICK_RATE);

    // History file watcher. Kept alive for the duration of the loop.
    let _watcher = match &services.watch_dir {
        Some(dir) if dir.is_dir() => Some(spawn_history_watcher(dir, action_tx.clone())?),
        _ => None,
    };

    app_state.route = services.router.current();

    loop {
        // --- 1. Render ---
        terminal.draw(|f| {
            ui::draw(f, &app_state);
        })?;

        // --- 2. Event Handling (TEA Runtime) ---
        let action = tokio::select! {
            _ = interval.tick() => Some(Action::Tick),

            // User Input
            Some(res) = event_rx.recv() => {
                let event = res?;
                let size = terminal.size()?;
                map_event_to_action(event, &app_state, size)
            },

            // Async Results
            Some(a) = action_rx.recv() => Some(a),
        };

        // --- 3. Update (Reducer) ---
        if let Some(action) = action {
            if let Action::Quit = action {
                break;
            }

            let command = reducer::update(&mut app_state, action);

            if app_state.should_quit {
                break;
            }

            if let Some(cmd) = command {
                handle_command(cmd, &services, action_tx.clone())?;
            }
        }
    }

    Ok(())
}

fn spawn_history_watcher(
    dir: &std::path::Path,
    action_tx: mpsc::Sender<Action>,
) -> Result<notify::RecommendedWatcher> {
    let file_name = format!("{RECENT_SEARCHES_KEY}.json");
    let (notify_tx, mut notify_rx) = mpsc::channel(1);
    let mut watcher = notify::recommended_watcher(move |res: notify::Result<notify::Event>| {
        let Ok(event) = res else { return };
        if matches!(event.kind, EventKind::Access(_)) {
            return;
        }
        let touches_history = event
            .paths
            .iter()
            .any(|p| p.file_name().is_some_and(|n| n == file_name.as_str()));
        if touches_history {
            let _ = notify_tx.try_send(());
        }
    })?;
    watcher.watch(dir, RecursiveMode::NonRecursive)?;
    tracing::debug!(dir = %dir.display(), "watching recent searches");

    tokio::spawn(async move {
        let mut pending = false;
        loop {
            if pending {
                tokio::select! {
                    Some(()) = notify_rx.recv() => {}
                    () = tokio::time::sleep(DEBOUNCE) => {
                        let _ = action_tx.send(Action::ExternalChangeDetected).await;
                        pending = false;
                    }
                }
            } else if notify_rx.recv().await.is_some() {
                pending = true;
            } else {
                break;
            }
        }
    });

    Ok(watcher)
}

pub(crate) fn handle_command(
    command: Command,
    services: &Services,
    tx: mpsc::Sender<Action>,
) -> Result<()> {
    match command {
        Command::Batch(commands) => {
            for cmd in commands {
                handle_command(cmd, services, tx.clone())?;
            }
        }
        Command::Navigate(path) => {
            let router = services.router.clone();
            tokio::spawn(async move {
                let action = match router.navigate(&path) {
                    Ok(route) => Action::RouteChanged(route),
                    Err(e) => {
                        tracing::warn!(%path, error = %e, "navigation failed");
                        Action::ErrorOccurred(e.to_string())
                    }
                };
                let _ = tx.send(action).await;
            });
        }
        Command::NavigateBack => {
            let router = services.router.clone();
            tokio::spawn(async move {
                let action = match router.back() {
                    Ok(route) => Action::RouteChanged(route),
                    Err(e) => Action::ErrorOccurred(e.to_string()),
                };
                let _ = tx.send(action).await;
            });
        }
        // History writes are read-modify-write; running them in command
        // order on the loop keeps back-to-back accepts from losing one.
        Command::SaveRecentSearch(query) => services.recent.save_recent(&query),
        Command::ClearRecentSearches => services.recent.clear_recent(),
        Command::ReloadRecentSearches => {
            let recent = services.recent.clone();
            tokio::spawn(async move {
                match tokio::task::spawn_blocking(move || recent.get_recent()).await {
                    Ok(list) => {
                        let _ = tx.send(Action::RecentSearchesLoaded(list)).await;
                    }
                    Err(e) => tracing::warn!(error = %e, "reload of recent searches failed"),
                }
            });
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "loop_tests.rs"]
mod tests;
