use crate::app::{
    action::{Action, UpdateResult},
    command::Command,
    state::{AppMode, AppState, ErrorSeverity, ErrorState},
};
use std::time::Instant;

pub fn update(state: &mut AppState, action: &Action) -> UpdateResult {
    match action {
        Action::Tick => {
            state.frame_count = state.frame_count.wrapping_add(1);
            state.toasts.expire(Instant::now());
            UpdateResult::Handled(None)
        }
        Action::Resize(..) => UpdateResult::Handled(None),
        Action::Quit => {
            state.should_quit = true;
            UpdateResult::Handled(None)
        }
        Action::ToggleHelp => {
            state.mode = if state.mode == AppMode::Help {
                AppMode::Normal
            } else {
                AppMode::Help
            };
            UpdateResult::Handled(None)
        }
        Action::Blur => {
            // Innermost overlay first.
            if state.last_error.is_some() {
                state.last_error = None;
            } else {
                state.command_palette = None;
                state.mode = AppMode::Normal;
            }
            UpdateResult::Handled(None)
        }
        Action::ErrorOccurred(msg) => {
            tracing::warn!(error = %msg, "operation failed");
            state.last_error = Some(ErrorState::new(msg.clone(), ErrorSeverity::Error));
            UpdateResult::Handled(None)
        }
        Action::ExternalChangeDetected => {
            UpdateResult::Handled(Some(Command::ReloadRecentSearches))
        }
        _ => UpdateResult::NotHandled,
    }
}
