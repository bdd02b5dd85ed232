use super::{
    action::{Action, UpdateResult},
    command::Command,
    features,
    state::AppState,
};
use crate::domain::models::Notification;

type Feature = fn(&mut AppState, &Action) -> UpdateResult;

const FEATURES: [Feature; 3] = [
    features::palette::update,
    features::navigation::update,
    features::ui::update,
];

pub fn update(state: &mut AppState, action: Action) -> Option<Command> {
    if let Action::ShortcutTriggered(inner, description) = action {
        tracing::debug!(%description, "shortcut triggered");
        state
            .toasts
            .push(Notification::info("Keyboard Shortcut", description));
        return update(state, *inner);
    }

    for feature in FEATURES {
        if let UpdateResult::Handled(command) = feature(state, &action) {
            return command;
        }
    }
    tracing::debug!(?action, "unhandled action");
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::state::{AppMode, PalettePhase};

    #[test]
    fn test_shortcut_toasts_then_runs_action() {
        let mut state = AppState::default();
        let cmd = update(
            &mut state,
            Action::ShortcutTriggered(
                Box::new(Action::Navigate("/marketplace".to_string())),
                "Go to Marketplace".to_string(),
            ),
        );
        assert_eq!(cmd, Some(Command::Navigate("/marketplace".to_string())));

        let toast = state.toasts.latest().unwrap();
        assert_eq!(toast.notification.title, "Keyboard Shortcut");
        assert_eq!(toast.notification.description, "Go to Marketplace");
    }

    #[test]
    fn test_shortcut_opens_palette() {
        let mut state = AppState::default();
        update(
            &mut state,
            Action::ShortcutTriggered(Box::new(Action::OpenPalette), "Focus search".to_string()),
        );
        assert_eq!(state.mode, AppMode::CommandPalette);
        assert_eq!(state.palette_phase(), PalettePhase::OpenEmpty);
    }

    #[test]
    fn test_quit() {
        let mut state = AppState::default();
        update(&mut state, Action::Quit);
        assert!(state.should_quit);
    }
}
