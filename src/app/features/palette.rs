use crate::app::{
    action::{Action, UpdateResult},
    command::Command,
    persistence::push_recent,
    state::{AppMode, AppState, CommandPaletteState, PalettePhase},
};
use crate::domain::models::{Notification, SearchEntry};

pub fn update(state: &mut AppState, action: &Action) -> UpdateResult {
    match action {
        Action::OpenPalette => {
            // Already open: the query field owns the keyboard.
            if state.command_palette.is_none() {
                state.command_palette = Some(CommandPaletteState::open(&state.search));
                state.mode = AppMode::CommandPalette;
            }
            UpdateResult::Handled(None)
        }
        Action::ClosePalette => {
            close(state);
            UpdateResult::Handled(None)
        }
        Action::PaletteInput(key) => {
            let search = state.search.clone();
            if let Some(cp) = &mut state.command_palette {
                if cp.input.input(*key) {
                    cp.refresh(&search);
                }
            }
            UpdateResult::Handled(None)
        }
        Action::PaletteNext => {
            if let Some(cp) = &mut state.command_palette {
                cp.select_next();
            }
            UpdateResult::Handled(None)
        }
        Action::PalettePrev => {
            if let Some(cp) = &mut state.command_palette {
                cp.select_prev();
            }
            UpdateResult::Handled(None)
        }
        Action::PaletteAccept => {
            let selected = state
                .command_palette
                .as_ref()
                .filter(|cp| cp.phase() == PalettePhase::OpenResults)
                .and_then(CommandPaletteState::selected);
            match selected {
                Some(entry) => UpdateResult::Handled(Some(accept(state, entry))),
                None => UpdateResult::Handled(None),
            }
        }
        Action::PaletteAcceptIndex(idx) => {
            let clicked = state
                .command_palette
                .as_ref()
                .and_then(|cp| cp.results.get(*idx).copied());
            match clicked {
                Some(entry) => UpdateResult::Handled(Some(accept(state, entry))),
                None => UpdateResult::Handled(None),
            }
        }
        Action::RecallRecentSearch(idx) => {
            let search = state.search.clone();
            if let (Some(cp), Some(query)) =
                (&mut state.command_palette, state.recent_searches.get(*idx))
            {
                cp.set_query(query, &search);
            }
            UpdateResult::Handled(None)
        }
        Action::ClearRecentSearches => {
            state.recent_searches.clear();
            UpdateResult::Handled(Some(Command::ClearRecentSearches))
        }
        Action::RecentSearchesLoaded(list) => {
            state.recent_searches = list.clone();
            UpdateResult::Handled(None)
        }
        _ => UpdateResult::NotHandled,
    }
}

fn close(state: &mut AppState) {
    state.command_palette = None;
    if state.mode == AppMode::CommandPalette {
        state.mode = AppMode::Normal;
    }
}

/// Remembers the literal query, closes the palette and asks for navigation.
fn accept(state: &mut AppState, entry: &'static SearchEntry) -> Command {
    let query = state
        .command_palette
        .as_ref()
        .map(CommandPaletteState::query)
        .unwrap_or_default();
    close(state);

    state.toasts.push(Notification::info(
        "Navigating",
        format!("Going to {}", entry.title),
    ));

    let navigate = Command::Navigate(entry.path.to_string());
    if query.trim().is_empty() {
        return navigate;
    }
    push_recent(&mut state.recent_searches, &query);
    Command::Batch(vec![Command::SaveRecentSearch(query), navigate])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::reducer::update;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    fn type_text(state: &mut AppState, text: &str) {
        for c in text.chars() {
            update(
                state,
                Action::PaletteInput(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE)),
            );
        }
    }

    fn open_with(text: &str) -> AppState<'static> {
        let mut state = AppState::default();
        update(&mut state, Action::OpenPalette);
        type_text(&mut state, text);
        state
    }

    #[test]
    fn test_open_starts_empty() {
        let mut state = AppState::default();
        assert_eq!(state.palette_phase(), PalettePhase::Closed);
        update(&mut state, Action::OpenPalette);
        assert_eq!(state.palette_phase(), PalettePhase::OpenEmpty);
        assert_eq!(state.mode, AppMode::CommandPalette);
    }

    #[test]
    fn test_reopen_keeps_query() {
        let mut state = open_with("hub");
        update(&mut state, Action::OpenPalette);
        assert_eq!(state.command_palette.as_ref().unwrap().query(), "hub");
    }

    #[test]
    fn test_typing_moves_between_phases() {
        let mut state = open_with("deep");
        assert_eq!(state.palette_phase(), PalettePhase::OpenResults);

        type_text(&mut state, "zzzzz");
        assert_eq!(state.palette_phase(), PalettePhase::OpenNoMatch);

        for _ in 0.."deepzzzzz".len() {
            update(
                &mut state,
                Action::PaletteInput(KeyEvent::new(KeyCode::Backspace, KeyModifiers::NONE)),
            );
        }
        assert_eq!(state.palette_phase(), PalettePhase::OpenEmpty);
    }

    #[test]
    fn test_close_returns_to_normal() {
        let mut state = open_with("deep");
        update(&mut state, Action::ClosePalette);
        assert_eq!(state.palette_phase(), PalettePhase::Closed);
        assert_eq!(state.mode, AppMode::Normal);
    }

    #[test]
    fn test_accept_persists_navigates_and_closes() {
        let mut state = open_with("deep");
        let cmd = update(&mut state, Action::PaletteAccept);

        assert_eq!(
            cmd,
            Some(Command::Batch(vec![
                Command::SaveRecentSearch("deep".to_string()),
                Command::Navigate("/deepwiki".to_string()),
            ]))
        );
        assert_eq!(state.palette_phase(), PalettePhase::Closed);
        assert_eq!(state.recent_searches, vec!["deep"]);
        let toast = state.toasts.latest().unwrap();
        assert_eq!(toast.notification.title, "Navigating");
        assert_eq!(toast.notification.description, "Going to DeepWiki IDE");

        // The next session starts from a blank query.
        update(&mut state, Action::OpenPalette);
        assert_eq!(state.command_palette.as_ref().unwrap().query(), "");
    }

    #[test]
    fn test_accept_follows_selection() {
        let mut state = open_with("ai");
        update(&mut state, Action::PaletteNext);
        let expected = state.command_palette.as_ref().unwrap().results[1].path;
        let cmd = update(&mut state, Action::PaletteAccept);
        assert!(matches!(
            cmd,
            Some(Command::Batch(ref cmds)) if cmds[1] == Command::Navigate(expected.to_string())
        ));
    }

    #[test]
    fn test_enter_without_results_does_nothing() {
        let mut state = open_with("zzzzz");
        assert_eq!(update(&mut state, Action::PaletteAccept), None);
        assert_eq!(state.palette_phase(), PalettePhase::OpenNoMatch);
        assert!(state.recent_searches.is_empty());

        let mut state = open_with("");
        assert_eq!(update(&mut state, Action::PaletteAccept), None);
        assert_eq!(state.palette_phase(), PalettePhase::OpenEmpty);
    }

    #[test]
    fn test_click_in_browse_list_navigates_without_saving() {
        let mut state = open_with("");
        let cmd = update(&mut state, Action::PaletteAcceptIndex(2));
        assert_eq!(cmd, Some(Command::Navigate("/marketplace".to_string())));
        assert!(state.recent_searches.is_empty());
    }

    #[test]
    fn test_recall_recent_fills_query() {
        let mut state = AppState {
            recent_searches: vec!["hub".to_string(), "deep".to_string()],
            ..Default::default()
        };
        update(&mut state, Action::OpenPalette);
        update(&mut state, Action::RecallRecentSearch(1));
        assert_eq!(state.command_palette.as_ref().unwrap().query(), "deep");
        assert_eq!(state.palette_phase(), PalettePhase::OpenResults);
    }

    #[test]
    fn test_clear_recent() {
        let mut state = AppState {
            recent_searches: vec!["hub".to_string()],
            ..Default::default()
        };
        let cmd = update(&mut state, Action::ClearRecentSearches);
        assert_eq!(cmd, Some(Command::ClearRecentSearches));
        assert!(state.recent_searches.is_empty());
    }

    #[test]
    fn test_arrows_wrap_selection() {
        let mut state = open_with("ai");
        let len = state.command_palette.as_ref().unwrap().results.len();

        update(&mut state, Action::PalettePrev);
        assert_eq!(
            state.command_palette.as_ref().unwrap().selected_index,
            len - 1
        );
        update(&mut state, Action::PaletteNext);
        assert_eq!(state.command_palette.as_ref().unwrap().selected_index, 0);
    }

    #[test]
    fn test_recent_list_keeps_five_newest() {
        let mut state = AppState::default();
        for q in ["deep", "hub", "market", "settings", "deploy", "analytics"] {
            update(&mut state, Action::OpenPalette);
            type_text(&mut state, q);
            update(&mut state, Action::PaletteAccept);
        }
        assert_eq!(
            state.recent_searches,
            vec!["analytics", "deploy", "settings", "market", "hub"]
        );

        update(&mut state, Action::OpenPalette);
        type_text(&mut state, "hub");
        update(&mut state, Action::PaletteAccept);
        assert_eq!(state.recent_searches[0], "hub");
        assert_eq!(state.recent_searches.len(), 5);
    }
}
