use crate::app::{
    action::Action,
    state::{AppMode, AppState},
    ui,
};
use crate::components::modals::command_palette::{hit_test, PaletteHit, PaletteRow};
use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::{Position, Rect, Size};

pub fn map_event_to_action(
    event: Event,
    app_state: &AppState<'_>,
    terminal_size: Size,
) -> Option<Action> {
    if let Event::Key(key) = &event {
        if key.kind == KeyEventKind::Release {
            return None;
        }
    }
    if let Event::Resize(w, h) = event {
        return Some(Action::Resize(w, h));
    }

    let area = Rect::new(0, 0, terminal_size.width, terminal_size.height);

    // The error modal swallows everything until acknowledged.
    if app_state.last_error.is_some() {
        return match event {
            Event::Key(key) if matches!(key.code, KeyCode::Esc | KeyCode::Enter) => {
                Some(Action::Blur)
            }
            Event::Mouse(MouseEvent {
                kind: MouseEventKind::Down(MouseButton::Left),
                ..
            }) => Some(Action::Blur),
            _ => None,
        };
    }

    match app_state.mode {
        AppMode::CommandPalette => match event {
            Event::Key(key) => dispatch_shortcut(&key, app_state)
                .or_else(|| map_palette_key(key, app_state)),
            Event::Mouse(mouse) => map_palette_mouse(mouse, app_state, area),
            _ => None,
        },
        AppMode::Help => match event {
            Event::Key(key) => match key.code {
                KeyCode::Esc | KeyCode::Char('?' | 'q') => Some(Action::ToggleHelp),
                _ => None,
            },
            Event::Mouse(MouseEvent {
                kind: MouseEventKind::Down(MouseButton::Left),
                ..
            }) => Some(Action::ToggleHelp),
            _ => None,
        },
        AppMode::Normal => match event {
            Event::Key(key) => dispatch_shortcut(&key, app_state),
            Event::Mouse(mouse) => match mouse.kind {
                MouseEventKind::Down(MouseButton::Left) => {
                    let layout = ui::get_layout(area);
                    layout
                        .search_bar
                        .contains(Position::new(mouse.column, mouse.row))
                        .then_some(Action::OpenPalette)
                }
                _ => None,
            },
            _ => None,
        },
    }
}

/// Global shortcuts. While the query field has focus none of them fire and
/// the key falls through to the field.
fn dispatch_shortcut(key: &KeyEvent, app_state: &AppState<'_>) -> Option<Action> {
    app_state
        .keymap
        .dispatch(key, app_state.is_text_input_focused())
        .map(|shortcut| {
            Action::ShortcutTriggered(
                Box::new(shortcut.action.clone()),
                shortcut.description.to_string(),
            )
        })
}

fn map_palette_key(key: KeyEvent, app_state: &AppState<'_>) -> Option<Action> {
    match key.code {
        KeyCode::Esc => Some(Action::ClosePalette),
        KeyCode::Enter => Some(Action::PaletteAccept),
        KeyCode::Down => Some(Action::PaletteNext),
        KeyCode::Up => Some(Action::PalettePrev),
        KeyCode::Tab => {
            (!app_state.recent_searches.is_empty()).then_some(Action::RecallRecentSearch(0))
        }
        KeyCode::Char('l') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(Action::ClearRecentSearches)
        }
        _ => Some(Action::PaletteInput(key)),
    }
}

fn map_palette_mouse(mouse: MouseEvent, app_state: &AppState<'_>, area: Rect) -> Option<Action> {
    let cp = app_state.command_palette.as_ref()?;
    match mouse.kind {
        MouseEventKind::ScrollDown => Some(Action::PaletteNext),
        MouseEventKind::ScrollUp => Some(Action::PalettePrev),
        MouseEventKind::Down(MouseButton::Left) => {
            let position = Position::new(mouse.column, mouse.row);
            match hit_test(cp, &app_state.recent_searches, area, position) {
                PaletteHit::Outside => Some(Action::ClosePalette),
                PaletteHit::Row(PaletteRow::Result(i)) => Some(Action::PaletteAcceptIndex(i)),
                PaletteHit::Row(PaletteRow::Recent(i)) => Some(Action::RecallRecentSearch(i)),
                PaletteHit::Row(PaletteRow::ClearRecent) => Some(Action::ClearRecentSearches),
                PaletteHit::Row(_) | PaletteHit::Inside => None,
            }
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::reducer::update;
    use crate::app::state::PalettePhase;

    const SIZE: Size = Size {
        width: 100,
        height: 40,
    };

    fn key(code: KeyCode, modifiers: KeyModifiers) -> Event {
        Event::Key(KeyEvent::new(code, modifiers))
    }

    fn click(column: u16, row: u16) -> Event {
        Event::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        })
    }

    fn press(state: &mut AppState<'_>, event: Event) {
        if let Some(action) = map_event_to_action(event, state, SIZE) {
            update(state, action);
        }
    }

    #[test]
    fn test_slash_opens_palette_from_normal() {
        let state = AppState::default();
        let action = map_event_to_action(key(KeyCode::Char('/'), KeyModifiers::NONE), &state, SIZE);
        assert!(matches!(
            action,
            Some(Action::ShortcutTriggered(ref inner, _)) if **inner == Action::OpenPalette
        ));
    }

    #[test]
    fn test_slash_is_typed_while_palette_open() {
        let mut state = AppState::default();
        press(&mut state, key(KeyCode::Char('k'), KeyModifiers::CONTROL));
        assert_eq!(state.palette_phase(), PalettePhase::OpenEmpty);

        let action = map_event_to_action(key(KeyCode::Char('/'), KeyModifiers::NONE), &state, SIZE)
            .unwrap();
        assert!(matches!(action, Action::PaletteInput(_)));
        update(&mut state, action);
        assert_eq!(state.command_palette.as_ref().unwrap().query(), "/");
    }

    #[test]
    fn test_ctrl_shortcuts_do_not_fire_while_typing() {
        let mut state = AppState::default();
        press(&mut state, key(KeyCode::Char('/'), KeyModifiers::NONE));
        let action =
            map_event_to_action(key(KeyCode::Char('d'), KeyModifiers::CONTROL), &state, SIZE);
        assert!(matches!(action, Some(Action::PaletteInput(_))));
    }

    #[test]
    fn test_suppression_follows_field_focus() {
        let mut state = AppState::default();
        // Palette mode without a query field: nothing holds the keystrokes.
        state.mode = AppMode::CommandPalette;
        assert!(!state.is_text_input_focused());
        let action =
            map_event_to_action(key(KeyCode::Char('d'), KeyModifiers::CONTROL), &state, SIZE);
        assert!(matches!(
            action,
            Some(Action::ShortcutTriggered(ref inner, _))
                if **inner == Action::Navigate("/deepwiki".to_string())
        ));
    }

    #[test]
    fn test_palette_keys() {
        let mut state = AppState::default();
        press(&mut state, key(KeyCode::Char('/'), KeyModifiers::NONE));

        let map = |code, modifiers, state: &AppState<'_>| {
            map_event_to_action(key(code, modifiers), state, SIZE)
        };
        assert_eq!(
            map(KeyCode::Esc, KeyModifiers::NONE, &state),
            Some(Action::ClosePalette)
        );
        assert_eq!(
            map(KeyCode::Enter, KeyModifiers::NONE, &state),
            Some(Action::PaletteAccept)
        );
        assert_eq!(
            map(KeyCode::Down, KeyModifiers::NONE, &state),
            Some(Action::PaletteNext)
        );
        assert_eq!(
            map(KeyCode::Up, KeyModifiers::NONE, &state),
            Some(Action::PalettePrev)
        );
        assert_eq!(
            map(KeyCode::Char('l'), KeyModifiers::CONTROL, &state),
            Some(Action::ClearRecentSearches)
        );
        // Nothing to recall yet.
        assert_eq!(map(KeyCode::Tab, KeyModifiers::NONE, &state), None);

        state.recent_searches = vec!["hub".to_string()];
        assert_eq!(
            map(KeyCode::Tab, KeyModifiers::NONE, &state),
            Some(Action::RecallRecentSearch(0))
        );
    }

    #[test]
    fn test_escape_closes_open_palette() {
        let mut state = AppState::default();
        press(&mut state, key(KeyCode::Char('/'), KeyModifiers::NONE));
        press(&mut state, key(KeyCode::Esc, KeyModifiers::NONE));
        assert_eq!(state.palette_phase(), PalettePhase::Closed);
        assert_eq!(state.mode, AppMode::Normal);
    }

    #[test]
    fn test_click_outside_closes_palette() {
        let mut state = AppState::default();
        press(&mut state, key(KeyCode::Char('/'), KeyModifiers::NONE));
        press(&mut state, click(0, SIZE.height - 1));
        assert_eq!(state.palette_phase(), PalettePhase::Closed);
    }

    #[test]
    fn test_click_on_search_bar_opens_palette() {
        let mut state = AppState::default();
        let bar = ui::get_layout(Rect::new(0, 0, SIZE.width, SIZE.height)).search_bar;
        press(&mut state, click(bar.x + bar.width / 2, bar.y + bar.height / 2));
        assert_eq!(state.palette_phase(), PalettePhase::OpenEmpty);
    }

    #[test]
    fn test_help_mode_keys() {
        let mut state = AppState::default();
        press(&mut state, key(KeyCode::Char('?'), KeyModifiers::NONE));
        assert_eq!(state.mode, AppMode::Help);
        // Global shortcuts stay quiet under the overlay.
        assert_eq!(
            map_event_to_action(key(KeyCode::Char('d'), KeyModifiers::CONTROL), &state, SIZE),
            None
        );
        press(&mut state, key(KeyCode::Esc, KeyModifiers::NONE));
        assert_eq!(state.mode, AppMode::Normal);
    }

    #[test]
    fn test_error_modal_swallows_keys() {
        let mut state = AppState::default();
        update(&mut state, Action::ErrorOccurred("Unknown route: /x".into()));
        assert_eq!(
            map_event_to_action(key(KeyCode::Char('q'), KeyModifiers::NONE), &state, SIZE),
            None
        );
        press(&mut state, key(KeyCode::Esc, KeyModifiers::NONE));
        assert!(state.last_error.is_none());
    }

    #[test]
    fn test_key_release_ignored() {
        let state = AppState::default();
        let mut event = KeyEvent::new(KeyCode::Char('/'), KeyModifiers::NONE);
        event.kind = KeyEventKind::Release;
        assert_eq!(map_event_to_action(Event::Key(event), &state, SIZE), None);
    }
}
