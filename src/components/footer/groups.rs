use super::types::{FooterGroup, FooterItem};
use crate::app::action::Action;
use crate::app::state::{AppMode, AppState, PalettePhase};

pub fn get_groups(state: &AppState) -> Vec<FooterGroup> {
    if state.last_error.is_some() {
        return vec![FooterGroup {
            name: "ERROR",
            items: vec![FooterItem::new("Esc", "dismiss")],
        }];
    }

    let label = |action: Action, fallback: &str| {
        state
            .keymap
            .label_for(&action)
            .unwrap_or_else(|| fallback.to_string())
    };

    match state.mode {
        AppMode::Normal => vec![
            FooterGroup {
                name: "SEARCH",
                items: vec![FooterItem::new(label(Action::OpenPalette, "/"), "search")],
            },
            FooterGroup {
                name: "GO",
                items: vec![
                    FooterItem::new(label(Action::Navigate("/".to_string()), "Ctrl+h"), "home"),
                    FooterItem::new(label(Action::NavigateBack, "Alt+←"), "back")
                        .highlighted(!state.route.is_home()),
                ],
            },
            FooterGroup {
                name: "APP",
                items: vec![
                    FooterItem::new(label(Action::ToggleHelp, "?"), "help"),
                    FooterItem::new(label(Action::Quit, "q"), "quit"),
                ],
            },
        ],
        AppMode::CommandPalette => {
            let has_results = state.palette_phase() == PalettePhase::OpenResults;
            vec![FooterGroup {
                name: "SEARCH",
                items: vec![
                    FooterItem::new("↑↓", "move").highlighted(has_results),
                    FooterItem::new("Enter", "open").highlighted(has_results),
                    FooterItem::new("Tab", "recall"),
                    FooterItem::new("Ctrl+L", "clear"),
                    FooterItem::new("Esc", "close"),
                ],
            }]
        }
        AppMode::Help => vec![FooterGroup {
            name: "HELP",
            items: vec![FooterItem::new("Esc", "close")],
        }],
    }
}
