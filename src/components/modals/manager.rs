use crate::app::state::{AppMode, AppState};
use crate::theme::Theme;
use ratatui::{buffer::Buffer, layout::Rect, widgets::Widget};

use super::command_palette::CommandPaletteModal;
use super::error::ErrorModal;
use super::help::HelpModal;
use super::helpers::dim_area;

/// Draws whichever overlays are active, innermost last.
pub struct ModalManager<'a> {
    pub theme: &'a Theme,
    pub app_state: &'a AppState<'a>,
}

impl Widget for ModalManager<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let is_modal_active =
            self.app_state.mode != AppMode::Normal || self.app_state.last_error.is_some();

        if is_modal_active {
            dim_area(buf, area);
        }

        if let (AppMode::CommandPalette, Some(cp)) =
            (self.app_state.mode, &self.app_state.command_palette)
        {
            CommandPaletteModal {
                theme: self.theme,
                state: cp,
                recent: &self.app_state.recent_searches,
            }
            .render(area, buf);
        }

        if self.app_state.mode == AppMode::Help {
            HelpModal {
                theme: self.theme,
                keymap: &self.app_state.keymap,
            }
            .render(area, buf);
        }

        if let Some(err) = &self.app_state.last_error {
            ErrorModal {
                theme: self.theme,
                error: err,
            }
            .render(area, buf);
        }
    }
}
