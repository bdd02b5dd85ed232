mod groups;
mod types;

use crate::app::state::{AppMode, AppState};
use crate::theme::Theme;
pub use types::{FooterGroup, FooterItem};

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Modifier,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

pub struct Footer<'a> {
    pub state: &'a AppState<'a>,
    pub theme: &'a Theme,
}

impl<'a> Footer<'a> {
    fn status(&self) -> Span<'a> {
        let theme = self.theme;
        match (&self.state.last_error, self.state.mode) {
            (Some(_), _) => Span::styled("  ERROR  ", theme.status_error),
            (None, AppMode::CommandPalette) => Span::styled("  SEARCH  ", theme.status_info),
            (None, AppMode::Help) => Span::styled("  HELP  ", theme.status_info),
            (None, AppMode::Normal) => Span::styled("  READY  ", theme.status_ready),
        }
    }

    fn item_spans(&self, item: &FooterItem) -> [Span<'a>; 3] {
        let (key_style, desc_style) = if item.highlighted {
            (
                self.theme.header_active,
                self.theme.header_active.add_modifier(Modifier::DIM),
            )
        } else {
            (self.theme.footer_segment_key, self.theme.footer_segment_val)
        };
        [
            Span::styled(format!(" {} ", item.key), key_style),
            Span::styled(format!(" {} ", item.desc), desc_style),
            Span::raw(" "),
        ]
    }
}

impl Widget for Footer<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let budget = usize::from(area.width.saturating_sub(4));

        let mut spans = vec![
            self.status(),
            Span::raw(" "),
            Span::styled(format!(" {} ", self.state.route), self.theme.header_item),
            Span::raw("  "),
        ];
        let mut used: usize = spans.iter().map(Span::width).sum();

        // Groups are dropped whole from the right once the line is full;
        // within a group, items are dropped one at a time.
        'groups: for group in groups::get_groups(self.state) {
            let Some(first) = group.items.first() else {
                continue;
            };
            let first_width: usize = self.item_spans(first).iter().map(Span::width).sum();
            if used + first_width > budget {
                break;
            }

            if area.width > 100 {
                let label = Span::styled(format!("{}: ", group.name), self.theme.dimmed);
                if used + label.width() + first_width < budget {
                    used += label.width();
                    spans.push(label);
                }
            }

            for item in &group.items {
                let item_spans = self.item_spans(item);
                let width: usize = item_spans.iter().map(Span::width).sum();
                if used + width > budget {
                    break 'groups;
                }
                used += width;
                spans.extend(item_spans);
            }
            spans.push(Span::raw("  "));
            used += 2;
        }

        Paragraph::new(Line::from(spans))
            .style(self.theme.footer)
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::action::Action;
    use crate::app::reducer::update;
    use ratatui::{backend::TestBackend, Terminal};

    fn render(state: &AppState, width: u16) -> String {
        let theme = Theme::default();
        let mut terminal = Terminal::new(TestBackend::new(width, 1)).unwrap();
        terminal
            .draw(|f| {
                f.render_widget(
                    Footer {
                        state,
                        theme: &theme,
                    },
                    f.area(),
                )
            })
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_status_follows_mode() {
        let mut state = AppState::default();
        assert!(render(&state, 120).contains("READY"));

        update(&mut state, Action::OpenPalette);
        let line = render(&state, 120);
        assert!(line.contains("SEARCH"));
        assert!(line.contains("close"));
    }

    #[test]
    fn test_narrow_footer_drops_groups() {
        let state = AppState::default();
        let line = render(&state, 30);
        assert!(line.contains("READY"));
        assert!(!line.contains("quit"));
    }
}
