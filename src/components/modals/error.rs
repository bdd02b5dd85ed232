use crate::app::state::{ErrorSeverity, ErrorState};
use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Widget, Wrap},
};

use super::helpers::{draw_drop_shadow, top_anchored_rect};

pub struct ErrorModal<'a> {
    pub theme: &'a Theme,
    pub error: &'a ErrorState,
}

impl ErrorModal<'_> {
    fn heading(&self) -> (&'static str, Style) {
        match self.error.severity {
            ErrorSeverity::Info => (" NOTICE ", self.theme.header_item),
            ErrorSeverity::Warning => (" CHECK THIS ", self.theme.header_warn),
            ErrorSeverity::Error => (" COULD NOT GET THERE ", self.theme.status_error),
        }
    }

    fn body(&self, accent: Style) -> Vec<Line<'_>> {
        let mut lines = vec![
            Line::from(Span::styled(&self.error.message, self.theme.page_text)),
            Line::from(Span::styled(
                self.error.timestamp.format("at %H:%M:%S").to_string(),
                self.theme.dimmed,
            )),
        ];

        if !self.error.suggestions.is_empty() {
            lines.push(Line::from(""));
            lines.extend(self.error.suggestions.iter().map(|s| {
                Line::from(vec![
                    Span::styled("→ ", accent),
                    Span::styled(s.as_str(), self.theme.list_item),
                ])
            }));
        }

        lines.push(Line::from(""));
        lines.push(Line::from(vec![
            Span::styled(" Esc ", self.theme.footer_segment_key),
            Span::styled(" / ", self.theme.dimmed),
            Span::styled(" Enter ", self.theme.footer_segment_key),
            Span::styled(" dismiss", self.theme.dimmed),
        ]));
        lines
    }
}

impl Widget for ErrorModal<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let (title, accent) = self.heading();
        let body = self.body(accent);

        // Message, timestamp and hint plus borders; wrapping may add a few.
        let height = (body.len() as u16 + 4).min(area.height.saturating_sub(2));
        let modal_area = top_anchored_rect(50, area.height / 4, height, area).intersection(buf.area);
        if modal_area.width < 4 || modal_area.height < 3 {
            return;
        }

        draw_drop_shadow(buf, modal_area, area);
        Clear.render(modal_area, buf);

        let block = Block::default()
            .title(Span::styled(title, accent))
            .title_alignment(Alignment::Center)
            .borders(Borders::ALL)
            .border_type(BorderType::Thick)
            .border_style(accent);

        Paragraph::new(body)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(block)
            .render(modal_area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, Terminal};

    fn render(error: &ErrorState) -> String {
        let theme = Theme::default();
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        terminal
            .draw(|f| f.render_widget(ErrorModal { theme: &theme, error }, f.area()))
            .unwrap();
        let buf = terminal.backend().buffer();
        buf.content().iter().map(|c| c.symbol()).collect()
    }

    #[test]
    fn test_route_error_shows_recovery_hints() {
        let error = ErrorState::new("Unknown route: /nowhere", ErrorSeverity::Error);
        let screen = render(&error);
        assert!(screen.contains("COULD NOT GET THERE"));
        assert!(screen.contains("Unknown route: /nowhere"));
        assert!(screen.contains("return home"));
    }

    #[test]
    fn test_tiny_area_draws_nothing() {
        let theme = Theme::default();
        let error = ErrorState::new("boom", ErrorSeverity::Warning);
        let mut buf = Buffer::empty(Rect::new(0, 0, 3, 2));
        ErrorModal { theme: &theme, error: &error }.render(buf.area, &mut buf);
        assert!(buf.content().iter().all(|c| c.symbol() == " "));
    }
}
