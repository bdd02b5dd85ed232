use crate::domain::models::Route;
use crate::domain::search_index::find_by_path;
use crate::theme::{glyphs, Theme};

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

pub struct Header<'a> {
    pub route: &'a Route,
    pub recent_count: usize,
    pub theme: &'a Theme,
}

impl Header<'_> {
    fn route_text(&self) -> String {
        if self.route.is_home() {
            return " Home ".to_string();
        }
        match find_by_path(&self.route.0) {
            Some(entry) => format!(" {} {} {} ", entry.category.label(), glyphs::ARROW, entry.title),
            None => format!(" {} ", self.route),
        }
    }
}

impl Widget for Header<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        // Segment background colors for separator transitions
        let logo_bg = self.theme.header_logo.bg.unwrap_or(Color::Reset);
        let route_bg = self.theme.header_route.bg.unwrap_or(Color::Reset);
        let stats_bg = self.theme.header_stats.bg.unwrap_or(Color::Reset);
        let base_bg = self.theme.header.bg.unwrap_or(Color::Reset);

        // Separator styles: fg = current segment bg, bg = next segment bg
        let sep_logo_route = Style::default().fg(logo_bg).bg(route_bg);
        let sep_route_stats = Style::default().fg(route_bg).bg(stats_bg);
        let sep_stats_base = Style::default().fg(stats_bg).bg(base_bg);

        let stats_text = match self.recent_count {
            0 => " no recent searches ".to_string(),
            1 => " 1 recent search ".to_string(),
            n => format!(" {n} recent searches "),
        };

        let spans = vec![
            Span::styled(format!(" {} WAYFINDER ", glyphs::LOGO), self.theme.header_logo),
            Span::styled(glyphs::SEP_RIGHT, sep_logo_route),
            Span::styled(self.route_text(), self.theme.header_route),
            Span::styled(glyphs::SEP_RIGHT, sep_route_stats),
            Span::styled(stats_text, self.theme.header_stats),
            Span::styled(glyphs::SEP_RIGHT, sep_stats_base),
            Span::styled(" ".repeat(area.width as usize), self.theme.header),
        ];

        Paragraph::new(Line::from(spans))
            .style(self.theme.header)
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn header(route: &str) -> String {
        let route = Route(route.to_string());
        let theme = Theme::default();
        Header {
            route: &route,
            recent_count: 0,
            theme: &theme,
        }
        .route_text()
    }

    #[test]
    fn test_route_breadcrumb() {
        assert_eq!(header("/"), " Home ");
        assert!(header("/analytics/training").contains("Components"));
        assert!(header("/analytics/training").contains("AI Training"));
        assert_eq!(header("/unlisted"), " /unlisted ");
    }
}
