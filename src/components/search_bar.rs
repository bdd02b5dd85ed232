use crate::theme::{glyphs, Theme};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget},
};

/// The resting search field. Clicking it or pressing the open key brings up
/// the palette in its place.
pub struct SearchBar<'a> {
    pub theme: &'a Theme,
    pub open_hint: Option<String>,
    pub focused: bool,
}

impl Widget for SearchBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border = if self.focused {
            self.theme.border_focus
        } else {
            self.theme.border
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(border);

        let placeholder = match &self.open_hint {
            Some(key) => format!("Search or press {key} to start..."),
            None => "Search...".to_string(),
        };

        let mut spans = vec![
            Span::styled(format!(" {} ", glyphs::SEARCH), self.theme.footer_segment_key),
            Span::styled(format!(" {placeholder}"), self.theme.dimmed),
        ];
        if let Some(key) = self.open_hint {
            let used: usize = spans.iter().map(Span::width).sum();
            let pad = (area.width as usize)
                .saturating_sub(2)
                .saturating_sub(used + key.len() + 3);
            spans.push(Span::raw(" ".repeat(pad)));
            spans.push(Span::styled(format!(" {key} "), self.theme.keyword));
        }

        Paragraph::new(Line::from(spans))
            .block(block)
            .render(area, buf);
    }
}
