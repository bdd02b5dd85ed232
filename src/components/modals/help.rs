use crate::app::keymap::ShortcutRegistry;
use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Rect},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Cell, Clear, Row, Table, Widget},
};

use super::helpers::{centered_rect, draw_drop_shadow};

const PALETTE_KEYS: &[(&str, &str)] = &[
    ("↑ / ↓", "Move selection"),
    ("Enter", "Open selected result"),
    ("Tab", "Recall latest search"),
    ("Ctrl+L", "Clear recent searches"),
    ("Esc", "Close search"),
];

pub struct HelpModal<'a> {
    pub theme: &'a Theme,
    pub keymap: &'a ShortcutRegistry,
}

impl Widget for HelpModal<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let help_area = centered_rect(70, 80, area).intersection(buf.area);
        if help_area.width == 0 || help_area.height == 0 {
            return;
        }
        draw_drop_shadow(buf, help_area, area);
        Clear.render(help_area, buf);

        let block = Block::default()
            .title(Line::from(vec![
                Span::raw(" "),
                Span::styled(" HELP - KEYBINDINGS ", self.theme.header_active),
                Span::raw(" "),
            ]))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(self.theme.border_focus);

        let key_style = self.theme.footer_segment_key;
        let desc_style = self.theme.list_item;
        let category_style = self.theme.header_item;

        let heading = |name: &'static str| {
            Row::new(vec![
                Cell::from(Span::styled(name, category_style)),
                Cell::from(""),
            ])
        };

        let mut rows = vec![heading("Anywhere")];
        rows.extend(self.keymap.iter().map(|shortcut| {
            Row::new(vec![
                Cell::from(Span::styled(format!(" {}", shortcut.label()), key_style)),
                Cell::from(Span::styled(shortcut.description, desc_style)),
            ])
        }));
        rows.push(Row::new(vec![Cell::from(""), Cell::from("")]));
        rows.push(heading("In the search palette"));
        rows.extend(PALETTE_KEYS.iter().map(|(key, desc)| {
            Row::new(vec![
                Cell::from(Span::styled(format!(" {key}"), key_style)),
                Cell::from(Span::styled(*desc, desc_style)),
            ])
        }));

        let table = Table::new(
            rows,
            [Constraint::Percentage(30), Constraint::Percentage(70)],
        )
        .block(block);

        table.render(help_area, buf);
    }
}
