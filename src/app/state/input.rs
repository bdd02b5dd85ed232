use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::widgets::Widget;
use tui_textarea::{CursorMove, TextArea};

/// Single-line text field backed by `tui_textarea`.
#[derive(Default)]
pub struct QueryInput<'a>(TextArea<'a>);

impl QueryInput<'_> {
    #[must_use]
    pub fn text(&self) -> String {
        self.0.lines().concat()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.lines().iter().all(String::is_empty)
    }

    pub fn set_text(&mut self, text: &str) {
        let mut area = TextArea::default();
        area.insert_str(text.replace(['\n', '\r'], " "));
        self.0 = area;
    }

    pub fn clear(&mut self) {
        self.0 = TextArea::default();
    }

    /// Feeds a key to the field. Returns whether the text changed. Keys that
    /// would split the line are dropped.
    pub fn input(&mut self, key: KeyEvent) -> bool {
        let splits_line = matches!(key.code, KeyCode::Enter)
            || (key.modifiers.contains(KeyModifiers::CONTROL)
                && matches!(key.code, KeyCode::Char('m' | 'j')));
        if splits_line {
            return false;
        }
        let before = self.text();
        self.0.input(key);
        if self.0.lines().len() > 1 {
            let joined = self.text();
            self.set_text(&joined);
        }
        self.text() != before
    }

    #[must_use]
    pub fn cursor_column(&self) -> usize {
        self.0.cursor().1
    }
}

impl Clone for QueryInput<'_> {
    fn clone(&self) -> Self {
        let mut area = TextArea::new(self.0.lines().to_vec());
        let (row, col) = self.0.cursor();
        area.move_cursor(CursorMove::Jump(row as u16, col as u16));
        Self(area)
    }
}

impl std::fmt::Debug for QueryInput<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("QueryInput")
            .field("text", &self.text())
            .field("cursor", &self.0.cursor())
            .finish()
    }
}

impl PartialEq for QueryInput<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.0.lines() == other.0.lines() && self.0.cursor() == other.0.cursor()
    }
}

impl Widget for &QueryInput<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Widget::render(&self.0, area, buf);
    }
}
