use crate::app::state::{CommandPaletteState, PalettePhase};
use crate::domain::fuzzy::highlight;
use crate::theme::{glyphs, Theme};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Margin, Position, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Widget},
};

use super::helpers::{draw_drop_shadow, top_anchored_rect};

const PROMPT_WIDTH: u16 = 3;
const MAX_HEIGHT: u16 = 22;

/// What a single line of the palette body shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaletteRow {
    Heading(&'static str),
    Recent(usize),
    ClearRecent,
    Result(usize),
    NoMatch,
    Blank,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaletteHit {
    Outside,
    Inside,
    Row(PaletteRow),
}

pub struct PaletteLayout {
    pub modal: Rect,
    pub input: Rect,
    pub separator: Rect,
    pub list: Rect,
    pub hint: Rect,
}

/// The palette drops down over the search bar, like the bar itself expanded.
pub fn palette_layout(area: Rect) -> PaletteLayout {
    let height = area.height.saturating_sub(2).min(MAX_HEIGHT);
    let modal = top_anchored_rect(60, 1, height, area);
    let inner = modal.inner(Margin::new(1, 1));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Query input
            Constraint::Length(1), // Separator
            Constraint::Min(0),    // Rows
            Constraint::Length(1), // Hints
        ])
        .split(inner);

    PaletteLayout {
        modal,
        input: chunks[0],
        separator: chunks[1],
        list: chunks[2],
        hint: chunks[3],
    }
}

pub fn palette_rows(state: &CommandPaletteState, recent: &[String]) -> Vec<PaletteRow> {
    match state.phase() {
        PalettePhase::Closed => Vec::new(),
        PalettePhase::OpenNoMatch => vec![PaletteRow::NoMatch],
        PalettePhase::OpenResults => (0..state.results.len()).map(PaletteRow::Result).collect(),
        PalettePhase::OpenEmpty => {
            let mut rows = Vec::new();
            if !recent.is_empty() {
                rows.push(PaletteRow::Heading("Recent searches"));
                rows.extend((0..recent.len()).map(PaletteRow::Recent));
                rows.push(PaletteRow::ClearRecent);
                rows.push(PaletteRow::Blank);
            }
            rows.push(PaletteRow::Heading("Browse all"));
            rows.extend((0..state.results.len()).map(PaletteRow::Result));
            rows
        }
    }
}

/// First visible row, chosen so the selection stays on screen.
fn scroll_offset(state: &CommandPaletteState, rows: &[PaletteRow], height: u16) -> usize {
    if state.phase() != PalettePhase::OpenResults || height == 0 {
        return 0;
    }
    let selected_row = rows
        .iter()
        .position(|r| *r == PaletteRow::Result(state.selected_index))
        .unwrap_or(0);
    (selected_row + 1).saturating_sub(height as usize)
}

/// Maps a terminal position to the palette row under it.
pub fn hit_test(
    state: &CommandPaletteState,
    recent: &[String],
    area: Rect,
    position: Position,
) -> PaletteHit {
    let layout = palette_layout(area);
    if !layout.modal.contains(position) {
        return PaletteHit::Outside;
    }
    if !layout.list.contains(position) {
        return PaletteHit::Inside;
    }

    let rows = palette_rows(state, recent);
    let offset = scroll_offset(state, &rows, layout.list.height);
    let idx = offset + (position.y - layout.list.y) as usize;
    rows.get(idx)
        .copied()
        .map_or(PaletteHit::Inside, PaletteHit::Row)
}

fn highlighted_spans(text: &str, indices: &[usize], base: Style, hl: Style) -> Vec<Span<'static>> {
    let mut spans = Vec::new();
    let mut current = String::new();
    let mut current_hl = false;

    for (i, c) in text.chars().enumerate() {
        let is_hl = indices.contains(&i);
        if is_hl != current_hl && !current.is_empty() {
            let style = if current_hl { hl } else { base };
            spans.push(Span::styled(std::mem::take(&mut current), style));
        }
        current_hl = is_hl;
        current.push(c);
    }
    if !current.is_empty() {
        spans.push(Span::styled(current, if current_hl { hl } else { base }));
    }
    spans
}

pub struct CommandPaletteModal<'a> {
    pub theme: &'a Theme,
    pub state: &'a CommandPaletteState<'a>,
    pub recent: &'a [String],
}

impl CommandPaletteModal<'_> {
    fn row_line(&self, row: PaletteRow, query: &str) -> Line<'static> {
        let theme = self.theme;
        match row {
            PaletteRow::Heading(text) => Line::from(Span::styled(format!(" {text} "), theme.category)),
            PaletteRow::Blank => Line::from(""),
            PaletteRow::NoMatch => Line::from(Span::styled(
                format!("  No results found for \"{query}\""),
                theme.dimmed,
            )),
            PaletteRow::ClearRecent => Line::from(vec![
                Span::raw("  "),
                Span::styled(" Ctrl+L ", theme.footer_segment_key),
                Span::styled(" clear all", theme.dimmed),
            ]),
            PaletteRow::Recent(i) => {
                let text = self.recent.get(i).cloned().unwrap_or_default();
                Line::from(vec![
                    Span::styled(format!("  {} ", glyphs::HISTORY), theme.dimmed),
                    Span::styled(text, theme.list_item),
                ])
            }
            PaletteRow::Result(i) => {
                let Some(entry) = self.state.results.get(i) else {
                    return Line::from("");
                };
                let selected =
                    self.state.phase() == PalettePhase::OpenResults && i == self.state.selected_index;
                let (base, prefix) = if selected {
                    (theme.list_selected, format!(" {} ", glyphs::ARROW))
                } else {
                    (theme.list_item, "   ".to_string())
                };

                let mut spans = vec![Span::styled(prefix, base)];
                spans.extend(highlighted_spans(
                    entry.title,
                    &highlight(query, entry.title),
                    base,
                    base.patch(theme.match_highlight),
                ));
                spans.push(Span::styled(
                    format!("  {}", entry.description),
                    theme.dimmed,
                ));
                spans.push(Span::styled(format!("  {}", entry.path), theme.path));
                Line::from(spans)
            }
        }
    }
}

impl Widget for CommandPaletteModal<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let area = area.intersection(buf.area);
        let layout = palette_layout(area);
        if layout.modal.width < 3 || layout.modal.height < 3 {
            return;
        }

        draw_drop_shadow(buf, layout.modal, area);
        Clear.render(layout.modal, buf);

        let block = Block::default()
            .title(Line::from(vec![
                Span::raw(" "),
                Span::styled(" SEARCH ", self.theme.header_active),
                Span::raw(" "),
            ]))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(self.theme.border_focus);
        block.render(layout.modal, buf);

        // Query input
        if layout.input.width > PROMPT_WIDTH {
            buf.set_string(
                layout.input.x,
                layout.input.y,
                format!(" {} ", glyphs::SEARCH),
                self.theme.footer_segment_key,
            );
            let field = Rect {
                x: layout.input.x + PROMPT_WIDTH,
                width: layout.input.width - PROMPT_WIDTH,
                ..layout.input
            };
            Widget::render(&self.state.input, field, buf);
            if self.state.input.is_empty() {
                buf.set_string(
                    field.x + 1,
                    field.y,
                    "Search pages and features",
                    self.theme.dimmed,
                );
            }
        }

        // Separator
        let separator = "─".repeat(layout.separator.width as usize);
        buf.set_string(
            layout.separator.x,
            layout.separator.y,
            separator,
            self.theme.border_focus,
        );

        // Rows
        let query = self.state.query();
        let rows = palette_rows(self.state, self.recent);
        let offset = scroll_offset(self.state, &rows, layout.list.height);
        for (line_no, row) in rows
            .iter()
            .skip(offset)
            .take(layout.list.height as usize)
            .enumerate()
        {
            let line = self.row_line(*row, query.trim());
            buf.set_line(
                layout.list.x,
                layout.list.y + line_no as u16,
                &line,
                layout.list.width,
            );
        }

        // Hints
        if layout.hint.height > 0 {
            let hints = Line::from(vec![
                Span::styled(" ↑↓", self.theme.footer_segment_key),
                Span::styled(" navigate  ", self.theme.dimmed),
                Span::styled("Enter", self.theme.footer_segment_key),
                Span::styled(" open  ", self.theme.dimmed),
                Span::styled("Tab", self.theme.footer_segment_key),
                Span::styled(" recall  ", self.theme.dimmed),
                Span::styled("Esc", self.theme.footer_segment_key),
                Span::styled(" close", self.theme.dimmed.add_modifier(Modifier::ITALIC)),
            ]);
            buf.set_line(layout.hint.x, layout.hint.y, &hints, layout.hint.width);
        }
    }
}
