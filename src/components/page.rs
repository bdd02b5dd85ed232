use crate::domain::fuzzy::SearchEngine;
use crate::domain::models::{Category, Route, SearchEntry};
use crate::domain::search_index::find_by_path;
use crate::theme::{glyphs, Theme};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget, Wrap},
};

/// Body of the shell: a directory on the home route, the destination's
/// summary everywhere else.
pub struct PageView<'a> {
    pub route: &'a Route,
    pub search: &'a SearchEngine,
    pub theme: &'a Theme,
}

impl PageView<'_> {
    fn home_lines(&self) -> Vec<Line<'static>> {
        let mut lines = vec![Line::from("")];
        for category in Category::all() {
            lines.push(Line::from(Span::styled(
                format!(" {} ", category.label()),
                self.theme.category,
            )));
            for entry in self.search.by_category(*category) {
                lines.push(Line::from(vec![
                    Span::styled(format!("   {:<22}", entry.title), self.theme.list_item),
                    Span::styled(entry.path, self.theme.path),
                ]));
            }
            lines.push(Line::from(""));
        }
        lines
    }

    fn entry_lines(&self, entry: &SearchEntry) -> Vec<Line<'static>> {
        let keywords: Vec<Span> = entry
            .keywords
            .iter()
            .flat_map(|k| {
                [
                    Span::styled(format!(" {k} "), self.theme.keyword),
                    Span::raw(" "),
                ]
            })
            .collect();

        vec![
            Line::from(""),
            Line::from(Span::styled(format!(" {}", entry.title), self.theme.page_title)),
            Line::from(Span::styled(
                format!(" {}", entry.description),
                self.theme.page_text,
            )),
            Line::from(""),
            Line::from(vec![
                Span::styled(format!(" {} ", entry.category.label()), self.theme.category),
                Span::styled(format!("{} {}", glyphs::ARROW, entry.path), self.theme.path),
            ]),
            Line::from(""),
            Line::from(std::iter::once(Span::raw(" ")).chain(keywords).collect::<Vec<_>>()),
        ]
    }

    fn not_found_lines(&self) -> Vec<Line<'static>> {
        let mut lines = vec![
            Line::from(""),
            Line::from(Span::styled(" Page not found", self.theme.page_title)),
            Line::from(Span::styled(
                format!(" Nothing lives at {}", self.route),
                self.theme.page_text,
            )),
        ];

        // Guess from the last path segment, e.g. "/deep" or "/hub/templ".
        let guess = self.route.0.rsplit('/').find(|s| !s.is_empty()).unwrap_or("");
        let suggestions = self.search.suggestions(guess);
        if !guess.is_empty() && !suggestions.is_empty() {
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(" Did you mean", self.theme.dimmed)));
            lines.extend(suggestions.into_iter().map(|title| {
                Line::from(vec![
                    Span::styled(format!("   {} ", glyphs::ARROW), self.theme.path),
                    Span::styled(title, self.theme.list_item),
                ])
            }));
        }
        lines
    }
}

impl Widget for PageView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let title = if self.route.is_home() {
            "HOME".to_string()
        } else {
            self.route.to_string()
        };
        let block = Block::default()
            .title(Line::from(vec![
                Span::raw(" "),
                Span::styled(title, self.theme.header_item),
                Span::raw(" "),
            ]))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(self.theme.border);

        let lines = if self.route.is_home() {
            self.home_lines()
        } else if let Some(entry) = find_by_path(&self.route.0) {
            self.entry_lines(entry)
        } else {
            self.not_found_lines()
        };

        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .block(block)
            .render(area, buf);
    }
}
