use super::input::QueryInput;
use crate::domain::fuzzy::SearchEngine;
use crate::domain::models::SearchEntry;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PalettePhase {
    Closed,
    OpenEmpty,
    OpenResults,
    OpenNoMatch,
}

/// One open palette: the query, its ranked results, and the selection.
#[derive(Debug, Clone, PartialEq)]
pub struct CommandPaletteState<'a> {
    pub input: QueryInput<'a>,
    pub results: Vec<&'static SearchEntry>,
    pub selected_index: usize,
}

impl CommandPaletteState<'_> {
    #[must_use]
    pub fn open(engine: &SearchEngine) -> Self {
        Self {
            input: QueryInput::default(),
            results: engine.search(""),
            selected_index: 0,
        }
    }

    #[must_use]
    pub fn query(&self) -> String {
        self.input.text()
    }

    #[must_use]
    pub fn has_query(&self) -> bool {
        !self.query().trim().is_empty()
    }

    #[must_use]
    pub fn phase(&self) -> PalettePhase {
        if !self.has_query() {
            PalettePhase::OpenEmpty
        } else if self.results.is_empty() {
            PalettePhase::OpenNoMatch
        } else {
            PalettePhase::OpenResults
        }
    }

    /// Re-ranks after the query text changed. Selection goes back to the top.
    pub fn refresh(&mut self, engine: &SearchEngine) {
        self.results = engine.search(&self.query());
        self.selected_index = 0;
    }

    pub fn set_query(&mut self, query: &str, engine: &SearchEngine) {
        self.input.set_text(query);
        self.refresh(engine);
    }

    pub fn select_next(&mut self) {
        if self.phase() == PalettePhase::OpenResults {
            self.selected_index = (self.selected_index + 1) % self.results.len();
        }
    }

    pub fn select_prev(&mut self) {
        if self.phase() == PalettePhase::OpenResults {
            let len = self.results.len();
            self.selected_index = (self.selected_index + len - 1) % len;
        }
    }

    #[must_use]
    pub fn selected(&self) -> Option<&'static SearchEntry> {
        self.results.get(self.selected_index).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opens_empty_with_full_index() {
        let engine = SearchEngine::default();
        let cp = CommandPaletteState::open(&engine);
        assert_eq!(cp.phase(), PalettePhase::OpenEmpty);
        assert_eq!(cp.results.len(), engine.entries().len());
    }

    #[test]
    fn test_phase_follows_query() {
        let engine = SearchEngine::default();
        let mut cp = CommandPaletteState::open(&engine);

        cp.set_query("deep", &engine);
        assert_eq!(cp.phase(), PalettePhase::OpenResults);

        cp.set_query("zzzzz", &engine);
        assert_eq!(cp.phase(), PalettePhase::OpenNoMatch);

        cp.set_query("   ", &engine);
        assert_eq!(cp.phase(), PalettePhase::OpenEmpty);
    }

    #[test]
    fn test_selection_wraps_both_ways() {
        let engine = SearchEngine::default();
        let mut cp = CommandPaletteState::open(&engine);
        cp.set_query("ai", &engine);
        let len = cp.results.len();
        assert!(len > 1);

        cp.selected_index = len - 1;
        cp.select_next();
        assert_eq!(cp.selected_index, 0);

        cp.select_prev();
        assert_eq!(cp.selected_index, len - 1);
    }

    #[test]
    fn test_selection_is_inert_without_results() {
        let engine = SearchEngine::default();
        let mut cp = CommandPaletteState::open(&engine);
        cp.select_next();
        assert_eq!(cp.selected_index, 0);

        cp.set_query("zzzzz", &engine);
        cp.select_prev();
        assert_eq!(cp.selected_index, 0);
    }

    #[test]
    fn test_query_change_resets_selection() {
        let engine = SearchEngine::default();
        let mut cp = CommandPaletteState::open(&engine);
        cp.set_query("ai", &engine);
        cp.select_next();
        assert_eq!(cp.selected_index, 1);
        cp.set_query("ai t", &engine);
        assert_eq!(cp.selected_index, 0);
    }
}
