use super::models::{Category, SearchEntry};
use super::search_index::SEARCH_INDEX;
use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;
use serde::{Deserialize, Serialize};
use triple_accel::levenshtein::{levenshtein_search_simd_with_opts, LEVENSHTEIN_COSTS};
use triple_accel::SearchType;

pub const SUGGESTION_LIMIT: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchOptions {
    /// Largest accepted `errors / query length`. 0.0 demands an exact
    /// substring, 1.0 accepts anything.
    pub threshold: f64,
    /// Queries shorter than this only match without errors.
    pub min_match_chars: usize,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            threshold: 0.3,
            min_match_chars: 2,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoredEntry<'a> {
    pub entry: &'a SearchEntry,
    pub distance: f64,
}

#[derive(Debug, Clone)]
pub struct SearchEngine {
    entries: &'static [SearchEntry],
    options: SearchOptions,
}

impl Default for SearchEngine {
    fn default() -> Self {
        Self::new(SEARCH_INDEX, SearchOptions::default())
    }
}

impl SearchEngine {
    #[must_use]
    pub fn new(entries: &'static [SearchEntry], options: SearchOptions) -> Self {
        Self {
            entries,
            options: SearchOptions {
                threshold: options.threshold.clamp(0.0, 1.0),
                ..options
            },
        }
    }

    #[must_use]
    pub fn entries(&self) -> &'static [SearchEntry] {
        self.entries
    }

    #[must_use]
    pub fn options(&self) -> SearchOptions {
        self.options
    }

    /// Ranked matches for `query`. A blank query browses the whole index in
    /// definition order.
    #[must_use]
    pub fn search(&self, query: &str) -> Vec<&'static SearchEntry> {
        self.score(query).into_iter().map(|s| s.entry).collect()
    }

    #[must_use]
    pub fn score(&self, query: &str) -> Vec<ScoredEntry<'static>> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return self
                .entries
                .iter()
                .map(|entry| ScoredEntry {
                    entry,
                    distance: 0.0,
                })
                .collect();
        }

        let mut scored: Vec<ScoredEntry<'static>> = self
            .entries
            .iter()
            .filter_map(|entry| {
                self.entry_distance(&needle, entry)
                    .map(|distance| ScoredEntry { entry, distance })
            })
            .collect();

        // Stable: equal distances keep index order.
        scored.sort_by(|a, b| a.distance.total_cmp(&b.distance));
        scored
    }

    /// Titles of the best few matches, for inline completion.
    #[must_use]
    pub fn suggestions(&self, query: &str) -> Vec<&'static str> {
        self.search(query)
            .into_iter()
            .take(SUGGESTION_LIMIT)
            .map(|e| e.title)
            .collect()
    }

    #[must_use]
    pub fn by_category(&self, category: Category) -> Vec<&'static SearchEntry> {
        self.entries
            .iter()
            .filter(|e| e.category == category)
            .collect()
    }

    fn entry_distance(&self, needle: &str, entry: &SearchEntry) -> Option<f64> {
        let len = needle.chars().count();
        let max_errors = if len < self.options.min_match_chars {
            0
        } else {
            (self.options.threshold * len as f64).floor() as u32
        };

        std::iter::once(entry.title)
            .chain(std::iter::once(entry.description))
            .chain(entry.keywords.iter().copied())
            .filter_map(|field| best_substring_errors(needle, &field.to_lowercase(), max_errors))
            .min()
            .map(|errors| f64::from(errors) / len as f64)
    }
}

/// Fewest edits turning `needle` into some substring of `text`, if that
/// stays within `max_errors`.
#[must_use]
pub fn best_substring_errors(needle: &str, text: &str, max_errors: u32) -> Option<u32> {
    if needle.is_empty() {
        return Some(0);
    }
    levenshtein_search_simd_with_opts(
        needle.as_bytes(),
        text.as_bytes(),
        max_errors,
        SearchType::Best,
        LEVENSHTEIN_COSTS,
        false,
    )
    .map(|m| m.k)
    .filter(|&k| k <= max_errors)
    .min()
}

/// Character positions of `text` to emphasise for `query`.
#[must_use]
pub fn highlight(query: &str, text: &str) -> Vec<usize> {
    let query = query.trim();
    if query.is_empty() {
        return Vec::new();
    }
    SkimMatcherV2::default()
        .ignore_case()
        .fuzzy_indices(text, query)
        .map(|(_, indices)| indices)
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paths(results: &[&SearchEntry]) -> Vec<&'static str> {
        results.iter().map(|e| e.path).collect()
    }

    #[test]
    fn test_best_substring_errors() {
        assert_eq!(best_substring_errors("deep", "deepwiki ide", 1), Some(0));
        assert_eq!(best_substring_errors("deep", "deploy", 1), Some(1));
        assert_eq!(best_substring_errors("hub", "hbu", 1), Some(1));
        assert_eq!(best_substring_errors("deep", "deploy", 0), None);
        assert_eq!(best_substring_errors("zzzzz", "marketplace", 1), None);
        assert_eq!(best_substring_errors("", "anything", 0), Some(0));
    }

    #[test]
    fn test_empty_query_returns_full_index_in_order() {
        let engine = SearchEngine::default();
        assert_eq!(engine.search(""), SEARCH_INDEX.iter().collect::<Vec<_>>());
        assert_eq!(engine.search("   \t"), SEARCH_INDEX.iter().collect::<Vec<_>>());
    }

    #[test]
    fn test_deep_ranks_deepwiki_first_and_excludes_marketplace() {
        let engine = SearchEngine::default();
        let results = paths(&engine.search("deep"));
        assert_eq!(results.first(), Some(&"/deepwiki"));
        assert!(!results.contains(&"/marketplace"));
    }

    #[test]
    fn test_nonsense_query_matches_nothing() {
        let engine = SearchEngine::default();
        assert!(engine.search("zzzzz").is_empty());
    }

    #[test]
    fn test_exact_title_substring_always_matches() {
        let engine = SearchEngine::default();
        for entry in SEARCH_INDEX {
            let fragment: String = entry.title.chars().take(5).collect();
            let results = engine.search(&fragment);
            assert!(
                results.iter().any(|e| e.id == entry.id),
                "{fragment:?} did not find {}",
                entry.id
            );
        }
    }

    #[test]
    fn test_minor_typo_tolerated() {
        let engine = SearchEngine::default();
        let results = paths(&engine.search("marketplcae"));
        assert_eq!(results.first(), Some(&"/marketplace"));
    }

    #[test]
    fn test_keyword_match() {
        let engine = SearchEngine::default();
        let results = paths(&engine.search("freelance"));
        assert_eq!(results.first(), Some(&"/marketplace"));
    }

    #[test]
    fn test_ties_keep_index_order() {
        let engine = SearchEngine::default();
        // "templates" is an exact keyword of both the hub and the templates page.
        let results = paths(&engine.search("templates"));
        let hub = results.iter().position(|p| *p == "/hub").unwrap();
        let templates = results.iter().position(|p| *p == "/hub/templates").unwrap();
        assert!(hub < templates);
    }

    #[test]
    fn test_short_query_requires_exact_match() {
        let engine = SearchEngine::default();
        let results = engine.search("q");
        assert!(results.is_empty());
    }

    #[test]
    fn test_zero_threshold_is_exact_substring() {
        let engine = SearchEngine::new(
            SEARCH_INDEX,
            SearchOptions {
                threshold: 0.0,
                min_match_chars: 2,
            },
        );
        assert!(engine.search("marketplcae").is_empty());
        assert_eq!(paths(&engine.search("market")), vec!["/marketplace"]);
    }

    #[test]
    fn test_search_is_deterministic() {
        let engine = SearchEngine::default();
        assert_eq!(engine.search("ai"), engine.search("ai"));
    }

    #[test]
    fn test_suggestions_capped() {
        let engine = SearchEngine::default();
        let suggestions = engine.suggestions("");
        assert_eq!(suggestions.len(), SUGGESTION_LIMIT);
        assert_eq!(suggestions[0], "DeepWiki IDE");
    }

    #[test]
    fn test_by_category() {
        let engine = SearchEngine::default();
        let pages: Vec<_> = engine
            .by_category(Category::Page)
            .iter()
            .map(|e| e.id)
            .collect();
        assert_eq!(pages, vec!["analytics", "settings"]);
    }

    #[test]
    fn test_highlight_indices() {
        assert_eq!(highlight("deep", "DeepWiki IDE"), vec![0, 1, 2, 3]);
        assert!(highlight("", "DeepWiki IDE").is_empty());
        assert!(highlight("zzz", "DeepWiki IDE").is_empty());
    }
}
