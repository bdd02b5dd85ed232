use crate::infrastructure::storage::KeyValueStore;
use std::path::PathBuf;
use std::sync::Arc;

pub const RECENT_SEARCHES_KEY: &str = "recentSearches";
pub const MAX_RECENT_SEARCHES: usize = 5;

pub fn get_data_dir() -> Option<PathBuf> {
    home::home_dir().map(|mut path| {
        path.push(".config");
        path.push("wayfinder");
        path
    })
}

/// Front-insert `query`, dropping any earlier identical entry, capped.
pub fn push_recent(list: &mut Vec<String>, query: &str) {
    list.retain(|q| q != query);
    list.insert(0, query.to_string());
    list.truncate(MAX_RECENT_SEARCHES);
}

/// Capped history of accepted queries. Every failure is logged and
/// swallowed: history is a convenience, search must keep working without it.
#[derive(Clone)]
pub struct RecentSearches {
    store: Arc<dyn KeyValueStore>,
}

impl RecentSearches {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    pub fn get_recent(&self) -> Vec<String> {
        let raw = match self.store.get_item(RECENT_SEARCHES_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(e) => {
                tracing::warn!(error = %e, "failed to read recent searches");
                return Vec::new();
            }
        };

        match serde_json::from_str::<Vec<String>>(&raw) {
            Ok(mut list) => {
                list.truncate(MAX_RECENT_SEARCHES);
                list
            }
            Err(e) => {
                tracing::warn!(error = %e, "discarding malformed recent searches");
                Vec::new()
            }
        }
    }

    pub fn save_recent(&self, query: &str) {
        let mut list = self.get_recent();
        push_recent(&mut list, query);

        let encoded = match serde_json::to_string(&list) {
            Ok(encoded) => encoded,
            Err(e) => {
                tracing::warn!(error = %e, "failed to encode recent searches");
                return;
            }
        };
        if let Err(e) = self.store.set_item(RECENT_SEARCHES_KEY, &encoded) {
            tracing::warn!(error = %e, "failed to save recent search");
        }
    }

    pub fn clear_recent(&self) {
        if let Err(e) = self.store.remove_item(RECENT_SEARCHES_KEY) {
            tracing::warn!(error = %e, "failed to clear recent searches");
        }
    }
}
