use crate::domain::{models::Route, router::Router, search_index};
use anyhow::{anyhow, Result};
use std::collections::HashSet;
use std::sync::Mutex;

const MAX_HISTORY: usize = 50;

pub struct HistoryRouter {
    routes: HashSet<String>,
    history: Mutex<Vec<Route>>,
}

impl HistoryRouter {
    #[must_use]
    pub fn new() -> Self {
        Self::with_routes(search_index::known_routes())
    }

    pub fn with_routes<I, S>(routes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            routes: routes.into_iter().map(Into::into).collect(),
            history: Mutex::new(vec![Route::home()]),
        }
    }

    fn history(&self) -> Result<std::sync::MutexGuard<'_, Vec<Route>>> {
        self.history
            .lock()
            .map_err(|_| anyhow!("Navigation history is poisoned"))
    }
}

impl Default for HistoryRouter {
    fn default() -> Self {
        Self::new()
    }
}

impl Router for HistoryRouter {
    fn navigate(&self, path: &str) -> Result<Route> {
        if !self.routes.contains(path) {
            return Err(anyhow!("Unknown route: {path}"));
        }
        let route = Route(path.to_string());
        let mut history = self.history()?;
        if history.last() != Some(&route) {
            history.push(route.clone());
            if history.len() > MAX_HISTORY {
                history.remove(0);
            }
        }
        tracing::debug!(%route, depth = history.len(), "navigated");
        Ok(route)
    }

    fn back(&self) -> Result<Route> {
        let mut history = self.history()?;
        if history.len() > 1 {
            history.pop();
        }
        Ok(history.last().cloned().unwrap_or_else(Route::home))
    }

    fn current(&self) -> Route {
        self.history()
            .ok()
            .and_then(|h| h.last().cloned())
            .unwrap_or_else(Route::home)
    }
}
