use super::models::Route;
use anyhow::Result;

/// Client-side navigation boundary. Implementations switch the visible page
/// without tearing down the shell.
#[cfg_attr(test, mockall::automock)]
pub trait Router: Send + Sync {
    fn navigate(&self, path: &str) -> Result<Route>;

    /// Pops the history stack, returning the route now on top.
    fn back(&self) -> Result<Route>;

    fn current(&self) -> Route;
}
