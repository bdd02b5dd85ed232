/// Side effects requested by the reducer and executed by the runtime.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Navigate(String),
    NavigateBack,
    SaveRecentSearch(String),
    ClearRecentSearches,
    ReloadRecentSearches,
    Batch(Vec<Command>),
}
