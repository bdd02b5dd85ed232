use crate::app::command::Command;
use crate::domain::models::Route;

#[derive(Debug, Clone)]
pub enum UpdateResult {
    Handled(Option<Command>),
    NotHandled,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    // --- System / Terminal ---
    Tick,
    Resize(u16, u16),
    Quit,

    // --- Keyboard Shortcuts ---
    ShortcutTriggered(Box<Action>, String), // Bound action + description for the toast

    // --- Command Palette ---
    OpenPalette,                              // Open key, Ctrl+K, or click on the search bar
    ClosePalette,                             // Esc or click outside
    PaletteInput(crossterm::event::KeyEvent), // Edit the query text
    PaletteNext,                              // Arrow down
    PalettePrev,                              // Arrow up
    PaletteAccept,                            // Enter on the selected result
    PaletteAcceptIndex(usize),                // Click on a result row
    RecallRecentSearch(usize),                // Copy a recent search into the query
    ClearRecentSearches,                      // Ctrl+L or click on "clear all"

    // --- Navigation ---
    Navigate(String),
    NavigateBack,

    // --- UI ---
    ToggleHelp,
    Blur, // Close overlays / acknowledge errors

    // --- Async Results ---
    RouteChanged(Route),
    RecentSearchesLoaded(Vec<String>),
    ErrorOccurred(String),
    ExternalChangeDetected, // Another instance rewrote the history file
}
