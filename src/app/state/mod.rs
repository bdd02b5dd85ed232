use super::keymap::ShortcutRegistry;
use crate::domain::fuzzy::SearchEngine;
use crate::domain::models::Route;
use std::sync::Arc;

pub mod command_palette;
pub mod error;
pub mod input;
pub mod toast;

// Re-exports
pub use command_palette::{CommandPaletteState, PalettePhase};
pub use error::{ErrorSeverity, ErrorState};
pub use input::QueryInput;
pub use toast::{Toast, ToastStore};

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum AppMode {
    Normal,         // Browsing the current page
    CommandPalette, // Query field has focus
    Help,           // Showing the shortcut overlay
}

pub struct AppState<'a> {
    // --- Lifecycle & Status ---
    pub should_quit: bool,
    pub mode: AppMode,
    pub last_error: Option<ErrorState>,

    // --- Navigation ---
    pub route: Route,

    // --- Command Palette ---
    pub command_palette: Option<CommandPaletteState<'a>>,
    pub recent_searches: Vec<String>,

    // --- Notifications ---
    pub toasts: ToastStore,

    // --- Animation ---
    pub frame_count: u64,

    // --- Config ---
    pub keymap: Arc<ShortcutRegistry>,
    pub search: Arc<SearchEngine>,
    pub theme: crate::theme::Theme,
}

impl AppState<'_> {
    #[must_use]
    pub fn new(
        keymap: ShortcutRegistry,
        search: SearchEngine,
        theme: crate::theme::Theme,
        recent_searches: Vec<String>,
    ) -> Self {
        Self {
            keymap: Arc::new(keymap),
            search: Arc::new(search),
            theme,
            recent_searches,
            ..Default::default()
        }
    }

    #[must_use]
    pub fn palette_phase(&self) -> PalettePhase {
        self.command_palette
            .as_ref()
            .map_or(PalettePhase::Closed, CommandPaletteState::phase)
    }

    /// Surfaces a rejected setting in the error modal, recovery hints included.
    pub fn report_config_error(&mut self, message: impl Into<String>) {
        self.last_error = Some(ErrorState::new(message, ErrorSeverity::Warning));
    }

    /// Whether keystrokes currently belong to a text field.
    #[must_use]
    pub fn is_text_input_focused(&self) -> bool {
        self.mode == AppMode::CommandPalette && self.command_palette.is_some()
    }
}

impl Default for AppState<'_> {
    fn default() -> Self {
        Self {
            should_quit: false,
            mode: AppMode::Normal,
            last_error: None,
            route: Route::home(),
            command_palette: None,
            recent_searches: Vec::new(),
            toasts: ToastStore::default(),
            frame_count: 0,
            keymap: Arc::new(ShortcutRegistry::with_defaults()),
            search: Arc::new(SearchEngine::default()),
            theme: crate::theme::Theme::default(),
        }
    }
}
