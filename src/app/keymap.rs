use super::action::Action;
use super::config::KeyConfig;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KeymapError {
    #[error("{chord} is already bound to \"{existing}\"")]
    Conflict {
        chord: String,
        existing: &'static str,
    },
    #[error("unknown key name: {0:?}")]
    UnknownKey(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Shortcut {
    pub key: KeyCode,
    pub ctrl: bool,
    pub shift: bool,
    pub alt: bool,
    pub action: Action,
    pub description: &'static str,
}

impl Shortcut {
    #[must_use]
    pub fn new(key: KeyCode, action: Action, description: &'static str) -> Self {
        Self {
            key,
            ctrl: false,
            shift: false,
            alt: false,
            action,
            description,
        }
    }

    #[must_use]
    pub fn ctrl(mut self) -> Self {
        self.ctrl = true;
        self
    }

    #[must_use]
    pub fn shift(mut self) -> Self {
        self.shift = true;
        self
    }

    #[must_use]
    pub fn alt(mut self) -> Self {
        self.alt = true;
        self
    }

    fn chord(&self) -> (KeyCode, bool, bool, bool) {
        (self.key, self.ctrl, self.shift, self.alt)
    }

    /// Exact match: same key, and every modifier flag equal to the event's.
    #[must_use]
    pub fn matches(&self, event: &KeyEvent) -> bool {
        self.key == event.code
            && self.ctrl == event.modifiers.contains(KeyModifiers::CONTROL)
            && self.shift == event.modifiers.contains(KeyModifiers::SHIFT)
            && self.alt == event.modifiers.contains(KeyModifiers::ALT)
    }

    /// Human readable chord, e.g. "Ctrl+K".
    #[must_use]
    pub fn label(&self) -> String {
        let mut label = String::new();
        if self.ctrl {
            label.push_str("Ctrl+");
        }
        if self.alt {
            label.push_str("Alt+");
        }
        if self.shift {
            label.push_str("Shift+");
        }
        label.push_str(&key_name(self.key));
        label
    }
}

#[derive(Debug, Clone, Default)]
pub struct ShortcutRegistry {
    shortcuts: Vec<Shortcut>,
}

impl ShortcutRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        for shortcut in default_shortcuts() {
            let registered = registry.register(shortcut);
            debug_assert!(registered.is_ok(), "default shortcuts collide: {registered:?}");
            if let Err(e) = registered {
                tracing::error!(error = %e, "default shortcut dropped");
            }
        }
        registry
    }

    /// Builds the default table with the palette key rebound from config.
    /// On a bad binding the defaults are kept and the error is returned
    /// alongside so the caller can report it.
    #[must_use]
    pub fn from_config(config: &KeyConfig) -> (Self, Option<KeymapError>) {
        let defaults = Self::with_defaults();
        if config.open_palette == KeyConfig::default().open_palette {
            return (defaults, None);
        }

        let key = match parse_key(&config.open_palette) {
            Ok(key) => key,
            Err(e) => return (defaults, Some(e)),
        };

        let mut rebound = Self::new();
        for shortcut in default_shortcuts() {
            let shortcut = if shortcut.action == Action::OpenPalette && !shortcut.ctrl {
                Shortcut { key, ..shortcut }
            } else {
                shortcut
            };
            if let Err(e) = rebound.register(shortcut) {
                return (defaults, Some(e));
            }
        }
        (rebound, None)
    }

    /// Adds a shortcut, refusing chords that are already taken.
    pub fn register(&mut self, shortcut: Shortcut) -> Result<(), KeymapError> {
        if let Some(existing) = self.shortcuts.iter().find(|s| s.chord() == shortcut.chord()) {
            return Err(KeymapError::Conflict {
                chord: shortcut.label(),
                existing: existing.description,
            });
        }
        self.shortcuts.push(shortcut);
        Ok(())
    }

    /// Finds the shortcut bound to `event`. Nothing fires while a text field
    /// has focus, not even the palette key.
    #[must_use]
    pub fn dispatch(&self, event: &KeyEvent, text_input_focused: bool) -> Option<&Shortcut> {
        if text_input_focused || event.kind == KeyEventKind::Release {
            return None;
        }
        let found = self.shortcuts.iter().find(|s| s.matches(event));
        if let Some(shortcut) = found {
            tracing::debug!(chord = %shortcut.label(), "shortcut matched");
        }
        found
    }

    pub fn iter(&self) -> impl Iterator<Item = &Shortcut> {
        self.shortcuts.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.shortcuts.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.shortcuts.is_empty()
    }

    /// Label of the first chord bound to `action`, for hints.
    #[must_use]
    pub fn label_for(&self, action: &Action) -> Option<String> {
        self.shortcuts
            .iter()
            .find(|s| &s.action == action)
            .map(Shortcut::label)
    }
}

fn default_shortcuts() -> Vec<Shortcut> {
    let go = |path: &str| Action::Navigate(path.to_string());
    vec![
        Shortcut::new(KeyCode::Char('/'), Action::OpenPalette, "Focus search"),
        Shortcut::new(KeyCode::Char('k'), Action::OpenPalette, "Focus search").ctrl(),
        Shortcut::new(KeyCode::Char('h'), go("/"), "Go home").ctrl(),
        Shortcut::new(KeyCode::Char('d'), go("/deepwiki"), "Open DeepWiki").ctrl(),
        Shortcut::new(KeyCode::Char('m'), go("/marketplace"), "Open Marketplace").ctrl(),
        Shortcut::new(KeyCode::Char('p'), go("/hub"), "Open Prompt Hub").ctrl(),
        Shortcut::new(KeyCode::Char('a'), go("/analytics"), "Open Analytics").ctrl(),
        Shortcut::new(KeyCode::Char(','), go("/settings"), "Open Settings").ctrl(),
        Shortcut::new(KeyCode::Left, Action::NavigateBack, "Go back").alt(),
        Shortcut::new(KeyCode::Esc, Action::Blur, "Close modal/blur focus"),
        Shortcut::new(KeyCode::Char('?'), Action::ToggleHelp, "Show keyboard shortcuts"),
        Shortcut::new(KeyCode::Char('q'), Action::Quit, "Quit"),
    ]
}

/// Parses key names used in the config file: a single character, or one of
/// the named keys ("Esc", "Tab", "F1".."F12", ...).
pub fn parse_key(name: &str) -> Result<KeyCode, KeymapError> {
    let mut chars = name.chars();
    if let (Some(c), None) = (chars.next(), chars.next()) {
        return Ok(KeyCode::Char(c));
    }

    let lower = name.to_ascii_lowercase();
    let code = match lower.as_str() {
        "esc" | "escape" => KeyCode::Esc,
        "enter" => KeyCode::Enter,
        "tab" => KeyCode::Tab,
        "space" => KeyCode::Char(' '),
        "backspace" => KeyCode::Backspace,
        "home" => KeyCode::Home,
        "end" => KeyCode::End,
        "pageup" => KeyCode::PageUp,
        "pagedown" => KeyCode::PageDown,
        "insert" => KeyCode::Insert,
        "delete" => KeyCode::Delete,
        _ => match lower.strip_prefix('f').and_then(|n| n.parse::<u8>().ok()) {
            Some(n @ 1..=12) => KeyCode::F(n),
            _ => return Err(KeymapError::UnknownKey(name.to_string())),
        },
    };
    Ok(code)
}

fn key_name(code: KeyCode) -> String {
    match code {
        KeyCode::Char(' ') => "Space".to_string(),
        KeyCode::Char(c) => c.to_string(),
        KeyCode::Esc => "Esc".to_string(),
        KeyCode::Left => "←".to_string(),
        KeyCode::Right => "→".to_string(),
        KeyCode::Up => "↑".to_string(),
        KeyCode::Down => "↓".to_string(),
        KeyCode::F(n) => format!("F{n}"),
        other => format!("{other:?}"),
    }
}
