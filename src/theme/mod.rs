use ratatui::style::{Color, Modifier, Style};
use serde::{Deserialize, Serialize};

pub mod catppuccin;
pub mod glyphs;
pub mod gruvbox;
pub mod nord;
pub mod palette;

pub use palette::{dim_color, Palette};

#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub border: Style,
    pub border_focus: Style,

    pub page_title: Style,
    pub page_text: Style,
    pub category: Style,
    pub path: Style,
    pub keyword: Style,

    pub status_ready: Style,
    pub status_info: Style,
    pub status_error: Style,

    pub header_logo: Style,
    pub header_route: Style,
    pub header_stats: Style,
    pub header_active: Style,
    pub header_warn: Style,
    pub header_item: Style,
    pub header: Style,

    pub footer_segment_key: Style,
    pub footer_segment_val: Style,
    pub footer: Style,

    pub list_selected: Style,
    pub list_item: Style,
    pub match_highlight: Style,
    pub dimmed: Style,

    pub toast_info: Style,
    pub toast_success: Style,
    pub toast_warn: Style,
    pub toast_error: Style,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum PaletteType {
    #[default]
    CatppuccinMocha,
    Nord,
    Gruvbox,
}

impl PaletteType {
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            PaletteType::CatppuccinMocha => "Catppuccin (Mocha)",
            PaletteType::Nord => "Nord",
            PaletteType::Gruvbox => "Gruvbox",
        }
    }
}

impl Theme {
    #[must_use]
    pub fn from_palette_type(t: PaletteType) -> Self {
        match t {
            PaletteType::CatppuccinMocha => Self::from_palette(&catppuccin::CATPPUCCIN_MOCHA),
            PaletteType::Nord => Self::from_palette(&nord::NORD),
            PaletteType::Gruvbox => Self::from_palette(&gruvbox::GRUVBOX),
        }
    }

    #[must_use]
    pub fn from_palette(p: &Palette) -> Self {
        let toast = |accent: Color| {
            Style::default()
                .fg(accent)
                .bg(dim_color(accent, 0.18))
                .add_modifier(Modifier::BOLD)
        };

        Self {
            border: Style::default().fg(p.outline),
            border_focus: Style::default().fg(p.accent),

            page_title: Style::default().fg(p.accent).add_modifier(Modifier::BOLD),
            page_text: Style::default().fg(p.text),
            category: Style::default().fg(p.category).add_modifier(Modifier::BOLD),
            path: Style::default().fg(p.link),
            keyword: Style::default().bg(p.surface).fg(p.text_soft),

            status_ready: Style::default()
                .bg(p.success)
                .fg(p.shadow)
                .add_modifier(Modifier::BOLD),
            status_info: Style::default()
                .bg(p.accent)
                .fg(p.shadow)
                .add_modifier(Modifier::BOLD),
            status_error: Style::default()
                .bg(p.danger)
                .fg(p.shadow)
                .add_modifier(Modifier::BOLD),

            header_logo: Style::default()
                .bg(p.accent)
                .fg(p.shadow)
                .add_modifier(Modifier::BOLD),
            header_route: Style::default()
                .bg(p.surface_raised)
                .fg(p.text)
                .add_modifier(Modifier::BOLD),
            header_stats: Style::default().bg(p.surface).fg(p.text_soft),
            header_active: Style::default()
                .bg(p.success)
                .fg(p.shadow)
                .add_modifier(Modifier::BOLD),
            header_warn: Style::default()
                .bg(p.warning)
                .fg(p.shadow)
                .add_modifier(Modifier::BOLD),
            header_item: Style::default().bg(p.surface).fg(p.text),
            header: Style::default().bg(p.background).fg(p.text),

            footer_segment_key: Style::default()
                .bg(p.surface)
                .fg(p.accent)
                .add_modifier(Modifier::BOLD),
            footer_segment_val: Style::default().bg(p.background).fg(p.text),
            footer: Style::default().bg(p.shadow).fg(p.text_muted),

            list_selected: Style::default()
                .bg(p.accent)
                .fg(p.shadow)
                .add_modifier(Modifier::BOLD),
            list_item: Style::default().fg(p.text),
            match_highlight: Style::default()
                .fg(p.highlight)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            dimmed: Style::default().fg(p.faint).add_modifier(Modifier::DIM),

            toast_info: toast(p.info),
            toast_success: toast(p.success),
            toast_warn: toast(p.warning),
            toast_error: toast(p.danger),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::from_palette_type(PaletteType::CatppuccinMocha)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_type_parses_kebab_case() {
        #[derive(Deserialize)]
        struct Wrapper {
            theme: PaletteType,
        }
        let w: Wrapper = toml::from_str(r#"theme = "catppuccin-mocha""#).unwrap();
        assert_eq!(w.theme, PaletteType::CatppuccinMocha);
        let w: Wrapper = toml::from_str(r#"theme = "gruvbox""#).unwrap();
        assert_eq!(w.theme, PaletteType::Gruvbox);
    }

    #[test]
    fn test_themes_differ() {
        assert_ne!(
            Theme::from_palette_type(PaletteType::Nord),
            Theme::from_palette_type(PaletteType::Gruvbox)
        );
    }
}
