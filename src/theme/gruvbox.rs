use super::palette::Palette;
use ratatui::style::Color;

pub const GRUVBOX: Palette = Palette {
    background: Color::Rgb(40, 40, 40),
    shadow: Color::Rgb(29, 32, 33),
    text: Color::Rgb(235, 219, 178),
    text_muted: Color::Rgb(213, 196, 161),
    text_soft: Color::Rgb(189, 174, 147),
    surface: Color::Rgb(60, 56, 54),
    surface_raised: Color::Rgb(80, 73, 69),
    outline: Color::Rgb(102, 92, 84),
    faint: Color::Rgb(124, 111, 100),
    accent: Color::Rgb(131, 165, 152),
    info: Color::Rgb(69, 133, 136),
    link: Color::Rgb(142, 192, 124),
    success: Color::Rgb(184, 187, 38),
    warning: Color::Rgb(250, 189, 47),
    highlight: Color::Rgb(254, 128, 25),
    danger: Color::Rgb(251, 73, 52),
    category: Color::Rgb(211, 134, 155),
};
