use super::palette::Palette;
use ratatui::style::Color;

pub const CATPPUCCIN_MOCHA: Palette = Palette {
    background: Color::Rgb(30, 30, 46),
    shadow: Color::Rgb(17, 17, 27),
    text: Color::Rgb(205, 214, 244),
    text_muted: Color::Rgb(166, 173, 200),
    text_soft: Color::Rgb(186, 194, 222),
    surface: Color::Rgb(49, 50, 68),
    surface_raised: Color::Rgb(69, 71, 90),
    outline: Color::Rgb(88, 91, 112),
    faint: Color::Rgb(108, 112, 134),
    accent: Color::Rgb(137, 180, 250),
    info: Color::Rgb(116, 199, 236),
    link: Color::Rgb(148, 226, 213),
    success: Color::Rgb(166, 227, 161),
    warning: Color::Rgb(249, 226, 175),
    highlight: Color::Rgb(250, 179, 135),
    danger: Color::Rgb(243, 139, 168),
    category: Color::Rgb(203, 166, 247),
};
