use super::palette::Palette;
use ratatui::style::Color;

pub const NORD: Palette = Palette {
    background: Color::Rgb(46, 52, 64),
    shadow: Color::Rgb(43, 48, 59),
    text: Color::Rgb(236, 239, 244),
    text_muted: Color::Rgb(216, 222, 233),
    text_soft: Color::Rgb(229, 233, 240),
    surface: Color::Rgb(76, 86, 106),
    surface_raised: Color::Rgb(59, 66, 82),
    outline: Color::Rgb(67, 76, 94),
    faint: Color::Rgb(129, 161, 193),
    accent: Color::Rgb(129, 161, 193),
    info: Color::Rgb(136, 192, 208),
    link: Color::Rgb(143, 188, 187),
    success: Color::Rgb(163, 190, 140),
    warning: Color::Rgb(235, 203, 139),
    highlight: Color::Rgb(208, 135, 112),
    danger: Color::Rgb(191, 97, 106),
    category: Color::Rgb(180, 142, 173),
};
