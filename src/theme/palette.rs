use ratatui::style::Color;

/// Colour roles a [`super::Theme`] is built from. Each scheme fills the
/// roles from its own swatches.
pub struct Palette {
    pub background: Color,
    pub shadow: Color,
    pub text: Color,
    pub text_muted: Color,
    pub text_soft: Color,
    pub surface: Color,
    pub surface_raised: Color,
    pub outline: Color,
    pub faint: Color,

    pub accent: Color,
    pub info: Color,
    pub link: Color,
    pub success: Color,
    pub warning: Color,
    pub highlight: Color,
    pub danger: Color,
    pub category: Color,
}

/// Scale an `Rgb` colour towards black; other variants pass through.
pub fn dim_color(c: Color, factor: f32) -> Color {
    match c {
        Color::Rgb(r, g, b) => {
            let scale = |v: u8| (f32::from(v) * factor.clamp(0.0, 1.0)) as u8;
            Color::Rgb(scale(r), scale(g), scale(b))
        }
        other => other,
    }
}
