use crate::cards::Rgb;
use ratatui::style::Color;

pub struct Theme {
    pub fg: Color,
    pub primary: Color,   // Blue
    pub comment: Color,   // Grey
    pub success: Color,   // Green
    pub error: Color,     // Red
    pub border_focused: Color,
    pub border_normal: Color,
    pub status_bg: Color,
    pub button_fg: Color,
    pub button_focused_bg: Color,
    pub label_dark: Color,  // Card label on light backgrounds
    pub label_light: Color, // Card label on dark backgrounds
}

pub const DEFAULT_THEME: Theme = Theme {
    fg: Color::Rgb(205, 214, 244),
    primary: Color::Rgb(137, 180, 250),   // Blue
    comment: Color::Rgb(108, 112, 134),
    success: Color::Rgb(166, 227, 161),
    error: Color::Rgb(243, 139, 168),
    border_focused: Color::Rgb(249, 226, 175), // Yellow border for focus
    border_normal: Color::Rgb(108, 112, 134),  // Grey border for normal
    status_bg: Color::Rgb(50, 50, 70),
    button_fg: Color::Rgb(205, 214, 244),
    button_focused_bg: Color::Rgb(69, 71, 90),
    label_dark: Color::Rgb(17, 17, 27),
    label_light: Color::Rgb(245, 245, 245),
};

impl Theme {
    /// Terminal colour for a card background
    pub fn card_background(&self, rgb: Rgb) -> Color {
        let Rgb(r, g, b) = rgb;
        Color::Rgb(r, g, b)
    }

    /// Label colour that stays readable on `background`
    pub fn card_label(&self, background: Rgb) -> Color {
        if background.luma() >= 128 {
            self.label_dark
        } else {
            self.label_light
        }
    }
}
