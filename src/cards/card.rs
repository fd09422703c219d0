//! A single card and its visual style

/// An RGB colour triple
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// Parse `#RRGGBB` (the leading `#` is optional)
    pub fn from_hex(text: &str) -> Option<Rgb> {
        let hex = text.strip_prefix('#').unwrap_or(text);
        if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }
        let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&hex[range], 16).ok();
        Some(Rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }

    /// Relative brightness in 0..=255, used to pick a readable label colour
    pub fn luma(self) -> u8 {
        let Rgb(r, g, b) = self;
        ((299 * r as u32 + 587 * g as u32 + 114 * b as u32) / 1000) as u8
    }
}

/// How a card's panel is painted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardStyle {
    pub background: Rgb,
}

impl CardStyle {
    pub const fn solid(r: u8, g: u8, b: u8) -> Self {
        CardStyle {
            background: Rgb(r, g, b),
        }
    }
}

/// A named panel. Immutable once registered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    id: String,
    label: String,
    style: CardStyle,
}

impl Card {
    pub fn new(id: impl Into<String>, label: impl Into<String>, style: CardStyle) -> Self {
        Card {
            id: id.into(),
            label: label.into(),
            style,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn style(&self) -> CardStyle {
        self.style
    }
}
