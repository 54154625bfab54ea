//! ARGB color values parsed from remote color strings.
//!
//! Remote documents carry colors as hex strings in `#RRGGBB`, `#AARRGGBB`,
//! or bare-hex form (optionally prefixed `0x`). Every semantic slot has a
//! named default in [`palette`] that applies when the string is missing,
//! blank, or unparsable.

/// A packed ARGB color value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color(u32);

impl Color {
    /// Construct from a packed `0xAARRGGBB` value.
    pub const fn argb(value: u32) -> Self {
        Self(value)
    }

    /// The packed `0xAARRGGBB` value.
    pub const fn value(self) -> u32 {
        self.0
    }

    pub const fn alpha(self) -> u8 {
        (self.0 >> 24) as u8
    }

    pub const fn red(self) -> u8 {
        (self.0 >> 16) as u8
    }

    pub const fn green(self) -> u8 {
        (self.0 >> 8) as u8
    }

    pub const fn blue(self) -> u8 {
        self.0 as u8
    }

    /// Parse a hex color string.
    ///
    /// Accepts `#RRGGBB` and `#AARRGGBB`, with or without the `#`; a bare
    /// value may also carry a `0x` prefix in any case. Six-digit values get
    /// full alpha. Returns `None` for blank or unparsable input.
    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return None;
        }
        let hex = match trimmed.strip_prefix('#') {
            Some(rest) => rest.to_string(),
            None => {
                let lower = trimmed.to_ascii_lowercase();
                lower.strip_prefix("0x").unwrap_or(&lower).to_string()
            }
        };
        match hex.len() {
            6 => u32::from_str_radix(&hex, 16)
                .ok()
                .map(|rgb| Self(0xFF00_0000 | rgb)),
            8 => u32::from_str_radix(&hex, 16).ok().map(Self),
            _ => None,
        }
    }

    /// Parse an optional color string, falling back to `default` when the
    /// value is missing, blank, or invalid.
    pub fn parse_or(raw: Option<&str>, default: Self) -> Self {
        raw.and_then(Self::parse).unwrap_or(default)
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:08X}", self.0)
    }
}

/// Named defaults, one per semantic color slot.
pub mod palette {
    use super::Color;

    pub const CARD_BACKGROUND: Color = Color::argb(0xFF31_1B4B);
    pub const STROKE_START: Color = Color::argb(0x66FF_FFFF);
    pub const STROKE_END: Color = Color::argb(0x66FF_FFFF);
    pub const GRADIENT_START: Color = Color::argb(0xFF6A_1B9A);
    pub const GRADIENT_END: Color = Color::argb(0xFFAD_1457);
    pub const SCREEN_GRADIENT_START: Color = Color::argb(0xFF4A_0F5C);
    pub const SCREEN_GRADIENT_END: Color = Color::argb(0xFFAF_1B87);
    /// Flat background shown before any content arrives.
    pub const SCREEN_BACKGROUND: Color = Color::argb(0xFF1B_1727);
    pub const CTA_TEXT: Color = Color::argb(0xFFFF_FFFF);
}
