//! Display color for the wireframe
//!
//! The color never touches the geometry. It is carried from the controls to
//! the renderer unchanged, written and read as `#rrggbb`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// 24-bit sRGB color
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DisplayColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Default for DisplayColor {
    fn default() -> Self {
        Self::CYAN
    }
}

impl DisplayColor {
    pub const CYAN: Self = Self::rgb(0x00, 0xff, 0xff);
    pub const MAGENTA: Self = Self::rgb(0xff, 0x00, 0xff);
    pub const LIME: Self = Self::rgb(0x00, 0xff, 0x88);
    pub const GOLD: Self = Self::rgb(0xff, 0xcc, 0x00);
    pub const CORAL: Self = Self::rgb(0xff, 0x6b, 0x6b);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `#rrggbb` (case-insensitive)
    pub fn from_hex(s: &str) -> Result<Self, ColorParseError> {
        let digits = s
            .strip_prefix('#')
            .ok_or_else(|| ColorParseError::MissingHash(s.to_string()))?;
        if digits.len() != 6 || !digits.is_ascii() {
            return Err(ColorParseError::BadLength(s.to_string()));
        }
        // from_str_radix alone would accept a sign, as in "+f"
        if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ColorParseError::BadDigit(s.to_string()));
        }
        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&digits[range], 16)
                .map_err(|_| ColorParseError::BadDigit(s.to_string()))
        };
        Ok(Self::rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }

    /// Lowercase `#rrggbb`
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Channels as 0..=1 floats, still sRGB-encoded
    pub fn to_srgb_f32(self) -> [f32; 3] {
        [self.r as f32 / 255.0, self.g as f32 / 255.0, self.b as f32 / 255.0]
    }

    /// RGBA in linear space, for writing to an sRGB render target
    pub fn to_linear_rgba(self, alpha: f32) -> [f32; 4] {
        let [r, g, b] = self.to_srgb_f32().map(srgb_to_linear);
        [r, g, b, alpha]
    }

    /// Palette entry for this color, if it is one of the named colors
    pub fn palette_entry(self) -> Option<&'static NamedColor> {
        PALETTE.iter().find(|entry| entry.color == self)
    }
}

fn srgb_to_linear(c: f32) -> f32 {
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

impl fmt::Display for DisplayColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for DisplayColor {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl TryFrom<String> for DisplayColor {
    type Error = ColorParseError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::from_hex(&s)
    }
}

impl From<DisplayColor> for String {
    fn from(c: DisplayColor) -> Self {
        c.to_hex()
    }
}

/// A color with a human-readable name
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NamedColor {
    pub name: &'static str,
    pub color: DisplayColor,
}

/// The colors offered by the viewer controls, in button order
pub const PALETTE: [NamedColor; 5] = [
    NamedColor { name: "Cyan", color: DisplayColor::CYAN },
    NamedColor { name: "Magenta", color: DisplayColor::MAGENTA },
    NamedColor { name: "Lime", color: DisplayColor::LIME },
    NamedColor { name: "Gold", color: DisplayColor::GOLD },
    NamedColor { name: "Coral", color: DisplayColor::CORAL },
];

/// Error parsing a `#rrggbb` color
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColorParseError {
    /// The string does not start with `#`
    MissingHash(String),
    /// Not exactly six hex digits after `#`
    BadLength(String),
    /// A character is not a hex digit
    BadDigit(String),
}

impl fmt::Display for ColorParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColorParseError::MissingHash(s) => write!(f, "Color '{}' must start with '#'", s),
            ColorParseError::BadLength(s) => write!(f, "Color '{}' must have six hex digits", s),
            ColorParseError::BadDigit(s) => write!(f, "Color '{}' contains a non-hex digit", s),
        }
    }
}

impl std::error::Error for ColorParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_palette_values() {
        assert_eq!(DisplayColor::from_hex("#00ffff").unwrap(), DisplayColor::CYAN);
        assert_eq!(DisplayColor::from_hex("#FF00FF").unwrap(), DisplayColor::MAGENTA);
        assert_eq!("#ff6b6b".parse::<DisplayColor>().unwrap(), DisplayColor::CORAL);
    }

    #[test]
    fn test_to_hex_is_lowercase() {
        assert_eq!(DisplayColor::GOLD.to_hex(), "#ffcc00");
        assert_eq!(format!("{}", DisplayColor::LIME), "#00ff88");
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            DisplayColor::from_hex("00ffff"),
            Err(ColorParseError::MissingHash("00ffff".to_string()))
        );
        assert_eq!(
            DisplayColor::from_hex("#0ff"),
            Err(ColorParseError::BadLength("#0ff".to_string()))
        );
        assert_eq!(
            DisplayColor::from_hex("#00ffzz"),
            Err(ColorParseError::BadDigit("#00ffzz".to_string()))
        );
        assert_eq!(
            DisplayColor::from_hex("#+f+f+f"),
            Err(ColorParseError::BadDigit("#+f+f+f".to_string()))
        );
        assert!(DisplayColor::from_hex("#-f0000").is_err());
        // Multi-byte characters must not be sliced mid-codepoint
        assert!(DisplayColor::from_hex("#ffé0f").is_err());
    }

    #[test]
    fn test_error_display() {
        let err = ColorParseError::BadDigit("#gg0000".to_string());
        let msg = format!("{}", err);
        assert!(msg.contains("#gg0000"));
        assert!(msg.contains("non-hex"));
    }

    #[test]
    fn test_linear_conversion() {
        let [r, g, b, a] = DisplayColor::CYAN.to_linear_rgba(0.8);
        assert_eq!(r, 0.0);
        assert!((g - 1.0).abs() < 1e-6);
        assert!((b - 1.0).abs() < 1e-6);
        assert_eq!(a, 0.8);

        // Mid-gray is darker in linear space
        let [gray, _, _, _] = DisplayColor::rgb(128, 128, 128).to_linear_rgba(1.0);
        assert!(gray < 0.5 && gray > 0.2);
    }

    #[test]
    fn test_palette() {
        assert_eq!(PALETTE.len(), 5);
        assert_eq!(PALETTE[0].color, DisplayColor::default());
        assert_eq!(DisplayColor::GOLD.palette_entry().map(|e| e.name), Some("Gold"));
        assert_eq!(DisplayColor::rgb(1, 2, 3).palette_entry(), None);
    }

    #[derive(Serialize, Deserialize)]
    struct Wrapper {
        color: DisplayColor,
    }

    #[test]
    fn test_serde_as_hex_string() {
        let text = toml::to_string(&Wrapper { color: DisplayColor::MAGENTA }).unwrap();
        assert!(text.contains("\"#ff00ff\""));

        let back: Wrapper = toml::from_str("color = \"#ffcc00\"").unwrap();
        assert_eq!(back.color, DisplayColor::GOLD);

        assert!(toml::from_str::<Wrapper>("color = \"cyan\"").is_err());
    }
}
