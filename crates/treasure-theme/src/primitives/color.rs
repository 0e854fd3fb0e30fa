//! RGBA colors with hex and named parsing.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// An sRGB color with alpha, eight bits per channel.
///
/// Serializes as a hex string (`"#RRGGBB"`, or `"#RRGGBBAA"` when not opaque)
/// and parses either hex or one of the system color names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

/// Error returned when a string is neither a hex color nor a known name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid color '{input}': {reason}")]
pub struct ColorParseError {
    pub input: String,
    pub reason: &'static str,
}

static NAMED_COLORS: Lazy<HashMap<&'static str, Color>> = Lazy::new(|| {
    HashMap::from([
        ("white", Color::WHITE),
        ("black", Color::BLACK),
        ("darkgray", Color::DARK_GRAY),
        ("gray", Color::GRAY),
        ("lightgray", Color::LIGHT_GRAY),
        ("red", Color::RED),
        ("green", Color::GREEN),
        ("blue", Color::BLUE),
        ("clear", Color::CLEAR),
    ])
});

impl Color {
    pub const WHITE: Color = Color::rgb(0xFF, 0xFF, 0xFF);
    pub const BLACK: Color = Color::rgb(0x00, 0x00, 0x00);
    pub const DARK_GRAY: Color = Color::rgb(0x55, 0x55, 0x55);
    pub const GRAY: Color = Color::rgb(0x80, 0x80, 0x80);
    pub const LIGHT_GRAY: Color = Color::rgb(0xAA, 0xAA, 0xAA);
    pub const RED: Color = Color::rgb(0xFF, 0x00, 0x00);
    pub const GREEN: Color = Color::rgb(0x00, 0xFF, 0x00);
    pub const BLUE: Color = Color::rgb(0x00, 0x00, 0xFF);
    pub const CLEAR: Color = Color::rgba(0x00, 0x00, 0x00, 0x00);

    /// Creates an opaque color.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 0xFF }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Parses `#RGB`, `#RRGGBB` or `#RRGGBBAA`. The leading `#` is optional.
    ///
    /// # Example
    ///
    /// ```rust
    /// use treasure_theme::Color;
    ///
    /// assert_eq!(Color::from_hex("#ff5647").unwrap(), Color::rgb(0xFF, 0x56, 0x47));
    /// assert_eq!(Color::from_hex("fff").unwrap(), Color::WHITE);
    /// ```
    pub fn from_hex(input: &str) -> Result<Self, ColorParseError> {
        let err = |reason| ColorParseError {
            input: input.to_string(),
            reason,
        };
        let hex = input.trim().trim_start_matches('#');
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(err("non-hex digit"));
        }

        let channel = |s: &str| u8::from_str_radix(s, 16).map_err(|_| err("non-hex digit"));
        match hex.len() {
            3 => {
                let mut out = [0u8; 3];
                for (slot, c) in out.iter_mut().zip(hex.chars()) {
                    let v = c.to_digit(16).ok_or_else(|| err("non-hex digit"))? as u8;
                    *slot = v * 17;
                }
                Ok(Color::rgb(out[0], out[1], out[2]))
            }
            6 => Ok(Color::rgb(
                channel(&hex[0..2])?,
                channel(&hex[2..4])?,
                channel(&hex[4..6])?,
            )),
            8 => Ok(Color::rgba(
                channel(&hex[0..2])?,
                channel(&hex[2..4])?,
                channel(&hex[4..6])?,
                channel(&hex[6..8])?,
            )),
            _ => Err(err("expected 3, 6 or 8 hex digits")),
        }
    }

    /// Looks up a system color name such as `"darkGray"` or `"dark_gray"`.
    pub fn named(name: &str) -> Option<Self> {
        let key: String = name
            .chars()
            .filter(|c| *c != '_' && *c != '-')
            .map(|c| c.to_ascii_lowercase())
            .collect();
        NAMED_COLORS.get(key.as_str()).copied()
    }

    /// Formats as `#RRGGBB`, appending the alpha byte only when not opaque.
    pub fn to_hex(&self) -> String {
        if self.a == 0xFF {
            format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
        } else {
            format!("#{:02X}{:02X}{:02X}{:02X}", self.r, self.g, self.b, self.a)
        }
    }

    /// Converts to the nearest ANSI 256-color palette index, ignoring alpha.
    ///
    /// # Example
    ///
    /// ```rust
    /// use treasure_theme::Color;
    ///
    /// assert_eq!(Color::RED.to_ansi256(), 196);
    /// assert_eq!(Color::WHITE.to_ansi256(), 231);
    /// ```
    pub fn to_ansi256(&self) -> u8 {
        let (r, g, b) = (self.r, self.g, self.b);
        if r == g && g == b {
            if r < 8 {
                16
            } else if r > 248 {
                231
            } else {
                232 + ((r as u16 - 8) * 24 / 247) as u8
            }
        } else {
            let red = (r as u16 * 5 / 255) as u8;
            let green = (g as u16 * 5 / 255) as u8;
            let blue = (b as u16 * 5 / 255) as u8;
            16 + 36 * red + 6 * green + blue
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for Color {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim_start().starts_with('#') {
            return Color::from_hex(s);
        }
        match Color::named(s) {
            Some(color) => Ok(color),
            None => Color::from_hex(s),
        }
    }
}

impl TryFrom<String> for Color {
    type Error = ColorParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_hex()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_hex_six_digits() {
        assert_eq!(Color::from_hex("#F2F2F2").unwrap(), Color::rgb(0xF2, 0xF2, 0xF2));
        assert_eq!(Color::from_hex("cccccc").unwrap(), Color::rgb(0xCC, 0xCC, 0xCC));
    }

    #[test]
    fn test_from_hex_short_and_alpha() {
        assert_eq!(Color::from_hex("#f00").unwrap(), Color::RED);
        assert_eq!(
            Color::from_hex("#00000080").unwrap(),
            Color::rgba(0, 0, 0, 0x80)
        );
    }

    #[test]
    fn test_from_hex_rejects_garbage() {
        assert!(Color::from_hex("#12345").is_err());
        assert!(Color::from_hex("#zzzzzz").is_err());
        assert!(Color::from_hex("").is_err());
    }

    #[test]
    fn test_named_colors() {
        assert_eq!(Color::named("darkGray"), Some(Color::DARK_GRAY));
        assert_eq!(Color::named("dark_gray"), Some(Color::DARK_GRAY));
        assert_eq!(Color::named("mauve"), None);
    }

    #[test]
    fn test_from_str_prefers_names_then_hex() {
        assert_eq!("white".parse::<Color>().unwrap(), Color::WHITE);
        assert_eq!("ff5647".parse::<Color>().unwrap(), Color::rgb(0xFF, 0x56, 0x47));
        assert!("nope".parse::<Color>().is_err());
    }

    #[test]
    fn test_to_hex_omits_opaque_alpha() {
        assert_eq!(Color::rgb(0xFF, 0x56, 0x47).to_hex(), "#FF5647");
        assert_eq!(Color::CLEAR.to_hex(), "#00000000");
    }

    #[test]
    fn test_to_ansi256_grayscale() {
        assert_eq!(Color::BLACK.to_ansi256(), 16);
        assert_eq!(Color::WHITE.to_ansi256(), 231);
        assert!((232..=255).contains(&Color::GRAY.to_ansi256()));
    }

    #[test]
    fn test_to_ansi256_color_cube() {
        assert_eq!(Color::RED.to_ansi256(), 196);
        assert_eq!(Color::GREEN.to_ansi256(), 46);
        assert_eq!(Color::BLUE.to_ansi256(), 21);
    }
}
