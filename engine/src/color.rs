//! Color parsing and RGB to HSL conversion.
//!
//! Theme palettes are authored as hex triplets (easy to copy from design
//! tools); the presentation layer consumes HSL custom properties. The
//! conversion here is the single place where that translation happens, both
//! at runtime (theme application) and at build time (stylesheet generation).

use serde::Deserialize;
use std::fmt;
use thiserror::Error;

/// Errors produced when parsing a color value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    /// The input is not a 6-digit hex triplet.
    #[error("invalid hex color '{value}': {reason}")]
    InvalidFormat { value: String, reason: String },
}

/// An RGB color parsed from a `#RRGGBB` hex triplet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Parse a 6-digit hex triplet, with or without the leading `#`.
    ///
    /// Rejects anything else (short forms, alpha channels, non-hex digits)
    /// instead of producing garbage channel values.
    pub fn parse(hex: &str) -> Result<Rgb, ColorError> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);

        if digits.len() != 6 {
            return Err(ColorError::InvalidFormat {
                value: hex.to_string(),
                reason: format!("expected 6 hex digits, found {}", digits.len()),
            });
        }

        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ColorError::InvalidFormat {
                value: hex.to_string(),
                reason: "contains non-hexadecimal digits".to_string(),
            });
        }

        let channel = |start: usize, name: &str| {
            u8::from_str_radix(&digits[start..start + 2], 16).map_err(|_| {
                ColorError::InvalidFormat {
                    value: hex.to_string(),
                    reason: format!("invalid {name} component"),
                }
            })
        };

        Ok(Rgb {
            r: channel(0, "red")?,
            g: channel(2, "green")?,
            b: channel(4, "blue")?,
        })
    }
}

/// An HSL color with integer components.
///
/// Hue is in degrees `[0, 360)`, saturation and lightness in percent
/// `[0, 100]`. Components are rounded half-away-from-zero; the hue is taken
/// modulo 360 after rounding so a near-red hue never rounds up to 360.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hsl {
    pub hue: u16,
    pub saturation: u8,
    pub lightness: u8,
}

impl From<Rgb> for Hsl {
    fn from(rgb: Rgb) -> Self {
        let r = f64::from(rgb.r) / 255.0;
        let g = f64::from(rgb.g) / 255.0;
        let b = f64::from(rgb.b) / 255.0;

        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let lightness = (max + min) / 2.0;

        let (hue, saturation) = if max == min {
            // Achromatic: hue is undefined, pinned to 0.
            (0.0, 0.0)
        } else {
            let delta = max - min;
            let saturation = if lightness > 0.5 {
                delta / (2.0 - max - min)
            } else {
                delta / (max + min)
            };
            let hue = if max == r {
                (g - b) / delta + if g < b { 6.0 } else { 0.0 }
            } else if max == g {
                (b - r) / delta + 2.0
            } else {
                (r - g) / delta + 4.0
            };
            (hue / 6.0, saturation)
        };

        Hsl {
            hue: ((hue * 360.0).round() as u16) % 360,
            saturation: (saturation * 100.0).round() as u8,
            lightness: (lightness * 100.0).round() as u8,
        }
    }
}

impl fmt::Display for Hsl {
    /// The space-separated form consumed by `hsl(var(--...))` rules.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}% {}%", self.hue, self.saturation, self.lightness)
    }
}

/// Convert a hex triplet directly to HSL.
pub fn hex_to_hsl(hex: &str) -> Result<Hsl, ColorError> {
    Rgb::parse(hex).map(Hsl::from)
}

/// A hex color string validated on deserialization.
///
/// Theme files store colors as plain strings; wrapping them in this newtype
/// means a malformed value fails at parse time instead of surfacing later as
/// a broken custom property.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "String")]
pub struct HexColor(String);

impl HexColor {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// HSL form of this color. Validity was established on construction.
    pub fn to_hsl(&self) -> Result<Hsl, ColorError> {
        hex_to_hsl(&self.0)
    }
}

impl TryFrom<String> for HexColor {
    type Error = ColorError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Rgb::parse(&value)?;
        Ok(HexColor(value))
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
