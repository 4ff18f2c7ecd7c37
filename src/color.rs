//! RGB colors and the hex/HSL conversions the shadow pipeline needs.
//!
//! Only plain sRGB integer arithmetic is done here; there is no gamma or
//! perceptual correction.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{ColorError, Result};

/// An opaque RGB color with 8-bit channels.
///
/// Serializes as a `#rrggbb` string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const BLACK: Color = Color::rgb(0, 0, 0);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Build a color from real-valued channels, rounding to the nearest
    /// integer and clamping to `0..=255`.
    pub fn from_channels_f64(r: f64, g: f64, b: f64) -> Self {
        Self {
            r: channel_from_f64(r),
            g: channel_from_f64(g),
            b: channel_from_f64(b),
        }
    }

    /// Add `amount` to every channel, saturating at 0 and 255.
    pub fn shift(self, amount: i16) -> Self {
        let apply = |c: u8| i16::from(c).saturating_add(amount).clamp(0, 255) as u8;
        Self {
            r: apply(self.r),
            g: apply(self.g),
            b: apply(self.b),
        }
    }

    /// `#rrggbb`, lowercase.
    pub fn to_hex(self) -> String {
        color_to_hex(self)
    }
}

fn channel_from_f64(v: f64) -> u8 {
    if v.is_nan() {
        return 0;
    }
    v.round().clamp(0.0, 255.0) as u8
}

/// Parse `#RGB` or `#RRGGBB` (the `#` is optional, case-insensitive).
///
/// The short form expands each digit by duplication, so `#abc` is `#aabbcc`.
pub fn hex_to_color(hex: &str) -> Result<Color> {
    let digits = hex.trim();
    let digits = digits.strip_prefix('#').unwrap_or(digits);
    if digits.is_empty() {
        return Err(ColorError::Empty);
    }

    let mut nibbles = Vec::with_capacity(6);
    for (position, digit) in digits.chars().enumerate() {
        match digit.to_digit(16) {
            Some(n) => nibbles.push(n as u8),
            None => return Err(ColorError::InvalidDigit { digit, position }),
        }
    }

    match nibbles.as_slice() {
        [r, g, b] => Ok(Color::rgb(r * 17, g * 17, b * 17)),
        [r1, r2, g1, g2, b1, b2] => Ok(Color::rgb(
            (r1 << 4) | r2,
            (g1 << 4) | g2,
            (b1 << 4) | b2,
        )),
        other => Err(ColorError::InvalidLength(other.len())),
    }
}

/// Format a color as `#rrggbb` with two lowercase hex digits per channel.
pub fn color_to_hex(color: Color) -> String {
    format!("#{:02x}{:02x}{:02x}", color.r, color.g, color.b)
}

/// Convert HSL to RGB.
///
/// `h` is in degrees (wrapped into `[0, 360)`), `s` and `l` are percentages
/// in `[0, 100]`. Channels are rounded to the nearest integer.
pub fn hsl_to_color(h: f64, s: f64, l: f64) -> Color {
    let h = h.rem_euclid(360.0);
    let s = (s / 100.0).clamp(0.0, 1.0);
    let l = (l / 100.0).clamp(0.0, 1.0);

    let a = s * l.min(1.0 - l);
    let f = |n: f64| {
        let k = (n + h / 30.0) % 12.0;
        l - a * (k - 3.0).min(9.0 - k).min(1.0).max(-1.0)
    };

    Color::from_channels_f64(255.0 * f(0.0), 255.0 * f(8.0), 255.0 * f(4.0))
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl FromStr for Color {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self> {
        hex_to_color(s)
    }
}

impl TryFrom<String> for Color {
    type Error = ColorError;

    fn try_from(value: String) -> Result<Self> {
        hex_to_color(&value)
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color_to_hex(color)
    }
}
