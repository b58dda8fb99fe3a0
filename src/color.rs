use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::shared::AppError;

/// 24-bit RGB display color, written as `#rrggbb`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::new(0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn to_hex(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl FromStr for Color {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hex = s
            .strip_prefix('#')
            .filter(|hex| hex.len() == 6 && hex.chars().all(|c| c.is_ascii_hexdigit()))
            .ok_or_else(|| AppError::InvalidColor(s.to_string()))?;

        let byte = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&hex[range], 16).map_err(|_| AppError::InvalidColor(s.to_string()))
        };

        Ok(Color::new(byte(0..2)?, byte(2..4)?, byte(4..6)?))
    }
}

impl TryFrom<String> for Color {
    type Error = AppError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_string()
    }
}

/// Derives a stable display color from a player name.
///
/// The name is folded into a signed 32-bit rolling hash (`hash * 31 + unit`
/// over UTF-16 code units, wrapping on every step). The low three bytes of the
/// hash become the red, green and blue channels. Total over all strings; two
/// names may share a color.
pub fn color_of(name: &str) -> Color {
    let hash = name.encode_utf16().fold(0i32, |hash, unit| {
        (unit as i32).wrapping_add(hash.wrapping_shl(5).wrapping_sub(hash))
    });

    let channel = |i: u32| ((hash >> (i * 8)) & 0xFF) as u8;
    Color::new(channel(0), channel(1), channel(2))
}
