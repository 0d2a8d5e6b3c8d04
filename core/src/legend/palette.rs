//! Categorical colors
//!
//! Legend colors cycle through a fixed ten-entry palette. The default is
//! Tableau10, matching the ordinal scheme the scatter plot has always used.
//!
//! Copyright (c) 2025 Mohammad Atashi <mohammadaliatashi@icloud.com>

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::ExplorerError;

/// Number of colors in a palette
pub const PALETTE_SIZE: usize = 10;

/// 24-bit RGB color, written as `#rrggbb`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parses `#rrggbb` (leading `#` optional, case-insensitive)
    pub fn from_hex(literal: &str) -> Result<Self, ExplorerError> {
        let invalid = || ExplorerError::InvalidColor(literal.to_owned());

        let digits = literal.strip_prefix('#').unwrap_or(literal);
        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(invalid());
        }

        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&digits[range], 16).map_err(|_| invalid())
        };

        Ok(Self::rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl FromStr for Color {
    type Err = ExplorerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl Serialize for Color {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let literal = String::deserialize(deserializer)?;
        Self::from_hex(&literal).map_err(serde::de::Error::custom)
    }
}

pub const TABLEAU10: [Color; PALETTE_SIZE] = [
    Color::rgb(0x57, 0x78, 0xa4),
    Color::rgb(0xe4, 0x94, 0x44),
    Color::rgb(0xd1, 0x61, 0x5d),
    Color::rgb(0x85, 0xb6, 0xb2),
    Color::rgb(0x6a, 0x9f, 0x58),
    Color::rgb(0xe7, 0xca, 0x60),
    Color::rgb(0xa8, 0x7c, 0x9f),
    Color::rgb(0xf1, 0xa2, 0xa9),
    Color::rgb(0x96, 0x76, 0x62),
    Color::rgb(0xb8, 0xb0, 0xac),
];

/// Fixed ten-color cycle
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Palette {
    colors: [Color; PALETTE_SIZE],
}

impl Palette {
    pub const fn new(colors: [Color; PALETTE_SIZE]) -> Self {
        Self { colors }
    }

    /// Color for the `index`-th assignment, wrapping every ten
    pub fn color_for(&self, index: usize) -> Color {
        self.colors[index % PALETTE_SIZE]
    }

    pub fn colors(&self) -> &[Color; PALETTE_SIZE] {
        &self.colors
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::new(TABLEAU10)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_round_trip() {
        let color = Color::from_hex("#E49444").unwrap();
        assert_eq!(color, Color::rgb(0xe4, 0x94, 0x44));
        assert_eq!(color.to_string(), "#e49444");
        assert_eq!("5778a4".parse::<Color>().unwrap(), TABLEAU10[0]);
    }

    #[test]
    fn test_rejects_malformed_hex() {
        for literal in ["", "#fff", "#12345g", "#1234567", "#ééé", "#+1+2+3", "-1-2-3"] {
            assert!(
                matches!(Color::from_hex(literal), Err(ExplorerError::InvalidColor(_))),
                "{literal:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_palette_wraps_after_ten() {
        let palette = Palette::default();
        assert_eq!(palette.color_for(0), TABLEAU10[0]);
        assert_eq!(palette.color_for(9), TABLEAU10[9]);
        assert_eq!(palette.color_for(10), palette.color_for(0));
        assert_eq!(palette.color_for(23), TABLEAU10[3]);
    }

    #[test]
    fn test_palette_deserializes_from_hex_list() {
        let json = r##"["#000000","#111111","#222222","#333333","#444444",
                        "#555555","#666666","#777777","#888888","#999999"]"##;
        let palette: Palette = serde_json::from_str(json).unwrap();
        assert_eq!(palette.color_for(3), Color::rgb(0x33, 0x33, 0x33));

        let short: Result<Palette, _> = serde_json::from_str(r##"["#000000"]"##);
        assert!(short.is_err());
    }
}
