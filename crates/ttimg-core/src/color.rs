// this_file: crates/ttimg-core/src/color.rs

//! Colour values and the parser behind `--font-color` / `--background-color`
//!
//! Three spellings are accepted, tried in this order:
//!
//! 1. A colour word from [`NAMED_COLORS`] (`red`, `WHITE`, ...)
//! 2. Three or four decimal channels split by commas (`255, 0, 0` or `0,0,0,0`)
//! 3. A `#` followed by 6 or 8 hex digits (`#FF0000`, `#FF000080`)
//!
//! Decimal channels above 255 are clamped rather than rejected.

use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::ValidationError;

/// Colour words understood by [`Color::parse`], all fully opaque RGB
pub const NAMED_COLORS: [(&str, Color); 8] = [
    ("black", Color::Rgb(0, 0, 0)),
    ("blue", Color::Rgb(0, 0, 255)),
    ("green", Color::Rgb(0, 255, 0)),
    ("cyan", Color::Rgb(0, 255, 255)),
    ("red", Color::Rgb(255, 0, 0)),
    ("pink", Color::Rgb(255, 0, 255)),
    ("yellow", Color::Rgb(255, 255, 0)),
    ("white", Color::Rgb(255, 255, 255)),
];

/// Fully transparent black, the default background
pub const TRANSPARENT: Color = Color::Rgba(0, 0, 0, 0);

#[allow(clippy::expect_used)]
static DECIMAL_CHANNELS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^([0-9]{1,3})\s*,\s*([0-9]{1,3})\s*,\s*([0-9]{1,3})(?:\s*,\s*([0-9]{1,3}))?$",
    )
    .expect("decimal colour pattern is valid")
});

#[allow(clippy::expect_used)]
static HEX_CHANNELS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^#(?:[0-9a-fA-F]{8}|[0-9a-fA-F]{6})$").expect("hex colour pattern is valid")
});

/// An RGB or RGBA colour with 8-bit channels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Rgb(u8, u8, u8),
    Rgba(u8, u8, u8, u8),
}

impl Color {
    /// Parse user input into a colour.
    ///
    /// Fails with [`ValidationError::InvalidColor`] when none of the accepted
    /// spellings match. Negative channels never match the decimal pattern,
    /// so they are rejected instead of clamped.
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        let trimmed = raw.trim();
        let invalid = || ValidationError::InvalidColor(trimmed.to_string());

        if let Some(color) = Self::named(trimmed) {
            return Ok(color);
        }

        if let Some(caps) = DECIMAL_CHANNELS.captures(trimmed) {
            let channels = caps
                .iter()
                .skip(1)
                .flatten()
                .map(|m| m.as_str().parse::<u16>().map(clamp_channel))
                .collect::<Result<Vec<u8>, _>>()
                .map_err(|_| invalid())?;
            return Self::from_channels(&channels).ok_or_else(invalid);
        }

        if HEX_CHANNELS.is_match(trimmed) {
            let digits = &trimmed[1..];
            let channels = (0..digits.len())
                .step_by(2)
                .map(|i| u16::from_str_radix(&digits[i..i + 2], 16).map(clamp_channel))
                .collect::<Result<Vec<u8>, _>>()
                .map_err(|_| invalid())?;
            return Self::from_channels(&channels).ok_or_else(invalid);
        }

        Err(invalid())
    }

    /// Look up a colour word, ignoring case
    pub fn named(name: &str) -> Option<Self> {
        NAMED_COLORS
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, color)| *color)
    }

    /// Build from a 3 or 4 element channel slice
    pub fn from_channels(channels: &[u8]) -> Option<Self> {
        match *channels {
            [r, g, b] => Some(Self::Rgb(r, g, b)),
            [r, g, b, a] => Some(Self::Rgba(r, g, b, a)),
            _ => None,
        }
    }

    /// RGBA channels; RGB colours are fully opaque
    pub fn to_rgba(self) -> [u8; 4] {
        match self {
            Self::Rgb(r, g, b) => [r, g, b, 255],
            Self::Rgba(r, g, b, a) => [r, g, b, a],
        }
    }

    /// Same colour with any alpha channel dropped
    pub fn opaque(self) -> Self {
        match self {
            Self::Rgba(r, g, b, _) => Self::Rgb(r, g, b),
            rgb => rgb,
        }
    }
}

fn clamp_channel(value: u16) -> u8 {
    value.min(255) as u8
}

impl FromStr for Color {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Canonical `r,g,b[,a]` form, accepted back by [`Color::parse`]
impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Rgb(r, g, b) => write!(f, "{},{},{}", r, g, b),
            Self::Rgba(r, g, b, a) => write!(f, "{},{},{},{}", r, g, b, a),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_named_colors_ignore_case_and_whitespace() {
        assert_eq!(Color::parse("white"), Ok(Color::Rgb(255, 255, 255)));
        assert_eq!(Color::parse("  RED "), Ok(Color::Rgb(255, 0, 0)));
        assert_eq!(Color::parse("Cyan"), Ok(Color::Rgb(0, 255, 255)));
    }

    #[test]
    fn test_decimal_channels() {
        assert_eq!(Color::parse("0,0,0"), Ok(Color::Rgb(0, 0, 0)));
        assert_eq!(Color::parse("0,0,0,0"), Ok(Color::Rgba(0, 0, 0, 0)));
        assert_eq!(Color::parse("0 , 0 , 0"), Ok(Color::Rgb(0, 0, 0)));
        assert_eq!(Color::parse("12 ,34, 56 , 78"), Ok(Color::Rgba(12, 34, 56, 78)));
    }

    #[test]
    fn test_decimal_channels_clamp_above_255() {
        assert_eq!(Color::parse("300,300,300"), Ok(Color::Rgb(255, 255, 255)));
        assert_eq!(Color::parse("256,0,999,300"), Ok(Color::Rgba(255, 0, 255, 255)));
        for n in 256..=999u16 {
            let raw = format!("1,{},2", n);
            assert_eq!(Color::parse(&raw), Ok(Color::Rgb(1, 255, 2)), "{raw}");
        }
    }

    #[test]
    fn test_hex_channels() {
        assert_eq!(Color::parse("#FFFFFF"), Ok(Color::Rgb(255, 255, 255)));
        assert_eq!(Color::parse("#ff000080"), Ok(Color::Rgba(255, 0, 0, 128)));
        assert_eq!(Color::parse("#0a0B0c"), Ok(Color::Rgb(10, 11, 12)));
    }

    #[test]
    fn test_rejects_malformed_input() {
        for raw in [
            "#HHHHHH",
            "#HHHHHHHH",
            "#FFF",
            "#FFFFFFF",
            "not a color",
            "",
            "   ",
            "-1, -1, -1",
            "1,2",
            "1,2,3,4,5",
            "1;2;3",
            "1000,0,0",
            "1.5,2,3",
        ] {
            assert_eq!(
                Color::parse(raw),
                Err(ValidationError::InvalidColor(raw.trim().to_string())),
                "{raw:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_parse_is_idempotent_on_canonical_form() {
        for raw in ["pink", "300, 2, 3", "#01020304", "0,0,0,0", "#abcdef"] {
            let color = Color::parse(raw).unwrap();
            assert_eq!(Color::parse(&color.to_string()), Ok(color));
        }
    }

    #[test]
    fn test_channel_patterns_compile() {
        assert!(DECIMAL_CHANNELS.is_match("1,2,3"));
        assert!(HEX_CHANNELS.is_match("#010203"));
    }

    #[test]
    fn test_opaque_and_rgba_conversion() {
        let color = Color::Rgba(1, 2, 3, 4);
        assert_eq!(color.opaque(), Color::Rgb(1, 2, 3));
        assert_eq!(Color::Rgb(9, 8, 7).to_rgba(), [9, 8, 7, 255]);
        assert_eq!(TRANSPARENT.to_rgba(), [0, 0, 0, 0]);
        assert_eq!(Color::Rgb(0, 0, 0).opaque(), Color::Rgb(0, 0, 0));
    }
}
