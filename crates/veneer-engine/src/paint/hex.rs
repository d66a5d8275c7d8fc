//! Hex color literals.
//!
//! Accepted token forms (case-insensitive, optional leading `#`, surrounding
//! whitespace ignored):
//!
//! | Digits | Meaning |
//! |--------|---------|
//! | 3 | `RGB` shorthand, each digit doubled, opaque |
//! | 6 | `RRGGBB`, opaque |
//! | 8 | `RRGGBBAA`, explicit alpha |
//!
//! [`parse_hex_colors`] reads a comma-separated list and silently skips tokens
//! that are not one of these forms. [`Color::from_hex`] is the strict
//! single-token variant that reports why a token was rejected.

use std::fmt;
use std::str::FromStr;

use super::Color;

/// Error returned by [`Color::from_hex`].
///
/// Wrong length and non-hex characters are reported as the same kind; the
/// payload is the offending token after trimming.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HexColorError {
    MalformedToken(String),
}

impl fmt::Display for HexColorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HexColorError::MalformedToken(token) => write!(
                f,
                "malformed hex color {token:?}: expected #rgb, #rrggbb or #rrggbbaa"
            ),
        }
    }
}

impl std::error::Error for HexColorError {}

impl Color {
    /// Decodes a single hex color token.
    ///
    /// ```
    /// use veneer_engine::paint::Color;
    ///
    /// let c = Color::from_hex(" #fff ").unwrap();
    /// assert_eq!(c, Color::white());
    /// assert!(Color::from_hex("#12345").is_err());
    /// ```
    pub fn from_hex(token: &str) -> Result<Self, HexColorError> {
        let trimmed = token.trim();
        let upper = trimmed.to_ascii_uppercase();
        let digits = upper.strip_prefix('#').unwrap_or(&upper);

        let malformed = || HexColorError::MalformedToken(trimmed.to_string());

        // Validate before decoding: `from_str_radix` would accept a leading `+`.
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(malformed());
        }

        let expanded;
        let digits = if digits.len() == 3 {
            expanded = digits.chars().flat_map(|c| [c, c]).collect::<String>();
            expanded.as_str()
        } else {
            digits
        };

        // At most 8 hex digits at this point, so the value fits in a u32.
        let decode = |s: &str| u32::from_str_radix(s, 16).map_err(|_| malformed());
        match digits.len() {
            6 => {
                let v = decode(digits)?;
                Ok(Self::from_srgb_u8((v >> 16) as u8, (v >> 8) as u8, v as u8, 0xFF))
            }
            8 => {
                let v = decode(digits)?;
                Ok(Self::from_srgb_u8((v >> 24) as u8, (v >> 16) as u8, (v >> 8) as u8, v as u8))
            }
            _ => Err(malformed()),
        }
    }
}

impl FromStr for Color {
    type Err = HexColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

/// Parses a comma-separated list of hex colors.
///
/// Malformed tokens are dropped in place; the remaining colors keep their
/// original order. Empty or fully invalid input yields an empty vector.
pub fn parse_hex_colors(configuration: &str) -> Vec<Color> {
    configuration
        .split(',')
        .filter_map(|token| Color::from_hex(token).ok())
        .collect()
}
