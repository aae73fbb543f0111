//! Conversion between hex strings and [Color].
//!
//! Stored values use `#RRGGBB` for opaque colors and `#AARRGGBB` when an
//! alpha channel is present. A `0x` prefix, or no prefix at all, is also
//! accepted.

use thiserror::Error;
use vello::peniko::Color;

/// Why a string could not be converted into a [Color].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ColorParseError {
    /// The value was empty (or only a prefix).
    #[error("Color value is empty")]
    Empty,
    /// The digits were neither 6 nor 8 characters long.
    #[error("Hex color must be 6 or 8 characters, got {len}")]
    InvalidLength {
        /// Number of characters after the prefix.
        len: usize,
    },
    /// A character was not a hex digit.
    #[error("Invalid hex color '{value}'")]
    InvalidDigit {
        /// The offending value, prefix stripped.
        value: String,
    },
}

/// Parse a hex color string into a [Color].
///
/// ```rust
/// use colorprops_core::color::parse_hex_color;
///
/// let color = parse_hex_color("#112233").unwrap();
/// let rgba = color.to_rgba8();
/// assert_eq!((rgba.r, rgba.g, rgba.b, rgba.a), (0x11, 0x22, 0x33, 0xff));
/// ```
pub fn parse_hex_color(value: &str) -> Result<Color, ColorParseError> {
    let trimmed = value.trim();
    let hex = trimmed
        .strip_prefix('#')
        .or_else(|| trimmed.strip_prefix("0x"))
        .or_else(|| trimmed.strip_prefix("0X"))
        .unwrap_or(trimmed);

    if hex.is_empty() {
        return Err(ColorParseError::Empty);
    }
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(ColorParseError::InvalidDigit {
            value: hex.to_string(),
        });
    }

    // All ASCII from here on, byte slicing is safe.
    let channel = |i: usize| {
        u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| ColorParseError::InvalidDigit {
            value: hex.to_string(),
        })
    };

    match hex.len() {
        6 => Ok(Color::from_rgba8(channel(0)?, channel(2)?, channel(4)?, 255)),
        8 => {
            let a = channel(0)?;
            Ok(Color::from_rgba8(channel(2)?, channel(4)?, channel(6)?, a))
        },
        len => Err(ColorParseError::InvalidLength { len }),
    }
}

/// Format a [Color] the way [parse_hex_color] reads it back.
pub fn format_hex_color(color: Color) -> String {
    let rgba = color.to_rgba8();
    if rgba.a == 255 {
        format!("#{:02x}{:02x}{:02x}", rgba.r, rgba.g, rgba.b)
    } else {
        format!("#{:02x}{:02x}{:02x}{:02x}", rgba.a, rgba.r, rgba.g, rgba.b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rgba(color: Color) -> (u8, u8, u8, u8) {
        let c = color.to_rgba8();
        (c.r, c.g, c.b, c.a)
    }

    #[test]
    fn test_parse_rgb() {
        assert_eq!(rgba(parse_hex_color("#112233").unwrap()), (0x11, 0x22, 0x33, 0xff));
        assert_eq!(rgba(parse_hex_color("  #ABCDEF ").unwrap()), (0xab, 0xcd, 0xef, 0xff));
        assert_eq!(rgba(parse_hex_color("0x000000").unwrap()), (0, 0, 0, 0xff));
        assert_eq!(rgba(parse_hex_color("ff8000").unwrap()), (0xff, 0x80, 0x00, 0xff));
    }

    #[test]
    fn test_parse_argb_alpha_first() {
        assert_eq!(rgba(parse_hex_color("#80112233").unwrap()), (0x11, 0x22, 0x33, 0x80));
        assert_eq!(rgba(parse_hex_color("#00ffffff").unwrap()), (0xff, 0xff, 0xff, 0x00));
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(parse_hex_color("").unwrap_err(), ColorParseError::Empty);
        assert_eq!(parse_hex_color("#").unwrap_err(), ColorParseError::Empty);
        assert_eq!(
            parse_hex_color("#1234").unwrap_err(),
            ColorParseError::InvalidLength { len: 4 }
        );
        assert_eq!(
            parse_hex_color("#12345g").unwrap_err(),
            ColorParseError::InvalidDigit {
                value: "12345g".to_string()
            }
        );
        // Non-ASCII must not panic on byte slicing.
        assert!(matches!(
            parse_hex_color("#ééé"),
            Err(ColorParseError::InvalidDigit { .. })
        ));
    }

    #[test]
    fn test_format() {
        assert_eq!(format_hex_color(Color::from_rgb8(0x11, 0x22, 0x33)), "#112233");
        assert_eq!(
            format_hex_color(Color::from_rgba8(0x11, 0x22, 0x33, 0x80)),
            "#80112233"
        );
    }
}
