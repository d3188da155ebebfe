//! Theme accent colors

use ratatui::style::Color;

/// Accent used when a theme carries no usable color
pub const DEFAULT_ACCENT: Color = Color::Rgb(0x43, 0x61, 0xee);

/// Parse `#rrggbb` or `#rgb` into an RGB color.
pub fn parse_hex_color(hex: &str) -> Option<Color> {
    let digits = hex.trim().strip_prefix('#')?;
    if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    match digits.len() {
        6 => {
            let r = u8::from_str_radix(&digits[0..2], 16).ok()?;
            let g = u8::from_str_radix(&digits[2..4], 16).ok()?;
            let b = u8::from_str_radix(&digits[4..6], 16).ok()?;
            Some(Color::Rgb(r, g, b))
        }
        3 => {
            let mut channels = digits.chars().map(|c| {
                let v = c.to_digit(16).unwrap_or(0) as u8;
                v * 16 + v
            });
            Some(Color::Rgb(
                channels.next()?,
                channels.next()?,
                channels.next()?,
            ))
        }
        _ => None,
    }
}

/// Accent for a theme color string, falling back to [`DEFAULT_ACCENT`]
pub fn theme_color(color: &str) -> Color {
    parse_hex_color(color).unwrap_or(DEFAULT_ACCENT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_long_form() {
        assert_eq!(parse_hex_color("#4361ee"), Some(Color::Rgb(0x43, 0x61, 0xee)));
        assert_eq!(parse_hex_color(" #FF0000 "), Some(Color::Rgb(255, 0, 0)));
    }

    #[test]
    fn test_parse_short_form() {
        assert_eq!(parse_hex_color("#f80"), Some(Color::Rgb(0xff, 0x88, 0x00)));
    }

    #[test]
    fn test_rejects_garbage() {
        assert_eq!(parse_hex_color("4361ee"), None);
        assert_eq!(parse_hex_color("#43"), None);
        assert_eq!(parse_hex_color("#gg0000"), None);
        assert_eq!(parse_hex_color("#é12345"), None);
        assert_eq!(theme_color(""), DEFAULT_ACCENT);
    }
}
