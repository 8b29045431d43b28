//! Color lookup and contrast utilities.
//!
//! This module provides functions for:
//! - Normalizing free-text color identifiers
//! - Resolving identifiers to `#RRGGBB` values (hex syntax or named colors)
//! - Picking a readable foreground for an arbitrary background

use crate::palette;

/// Foreground used on bright backgrounds.
pub const BLACK: &str = "#000000";

/// Foreground used on dark backgrounds, and when the background is unusable.
pub const WHITE: &str = "#FFFFFF";

/// Weighted brightness above which a background counts as bright.
///
/// Compared against `299*R + 587*G + 114*B`, whose maximum is `255_000`.
pub const BRIGHTNESS_THRESHOLD: u32 = 186_000;

/// RGB color representation with red, green, and blue components.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RGB {
    /// Red component (0-255)
    pub r: u8,
    /// Green component (0-255)
    pub g: u8,
    /// Blue component (0-255)
    pub b: u8,
}

impl RGB {
    /// Create a new RGB color from individual components.
    ///
    /// # Arguments
    ///
    /// * `r` - Red component (0-255)
    /// * `g` - Green component (0-255)
    /// * `b` - Blue component (0-255)
    #[must_use]
    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Format as lowercase `#rrggbb`.
    #[must_use]
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Canonicalize a color identifier: drop all whitespace and lowercase.
///
/// `" Light Blue "`, `"LightBlue"` and `"lightblue"` all normalize to
/// `"lightblue"`. The function is idempotent.
///
/// # Arguments
///
/// * `text` - Free-text identifier as typed or stored
///
/// # Returns
///
/// The identifier without whitespace, lowercased.
#[must_use]
pub fn normalize(text: &str) -> String {
    strip_whitespace(text).to_lowercase()
}

fn strip_whitespace(text: &str) -> String {
    text.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Check for `#` followed by exactly six hex digits.
#[must_use]
pub fn is_hex_color(s: &str) -> bool {
    s.len() == 7 && s.starts_with('#') && s.bytes().skip(1).all(|b| b.is_ascii_hexdigit())
}

/// Resolve a color identifier to a `#RRGGBB` value.
///
/// Hex input is returned as given (whitespace removed, digit case untouched).
/// Anything else is normalized and looked up in the named color table.
///
/// # Arguments
///
/// * `input` - Color name or `#RRGGBB` string
///
/// # Returns
///
/// - `Some(value)` for valid hex syntax or a known name
/// - `None` if the identifier is not recognized
///
/// # Examples
///
/// ```
/// # use dirtint::color::lookup;
/// assert_eq!(lookup(" Light Blue ").as_deref(), Some("#ADD8E6"));
/// assert_eq!(lookup("#aBc123").as_deref(), Some("#aBc123"));
/// assert_eq!(lookup("notacolor"), None);
/// ```
#[must_use]
pub fn lookup(input: &str) -> Option<String> {
    let stripped = strip_whitespace(input);
    if is_hex_color(&stripped) {
        return Some(stripped);
    }
    palette::lookup_name(&stripped.to_lowercase()).map(str::to_owned)
}

/// Weighted YIQ brightness of a color, in `0..=255_000`.
#[must_use]
pub fn brightness(rgb: RGB) -> u32 {
    299 * u32::from(rgb.r) + 587 * u32::from(rgb.g) + 114 * u32::from(rgb.b)
}

/// Pick black or white text for a background.
///
/// The background may be given with or without the leading `#`. Anything that
/// is not exactly six hex digits gets white text.
///
/// # Arguments
///
/// * `background` - Background color, `#RRGGBB` or `RRGGBB`
///
/// # Returns
///
/// - [`BLACK`] if the weighted brightness is above [`BRIGHTNESS_THRESHOLD`]
/// - [`WHITE`] otherwise
///
/// # Examples
///
/// ```
/// # use dirtint::color::contrast_for;
/// assert_eq!(contrast_for("#FFFFFF"), "#000000");
/// assert_eq!(contrast_for("#808080"), "#FFFFFF");
/// ```
#[must_use]
pub fn contrast_for(background: &str) -> &'static str {
    let digits = background.strip_prefix('#').unwrap_or(background);
    if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return WHITE;
    }
    let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&digits[range], 16);
    let (Ok(r), Ok(g), Ok(b)) = (channel(0..2), channel(2..4), channel(4..6)) else {
        return WHITE;
    };

    if brightness(RGB::new(r, g, b)) > BRIGHTNESS_THRESHOLD {
        BLACK
    } else {
        WHITE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize() {
        assert_eq!(normalize(" Light Blue "), "lightblue");
        assert_eq!(normalize("Light\tBlue\r\n"), "lightblue");
        assert_eq!(normalize("@GIT"), "@git");
        for input in [" Light Blue ", "#AbC 123", "\tDracula\n", ""] {
            assert_eq!(normalize(&normalize(input)), normalize(input));
        }
    }

    #[test]
    fn test_is_hex_color() {
        assert!(is_hex_color("#000000"));
        assert!(is_hex_color("#AbC123"));
        assert!(!is_hex_color("#AbC12"));
        assert!(!is_hex_color("#AbC1234"));
        assert!(!is_hex_color("#gg0000"));
        assert!(!is_hex_color("000000"));
        assert!(!is_hex_color("#00000é"));
        assert!(!is_hex_color(""));
    }

    #[test]
    fn test_lookup_names() {
        for name in [" Light Blue ", "LightBlue", "lightblue", "LIGHT\tBLUE"] {
            assert_eq!(lookup(name).as_deref(), Some("#ADD8E6"));
        }
        for (name, value) in palette::color_names() {
            assert_eq!(lookup(&name.to_uppercase()).as_deref(), Some(value));
        }
        assert_eq!(lookup("notacolor"), None);
        assert_eq!(lookup(""), None);
    }

    #[test]
    fn test_lookup_hex_preserves_case() {
        for hex in ["#abcdef", "#ABCDEF", "#aBcDeF", "#012345"] {
            assert_eq!(lookup(hex).as_deref(), Some(hex));
        }
        assert_eq!(lookup(" #FF8000 ").as_deref(), Some("#FF8000"));
        assert_eq!(lookup("#FF800"), None);
        assert_eq!(lookup("#FF80000"), None);
        assert_eq!(lookup("#FF80ZZ"), None);
    }

    #[test]
    fn test_contrast_for() {
        assert_eq!(contrast_for("#FFFFFF"), BLACK);
        assert_eq!(contrast_for("#000000"), WHITE);
        // 128 * 1000 = 128000, below the threshold
        assert_eq!(contrast_for("#808080"), WHITE);
        // 0*299 + 255*587 + 0*114 = 149685, below the threshold
        assert_eq!(contrast_for("#00FF00"), WHITE);
        assert_eq!(contrast_for("#FFFF00"), BLACK);
        assert_eq!(contrast_for("ffffff"), BLACK);
        assert_eq!(contrast_for("#fff"), WHITE);
        assert_eq!(contrast_for("#zzzzzz"), WHITE);
        assert_eq!(contrast_for(""), WHITE);
    }

    #[test]
    fn test_contrast_threshold_is_exclusive() {
        // 186 * 1000 sits exactly on the threshold
        assert_eq!(brightness(RGB::new(186, 186, 186)), BRIGHTNESS_THRESHOLD);
        assert_eq!(contrast_for("#BABABA"), WHITE);
        assert_eq!(contrast_for("#BBBBBB"), BLACK);
    }

    #[test]
    fn test_to_hex() {
        assert_eq!(RGB::new(255, 128, 0).to_hex(), "#ff8000");
        assert_eq!(RGB::new(0, 0, 0).to_hex(), "#000000");
    }
}
