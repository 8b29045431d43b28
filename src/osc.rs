//! OSC (Operating System Command) sequences for terminal colors.
//!
//! This module provides functions for:
//! - Building OSC 10/11 sequences that set foreground and background
//! - Building OSC 110/111 sequences that restore the emulator's own colors

/// Sequence setting the default foreground (OSC 10).
///
/// # Arguments
///
/// * `hex` - Foreground color as `#RRGGBB`
///
/// # Returns
///
/// `ESC ] 10 ; <hex> BEL`
#[must_use]
pub fn set_foreground(hex: &str) -> String {
    format!("\x1b]10;{hex}\x07")
}

/// Sequence setting the default background (OSC 11).
///
/// # Arguments
///
/// * `hex` - Background color as `#RRGGBB`
///
/// # Returns
///
/// `ESC ] 11 ; <hex> BEL`
#[must_use]
pub fn set_background(hex: &str) -> String {
    format!("\x1b]11;{hex}\x07")
}

/// Sequence restoring the emulator's configured foreground (OSC 110).
pub const RESET_FOREGROUND: &str = "\x1b]110\x07";

/// Sequence restoring the emulator's configured background (OSC 111).
pub const RESET_BACKGROUND: &str = "\x1b]111\x07";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_sequences() {
        assert_eq!(set_background("#ADD8E6"), "\x1b]11;#ADD8E6\x07");
        assert_eq!(set_foreground("#000000"), "\x1b]10;#000000\x07");
        assert_eq!(RESET_BACKGROUND.as_bytes(), b"\x1b]111\x07");
        assert_eq!(RESET_FOREGROUND.as_bytes(), b"\x1b]110\x07");
    }

    #[test]
    fn test_set_sequences_keep_hex_case() {
        assert_eq!(set_background("#aBcDeF"), "\x1b]11;#aBcDeF\x07");
    }
}
