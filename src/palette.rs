//! Static color and theme tables.
//!
//! Names are stored in their normalized form (lowercase, no whitespace), so
//! callers must run input through [`crate::color::normalize`] before lookup.

use std::collections::HashMap;
use std::sync::LazyLock;

/// Named colors, keyed by normalized name.
const NAMED_COLORS: &[(&str, &str)] = &[
    ("black", "#000000"),
    ("white", "#FFFFFF"),
    ("red", "#FF0000"),
    ("green", "#008000"),
    ("lime", "#00FF00"),
    ("blue", "#0000FF"),
    ("yellow", "#FFFF00"),
    ("cyan", "#00FFFF"),
    ("magenta", "#FF00FF"),
    ("orange", "#FFA500"),
    ("purple", "#800080"),
    ("pink", "#FFC0CB"),
    ("brown", "#A52A2A"),
    ("gray", "#808080"),
    ("grey", "#808080"),
    ("silver", "#C0C0C0"),
    ("navy", "#000080"),
    ("teal", "#008080"),
    ("olive", "#808000"),
    ("maroon", "#800000"),
    ("coral", "#FF7F50"),
    ("salmon", "#FA8072"),
    ("gold", "#FFD700"),
    ("beige", "#F5F5DC"),
    ("ivory", "#FFFFF0"),
    ("lavender", "#E6E6FA"),
    ("mintcream", "#F5FFFA"),
    ("honeydew", "#F0FFF0"),
    ("lightblue", "#ADD8E6"),
    ("lightgreen", "#90EE90"),
    ("lightgray", "#D3D3D3"),
    ("lightgrey", "#D3D3D3"),
    ("lightyellow", "#FFFFE0"),
    ("lightpink", "#FFB6C1"),
    ("darkblue", "#00008B"),
    ("darkgreen", "#006400"),
    ("darkred", "#8B0000"),
    ("darkgray", "#A9A9A9"),
    ("darkgrey", "#A9A9A9"),
    ("darkslategray", "#2F4F4F"),
    ("midnightblue", "#191970"),
    ("skyblue", "#87CEEB"),
    ("steelblue", "#4682B4"),
    ("slategray", "#708090"),
    ("charcoal", "#36454F"),
    ("peach", "#FFE5B4"),
    ("mint", "#98FF98"),
];

/// Themes as `(name, background, foreground)`.
const THEMES: &[(&str, &str, &str)] = &[
    ("dracula", "#282A36", "#F8F8F2"),
    ("nord", "#2E3440", "#D8DEE9"),
    ("gruvbox", "#282828", "#EBDBB2"),
    ("monokai", "#272822", "#F8F8F2"),
    ("onedark", "#282C34", "#ABB2BF"),
    ("solarized-dark", "#002B36", "#839496"),
    ("solarized-light", "#FDF6E3", "#657B83"),
    ("catppuccin", "#1E1E2E", "#CDD6F4"),
];

static COLOR_MAP: LazyLock<HashMap<&'static str, &'static str>> =
    LazyLock::new(|| NAMED_COLORS.iter().copied().collect());

static THEME_MAP: LazyLock<HashMap<&'static str, Theme>> = LazyLock::new(|| {
    THEMES
        .iter()
        .map(|&(name, background, foreground)| {
            (
                name,
                Theme {
                    name,
                    background,
                    foreground,
                },
            )
        })
        .collect()
});

/// A named background/foreground pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    /// Normalized theme name
    pub name: &'static str,
    /// Background color as `#RRGGBB`
    pub background: &'static str,
    /// Foreground color as `#RRGGBB`
    pub foreground: &'static str,
}

/// Look up a normalized color name.
#[must_use]
pub fn lookup_name(name: &str) -> Option<&'static str> {
    COLOR_MAP.get(name).copied()
}

/// Look up a normalized theme name.
#[must_use]
pub fn lookup_theme(name: &str) -> Option<Theme> {
    THEME_MAP.get(name).copied()
}

/// All color names with their values, in table order.
pub fn color_names() -> impl Iterator<Item = (&'static str, &'static str)> {
    NAMED_COLORS.iter().copied()
}

/// All themes, in table order.
pub fn themes() -> impl Iterator<Item = Theme> {
    THEMES
        .iter()
        .map(|&(name, background, foreground)| Theme {
            name,
            background,
            foreground,
        })
}
