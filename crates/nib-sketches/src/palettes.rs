//! The curated palette table.
//!
//! Palettes are keyed by short names; `"000"` is the driver default.

/// Default palette name.
pub const DEFAULT_PALETTE: &str = "000";

const TABLE: &[(&str, &[&str])] = &[
    ("000", &["#151513", "#e0d8c5", "#d23f0f", "#f6b700", "#5a8a8a"]),
    ("roygbiv", &["#e03616", "#f18805", "#f5d547", "#388659", "#2e5077", "#5d3a9b"]),
    ("dust", &["#cbbba0", "#a58d7f", "#706563", "#3f3c3a", "#e8e4da"]),
    ("ink", &["#1b1b1e", "#373f51", "#58a4b0", "#a9bcd0", "#d8dbe2"]),
    ("marrakesh", &["#9a3b26", "#c96e12", "#e3b505", "#107e7d", "#044b7f"]),
    ("pool", &["#7bdff2", "#b2f7ef", "#eff7f6", "#f7d6e0", "#f2b5d4"]),
    ("ember", &["#03071e", "#6a040f", "#d00000", "#e85d04", "#ffba08"]),
    ("moss", &["#dad7cd", "#a3b18a", "#588157", "#3a5a40", "#344e41"]),
];

/// Look up a palette by name.
pub fn palette(name: &str) -> Option<&'static [&'static str]> {
    TABLE
        .iter()
        .find(|(n, _)| *n == name)
        .map(|(_, colors)| *colors)
}

/// The named palette, or the default table when the name is unknown.
pub fn palette_or_default(name: &str) -> &'static [&'static str] {
    palette(name).unwrap_or(TABLE[0].1)
}

/// All palette names in table order.
pub fn palette_names() -> impl Iterator<Item = &'static str> {
    TABLE.iter().map(|(name, _)| *name)
}

/// `(label, value)` pairs for the palette pane binding.
pub fn palette_options() -> Vec<(String, String)> {
    palette_names()
        .map(|name| (name.to_string(), name.to_string()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_palette_exists() {
        assert!(palette(DEFAULT_PALETTE).is_some());
    }

    #[test]
    fn unknown_name_falls_back() {
        assert_eq!(palette("no-such-palette"), None);
        assert_eq!(palette_or_default("no-such-palette"), palette("000").unwrap());
    }

    #[test]
    fn every_color_is_a_hex_triplet() {
        for name in palette_names() {
            for color in palette(name).unwrap() {
                assert!(color.starts_with('#') && color.len() == 7, "{name}: {color}");
                assert!(color[1..].chars().all(|c| c.is_ascii_hexdigit()));
            }
        }
    }

    #[test]
    fn options_cover_the_table() {
        let options = palette_options();
        assert_eq!(options.len(), palette_names().count());
        assert_eq!(options[0].1, "000");
    }
}
