//! Category tab colors.

use std::sync::LazyLock;

use regex::Regex;

/// Color assigned to a category created without one.
pub const DEFAULT_CATEGORY_COLOR: &str = "#000000";

/// `#RRGGBB` or `#RRGGBBAA`, case-insensitive.
pub const HEX_COLOR_PATTERN: &str = r"^#(?:[0-9A-Fa-f]{6}|[0-9A-Fa-f]{8})$";

static HEX_COLOR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(HEX_COLOR_PATTERN).expect("valid regex"));

/// Validate that a color string is in `#RRGGBB` or `#RRGGBBAA` hex format.
pub fn validate_hex_color(color: &str) -> Result<(), String> {
    if HEX_COLOR_RE.is_match(color) {
        Ok(())
    } else {
        Err(format!(
            "Invalid color '{color}'. Must be in #RRGGBB or #RRGGBBAA hex format"
        ))
    }
}
