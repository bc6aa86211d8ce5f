use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Regex pattern to detect plain numeric input
    /// Matches: optional sign, digits with optional decimal part (or a bare
    /// decimal like ".5"), optional scientific notation
    /// Examples: "2000", "-40", "10.5", ".5", "1e3"
    static ref NUMBER_PATTERN: Regex = Regex::new(
        r"^[+-]?(\d+(\.\d*)?|\.\d+)([eE][+-]?\d+)?$"
    ).unwrap();
}

/// Check if a string looks like a plain number, before attempting a parse.
pub fn looks_like_number(s: &str) -> bool {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return false;
    }

    NUMBER_PATTERN.is_match(trimmed)
}

/// Parse raw text into a value, or `None` if it is not a valid number.
///
/// Parse-or-null: surrounding whitespace is trimmed, then the whole
/// remainder must parse as one f64. No partial parses, no locale-aware
/// separators. A `None` here means no conversion is attempted downstream.
pub fn parse_value(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok()
}
