use serde::{Deserialize, Serialize};
use std::fmt;

/// The three supported conversions. Each is a one-way transformation with a
/// fixed formula; there is no reverse direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ConversionKind {
    Length,
    Weight,
    Temperature,
}

impl ConversionKind {
    /// All kinds, in the order they appear in the selector list.
    pub fn all() -> [ConversionKind; 3] {
        [
            ConversionKind::Length,
            ConversionKind::Weight,
            ConversionKind::Temperature,
        ]
    }

    /// The user-facing selector label for this kind.
    pub fn label(&self) -> &'static str {
        match self {
            ConversionKind::Length => "Length",
            ConversionKind::Weight => "Weight",
            ConversionKind::Temperature => "Temperature",
        }
    }

    /// Human-readable description of what the conversion does.
    pub fn formula(&self) -> &'static str {
        match self {
            ConversionKind::Length => "meters to kilometers (value / 1000)",
            ConversionKind::Weight => "grams to kilograms (value / 1000)",
            ConversionKind::Temperature => "Celsius to Fahrenheit (value * 9/5 + 32)",
        }
    }

    /// Apply this kind's conversion formula. Pure and total over f64: no
    /// side effects, no failure modes, same output for the same input.
    pub fn convert(&self, value: f64) -> f64 {
        match self {
            ConversionKind::Length => value / 1000.0,
            ConversionKind::Weight => value / 1000.0,
            ConversionKind::Temperature => value * 9.0 / 5.0 + 32.0,
        }
    }
}

impl fmt::Display for ConversionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Map a selector label to its conversion kind.
///
/// Matching is exact and case-sensitive. Any unrecognized label (empty
/// string, wrong case, unrelated text) resolves to `Length` without
/// signaling anything; callers never see an error from this function.
pub fn resolve_strategy(label: &str) -> ConversionKind {
    match label {
        "Length" => ConversionKind::Length,
        "Weight" => ConversionKind::Weight,
        "Temperature" => ConversionKind::Temperature,
        _ => ConversionKind::Length,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_formula() {
        assert_eq!(ConversionKind::Length.convert(2000.0), 2.0);
        assert_eq!(ConversionKind::Length.convert(0.0), 0.0);
        assert_eq!(ConversionKind::Length.convert(-500.0), -0.5);
    }

    #[test]
    fn test_weight_formula() {
        assert_eq!(ConversionKind::Weight.convert(5000.0), 5.0);
        assert_eq!(ConversionKind::Weight.convert(250.0), 0.25);
    }

    #[test]
    fn test_temperature_formula() {
        assert_eq!(ConversionKind::Temperature.convert(0.0), 32.0);
        assert_eq!(ConversionKind::Temperature.convert(100.0), 212.0);
        assert_eq!(ConversionKind::Temperature.convert(-40.0), -40.0);
    }

    #[test]
    fn test_convert_is_deterministic() {
        let kind = ConversionKind::Temperature;
        assert_eq!(kind.convert(37.5), kind.convert(37.5));
    }

    #[test]
    fn test_resolve_known_labels() {
        assert_eq!(resolve_strategy("Length"), ConversionKind::Length);
        assert_eq!(resolve_strategy("Weight"), ConversionKind::Weight);
        assert_eq!(resolve_strategy("Temperature"), ConversionKind::Temperature);
    }

    #[test]
    fn test_resolve_falls_back_to_length() {
        assert_eq!(resolve_strategy(""), ConversionKind::Length);
        assert_eq!(resolve_strategy("length"), ConversionKind::Length);
        assert_eq!(resolve_strategy("Weightx"), ConversionKind::Length);
        assert_eq!(resolve_strategy("TEMPERATURE"), ConversionKind::Length);
        assert_eq!(resolve_strategy("something else"), ConversionKind::Length);
    }

    #[test]
    fn test_labels_round_trip_through_resolve() {
        for kind in ConversionKind::all() {
            assert_eq!(resolve_strategy(kind.label()), kind);
        }
    }

    #[test]
    fn test_display_matches_label() {
        assert_eq!(ConversionKind::Temperature.to_string(), "Temperature");
    }
}
