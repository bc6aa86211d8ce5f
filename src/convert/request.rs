use crate::convert::input::parse_value;
use crate::convert::kind::{resolve_strategy, ConversionKind};
use serde::Serialize;

/// One discrete conversion request: the raw text the user typed and the
/// selector label they chose. Built fresh per action, consumed immediately.
#[derive(Debug, Clone)]
pub struct ConversionRequest {
    pub raw: String,
    pub label: String,
}

/// What a request produced: either a converted value, or nothing because the
/// raw input was not a valid number. Never partially valid.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ConversionOutcome {
    Converted {
        kind: ConversionKind,
        input: f64,
        output: f64,
    },
    InvalidInput,
}

impl ConversionRequest {
    pub fn new(raw: &str, label: &str) -> Self {
        Self {
            raw: raw.to_string(),
            label: label.to_string(),
        }
    }

    /// Run the full pipeline: parse-or-null, then resolve and convert.
    ///
    /// An unparseable input short-circuits before any strategy is resolved,
    /// so no conversion runs on invalid input.
    pub fn run(&self) -> ConversionOutcome {
        match parse_value(&self.raw) {
            Some(value) => {
                let kind = resolve_strategy(&self.label);
                ConversionOutcome::Converted {
                    kind,
                    input: value,
                    output: kind.convert(value),
                }
            }
            None => ConversionOutcome::InvalidInput,
        }
    }
}
