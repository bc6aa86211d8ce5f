use crate::convert::request::ConversionOutcome;

/// Fixed message shown when the raw input could not be parsed.
pub const INVALID_INPUT_MESSAGE: &str = "Please enter a valid number";

/// Render an outcome as display text.
///
/// Successful conversions use the runtime's default f64 formatting; no fixed
/// decimal precision is applied.
pub fn format_outcome(outcome: &ConversionOutcome) -> String {
    match outcome {
        ConversionOutcome::Converted { output, .. } => {
            format!("Converted Value: {}", output)
        }
        ConversionOutcome::InvalidInput => INVALID_INPUT_MESSAGE.to_string(),
    }
}

/// Render an outcome as pretty-printed JSON.
pub fn format_outcome_json(outcome: &ConversionOutcome) -> serde_json::Result<String> {
    serde_json::to_string_pretty(outcome)
}
