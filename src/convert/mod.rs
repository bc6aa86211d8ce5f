// Unit conversion core: three fixed strategies selected by a user-facing label
// The presentation layer (CLI) owns input acquisition and rendering; each
// request is built fresh, run to completion, and dropped.

pub mod error;
pub mod formatter;
pub mod input;
pub mod kind;
pub mod request;


pub use error::ConvertError;
pub use formatter::{format_outcome, format_outcome_json, INVALID_INPUT_MESSAGE};
pub use input::{looks_like_number, parse_value};
pub use kind::{resolve_strategy, ConversionKind};
pub use request::{ConversionOutcome, ConversionRequest};
