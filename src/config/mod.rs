/// Serde-backed options with defaults and validation.
pub mod options;
