/// Shared geometry and mode types.
pub mod core;
/// Error types and result aliases.
pub mod error;
pub(crate) mod math;
pub(crate) mod scan;
