/// `hsl()` parsing, normalization and interpolation.
pub mod hsl;
