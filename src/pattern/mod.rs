//! Seed to triangles and outline.

/// Built-in outline source.
pub mod blob;
/// Normalizing, sorting front end over the raw sources.
pub mod generate;
/// Adapter traits for the raw shape generators.
pub mod source;
/// Built-in triangulation source.
pub mod trianglify;
