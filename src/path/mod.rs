//! SVG path data helpers for the clip outline.

pub mod interp;
pub mod scale;
