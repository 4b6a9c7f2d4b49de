/// Easing curves applied to linear progress.
pub mod ease;
