use kurbo::Shape as _;

use crate::foundation::{
    core::{Affine, BezPath, Rect},
    error::{MarkError, MarkResult},
};

/// Parse an SVG path description, rejecting empty or malformed input.
pub fn parse_svg_path(d: &str) -> MarkResult<BezPath> {
    let d = d.trim();
    if d.is_empty() {
        return Err(MarkError::generation("outline path must be non-empty"));
    }
    BezPath::from_svg(d).map_err(|e| MarkError::generation(format!("invalid outline path: {e}")))
}

/// Affine map taking `bbox` onto `[0, width] x [0, height]`, each axis scaled independently.
pub fn fit_affine(bbox: Rect, width: f64, height: f64) -> MarkResult<Affine> {
    if !(bbox.width() > 0.0 && bbox.height() > 0.0) {
        return Err(MarkError::generation(
            "outline path bounding box must have non-zero extent",
        ));
    }
    let scale = Affine::scale_non_uniform(width / bbox.width(), height / bbox.height());
    Ok(scale * Affine::translate((-bbox.x0, -bbox.y0)))
}

/// Translate `d` so its bounding box starts at the origin, then stretch it to `width` x `height`.
pub fn scale_svg_path(d: &str, width: f64, height: f64) -> MarkResult<String> {
    let mut path = parse_svg_path(d)?;
    let xf = fit_affine(path.bounding_box(), width, height)?;
    path.apply_affine(xf);
    Ok(path.to_svg())
}

#[cfg(test)]
#[path = "../../tests/unit/path/scale.rs"]
mod tests;
