use crate::{
    foundation::{
        core::{BezPath, Point},
        error::{MarkError, MarkResult},
        math::Rng64,
    },
    pattern::source::{BlobParams, BlobSource},
};

/// Seeded organic outline: anchors on a circle with per-anchor radial noise,
/// joined by a closed Catmull-Rom spline expressed as cubic Béziers.
///
/// Every outline for the same `extra_points` has the same command structure,
/// which keeps outlines of different seeds numerically aligned.
#[derive(Clone, Copy, Debug, Default)]
pub struct RadialBlob;

impl RadialBlob {
    fn anchors(params: &BlobParams) -> Vec<Point> {
        let mut rng = Rng64::from_seed_str(&params.seed);
        let count = 3 + params.extra_points as usize;
        let radius = params.size / 2.0;
        let center = Point::new(radius, radius);
        // randomness 10 would allow an anchor to collapse onto the center.
        let noise = (params.randomness / 10.0).clamp(0.0, 0.9);
        let phase = rng.next_f64_01() * std::f64::consts::TAU / count as f64;

        (0..count)
            .map(|i| {
                let angle = phase + i as f64 * std::f64::consts::TAU / count as f64;
                let r = radius * (1.0 - rng.next_f64_01() * noise);
                Point::new(center.x + r * angle.cos(), center.y + r * angle.sin())
            })
            .collect()
    }
}

impl BlobSource for RadialBlob {
    fn outline(&self, params: &BlobParams) -> MarkResult<String> {
        if !(params.size.is_finite() && params.size > 0.0) {
            return Err(MarkError::validation("blob size must be finite and > 0"));
        }
        let pts = Self::anchors(params);
        let n = pts.len();

        let mut path = BezPath::new();
        path.move_to(pts[0]);
        for i in 0..n {
            let p0 = pts[(i + n - 1) % n];
            let p1 = pts[i];
            let p2 = pts[(i + 1) % n];
            let p3 = pts[(i + 2) % n];
            let c1 = p1 + (p2 - p0) / 6.0;
            let c2 = p2 - (p3 - p1) / 6.0;
            path.curve_to(c1, c2, p2);
        }
        path.close_path();
        Ok(path.to_svg())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/pattern/blob.rs"]
mod tests;
