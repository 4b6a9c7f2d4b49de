use crate::{
    foundation::{error::MarkResult, math::Rng64},
    pattern::source::{RawPolygon, TriangulationParams, TriangulationSource},
};

/// Color ramps a pattern picks from, dark to light.
const RAMPS: &[&[(u8, u8, u8)]] = &[
    &[(8, 29, 88), (34, 94, 168), (65, 182, 196), (199, 233, 180)],
    &[(73, 0, 106), (174, 1, 126), (247, 104, 161), (252, 197, 192)],
    &[(0, 69, 41), (35, 132, 67), (120, 198, 121), (217, 240, 163)],
    &[(127, 39, 4), (217, 72, 1), (253, 141, 60), (253, 208, 162)],
    &[(63, 0, 125), (106, 81, 163), (158, 154, 200), (218, 218, 235)],
    &[(103, 0, 13), (203, 24, 29), (251, 106, 74), (252, 187, 161)],
];

/// Largest displacement of a grid point, as a fraction of one cell.
const MAX_JITTER: f64 = 0.45;

/// Upper bound on grid cells per axis; cells stretch past it.
pub(crate) const MAX_GRID_CELLS: usize = 256;

/// Seeded jittered-grid triangulation in the spirit of low-poly backgrounds.
///
/// The grid bleeds one cell past every canvas edge so the clip outline never
/// exposes an empty corner. Coordinates are written with three decimals, so
/// corners shared by neighbouring triangles are textually identical.
#[derive(Clone, Copy, Debug, Default)]
pub struct JitterGridTriangulator;

impl TriangulationSource for JitterGridTriangulator {
    fn triangulate(&self, params: &TriangulationParams) -> MarkResult<Vec<RawPolygon>> {
        if !(params.cell_size > 0.0 && params.width > 0.0 && params.height > 0.0) {
            return Ok(Vec::new());
        }
        let mut rng = Rng64::from_seed_str(&params.seed);
        let ramp = RAMPS[(rng.next_u64() % RAMPS.len() as u64) as usize];
        let flip_ramp = rng.next_u64() & 1 == 1;

        let bleed = params.cell_size;
        let span_x = params.width + 2.0 * bleed;
        let span_y = params.height + 2.0 * bleed;
        let cols = ((span_x / params.cell_size).ceil().max(1.0) as usize).min(MAX_GRID_CELLS);
        let rows = ((span_y / params.cell_size).ceil().max(1.0) as usize).min(MAX_GRID_CELLS);
        let step_x = span_x / cols as f64;
        let step_y = span_y / rows as f64;
        let jitter = (params.variance.max(0.0) * 0.3).min(MAX_JITTER);

        let mut grid = Vec::with_capacity((cols + 1) * (rows + 1));
        for r in 0..=rows {
            for c in 0..=cols {
                let x = -bleed + c as f64 * step_x + rng.next_signed() * jitter * step_x;
                let y = -bleed + r as f64 * step_y + rng.next_signed() * jitter * step_y;
                grid.push((round3(x), round3(y)));
            }
        }
        let at = |r: usize, c: usize| grid[r * (cols + 1) + c];

        let mut out = Vec::with_capacity(rows * cols * 2);
        for r in 0..rows {
            for c in 0..cols {
                let (tl, tr, bl, br) = (at(r, c), at(r, c + 1), at(r + 1, c), at(r + 1, c + 1));
                let halves = if rng.next_u64() & 1 == 0 {
                    [[tl, tr, br], [tl, br, bl]]
                } else {
                    [[tl, tr, bl], [tr, br, bl]]
                };
                for tri in halves {
                    let cx = (tri[0].0 + tri[1].0 + tri[2].0) / 3.0;
                    let cy = (tri[0].1 + tri[1].1 + tri[2].1) / 3.0;
                    let mut t = ((cx / params.width + cy / params.height) / 2.0).clamp(0.0, 1.0);
                    if flip_ramp {
                        t = 1.0 - t;
                    }
                    let shade = rng.next_signed() * 0.04;
                    out.push(RawPolygon {
                        d: format!(
                            "M{:.3},{:.3}L{:.3},{:.3}L{:.3},{:.3}Z",
                            tri[0].0, tri[0].1, tri[1].0, tri[1].1, tri[2].0, tri[2].1
                        ),
                        fill: sample_ramp(ramp, t, shade),
                    });
                }
            }
        }
        Ok(out)
    }
}

fn round3(v: f64) -> f64 {
    (v * 1000.0).round() / 1000.0
}

fn sample_ramp(ramp: &[(u8, u8, u8)], t: f64, shade: f64) -> String {
    let last = ramp.len() - 1;
    let pos = t * last as f64;
    let i = (pos.floor() as usize).min(last.saturating_sub(1));
    let f = pos - i as f64;
    let (a, b) = (ramp[i], ramp[(i + 1).min(last)]);
    let mix = |x: u8, y: u8| {
        let v = f64::from(x) + (f64::from(y) - f64::from(x)) * f;
        (v * (1.0 + shade)).round().clamp(0.0, 255.0) as u8
    };
    format!("rgb({},{},{})", mix(a.0, b.0), mix(a.1, b.1), mix(a.2, b.2))
}

#[cfg(test)]
#[path = "../../tests/unit/pattern/trianglify.rs"]
mod tests;
