use crate::{
    color::hsl::normalize_color,
    config::options::MarkDefaults,
    foundation::{
        core::{Mode, Point, Triangle, check_size},
        error::MarkResult,
        scan::Scanner,
    },
    path::scale::scale_svg_path,
    pattern::{
        blob::RadialBlob,
        source::{BlobParams, BlobSource, TriangulationParams, TriangulationSource},
        trianglify::JitterGridTriangulator,
    },
};

/// Fixed canvas the outline source draws on before rescaling.
pub const BLOB_CANVAS: f64 = 256.0;

const POLAR_SECTORS: f64 = 16.0;
const POLAR_BANDS: f64 = 10.0;
const FLY_GRID: f64 = 50.0;

/// Triangles plus clip outline for one seed.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Pattern {
    /// Sorted triangles, without vertex links.
    pub triangles: Vec<Triangle>,
    /// Closed outline scaled to the canvas.
    pub outline_path: String,
}

/// Seed-to-geometry front end over a triangulation and an outline source.
#[derive(Clone, Debug, Default)]
pub struct PatternGenerator<T = JitterGridTriangulator, B = RadialBlob> {
    triangulator: T,
    blob: B,
    defaults: MarkDefaults,
}

impl PatternGenerator {
    /// Generator backed by the built-in sources.
    pub fn new(defaults: MarkDefaults) -> Self {
        Self::with_sources(JitterGridTriangulator, RadialBlob, defaults)
    }
}

impl<T, B> PatternGenerator<T, B>
where
    T: TriangulationSource,
    B: BlobSource,
{
    pub fn with_sources(triangulator: T, blob: B, defaults: MarkDefaults) -> Self {
        Self {
            triangulator,
            blob,
            defaults,
        }
    }

    pub fn defaults(&self) -> &MarkDefaults {
        &self.defaults
    }

    /// Triangles and outline for `seed` on a `size` x `size` canvas.
    #[tracing::instrument(skip(self))]
    pub fn generate_pattern(&self, seed: &str, size: f64, mode: Mode) -> MarkResult<Pattern> {
        let triangles = self.generate_triangles(seed, size, mode)?;
        let outline_path = self.generate_outline(seed, size, size)?;
        Ok(Pattern {
            triangles,
            outline_path,
        })
    }

    /// Parsed, color-normalized and sorted triangles. Primitives that are not
    /// a closed three-point region are dropped; an empty result is valid.
    pub fn generate_triangles(&self, seed: &str, size: f64, mode: Mode) -> MarkResult<Vec<Triangle>> {
        let size = check_size(size)?;
        let mut keyed: Vec<(Triangle, Point)> = self
            .triangulate(seed, size, size)?
            .into_iter()
            .map(|tri| {
                let c = tri.centroid();
                (tri, c)
            })
            .collect();
        sort_by_mode(&mut keyed, size, mode);
        tracing::debug!(triangles = keyed.len(), %mode, "sorted pattern");
        Ok(keyed.into_iter().map(|(tri, _)| tri).collect())
    }

    /// Parsed, color-normalized triangles in emission order for a
    /// `width` x `height` canvas. Cell size follows the width.
    pub fn triangulate(&self, seed: &str, width: f64, height: f64) -> MarkResult<Vec<Triangle>> {
        let params = TriangulationParams {
            width: check_size(width)?,
            height: check_size(height)?,
            variance: self.defaults.variance,
            cell_size: width * self.defaults.cell_size_ratio,
            seed: self.defaults.salted(seed),
        };
        let raw = self.triangulator.triangulate(&params)?;
        let emitted = raw.len();

        let triangles: Vec<Triangle> = raw
            .into_iter()
            .filter_map(|poly| match parse_triangle_path(&poly.d) {
                Some(points) => Some(Triangle::new(points, normalize_color(&poly.fill))),
                None => {
                    tracing::trace!(d = %poly.d, "dropping primitive that is not a triangle");
                    None
                }
            })
            .collect();
        tracing::debug!(emitted, kept = triangles.len(), "triangulated");
        Ok(triangles)
    }

    /// Outline drawn on the fixed blob canvas, rescaled to `width` x `height`.
    pub fn generate_outline(&self, seed: &str, width: f64, height: f64) -> MarkResult<String> {
        let params = BlobParams {
            seed: self.defaults.salted(seed),
            extra_points: self.defaults.extra_points,
            randomness: self.defaults.randomness,
            size: BLOB_CANVAS,
        };
        let raw = self.blob.outline(&params)?;
        scale_svg_path(&raw, check_size(width)?, check_size(height)?)
    }
}

/// [`PatternGenerator::generate_pattern`] with built-in sources and default tunables.
pub fn generate_pattern(seed: &str, size: f64, mode: Mode) -> MarkResult<Pattern> {
    PatternGenerator::new(MarkDefaults::default()).generate_pattern(seed, size, mode)
}

/// Parse `M x,y L x,y L x,y [Z]` into its three corners.
pub(crate) fn parse_triangle_path(d: &str) -> Option<[Point; 3]> {
    let mut sc = Scanner::new(d.trim());
    let mut corner = |cmd: u8| -> Option<Point> {
        sc.skip_ws();
        sc.eat(cmd).then_some(())?;
        sc.skip_ws();
        let x = sc.decimal()?;
        sc.skip_ws();
        sc.eat(b',').then_some(())?;
        sc.skip_ws();
        let y = sc.decimal()?;
        Some(Point::new(x, y))
    };
    let points = [corner(b'M')?, corner(b'L')?, corner(b'L')?];
    sc.skip_ws();
    sc.eat(b'Z');
    sc.skip_ws();
    sc.is_eof().then_some(points)
}

fn sort_by_mode(keyed: &mut [(Triangle, Point)], size: f64, mode: Mode) {
    match mode {
        Mode::Morph => {
            let center = Point::new(size / 2.0, size / 2.0);
            let sector = std::f64::consts::PI * 2.0 / POLAR_SECTORS;
            let band = size / POLAR_BANDS;
            let key = |c: Point| {
                let d = c - center;
                let angle = d.y.atan2(d.x);
                (
                    (angle / sector).floor() as i64,
                    (d.hypot() / band).floor() as i64,
                    angle,
                )
            };
            keyed.sort_by(|(_, a), (_, b)| {
                let (sa, ba, aa) = key(*a);
                let (sb, bb, ab) = key(*b);
                sa.cmp(&sb).then(ba.cmp(&bb)).then(aa.total_cmp(&ab))
            });
        }
        Mode::Fly => {
            let cell = |v: f64| (v / FLY_GRID).floor() as i64;
            keyed.sort_by(|(_, a), (_, b)| {
                cell(a.y)
                    .cmp(&cell(b.y))
                    .then(cell(a.x).cmp(&cell(b.x)))
                    .then(a.y.total_cmp(&b.y))
                    .then(a.x.total_cmp(&b.x))
            });
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/pattern/generate.rs"]
mod tests;
