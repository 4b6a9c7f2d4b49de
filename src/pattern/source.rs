//! Adapter boundary for the raw shape generators.
//!
//! Both generators are opaque: they receive plain parameters and return
//! untyped geometry (SVG path data and fill strings). Nothing they return is
//! trusted until [`crate::PatternGenerator`] has parsed it.

use crate::foundation::error::MarkResult;

/// Parameters handed to a [`TriangulationSource`].
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct TriangulationParams {
    /// Canvas width in pixels.
    pub width: f64,
    /// Canvas height in pixels.
    pub height: f64,
    /// Point jitter, as a fraction of `cell_size`.
    pub variance: f64,
    /// Grid spacing in pixels.
    pub cell_size: f64,
    /// Salted seed.
    pub seed: String,
}

/// One emitted primitive: SVG path data plus a fill color in the source's native encoding.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct RawPolygon {
    /// Boundary description, expected to be `M x,y L x,y L x,y Z`.
    pub d: String,
    /// Fill color, e.g. `rgb(r,g,b)`.
    pub fill: String,
}

/// Deterministic triangulation primitive.
pub trait TriangulationSource {
    /// Produce the raw primitives for `params`. Identical params must yield identical output.
    fn triangulate(&self, params: &TriangulationParams) -> MarkResult<Vec<RawPolygon>>;
}

/// Parameters handed to a [`BlobSource`].
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct BlobParams {
    /// Salted seed.
    pub seed: String,
    /// Anchor points beyond the minimum of three.
    pub extra_points: u32,
    /// Radial noise strength.
    pub randomness: f64,
    /// Edge length of the square the blob is drawn in.
    pub size: f64,
}

/// Deterministic closed-outline primitive.
pub trait BlobSource {
    /// Produce one closed SVG path for `params`.
    fn outline(&self, params: &BlobParams) -> MarkResult<String>;
}

impl<T: TriangulationSource + ?Sized> TriangulationSource for Box<T> {
    fn triangulate(&self, params: &TriangulationParams) -> MarkResult<Vec<RawPolygon>> {
        (**self).triangulate(params)
    }
}

impl<T: BlobSource + ?Sized> BlobSource for Box<T> {
    fn outline(&self, params: &BlobParams) -> MarkResult<String> {
        (**self).outline(params)
    }
}
