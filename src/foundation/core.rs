use crate::foundation::error::{MarkError, MarkResult};

pub use kurbo::{Affine, BezPath, Point, Rect};

/// Animation style used for both pattern ordering and frame composition.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Index-aligned transitions over grid-sorted triangles.
    Fly,
    /// Shared-vertex crossfade over polar-sorted triangles.
    #[default]
    Morph,
}

impl Mode {
    /// Canonical lowercase name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Fly => "fly",
            Self::Morph => "morph",
        }
    }
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Mode {
    type Err = MarkError;

    fn from_str(s: &str) -> MarkResult<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fly" => Ok(Self::Fly),
            "morph" => Ok(Self::Morph),
            other => Err(MarkError::validation(format!("unknown mode '{other}'"))),
        }
    }
}

/// A filled triangle of the mark.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Triangle {
    /// Corners in emission order.
    pub points: [Point; 3],
    /// Fill color, normally `hsl(h, s%, l%)`.
    pub color: String,
    /// Shared-vertex indices, present only after vertex graph extraction.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vertex_indices: Option<[usize; 3]>,
}

impl Triangle {
    /// Triangle without shared-vertex links.
    pub fn new(points: [Point; 3], color: impl Into<String>) -> Self {
        Self {
            points,
            color: color.into(),
            vertex_indices: None,
        }
    }

    /// Average of the three corners.
    pub fn centroid(&self) -> Point {
        crate::foundation::math::centroid(&self.points)
    }
}

/// Validate a square canvas edge length.
pub(crate) fn check_size(size: f64) -> MarkResult<f64> {
    if !size.is_finite() || size <= 0.0 {
        return Err(MarkError::validation("canvas size must be finite and > 0"));
    }
    Ok(size)
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
