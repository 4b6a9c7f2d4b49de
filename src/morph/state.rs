use crate::{
    foundation::core::{Mode, Triangle},
    morph::{
        matcher::{Correspondence, VERTEX_MATCH_RATIO, match_nearest},
        vertex::{Vertex, build_vertex_graph, resolve_corners},
    },
    pattern::generate::Pattern,
};

/// Coarse state of a [`MorphState`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub enum MorphPhase {
    /// `progress == 1`; the target is displayed as-is.
    Resting,
    /// A from/to pair is being interpolated.
    Morphing,
}

/// Snapshot pair driving one morph cycle. Replaced wholesale when a cycle begins.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct MorphState {
    pub from_triangles: Vec<Triangle>,
    pub to_triangles: Vec<Triangle>,
    pub from_vertices: Option<Vec<Vertex>>,
    pub to_vertices: Option<Vec<Vertex>>,
    pub vertex_matches: Option<Vec<Correspondence>>,
    pub from_outline_path: String,
    pub to_outline_path: String,
    /// Linear progress in `[0, 1]`.
    pub progress: f64,
    pub current_seed_id: String,
    pub next_seed_id: String,
    /// Square canvas edge the geometry was generated for.
    pub size: f64,
}

impl MorphState {
    /// Steady frame showing `pattern`: from == to, progress 1.
    pub fn resting(pattern: Pattern, seed: &str, size: f64, mode: Mode) -> Self {
        let (triangles, vertices) = match mode {
            Mode::Morph => {
                let graph = build_vertex_graph(&pattern.triangles);
                (graph.triangles, Some(graph.vertices))
            }
            Mode::Fly => (pattern.triangles, None),
        };
        Self {
            from_triangles: triangles.clone(),
            to_triangles: triangles,
            from_vertices: vertices.clone(),
            to_vertices: vertices,
            vertex_matches: None,
            from_outline_path: pattern.outline_path.clone(),
            to_outline_path: pattern.outline_path,
            progress: 1.0,
            current_seed_id: seed.to_owned(),
            next_seed_id: seed.to_owned(),
            size,
        }
    }

    /// Start a cycle from this state's target toward `pattern`.
    ///
    /// In morph mode the previous target's vertex graph becomes the source and
    /// is matched against a fresh graph of the new target. Otherwise the
    /// triangle lists are carried over as they are.
    pub fn begin_cycle(&self, pattern: Pattern, seed: &str, mode: Mode) -> Self {
        let base = Self {
            from_outline_path: self.to_outline_path.clone(),
            to_outline_path: pattern.outline_path,
            progress: 0.0,
            current_seed_id: self.next_seed_id.clone(),
            next_seed_id: seed.to_owned(),
            size: self.size,
            from_triangles: Vec::new(),
            to_triangles: Vec::new(),
            from_vertices: None,
            to_vertices: None,
            vertex_matches: None,
        };

        match (mode, self.to_vertices.as_ref()) {
            (Mode::Morph, Some(prev_vertices)) => {
                let from_triangles = self
                    .to_triangles
                    .iter()
                    .map(|tri| match resolve_corners(tri, prev_vertices) {
                        Some(points) => Triangle {
                            points,
                            ..tri.clone()
                        },
                        None => tri.clone(),
                    })
                    .collect();
                let graph = build_vertex_graph(&pattern.triangles);
                let from_points: Vec<_> = prev_vertices.iter().map(Vertex::point).collect();
                let to_points: Vec<_> = graph.vertices.iter().map(Vertex::point).collect();
                let matches =
                    match_nearest(&from_points, &to_points, self.size * VERTEX_MATCH_RATIO);
                tracing::debug!(
                    from_vertices = from_points.len(),
                    to_vertices = to_points.len(),
                    matched = matches.len(),
                    "vertex correspondence"
                );
                Self {
                    from_triangles,
                    to_triangles: graph.triangles,
                    from_vertices: Some(prev_vertices.clone()),
                    to_vertices: Some(graph.vertices),
                    vertex_matches: Some(matches),
                    ..base
                }
            }
            _ => Self {
                from_triangles: self.to_triangles.clone(),
                to_triangles: pattern.triangles,
                ..base
            },
        }
    }

    pub fn phase(&self) -> MorphPhase {
        if self.progress >= 1.0 {
            MorphPhase::Resting
        } else {
            MorphPhase::Morphing
        }
    }

    /// True before the first cycle: nothing but the initial pattern has been shown.
    pub fn is_initial_rest(&self) -> bool {
        self.phase() == MorphPhase::Resting && self.current_seed_id == self.next_seed_id
    }
}

/// Advance linear progress by `elapsed_ms / duration_ms`, clamped to `[0, 1]`.
///
/// Negative or non-finite elapsed time counts as zero, so progress never
/// decreases. A non-positive duration completes the cycle immediately.
pub fn advance_state(mut state: MorphState, elapsed_ms: f64, duration_ms: f64) -> MorphState {
    let step = if !(duration_ms > 0.0) {
        1.0
    } else if elapsed_ms.is_finite() && elapsed_ms > 0.0 {
        elapsed_ms / duration_ms
    } else {
        0.0
    };
    state.progress = (state.progress + step).clamp(0.0, 1.0);
    state
}

#[cfg(test)]
#[path = "../../tests/unit/morph/state.rs"]
mod tests;
