use std::collections::HashMap;

use crate::{
    color::hsl::interpolate_color,
    foundation::{
        core::{Mode, Point, Triangle},
        math::{centroid, lerp_point},
    },
    morph::{
        matcher::{CENTROID_MATCH_RATIO, Correspondence, match_nearest},
        state::MorphState,
        vertex::{Vertex, resolve_corners},
    },
    path::interp::interpolate_path,
};

/// A triangle ready for painting.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct RenderTriangle {
    pub points: [Point; 3],
    pub color: String,
    /// Opacity in `[0, 1]`.
    pub opacity: f64,
}

/// One composed animation frame: triangles in paint order plus the clip outline.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Frame {
    pub triangles: Vec<RenderTriangle>,
    pub outline_path: String,
}

/// Interpolate `state` at `eased` progress.
#[tracing::instrument(level = "trace", skip(state), fields(from = state.from_triangles.len(), to = state.to_triangles.len()))]
pub fn compose_frame(state: &MorphState, eased: f64, mode: Mode) -> Frame {
    let triangles = match (
        mode,
        &state.from_vertices,
        &state.to_vertices,
        &state.vertex_matches,
    ) {
        (Mode::Morph, Some(from_v), Some(to_v), Some(matches)) => VertexMorph {
            state,
            from_v,
            to_v,
            matches,
            eased,
        }
        .compose(),
        (Mode::Morph, ..) => compose_centroid_morph(state, eased),
        (Mode::Fly, ..) => compose_fly(state, eased),
    };

    Frame {
        triangles,
        outline_path: interpolate_path(&state.from_outline_path, &state.to_outline_path, eased),
    }
}

struct VertexMorph<'a> {
    state: &'a MorphState,
    from_v: &'a [Vertex],
    to_v: &'a [Vertex],
    matches: &'a [Correspondence],
    eased: f64,
}

impl VertexMorph<'_> {
    fn compose(&self) -> Vec<RenderTriangle> {
        if self.eased <= 0.0 {
            return self.settled(&self.state.from_triangles, self.from_v);
        }
        if self.eased >= 1.0 {
            return self.settled(&self.state.to_triangles, self.to_v);
        }

        let moving = self.moving_vertices();
        let forward: HashMap<usize, usize> = self
            .matches
            .iter()
            .map(|m| (m.from_index, m.to_index))
            .collect();
        let e = self.eased;

        let mut out =
            Vec::with_capacity(self.state.from_triangles.len() + self.state.to_triangles.len());

        for tri in &self.state.from_triangles {
            let Some(idx) = tri.vertex_indices else {
                continue;
            };
            let c = centroid(&tri.points);
            let points = idx.map(|vi| {
                let from = self.from_point(vi);
                match forward.get(&vi) {
                    Some(&ti) => lerp_point(from, self.to_point(ti), e),
                    None => lerp_point(from, c, e),
                }
            });
            out.push(RenderTriangle {
                points,
                color: tri.color.clone(),
                opacity: 1.0 - e,
            });
        }

        for tri in &self.state.to_triangles {
            let Some(idx) = tri.vertex_indices else {
                continue;
            };
            let c = centroid(&tri.points);
            let points = idx.map(|vi| match moving.get(vi).copied().flatten() {
                Some(p) => p,
                None => lerp_point(c, self.to_point(vi), e),
            });
            out.push(RenderTriangle {
                points,
                color: tri.color.clone(),
                opacity: e,
            });
        }
        out
    }

    fn settled(&self, triangles: &[Triangle], vertices: &[Vertex]) -> Vec<RenderTriangle> {
        triangles
            .iter()
            .filter_map(|tri| {
                Some(RenderTriangle {
                    points: resolve_corners(tri, vertices)?,
                    color: tri.color.clone(),
                    opacity: 1.0,
                })
            })
            .collect()
    }

    fn from_point(&self, vi: usize) -> Point {
        self.from_v.get(vi).map_or(Point::ORIGIN, Vertex::point)
    }

    fn to_point(&self, vi: usize) -> Point {
        self.to_v.get(vi).map_or(Point::ORIGIN, Vertex::point)
    }

    /// In-flight position of every "to" vertex, indexed by "to" vertex index.
    ///
    /// Matched vertices travel from their counterpart. Unmatched ones grow out
    /// of the in-flight position of the nearest vertex already placed (nearness
    /// measured between target coordinates), or out of the canvas center when
    /// nothing is placed yet. Placement order matters: vertices placed earlier
    /// in the pass are candidates for later ones.
    fn moving_vertices(&self) -> Vec<Option<Point>> {
        let e = self.eased;
        let mut moving: Vec<Option<Point>> = vec![None; self.from_v.len().max(self.to_v.len())];

        for m in self.matches {
            if let (Some(a), Some(b)) = (self.from_v.get(m.from_index), self.to_v.get(m.to_index))
            {
                moving[m.to_index] = Some(lerp_point(a.point(), b.point(), e));
            }
        }

        let center = Point::new(self.state.size / 2.0, self.state.size / 2.0);
        for (idx, vertex) in self.to_v.iter().enumerate() {
            if moving[idx].is_some() {
                continue;
            }
            let target = vertex.point();
            let mut nearest = center;
            let mut nearest_dist = f64::INFINITY;
            for (other, placed) in moving.iter().enumerate() {
                let (Some(p), Some(v)) = (placed, self.to_v.get(other)) else {
                    continue;
                };
                let dist = target.distance(v.point());
                if dist < nearest_dist {
                    nearest_dist = dist;
                    nearest = *p;
                }
            }
            moving[idx] = Some(lerp_point(nearest, target, e));
        }
        moving
    }
}

fn compose_centroid_morph(state: &MorphState, eased: f64) -> Vec<RenderTriangle> {
    let from_c: Vec<Point> = state.from_triangles.iter().map(Triangle::centroid).collect();
    let to_c: Vec<Point> = state.to_triangles.iter().map(Triangle::centroid).collect();
    let matches = match_nearest(&from_c, &to_c, state.size * CENTROID_MATCH_RATIO);

    let mut from_matched = vec![false; from_c.len()];
    let mut to_matched = vec![false; to_c.len()];
    let mut out = Vec::with_capacity(from_c.len() + to_c.len());

    for m in &matches {
        from_matched[m.from_index] = true;
        to_matched[m.to_index] = true;
        let a = &state.from_triangles[m.from_index];
        let b = &state.to_triangles[m.to_index];
        out.push(RenderTriangle {
            points: std::array::from_fn(|i| lerp_point(a.points[i], b.points[i], eased)),
            color: interpolate_color(&a.color, &b.color, eased),
            opacity: 1.0,
        });
    }

    for (tri, c) in state
        .from_triangles
        .iter()
        .zip(&from_c)
        .zip(&from_matched)
        .filter_map(|(pair, &matched)| (!matched).then_some(pair))
    {
        out.push(RenderTriangle {
            points: tri.points.map(|p| lerp_point(p, *c, eased)),
            color: tri.color.clone(),
            opacity: 1.0 - eased,
        });
    }

    for (tri, c) in state
        .to_triangles
        .iter()
        .zip(&to_c)
        .zip(&to_matched)
        .filter_map(|(pair, &matched)| (!matched).then_some(pair))
    {
        out.push(RenderTriangle {
            points: tri.points.map(|p| lerp_point(*c, p, eased)),
            color: tri.color.clone(),
            opacity: eased,
        });
    }
    out
}

fn compose_fly(state: &MorphState, eased: f64) -> Vec<RenderTriangle> {
    let center = Point::new(state.size / 2.0, state.size / 2.0);
    let collapsed = |color: &str| Triangle::new([center; 3], color);
    let count = state.from_triangles.len().max(state.to_triangles.len());

    (0..count)
        .filter_map(|i| {
            let (from, to) = match (state.from_triangles.get(i), state.to_triangles.get(i)) {
                (Some(a), Some(b)) => (a.clone(), b.clone()),
                (None, Some(b)) => (collapsed(&b.color), b.clone()),
                (Some(a), None) => (a.clone(), collapsed(&a.color)),
                (None, None) => return None,
            };
            Some(RenderTriangle {
                points: std::array::from_fn(|j| lerp_point(from.points[j], to.points[j], eased)),
                color: interpolate_color(&from.color, &to.color, eased),
                opacity: 1.0,
            })
        })
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/morph/compose.rs"]
mod tests;
