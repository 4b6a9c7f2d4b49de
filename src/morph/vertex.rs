use std::collections::HashMap;

use crate::foundation::core::{Point, Triangle};

/// Back-reference from a shared vertex to one triangle corner.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct VertexRef {
    pub triangle_index: usize,
    pub corner_index: usize,
}

/// A corner coordinate shared by every triangle listed in `paths`.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Vertex {
    pub x: f64,
    pub y: f64,
    pub paths: Vec<VertexRef>,
}

impl Vertex {
    pub fn point(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

/// Deduplicated vertices plus the input triangles with `vertex_indices` filled in.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct VertexGraph {
    pub vertices: Vec<Vertex>,
    pub triangles: Vec<Triangle>,
}

/// Exact coordinate identity. `-0.0` folds into `0.0`; no epsilon.
fn exact_key(p: Point) -> (u64, u64) {
    ((p.x + 0.0).to_bits(), (p.y + 0.0).to_bits())
}

/// Merge bit-identical corners into shared vertices, in triangle order.
pub fn build_vertex_graph(triangles: &[Triangle]) -> VertexGraph {
    let mut vertices: Vec<Vertex> = Vec::new();
    let mut seen: HashMap<(u64, u64), usize> = HashMap::with_capacity(triangles.len() * 2);

    let triangles: Vec<Triangle> = triangles
        .iter()
        .enumerate()
        .map(|(triangle_index, tri)| {
            let mut indices = [0usize; 3];
            for (corner_index, &p) in tri.points.iter().enumerate() {
                let vi = *seen.entry(exact_key(p)).or_insert_with(|| {
                    vertices.push(Vertex {
                        x: p.x,
                        y: p.y,
                        paths: Vec::new(),
                    });
                    vertices.len() - 1
                });
                vertices[vi].paths.push(VertexRef {
                    triangle_index,
                    corner_index,
                });
                indices[corner_index] = vi;
            }
            Triangle {
                vertex_indices: Some(indices),
                ..tri.clone()
            }
        })
        .collect();

    VertexGraph {
        vertices,
        triangles,
    }
}

/// Corner positions of `tri` looked up through its vertex links. Indices that
/// do not resolve fall back to the origin.
pub(crate) fn resolve_corners(tri: &Triangle, vertices: &[Vertex]) -> Option<[Point; 3]> {
    let idx = tri.vertex_indices?;
    Some(idx.map(|vi| vertices.get(vi).map_or(Point::ORIGIN, Vertex::point)))
}

#[cfg(test)]
#[path = "../../tests/unit/morph/vertex.rs"]
mod tests;
