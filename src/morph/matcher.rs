use crate::foundation::core::Point;

/// Vertex cutoff as a fraction of the canvas edge.
pub const VERTEX_MATCH_RATIO: f64 = 0.5;
/// Triangle-centroid cutoff as a fraction of the canvas edge.
pub const CENTROID_MATCH_RATIO: f64 = 0.4;

/// Pairing of a "from" element with a "to" element.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Correspondence {
    pub from_index: usize,
    pub to_index: usize,
}

/// Greedy nearest-neighbour assignment.
///
/// `from` is walked in order and each element claims the closest unclaimed
/// `to` element strictly nearer than `max_distance`; ties go to the lower
/// `to` index. Elements with no candidate stay unmatched. Not a minimum-cost
/// assignment: earlier `from` elements win contested targets.
pub fn match_nearest(from: &[Point], to: &[Point], max_distance: f64) -> Vec<Correspondence> {
    let mut claimed = vec![false; to.len()];
    let mut out = Vec::with_capacity(from.len().min(to.len()));

    for (from_index, &a) in from.iter().enumerate() {
        let mut best: Option<(usize, f64)> = None;
        for (to_index, &b) in to.iter().enumerate() {
            if claimed[to_index] {
                continue;
            }
            let dist = a.distance(b);
            if dist < max_distance && best.is_none_or(|(_, d)| dist < d) {
                best = Some((to_index, dist));
            }
        }
        if let Some((to_index, _)) = best {
            claimed[to_index] = true;
            out.push(Correspondence {
                from_index,
                to_index,
            });
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/morph/matcher.rs"]
mod tests;
