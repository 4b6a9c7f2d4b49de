use crate::foundation::math::interpolate_number;

/// Byte ranges of the numeric literals in `path` (`-?\d+\.?\d*`, scanned left to right).
pub(crate) fn numeric_spans(path: &str) -> Vec<(usize, usize)> {
    let bytes = path.as_bytes();
    let digits_from = |mut j: usize| {
        while j < bytes.len() && bytes[j].is_ascii_digit() {
            j += 1;
        }
        j
    };

    let mut out = Vec::new();
    let mut i = 0usize;
    while i < bytes.len() {
        let start = i;
        let body = if bytes[i] == b'-' { i + 1 } else { i };
        if body < bytes.len() && bytes[body].is_ascii_digit() {
            let mut end = digits_from(body);
            if end < bytes.len() && bytes[end] == b'.' {
                end = digits_from(end + 1);
            }
            out.push((start, end));
            i = end;
        } else {
            i += 1;
        }
    }
    out
}

fn numeric_values(path: &str, spans: &[(usize, usize)]) -> Option<Vec<f64>> {
    spans
        .iter()
        .map(|&(a, b)| path[a..b].parse::<f64>().ok())
        .collect()
}

/// Interpolate every numeric literal of `from` toward the literal at the same
/// position in `to`, keeping the command structure of `from` verbatim.
///
/// Paths with a different number of numeric literals cannot be aligned; the
/// result is then `from` below `progress == 0.5` and `to` from there on.
pub fn interpolate_path(from: &str, to: &str, progress: f64) -> String {
    let hard_cut = || if progress < 0.5 { from } else { to }.to_owned();

    let from_spans = numeric_spans(from);
    let to_spans = numeric_spans(to);
    if from_spans.len() != to_spans.len() {
        return hard_cut();
    }
    let (Some(from_vals), Some(to_vals)) = (
        numeric_values(from, &from_spans),
        numeric_values(to, &to_spans),
    ) else {
        return hard_cut();
    };

    let mut out = String::with_capacity(from.len() + from_spans.len() * 3);
    let mut cursor = 0usize;
    for (k, &(a, b)) in from_spans.iter().enumerate() {
        out.push_str(&from[cursor..a]);
        let v = interpolate_number(from_vals[k], to_vals[k], progress);
        out.push_str(&format!("{v:.2}"));
        cursor = b;
    }
    out.push_str(&from[cursor..]);
    out
}

#[cfg(test)]
#[path = "../../tests/unit/path/interp.rs"]
mod tests;
