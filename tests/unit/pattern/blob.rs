use super::*;
use crate::path::interp::numeric_spans;

fn params(seed: &str) -> BlobParams {
    BlobParams {
        seed: seed.to_owned(),
        extra_points: 8,
        randomness: 4.0,
        size: 256.0,
    }
}

#[test]
fn outline_is_closed_and_deterministic() {
    let a = RadialBlob.outline(&params("s")).unwrap();
    let b = RadialBlob.outline(&params("s")).unwrap();
    assert_eq!(a, b);
    assert!(a.starts_with('M'));
    assert!(a.trim_end().ends_with('Z'));
}

#[test]
fn different_seeds_share_numeric_structure() {
    let a = RadialBlob.outline(&params("one")).unwrap();
    let b = RadialBlob.outline(&params("two")).unwrap();
    assert_ne!(a, b);
    assert_eq!(numeric_spans(&a).len(), numeric_spans(&b).len());
}

#[test]
fn anchors_stay_inside_the_canvas() {
    for p in RadialBlob::anchors(&params("bounds")) {
        assert!((0.0..=256.0).contains(&p.x));
        assert!((0.0..=256.0).contains(&p.y));
    }
    assert_eq!(RadialBlob::anchors(&params("bounds")).len(), 11);
}

#[test]
fn rejects_non_positive_size() {
    let mut p = params("s");
    p.size = 0.0;
    assert!(RadialBlob.outline(&p).is_err());
}
