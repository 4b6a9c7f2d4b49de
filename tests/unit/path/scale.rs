use super::*;

fn bbox_of(d: &str) -> Rect {
    parse_svg_path(d).unwrap().bounding_box()
}

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn rescales_to_requested_box() {
    let out = scale_svg_path("M10,20 L110,20 L110,70 L10,70 Z", 300.0, 150.0).unwrap();
    assert!(out.starts_with('M'));
    let b = bbox_of(&out);
    assert!(close(b.x0, 0.0) && close(b.y0, 0.0));
    assert!(close(b.x1, 300.0) && close(b.y1, 150.0));
}

#[test]
fn curves_use_their_tight_bounds() {
    let d = "M0,128 C0,0 256,0 256,128 C256,256 0,256 0,128 Z";
    let out = scale_svg_path(d, 100.0, 100.0).unwrap();
    let b = bbox_of(&out);
    assert!(close(b.width(), 100.0));
    assert!(close(b.height(), 100.0));
}

#[test]
fn rejects_unusable_paths() {
    assert!(scale_svg_path("", 10.0, 10.0).is_err());
    assert!(scale_svg_path("xyz", 10.0, 10.0).is_err());
    assert!(scale_svg_path("M0,0 L10,0 Z", 10.0, 10.0).is_err());
}
