use super::*;
use crate::foundation::error::MarkError;
use crate::pattern::source::RawPolygon;

struct Fixed(Vec<RawPolygon>);

impl TriangulationSource for Fixed {
    fn triangulate(&self, _params: &TriangulationParams) -> MarkResult<Vec<RawPolygon>> {
        Ok(self.0.clone())
    }
}

struct Square;

impl BlobSource for Square {
    fn outline(&self, _params: &BlobParams) -> MarkResult<String> {
        Ok("M0,0 L256,0 L256,256 L0,256 Z".to_owned())
    }
}

struct Flat;

impl BlobSource for Flat {
    fn outline(&self, _params: &BlobParams) -> MarkResult<String> {
        Ok("M0,0 L256,0 Z".to_owned())
    }
}

fn poly(d: &str, fill: &str) -> RawPolygon {
    RawPolygon {
        d: d.to_owned(),
        fill: fill.to_owned(),
    }
}

#[test]
fn parses_only_closed_three_point_regions() {
    let pts = parse_triangle_path("M1,2L3.5,-4L5,6Z").unwrap();
    assert_eq!(pts[1], Point::new(3.5, -4.0));
    assert!(parse_triangle_path(" M 1 , 2 L 3 , 4 L 5 , 6 ").is_some());
    assert!(parse_triangle_path("M1,2L3,4Z").is_none());
    assert!(parse_triangle_path("M1,2L3,4L5,6L7,8Z").is_none());
    assert!(parse_triangle_path("M1,2L3,4L5,x").is_none());
    assert!(parse_triangle_path("").is_none());
}

#[test]
fn malformed_primitives_are_dropped_and_colors_normalized() {
    let gen_ = PatternGenerator::with_sources(
        Fixed(vec![
            poly("M0,0L10,0L0,10Z", "rgb(255,0,0)"),
            poly("M0,0L10,0Z", "rgb(0,255,0)"),
            poly("garbage", "rgb(0,0,255)"),
            poly("M20,20L30,20L20,30Z", "papayawhip"),
        ]),
        Square,
        MarkDefaults::default(),
    );
    let tris = gen_.generate_triangles("s", 100.0, Mode::Fly).unwrap();
    assert_eq!(tris.len(), 2);
    assert_eq!(tris[0].color, "hsl(0, 100%, 50%)");
    assert_eq!(tris[1].color, "papayawhip");
    assert!(tris.iter().all(|t| t.vertex_indices.is_none()));
}

#[test]
fn nothing_parseable_yields_empty_pattern() {
    let gen_ = PatternGenerator::with_sources(
        Fixed(vec![poly("nope", "rgb(1,2,3)")]),
        Square,
        MarkDefaults::default(),
    );
    let p = gen_.generate_pattern("s", 100.0, Mode::Morph).unwrap();
    assert!(p.triangles.is_empty());
    assert!(p.outline_path.starts_with('M'));
}

#[test]
fn outline_is_rescaled_from_blob_canvas() {
    let gen_ = PatternGenerator::with_sources(Fixed(vec![]), Square, MarkDefaults::default());
    let d = gen_.generate_outline("s", 100.0, 50.0).unwrap();
    assert!(d.contains("100"));
    assert!(d.contains("50"));
    assert!(!d.contains("256"));
}

#[test]
fn degenerate_outline_is_a_generation_error() {
    let gen_ = PatternGenerator::with_sources(Fixed(vec![]), Flat, MarkDefaults::default());
    let err = gen_.generate_pattern("s", 100.0, Mode::Morph).unwrap_err();
    assert!(matches!(err, MarkError::Generation(_)));
}

#[test]
fn invalid_size_is_rejected() {
    assert!(generate_pattern("s", 0.0, Mode::Morph).is_err());
    assert!(generate_pattern("s", f64::INFINITY, Mode::Fly).is_err());
}

#[test]
fn fly_sort_is_row_then_column() {
    // Centroids: (80, 10), (10, 10), (10, 80).
    let gen_ = PatternGenerator::with_sources(
        Fixed(vec![
            poly("M70,0L90,0L80,30Z", "a"),
            poly("M0,80L20,80L10,80Z", "c"),
            poly("M0,0L20,0L10,30Z", "b"),
        ]),
        Square,
        MarkDefaults::default(),
    );
    let tris = gen_.generate_triangles("s", 100.0, Mode::Fly).unwrap();
    let order: Vec<&str> = tris.iter().map(|t| t.color.as_str()).collect();
    assert_eq!(order, vec!["b", "a", "c"]);
}

#[test]
fn morph_sort_groups_by_sector_then_band() {
    // Canvas 100, center (50, 50). Centroids relative to center:
    // "far" at angle 0 band 4, "near" at angle 0 band 1, "up" at angle -pi/2.
    let gen_ = PatternGenerator::with_sources(
        Fixed(vec![
            poly("M94,49L96,49L95,52Z", "far"),
            poly("M64,49L66,49L65,52Z", "near"),
            poly("M49,9L51,9L50,12Z", "up"),
        ]),
        Square,
        MarkDefaults::default(),
    );
    let tris = gen_.generate_triangles("s", 100.0, Mode::Morph).unwrap();
    let order: Vec<&str> = tris.iter().map(|t| t.color.as_str()).collect();
    assert_eq!(order, vec!["up", "near", "far"]);
}

#[test]
fn same_seed_is_byte_identical() {
    for mode in [Mode::Morph, Mode::Fly] {
        let a = generate_pattern("abc", 300.0, mode).unwrap();
        let b = generate_pattern("abc", 300.0, mode).unwrap();
        assert_eq!(
            serde_json::to_string(&a).unwrap(),
            serde_json::to_string(&b).unwrap()
        );
    }
    let c = generate_pattern("abd", 300.0, Mode::Morph).unwrap();
    assert_ne!(generate_pattern("abc", 300.0, Mode::Morph).unwrap(), c);
}

#[test]
fn example_seed_produces_a_closed_mark() {
    let p = generate_pattern("abc", 300.0, Mode::Morph).unwrap();
    assert!(!p.triangles.is_empty());
    assert!(p.outline_path.starts_with('M'));
    assert!(p.outline_path.trim_end().ends_with('Z'));
    assert!(p.triangles.iter().all(|t| t.color.starts_with("hsl(")));
}

#[test]
fn modes_share_triangles_but_not_order() {
    let morph = generate_pattern("abc", 300.0, Mode::Morph).unwrap();
    let fly = generate_pattern("abc", 300.0, Mode::Fly).unwrap();
    assert_eq!(morph.triangles.len(), fly.triangles.len());
    assert_eq!(morph.outline_path, fly.outline_path);
    assert_ne!(morph.triangles, fly.triangles);
}

#[test]
fn triangulate_keeps_emission_order_on_wide_canvases() {
    let gen_ = PatternGenerator::with_sources(
        Fixed(vec![
            poly("M90,90L99,90L90,99Z", "rgb(0,0,0)"),
            poly("M0,0L10,0L0,10Z", "rgb(255,255,255)"),
        ]),
        Square,
        MarkDefaults::default(),
    );
    let tris = gen_.triangulate("s", 300.0, 100.0).unwrap();
    assert_eq!(tris[0].points[0], Point::new(90.0, 90.0));
    assert_eq!(tris[1].color, "hsl(0, 0%, 100%)");
    assert!(gen_.triangulate("s", 300.0, 0.0).is_err());

    let builtin = PatternGenerator::new(MarkDefaults::default());
    assert!(!builtin.triangulate("abc", 300.0, 120.0).unwrap().is_empty());
}
