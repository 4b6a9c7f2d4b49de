use super::*;

#[test]
fn mode_parses_case_insensitively() {
    assert_eq!(" Fly ".parse::<Mode>().unwrap(), Mode::Fly);
    assert_eq!("MORPH".parse::<Mode>().unwrap(), Mode::Morph);
    assert!("spin".parse::<Mode>().is_err());
    assert_eq!(Mode::default(), Mode::Morph);
    assert_eq!(Mode::Fly.to_string(), "fly");
}

#[test]
fn mode_serializes_lowercase() {
    assert_eq!(serde_json::to_string(&Mode::Fly).unwrap(), "\"fly\"");
    let m: Mode = serde_json::from_str("\"morph\"").unwrap();
    assert_eq!(m, Mode::Morph);
}

#[test]
fn triangle_centroid_and_serde_skip() {
    let t = Triangle::new(
        [
            Point::new(0.0, 0.0),
            Point::new(6.0, 0.0),
            Point::new(0.0, 6.0),
        ],
        "hsl(1, 2%, 3%)",
    );
    assert_eq!(t.centroid(), Point::new(2.0, 2.0));
    let json = serde_json::to_string(&t).unwrap();
    assert!(!json.contains("vertex_indices"));
}

#[test]
fn size_must_be_positive_and_finite() {
    assert!(check_size(300.0).is_ok());
    assert!(check_size(0.0).is_err());
    assert!(check_size(-1.0).is_err());
    assert!(check_size(f64::NAN).is_err());
}
