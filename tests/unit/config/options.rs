use super::*;

#[test]
fn defaults_match_documented_values() {
    let o = AnimationOptions::default();
    assert_eq!(o.seed, None);
    assert_eq!(o.size, 400.0);
    assert_eq!(o.mode, Mode::Morph);
    assert_eq!(o.duration_ms, 2000.0);
    assert_eq!(o.interval_ms, 4000.0);
    assert_eq!(o.ease, Ease::InOutSine);
    assert_eq!(o.mark.seed_prefix, "ideaman's ");
    assert_eq!(o.mark.variance, 1.5);
    assert_eq!(o.mark.cell_size_ratio, 0.2);
    assert_eq!(o.mark.extra_points, 8);
    assert_eq!(o.mark.randomness, 4.0);
    assert!(o.validate().is_ok());
}

#[test]
fn absent_and_unknown_fields_fall_back() {
    let o = AnimationOptions::from_json_str(r#"{"mode":"fly","size":300,"colour":"red"}"#)
        .unwrap();
    assert_eq!(o.mode, Mode::Fly);
    assert_eq!(o.size, 300.0);
    assert_eq!(o.duration_ms, 2000.0);
    assert_eq!(o.mark, MarkDefaults::default());

    let o = AnimationOptions::from_json_str(r#"{"mark":{"extra_points":3}}"#).unwrap();
    assert_eq!(o.mark.extra_points, 3);
    assert_eq!(o.mark.variance, 1.5);
}

#[test]
fn invalid_values_are_rejected() {
    assert!(AnimationOptions::from_json_str(r#"{"size":0}"#).is_err());
    assert!(AnimationOptions::from_json_str(r#"{"duration_ms":-5}"#).is_err());
    assert!(AnimationOptions::from_json_str(r#"{"seed":""}"#).is_err());
    assert!(AnimationOptions::from_json_str(r#"{"mode":"spin"}"#).is_err());
    assert!(AnimationOptions::from_json_str(r#"{"mark":{"cell_size_ratio":0}}"#).is_err());
}

#[test]
fn tiny_cell_size_ratio_is_rejected() {
    let mut mark = MarkDefaults {
        cell_size_ratio: 1e-6,
        ..MarkDefaults::default()
    };
    assert!(matches!(mark.validate(), Err(MarkError::Validation(_))));
    assert!(
        AnimationOptions::from_json_str(r#"{"mark":{"cell_size_ratio":0.009}}"#).is_err()
    );

    mark.cell_size_ratio = MarkDefaults::MIN_CELL_SIZE_RATIO;
    mark.validate().unwrap();
}

#[test]
fn box_uses_shorter_edge() {
    assert_eq!(AnimationOptions::for_box(640.0, 480.0).size, 480.0);
}

#[test]
fn salting_prepends_prefix() {
    assert_eq!(MarkDefaults::default().salted("abc"), "ideaman's abc");
}
