use super::*;

const ALL: [Ease; 4] = [Ease::Linear, Ease::InOutSine, Ease::InOutQuad, Ease::InOutCubic];

#[test]
fn endpoints_are_stable() {
    for ease in ALL {
        assert!(ease.apply(0.0).abs() < 1e-12);
        assert!((ease.apply(1.0) - 1.0).abs() < 1e-12);
    }
}

#[test]
fn monotonic_spot_check() {
    for ease in ALL {
        let a = ease.apply(0.25);
        let b = ease.apply(0.5);
        let c = ease.apply(0.75);
        assert!(a < b);
        assert!(b < c);
    }
}

#[test]
fn sine_is_symmetric_around_midpoint() {
    assert!((ease_in_out_sine(0.5) - 0.5).abs() < 1e-12);
    let lo = ease_in_out_sine(0.2);
    let hi = ease_in_out_sine(0.8);
    assert!((lo + hi - 1.0).abs() < 1e-12);
}

#[test]
fn apply_clamps_out_of_range_input() {
    assert_eq!(Ease::InOutSine.apply(-3.0), Ease::InOutSine.apply(0.0));
    assert_eq!(Ease::InOutSine.apply(7.0), Ease::InOutSine.apply(1.0));
}

#[test]
fn default_is_half_cosine() {
    assert_eq!(Ease::default(), Ease::InOutSine);
    let e: Ease = serde_json::from_str("\"in_out_cubic\"").unwrap();
    assert_eq!(e, Ease::InOutCubic);
}
