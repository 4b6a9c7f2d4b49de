use super::*;

#[test]
fn parses_canonical_and_compact_forms() {
    assert_eq!(
        Hsl::parse("hsl(210, 50%, 40%)"),
        Some(Hsl { h: 210, s: 50, l: 40 })
    );
    assert_eq!(
        Hsl::parse("hsl(1,2%,3%)"),
        Some(Hsl { h: 1, s: 2, l: 3 })
    );
    assert_eq!(
        Hsl::parse("fill: hsl(bad) hsl(5, 6%, 7%)"),
        Some(Hsl { h: 5, s: 6, l: 7 })
    );
    assert_eq!(Hsl::parse("rgb(1,2,3)"), None);
    assert_eq!(Hsl::parse("hsl(1.5, 2%, 3%)"), None);
}

#[test]
fn rgb_conversion_matches_known_values() {
    assert_eq!(normalize_color("rgb(255,0,0)"), "hsl(0, 100%, 50%)");
    assert_eq!(normalize_color("rgb(0,0,255)"), "hsl(240, 100%, 50%)");
    assert_eq!(normalize_color("rgb(128,128,128)"), "hsl(0, 0%, 50%)");
    assert_eq!(normalize_color("rgb(255, 255, 255)"), "hsl(0, 0%, 100%)");
    assert_eq!(normalize_color("#00ff00"), "hsl(120, 100%, 50%)");
}

#[test]
fn unknown_encodings_pass_through() {
    assert_eq!(normalize_color("tomato"), "tomato");
    assert_eq!(normalize_color("rgb(300,0,0)"), "rgb(300,0,0)");
    assert_eq!(normalize_color("#abc"), "#abc");
}

#[test]
fn interpolation_blends_components() {
    let c = interpolate_color("hsl(0, 0%, 0%)", "hsl(100, 50%, 20%)", 0.5);
    assert_eq!(c, "hsl(50, 25%, 10%)");
    assert_eq!(
        interpolate_color("hsl(0, 0%, 0%)", "hsl(100, 50%, 20%)", 0.0),
        "hsl(0, 0%, 0%)"
    );
    assert_eq!(
        interpolate_color("hsl(0, 0%, 0%)", "hsl(100, 50%, 20%)", 1.0),
        "hsl(100, 50%, 20%)"
    );
}

#[test]
fn identical_colors_round_trip() {
    for c in ["hsl(210, 50%, 40%)", "hsl(3,4%,5%)", "not-a-color"] {
        for p in [0.0, 0.3, 0.5, 0.99, 1.0] {
            assert_eq!(interpolate_color(c, c, p), c);
        }
    }
}

#[test]
fn unparsable_side_is_a_hard_cut() {
    assert_eq!(interpolate_color("red", "hsl(1, 2%, 3%)", 0.49), "red");
    assert_eq!(
        interpolate_color("red", "hsl(1, 2%, 3%)", 0.5),
        "hsl(1, 2%, 3%)"
    );
}
