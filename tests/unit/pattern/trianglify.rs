use super::*;

fn params(seed: &str) -> TriangulationParams {
    TriangulationParams {
        width: 300.0,
        height: 300.0,
        variance: 1.5,
        cell_size: 60.0,
        seed: seed.to_owned(),
    }
}

#[test]
fn output_is_deterministic_per_seed() {
    let a = JitterGridTriangulator.triangulate(&params("x")).unwrap();
    let b = JitterGridTriangulator.triangulate(&params("x")).unwrap();
    let c = JitterGridTriangulator.triangulate(&params("y")).unwrap();
    assert_eq!(a, b);
    assert_ne!(a, c);
}

#[test]
fn grid_bleeds_past_the_canvas() {
    let polys = JitterGridTriangulator.triangulate(&params("x")).unwrap();
    // (300 + 2 * 60) / 60 = 7 cells per axis, two triangles per cell.
    assert_eq!(polys.len(), 7 * 7 * 2);
    for p in &polys {
        assert!(p.d.starts_with('M') && p.d.ends_with('Z'));
        assert!(p.fill.starts_with("rgb("));
    }
}

#[test]
fn grid_is_capped_for_tiny_cells() {
    let mut p = params("x");
    p.width = 100.0;
    p.height = 100.0;
    p.cell_size = 1e-6;
    let polys = JitterGridTriangulator.triangulate(&p).unwrap();
    assert_eq!(polys.len(), MAX_GRID_CELLS * MAX_GRID_CELLS * 2);
}

#[test]
fn degenerate_params_yield_nothing() {
    let mut p = params("x");
    p.cell_size = 0.0;
    assert!(JitterGridTriangulator.triangulate(&p).unwrap().is_empty());
}

#[test]
fn ramp_sampling_hits_endpoints() {
    let ramp: &[(u8, u8, u8)] = &[(0, 0, 0), (100, 100, 100), (200, 200, 200)];
    assert_eq!(sample_ramp(ramp, 0.0, 0.0), "rgb(0,0,0)");
    assert_eq!(sample_ramp(ramp, 1.0, 0.0), "rgb(200,200,200)");
    assert_eq!(sample_ramp(ramp, 0.25, 0.0), "rgb(50,50,50)");
}
