use super::*;
use proptest::prelude::*;

#[test]
fn appends_unconditionally_below_three() {
    let mut s = RingSketch::default();
    // Two coincident clicks: well inside the closure threshold, but the check
    // must not run with fewer than 3 collected vertices.
    assert_eq!(
        s.accept_click(LatLng::new(0.0, 0.0)),
        ClickOutcome::Appended(LatLng::new(0.0, 0.0))
    );
    assert_eq!(
        s.accept_click(LatLng::new(0.0, 0.0)),
        ClickOutcome::Appended(LatLng::new(0.0, 0.0))
    );
    assert_eq!(s.vertices().len(), 2);
    assert!(!s.is_closed());
    assert_eq!(s.phase(), SketchPhase::Collecting);
}

#[test]
fn closes_near_start_with_duplicate_first_vertex() {
    let mut s = RingSketch::default();
    s.accept_click(LatLng::new(0.0, 0.0));
    s.accept_click(LatLng::new(0.0, 0.001));
    s.accept_click(LatLng::new(0.001, 0.001));
    assert_eq!(s.phase(), SketchPhase::Closable);
    // 4th click within 1e-4 degrees of the start: ring closes at 4 recorded
    // vertices (3 distinct + closing duplicate).
    let out = s.accept_click(LatLng::new(0.0000001, 0.0000002));
    assert_eq!(out, ClickOutcome::Closed);
    assert!(s.is_closed());
    assert_eq!(s.vertices().len(), 4);
    assert_eq!(s.vertices()[3], s.vertices()[0]);
}

#[test]
fn far_fourth_click_appends_normally() {
    let mut s = RingSketch::default();
    s.accept_click(LatLng::new(0.0, 0.0));
    s.accept_click(LatLng::new(0.0, 0.001));
    s.accept_click(LatLng::new(0.001, 0.001));
    let out = s.accept_click(LatLng::new(0.001, 0.0));
    assert_eq!(out, ClickOutcome::Appended(LatLng::new(0.001, 0.0)));
    assert!(!s.is_closed());
    assert_eq!(s.vertices().len(), 4);
}

#[test]
fn ignores_clicks_after_closure_until_clear() {
    let mut s = RingSketch::default();
    s.accept_click(LatLng::new(0.0, 0.0));
    s.accept_click(LatLng::new(0.0, 0.001));
    s.accept_click(LatLng::new(0.001, 0.001));
    s.accept_click(LatLng::new(0.0, 0.0));
    assert!(s.is_closed());
    assert_eq!(s.accept_click(LatLng::new(0.5, 0.5)), ClickOutcome::Ignored);
    assert_eq!(s.vertices().len(), 4);

    s.clear();
    assert_eq!(s.phase(), SketchPhase::Empty);
    assert_eq!(
        s.accept_click(LatLng::new(0.5, 0.5)),
        ClickOutcome::Appended(LatLng::new(0.5, 0.5))
    );
}

#[test]
fn clear_is_idempotent() {
    let mut s = RingSketch::default();
    s.accept_click(LatLng::new(1.0, 2.0));
    s.clear();
    let after_once = (s.vertices().len(), s.is_closed(), s.phase());
    s.clear();
    assert_eq!((s.vertices().len(), s.is_closed(), s.phase()), after_once);
    assert_eq!(s.phase(), SketchPhase::Empty);
}

#[test]
fn threshold_is_planar_degrees_not_meters() {
    // At the threshold boundary: distance exactly closure_eps must NOT close
    // (strict less-than), just inside must.
    let cfg = SketchCfg::default();
    let mut s = RingSketch::new(cfg);
    s.accept_click(LatLng::new(0.0, 0.0));
    s.accept_click(LatLng::new(0.0, 0.001));
    s.accept_click(LatLng::new(0.001, 0.001));
    let out = s.accept_click(LatLng::new(0.0, cfg.closure_eps));
    assert_eq!(out, ClickOutcome::Appended(LatLng::new(0.0, cfg.closure_eps)));
    let out = s.accept_click(LatLng::new(0.0, cfg.closure_eps * 0.99));
    assert_eq!(out, ClickOutcome::Closed);
}

proptest! {
    /// Any click sequence leaves the sketch in a legal shape: vertex count
    /// only grows by one per accepted click, and a closed sketch always ends
    /// in a duplicate of its first vertex.
    #[test]
    fn accepted_clicks_preserve_ring_shape(
        clicks in prop::collection::vec((-90.0f64..90.0, -180.0f64..180.0), 0..40)
    ) {
        let mut s = RingSketch::default();
        for (lat, lng) in clicks {
            let before = s.vertices().len();
            let out = s.accept_click(LatLng::new(lat, lng));
            match out {
                ClickOutcome::Ignored => prop_assert_eq!(s.vertices().len(), before),
                _ => prop_assert_eq!(s.vertices().len(), before + 1),
            }
        }
        if s.is_closed() {
            let v = s.vertices();
            prop_assert!(v.len() >= 4);
            prop_assert_eq!(v[v.len() - 1], v[0]);
        }
    }
}
