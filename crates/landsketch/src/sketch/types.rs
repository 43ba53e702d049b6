//! Coordinate and tolerance types used by the sketch.
//!
//! - `LatLng`: a (latitude, longitude) pair in degrees, no range validation.
//! - `SketchCfg`: centralizes the closure tolerance so callers who are asked to
//!   change the closure semantics have a single knob.

use nalgebra::Vector2;

/// A (latitude, longitude) pair in degrees.
///
/// No range validation: values outside [-90, 90] × [-180, 180] pass through
/// unchanged, matching the behavior of the map surfaces this feeds.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    #[inline]
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// View as a planar (lat, lng) vector for degree-space math.
    #[inline]
    pub fn as_vec2(self) -> Vector2<f64> {
        Vector2::new(self.lat, self.lng)
    }

    /// Planar Euclidean distance in raw degree units (NOT a geodesic).
    ///
    /// One degree of longitude shrinks toward the poles, so equal return
    /// values do not mean equal ground distances. Closure detection uses this
    /// anyway; see `SketchCfg::closure_eps`.
    #[inline]
    pub fn planar_distance(self, other: LatLng) -> f64 {
        (self.as_vec2() - other.as_vec2()).norm()
    }
}

/// Sketch configuration (tolerances).
#[derive(Clone, Copy, Debug)]
pub struct SketchCfg {
    /// Closure threshold in raw coordinate-degree distance.
    ///
    /// Latitude-dependent and not geodesically accurate; preserved as-is so
    /// closure fires at the same clicks as the system this replaces. Correct
    /// to a geodesic predicate only on explicit request.
    pub closure_eps: f64,
}

impl Default for SketchCfg {
    fn default() -> Self {
        Self { closure_eps: 1e-4 }
    }
}
