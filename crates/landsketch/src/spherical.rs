//! Spherical ring area (shoelace on the sphere).
//!
//! Purpose
//! - Compute the area enclosed by an ordered coordinate ring on a spherical
//!   earth, matching the geometry routine of the mapping SDKs this crate's
//!   widget is adapted to (same algorithm, same radius constant), so that a
//!   headless run and an on-map run report the same number.
//!
//! Model
//! - Sum, edge by edge, the signed excess of the polar triangle spanned by the
//!   edge and the north pole; the total times `radius²` is the signed area.
//!   Equivalent to the classic spherical-excess formulation but needs no
//!   explicit triangulation and is stable for small rings.
//! - Works on open or explicitly closed rings: the loop wraps from the last
//!   vertex back to the first, and a closing duplicate contributes a
//!   zero-excess edge.

use crate::sketch::LatLng;

/// Earth radius in meters used by the mapping SDK's spherical geometry.
pub const EARTH_RADIUS_M: f64 = 6_378_137.0;

/// Signed area of `ring` on a sphere of radius `radius`, in square meters.
///
/// Positive for counterclockwise winding (as seen from outside the sphere),
/// negative for clockwise. Fewer than 3 vertices enclose nothing and yield 0.
pub fn signed_ring_area(ring: &[LatLng], radius: f64) -> f64 {
    if ring.len() < 3 {
        return 0.0;
    }
    let prev = ring[ring.len() - 1];
    let mut prev_tan_lat = ((std::f64::consts::FRAC_PI_2 - prev.lat.to_radians()) / 2.0).tan();
    let mut prev_lng = prev.lng.to_radians();
    let mut total = 0.0;
    for p in ring {
        let tan_lat = ((std::f64::consts::FRAC_PI_2 - p.lat.to_radians()) / 2.0).tan();
        let lng = p.lng.to_radians();
        total += polar_triangle_excess(tan_lat, lng, prev_tan_lat, prev_lng);
        prev_tan_lat = tan_lat;
        prev_lng = lng;
    }
    total * radius * radius
}

/// Unsigned area of `ring` on the earth sphere, in square meters.
#[inline]
pub fn ring_area(ring: &[LatLng]) -> f64 {
    signed_ring_area(ring, EARTH_RADIUS_M).abs()
}

/// Signed excess of the polar triangle through two vertices and the north
/// pole, with latitudes pre-mapped through `tan((π/2 − lat)/2)`.
#[inline]
fn polar_triangle_excess(tan1: f64, lng1: f64, tan2: f64, lng2: f64) -> f64 {
    let delta_lng = lng1 - lng2;
    let t = tan1 * tan2;
    2.0 * (t * delta_lng.sin()).atan2(1.0 + t * delta_lng.cos())
}
