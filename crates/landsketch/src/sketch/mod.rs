//! Ring sketching (click collection and closure detection).
//!
//! Purpose
//! - Accumulate map-click coordinates into an ordered open ring, detect when a
//!   click lands close enough to the start point to close it, and expose the
//!   `Empty → Collecting → Closable → Closed` phase machine to the widget.
//! - Keep the API minimal: append-only mutation plus truncation-to-empty reset.
//!
//! Why planar closure
//! - The closure predicate is raw coordinate-degree Euclidean distance, not a
//!   geodesic. That makes the threshold latitude-dependent. This is a documented
//!   limitation carried over deliberately; see `SketchCfg::closure_eps`.
//!
//! Code cross-refs: `types::{LatLng, SketchCfg}`, `ring::RingSketch`

pub mod rand;
pub mod ring;
mod types;

pub use ring::{ClickOutcome, RingSketch, SketchPhase};
pub use types::{LatLng, SketchCfg};

#[cfg(test)]
mod tests;
