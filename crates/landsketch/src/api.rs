//! Curated internal API surface (UNSTABLE).
//!
//! Important
//! - This is not a public API; it is a convenience surface for project-internal
//!   code. Breaking changes are allowed and expected.
//! - Prefer these re-exports for consistency across embedders and tests.

// Sketching
pub use crate::sketch::rand::{draw_ring_radial, RadialCfg, ReplayToken, VertexCount};
pub use crate::sketch::{ClickOutcome, LatLng, RingSketch, SketchCfg, SketchPhase};
// Area and units
pub use crate::spherical::{ring_area, signed_ring_area, EARTH_RADIUS_M};
pub use crate::units::{area_label, RaiNgan, NGAN_PER_RAI, SQ_M_PER_RAI};
// Boundaries
pub use crate::position::{FixedPosition, NoPosition, PositionError, PositionSource};
pub use crate::surface::{
    AnnotationId, MapSurface, MarkerId, OverlayId, OverlayStyle, RecordingSurface, SurfaceOp,
};
// Widget
pub use crate::widget::PlotWidget;
