//! Land-plot sketching and area measurement core.
//!
//! Click points around a plot, the ring auto-closes when a click lands near
//! the start point, and the enclosed spherical area comes back in Thai land
//! units (rai/ngan). Map rendering stays behind the `surface::MapSurface`
//! trait: this crate never talks to a concrete mapping SDK.
//!
//! API Policy
//! - This crate is project-internal. There is no stable public API.
//! - Prefer clarity and better design over compatibility; breaking changes
//!   are fine when they improve quality.

pub mod api;
pub mod position;
pub mod sketch;
pub mod spherical;
pub mod surface;
pub mod units;
pub mod widget;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::position::{FixedPosition, NoPosition, PositionError, PositionSource};
    pub use crate::sketch::{ClickOutcome, LatLng, RingSketch, SketchCfg, SketchPhase};
    pub use crate::spherical::{ring_area, signed_ring_area, EARTH_RADIUS_M};
    pub use crate::surface::{MapSurface, OverlayStyle, RecordingSurface};
    pub use crate::units::{area_label, RaiNgan};
    pub use crate::widget::PlotWidget;
}
