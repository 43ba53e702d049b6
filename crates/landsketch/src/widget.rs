//! The plot-measurement widget (clicks in, rendered plot and area out).
//!
//! Purpose
//! - Tie the ring sketch, the spherical area routine, and the unit formatting
//!   to a `MapSurface`, with the single-slot overlay/annotation discipline:
//!   at most one live overlay and one live annotation at any time, previous
//!   ones retired before replacements are drawn.
//!
//! Invariants
//! - Vertex sequence, marker set, overlay slot, and annotation slot move as a
//!   unit: every redraw replaces overlay and annotation together within one
//!   synchronous call, and `clear_all` empties all four unconditionally.
//! - One marker per accepted (non-closing) click, plus one for the initial
//!   position fix. All of them go away on `clear_all`.
//!
//! Concurrency
//! - None. Every mutation goes through `&mut self` from serialized UI events;
//!   no background work touches the state.

use tracing::{debug, error};

use crate::position::PositionSource;
use crate::sketch::{ClickOutcome, LatLng, RingSketch, SketchCfg, SketchPhase};
use crate::spherical;
use crate::surface::{AnnotationId, MapSurface, MarkerId, OverlayId, OverlayStyle};
use crate::units;

/// Interactive land-plot sketcher bound to one map surface.
pub struct PlotWidget<S> {
    surface: S,
    sketch: RingSketch,
    markers: Vec<MarkerId>,
    overlay: Option<OverlayId>,
    annotation: Option<AnnotationId>,
    center: LatLng,
    style: OverlayStyle,
}

impl<S: MapSurface> PlotWidget<S> {
    /// Widget with the default closure tolerance and styling; center starts
    /// at (0, 0) until `init` resolves a position.
    pub fn new(surface: S) -> Self {
        Self::with_cfg(surface, SketchCfg::default())
    }

    pub fn with_cfg(surface: S, cfg: SketchCfg) -> Self {
        Self {
            surface,
            sketch: RingSketch::new(cfg),
            markers: Vec::new(),
            overlay: None,
            annotation: None,
            center: LatLng::new(0.0, 0.0),
            style: OverlayStyle::default(),
        }
    }

    /// One-shot position fix. On success the center moves there and a marker
    /// is dropped at it; on failure the error is logged and the center stays
    /// at the default. Never retried.
    pub fn init<P: PositionSource>(&mut self, source: &mut P) {
        match source.current_position() {
            Ok(p) => {
                self.center = p;
                self.markers.push(self.surface.add_marker(p));
                debug!(lat = p.lat, lng = p.lng, "centered on device position");
            }
            Err(e) => {
                error!(error = %e, "position unavailable, keeping default center");
            }
        }
    }

    /// Feed one map click. Appended clicks get a marker; any accepted click
    /// (including the closing one) triggers a full redraw; clicks after
    /// closure are dropped.
    pub fn handle_click(&mut self, p: LatLng) {
        match self.sketch.accept_click(p) {
            ClickOutcome::Appended(p) => {
                self.markers.push(self.surface.add_marker(p));
                self.redraw();
            }
            ClickOutcome::Closed => self.redraw(),
            ClickOutcome::Ignored => {}
        }
    }

    /// Unrender everything and return to the empty state. Idempotent; each
    /// removal is fire-and-forget against the surface.
    pub fn clear_all(&mut self) {
        if let Some(o) = self.overlay.take() {
            self.surface.remove_overlay(o);
        }
        for m in self.markers.drain(..) {
            self.surface.remove_marker(m);
        }
        if let Some(a) = self.annotation.take() {
            self.surface.close_annotation(a);
        }
        self.sketch.clear();
    }

    /// Replace overlay and annotation from the current vertex sequence.
    ///
    /// Retire-then-draw on both slots, all within this one call, so the four
    /// pieces of state are never observably inconsistent between events. The
    /// annotation always refreshes, even below 3 vertices where the area is 0.
    fn redraw(&mut self) {
        if let Some(o) = self.overlay.take() {
            self.surface.remove_overlay(o);
        }
        self.overlay = Some(self.surface.draw_overlay(self.sketch.vertices(), self.style));

        let area_m2 = spherical::ring_area(self.sketch.vertices());
        let label = units::area_label(area_m2);
        if let Some(a) = self.annotation.take() {
            self.surface.close_annotation(a);
        }
        self.annotation = Some(self.surface.open_annotation(self.center, &label));
    }

    /// Spherical area of the current vertex sequence, in square meters.
    /// Zero below 3 vertices.
    pub fn area_square_meters(&self) -> f64 {
        spherical::ring_area(self.sketch.vertices())
    }

    #[inline]
    pub fn center(&self) -> LatLng {
        self.center
    }

    #[inline]
    pub fn phase(&self) -> SketchPhase {
        self.sketch.phase()
    }

    #[inline]
    pub fn sketch(&self) -> &RingSketch {
        &self.sketch
    }

    /// The embedding surface, for surface-specific inspection.
    #[inline]
    pub fn surface(&self) -> &S {
        &self.surface
    }
}
