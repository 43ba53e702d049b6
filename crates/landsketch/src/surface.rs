//! Map surface adapter (markers, overlays, annotations).
//!
//! Purpose
//! - Put the rendering boundary behind one trait so the widget never touches a
//!   concrete mapping SDK. Implementations hand back opaque ids; the widget
//!   releases them explicitly on every reset/replace path, since map objects
//!   have no destructor hook on the other side of the boundary.
//!
//! Contract
//! - All calls are infallible fire-and-forget. Removing an id twice, or an id
//!   the implementation no longer knows, must be a no-op rather than an error.

use crate::sketch::LatLng;

/// Opaque handle to a rendered point marker.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct MarkerId(pub u64);

/// Opaque handle to a rendered polygon overlay.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct OverlayId(pub u64);

/// Opaque handle to an open text annotation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct AnnotationId(pub u64);

/// Fixed polygon styling. Colors are `0xRRGGBB`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OverlayStyle {
    pub stroke_color: u32,
    pub stroke_opacity: f64,
    pub stroke_weight_px: f64,
    pub fill_color: u32,
    pub fill_opacity: f64,
}

impl Default for OverlayStyle {
    /// Red 2 px stroke at 0.8 opacity, red fill at 0.35.
    fn default() -> Self {
        Self {
            stroke_color: 0xff0000,
            stroke_opacity: 0.8,
            stroke_weight_px: 2.0,
            fill_color: 0xff0000,
            fill_opacity: 0.35,
        }
    }
}

/// Rendering boundary. One implementation per embedding map surface.
pub trait MapSurface {
    fn add_marker(&mut self, at: LatLng) -> MarkerId;
    fn remove_marker(&mut self, id: MarkerId);

    /// Draw a filled polygon through `path` in click order. The previous
    /// overlay is NOT replaced implicitly; the caller removes it first.
    fn draw_overlay(&mut self, path: &[LatLng], style: OverlayStyle) -> OverlayId;
    fn remove_overlay(&mut self, id: OverlayId);

    fn open_annotation(&mut self, at: LatLng, text: &str) -> AnnotationId;
    fn close_annotation(&mut self, id: AnnotationId);
}

/// One recorded surface call, newest last.
#[derive(Clone, Debug, PartialEq)]
pub enum SurfaceOp {
    AddMarker(MarkerId, LatLng),
    RemoveMarker(MarkerId),
    DrawOverlay(OverlayId, Vec<LatLng>),
    RemoveOverlay(OverlayId),
    OpenAnnotation(AnnotationId, LatLng, String),
    CloseAnnotation(AnnotationId),
}

/// Headless surface that tracks live objects and logs every call.
///
/// Serves tests and benches, and embedders that want to drive the widget
/// without a real map (the log replays cleanly against any `MapSurface`).
#[derive(Debug, Default)]
pub struct RecordingSurface {
    next_id: u64,
    pub markers: Vec<(MarkerId, LatLng)>,
    pub overlays: Vec<(OverlayId, Vec<LatLng>)>,
    pub annotations: Vec<(AnnotationId, LatLng, String)>,
    pub ops: Vec<SurfaceOp>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    fn next(&mut self) -> u64 {
        self.next_id += 1;
        self.next_id
    }

    /// True when nothing is rendered.
    pub fn is_blank(&self) -> bool {
        self.markers.is_empty() && self.overlays.is_empty() && self.annotations.is_empty()
    }
}

impl MapSurface for RecordingSurface {
    fn add_marker(&mut self, at: LatLng) -> MarkerId {
        let id = MarkerId(self.next());
        self.markers.push((id, at));
        self.ops.push(SurfaceOp::AddMarker(id, at));
        id
    }

    fn remove_marker(&mut self, id: MarkerId) {
        self.markers.retain(|(m, _)| *m != id);
        self.ops.push(SurfaceOp::RemoveMarker(id));
    }

    fn draw_overlay(&mut self, path: &[LatLng], _style: OverlayStyle) -> OverlayId {
        let id = OverlayId(self.next());
        self.overlays.push((id, path.to_vec()));
        self.ops.push(SurfaceOp::DrawOverlay(id, path.to_vec()));
        id
    }

    fn remove_overlay(&mut self, id: OverlayId) {
        self.overlays.retain(|(o, _)| *o != id);
        self.ops.push(SurfaceOp::RemoveOverlay(id));
    }

    fn open_annotation(&mut self, at: LatLng, text: &str) -> AnnotationId {
        let id = AnnotationId(self.next());
        self.annotations.push((id, at, text.to_string()));
        self.ops
            .push(SurfaceOp::OpenAnnotation(id, at, text.to_string()));
        id
    }

    fn close_annotation(&mut self, id: AnnotationId) {
        self.annotations.retain(|(a, _, _)| *a != id);
        self.ops.push(SurfaceOp::CloseAnnotation(id));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_unique_across_kinds() {
        let mut s = RecordingSurface::new();
        let m = s.add_marker(LatLng::new(0.0, 0.0));
        let o = s.draw_overlay(&[LatLng::new(0.0, 0.0)], OverlayStyle::default());
        let a = s.open_annotation(LatLng::new(0.0, 0.0), "x");
        assert_ne!(m.0, o.0);
        assert_ne!(o.0, a.0);
    }

    #[test]
    fn double_remove_is_a_no_op() {
        let mut s = RecordingSurface::new();
        let m = s.add_marker(LatLng::new(1.0, 1.0));
        s.remove_marker(m);
        s.remove_marker(m);
        assert!(s.markers.is_empty());
    }
}
