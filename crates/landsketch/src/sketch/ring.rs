//! Ordered click collection with near-start closure (RingSketch).
//!
//! Purpose
//! - Hold the ordered vertex sequence of the plot outline being sketched and
//!   run the closure check on every incoming click.
//!
//! Invariants
//! - Vertices only ever change by appending or by truncation-to-empty.
//! - Once closed, the last vertex is a duplicate of the first (an explicit
//!   ring) and no further clicks are accepted until `clear`.
//! - The closure check never runs with fewer than 3 collected vertices.

use super::types::{LatLng, SketchCfg};

/// Observable phase of the sketch.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SketchPhase {
    /// No vertices collected.
    Empty,
    /// 1–2 vertices: every click appends, closure cannot fire yet.
    Collecting,
    /// 3+ vertices: the next click may close the ring.
    Closable,
    /// Ring closed; clicks are ignored until `clear`.
    Closed,
}

/// What a click did, so the caller knows which renders to request.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ClickOutcome {
    /// Vertex appended; the caller should render a marker and redraw.
    Appended(LatLng),
    /// The click closed the ring (duplicate of the first vertex appended).
    /// No marker for the closing click; the caller should redraw.
    Closed,
    /// Sketch already closed; the click was dropped.
    Ignored,
}

/// Ordered vertex sequence with near-start closure detection.
#[derive(Clone, Debug, Default)]
pub struct RingSketch {
    vertices: Vec<LatLng>,
    closed: bool,
    cfg: SketchCfg,
}

impl RingSketch {
    pub fn new(cfg: SketchCfg) -> Self {
        Self {
            vertices: Vec::new(),
            closed: false,
            cfg,
        }
    }

    /// Feed one click into the sketch.
    ///
    /// Below 3 collected vertices the click is appended unconditionally (no
    /// closure check regardless of distance). From 3 on, a click within
    /// `closure_eps` planar degrees of the FIRST vertex closes the ring by
    /// appending a duplicate of that first vertex.
    pub fn accept_click(&mut self, p: LatLng) -> ClickOutcome {
        if self.closed {
            return ClickOutcome::Ignored;
        }
        if self.vertices.len() >= 3 {
            let first = self.vertices[0];
            if first.planar_distance(p) < self.cfg.closure_eps {
                self.vertices.push(first);
                self.closed = true;
                return ClickOutcome::Closed;
            }
        }
        self.vertices.push(p);
        ClickOutcome::Appended(p)
    }

    /// Truncate to empty. Idempotent.
    pub fn clear(&mut self) {
        self.vertices.clear();
        self.closed = false;
    }

    /// The collected vertices, in click order. When closed, the last entry
    /// duplicates the first.
    #[inline]
    pub fn vertices(&self) -> &[LatLng] {
        &self.vertices
    }

    #[inline]
    pub fn is_closed(&self) -> bool {
        self.closed
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    #[inline]
    pub fn phase(&self) -> SketchPhase {
        if self.closed {
            SketchPhase::Closed
        } else if self.vertices.is_empty() {
            SketchPhase::Empty
        } else if self.vertices.len() < 3 {
            SketchPhase::Collecting
        } else {
            SketchPhase::Closable
        }
    }

    #[inline]
    pub fn cfg(&self) -> SketchCfg {
        self.cfg
    }
}
