//! One-shot device position acquisition.
//!
//! The widget asks a `PositionSource` for the current position exactly once,
//! at initialization. There is no retry, no timeout, and no cancellation: a
//! source that never resolves simply leaves the widget at its default center.

use thiserror::Error;

use crate::sketch::LatLng;

/// The only recognized position failures. Neither is surfaced in the UI
/// beyond a log line; the widget keeps its default center and carries on.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PositionError {
    /// The platform has no geolocation capability.
    #[error("geolocation is not available on this platform")]
    Unavailable,
    /// The user (or platform policy) denied the permission request.
    #[error("geolocation permission denied")]
    Denied,
}

/// One-shot current-position provider.
pub trait PositionSource {
    fn current_position(&mut self) -> Result<LatLng, PositionError>;
}

/// Always resolves to a fixed coordinate. Test and demo use.
#[derive(Clone, Copy, Debug)]
pub struct FixedPosition(pub LatLng);

impl PositionSource for FixedPosition {
    fn current_position(&mut self) -> Result<LatLng, PositionError> {
        Ok(self.0)
    }
}

/// Always fails with `Unavailable`. Headless environments.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoPosition;

impl PositionSource for NoPosition {
    fn current_position(&mut self) -> Result<LatLng, PositionError> {
        Err(PositionError::Unavailable)
    }
}
