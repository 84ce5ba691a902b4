//! Haptic feedback collaborator.
//!
//! Hosts plug a platform engine in through [`HapticFeedback`]. Requests are
//! fire-and-forget: widgets never wait on them and never surface their
//! failures, see [`request_impact`].

use serde::{Deserialize, Serialize};
use std::sync::{Mutex, PoisonError};
use thiserror::Error;

/// Intensity of an impact pulse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ImpactStyle {
    /// Light tap
    #[default]
    Light,
    /// Medium tap
    Medium,
    /// Heavy tap
    Heavy,
}

/// Failure reported by a haptic engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HapticError {
    /// No haptic engine on this device
    #[error("haptic engine unavailable")]
    Unavailable,
    /// The engine rejected the request
    #[error("haptic request failed: {0}")]
    Failed(String),
}

/// Platform haptic engine.
pub trait HapticFeedback: Send + Sync {
    /// Dispatch an impact pulse. Implementations must not block.
    fn impact(&self, style: ImpactStyle) -> Result<(), HapticError>;
}

/// Dispatch a pulse and swallow any failure after logging it.
pub fn request_impact(engine: &dyn HapticFeedback, style: ImpactStyle) {
    if let Err(err) = engine.impact(style) {
        log::warn!("haptic {style:?} pulse dropped: {err}");
    }
}

/// Engine that does nothing, for hosts without haptics.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopHaptics;

impl HapticFeedback for NoopHaptics {
    fn impact(&self, _style: ImpactStyle) -> Result<(), HapticError> {
        Ok(())
    }
}

/// Engine that records every request, optionally failing each one.
#[derive(Debug, Default)]
pub struct RecordingHaptics {
    pulses: Mutex<Vec<ImpactStyle>>,
    fail_with: Option<HapticError>,
}

impl RecordingHaptics {
    /// Create a recorder that accepts every pulse.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a recorder that records then rejects every pulse.
    #[must_use]
    pub fn failing(error: HapticError) -> Self {
        Self {
            pulses: Mutex::new(Vec::new()),
            fail_with: Some(error),
        }
    }

    /// Pulses requested so far.
    #[must_use]
    pub fn pulses(&self) -> Vec<ImpactStyle> {
        self.pulses
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Number of pulses requested so far.
    #[must_use]
    pub fn count(&self) -> usize {
        self.pulses
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }
}

impl HapticFeedback for RecordingHaptics {
    fn impact(&self, style: ImpactStyle) -> Result<(), HapticError> {
        self.pulses
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(style);
        match &self.fail_with {
            Some(err) => Err(err.clone()),
            None => Ok(()),
        }
    }
}
