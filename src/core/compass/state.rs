use serde::Serialize;
use thiserror::Error;

/// Why the automatic heading path stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error, Serialize)]
pub enum CompassFault {
    #[error("permission to read device orientation was denied")]
    PermissionDenied,
    #[error("device orientation permission request failed")]
    PermissionRequestFailed,
    #[error("device orientation is not supported on this platform")]
    UnsupportedPlatform,
    #[error("no orientation sample received, sensor unavailable")]
    SensorUnavailable,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Phase {
    Idle,
    Calibrating,
    Live,
    Error(CompassFault),
    Manual,
}

impl Phase {
    pub fn name(&self) -> &'static str {
        match self {
            Phase::Idle => "idle",
            Phase::Calibrating => "calibrating",
            Phase::Live => "live",
            Phase::Error(_) => "error",
            Phase::Manual => "manual",
        }
    }
}

/// Snapshot handed to the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CompassState {
    pub heading: f64,
    pub calibrating: bool,
    pub error: Option<CompassFault>,
    pub manual_mode: bool,
    pub manual_heading: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RotateDirection {
    Left,
    Right,
}

impl RotateDirection {
    pub fn from_code(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "left" | "l" | "sx" => Some(Self::Left),
            "right" | "r" | "dx" => Some(Self::Right),
            _ => None,
        }
    }

    /// Signed rotation for a given step size.
    pub fn delta(&self, step: f64) -> f64 {
        match self {
            RotateDirection::Left => -step,
            RotateDirection::Right => step,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CompassError {
    #[error("cannot {action} while the compass is {phase}")]
    InvalidTransition {
        action: &'static str,
        phase: &'static str,
    },
}
