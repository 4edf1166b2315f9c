use serde::Deserialize;

/// Raw device-orientation reading.
///
/// `alpha` is `None` when the platform fires the event without an angle.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct CompassSample {
    #[serde(default)]
    pub alpha: Option<f64>,
    #[serde(default)]
    pub absolute: bool,
}

impl CompassSample {
    pub fn absolute(alpha: f64) -> Self {
        Self {
            alpha: Some(alpha),
            absolute: true,
        }
    }

    pub fn relative(alpha: f64) -> Self {
        Self {
            alpha: Some(alpha),
            absolute: false,
        }
    }

    pub fn empty() -> Self {
        Self {
            alpha: None,
            absolute: false,
        }
    }
}
