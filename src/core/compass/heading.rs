//! Heading arithmetic: sample normalization and 16-point classification.

use crate::models::direction::{Direction, SECTORS};

/// Fold any finite angle into `[0, 360)`.
pub fn wrap_degrees(deg: f64) -> f64 {
    let wrapped = deg.rem_euclid(360.0);
    // rem_euclid may round up to exactly 360 for tiny negative inputs
    if wrapped >= 360.0 { 0.0 } else { wrapped }
}

/// Turn a raw orientation angle into a compass heading.
///
/// - `None` (or a non-finite angle) means the sample carries no reading.
/// - Negative angles are shifted by a full turn first.
/// - Relative sources report device rotation, which runs opposite to the
///   bearing, so they are mirrored as `360 - h`.
///
/// The result is always in `[0, 360)`; a relative reading of `0` gives `0`.
pub fn normalize_heading(raw: Option<f64>, is_absolute: bool) -> Option<f64> {
    let raw = raw.filter(|a| a.is_finite())?;

    let mut heading = if raw < 0.0 { raw + 360.0 } else { raw };
    if !is_absolute {
        heading = 360.0 - heading;
    }

    Some(wrap_degrees(heading))
}

/// Direction label of a heading in `[0, 360)`.
///
/// Anything that falls outside every sector (NaN, or an unnormalized value)
/// is reported as north.
pub fn classify(heading: f64) -> Direction {
    SECTORS
        .iter()
        .find(|s| s.contains(heading))
        .map(|s| s.direction)
        .unwrap_or(Direction::N)
}
