//! Distance sensor boundary
//!
//! Sensors report millimetres; everything past this module works in the
//! field's linear unit (inches), and only readings inside the plausibility
//! window are allowed through.

use crate::error::{ResetError, Result};
use crate::math::mm_to_inches;

/// A single-axis distance sensor
///
/// Implement this for the hardware driver. `None` means the sensor saw no
/// object; any value, including negative ones, is passed on for validation.
pub trait DistanceSensor {
    /// Current distance in millimetres
    fn read_mm(&mut self) -> Option<f64>;

    /// Current distance in field units
    fn read_inches(&mut self) -> Option<f64> {
        self.read_mm().map(mm_to_inches)
    }
}

impl<S: DistanceSensor + ?Sized> DistanceSensor for &mut S {
    fn read_mm(&mut self) -> Option<f64> {
        (**self).read_mm()
    }
}

/// Accept a reading only if it lies in `(0, max]`
///
/// # Example
/// ```
/// use distance_reset::{ResetError, sensor::check_plausible};
///
/// assert_eq!(check_plausible("left", Some(12.5), 200.0), Ok(12.5));
/// assert!(matches!(
///     check_plausible("left", Some(201.0), 200.0),
///     Err(ResetError::Implausible { .. })
/// ));
/// ```
pub fn check_plausible(sensor: &'static str, reading: Option<f64>, max: f64) -> Result<f64> {
    match reading {
        None => Err(ResetError::NoReading { sensor }),
        // NaN fails both comparisons
        Some(value) if value > 0.0 && value <= max => Ok(value),
        Some(value) => Err(ResetError::Implausible { sensor, value, max }),
    }
}

/// Whether a reading counts as "at the wall" during an approach
pub(crate) fn within_threshold(reading: Option<f64>, threshold: f64) -> Option<f64> {
    reading.filter(|value| *value > 0.0 && *value <= threshold)
}
