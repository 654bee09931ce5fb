//! Angle helpers and unit constants for the distance reset library

#[allow(unused_imports)] // no_std
use nalgebra::ComplexField;

/// Mathematical constants
pub const DEG_TO_RAD: f64 = core::f64::consts::PI / 180.0;
pub const RAD_TO_DEG: f64 = 180.0 / core::f64::consts::PI;

/// Millimetres per inch, the conversion applied to raw sensor readings
pub const MM_PER_INCH: f64 = 25.4;

/// Number of degrees in a full turn
pub const FULL_TURN: f64 = 360.0;

/// Number of degrees between neighbouring field walls
pub const RIGHT_ANGLE: f64 = 90.0;

/// Extension trait for headings expressed in degrees
pub trait HeadingExt {
    /// Wrap the heading into `[0, 360)`
    fn wrap_degrees(self) -> f64;

    /// The multiple of 90° closest to this heading, within `[0, 360]`
    fn nearest_right_angle(self) -> f64;

    /// Signed deviation from the nearest multiple of 90°, in `[-45, 45]`
    fn angle_off_perpendicular(self) -> f64;

    /// Smallest signed difference `self - other`, in `(-180, 180]`
    fn heading_difference(self, other: f64) -> f64;
}

impl HeadingExt for f64 {
    fn wrap_degrees(self) -> f64 {
        let wrapped = self % FULL_TURN;
        let wrapped = if wrapped < 0.0 {
            wrapped + FULL_TURN
        } else {
            wrapped
        };

        // -1e-17 + 360 rounds to exactly 360
        if wrapped >= FULL_TURN { 0.0 } else { wrapped }
    }

    fn nearest_right_angle(self) -> f64 {
        (self.wrap_degrees() / RIGHT_ANGLE).round() * RIGHT_ANGLE
    }

    fn angle_off_perpendicular(self) -> f64 {
        self.wrap_degrees() - self.nearest_right_angle()
    }

    fn heading_difference(self, other: f64) -> f64 {
        let difference = (self - other).wrap_degrees();
        if difference > 180.0 {
            difference - FULL_TURN
        } else {
            difference
        }
    }
}

/// Convert a raw millimetre reading into inches
#[inline]
pub fn mm_to_inches(millimetres: f64) -> f64 {
    millimetres / MM_PER_INCH
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    #[test]
    fn test_wrap_degrees() {
        assert_eq!(0.0_f64.wrap_degrees(), 0.0);
        assert_eq!(360.0_f64.wrap_degrees(), 0.0);
        assert_eq!(450.0_f64.wrap_degrees(), 90.0);
        assert_eq!((-90.0_f64).wrap_degrees(), 270.0);
        assert_eq!((-720.0_f64).wrap_degrees(), 0.0);
        assert!((-1e-17_f64).wrap_degrees() < FULL_TURN);
    }

    #[test]
    fn test_nearest_right_angle() {
        assert_eq!(10.0_f64.nearest_right_angle(), 0.0);
        assert_eq!(44.9_f64.nearest_right_angle(), 0.0);
        assert_eq!(46.0_f64.nearest_right_angle(), 90.0);
        assert_eq!(350.0_f64.nearest_right_angle(), 360.0);
        assert_eq!((-10.0_f64).nearest_right_angle(), 360.0);
        assert_eq!(190.0_f64.nearest_right_angle(), 180.0);
    }

    #[test]
    fn test_angle_off_perpendicular_is_bounded() {
        let mut heading: f64 = -720.0;
        while heading <= 720.0 {
            let off = heading.angle_off_perpendicular();
            assert!(
                (-45.0..=45.0).contains(&off),
                "angle off {} out of range for heading {}",
                off,
                heading
            );
            heading += 0.25;
        }
    }

    #[test]
    fn test_angle_off_perpendicular_sign() {
        assert!((95.0_f64.angle_off_perpendicular() - 5.0).abs() < EPSILON);
        assert!((85.0_f64.angle_off_perpendicular() + 5.0).abs() < EPSILON);
        assert!((355.0_f64.angle_off_perpendicular() + 5.0).abs() < EPSILON);
        assert!((365.0_f64.angle_off_perpendicular() - 5.0).abs() < EPSILON);
    }

    #[test]
    fn test_heading_difference() {
        assert!((10.0_f64.heading_difference(350.0) - 20.0).abs() < EPSILON);
        assert!((350.0_f64.heading_difference(10.0) + 20.0).abs() < EPSILON);
        assert!((180.0_f64.heading_difference(0.0) - 180.0).abs() < EPSILON);
    }

    #[test]
    fn test_mm_to_inches() {
        assert!((mm_to_inches(254.0) - 10.0).abs() < EPSILON);
        assert_eq!(mm_to_inches(0.0), 0.0);
    }
}
