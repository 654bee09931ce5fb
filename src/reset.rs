//! Wall-referenced pose correction
//!
//! Two correctors share the wall classifier in [`crate::wall`]:
//!
//! - **Single sensor**: one sensor on any face. The robot's own heading gives
//!   the angle of incidence, a cosine correction recovers the perpendicular
//!   distance, and the wall's axis is overwritten.
//! - **Back pair**: two sensors side by side on the back face. The reading
//!   difference gives the angle to the wall directly, so both the wall's axis
//!   and the heading are overwritten.
//!
//! The free functions [`correct_single`] and [`correct_pair`] only compute.
//! [`DistanceReset`] reads sensors, runs them and writes the pose.
//!
//! # Example
//! ```
//! use distance_reset::{DistanceReset, DistanceSensor, Pose, ResetSettings};
//!
//! struct Sensor(f64);
//! impl DistanceSensor for Sensor {
//!     fn read_mm(&mut self) -> Option<f64> {
//!         Some(self.0)
//!     }
//! }
//!
//! let mut reset = DistanceReset::new(Pose::new(0.0, 0.0, 90.0), ResetSettings::default())?;
//!
//! // Right sensor 5" from the wall, mounted 1" from the tracking centre
//! let mut right = Sensor(5.0 * 25.4);
//! reset.reset_right(&mut right, 1.0)?;
//!
//! let pose = reset.pose();
//! assert!((pose.y() + 66.0).abs() < 1e-9);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use core::fmt;

use log::{info, warn};
#[allow(unused_imports)] // no_std
use nalgebra::{ComplexField, RealField};

use crate::error::{ConfigError, Result};
use crate::math::{DEG_TO_RAD, HeadingExt, RAD_TO_DEG};
use crate::odometry::PoseSource;
use crate::sensor::{DistanceSensor, check_plausible};
use crate::types::{Pose, ResetSettings, SensorFacing};
use crate::wall::{Wall, WallContact};

/// Heading disagreement past which a back-pair correction is reported as suspicious
pub const ALIGNMENT_WARNING_DEG: f64 = 30.0;

/// Geometry of two distance sensors mounted side by side on the back face
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BackSensorPair {
    spacing: f64,
    left_offset: f64,
    right_offset: f64,
}

impl BackSensorPair {
    /// # Arguments
    /// * `spacing` - Distance between the two sensor faces, across the robot
    /// * `left_offset` - Tracking centre to the left sensor face
    /// * `right_offset` - Tracking centre to the right sensor face
    pub fn new(
        spacing: f64,
        left_offset: f64,
        right_offset: f64,
    ) -> core::result::Result<Self, ConfigError> {
        if !(spacing > 0.0) {
            return Err(ConfigError::NonPositiveSpacing(spacing));
        }

        Ok(Self {
            spacing,
            left_offset,
            right_offset,
        })
    }

    pub fn spacing(&self) -> f64 {
        self.spacing
    }

    pub fn left_offset(&self) -> f64 {
        self.left_offset
    }

    pub fn right_offset(&self) -> f64 {
        self.right_offset
    }

    /// The same rig seen with left and right exchanged
    pub fn mirrored(&self) -> Self {
        Self {
            spacing: self.spacing,
            left_offset: self.right_offset,
            right_offset: self.left_offset,
        }
    }
}

/// Result of a single-sensor correction
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisCorrection {
    /// Wall the sensor was facing
    pub contact: WallContact,
    /// World heading the sensor pointed in, `[0, 360)`
    pub effective_heading: f64,
    /// Deviation of the sensor from square to the wall, degrees
    pub angle_off: f64,
    /// Perpendicular distance from the wall to the tracking centre
    pub distance: f64,
    /// Corrected value for `contact.axis`
    pub coordinate: f64,
}

impl AxisCorrection {
    /// Overwrite the corrected axis, leaving the other axis and heading alone
    pub fn apply(&self, pose: Pose) -> Pose {
        pose.with_coordinate(self.contact.axis, self.coordinate)
    }
}

/// Result of a back-pair correction
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PoseCorrection {
    /// Wall the back face was against
    pub contact: WallContact,
    /// Rotation of the back face away from square, degrees
    ///
    /// Positive when the right sensor reads farther than the left.
    pub angle_to_wall: f64,
    /// Perpendicular distance from the wall to the tracking centre
    pub distance: f64,
    /// Corrected value for `contact.axis`
    pub coordinate: f64,
    /// Corrected heading, `[0, 360)`
    pub heading: f64,
    /// Corrected heading minus the heading it replaces, `(-180, 180]`
    pub heading_change: f64,
}

impl PoseCorrection {
    /// Overwrite the corrected axis and the heading, leaving the other axis alone
    pub fn apply(&self, pose: Pose) -> Pose {
        pose.with_coordinate(self.contact.axis, self.coordinate)
            .with_heading(self.heading)
    }

    /// Whether the sensors disagree with the tracked heading by more than
    /// [`ALIGNMENT_WARNING_DEG`], which usually means the back was not on the wall
    pub fn is_suspicious(&self) -> bool {
        self.heading_change.abs() > ALIGNMENT_WARNING_DEG
    }
}

/// Correct one axis from a single sensor reading
///
/// # Arguments
/// * `facing` - Face of the robot the sensor looks out of
/// * `reading` - Sensor reading in field units, `None` if nothing was seen
/// * `offset` - Tracking centre to the sensor face
/// * `heading` - Current robot heading in degrees
/// * `settings` - Field size and plausibility window
///
/// # Errors
/// [`ResetError`](crate::ResetError) if the reading is missing or outside the
/// plausibility window.
pub fn correct_single(
    facing: SensorFacing,
    reading: Option<f64>,
    offset: f64,
    heading: f64,
    settings: &ResetSettings,
) -> Result<AxisCorrection> {
    let reading = check_plausible(facing.label(), reading, settings.max_plausible)?;

    let effective_heading = facing.effective_heading(heading);
    let angle_off = effective_heading.angle_off_perpendicular();

    // |angle_off| <= 45°, so the cosine never drops below ~0.707
    let distance = reading * (angle_off * DEG_TO_RAD).cos() + offset;

    let contact = Wall::classify(effective_heading);
    let coordinate = contact.wall.coordinate_at(settings.field_half, distance);

    Ok(AxisCorrection {
        contact,
        effective_heading,
        angle_off,
        distance,
        coordinate,
    })
}

/// Correct one axis and the heading from a back-facing sensor pair
///
/// The robot's back must be towards the wall; which wall is inferred from
/// `heading`, but the angle to it comes from the readings alone.
///
/// # Errors
/// [`ResetError`](crate::ResetError) if either reading is missing or outside
/// the plausibility window. The left sensor is checked first.
pub fn correct_pair(
    left: Option<f64>,
    right: Option<f64>,
    rig: &BackSensorPair,
    heading: f64,
    settings: &ResetSettings,
) -> Result<PoseCorrection> {
    let left = check_plausible("back left", left, settings.max_plausible)?;
    let right = check_plausible("back right", right, settings.max_plausible)?;

    let angle_rad = (right - left).atan2(rig.spacing);
    let angle_to_wall = angle_rad * RAD_TO_DEG;

    let average_offset = (rig.left_offset + rig.right_offset) / 2.0;
    let average_reading = (left + right) / 2.0;
    let distance = average_reading * angle_rad.cos() + average_offset;

    let contact = Wall::classify(SensorFacing::Back.effective_heading(heading));
    let coordinate = contact.wall.coordinate_at(settings.field_half, distance);

    let corrected_heading = (contact.perpendicular_heading - angle_to_wall).wrap_degrees();
    let heading_change = corrected_heading.heading_difference(heading);

    Ok(PoseCorrection {
        contact,
        angle_to_wall,
        distance,
        coordinate,
        heading: corrected_heading,
        heading_change,
    })
}

/// Applies distance sensor corrections to a tracked pose
pub struct DistanceReset<P> {
    odometry: P,
    settings: ResetSettings,
}

impl<P: PoseSource> DistanceReset<P> {
    /// Wrap a pose source
    ///
    /// # Errors
    /// [`ConfigError`] if the settings can never produce a valid correction.
    pub fn new(
        odometry: P,
        settings: ResetSettings,
    ) -> core::result::Result<Self, ConfigError> {
        settings.validate()?;
        Ok(Self { odometry, settings })
    }

    pub fn settings(&self) -> &ResetSettings {
        &self.settings
    }

    /// Current pose from the wrapped source
    pub fn pose(&self) -> Pose {
        self.odometry.pose()
    }

    pub fn odometry(&self) -> &P {
        &self.odometry
    }

    pub fn odometry_mut(&mut self) -> &mut P {
        &mut self.odometry
    }

    pub fn into_inner(self) -> P {
        self.odometry
    }

    /// Reset one axis from a sensor on the left face
    pub fn reset_left<S: DistanceSensor>(
        &mut self,
        sensor: &mut S,
        offset: f64,
    ) -> Result<AxisCorrection> {
        self.reset_facing(SensorFacing::Left, sensor, offset)
    }

    /// Reset one axis from a sensor on the right face
    pub fn reset_right<S: DistanceSensor>(
        &mut self,
        sensor: &mut S,
        offset: f64,
    ) -> Result<AxisCorrection> {
        self.reset_facing(SensorFacing::Right, sensor, offset)
    }

    /// Reset one axis from a sensor on any face
    ///
    /// On error the pose is left untouched.
    pub fn reset_facing<S: DistanceSensor>(
        &mut self,
        facing: SensorFacing,
        sensor: &mut S,
        offset: f64,
    ) -> Result<AxisCorrection> {
        let reading = sensor.read_inches();
        let before = self.odometry.pose();

        let correction = correct_single(facing, reading, offset, before.heading, &self.settings)
            .inspect_err(|e| warn!("Invalid {} sensor reading: {}", facing.label(), e))?;

        let after = correction.apply(before);
        self.odometry.set_pose(after);
        log_pose_change("Distance reset", &before, &after);

        Ok(correction)
    }

    /// Reset one axis and the heading from the back sensor pair
    ///
    /// The back of the robot must be facing the wall. On error the pose is
    /// left untouched.
    pub fn reset_back<L: DistanceSensor, R: DistanceSensor>(
        &mut self,
        left: &mut L,
        right: &mut R,
        rig: &BackSensorPair,
    ) -> Result<PoseCorrection> {
        let left_reading = left.read_inches();
        let right_reading = right.read_inches();
        let before = self.odometry.pose();

        let correction = correct_pair(
            left_reading,
            right_reading,
            rig,
            before.heading,
            &self.settings,
        )
        .inspect_err(|e| {
            warn!(
                "Invalid back sensor readings: L={} R={} ({})",
                Reading(left_reading),
                Reading(right_reading),
                e
            )
        })?;

        if correction.is_suspicious() {
            warn!(
                "Back pair disagrees with tracked heading by {:.1} deg; \
                 is the back against the {:?} wall?",
                correction.heading_change, correction.contact.wall
            );
        }

        let after = correction.apply(before);
        self.odometry.set_pose(after);
        log_pose_change("Back pair reset", &before, &after);

        Ok(correction)
    }
}

/// Sensor reading as it appears in diagnostics
struct Reading(Option<f64>);

impl fmt::Display for Reading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(value) => write!(f, "{:.2}", value),
            None => f.write_str("none"),
        }
    }
}

fn log_pose_change(label: &str, before: &Pose, after: &Pose) {
    let delta = after.delta_from(before);
    info!(
        "{}: ({:.2}, {:.2}, {:.1}) -> ({:.2}, {:.2}, {:.1}), delta ({:.2}, {:.2}, {:.1})",
        label,
        before.x(),
        before.y(),
        before.heading,
        after.x(),
        after.y(),
        after.heading,
        delta.x(),
        delta.y(),
        delta.heading
    );
}
