//! Core types and settings for the distance reset library

use nalgebra::Vector2;

use crate::error::ConfigError;
use crate::math::HeadingExt;

/// Robot pose in field coordinates
///
/// The field is a square centred at the origin with its walls parallel to
/// the X and Y axes. Heading is in degrees, measured clockwise from +Y, and is
/// conventionally kept in `[0, 360)`.
///
/// # Example
/// ```
/// use distance_reset::{Axis, Pose};
///
/// let pose = Pose::new(12.0, -30.0, 90.0);
/// assert_eq!(pose.coordinate(Axis::X), 12.0);
/// assert_eq!(pose.with_coordinate(Axis::Y, 60.0).y(), 60.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Pose {
    /// Position of the tracking centre
    pub position: Vector2<f64>,
    /// Heading in degrees
    pub heading: f64,
}

impl Pose {
    pub fn new(x: f64, y: f64, heading: f64) -> Self {
        Self {
            position: Vector2::new(x, y),
            heading,
        }
    }

    pub fn x(&self) -> f64 {
        self.position.x
    }

    pub fn y(&self) -> f64 {
        self.position.y
    }

    /// Value of one position axis
    pub fn coordinate(&self, axis: Axis) -> f64 {
        self.position[axis.index()]
    }

    /// Copy of this pose with one position axis replaced
    pub fn with_coordinate(mut self, axis: Axis, value: f64) -> Self {
        self.position[axis.index()] = value;
        self
    }

    /// Copy of this pose with the heading replaced
    pub fn with_heading(mut self, heading: f64) -> Self {
        self.heading = heading;
        self
    }

    /// Difference `self - earlier`, with the heading change wrapped to `(-180, 180]`
    pub fn delta_from(&self, earlier: &Pose) -> Pose {
        Pose {
            position: self.position - earlier.position,
            heading: self.heading.heading_difference(earlier.heading),
        }
    }
}

/// Position axis a wall constrains
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
}

impl Axis {
    /// Index of this axis in a position vector
    pub const fn index(self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
        }
    }
}

/// Face of the robot a distance sensor looks out of
///
/// Each facing adds a fixed offset to the robot heading to give the world
/// direction the sensor points in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SensorFacing {
    /// Looking along the robot heading
    Front,
    /// Looking 90° clockwise of the heading
    Right,
    /// Looking opposite the heading
    Back,
    /// Looking 90° counter-clockwise of the heading
    Left,
}

impl SensorFacing {
    /// Offset in degrees added to the robot heading
    pub const fn heading_offset(self) -> f64 {
        match self {
            SensorFacing::Front => 0.0,
            SensorFacing::Right => 90.0,
            SensorFacing::Back => 180.0,
            SensorFacing::Left => 270.0,
        }
    }

    /// World heading the sensor points towards, wrapped to `[0, 360)`
    pub fn effective_heading(self, robot_heading: f64) -> f64 {
        (robot_heading + self.heading_offset()).wrap_degrees()
    }

    pub const fn label(self) -> &'static str {
        match self {
            SensorFacing::Front => "front",
            SensorFacing::Right => "right",
            SensorFacing::Back => "back",
            SensorFacing::Left => "left",
        }
    }
}

/// Motor stopping behaviour requested from the drivetrain
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BrakeMode {
    /// Motors spin freely
    #[default]
    Coast,
    /// Motors short their windings
    Brake,
    /// Motors actively hold their position
    Hold,
}

/// Direction of an open-loop approach
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DriveDirection {
    #[default]
    Forward,
    Reverse,
}

impl DriveDirection {
    pub const fn sign(self) -> i32 {
        match self {
            DriveDirection::Forward => 1,
            DriveDirection::Reverse => -1,
        }
    }
}

/// Field and sensor plausibility settings shared by every correction
///
/// All distances share one linear unit (inches by default, matching the
/// millimetre conversion applied at the sensor boundary).
///
/// # Example
/// ```
/// use distance_reset::ResetSettings;
///
/// let settings = ResetSettings {
///     field_half: 70.2,
///     ..Default::default()
/// };
/// assert!(settings.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResetSettings {
    /// Distance from the field centre to each wall
    pub field_half: f64,
    /// Largest reading accepted as a real return
    ///
    /// Readings at or below zero or above this bound are sensor faults.
    pub max_plausible: f64,
}

impl Default for ResetSettings {
    fn default() -> Self {
        Self {
            field_half: 72.0,
            max_plausible: 200.0,
        }
    }
}

impl ResetSettings {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.field_half > 0.0) {
            return Err(ConfigError::NonPositiveFieldHalf(self.field_half));
        }
        if !(self.max_plausible > 0.0) {
            return Err(ConfigError::NonPositivePlausibleMax(self.max_plausible));
        }
        Ok(())
    }
}

/// Open-loop approach settings
///
/// # Example
/// ```
/// use distance_reset::{ApproachSettings, DriveDirection};
///
/// let settings = ApproachSettings {
///     speed: 50,
///     direction: DriveDirection::Reverse,
///     ..Default::default()
/// };
/// assert_eq!(settings.timeout_ms, 3000);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ApproachSettings {
    /// Motor command on the `[0, 127]` scale, applied to both sides
    pub speed: i32,
    /// Whether to drive forwards or backwards
    pub direction: DriveDirection,
    /// Hard upper bound on the approach in milliseconds
    pub timeout_ms: u32,
    /// Delay between sensor polls in milliseconds
    pub poll_interval_ms: u32,
}

impl Default for ApproachSettings {
    fn default() -> Self {
        Self {
            speed: 60,
            direction: DriveDirection::Forward,
            timeout_ms: 3000,
            poll_interval_ms: 10,
        }
    }
}

impl ApproachSettings {
    /// Largest command magnitude the drivetrain accepts
    pub const MAX_SPEED: i32 = 127;

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.poll_interval_ms == 0 {
            return Err(ConfigError::ZeroPollInterval);
        }
        Ok(())
    }

    /// Signed command sent to both drive sides
    pub fn command(&self) -> i32 {
        self.speed.clamp(0, Self::MAX_SPEED) * self.direction.sign()
    }
}
