#![no_std]

//! Distance Reset - wall-referenced pose correction for field robots
//!
//! Odometry drifts. On a square field with known walls, a distance sensor
//! pointed at a wall pins one coordinate of the robot exactly, and two sensors
//! side by side on the same face also pin the heading. This library turns
//! those readings into a corrected pose and writes it back to the odometry.
//!
//! # Features
//!
//! - Single-sensor axis correction from any face, with cosine correction for
//!   the angle of incidence taken from the tracked heading
//! - Back-pair correction of one axis plus heading from the reading difference
//! - One shared wall classifier with deterministic seam handling
//! - Open-loop drive-until-distance approach with an explicit outcome
//! - Faulty readings are rejected without touching the pose
//! - `#![no_std]` compatible; hardware and odometry are traits
//!
//! # Quick Start
//!
//! ```rust
//! use distance_reset::{BackSensorPair, DistanceReset, DistanceSensor, Pose, ResetSettings};
//!
//! struct Sensor(Option<f64>);
//!
//! impl DistanceSensor for Sensor {
//!     fn read_mm(&mut self) -> Option<f64> {
//!         self.0
//!     }
//! }
//!
//! // Robot facing the bottom wall, so its back is towards the top wall
//! let mut reset = DistanceReset::new(Pose::new(0.0, 55.0, 178.0), ResetSettings::default())?;
//! let rig = BackSensorPair::new(6.0, 2.0, 2.0)?;
//!
//! let mut back_left = Sensor(Some(254.0));
//! let mut back_right = Sensor(Some(254.0));
//! let correction = reset.reset_back(&mut back_left, &mut back_right, &rig)?;
//!
//! assert_eq!(correction.heading, 180.0);
//! assert!((reset.pose().y() - 60.0).abs() < 1e-9);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! Diagnostics go through the [`log`](https://docs.rs/log) facade; install a
//! logger in the host to see rejected readings and applied corrections.

pub mod approach;
pub mod drive;
mod error;
mod math;
pub mod odometry;
pub mod reset;
pub mod sensor;
mod types;
pub mod wall;

// Re-export all public types and functions
pub use approach::{ApproachOutcome, drive_until_distance};
pub use drive::{Delay, Drivetrain};
pub use error::{ConfigError, ResetError, Result};
pub use math::{DEG_TO_RAD, HeadingExt, MM_PER_INCH, RAD_TO_DEG, mm_to_inches};
pub use odometry::PoseSource;
pub use reset::{
    ALIGNMENT_WARNING_DEG, AxisCorrection, BackSensorPair, DistanceReset, PoseCorrection,
    correct_pair, correct_single,
};
pub use sensor::DistanceSensor;
pub use types::*;
pub use wall::{Wall, WallContact};
