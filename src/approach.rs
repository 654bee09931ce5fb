//! Drive towards a wall until a distance sensor trips
//!
//! Typically run just before a correction so the sensors are close to and
//! roughly square with the wall:
//!
//! ```ignore
//! let settings = ApproachSettings {
//!     direction: DriveDirection::Reverse,
//!     speed: 50,
//!     ..Default::default()
//! };
//! let outcome = drive_until_distance(&mut chassis, &mut back_left, &mut clock, 3.0, &settings);
//! if outcome.reached() {
//!     reset.reset_back(&mut back_left, &mut back_right, &rig)?;
//! }
//! ```

use log::{debug, warn};

use crate::drive::{Delay, Drivetrain};
use crate::sensor::{DistanceSensor, within_threshold};
use crate::types::{ApproachSettings, BrakeMode};

/// How an approach ended
///
/// Either way the drivetrain has been stopped with [`BrakeMode::Hold`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ApproachOutcome {
    /// A valid reading at or below the threshold was seen
    Reached {
        /// The reading that stopped the approach, in field units
        distance: f64,
        elapsed_ms: u32,
    },
    /// The timeout ran out first
    TimedOut { elapsed_ms: u32 },
}

impl ApproachOutcome {
    pub fn reached(&self) -> bool {
        matches!(self, ApproachOutcome::Reached { .. })
    }

    /// Time spent waiting between polls
    pub fn elapsed_ms(&self) -> u32 {
        match *self {
            ApproachOutcome::Reached { elapsed_ms, .. } => elapsed_ms,
            ApproachOutcome::TimedOut { elapsed_ms } => elapsed_ms,
        }
    }
}

/// Drive open-loop until `sensor` reads at or below `threshold`
///
/// Both sides are commanded at `settings.speed` in `settings.direction`, then
/// the sensor is polled every `settings.poll_interval_ms`. Missing or
/// non-positive readings never stop the approach. The loop always ends by
/// `settings.timeout_ms`; elapsed time is the sum of the delays requested.
///
/// Settings should be checked with [`ApproachSettings::validate`] at setup.
/// Invalid settings are logged here and a zero poll interval runs as 1 ms.
///
/// # Arguments
/// * `drivetrain` - Drive output to command
/// * `sensor` - Sensor facing the wall being approached
/// * `delay` - Yielding sleep between polls
/// * `threshold` - Stop distance in field units
/// * `settings` - Speed, direction, timeout and poll interval
pub fn drive_until_distance<D, S, T>(
    drivetrain: &mut D,
    sensor: &mut S,
    delay: &mut T,
    threshold: f64,
    settings: &ApproachSettings,
) -> ApproachOutcome
where
    D: Drivetrain + ?Sized,
    S: DistanceSensor + ?Sized,
    T: Delay + ?Sized,
{
    if let Err(e) = settings.validate() {
        warn!("Approach settings invalid, running anyway: {}", e);
    }

    let command = settings.command();
    let poll_interval = settings.poll_interval_ms.max(1);
    let mut elapsed_ms = 0;

    debug!(
        "Approach started: command={} threshold={:.2} timeout={}ms",
        command, threshold, settings.timeout_ms
    );
    drivetrain.tank(command, command, true);

    let outcome = loop {
        if let Some(distance) = within_threshold(sensor.read_inches(), threshold) {
            break ApproachOutcome::Reached {
                distance,
                elapsed_ms,
            };
        }

        if elapsed_ms >= settings.timeout_ms {
            break ApproachOutcome::TimedOut { elapsed_ms };
        }

        let step = poll_interval.min(settings.timeout_ms - elapsed_ms);
        delay.delay_ms(step);
        elapsed_ms += step;
    };

    // Hold so the robot does not coast past the stop point
    drivetrain.set_brake_mode(BrakeMode::Hold);
    drivetrain.tank(0, 0, true);

    debug!("Approach finished: {:?}", outcome);
    outcome
}
