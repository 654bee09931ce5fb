//! Fake collaborators shared by the integration tests

#![allow(dead_code)]

use std::collections::VecDeque;

use distance_reset::{BrakeMode, Delay, DistanceSensor, Drivetrain, MM_PER_INCH, Pose, PoseSource};

/// Sensor that plays back a script of readings given in inches
///
/// Once the script runs out the last reading repeats.
pub struct ScriptedSensor {
    script: VecDeque<Option<f64>>,
    last: Option<f64>,
    pub reads: usize,
}

impl ScriptedSensor {
    pub fn new(readings: &[Option<f64>]) -> Self {
        Self {
            script: readings.iter().copied().collect(),
            last: None,
            reads: 0,
        }
    }

    pub fn constant(inches: f64) -> Self {
        Self::new(&[Some(inches)])
    }

    pub fn silent() -> Self {
        Self::new(&[None])
    }
}

impl DistanceSensor for ScriptedSensor {
    fn read_mm(&mut self) -> Option<f64> {
        self.reads += 1;
        if let Some(next) = self.script.pop_front() {
            self.last = next;
        }
        self.last.map(|inches| inches * MM_PER_INCH)
    }
}

/// Odometry that records how often the pose is overwritten
#[derive(Debug, Default)]
pub struct FakeOdometry {
    pub pose: Pose,
    pub writes: usize,
}

impl FakeOdometry {
    pub fn at(x: f64, y: f64, heading: f64) -> Self {
        Self {
            pose: Pose::new(x, y, heading),
            writes: 0,
        }
    }
}

impl PoseSource for FakeOdometry {
    fn pose(&self) -> Pose {
        self.pose
    }

    fn set_pose(&mut self, pose: Pose) {
        self.pose = pose;
        self.writes += 1;
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DriveCall {
    Tank(i32, i32, bool),
    Brake(BrakeMode),
}

#[derive(Debug, Default)]
pub struct FakeDrivetrain {
    pub calls: Vec<DriveCall>,
}

impl Drivetrain for FakeDrivetrain {
    fn tank(&mut self, left: i32, right: i32, immediate: bool) {
        self.calls.push(DriveCall::Tank(left, right, immediate));
    }

    fn set_brake_mode(&mut self, mode: BrakeMode) {
        self.calls.push(DriveCall::Brake(mode));
    }
}

/// Clock that advances only when slept on
#[derive(Debug, Default)]
pub struct FakeClock {
    pub now_ms: u32,
    pub sleeps: Vec<u32>,
}

impl Delay for FakeClock {
    fn delay_ms(&mut self, ms: u32) {
        self.now_ms += ms;
        self.sleeps.push(ms);
    }
}
