//! Drivetrain and timing collaborators used by the approach controller

use crate::types::BrakeMode;

/// Differential drive output
pub trait Drivetrain {
    /// Command both sides on the `[-127, 127]` scale
    ///
    /// `immediate` asks the drivetrain to bypass any slew limiting.
    fn tank(&mut self, left: i32, right: i32, immediate: bool);

    /// Behaviour of the motors once commanded to zero
    fn set_brake_mode(&mut self, mode: BrakeMode);
}

impl<D: Drivetrain + ?Sized> Drivetrain for &mut D {
    fn tank(&mut self, left: i32, right: i32, immediate: bool) {
        (**self).tank(left, right, immediate);
    }

    fn set_brake_mode(&mut self, mode: BrakeMode) {
        (**self).set_brake_mode(mode);
    }
}

/// Yielding sleep
///
/// On a robot this hands control to the scheduler so other tasks (odometry,
/// telemetry) keep running while a caller waits.
pub trait Delay {
    fn delay_ms(&mut self, ms: u32);
}

impl<T: Delay + ?Sized> Delay for &mut T {
    fn delay_ms(&mut self, ms: u32) {
        (**self).delay_ms(ms);
    }
}
