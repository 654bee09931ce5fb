//! Simulated autonomous snippet: back up to the top wall, square the pose
//! against it with the back pair, then pin X with the left sensor.

use std::cell::RefCell;
use std::rc::Rc;

use distance_reset::{
    ApproachSettings, BackSensorPair, BrakeMode, Delay, DistanceReset, DistanceSensor,
    DriveDirection, Drivetrain, MM_PER_INCH, Pose, ResetSettings, drive_until_distance,
};
use log::{Level, LevelFilter, Log, Metadata, Record};

const FIELD_HALF: f64 = 72.0;
const BACK_OFFSET: f64 = 2.0;
const BACK_SPACING: f64 = 6.0;
const LEFT_OFFSET: f64 = 5.5;

/// Inches per second at full command
const TOP_SPEED: f64 = 60.0;

struct StdoutLogger;

impl Log for StdoutLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= Level::Debug
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            println!("[{}] {}", record.level(), record.args());
        }
    }

    fn flush(&self) {}
}

static LOGGER: StdoutLogger = StdoutLogger;

/// Ground truth the robot cannot see directly
struct World {
    truth: Pose,
    command: i32,
}

type Shared = Rc<RefCell<World>>;

fn direction(heading: f64) -> (f64, f64) {
    let radians = heading.to_radians();
    (radians.sin(), radians.cos())
}

/// Distance along `ray` from `origin` to whichever wall it hits first
fn cast(origin: (f64, f64), ray: (f64, f64)) -> f64 {
    let along = |position: f64, component: f64| {
        if component.abs() < 1e-12 {
            f64::INFINITY
        } else {
            (component.signum() * FIELD_HALF - position) / component
        }
    };
    along(origin.0, ray.0).min(along(origin.1, ray.1))
}

struct SimDrive(Shared);

impl Drivetrain for SimDrive {
    fn tank(&mut self, left: i32, right: i32, _immediate: bool) {
        self.0.borrow_mut().command = (left + right) / 2;
    }

    fn set_brake_mode(&mut self, mode: BrakeMode) {
        println!("[DRIVE] brake mode {:?}", mode);
    }
}

struct SimClock(Shared);

impl Delay for SimClock {
    fn delay_ms(&mut self, ms: u32) {
        let mut world = self.0.borrow_mut();
        let speed = f64::from(world.command) / 127.0 * TOP_SPEED;
        let travel = speed * f64::from(ms) / 1000.0;
        let (dx, dy) = direction(world.truth.heading);
        world.truth.position.x += dx * travel;
        world.truth.position.y += dy * travel;
    }
}

/// Sensor mounted `forward` along the facing and `lateral` to the robot's right
struct SimSensor {
    world: Shared,
    facing_offset: f64,
    forward: f64,
    lateral: f64,
}

impl DistanceSensor for SimSensor {
    fn read_mm(&mut self) -> Option<f64> {
        let world = self.world.borrow();
        let truth = world.truth;
        let ray = direction(truth.heading + self.facing_offset);
        let right = direction(truth.heading + 90.0);
        let origin = (
            truth.x() + self.forward * ray.0 + self.lateral * right.0,
            truth.y() + self.forward * ray.1 + self.lateral * right.1,
        );
        let inches = cast(origin, ray);
        (inches < 80.0).then_some(inches * MM_PER_INCH)
    }
}

fn main() {
    log::set_logger(&LOGGER).expect("logger already set");
    log::set_max_level(LevelFilter::Debug);

    let world = Rc::new(RefCell::new(World {
        truth: Pose::new(40.0, 40.0, 183.0),
        command: 0,
    }));

    // Odometry has drifted a few inches and degrees
    let odometry = Pose::new(42.5, 43.0, 180.0);
    let mut reset = DistanceReset::new(odometry, ResetSettings::default()).expect("valid settings");
    let rig = BackSensorPair::new(BACK_SPACING, BACK_OFFSET, BACK_OFFSET).expect("valid rig");

    let sensor = |facing_offset: f64, forward: f64, lateral: f64| SimSensor {
        world: Rc::clone(&world),
        facing_offset,
        forward,
        lateral,
    };
    let mut back_left = sensor(180.0, BACK_OFFSET, -BACK_SPACING / 2.0);
    let mut back_right = sensor(180.0, BACK_OFFSET, BACK_SPACING / 2.0);
    let mut left = sensor(270.0, LEFT_OFFSET, 0.0);

    let outcome = drive_until_distance(
        &mut SimDrive(Rc::clone(&world)),
        &mut back_left,
        &mut SimClock(Rc::clone(&world)),
        3.0,
        &ApproachSettings {
            speed: 50,
            direction: DriveDirection::Reverse,
            ..Default::default()
        },
    );
    println!("Approach: {:?}", outcome);

    match reset.reset_back(&mut back_left, &mut back_right, &rig) {
        Ok(correction) => println!("Back pair: {:?}", correction),
        Err(e) => println!("Back pair skipped: {}", e),
    }

    match reset.reset_left(&mut left, LEFT_OFFSET) {
        Ok(correction) => println!("Left: {:?}", correction),
        Err(e) => println!("Left skipped: {}", e),
    }

    let truth = world.borrow().truth;
    let estimate = reset.pose();
    println!(
        "Truth:    ({:.2}, {:.2}, {:.2})\nEstimate: ({:.2}, {:.2}, {:.2})",
        truth.x(),
        truth.y(),
        truth.heading,
        estimate.x(),
        estimate.y(),
        estimate.heading
    );
}
