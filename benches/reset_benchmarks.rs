use criterion::{Criterion, black_box, criterion_group, criterion_main};
use distance_reset::{
    BackSensorPair, DistanceReset, DistanceSensor, Pose, ResetSettings, SensorFacing, Wall,
    correct_pair, correct_single,
};
use rand::prelude::*;
use rand_pcg::Pcg64;

// Pre-generated readings to keep RNG cost out of the measurements
struct PreGeneratedData {
    samples: Vec<(f64, f64, f64)>,
    index: usize,
}

impl PreGeneratedData {
    fn new(count: usize, seed: u64) -> Self {
        let mut rng = Pcg64::seed_from_u64(seed);
        let samples = (0..count)
            .map(|_| {
                (
                    rng.random_range(0.0..360.0),
                    rng.random_range(1.0..60.0),
                    rng.random_range(1.0..60.0),
                )
            })
            .collect();

        Self { samples, index: 0 }
    }

    fn next(&mut self) -> (f64, f64, f64) {
        let sample = self.samples[self.index];
        self.index = (self.index + 1) % self.samples.len();
        sample
    }
}

struct Steady(f64);

impl DistanceSensor for Steady {
    fn read_mm(&mut self) -> Option<f64> {
        Some(self.0)
    }
}

/// Benchmark the shared wall classifier
fn bench_classify(c: &mut Criterion) {
    let mut data = PreGeneratedData::new(1024, 1);

    c.bench_function("wall_classify", |b| {
        b.iter(|| {
            let (heading, _, _) = data.next();
            black_box(Wall::classify(black_box(heading)))
        })
    });
}

/// Benchmark the single-sensor corrector
fn bench_correct_single(c: &mut Criterion) {
    let settings = ResetSettings::default();
    let mut data = PreGeneratedData::new(1024, 2);

    c.bench_function("correct_single", |b| {
        b.iter(|| {
            let (heading, reading, _) = data.next();
            black_box(correct_single(
                SensorFacing::Right,
                black_box(Some(reading)),
                black_box(1.5),
                black_box(heading),
                &settings,
            ))
        })
    });
}

/// Benchmark the back-pair corrector
fn bench_correct_pair(c: &mut Criterion) {
    let settings = ResetSettings::default();
    let rig = BackSensorPair::new(6.0, 2.0, 2.0).unwrap();
    let mut data = PreGeneratedData::new(1024, 3);

    c.bench_function("correct_pair", |b| {
        b.iter(|| {
            let (heading, left, right) = data.next();
            black_box(correct_pair(
                black_box(Some(left)),
                black_box(Some(right)),
                &rig,
                black_box(heading),
                &settings,
            ))
        })
    });
}

/// Benchmark a full back reset through the pose source
fn bench_reset_back(c: &mut Criterion) {
    let rig = BackSensorPair::new(6.0, 2.0, 2.0).unwrap();
    let mut reset =
        DistanceReset::new(Pose::new(0.0, 50.0, 182.0), ResetSettings::default()).unwrap();
    let mut left = Steady(254.0);
    let mut right = Steady(262.0);

    c.bench_function("reset_back", |b| {
        b.iter(|| black_box(reset.reset_back(&mut left, &mut right, &rig)))
    });
}

criterion_group!(
    benches,
    bench_classify,
    bench_correct_single,
    bench_correct_pair,
    bench_reset_back
);

criterion_main!(benches);
