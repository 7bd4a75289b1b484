extern crate rand;
extern crate rand_distr;

use rand::SeedableRng;
use rand_distr::{Normal,Distribution};

use crate::Float;

pub const STEP_COUNT: usize = 51;
pub const DECAY_RATE: Float = 0.96;
pub const NOISE_STD_DEV: Float = 2.5;
pub const NOISE_SEED: u64 = 42;
pub const RETENTION_FULL: Float = 100.0;
pub const HALLUCINATION_THRESHOLD: Float = 60.0;
pub const CRASH_STEPS: [usize; 4] = [10,22,35,42];

#[derive(Debug,Clone)]
pub struct DriftParameters {
    pub step_count: usize,
    pub decay_rate: Float,
    pub noise_std_dev: Float,
    pub noise_seed: u64
}

impl DriftParameters {
    pub fn benchmark_default() -> DriftParameters {
        DriftParameters {
            step_count: STEP_COUNT,
            decay_rate: DECAY_RATE,
            noise_std_dev: NOISE_STD_DEV,
            noise_seed: NOISE_SEED
        }
    }
}

pub fn generate_steps(step_count: usize) -> Vec<usize> {
    (0..step_count).collect::<Vec<usize>>()
}

pub fn generate_stochastic_retention(parameters: &DriftParameters) -> Vec<Float> {
    let mut sampling_rng = rand::rngs::SmallRng::seed_from_u64(parameters.noise_seed);
    let normal_distribution = Normal::new(0.0,parameters.noise_std_dev).unwrap();

    let mut retention = Vec::<Float>::with_capacity(parameters.step_count);
    for step in 0..parameters.step_count {
        let noise = normal_distribution.sample(&mut sampling_rng);
        let decayed = RETENTION_FULL*parameters.decay_rate.powi(step as i32) + noise;
        retention.push(clamp_retention(decayed));
    }

    retention
}

pub fn generate_deterministic_retention(step_count: usize) -> Vec<Float> {
    vec!(RETENTION_FULL; step_count)
}

fn clamp_retention(value: Float) -> Float {
    match value {
        v if v < 0.0 => 0.0,
        v if v > RETENTION_FULL => RETENTION_FULL,
        v => v
    }
}
