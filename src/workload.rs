//! Random workload generation.
//!
//! Produces valid process lists for demos, benchmarks and property checks.
//! Generation is reproducible from a seed.

use std::ops::RangeInclusive;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::models::Process;

/// Generator of random, valid process lists.
///
/// IDs are `1..=count`; arrival, burst and priority are drawn uniformly
/// from their ranges. Ranges are clamped to valid values (arrival ≥ 0,
/// burst ≥ 1, priority ≥ 0).
///
/// # Example
/// ```
/// use u_cpusched::workload::WorkloadGenerator;
///
/// let processes = WorkloadGenerator::new(5).with_burst_range(1, 4).generate(42);
/// assert_eq!(processes.len(), 5);
/// assert!(processes.iter().all(|p| (1..=4).contains(&p.burst_time)));
/// ```
#[derive(Debug, Clone)]
pub struct WorkloadGenerator {
    count: u32,
    arrival: RangeInclusive<i64>,
    burst: RangeInclusive<i64>,
    priority: RangeInclusive<i64>,
}

impl WorkloadGenerator {
    /// Creates a generator for `count` processes with default ranges:
    /// arrival 0..=10, burst 1..=10, priority 0..=5.
    pub fn new(count: u32) -> Self {
        Self {
            count,
            arrival: 0..=10,
            burst: 1..=10,
            priority: 0..=5,
        }
    }

    /// Sets the arrival time range.
    pub fn with_arrival_range(mut self, min: i64, max: i64) -> Self {
        self.arrival = clamp_range(min, max, 0);
        self
    }

    /// Sets the burst time range.
    pub fn with_burst_range(mut self, min: i64, max: i64) -> Self {
        self.burst = clamp_range(min, max, 1);
        self
    }

    /// Sets the priority range.
    pub fn with_priority_range(mut self, min: i64, max: i64) -> Self {
        self.priority = clamp_range(min, max, 0);
        self
    }

    /// Generates a process list from `seed`.
    pub fn generate(&self, seed: u64) -> Vec<Process> {
        let mut rng = SmallRng::seed_from_u64(seed);
        self.generate_with(&mut rng)
    }

    /// Generates a process list from a caller-supplied RNG.
    pub fn generate_with<R: Rng>(&self, rng: &mut R) -> Vec<Process> {
        (1..=self.count)
            .map(|id| {
                Process::new(
                    id,
                    rng.random_range(self.arrival.clone()),
                    rng.random_range(self.burst.clone()),
                )
                .with_priority(rng.random_range(self.priority.clone()))
            })
            .collect()
    }
}

fn clamp_range(min: i64, max: i64, floor: i64) -> RangeInclusive<i64> {
    let lo = min.max(floor);
    lo..=max.max(lo)
}
