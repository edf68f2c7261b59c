//! CPU scheduling policies and KPI evaluation.
//!
//! Every policy is a pure function `(processes, params) → SimulationResult`.
//! Runs share no mutable state; working state (remaining burst, first
//! dispatch) lives in a per-run arena and is discarded on return.
//!
//! # Policies
//!
//! | Policy | Preemptive | Selection key |
//! |--------|-----------|---------------|
//! | FCFS | no | (arrival, id), fixed up front |
//! | SJF | no | (burst, arrival, id) among ready |
//! | Priority | no | (priority, arrival, id) among ready |
//! | Round Robin | yes (quantum) | FIFO ready queue |
//!
//! Whenever nothing is ready the timeline gets one idle block up to the
//! next arrival.
//!
//! # Input Contract
//! Callers validate input first (see [`crate::validation`]). The core does
//! not validate; it always terminates, and an empty list yields an empty
//! result.
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.3
//! - Tanenbaum & Bos (2014), "Modern Operating Systems", Ch. 2.4

mod fcfs;
mod kpi;
mod non_preemptive;
mod round_robin;
mod timeline;

pub use fcfs::FcfsScheduler;
pub use kpi::SimulationKpi;
pub use non_preemptive::NonPreemptiveScheduler;
pub use round_robin::RoundRobinScheduler;

use serde::{Deserialize, Serialize};
use std::fmt::{self, Debug};

use crate::models::{Process, SimulationResult};

/// Default Round Robin time quantum.
pub const DEFAULT_TIME_QUANTUM: i64 = 2;

/// A single-processor scheduling policy.
pub trait CpuScheduler: Send + Sync + Debug {
    /// Policy name (e.g., "FCFS", "RR").
    fn name(&self) -> &'static str;

    /// Simulates `processes` to completion.
    ///
    /// Never mutates the input. Identical input yields an identical result.
    fn schedule(&self, processes: &[Process]) -> SimulationResult;
}

/// Scheduling policy selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Algorithm {
    /// First-Come-First-Served.
    #[default]
    #[serde(rename = "fcfs")]
    Fcfs,
    /// Shortest-Job-First, non-preemptive.
    #[serde(rename = "sjf")]
    Sjf,
    /// Round Robin.
    #[serde(rename = "rr")]
    RoundRobin,
    /// Priority, non-preemptive.
    #[serde(rename = "priority")]
    Priority,
}

impl Algorithm {
    /// All policies, in display order.
    pub const ALL: [Algorithm; 4] = [
        Algorithm::Fcfs,
        Algorithm::Sjf,
        Algorithm::RoundRobin,
        Algorithm::Priority,
    ];

    /// Short display name.
    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::Fcfs => "FCFS",
            Algorithm::Sjf => "SJF",
            Algorithm::RoundRobin => "RR",
            Algorithm::Priority => "Priority",
        }
    }

    /// Whether the policy takes a time quantum.
    pub fn uses_time_quantum(&self) -> bool {
        matches!(self, Algorithm::RoundRobin)
    }

    /// Builds the scheduler for this policy.
    ///
    /// `time_quantum` is only used by Round Robin.
    pub fn scheduler(&self, time_quantum: i64) -> Box<dyn CpuScheduler> {
        match self {
            Algorithm::Fcfs => Box::new(FcfsScheduler::new()),
            Algorithm::Sjf => Box::new(NonPreemptiveScheduler::shortest_job_first()),
            Algorithm::RoundRobin => Box::new(RoundRobinScheduler::new(time_quantum)),
            Algorithm::Priority => Box::new(NonPreemptiveScheduler::priority()),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Runs `algorithm` on `processes`.
pub fn simulate(processes: &[Process], algorithm: Algorithm, time_quantum: i64) -> SimulationResult {
    algorithm.scheduler(time_quantum).schedule(processes)
}

/// First-Come-First-Served.
pub fn fcfs(processes: &[Process]) -> SimulationResult {
    FcfsScheduler::new().schedule(processes)
}

/// Shortest-Job-First (non-preemptive).
pub fn sjf(processes: &[Process]) -> SimulationResult {
    NonPreemptiveScheduler::shortest_job_first().schedule(processes)
}

/// Priority (non-preemptive, lower value first).
pub fn priority(processes: &[Process]) -> SimulationResult {
    NonPreemptiveScheduler::priority().schedule(processes)
}

/// Round Robin with the given time quantum.
pub fn round_robin(processes: &[Process], time_quantum: i64) -> SimulationResult {
    RoundRobinScheduler::new(time_quantum).schedule(processes)
}
