//! Side-by-side comparison of all scheduling policies.
//!
//! Runs FCFS, SJF, Round Robin and Priority on the same input and
//! summarizes each run by its average waiting, turnaround and response
//! times. Runs are independent; each entry keeps its full result so that
//! callers never need to re-run a policy.

use serde::Serialize;
use tracing::info;

use crate::models::{Process, SimulationResult};
use crate::scheduler::{simulate, Algorithm, SimulationKpi};

/// One policy's outcome in a comparison.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonEntry {
    /// Policy that produced this entry.
    pub algorithm: Algorithm,
    /// Mean waiting time.
    pub avg_waiting_time: f64,
    /// Mean turnaround time.
    pub avg_turnaround_time: f64,
    /// Mean response time.
    pub avg_response_time: f64,
    /// Full simulation output.
    #[serde(skip)]
    pub result: SimulationResult,
}

impl ComparisonEntry {
    fn from_result(algorithm: Algorithm, result: SimulationResult) -> Self {
        let kpi = SimulationKpi::calculate(&result);
        Self {
            algorithm,
            avg_waiting_time: kpi.avg_waiting_time,
            avg_turnaround_time: kpi.avg_turnaround_time,
            avg_response_time: kpi.avg_response_time,
            result,
        }
    }
}

/// Results of every policy on one process list.
///
/// # Example
///
/// ```
/// use u_cpusched::comparison::Comparison;
/// use u_cpusched::models::Process;
/// use u_cpusched::scheduler::Algorithm;
///
/// let processes = vec![Process::new(1, 0, 8), Process::new(2, 0, 1)];
/// let cmp = Comparison::run(&processes, 2);
/// assert_eq!(cmp.ranked_by_waiting()[0].algorithm, Algorithm::Sjf);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Comparison {
    entries: Vec<ComparisonEntry>,
}

impl Comparison {
    /// Runs every policy in [`Algorithm::ALL`] order.
    ///
    /// `time_quantum` applies to Round Robin only.
    pub fn run(processes: &[Process], time_quantum: i64) -> Self {
        let entries: Vec<ComparisonEntry> = Algorithm::ALL
            .iter()
            .map(|&algo| {
                ComparisonEntry::from_result(algo, simulate(processes, algo, time_quantum))
            })
            .collect();

        let cmp = Self { entries };
        info!(
            process_count = processes.len(),
            time_quantum,
            best_waiting = cmp.best_waiting(),
            "comparison complete"
        );
        cmp
    }

    /// Entries in [`Algorithm::ALL`] order.
    pub fn entries(&self) -> &[ComparisonEntry] {
        &self.entries
    }

    /// Entry for a policy.
    pub fn get(&self, algorithm: Algorithm) -> Option<&ComparisonEntry> {
        self.entries.iter().find(|e| e.algorithm == algorithm)
    }

    /// Entries sorted by ascending average waiting time.
    ///
    /// Ties keep [`Algorithm::ALL`] order.
    pub fn ranked_by_waiting(&self) -> Vec<&ComparisonEntry> {
        let mut ranked: Vec<&ComparisonEntry> = self.entries.iter().collect();
        ranked.sort_by(|a, b| a.avg_waiting_time.total_cmp(&b.avg_waiting_time));
        ranked
    }

    /// Lowest average waiting time across policies.
    pub fn best_waiting(&self) -> f64 {
        self.entries
            .iter()
            .map(|e| e.avg_waiting_time)
            .fold(f64::INFINITY, f64::min)
    }

    /// Lowest average turnaround time across policies.
    pub fn best_turnaround(&self) -> f64 {
        self.entries
            .iter()
            .map(|e| e.avg_turnaround_time)
            .fold(f64::INFINITY, f64::min)
    }

    /// Whether `algorithm` achieves the lowest average waiting time.
    pub fn is_best_waiting(&self, algorithm: Algorithm) -> bool {
        self.get(algorithm)
            .is_some_and(|e| e.avg_waiting_time == self.best_waiting())
    }

    /// Largest average (waiting or turnaround) across policies.
    ///
    /// Useful as a common scale for bar charts; never below 0.01.
    pub fn scale_max(&self) -> f64 {
        self.entries
            .iter()
            .flat_map(|e| [e.avg_waiting_time, e.avg_turnaround_time])
            .fold(0.01, f64::max)
    }
}
