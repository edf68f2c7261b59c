//! Simulation outcome model.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Completion | Time the last unit of work finished |
//! | Turnaround | completion - arrival |
//! | Waiting | turnaround - burst |
//! | Response | first dispatch - arrival |
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.2:
//! Scheduling Criteria

use serde::{Deserialize, Serialize};

use super::{Process, ProcessId, ScheduleBlock};

/// Per-process outcome of a simulation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessResult {
    /// Process identifier (copied from input).
    pub id: ProcessId,
    /// Arrival time (copied from input).
    pub arrival_time: i64,
    /// Burst time (copied from input).
    pub burst_time: i64,
    /// Priority (copied from input).
    pub priority: i64,
    /// Time the last unit of work finished.
    pub completion_time: i64,
    /// completion - arrival.
    pub turnaround_time: i64,
    /// turnaround - burst.
    pub waiting_time: i64,
    /// first dispatch - arrival.
    pub response_time: i64,
}

impl ProcessResult {
    /// Derives the outcome of `process` from its first dispatch time and
    /// completion time.
    pub fn new(process: &Process, first_dispatch: i64, completion_time: i64) -> Self {
        let turnaround_time = completion_time - process.arrival_time;
        Self {
            id: process.id,
            arrival_time: process.arrival_time,
            burst_time: process.burst_time,
            priority: process.priority,
            completion_time,
            turnaround_time,
            waiting_time: turnaround_time - process.burst_time,
            response_time: first_dispatch - process.arrival_time,
        }
    }
}

/// Complete output of one scheduler invocation.
///
/// Constructed fresh per run and owned by the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationResult {
    /// Execution timeline.
    pub gantt_chart: Vec<ScheduleBlock>,
    /// One entry per input process.
    pub process_results: Vec<ProcessResult>,
    /// Unweighted mean waiting time.
    pub avg_waiting_time: f64,
    /// Unweighted mean turnaround time.
    pub avg_turnaround_time: f64,
}

impl SimulationResult {
    /// Assembles a result and computes the averages.
    pub fn new(gantt_chart: Vec<ScheduleBlock>, process_results: Vec<ProcessResult>) -> Self {
        let avg_waiting_time = mean(process_results.iter().map(|r| r.waiting_time));
        let avg_turnaround_time = mean(process_results.iter().map(|r| r.turnaround_time));
        Self {
            gantt_chart,
            process_results,
            avg_waiting_time,
            avg_turnaround_time,
        }
    }

    /// An empty result (no processes).
    pub fn empty() -> Self {
        Self::new(Vec::new(), Vec::new())
    }

    /// Whether the run scheduled nothing.
    pub fn is_empty(&self) -> bool {
        self.process_results.is_empty()
    }

    /// End of the last timeline block.
    pub fn makespan(&self) -> i64 {
        self.gantt_chart.last().map(|b| b.end_time).unwrap_or(0)
    }

    /// Finds the result for a process.
    pub fn result_for(&self, id: ProcessId) -> Option<&ProcessResult> {
        self.process_results.iter().find(|r| r.id == id)
    }

    /// Returns all dispatches of a process, in timeline order.
    pub fn blocks_for(&self, id: ProcessId) -> Vec<&ScheduleBlock> {
        self.gantt_chart
            .iter()
            .filter(|b| b.process_id() == Some(id))
            .collect()
    }

    /// Total CPU time granted to a process.
    pub fn executed_time(&self, id: ProcessId) -> i64 {
        self.blocks_for(id).iter().map(|b| b.duration()).sum()
    }
}

/// Unweighted arithmetic mean; 0.0 for no values.
pub(crate) fn mean(values: impl Iterator<Item = i64>) -> f64 {
    let (sum, count) = values.fold((0i128, 0usize), |(s, n), v| (s + i128::from(v), n + 1));
    if count == 0 {
        0.0
    } else {
        sum as f64 / count as f64
    }
}
