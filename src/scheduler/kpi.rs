//! Simulation quality metrics (KPIs).
//!
//! Computes standard CPU scheduling indicators from a completed run.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Avg Waiting | Mean(turnaround - burst) |
//! | Avg Turnaround | Mean(completion - arrival) |
//! | Avg Response | Mean(first dispatch - arrival) |
//! | Avg Completion | Mean completion time |
//! | Makespan | End of the last timeline block |
//! | CPU Utilization | busy time / makespan |
//! | Throughput | processes / makespan |
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.2

use serde::{Deserialize, Serialize};

use crate::models::{mean, SimulationResult};

/// Simulation performance indicators.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationKpi {
    /// Mean waiting time.
    pub avg_waiting_time: f64,
    /// Mean turnaround time.
    pub avg_turnaround_time: f64,
    /// Mean response time.
    pub avg_response_time: f64,
    /// Mean completion time.
    pub avg_completion_time: f64,
    /// End of the last timeline block.
    pub makespan: i64,
    /// Time spent executing processes.
    pub busy_time: i64,
    /// Time spent in idle blocks.
    pub idle_time: i64,
    /// busy_time / makespan (0.0..1.0).
    pub cpu_utilization: f64,
    /// Completed processes per time unit.
    pub throughput: f64,
    /// Number of non-idle blocks.
    pub dispatch_count: usize,
}

impl SimulationKpi {
    /// Computes KPIs from a simulation result.
    pub fn calculate(result: &SimulationResult) -> Self {
        let processes = &result.process_results;
        let makespan = result.makespan();

        let mut busy_time = 0;
        let mut idle_time = 0;
        let mut dispatch_count = 0;
        for block in &result.gantt_chart {
            if block.is_idle() {
                idle_time += block.duration();
            } else {
                busy_time += block.duration();
                dispatch_count += 1;
            }
        }

        let (cpu_utilization, throughput) = if makespan <= 0 {
            (0.0, 0.0)
        } else {
            (
                busy_time as f64 / makespan as f64,
                processes.len() as f64 / makespan as f64,
            )
        };

        Self {
            avg_waiting_time: result.avg_waiting_time,
            avg_turnaround_time: result.avg_turnaround_time,
            avg_response_time: mean(processes.iter().map(|p| p.response_time)),
            avg_completion_time: mean(processes.iter().map(|p| p.completion_time)),
            makespan,
            busy_time,
            idle_time,
            cpu_utilization,
            throughput,
            dispatch_count,
        }
    }

    /// Whether the run meets the given quality thresholds.
    pub fn meets_thresholds(&self, max_avg_waiting: f64, min_utilization: f64) -> bool {
        self.avg_waiting_time <= max_avg_waiting && self.cpu_utilization >= min_utilization
    }
}
