//! First-Come-First-Served scheduler.
//!
//! # Algorithm
//!
//! 1. Sort processes by `(arrival_time, id)` once, up front.
//! 2. Run each to completion in that order.
//! 3. Idle whenever the next process arrives after the CPU becomes free.
//!
//! # Complexity
//! O(n log n) for the sort, O(n) for the run.

use tracing::info;

use super::timeline::TimelineBuilder;
use super::CpuScheduler;
use crate::dispatching::{rules, RuleEngine};
use crate::models::{Process, ProcessResult, SimulationResult};

/// First-Come-First-Served scheduler.
///
/// # Example
///
/// ```
/// use u_cpusched::models::{Process, ScheduleBlock};
/// use u_cpusched::scheduler::{CpuScheduler, FcfsScheduler};
///
/// let processes = vec![Process::new(1, 0, 5), Process::new(2, 1, 3)];
/// let result = FcfsScheduler::new().schedule(&processes);
/// assert_eq!(
///     result.gantt_chart,
///     vec![ScheduleBlock::process(1, 0, 5), ScheduleBlock::process(2, 5, 8)]
/// );
/// assert!((result.avg_waiting_time - 2.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone)]
pub struct FcfsScheduler {
    rule_engine: RuleEngine,
}

impl FcfsScheduler {
    /// Creates a new scheduler.
    pub fn new() -> Self {
        Self {
            rule_engine: RuleEngine::new().with_rule(rules::Fifo),
        }
    }
}

impl Default for FcfsScheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl CpuScheduler for FcfsScheduler {
    fn name(&self) -> &'static str {
        "FCFS"
    }

    fn schedule(&self, processes: &[Process]) -> SimulationResult {
        let order = self.rule_engine.sort_indices(processes);
        let mut timeline = TimelineBuilder::new();
        let mut results = Vec::with_capacity(processes.len());

        for idx in order {
            let process = &processes[idx];
            timeline.idle_until(process.arrival_time);
            let start = timeline.run(process.id, process.burst_time);
            results.push(ProcessResult::new(process, start, timeline.now()));
        }

        let result = SimulationResult::new(timeline.into_blocks(), results);
        info!(
            algorithm = self.name(),
            process_count = processes.len(),
            makespan = result.makespan(),
            avg_waiting = result.avg_waiting_time,
            "simulation complete"
        );
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ScheduleBlock;

    #[test]
    fn test_fcfs_two_processes() {
        let ps = vec![Process::new(1, 0, 5), Process::new(2, 1, 3)];
        let r = FcfsScheduler::new().schedule(&ps);

        assert_eq!(
            r.gantt_chart,
            vec![ScheduleBlock::process(1, 0, 5), ScheduleBlock::process(2, 5, 8)]
        );
        let p2 = r.result_for(2).unwrap();
        assert_eq!(p2.completion_time, 8);
        assert_eq!(p2.turnaround_time, 7);
        assert_eq!(p2.waiting_time, 4);
        assert_eq!(p2.response_time, 4);
        assert!((r.avg_waiting_time - 2.0).abs() < 1e-10);
        assert!((r.avg_turnaround_time - 6.0).abs() < 1e-10);
    }

    #[test]
    fn test_fcfs_ignores_input_order() {
        let ps = vec![Process::new(2, 3, 1), Process::new(1, 0, 2)];
        let r = FcfsScheduler::new().schedule(&ps);
        assert_eq!(r.gantt_chart[0], ScheduleBlock::process(1, 0, 2));
        // Results follow dispatch order
        let ids: Vec<u32> = r.process_results.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn test_fcfs_idle_gap() {
        let ps = vec![Process::new(1, 2, 3), Process::new(2, 10, 1)];
        let r = FcfsScheduler::new().schedule(&ps);
        assert_eq!(
            r.gantt_chart,
            vec![
                ScheduleBlock::idle(0, 2),
                ScheduleBlock::process(1, 2, 5),
                ScheduleBlock::idle(5, 10),
                ScheduleBlock::process(2, 10, 11),
            ]
        );
        assert_eq!(r.result_for(2).unwrap().waiting_time, 0);
    }

    #[test]
    fn test_fcfs_simultaneous_arrival_by_id() {
        let ps = vec![
            Process::new(3, 0, 1),
            Process::new(1, 0, 1),
            Process::new(2, 0, 1),
        ];
        let r = FcfsScheduler::new().schedule(&ps);
        let order: Vec<Option<u32>> = r.gantt_chart.iter().map(|b| b.process_id()).collect();
        assert_eq!(order, vec![Some(1), Some(2), Some(3)]);
    }

    #[test]
    fn test_fcfs_ignores_burst_and_priority() {
        let ps = vec![
            Process::new(1, 0, 10).with_priority(9),
            Process::new(2, 1, 1).with_priority(0),
        ];
        let r = FcfsScheduler::new().schedule(&ps);
        assert_eq!(r.gantt_chart[0].process_id(), Some(1));
    }
}
