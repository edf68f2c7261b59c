//! Round Robin scheduler.
//!
//! # Algorithm
//!
//! State: a FIFO ready queue and a pending pool sorted by
//! `(arrival_time, id)`.
//!
//! 1. At t=0, admit every process with `arrival_time <= 0`.
//! 2. Ready queue empty → idle until the earliest pending arrival, then
//!    admit everything that has arrived.
//! 3. Otherwise dequeue the head, record its first dispatch, and run it
//!    for `min(quantum, remaining)`.
//! 4. Admit processes that arrived during the slice, `(start, end]`.
//! 5. Only then re-queue the dispatched process if it has work left;
//!    otherwise finalize its result.
//!
//! Step 4 before step 5 fixes queue positions on ties: a process arriving
//! exactly when a slice ends is queued ahead of the preempted process.
//!
//! Results are reported by ascending ID.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.3.3

use std::collections::VecDeque;

use tracing::{info, trace};

use super::timeline::TimelineBuilder;
use super::{CpuScheduler, DEFAULT_TIME_QUANTUM};
use crate::models::{Process, ProcessResult, SimulationResult};

/// Round Robin scheduler.
///
/// # Example
///
/// ```
/// use u_cpusched::models::Process;
/// use u_cpusched::scheduler::{CpuScheduler, RoundRobinScheduler};
///
/// let processes = vec![Process::new(1, 0, 3), Process::new(2, 0, 2)];
/// let result = RoundRobinScheduler::new(2).schedule(&processes);
/// let order: Vec<_> = result.gantt_chart.iter().map(|b| b.process_id()).collect();
/// assert_eq!(order, vec![Some(1), Some(2), Some(1)]);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct RoundRobinScheduler {
    time_quantum: i64,
}

/// Per-run working state of one process.
#[derive(Debug, Clone, Copy)]
struct RunState {
    remaining: i64,
    first_dispatch: Option<i64>,
}

impl RoundRobinScheduler {
    /// Creates a scheduler with the given time quantum.
    ///
    /// Non-positive quanta are clamped to 1 so that every slice makes
    /// progress; reject them upstream with
    /// [`crate::validation::validate_time_quantum`].
    pub fn new(time_quantum: i64) -> Self {
        Self {
            time_quantum: time_quantum.max(1),
        }
    }

    /// Effective time quantum.
    pub fn time_quantum(&self) -> i64 {
        self.time_quantum
    }
}

impl Default for RoundRobinScheduler {
    fn default() -> Self {
        Self::new(DEFAULT_TIME_QUANTUM)
    }
}

impl CpuScheduler for RoundRobinScheduler {
    fn name(&self) -> &'static str {
        "RR"
    }

    fn schedule(&self, processes: &[Process]) -> SimulationResult {
        let mut arena: Vec<RunState> = processes
            .iter()
            .map(|p| RunState {
                remaining: p.burst_time,
                first_dispatch: None,
            })
            .collect();

        let mut order: Vec<usize> = (0..processes.len()).collect();
        order.sort_by_key(|&i| processes[i].arrival_key());
        let mut pending: VecDeque<usize> = order.into();
        let mut ready: VecDeque<usize> = VecDeque::with_capacity(processes.len());

        let mut timeline = TimelineBuilder::new();
        let mut results = Vec::with_capacity(processes.len());

        admit_arrivals(processes, &mut pending, &mut ready, timeline.now());

        while results.len() < processes.len() {
            let Some(idx) = ready.pop_front() else {
                let Some(&next) = pending.front() else {
                    break;
                };
                timeline.idle_until(processes[next].arrival_time);
                admit_arrivals(processes, &mut pending, &mut ready, timeline.now());
                continue;
            };

            let process = &processes[idx];
            let state = &mut arena[idx];
            let slice = self.time_quantum.min(state.remaining);
            let start = timeline.run(process.id, slice);
            state.first_dispatch.get_or_insert(start);
            state.remaining -= slice;

            // Arrivals during the slice queue ahead of the preempted process.
            admit_arrivals(processes, &mut pending, &mut ready, timeline.now());

            if state.remaining > 0 {
                ready.push_back(idx);
            } else {
                let first = state.first_dispatch.unwrap_or(start);
                results.push(ProcessResult::new(process, first, timeline.now()));
            }
        }

        results.sort_by_key(|r| r.id);

        let result = SimulationResult::new(timeline.into_blocks(), results);
        info!(
            algorithm = self.name(),
            time_quantum = self.time_quantum,
            process_count = processes.len(),
            makespan = result.makespan(),
            avg_waiting = result.avg_waiting_time,
            "simulation complete"
        );
        result
    }
}

/// Moves every pending process that has arrived by `now` to the back of
/// the ready queue, in `(arrival_time, id)` order.
fn admit_arrivals(
    processes: &[Process],
    pending: &mut VecDeque<usize>,
    ready: &mut VecDeque<usize>,
    now: i64,
) {
    while let Some(&idx) = pending.front() {
        if !processes[idx].has_arrived(now) {
            break;
        }
        trace!(process = processes[idx].id, now, "admit");
        pending.pop_front();
        ready.push_back(idx);
    }
}
