//! Non-preemptive rule-driven scheduler (SJF, Priority).
//!
//! # Algorithm
//!
//! At each decision point:
//! 1. Collect processes that have arrived and are not completed.
//! 2. If none, idle until the earliest remaining arrival.
//! 3. Otherwise select the best by the rule engine and run it to
//!    completion. A later, better arrival never interrupts it.
//!
//! # Complexity
//! O(n²): one linear scan of the arena per completed process.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.3.2, 5.3.4

use tracing::info;

use super::timeline::TimelineBuilder;
use super::CpuScheduler;
use crate::dispatching::{rules, RuleEngine};
use crate::models::{Process, ProcessResult, SimulationResult};

/// Non-preemptive scheduler parameterized by a rule engine.
///
/// # Example
///
/// ```
/// use u_cpusched::models::{Process, ScheduleBlock};
/// use u_cpusched::scheduler::{CpuScheduler, NonPreemptiveScheduler};
///
/// let processes = vec![
///     Process::new(1, 0, 8),
///     Process::new(2, 1, 4),
///     Process::new(3, 2, 2),
/// ];
/// let result = NonPreemptiveScheduler::shortest_job_first().schedule(&processes);
/// assert_eq!(
///     result.gantt_chart,
///     vec![
///         ScheduleBlock::process(1, 0, 8),
///         ScheduleBlock::process(3, 8, 10),
///         ScheduleBlock::process(2, 10, 14),
///     ]
/// );
/// ```
#[derive(Debug, Clone)]
pub struct NonPreemptiveScheduler {
    name: &'static str,
    rule_engine: RuleEngine,
}

impl NonPreemptiveScheduler {
    /// Creates a scheduler with a custom rule engine.
    ///
    /// The engine's final tie-breaker makes every selection deterministic.
    pub fn new(name: &'static str, rule_engine: RuleEngine) -> Self {
        Self { name, rule_engine }
    }

    /// Shortest-Job-First: `(burst_time, arrival_time, id)`.
    pub fn shortest_job_first() -> Self {
        Self::new("SJF", RuleEngine::new().with_rule(rules::Sjf))
    }

    /// Priority: `(priority, arrival_time, id)`, lower value first.
    pub fn priority() -> Self {
        Self::new("Priority", RuleEngine::new().with_rule(rules::Priority))
    }

    /// The rule engine used for selection.
    pub fn rule_engine(&self) -> &RuleEngine {
        &self.rule_engine
    }
}

impl CpuScheduler for NonPreemptiveScheduler {
    fn name(&self) -> &'static str {
        self.name
    }

    fn schedule(&self, processes: &[Process]) -> SimulationResult {
        let mut completed = vec![false; processes.len()];
        let mut remaining = processes.len();
        let mut timeline = TimelineBuilder::new();
        let mut results = Vec::with_capacity(processes.len());

        while remaining > 0 {
            let now = timeline.now();
            let ready = (0..processes.len())
                .filter(|&i| !completed[i] && processes[i].has_arrived(now));
            let chosen = self.rule_engine.select_best(processes, ready);

            let Some(idx) = chosen else {
                let next_arrival = (0..processes.len())
                    .filter(|&i| !completed[i])
                    .map(|i| processes[i].arrival_time)
                    .min();
                match next_arrival {
                    Some(t) => timeline.idle_until(t),
                    None => break,
                }
                continue;
            };

            let process = &processes[idx];
            let start = timeline.run(process.id, process.burst_time);
            results.push(ProcessResult::new(process, start, timeline.now()));
            completed[idx] = true;
            remaining -= 1;
        }

        let result = SimulationResult::new(timeline.into_blocks(), results);
        info!(
            algorithm = self.name,
            process_count = processes.len(),
            makespan = result.makespan(),
            avg_waiting = result.avg_waiting_time,
            "simulation complete"
        );
        result
    }
}
