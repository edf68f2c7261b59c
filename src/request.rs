//! Simulation request: the validated entry point into the schedulers.
//!
//! A request bundles the process list, the policy and its parameters. It
//! deserializes from the same camelCase shape the models use:
//!
//! ```json
//! {
//!   "processes": [{ "id": 1, "arrivalTime": 0, "burstTime": 5, "priority": 2 }],
//!   "algorithm": "rr",
//!   "timeQuantum": 2
//! }
//! ```
//!
//! `algorithm` defaults to `"fcfs"` and `timeQuantum` to 2.

use serde::{Deserialize, Serialize};

use crate::models::{Process, SimulationResult};
use crate::scheduler::{simulate, Algorithm, DEFAULT_TIME_QUANTUM};
use crate::validation::{validate_input, ValidationError, ValidationResult};

/// Input container for a simulation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationRequest {
    /// Processes to schedule.
    pub processes: Vec<Process>,
    /// Scheduling policy.
    #[serde(default)]
    pub algorithm: Algorithm,
    /// Round Robin time quantum.
    #[serde(default = "default_time_quantum")]
    pub time_quantum: i64,
}

fn default_time_quantum() -> i64 {
    DEFAULT_TIME_QUANTUM
}

impl SimulationRequest {
    /// Creates a FCFS request with the default time quantum.
    pub fn new(processes: Vec<Process>) -> Self {
        Self {
            processes,
            algorithm: Algorithm::default(),
            time_quantum: DEFAULT_TIME_QUANTUM,
        }
    }

    /// Sets the scheduling policy.
    pub fn with_algorithm(mut self, algorithm: Algorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    /// Sets the Round Robin time quantum.
    pub fn with_time_quantum(mut self, time_quantum: i64) -> Self {
        self.time_quantum = time_quantum;
        self
    }

    /// Adds a process.
    pub fn with_process(mut self, process: Process) -> Self {
        self.processes.push(process);
        self
    }

    /// Validates the request.
    ///
    /// The time quantum is only checked when the policy uses it.
    pub fn validate(&self) -> ValidationResult {
        let quantum = self
            .algorithm
            .uses_time_quantum()
            .then_some(self.time_quantum);
        validate_input(&self.processes, quantum)
    }

    /// Validates, then runs the configured policy.
    pub fn run(&self) -> Result<SimulationResult, Vec<ValidationError>> {
        self.validate()?;
        Ok(simulate(&self.processes, self.algorithm, self.time_quantum))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::ValidationErrorKind;

    #[test]
    fn test_request_builder() {
        let req = SimulationRequest::new(vec![Process::new(1, 0, 5)])
            .with_process(Process::new(2, 1, 3))
            .with_algorithm(Algorithm::RoundRobin)
            .with_time_quantum(4);
        assert_eq!(req.processes.len(), 2);
        assert_eq!(req.algorithm, Algorithm::RoundRobin);
        assert_eq!(req.time_quantum, 4);
    }

    #[test]
    fn test_request_from_json_defaults() {
        let req: SimulationRequest = serde_json::from_str(
            r#"{"processes":[{"id":1,"arrivalTime":0,"burstTime":5,"priority":2}]}"#,
        )
        .unwrap();
        assert_eq!(req.algorithm, Algorithm::Fcfs);
        assert_eq!(req.time_quantum, DEFAULT_TIME_QUANTUM);
    }

    #[test]
    fn test_request_from_json_rr() {
        let req: SimulationRequest = serde_json::from_str(
            r#"{
                "processes": [
                    {"id":1,"arrivalTime":0,"burstTime":5},
                    {"id":2,"arrivalTime":1,"burstTime":3}
                ],
                "algorithm": "rr",
                "timeQuantum": 3
            }"#,
        )
        .unwrap();
        let result = req.run().unwrap();
        assert_eq!(result.gantt_chart.len(), 3);
    }

    #[test]
    fn test_run_rejects_invalid_input() {
        let errors = SimulationRequest::new(Vec::new()).run().unwrap_err();
        assert_eq!(errors[0].kind, ValidationErrorKind::EmptyProcessList);
    }

    #[test]
    fn test_quantum_checked_only_for_rr() {
        let processes = vec![Process::new(1, 0, 5)];
        let fcfs = SimulationRequest::new(processes.clone()).with_time_quantum(0);
        assert!(fcfs.run().is_ok());

        let rr = SimulationRequest::new(processes)
            .with_algorithm(Algorithm::RoundRobin)
            .with_time_quantum(0);
        let errors = rr.run().unwrap_err();
        assert_eq!(errors[0].kind, ValidationErrorKind::InvalidTimeQuantum);
    }

    #[test]
    fn test_run_matches_direct_call() {
        let processes = vec![Process::new(1, 0, 8), Process::new(2, 1, 4), Process::new(3, 2, 2)];
        let req = SimulationRequest::new(processes.clone()).with_algorithm(Algorithm::Sjf);
        assert_eq!(req.run().unwrap(), crate::scheduler::sjf(&processes));
    }
}
