//! Process model.
//!
//! A process is a unit of CPU work: it becomes ready at its arrival time and
//! needs `burst_time` units of CPU to complete.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.1

use serde::{Deserialize, Serialize};

/// Process identifier. Unique and positive within a simulation run.
pub type ProcessId = u32;

/// A process to be scheduled.
///
/// Fields are signed so that out-of-range input survives deserialization
/// and can be reported by [`crate::validation`]. Schedulers only read
/// processes; per-run state is kept separately.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Process {
    /// Unique process identifier.
    pub id: ProcessId,
    /// Time at which the process becomes ready.
    pub arrival_time: i64,
    /// Total CPU time required.
    pub burst_time: i64,
    /// Scheduling priority (lower value = more important).
    #[serde(default)]
    pub priority: i64,
}

impl Process {
    /// Creates a process with the given ID, arrival and burst time.
    ///
    /// Priority defaults to 0.
    pub fn new(id: ProcessId, arrival_time: i64, burst_time: i64) -> Self {
        Self {
            id,
            arrival_time,
            burst_time,
            priority: 0,
        }
    }

    /// Sets the scheduling priority.
    pub fn with_priority(mut self, priority: i64) -> Self {
        self.priority = priority;
        self
    }

    /// Sets the arrival time.
    pub fn with_arrival_time(mut self, arrival_time: i64) -> Self {
        self.arrival_time = arrival_time;
        self
    }

    /// Sets the burst time.
    pub fn with_burst_time(mut self, burst_time: i64) -> Self {
        self.burst_time = burst_time;
        self
    }

    /// Whether the process has arrived by `time`.
    #[inline]
    pub fn has_arrived(&self, time: i64) -> bool {
        self.arrival_time <= time
    }

    /// Shared tie-break key: earlier arrival first, then lower ID.
    #[inline]
    pub fn arrival_key(&self) -> (i64, ProcessId) {
        (self.arrival_time, self.id)
    }
}
