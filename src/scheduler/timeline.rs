//! Timeline assembly shared by all policies.

use tracing::{debug, trace};

use crate::models::{ProcessId, ScheduleBlock};

/// Accumulates contiguous blocks while advancing the simulated clock.
///
/// Every block starts where the previous one ended, so the finished
/// timeline tiles `[0, now)` without gaps.
#[derive(Debug, Default)]
pub(crate) struct TimelineBuilder {
    blocks: Vec<ScheduleBlock>,
    now: i64,
}

impl TimelineBuilder {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Current simulated time.
    #[inline]
    pub(crate) fn now(&self) -> i64 {
        self.now
    }

    /// Idles the CPU until `time`. No-op if `time` is not in the future.
    pub(crate) fn idle_until(&mut self, time: i64) {
        if time > self.now {
            trace!(start = self.now, end = time, "idle");
            self.blocks.push(ScheduleBlock::idle(self.now, time));
            self.now = time;
        }
    }

    /// Runs `id` for `duration` units and returns the dispatch start.
    ///
    /// Non-positive durations record nothing and leave the clock unchanged.
    pub(crate) fn run(&mut self, id: ProcessId, duration: i64) -> i64 {
        let start = self.now;
        if duration > 0 {
            let end = start + duration;
            debug!(process = id, start, end, "dispatch");
            self.blocks.push(ScheduleBlock::process(id, start, end));
            self.now = end;
        }
        start
    }

    pub(crate) fn into_blocks(self) -> Vec<ScheduleBlock> {
        self.blocks
    }
}
