//! Timeline (Gantt chart) model.
//!
//! A timeline is an ordered sequence of [`ScheduleBlock`]s whose
//! `[start_time, end_time)` intervals tile `[0, last_end)` exactly once.
//! Gaps where no process is ready are explicit idle blocks.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ProcessId;

/// Occupant of a timeline interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "SlotRepr", try_from = "SlotRepr")]
pub enum Slot {
    /// No process is executing.
    Idle,
    /// The given process is executing.
    Process(ProcessId),
}

impl Slot {
    /// Label used for idle slots on the wire and in display output.
    pub const IDLE_LABEL: &'static str = "Idle";

    /// The executing process, if any.
    #[inline]
    pub fn process_id(&self) -> Option<ProcessId> {
        match self {
            Slot::Idle => None,
            Slot::Process(id) => Some(*id),
        }
    }

    /// Whether this is an idle slot.
    #[inline]
    pub fn is_idle(&self) -> bool {
        matches!(self, Slot::Idle)
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Slot::Idle => f.write_str(Self::IDLE_LABEL),
            Slot::Process(id) => write!(f, "P{id}"),
        }
    }
}

/// Wire shape: a bare process id or the idle label.
#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum SlotRepr {
    Id(ProcessId),
    Label(String),
}

impl From<Slot> for SlotRepr {
    fn from(slot: Slot) -> Self {
        match slot {
            Slot::Idle => SlotRepr::Label(Slot::IDLE_LABEL.to_string()),
            Slot::Process(id) => SlotRepr::Id(id),
        }
    }
}

impl TryFrom<SlotRepr> for Slot {
    type Error = String;

    fn try_from(repr: SlotRepr) -> Result<Self, Self::Error> {
        match repr {
            SlotRepr::Id(id) => Ok(Slot::Process(id)),
            SlotRepr::Label(label) if label == Slot::IDLE_LABEL => Ok(Slot::Idle),
            SlotRepr::Label(other) => Err(format!("unknown slot label '{other}'")),
        }
    }
}

/// One contiguous timeline interval.
///
/// A non-idle block is exactly one dispatch of a process. Round Robin may
/// produce several consecutive blocks for the same process; they are not
/// merged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleBlock {
    /// Occupant of the interval.
    #[serde(rename = "processId")]
    pub slot: Slot,
    /// Start time (inclusive).
    pub start_time: i64,
    /// End time (exclusive).
    pub end_time: i64,
}

impl ScheduleBlock {
    /// Creates a block for a process dispatch.
    pub fn process(id: ProcessId, start_time: i64, end_time: i64) -> Self {
        Self {
            slot: Slot::Process(id),
            start_time,
            end_time,
        }
    }

    /// Creates an idle block.
    pub fn idle(start_time: i64, end_time: i64) -> Self {
        Self {
            slot: Slot::Idle,
            start_time,
            end_time,
        }
    }

    /// Interval length.
    #[inline]
    pub fn duration(&self) -> i64 {
        self.end_time - self.start_time
    }

    /// Whether this block is idle.
    #[inline]
    pub fn is_idle(&self) -> bool {
        self.slot.is_idle()
    }

    /// The executing process, if any.
    #[inline]
    pub fn process_id(&self) -> Option<ProcessId> {
        self.slot.process_id()
    }
}
