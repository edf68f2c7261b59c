//! CPU scheduling domain models.
//!
//! Provides the data types shared by every scheduling policy: the
//! immutable input [`Process`], the timeline ([`ScheduleBlock`], [`Slot`])
//! and the per-run outcome ([`ProcessResult`], [`SimulationResult`]).
//!
//! # Time Representation
//! All times are integer simulated-time units relative to t=0.
//!
//! # Wire Format
//! Models serialize in camelCase (`arrivalTime`, `ganttChart`, ...), idle
//! slots as the string `"Idle"`.

mod process;
mod result;
mod timeline;

pub use process::{Process, ProcessId};
pub(crate) use result::mean;
pub use result::{ProcessResult, SimulationResult};
pub use timeline::{ScheduleBlock, Slot};
