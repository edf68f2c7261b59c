//! Dispatching rules and rule engine for process selection.
//!
//! Expresses the selection keys of the non-preemptive policies as
//! composable rules, evaluated in sequence by a [`RuleEngine`] with a final
//! tie-breaker.
//!
//! | Policy | Rules |
//! |--------|-------|
//! | FCFS | FIFO |
//! | SJF | SJF → FIFO → ID |
//! | Priority | PRIORITY → FIFO → ID |
//!
//! # Usage
//!
//! ```
//! use u_cpusched::dispatching::{rules, RuleEngine};
//! use u_cpusched::models::Process;
//!
//! let engine = RuleEngine::new().with_rule(rules::Sjf);
//! let ready = [Process::new(1, 0, 8), Process::new(2, 1, 4)];
//! assert_eq!(engine.select_best(&ready, 0..ready.len()), Some(1));
//! ```
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.3
//! - Haupt (1989), "A Survey of Priority Rule-Based Scheduling"

mod engine;
pub mod rules;

pub use engine::{RuleEngine, TieBreaker};

use crate::models::Process;
use std::fmt::Debug;

/// Score returned by a dispatching rule.
///
/// Lower scores = higher priority (dispatched first).
pub type RuleScore = i64;

/// A dispatching rule that evaluates how urgently a process should run.
///
/// # Score Convention
/// **Lower score = higher priority.**
pub trait DispatchingRule: Send + Sync + Debug {
    /// Rule name (e.g., "SJF", "FIFO").
    fn name(&self) -> &'static str;

    /// Evaluates a ready process. Returns a score where lower = higher priority.
    fn evaluate(&self, process: &Process) -> RuleScore;

    /// Rule description.
    fn description(&self) -> &'static str {
        self.name()
    }
}
