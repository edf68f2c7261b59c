//! Rule engine for multi-criteria dispatching.
//!
//! Applies rules in sequence; the next rule is consulted only on ties.
//! When every rule ties, a final [`TieBreaker`] makes the order total so
//! that selection is deterministic.
//!
//! # Reference
//! Haupt (1989), "A Survey of Priority Rule-Based Scheduling"

use std::cmp::Ordering;
use std::sync::Arc;

use super::DispatchingRule;
use crate::models::Process;

/// How ties are broken after all rules are exhausted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TieBreaker {
    /// Earlier arrival, then lower process ID (default).
    #[default]
    ArrivalThenId,
    /// Lower process ID.
    ById,
}

/// A composable rule engine for process selection.
///
/// # Example
/// ```
/// use u_cpusched::dispatching::{rules, RuleEngine};
///
/// let engine = RuleEngine::new().with_rule(rules::Priority);
/// assert_eq!(engine.rule_names(), vec!["PRIORITY"]);
/// ```
#[derive(Clone)]
pub struct RuleEngine {
    rules: Vec<Arc<dyn DispatchingRule>>,
    tie_breaker: TieBreaker,
}

impl RuleEngine {
    /// Creates an empty rule engine.
    pub fn new() -> Self {
        Self {
            rules: Vec::new(),
            tie_breaker: TieBreaker::ArrivalThenId,
        }
    }

    /// Adds a rule. Rules are consulted in insertion order.
    pub fn with_rule<R: DispatchingRule + 'static>(mut self, rule: R) -> Self {
        self.rules.push(Arc::new(rule));
        self
    }

    /// Sets the final tie-breaking strategy.
    pub fn with_final_tie_breaker(mut self, tie_breaker: TieBreaker) -> Self {
        self.tie_breaker = tie_breaker;
        self
    }

    /// Names of the configured rules, in evaluation order.
    pub fn rule_names(&self) -> Vec<&'static str> {
        self.rules.iter().map(|r| r.name()).collect()
    }

    /// Sorts processes by priority (highest priority first).
    ///
    /// Returns indices into the original slice.
    pub fn sort_indices(&self, processes: &[Process]) -> Vec<usize> {
        let mut indices: Vec<usize> = (0..processes.len()).collect();
        indices.sort_by(|&a, &b| self.compare(&processes[a], &processes[b]));
        indices
    }

    /// Picks the highest-priority process among the `candidates` indices.
    ///
    /// Returns an index into `processes`, or `None` if there are no
    /// candidates.
    pub fn select_best<I>(&self, processes: &[Process], candidates: I) -> Option<usize>
    where
        I: IntoIterator<Item = usize>,
    {
        candidates
            .into_iter()
            .min_by(|&a, &b| self.compare(&processes[a], &processes[b]))
    }

    /// Total order used for selection: `Less` means `a` runs first.
    pub fn compare(&self, a: &Process, b: &Process) -> Ordering {
        for rule in &self.rules {
            match rule.evaluate(a).cmp(&rule.evaluate(b)) {
                Ordering::Equal => continue,
                decided => return decided,
            }
        }

        match self.tie_breaker {
            TieBreaker::ArrivalThenId => a.arrival_key().cmp(&b.arrival_key()),
            TieBreaker::ById => a.id.cmp(&b.id),
        }
    }
}

impl Default for RuleEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for RuleEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RuleEngine")
            .field("rules", &self.rule_names())
            .field("tie_breaker", &self.tie_breaker)
            .finish()
    }
}
