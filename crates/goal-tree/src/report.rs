//! Diagnostics reporting.
//!
//! Goals and evaluators describe themselves through [`GoalReporter`] instead of
//! drawing anything directly. Decision logic never depends on a reporter being
//! present, so goal trees run headless.

use crate::Status;

/// Receives a description of a goal tree and its evaluator scores.
pub trait GoalReporter<K> {
    /// Called once per goal, parents before children. `depth` is 0 for the root.
    fn goal(&mut self, depth: usize, kind: K, status: Status);

    /// Called once per evaluator with its biased desirability.
    fn evaluation(&mut self, _label: &str, _desirability: f64) {}
}

/// Reporter that discards everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullReporter;

impl<K> GoalReporter<K> for NullReporter {
    fn goal(&mut self, _depth: usize, _kind: K, _status: Status) {}
}
