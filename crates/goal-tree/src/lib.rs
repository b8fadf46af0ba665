//! Hierarchical goal engine for tick-driven agents.
//!
//! This library provides the building blocks of a goal-driven agent brain:
//! atomic goals with a lifecycle status, composite goals that delegate to an
//! ordered list of sub-goals, and the arbitration rule used to pick the most
//! desirable top-level goal.
//!
//! - **Tick-driven**: every call to [`Goal::process`] advances one tick
//! - **Owner passed in**: goals hold no reference to their agent
//! - **Status only**: failure is ordinary data, never a panic or `Err`
//! - **Zero dependencies**: Pure Rust with no external crates
//!
//! # Architecture
//!
//! - [`Goal`]: Core trait for all goals, generic over a [`GoalOwner`]
//! - [`Status`]: Inactive, Active, Completed or Failed
//! - [`Subgoals`]: Sub-goal list used by composite goals
//! - [`select_best`]: Strictly-greatest, first-seen-wins arbitration rule
//! - [`GoalReporter`]: Optional diagnostics sink

pub mod arbitration;
pub mod goal;
pub mod report;
pub mod status;
pub mod subgoals;

// Re-export core types for ergonomic API
pub use arbitration::{clamp_unit, select_best};
pub use goal::{Goal, GoalOwner};
pub use report::{GoalReporter, NullReporter};
pub use status::Status;
pub use subgoals::Subgoals;
