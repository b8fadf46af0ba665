//! Goal-driven brain for Raven bots.
//!
//! The brain is a tree of goals rooted at a [`Think`] layer. Every tick the
//! runtime hands the bot's [`BotBody`](raven_core::BotBody) to
//! [`Think::process`](goal_tree::Goal::process); the think layer processes its
//! current top-level goal and, when it has none, arbitrates between its
//! evaluators to pick one.
//!
//! # Modules
//!
//! - [`goals`]: primitive and composite goals (explore, fetch items, attack)
//! - [`evaluators`]: desirability scoring for each top-level goal
//! - [`features`]: normalized bot features used by the evaluators
//! - [`report`]: text and JSON diagnostics of a goal tree

pub mod evaluators;
pub mod features;
pub mod goals;
pub mod report;
pub mod think;

#[cfg(test)]
mod testing;

pub use evaluators::{CustomEvaluator, EvaluatorKind, GoalEvaluator};
pub use report::{BrainSnapshot, GoalEntry, ScoreEntry, TextReport};
pub use think::Think;
