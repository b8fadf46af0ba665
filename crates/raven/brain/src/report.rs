//! Diagnostics reporters for a bot's goal tree.
//!
//! [`TextReport`] renders an indented, human-readable outline;
//! [`BrainSnapshot`] collects the same information as serializable data.

use core::fmt::Write as _;

use goal_tree::{GoalReporter, Status};
use raven_core::{BotBody, GoalKind, Vector2D};
use serde::{Deserialize, Serialize};

use crate::Think;

/// Renders a goal tree as indented text, one goal per line.
#[derive(Debug, Default, Clone)]
pub struct TextReport {
    text: String,
}

impl TextReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn into_string(self) -> String {
        self.text
    }
}

impl GoalReporter<GoalKind> for TextReport {
    fn goal(&mut self, depth: usize, kind: GoalKind, status: Status) {
        let _ = writeln!(self.text, "{:indent$}{kind} ({status})", "", indent = depth * 2);
    }

    fn evaluation(&mut self, label: &str, desirability: f64) {
        let _ = writeln!(self.text, "  {label}: {desirability:.2}");
    }
}

/// One goal in a [`BrainSnapshot`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GoalEntry {
    pub depth: usize,
    pub kind: GoalKind,
    pub status: String,
}

/// One evaluator score in a [`BrainSnapshot`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScoreEntry {
    pub evaluator: String,
    pub desirability: f64,
}

/// Serializable picture of a bot's brain at one instant.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct BrainSnapshot {
    pub bot: u32,
    pub position: Option<Vector2D>,
    pub health: i32,
    pub goals: Vec<GoalEntry>,
    pub scores: Vec<ScoreEntry>,
}

impl BrainSnapshot {
    /// Captures the goal tree and evaluator scores of `think` for `bot`.
    pub fn capture(think: &Think, bot: &BotBody) -> Self {
        let mut snapshot = Self {
            bot: bot.id().0,
            position: Some(bot.position()),
            health: bot.health(),
            ..Self::default()
        };
        think.report_with_scores(bot, &mut snapshot);
        snapshot
    }

    /// Serializes the snapshot as a single JSON line.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

impl GoalReporter<GoalKind> for BrainSnapshot {
    fn goal(&mut self, depth: usize, kind: GoalKind, status: Status) {
        self.goals.push(GoalEntry {
            depth,
            kind,
            status: status.as_str().to_owned(),
        });
    }

    fn evaluation(&mut self, label: &str, desirability: f64) {
        self.scores.push(ScoreEntry {
            evaluator: label.to_owned(),
            desirability,
        });
    }
}
