//! A bot: body, brain and the runtime bookkeeping around them.

use raven_brain::{BrainSnapshot, TextReport, Think};
use raven_core::{BiasProfile, BotBody, EntityId, GoalKind, Tick, Vector2D};

use crate::regulator::Regulator;

/// Kill and death counts of a bot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BotStats {
    pub kills: u32,
    pub deaths: u32,
}

/// A bot living in a [`World`](crate::World).
///
/// The body and brain are stored side by side so the brain can be processed
/// with the body lent to it mutably.
#[derive(Debug)]
pub struct Bot {
    name: String,
    spawn_point: Vector2D,
    biases: BiasProfile,
    pub(crate) body: BotBody,
    pub(crate) brain: Think,
    pub(crate) regulator: Regulator,
    pub(crate) stats: BotStats,
    /// Set while dead: the tick at which the bot comes back.
    pub(crate) respawn_at: Option<Tick>,
    /// Earliest tick the bot may fire again.
    pub(crate) next_shot: Tick,
    /// Wander target on the wander circle, relative to the bot.
    pub(crate) wander_target: Vector2D,
}

impl Bot {
    pub(crate) fn new(
        name: String,
        body: BotBody,
        biases: BiasProfile,
        regulator: Regulator,
    ) -> Self {
        let spawn_point = body.position();
        let brain = Think::new(body.id(), &biases);
        Self {
            name,
            spawn_point,
            biases,
            body,
            brain,
            regulator,
            stats: BotStats::default(),
            respawn_at: None,
            next_shot: Tick::ZERO,
            wander_target: Vector2D::new(0.0, 1.0),
        }
    }

    pub fn id(&self) -> EntityId {
        self.body.id()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn spawn_point(&self) -> Vector2D {
        self.spawn_point
    }

    pub fn biases(&self) -> &BiasProfile {
        &self.biases
    }

    pub fn body(&self) -> &BotBody {
        &self.body
    }

    pub fn brain(&self) -> &Think {
        &self.brain
    }

    pub fn stats(&self) -> BotStats {
        self.stats
    }

    pub fn is_alive(&self) -> bool {
        self.respawn_at.is_none() && self.body.is_alive()
    }

    /// Kind of the top-level goal currently pursued.
    pub fn current_goal(&self) -> Option<GoalKind> {
        self.brain.front_kind()
    }

    pub fn snapshot(&self) -> BrainSnapshot {
        BrainSnapshot::capture(&self.brain, &self.body)
    }

    /// Indented text outline of the goal tree and evaluator scores.
    pub fn report(&self) -> String {
        let mut report = TextReport::new();
        self.brain.report_with_scores(&self.body, &mut report);
        report.into_string()
    }
}
