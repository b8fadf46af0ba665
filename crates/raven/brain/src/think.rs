//! The arbitration layer at the root of every bot's goal tree.

use core::fmt;

use goal_tree::{Goal, GoalReporter, Status, Subgoals, select_best};
use raven_core::{BiasProfile, BotBody, EntityId, GoalKind, ItemKind, Vector2D};

use crate::evaluators::{EvaluatorKind, GoalEvaluator};
use crate::goals::{AttackTarget, Explore, GetItem, MoveToPosition, Wander};

/// Root composite goal owning a bot's evaluators and top-level goals.
///
/// Each tick the front top-level goal is processed. Whenever the goal list
/// is empty, and whenever the runtime's regulator asks for it, [`Think`]
/// scores every evaluator and lets the winner install its goal. The layer
/// itself never completes or fails: failed goals are dropped and a new goal
/// is chosen.
pub struct Think {
    owner: EntityId,
    status: Status,
    evaluators: Vec<GoalEvaluator>,
    subgoals: Subgoals<BotBody>,
}

impl Think {
    /// Creates a think layer with the standard evaluator set.
    pub fn new(owner: EntityId, biases: &BiasProfile) -> Self {
        Self::with_evaluators(owner, GoalEvaluator::standard_set(biases))
    }

    /// Creates a think layer with an explicit evaluator list. Declaration
    /// order decides exact ties: the first evaluator wins.
    pub fn with_evaluators(owner: EntityId, evaluators: Vec<GoalEvaluator>) -> Self {
        Self {
            owner,
            status: Status::Inactive,
            evaluators,
            subgoals: Subgoals::new(),
        }
    }

    pub fn owner(&self) -> EntityId {
        self.owner
    }

    pub fn evaluators(&self) -> &[GoalEvaluator] {
        &self.evaluators
    }

    /// Biased desirability of every evaluator, in declaration order.
    pub fn scores(&self, bot: &BotBody) -> Vec<(EvaluatorKind, f64)> {
        self.evaluators
            .iter()
            .map(|evaluator| (evaluator.kind(), evaluator.calculate_desirability(bot)))
            .collect()
    }

    /// Scores every evaluator and lets the most desirable one install its
    /// goal. Returns the winning evaluator, or `None` if there are none.
    pub fn arbitrate(&mut self, bot: &mut BotBody) -> Option<EvaluatorKind> {
        let scores = self
            .evaluators
            .iter()
            .map(|evaluator| {
                let score = evaluator.calculate_desirability(bot);
                tracing::debug!(
                    bot = %self.owner,
                    evaluator = evaluator.label(),
                    score,
                    "evaluated"
                );
                score
            })
            .collect::<Vec<_>>();

        let (index, score) = select_best(scores)?;
        let winner = self.evaluators[index];

        let previous = self.subgoals.front_kind();
        winner.set_goal(self, bot);
        let current = self.subgoals.front_kind();

        if previous != current {
            tracing::info!(
                bot = %self.owner,
                evaluator = winner.label(),
                score,
                goal = ?current,
                "new top-level goal"
            );
        }
        Some(winner.kind())
    }

    /// True unless the front top-level goal is of `kind`.
    pub fn not_present(&self, kind: GoalKind) -> bool {
        self.subgoals.front_kind() != Some(kind)
    }

    /// Kind of the goal currently being pursued.
    pub fn front_kind(&self) -> Option<GoalKind> {
        self.subgoals.front_kind()
    }

    /// Kinds of every queued top-level goal, front first.
    pub fn subgoal_kinds(&self) -> Vec<GoalKind> {
        self.subgoals.kinds().collect()
    }

    pub fn has_subgoals(&self) -> bool {
        !self.subgoals.is_empty()
    }

    pub fn remove_all_subgoals(&mut self, bot: &mut BotBody) {
        self.subgoals.remove_all(bot);
    }

    /// Drops every goal and returns to the inactive state, e.g. on respawn.
    pub fn reset(&mut self, bot: &mut BotBody) {
        self.subgoals.remove_all(bot);
        self.status = Status::Inactive;
    }

    // ========================================================================
    // Goal injection
    // ========================================================================

    fn replace_with(&mut self, bot: &mut BotBody, goal: Box<dyn Goal<BotBody>>) {
        tracing::debug!(bot = %self.owner, goal = %goal.kind(), "installing goal");
        self.subgoals.remove_all(bot);
        self.subgoals.push_front(goal);
    }

    pub fn add_goal_explore(&mut self, bot: &mut BotBody) {
        if self.not_present(GoalKind::Explore) {
            self.replace_with(bot, Box::new(Explore::new(self.owner)));
        }
    }

    pub fn add_goal_attack_target(&mut self, bot: &mut BotBody) {
        if self.not_present(GoalKind::AttackTarget) {
            self.replace_with(bot, Box::new(AttackTarget::new(self.owner)));
        }
    }

    pub fn add_goal_get_item(&mut self, bot: &mut BotBody, item: ItemKind) {
        if self.not_present(GoalKind::get_item(item)) {
            self.replace_with(bot, Box::new(GetItem::new(self.owner, item)));
        }
    }

    pub fn add_goal_wander(&mut self, bot: &mut BotBody) {
        if self.not_present(GoalKind::Wander) {
            self.replace_with(bot, Box::new(Wander::new(self.owner)));
        }
    }

    /// Pre-empts the current goal with a move. The displaced goal stays
    /// queued and resumes once the move finishes.
    pub fn add_goal_move_to_position(&mut self, destination: Vector2D) {
        self.subgoals
            .push_front(Box::new(MoveToPosition::new(self.owner, destination)));
    }

    /// Queues a move to run after every goal already queued.
    pub fn queue_goal_move_to_position(&mut self, destination: Vector2D) {
        self.subgoals
            .push_back(Box::new(MoveToPosition::new(self.owner, destination)));
    }

    /// Reports the goal tree followed by every evaluator score.
    pub fn report_with_scores(&self, bot: &BotBody, reporter: &mut dyn GoalReporter<GoalKind>) {
        self.report(0, reporter);
        for evaluator in &self.evaluators {
            evaluator.report(bot, reporter);
        }
    }
}

impl fmt::Debug for Think {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Think")
            .field("owner", &self.owner)
            .field("status", &self.status)
            .field("subgoals", &self.subgoal_kinds())
            .field("evaluators", &self.evaluators)
            .finish()
    }
}

impl Goal<BotBody> for Think {
    fn kind(&self) -> GoalKind {
        GoalKind::Think
    }

    fn status(&self) -> Status {
        self.status
    }

    fn activate(&mut self, bot: &mut BotBody) {
        if self.status.is_active() {
            return;
        }
        self.status = Status::Active;
        if self.subgoals.is_empty() {
            self.arbitrate(bot);
        }
    }

    fn process(&mut self, bot: &mut BotBody) -> Status {
        self.activate_if_inactive(bot);

        if self.subgoals.is_empty() {
            self.arbitrate(bot);
        }

        let status = self.subgoals.process(bot);
        if status.is_failed() {
            tracing::debug!(bot = %self.owner, "top-level goal failed");
        }

        // Completed or failed goals are absorbed; the next tick re-arbitrates.
        self.status = Status::Active;
        self.status
    }

    fn terminate(&mut self, bot: &mut BotBody) {
        self.subgoals.remove_all(bot);
        self.status = Status::Completed;
    }

    fn report(&self, depth: usize, reporter: &mut dyn GoalReporter<GoalKind>) {
        reporter.goal(depth, self.kind(), self.status);
        self.subgoals.report(depth + 1, reporter);
    }
}
