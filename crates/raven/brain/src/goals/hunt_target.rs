use goal_tree::{Goal, GoalReporter, Status, Subgoals};
use raven_core::{BotBody, EntityId, GoalKind};

use super::MoveToPosition;

/// Moves to where the current target was last sensed.
///
/// Completes as soon as the target is visible again, when it disappears
/// entirely, or when the bot reaches the last sensed position.
pub struct HuntTarget {
    owner: EntityId,
    status: Status,
    subgoals: Subgoals<BotBody>,
}

impl HuntTarget {
    pub fn new(owner: EntityId) -> Self {
        Self {
            owner,
            status: Status::Inactive,
            subgoals: Subgoals::new(),
        }
    }
}

impl Goal<BotBody> for HuntTarget {
    fn kind(&self) -> GoalKind {
        GoalKind::HuntTarget
    }

    fn status(&self) -> Status {
        self.status
    }

    fn activate(&mut self, bot: &mut BotBody) {
        if self.status.is_active() {
            return;
        }
        self.status = Status::Active;
        self.subgoals.remove_all(bot);

        if let Some(target) = bot.perception().target {
            tracing::debug!(
                bot = %self.owner,
                target = %target.id,
                position = %target.last_sensed_position,
                "hunting target"
            );
            self.subgoals.push_front(Box::new(MoveToPosition::new(
                self.owner,
                target.last_sensed_position,
            )));
        }
    }

    fn process(&mut self, bot: &mut BotBody) -> Status {
        self.activate_if_inactive(bot);

        self.status = if bot.has_visible_target() || !bot.is_target_present() {
            Status::Completed
        } else {
            self.subgoals.process(bot)
        };
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
