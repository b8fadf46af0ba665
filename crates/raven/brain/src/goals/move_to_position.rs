use goal_tree::{Goal, GoalReporter, Status, Subgoals};
use raven_core::{BotBody, EntityId, GoalKind, Vector2D};

use super::FollowPath;

/// Plans a path to a destination and follows it.
///
/// Fails on activation when the planner reports the destination unreachable.
pub struct MoveToPosition {
    owner: EntityId,
    status: Status,
    destination: Vector2D,
    subgoals: Subgoals<BotBody>,
}

impl MoveToPosition {
    pub fn new(owner: EntityId, destination: Vector2D) -> Self {
        Self {
            owner,
            status: Status::Inactive,
            destination,
            subgoals: Subgoals::new(),
        }
    }

    pub fn destination(&self) -> Vector2D {
        self.destination
    }
}

impl Goal<BotBody> for MoveToPosition {
    fn kind(&self) -> GoalKind {
        GoalKind::MoveToPosition
    }

    fn status(&self) -> Status {
        self.status
    }

    fn activate(&mut self, bot: &mut BotBody) {
        if self.status.is_active() {
            return;
        }
        self.subgoals.remove_all(bot);

        match bot.plan_path(self.destination) {
            Some(path) => {
                self.status = Status::Active;
                self.subgoals
                    .push_front(Box::new(FollowPath::new(self.owner, path)));
            }
            None => {
                tracing::warn!(
                    bot = %self.owner,
                    destination = %self.destination,
                    "destination unreachable"
                );
                self.status = Status::Failed;
            }
        }
    }

    fn process(&mut self, bot: &mut BotBody) -> Status {
        self.activate_if_inactive(bot);
        if self.status.is_failed() {
            return self.status;
        }
        self.status = self.subgoals.process(bot);
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
