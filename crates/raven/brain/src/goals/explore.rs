use goal_tree::{Goal, GoalReporter, Status, Subgoals};
use raven_core::{BotBody, EntityId, GoalKind, Vector2D};

use super::{FollowPath, Wander};

/// Travels to a random reachable location.
///
/// When no location can be drawn or no path to it exists, the bot wanders
/// instead; the goal then stays active until replaced.
pub struct Explore {
    owner: EntityId,
    status: Status,
    destination: Option<Vector2D>,
    subgoals: Subgoals<BotBody>,
}

impl Explore {
    pub fn new(owner: EntityId) -> Self {
        Self {
            owner,
            status: Status::Inactive,
            destination: None,
            subgoals: Subgoals::new(),
        }
    }

    /// The chosen destination, once activated. `None` while wandering.
    pub fn destination(&self) -> Option<Vector2D> {
        self.destination
    }
}

impl Goal<BotBody> for Explore {
    fn kind(&self) -> GoalKind {
        GoalKind::Explore
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

        let planned = bot
            .random_location()
            .and_then(|destination| bot.plan_path(destination).map(|path| (destination, path)));

        match planned {
            Some((destination, path)) => {
                tracing::debug!(bot = %self.owner, %destination, "exploring");
                self.destination = Some(destination);
                self.subgoals
                    .push_front(Box::new(FollowPath::new(self.owner, path)));
            }
            None => {
                tracing::debug!(bot = %self.owner, "no destination to explore, wandering");
                self.destination = None;
                self.subgoals.push_front(Box::new(Wander::new(self.owner)));
            }
        }
    }

    fn process(&mut self, bot: &mut BotBody) -> Status {
        self.activate_if_inactive(bot);
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
