use goal_tree::{Goal, Status};
use raven_core::{BotBody, EntityId, GoalKind, PathEdge};

/// Moves the bot along a single path edge.
///
/// Intermediate edges seek through their destination; the last edge of a path
/// arrives so the bot decelerates onto the final waypoint.
#[derive(Debug)]
pub struct TraverseEdge {
    owner: EntityId,
    status: Status,
    edge: PathEdge,
    last_edge: bool,
}

impl TraverseEdge {
    pub fn new(owner: EntityId, edge: PathEdge, last_edge: bool) -> Self {
        Self {
            owner,
            status: Status::Inactive,
            edge,
            last_edge,
        }
    }

    pub fn edge(&self) -> PathEdge {
        self.edge
    }

    fn steer(&self, bot: &mut BotBody) {
        let steering = bot.steering_mut();
        if self.last_edge {
            steering.arrive_on(self.edge.destination);
        } else {
            steering.seek_on(self.edge.destination);
        }
    }
}

impl Goal<BotBody> for TraverseEdge {
    fn kind(&self) -> GoalKind {
        GoalKind::TraverseEdge
    }

    fn status(&self) -> Status {
        self.status
    }

    fn activate(&mut self, bot: &mut BotBody) {
        if self.status.is_active() {
            return;
        }
        self.status = Status::Active;
        self.steer(bot);
        tracing::trace!(
            bot = %self.owner,
            destination = %self.edge.destination,
            last_edge = self.last_edge,
            "traversing edge"
        );
    }

    fn process(&mut self, bot: &mut BotBody) -> Status {
        self.activate_if_inactive(bot);
        // Re-issued every tick: a goal pushed in front may have retargeted
        // or released the shared steering in the meantime.
        self.steer(bot);
        if bot.is_at_position(self.edge.destination) {
            self.status = Status::Completed;
        }
        self.status
    }

    fn terminate(&mut self, bot: &mut BotBody) {
        if !self.status.is_inactive() {
            if self.last_edge {
                bot.steering_mut().arrive_off();
            } else {
                bot.steering_mut().seek_off();
            }
        }
        self.status = Status::Completed;
    }
}

#[cfg(test)]
mod tests {
    use raven_core::{SteeringFlags, Vector2D};

    use super::*;
    use crate::testing::bot_at;

    fn edge() -> PathEdge {
        PathEdge::new(Vector2D::ZERO, Vector2D::new(40.0, 0.0))
    }

    #[test]
    fn intermediate_edge_seeks() {
        let mut bot = bot_at(0.0, 0.0);
        let mut goal = TraverseEdge::new(bot.id(), edge(), false);

        assert_eq!(goal.process(&mut bot), Status::Active);
        assert!(bot.steering().is_on(SteeringFlags::SEEK));
        assert_eq!(bot.steering().target(), Vector2D::new(40.0, 0.0));
    }

    #[test]
    fn last_edge_arrives_and_completes_on_destination() {
        let mut bot = bot_at(0.0, 0.0);
        let mut goal = TraverseEdge::new(bot.id(), edge(), true);

        goal.process(&mut bot);
        assert!(bot.steering().is_on(SteeringFlags::ARRIVE));

        bot.set_position(Vector2D::new(39.0, 0.0));
        assert_eq!(goal.process(&mut bot), Status::Completed);

        goal.terminate(&mut bot);
        assert!(bot.steering().flags().is_empty());
    }
}
