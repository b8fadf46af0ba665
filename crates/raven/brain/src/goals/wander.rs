use goal_tree::{Goal, Status};
use raven_core::{BotBody, EntityId, GoalKind};

/// Wanders aimlessly until terminated. Never completes on its own.
#[derive(Debug)]
pub struct Wander {
    owner: EntityId,
    status: Status,
}

impl Wander {
    pub fn new(owner: EntityId) -> Self {
        Self {
            owner,
            status: Status::Inactive,
        }
    }
}

impl Goal<BotBody> for Wander {
    fn kind(&self) -> GoalKind {
        GoalKind::Wander
    }

    fn status(&self) -> Status {
        self.status
    }

    fn activate(&mut self, bot: &mut BotBody) {
        if self.status.is_active() {
            return;
        }
        self.status = Status::Active;
        bot.steering_mut().wander_on();
        tracing::trace!(bot = %self.owner, "wander on");
    }

    fn process(&mut self, bot: &mut BotBody) -> Status {
        self.activate_if_inactive(bot);
        bot.steering_mut().wander_on();
        self.status
    }

    fn terminate(&mut self, bot: &mut BotBody) {
        if !self.status.is_inactive() {
            bot.steering_mut().wander_off();
        }
        self.status = Status::Completed;
    }
}

#[cfg(test)]
mod tests {
    use raven_core::SteeringFlags;

    use super::*;
    use crate::testing::bot_at;

    #[test]
    fn wanders_until_terminated() {
        let mut bot = bot_at(0.0, 0.0);
        let mut goal = Wander::new(bot.id());

        for _ in 0..5 {
            assert_eq!(goal.process(&mut bot), Status::Active);
        }
        assert!(bot.steering().is_on(SteeringFlags::WANDER));

        goal.terminate(&mut bot);
        assert_eq!(goal.status(), Status::Completed);
        assert!(bot.steering().flags().is_empty());
    }

    #[test]
    fn terminate_before_activation_leaves_steering_alone() {
        let mut bot = bot_at(0.0, 0.0);
        bot.steering_mut().wander_on();

        let mut goal = Wander::new(bot.id());
        goal.terminate(&mut bot);

        assert!(bot.steering().is_on(SteeringFlags::WANDER));
    }
}
