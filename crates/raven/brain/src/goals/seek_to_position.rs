use goal_tree::{Goal, Status};
use raven_core::{BotBody, EntityId, GoalKind, Vector2D};

/// Seeks straight towards a fixed position until the bot stands on it.
#[derive(Debug)]
pub struct SeekToPosition {
    owner: EntityId,
    status: Status,
    position: Vector2D,
}

impl SeekToPosition {
    pub fn new(owner: EntityId, position: Vector2D) -> Self {
        Self {
            owner,
            status: Status::Inactive,
            position,
        }
    }

    pub fn position(&self) -> Vector2D {
        self.position
    }
}

impl Goal<BotBody> for SeekToPosition {
    fn kind(&self) -> GoalKind {
        GoalKind::SeekToPosition
    }

    fn status(&self) -> Status {
        self.status
    }

    fn activate(&mut self, bot: &mut BotBody) {
        if self.status.is_active() {
            return;
        }
        self.status = Status::Active;
        bot.steering_mut().seek_on(self.position);
        tracing::trace!(bot = %self.owner, position = %self.position, "seek on");
    }

    fn process(&mut self, bot: &mut BotBody) -> Status {
        self.activate_if_inactive(bot);
        bot.steering_mut().seek_on(self.position);
        if bot.is_at_position(self.position) {
            self.status = Status::Completed;
        }
        self.status
    }

    fn terminate(&mut self, bot: &mut BotBody) {
        if !self.status.is_inactive() {
            bot.steering_mut().seek_off();
        }
        self.status = Status::Completed;
    }
}
