use goal_tree::{Goal, GoalReporter, Status, Subgoals};
use raven_core::{BotBody, EntityId, GoalKind, Vector2D};

use super::{HuntTarget, SeekToPosition};

/// Engages the current target.
///
/// A visible target is approached directly; a target that has slipped out of
/// view is hunted at its last sensed position. The goal completes once the
/// bot no longer has a target. It re-plans whenever a sub-goal fails and
/// whenever a visible target moves away from the point being approached.
/// Firing is handled by the runtime's weapon system, not by this goal.
pub struct AttackTarget {
    owner: EntityId,
    status: Status,
    /// Where the seek sub-goal is headed; `None` while hunting.
    aim: Option<Vector2D>,
    subgoals: Subgoals<BotBody>,
}

impl AttackTarget {
    pub fn new(owner: EntityId) -> Self {
        Self {
            owner,
            status: Status::Inactive,
            aim: None,
            subgoals: Subgoals::new(),
        }
    }

    /// True when a visible target is no longer where the current plan leads.
    fn is_plan_stale(&self, bot: &BotBody) -> bool {
        let Some(target) = bot.perception().target.filter(|target| target.visible) else {
            return false;
        };
        self.aim.is_none_or(|aim| {
            aim.distance(target.last_sensed_position) > BotBody::POSITION_TOLERANCE
        })
    }
}

impl Goal<BotBody> for AttackTarget {
    fn kind(&self) -> GoalKind {
        GoalKind::AttackTarget
    }

    fn status(&self) -> Status {
        self.status
    }

    fn activate(&mut self, bot: &mut BotBody) {
        if self.status.is_active() {
            return;
        }
        self.subgoals.remove_all(bot);
        self.aim = None;

        let Some(target) = bot.perception().target else {
            self.status = Status::Completed;
            return;
        };
        self.status = Status::Active;

        if target.visible {
            self.aim = Some(target.last_sensed_position);
            self.subgoals.push_front(Box::new(SeekToPosition::new(
                self.owner,
                target.last_sensed_position,
            )));
        } else {
            self.subgoals
                .push_front(Box::new(HuntTarget::new(self.owner)));
        }
    }

    fn process(&mut self, bot: &mut BotBody) -> Status {
        self.activate_if_inactive(bot);
        if self.status.is_completed() {
            return self.status;
        }
        if self.is_plan_stale(bot) {
            self.status = Status::Inactive;
            self.activate(bot);
        }

        self.status = self.subgoals.process(bot);
        match self.status {
            Status::Failed => {
                self.status = Status::Inactive;
                self.activate(bot);
            }
            // The sub-goal finished but the target is still around.
            Status::Completed if bot.is_target_present() => {
                self.status = Status::Inactive;
                self.activate(bot);
            }
            _ => {}
        }
        if !bot.is_target_present() {
            self.subgoals.remove_all(bot);
            self.status = Status::Completed;
        }
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

#[cfg(test)]
mod tests {
    use raven_core::{SteeringFlags, Vector2D};

    use super::*;
    use crate::testing::{bot_at, set_target};

    #[test]
    fn no_target_completes_immediately() {
        let mut bot = bot_at(0.0, 0.0);
        let mut goal = AttackTarget::new(bot.id());
        assert_eq!(goal.process(&mut bot), Status::Completed);
        assert!(bot.steering().flags().is_empty());
    }

    #[test]
    fn visible_target_is_approached() {
        let mut bot = bot_at(0.0, 0.0);
        set_target(&mut bot, 100.0, 0.0, true);
        let mut goal = AttackTarget::new(bot.id());

        assert_eq!(goal.process(&mut bot), Status::Active);
        assert!(bot.steering().is_on(SteeringFlags::SEEK));
        assert_eq!(bot.steering().target(), Vector2D::new(100.0, 0.0));
    }

    #[test]
    fn moving_target_is_followed() {
        let mut bot = bot_at(0.0, 0.0);
        set_target(&mut bot, 100.0, 0.0, true);
        let mut goal = AttackTarget::new(bot.id());
        goal.process(&mut bot);

        // Small drift keeps the current plan.
        set_target(&mut bot, 104.0, 0.0, true);
        assert_eq!(goal.process(&mut bot), Status::Active);
        assert_eq!(bot.steering().target(), Vector2D::new(100.0, 0.0));

        set_target(&mut bot, 100.0, 60.0, true);
        assert_eq!(goal.process(&mut bot), Status::Active);
        assert!(bot.steering().is_on(SteeringFlags::SEEK));
        assert_eq!(bot.steering().target(), Vector2D::new(100.0, 60.0));
    }

    #[test]
    fn target_coming_into_view_ends_the_hunt() {
        let mut bot = bot_at(0.0, 0.0);
        set_target(&mut bot, 300.0, 0.0, false);
        let mut goal = AttackTarget::new(bot.id());
        goal.process(&mut bot);

        set_target(&mut bot, 250.0, 20.0, true);
        assert_eq!(goal.process(&mut bot), Status::Active);
        assert!(bot.steering().is_on(SteeringFlags::SEEK));
        assert_eq!(bot.steering().target(), Vector2D::new(250.0, 20.0));
    }

    #[test]
    fn hidden_target_is_hunted() {
        let mut bot = bot_at(0.0, 0.0);
        set_target(&mut bot, 300.0, 0.0, false);
        let mut goal = AttackTarget::new(bot.id());
        goal.process(&mut bot);

        let mut kinds = Vec::new();
        struct Kinds<'a>(&'a mut Vec<GoalKind>);
        impl GoalReporter<GoalKind> for Kinds<'_> {
            fn goal(&mut self, _depth: usize, kind: GoalKind, _status: Status) {
                self.0.push(kind);
            }
        }
        goal.report(0, &mut Kinds(&mut kinds));
        assert_eq!(kinds[..2], [GoalKind::AttackTarget, GoalKind::HuntTarget]);
    }

    #[test]
    fn losing_the_target_completes_and_releases_steering() {
        let mut bot = bot_at(0.0, 0.0);
        set_target(&mut bot, 100.0, 0.0, true);
        let mut goal = AttackTarget::new(bot.id());
        goal.process(&mut bot);

        bot.perception_mut().target = None;
        assert_eq!(goal.process(&mut bot), Status::Completed);
        assert!(bot.steering().flags().is_empty());
    }
}
