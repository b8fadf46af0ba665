use goal_tree::{Goal, GoalReporter, Status, Subgoals};
use raven_core::{BotBody, EntityId, GoalKind, ItemId, ItemKind};

use super::FollowPath;

/// Travels to the closest reachable item of a kind.
///
/// # Outcomes
///
/// - `Failed` on activation when no item of the kind is known and reachable
/// - `Failed` when the chosen item is taken by someone else before arrival
/// - `Completed` once the bot picked the item up or the path is done
pub struct GetItem {
    owner: EntityId,
    status: Status,
    item_kind: ItemKind,
    item: Option<ItemId>,
    /// Pickup count when the fetch started; earlier pickups do not count.
    pickups_at_start: u64,
    subgoals: Subgoals<BotBody>,
}

impl GetItem {
    pub fn new(owner: EntityId, item_kind: ItemKind) -> Self {
        Self {
            owner,
            status: Status::Inactive,
            item_kind,
            item: None,
            pickups_at_start: 0,
            subgoals: Subgoals::new(),
        }
    }

    pub fn item_kind(&self) -> ItemKind {
        self.item_kind
    }

    /// The item being fetched, once activated.
    pub fn item(&self) -> Option<ItemId> {
        self.item
    }

    fn has_picked_up_item(&self, bot: &BotBody) -> bool {
        self.item
            .is_some_and(|id| bot.perception().has_collected_since(id, self.pickups_at_start))
    }

    fn has_item_been_stolen(&self, bot: &BotBody) -> bool {
        self.item
            .is_some_and(|id| !bot.perception().is_item_available(id))
            && !self.has_picked_up_item(bot)
    }
}

impl Goal<BotBody> for GetItem {
    fn kind(&self) -> GoalKind {
        GoalKind::get_item(self.item_kind)
    }

    fn status(&self) -> Status {
        self.status
    }

    fn activate(&mut self, bot: &mut BotBody) {
        if self.status.is_active() {
            return;
        }
        self.subgoals.remove_all(bot);

        let planned = bot.closest_item(self.item_kind).and_then(|(item, _)| {
            bot.plan_path(item.position).map(|path| (item, path))
        });

        match planned {
            Some((item, path)) => {
                tracing::debug!(
                    bot = %self.owner,
                    kind = %self.item_kind,
                    position = %item.position,
                    "fetching item"
                );
                self.status = Status::Active;
                self.item = Some(item.id);
                self.pickups_at_start = bot.perception().pickups;
                self.subgoals
                    .push_front(Box::new(FollowPath::new(self.owner, path)));
            }
            None => {
                tracing::debug!(bot = %self.owner, kind = %self.item_kind, "no reachable item");
                self.status = Status::Failed;
            }
        }
    }

    fn process(&mut self, bot: &mut BotBody) -> Status {
        self.activate_if_inactive(bot);
        if self.status.is_failed() {
            return self.status;
        }

        if self.has_picked_up_item(bot) {
            self.status = Status::Completed;
        } else if self.has_item_been_stolen(bot) {
            tracing::debug!(bot = %self.owner, kind = %self.item_kind, "item gone before pickup");
            self.status = Status::Failed;
        } else {
            self.status = self.subgoals.process(bot);
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
    use raven_core::Vector2D;

    use super::*;
    use crate::testing::{add_item, bot_at};

    #[test]
    fn no_known_item_fails() {
        let mut bot = bot_at(0.0, 0.0);
        let mut goal = GetItem::new(bot.id(), ItemKind::Health);

        assert_eq!(goal.process(&mut bot), Status::Failed);
        assert_eq!(goal.kind(), GoalKind::GetHealth);
    }

    #[test]
    fn picks_the_closest_item() {
        let mut bot = bot_at(0.0, 0.0);
        add_item(&mut bot, 1, ItemKind::Railgun, 300.0, 0.0);
        add_item(&mut bot, 2, ItemKind::Railgun, 0.0, 100.0);
        add_item(&mut bot, 3, ItemKind::Health, 10.0, 0.0);
        let mut goal = GetItem::new(bot.id(), ItemKind::Railgun);

        assert_eq!(goal.process(&mut bot), Status::Active);
        assert_eq!(goal.item(), Some(ItemId(2)));
        assert_eq!(goal.kind(), GoalKind::GetRailgun);
    }

    #[test]
    fn stolen_item_fails() {
        let mut bot = bot_at(0.0, 0.0);
        add_item(&mut bot, 1, ItemKind::Shotgun, 200.0, 0.0);
        let mut goal = GetItem::new(bot.id(), ItemKind::Shotgun);
        goal.process(&mut bot);

        bot.perception_mut().items.clear();
        assert_eq!(goal.process(&mut bot), Status::Failed);

        goal.terminate(&mut bot);
        assert!(bot.steering().flags().is_empty());
    }

    #[test]
    fn pickup_completes() {
        let mut bot = bot_at(0.0, 0.0);
        add_item(&mut bot, 7, ItemKind::Health, 200.0, 0.0);
        let mut goal = GetItem::new(bot.id(), ItemKind::Health);
        goal.process(&mut bot);

        bot.set_position(Vector2D::new(200.0, 0.0));
        bot.perception_mut().items.clear();
        bot.perception_mut().record_pickup(ItemId(7), 16);
        assert_eq!(goal.process(&mut bot), Status::Completed);
    }

    #[test]
    fn earlier_pickup_of_a_respawned_item_does_not_complete() {
        let mut bot = bot_at(0.0, 0.0);
        bot.perception_mut().record_pickup(ItemId(7), 16);
        add_item(&mut bot, 7, ItemKind::Health, 200.0, 0.0);
        let mut goal = GetItem::new(bot.id(), ItemKind::Health);

        assert_eq!(goal.process(&mut bot), Status::Active);
        assert_eq!(goal.item(), Some(ItemId(7)));
        assert_eq!(goal.process(&mut bot), Status::Active);

        bot.perception_mut().items.clear();
        bot.perception_mut().record_pickup(ItemId(7), 16);
        assert_eq!(goal.process(&mut bot), Status::Completed);
    }

    #[test]
    fn item_taken_and_respawned_while_fetching_fails() {
        let mut bot = bot_at(0.0, 0.0);
        add_item(&mut bot, 4, ItemKind::RocketLauncher, 300.0, 0.0);
        let mut goal = GetItem::new(bot.id(), ItemKind::RocketLauncher);
        assert_eq!(goal.process(&mut bot), Status::Active);

        // Another bot grabs it; the trigger goes inactive.
        bot.perception_mut().items.clear();
        assert_eq!(goal.process(&mut bot), Status::Failed);

        // Respawned under the same id, a fresh fetch targets it again.
        add_item(&mut bot, 4, ItemKind::RocketLauncher, 300.0, 0.0);
        let mut again = GetItem::new(bot.id(), ItemKind::RocketLauncher);
        assert_eq!(again.process(&mut bot), Status::Active);
        assert_eq!(again.item(), Some(ItemId(4)));
    }
}
