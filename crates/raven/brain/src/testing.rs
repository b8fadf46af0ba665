//! Fixtures shared by unit tests.

use std::sync::Arc;

use raven_core::{
    BotBody, EntityId, ItemId, ItemKind, ItemSighting, OpenFieldPlanner, Rect, TargetInfo, Tick,
    Vector2D,
};

/// Obstacle-free arena spanning -1000..1000 on both axes.
pub fn arena() -> Arc<OpenFieldPlanner> {
    Arc::new(OpenFieldPlanner::new(Rect::new(
        Vector2D::new(-1000.0, -1000.0),
        Vector2D::new(1000.0, 1000.0),
    )))
}

pub fn bot_at(x: f64, y: f64) -> BotBody {
    BotBody::new(EntityId(1), Vector2D::new(x, y), arena())
}

pub fn add_item(bot: &mut BotBody, id: u32, kind: ItemKind, x: f64, y: f64) {
    bot.perception_mut().items.push(ItemSighting {
        id: ItemId(id),
        kind,
        position: Vector2D::new(x, y),
    });
}

pub fn set_target(bot: &mut BotBody, x: f64, y: f64, visible: bool) {
    bot.perception_mut().target = Some(TargetInfo {
        id: EntityId(2),
        last_sensed_position: Vector2D::new(x, y),
        last_sensed_at: Tick::ZERO,
        visible,
    });
}
