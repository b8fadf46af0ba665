//! Item triggers: health packs and weapon pickups.

use raven_core::{ItemId, ItemKind, ItemSighting, Tick, Vector2D};

use crate::{Bot, RuntimeConfig, WorldEvent};

/// Distance from the trigger center at which a bot touches it, on top of the
/// bot's bounding radius.
pub const TRIGGER_RADIUS: f64 = 10.0;

/// Health restored by a health pack.
pub const HEALTH_GIVEN: i32 = 50;

/// Collected item ids remembered per bot.
const COLLECTED_MEMORY: usize = 16;

/// An item placed in the world. Inactive after pickup until it respawns.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemTrigger {
    id: ItemId,
    kind: ItemKind,
    position: Vector2D,
    respawn_at: Option<Tick>,
}

impl ItemTrigger {
    pub fn new(id: ItemId, kind: ItemKind, position: Vector2D) -> Self {
        Self {
            id,
            kind,
            position,
            respawn_at: None,
        }
    }

    pub fn id(&self) -> ItemId {
        self.id
    }

    pub fn kind(&self) -> ItemKind {
        self.kind
    }

    pub fn position(&self) -> Vector2D {
        self.position
    }

    pub fn is_active(&self) -> bool {
        self.respawn_at.is_none()
    }

    /// Tick at which an inactive trigger comes back.
    pub fn respawn_at(&self) -> Option<Tick> {
        self.respawn_at
    }

    pub fn sighting(&self) -> ItemSighting {
        ItemSighting {
            id: self.id,
            kind: self.kind,
            position: self.position,
        }
    }

    fn is_touched_by(&self, bot: &Bot) -> bool {
        let reach = TRIGGER_RADIUS + bot.body.bounding_radius();
        bot.body.position().distance_sq(self.position) <= reach * reach
    }
}

/// Respawns due triggers, then lets living bots pick up active ones.
pub(crate) fn update(
    bots: &mut [Bot],
    items: &mut [ItemTrigger],
    config: &RuntimeConfig,
    now: Tick,
    events: &mut Vec<WorldEvent>,
) {
    for item in items.iter_mut() {
        if item.respawn_at.is_some_and(|at| at <= now) {
            item.respawn_at = None;
            tracing::debug!(item = %item.id, kind = %item.kind, "item respawned");
            events.push(WorldEvent::ItemRespawned { item: item.id });
        }
    }

    for item in items.iter_mut().filter(|item| item.is_active()) {
        let Some(bot) = bots
            .iter_mut()
            .find(|bot| bot.is_alive() && item.is_touched_by(bot))
        else {
            continue;
        };

        give(bot, item.kind);
        bot.body
            .perception_mut()
            .record_pickup(item.id, COLLECTED_MEMORY);

        item.respawn_at = Some(now + config.item_respawn_ticks);
        tracing::info!(bot = %bot.id(), item = %item.id, kind = %item.kind, "item picked up");
        events.push(WorldEvent::ItemPickedUp {
            bot: bot.id(),
            item: item.id,
            kind: item.kind,
        });
    }
}

fn give(bot: &mut Bot, kind: ItemKind) {
    match kind.weapon() {
        Some(weapon) => bot
            .body
            .inventory_mut()
            .add_rounds(weapon, weapon.pickup_rounds()),
        None => bot.body.heal(HEALTH_GIVEN),
    }
}
