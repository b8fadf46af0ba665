//! Events emitted by the world while ticking.
//!
//! Events describe what happened during a tick at a level useful to clients
//! (logs, reports, tests). The world never reacts to its own events.

use raven_core::{EntityId, GoalKind, ItemId, ItemKind, Tick, WeaponKind};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum WorldEvent {
    /// A bot's top-level goal changed.
    GoalChanged {
        bot: EntityId,
        from: Option<GoalKind>,
        to: Option<GoalKind>,
    },

    /// A bot picked up an item.
    ItemPickedUp {
        bot: EntityId,
        item: ItemId,
        kind: ItemKind,
    },

    /// An item trigger became available again.
    ItemRespawned { item: ItemId },

    /// A bot fired at its target.
    WeaponFired {
        bot: EntityId,
        target: EntityId,
        weapon: WeaponKind,
        damage: i32,
    },

    /// A bot's health reached zero.
    BotKilled {
        bot: EntityId,
        killer: Option<EntityId>,
    },

    /// A dead bot re-entered the world.
    BotRespawned { bot: EntityId },
}

/// Events of one tick.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TickReport {
    pub tick: Tick,
    pub events: Vec<WorldEvent>,
}
