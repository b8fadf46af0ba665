use strum::{Display, EnumIter};

use crate::{EntityId, ItemId, Tick, Vector2D, WeaponKind};

/// Kinds of item triggers placed in the world.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, EnumIter)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ItemKind {
    Health,
    Shotgun,
    RocketLauncher,
    Railgun,
}

impl ItemKind {
    /// The weapon this item gives, if any.
    pub const fn weapon(self) -> Option<WeaponKind> {
        match self {
            ItemKind::Health => None,
            ItemKind::Shotgun => Some(WeaponKind::Shotgun),
            ItemKind::RocketLauncher => Some(WeaponKind::RocketLauncher),
            ItemKind::Railgun => Some(WeaponKind::Railgun),
        }
    }
}

/// An active item trigger the bot knows about.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemSighting {
    pub id: ItemId,
    pub kind: ItemKind,
    pub position: Vector2D,
}

/// The opponent currently selected by the targeting system.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TargetInfo {
    pub id: EntityId,
    /// Where the target was when last seen (or its current position if visible).
    pub last_sensed_position: Vector2D,
    pub last_sensed_at: Tick,
    /// Target is within view distance and line of sight this tick.
    pub visible: bool,
}

/// One item pickup, numbered in the order the bot made them.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Pickup {
    pub item: ItemId,
    pub serial: u64,
}

/// What the bot knows about the world, refreshed by the runtime each tick.
///
/// Goals and evaluators only read perception; they never query the world.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Perception {
    pub target: Option<TargetInfo>,
    pub items: Vec<ItemSighting>,
    /// Recent pickups, oldest first. Cleared on respawn.
    pub collected: Vec<Pickup>,
    /// Pickups made since the last respawn. Item triggers keep their id when
    /// they respawn, so goals compare serials rather than ids alone.
    pub pickups: u64,
}

impl Perception {
    pub fn is_target_present(&self) -> bool {
        self.target.is_some()
    }

    pub fn has_visible_target(&self) -> bool {
        self.target.is_some_and(|target| target.visible)
    }

    /// True if the item trigger is still active.
    pub fn is_item_available(&self, id: ItemId) -> bool {
        self.items.iter().any(|item| item.id == id)
    }

    /// Records a pickup, keeping at most `memory` recent entries.
    pub fn record_pickup(&mut self, item: ItemId, memory: usize) {
        self.collected.push(Pickup {
            item,
            serial: self.pickups,
        });
        self.pickups += 1;
        if self.collected.len() > memory {
            let excess = self.collected.len() - memory;
            self.collected.drain(..excess);
        }
    }

    /// True if `item` was picked up at or after pickup number `since`.
    ///
    /// Pass the value of [`pickups`](Self::pickups) taken when a fetch
    /// started to ignore earlier pickups of the same trigger.
    pub fn has_collected_since(&self, item: ItemId, since: u64) -> bool {
        self.collected
            .iter()
            .rev()
            .take_while(|pickup| pickup.serial >= since)
            .any(|pickup| pickup.item == item)
    }

    pub fn items_of_kind(&self, kind: ItemKind) -> impl Iterator<Item = &ItemSighting> + '_ {
        self.items.iter().filter(move |item| item.kind == kind)
    }
}
