use strum::{Display, EnumIter, IntoEnumIterator};

use crate::ItemKind;

/// Weapons a bot can carry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Display, EnumIter)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum WeaponKind {
    /// Default sidearm with unlimited ammunition.
    Blaster,
    Shotgun,
    RocketLauncher,
    Railgun,
}

impl WeaponKind {
    /// Maximum rounds a bot can carry, `None` for unlimited.
    pub const fn max_rounds(self) -> Option<u32> {
        match self {
            WeaponKind::Blaster => None,
            WeaponKind::Shotgun => Some(50),
            WeaponKind::RocketLauncher => Some(50),
            WeaponKind::Railgun => Some(50),
        }
    }

    /// Rounds granted by picking up this weapon.
    pub const fn pickup_rounds(self) -> u32 {
        match self {
            WeaponKind::Blaster => 0,
            WeaponKind::Shotgun => 15,
            WeaponKind::RocketLauncher => 15,
            WeaponKind::Railgun => 15,
        }
    }

    /// The item that gives this weapon, if it can be picked up.
    pub const fn item(self) -> Option<ItemKind> {
        match self {
            WeaponKind::Blaster => None,
            WeaponKind::Shotgun => Some(ItemKind::Shotgun),
            WeaponKind::RocketLauncher => Some(ItemKind::RocketLauncher),
            WeaponKind::Railgun => Some(ItemKind::Railgun),
        }
    }
}

/// Weapons carried by a bot and their remaining rounds.
///
/// The blaster is always held. Other weapons are held once picked up and keep
/// their slot even when their rounds run out.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Inventory {
    shotgun: Option<u32>,
    rocket_launcher: Option<u32>,
    railgun: Option<u32>,
}

impl Inventory {
    /// Inventory holding only the blaster.
    pub const fn new() -> Self {
        Self {
            shotgun: None,
            rocket_launcher: None,
            railgun: None,
        }
    }

    fn slot(&self, weapon: WeaponKind) -> Option<u32> {
        match weapon {
            WeaponKind::Blaster => Some(u32::MAX),
            WeaponKind::Shotgun => self.shotgun,
            WeaponKind::RocketLauncher => self.rocket_launcher,
            WeaponKind::Railgun => self.railgun,
        }
    }

    fn slot_mut(&mut self, weapon: WeaponKind) -> Option<&mut Option<u32>> {
        match weapon {
            WeaponKind::Blaster => None,
            WeaponKind::Shotgun => Some(&mut self.shotgun),
            WeaponKind::RocketLauncher => Some(&mut self.rocket_launcher),
            WeaponKind::Railgun => Some(&mut self.railgun),
        }
    }

    pub fn has_weapon(&self, weapon: WeaponKind) -> bool {
        self.slot(weapon).is_some()
    }

    /// Remaining rounds, `None` if the weapon is not held. The blaster reports
    /// `u32::MAX`.
    pub fn rounds(&self, weapon: WeaponKind) -> Option<u32> {
        self.slot(weapon)
    }

    /// True if the weapon is held and can fire.
    pub fn can_fire(&self, weapon: WeaponKind) -> bool {
        self.slot(weapon).is_some_and(|rounds| rounds > 0)
    }

    /// Adds a weapon (or rounds for an already held one), capped at the
    /// weapon's maximum.
    pub fn add_rounds(&mut self, weapon: WeaponKind, rounds: u32) {
        let Some(max) = weapon.max_rounds() else {
            return;
        };
        if let Some(slot) = self.slot_mut(weapon) {
            let current = slot.unwrap_or(0);
            *slot = Some(current.saturating_add(rounds).min(max));
        }
    }

    /// Consumes one round. Returns false if the weapon cannot fire.
    pub fn consume_round(&mut self, weapon: WeaponKind) -> bool {
        match self.slot_mut(weapon) {
            None => true,
            Some(Some(rounds)) if *rounds > 0 => {
                *rounds -= 1;
                true
            }
            Some(_) => false,
        }
    }

    /// Held weapons that can fire.
    pub fn ready_weapons(&self) -> impl Iterator<Item = WeaponKind> + '_ {
        WeaponKind::iter().filter(|weapon| self.can_fire(*weapon))
    }
}

impl Default for Inventory {
    fn default() -> Self {
        Self::new()
    }
}
