//! Per-bot state: kinematics, health, steering commands, inventory, perception
//! and goal history.
mod body;
mod common;
mod inventory;
mod journal;
mod perception;
mod steering;

pub use body::BotBody;
pub use common::{EntityId, ItemId, Tick};
pub use inventory::{Inventory, WeaponKind};
pub use journal::{GoalJournal, JournalEntry};
pub use perception::{ItemKind, ItemSighting, Perception, Pickup, TargetInfo};
pub use steering::{Steering, SteeringFlags};
