//! Normalized bot features read by the evaluators.
//!
//! Every feature maps some aspect of the bot's state into `[0, 1]` so that
//! evaluators can combine them without caring about units.
//!
//! # Features
//!
//! - **health**: current health over maximum
//! - **distance_to_item**: path cost to the closest reachable item of a kind,
//!   relative to [`MAX_ITEM_DISTANCE`]
//! - **individual_weapon_strength**: rounds held over the weapon's maximum
//! - **total_weapon_strength**: average strength over every weapon, with the
//!   blaster always counting as full strength

use raven_core::{BotBody, ItemKind, WeaponKind};
use strum::IntoEnumIterator;

/// Path cost at which an item counts as maximally far away.
pub const MAX_ITEM_DISTANCE: f64 = 500.0;

/// Health fraction in `[0, 1]`.
pub fn health(bot: &BotBody) -> f64 {
    bot.health_fraction()
}

/// Distance feature for the closest reachable item of `kind`.
///
/// Returns `None` when no item of that kind is known and reachable. Otherwise
/// returns `path cost / MAX_ITEM_DISTANCE` clamped into `(0, 1]`; an item the
/// bot is standing on yields the smallest positive value so callers can divide
/// by it safely.
pub fn distance_to_item(bot: &BotBody, kind: ItemKind) -> Option<f64> {
    let (_, cost) = bot.closest_item(kind)?;
    Some((cost / MAX_ITEM_DISTANCE).clamp(f64::MIN_POSITIVE, 1.0))
}

/// Rounds held for `weapon` relative to its maximum, in `[0, 1]`.
///
/// Weapons the bot does not hold score 0; the blaster always scores 1.
pub fn individual_weapon_strength(bot: &BotBody, weapon: WeaponKind) -> f64 {
    let Some(rounds) = bot.inventory().rounds(weapon) else {
        return 0.0;
    };
    match weapon.max_rounds() {
        None => 1.0,
        Some(max) => (f64::from(rounds) / f64::from(max)).clamp(0.0, 1.0),
    }
}

/// Average strength over all weapons, in `[0, 1]`.
///
/// A bot carrying only the blaster scores `0.25`; a bot with every weapon
/// fully loaded scores `1.0`.
pub fn total_weapon_strength(bot: &BotBody) -> f64 {
    let (sum, count) = WeaponKind::iter()
        .map(|weapon| individual_weapon_strength(bot, weapon))
        .fold((0.0, 0u32), |(sum, count), strength| (sum + strength, count + 1));
    sum / f64::from(count)
}
