//! Weapons and damage.
//!
//! Bots aim at their current target whenever it is visible. Shots hit
//! instantly; the weapon used is the hardest-hitting ready weapon whose range
//! covers the distance to the target.

use raven_core::{EntityId, Tick, Vector2D, WeaponKind};

use crate::{Bot, RuntimeConfig, WorldEvent};

/// Damage, range and rate of fire of a weapon.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeaponStats {
    pub damage: i32,
    pub range: f64,
    pub cooldown_ticks: u64,
}

impl WeaponStats {
    pub const fn of(weapon: WeaponKind) -> Self {
        match weapon {
            WeaponKind::Blaster => Self {
                damage: 2,
                range: 300.0,
                cooldown_ticks: 20,
            },
            WeaponKind::Shotgun => Self {
                damage: 8,
                range: 150.0,
                cooldown_ticks: 60,
            },
            WeaponKind::RocketLauncher => Self {
                damage: 12,
                range: 400.0,
                cooldown_ticks: 90,
            },
            WeaponKind::Railgun => Self {
                damage: 20,
                range: 600.0,
                cooldown_ticks: 120,
            },
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct Shot {
    shooter: EntityId,
    target: EntityId,
    weapon: WeaponKind,
    damage: i32,
}

/// The weapon a bot would fire at a target `distance` away, if any.
pub fn choose_weapon(bot: &Bot, distance: f64) -> Option<WeaponKind> {
    bot.body
        .inventory()
        .ready_weapons()
        .filter(|weapon| WeaponStats::of(*weapon).range >= distance)
        .max_by_key(|weapon| WeaponStats::of(*weapon).damage)
}

/// Fires every ready weapon aimed at a visible target, then applies damage.
pub(crate) fn update(
    bots: &mut [Bot],
    config: &RuntimeConfig,
    now: Tick,
    events: &mut Vec<WorldEvent>,
) {
    let shots: Vec<Shot> = bots
        .iter_mut()
        .filter(|bot| bot.is_alive() && now >= bot.next_shot)
        .filter_map(|bot| aim(bot, now))
        .collect();

    for shot in shots {
        events.push(WorldEvent::WeaponFired {
            bot: shot.shooter,
            target: shot.target,
            weapon: shot.weapon,
            damage: shot.damage,
        });

        let Some(victim) = bots
            .iter_mut()
            .find(|bot| bot.id() == shot.target && bot.is_alive())
        else {
            continue;
        };
        if !victim.body.take_damage(shot.damage) {
            continue;
        }

        kill(victim, config, now);
        events.push(WorldEvent::BotKilled {
            bot: shot.target,
            killer: Some(shot.shooter),
        });
        if let Some(killer) = bots.iter_mut().find(|bot| bot.id() == shot.shooter) {
            killer.stats.kills += 1;
        }
        tracing::info!(bot = %shot.target, killer = %shot.shooter, weapon = %shot.weapon, "bot killed");
    }
}

fn aim(bot: &mut Bot, now: Tick) -> Option<Shot> {
    let target = bot.body.perception().target.filter(|target| target.visible)?;
    let distance = bot.body.position().distance(target.last_sensed_position);
    let weapon = choose_weapon(bot, distance)?;

    if !bot.body.inventory_mut().consume_round(weapon) {
        return None;
    }
    let stats = WeaponStats::of(weapon);
    bot.next_shot = now + stats.cooldown_ticks;

    tracing::trace!(bot = %bot.id(), target = %target.id, %weapon, "fire");
    Some(Shot {
        shooter: bot.id(),
        target: target.id,
        weapon,
        damage: stats.damage,
    })
}

/// Takes a bot out of play until its respawn tick.
pub(crate) fn kill(bot: &mut Bot, config: &RuntimeConfig, now: Tick) {
    bot.body.set_health(0);
    bot.body.set_velocity(Vector2D::ZERO);
    bot.brain.reset(&mut bot.body);
    bot.body.steering_mut().clear();
    bot.stats.deaths += 1;
    bot.respawn_at = Some(now + config.bot_respawn_ticks);
}
