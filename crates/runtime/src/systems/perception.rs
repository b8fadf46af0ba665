//! Sensing and targeting.
//!
//! Each tick every living bot learns which item triggers are active and picks
//! a target among the opponents it can see. A target that slips out of view
//! is remembered at its last sensed position for a while so the bot can hunt
//! it down.

use raven_core::{
    EntityId, ItemSighting, OpenFieldPlanner, PathPlanner, TargetInfo, Tick, Vector2D,
};

use crate::{Bot, ItemTrigger, RuntimeConfig};

/// Where a living bot stands this tick.
#[derive(Debug, Clone, Copy)]
struct Presence {
    id: EntityId,
    position: Vector2D,
}

/// Refreshes the perception of every living bot.
pub(crate) fn sense(
    bots: &mut [Bot],
    items: &[ItemTrigger],
    planner: &OpenFieldPlanner,
    config: &RuntimeConfig,
    now: Tick,
) {
    let living: Vec<Presence> = bots
        .iter()
        .filter(|bot| bot.is_alive())
        .map(|bot| Presence {
            id: bot.id(),
            position: bot.body.position(),
        })
        .collect();

    let active_items: Vec<ItemSighting> = items
        .iter()
        .filter(|item| item.is_active())
        .map(ItemTrigger::sighting)
        .collect();

    for bot in bots.iter_mut().filter(|bot| bot.is_alive()) {
        bot.body.perception_mut().items.clone_from(&active_items);

        let target = select_target(bot, &living, planner, config, now);
        let previous = bot.body.perception().target.map(|target| target.id);
        if let Some(target) = target.filter(|target| previous != Some(target.id)) {
            tracing::debug!(bot = %bot.id(), target = %target.id, "target acquired");
        }
        bot.body.perception_mut().target = target;
    }
}

fn select_target(
    bot: &Bot,
    living: &[Presence],
    planner: &OpenFieldPlanner,
    config: &RuntimeConfig,
    now: Tick,
) -> Option<TargetInfo> {
    let position = bot.body.position();
    let view_sq = config.view_distance * config.view_distance;

    let closest_visible = living
        .iter()
        .filter(|other| other.id != bot.id())
        .filter(|other| position.distance_sq(other.position) <= view_sq)
        .filter(|other| planner.line_of_sight(position, other.position))
        .min_by(|a, b| {
            position
                .distance_sq(a.position)
                .total_cmp(&position.distance_sq(b.position))
        });

    if let Some(other) = closest_visible {
        return Some(TargetInfo {
            id: other.id,
            last_sensed_position: other.position,
            last_sensed_at: now,
            visible: true,
        });
    }

    // Keep hunting a remembered target while it lives and memory is fresh.
    let remembered = bot.body.perception().target?;
    let alive = living.iter().any(|other| other.id == remembered.id);
    let fresh = now.0.saturating_sub(remembered.last_sensed_at.0) <= config.target_memory_ticks;
    (alive && fresh).then_some(TargetInfo {
        visible: false,
        ..remembered
    })
}
