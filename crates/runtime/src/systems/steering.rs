//! Turns the steering behaviors switched on by goals into motion.
//!
//! Velocity is recomputed from scratch every tick as the sum of the active
//! behaviors, truncated to the bot's max speed. A move that would leave the
//! navigable arena is cancelled.

use rand::Rng;
use raven_core::{OpenFieldPlanner, PathPlanner, SteeringFlags, Vector2D};

use crate::Bot;

/// Larger values make arrive slow down earlier.
pub const ARRIVE_DECELERATION: f64 = 4.0;

/// Radius of the wander circle, in units of max speed.
pub const WANDER_RADIUS: f64 = 1.2;

/// Distance of the wander circle ahead of the bot, in units of max speed.
pub const WANDER_DISTANCE: f64 = 2.0;

/// Maximum random displacement of the wander target per tick.
pub const WANDER_JITTER: f64 = 0.3;

/// Computes and stores the bot's velocity for this tick.
pub(crate) fn steer(bot: &mut Bot) {
    let steering = *bot.body.steering();
    let position = bot.body.position();
    let max_speed = bot.body.max_speed();

    let mut desired = Vector2D::ZERO;
    if steering.is_on(SteeringFlags::SEEK) {
        desired += seek(position, steering.target(), max_speed);
    }
    if steering.is_on(SteeringFlags::ARRIVE) {
        desired += arrive(position, steering.target(), max_speed);
    }
    if steering.is_on(SteeringFlags::WANDER) {
        desired += wander(bot);
    }

    bot.body.set_velocity(desired);
}

/// Moves the bot by its velocity if the destination is navigable.
pub(crate) fn integrate(bot: &mut Bot, planner: &OpenFieldPlanner) {
    let from = bot.body.position();
    let to = from + bot.body.velocity();
    if to == from {
        return;
    }

    if planner.is_navigable(to) && planner.line_of_sight(from, to) {
        bot.body.set_position(to);
    } else {
        bot.body.set_velocity(Vector2D::ZERO);
        // Turn the wander circle around so a wandering bot leaves the wall.
        bot.wander_target = -bot.wander_target;
    }
}

fn seek(position: Vector2D, target: Vector2D, max_speed: f64) -> Vector2D {
    (target - position).normalize() * max_speed
}

fn arrive(position: Vector2D, target: Vector2D, max_speed: f64) -> Vector2D {
    let to_target = target - position;
    let distance = to_target.length();
    if distance <= f64::EPSILON {
        return Vector2D::ZERO;
    }
    let speed = (distance / ARRIVE_DECELERATION).min(max_speed);
    to_target * (speed / distance)
}

fn wander(bot: &mut Bot) -> Vector2D {
    let max_speed = bot.body.max_speed();
    let heading = bot.body.heading();
    let rng = bot.body.rng_mut();
    let jitter = Vector2D::new(
        rng.gen_range(-1.0..=1.0) * WANDER_JITTER,
        rng.gen_range(-1.0..=1.0) * WANDER_JITTER,
    );

    let mut target = (bot.wander_target + jitter).normalize();
    if target == Vector2D::ZERO {
        target = heading;
    }
    bot.wander_target = target;

    let local = heading * WANDER_DISTANCE + target * WANDER_RADIUS;
    local.normalize() * max_speed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seek_moves_at_full_speed() {
        let velocity = seek(Vector2D::ZERO, Vector2D::new(10.0, 0.0), 2.0);
        assert_eq!(velocity, Vector2D::new(2.0, 0.0));
    }

    #[test]
    fn arrive_slows_down_near_the_target() {
        let far = arrive(Vector2D::ZERO, Vector2D::new(100.0, 0.0), 1.0);
        let near = arrive(Vector2D::ZERO, Vector2D::new(2.0, 0.0), 1.0);
        assert_eq!(far, Vector2D::new(1.0, 0.0));
        assert!((near.x - 0.5).abs() < 1e-9);
        assert_eq!(arrive(Vector2D::ZERO, Vector2D::ZERO, 1.0), Vector2D::ZERO);
    }
}
