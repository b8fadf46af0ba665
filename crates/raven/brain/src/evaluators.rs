//! Goal evaluators and their scoring functions.
//!
//! An evaluator scores how desirable one top-level goal is for a bot right
//! now and, when it wins arbitration, installs that goal on the bot's
//! [`Think`] layer. Evaluators are plain data: a variant of
//! [`EvaluatorKind`] plus an immutable bias.
//!
//! # Scores (before bias, clamped to `[0, 1]`)
//!
//! - **Explore**: constant `0.05`, the fallback when nothing else matters
//! - **AttackTarget**: `health × total weapon strength` while a target exists
//! - **GetHealth**: `0.2 × (1 − health) / distance` to the closest health item
//! - **GetWeapon**: `0.15 × health × (1 − weapon strength) / distance` to the
//!   closest item giving that weapon

use core::fmt;

use goal_tree::{GoalReporter, clamp_unit};
use raven_core::{BiasProfile, BotBody, ItemKind, WeaponKind};

use crate::{Think, features};

/// Desirability of exploring. Low on purpose: any other worthwhile goal wins.
pub const EXPLORE_DESIRABILITY: f64 = 0.05;

/// Tweaker applied to the health evaluator.
pub const HEALTH_TWEAKER: f64 = 0.2;

/// Tweaker applied to every weapon evaluator.
pub const WEAPON_TWEAKER: f64 = 0.15;

/// An evaluator defined outside this crate.
///
/// `score` must be a pure function of bot state; `install` puts the matching
/// goal on the bot's think layer.
#[derive(Clone, Copy, Debug)]
pub struct CustomEvaluator {
    pub label: &'static str,
    pub score: fn(&BotBody) -> f64,
    pub install: fn(&mut Think, &mut BotBody),
}

/// The closed set of evaluator variants.
#[derive(Clone, Copy, Debug)]
pub enum EvaluatorKind {
    Explore,
    AttackTarget,
    GetHealth,
    /// Fetch the closest item giving this weapon.
    GetWeapon(WeaponKind),
    Custom(CustomEvaluator),
}

impl EvaluatorKind {
    /// Short name used in logs and diagnostics.
    pub fn label(&self) -> &'static str {
        match self {
            EvaluatorKind::Explore => "explore",
            EvaluatorKind::AttackTarget => "attack_target",
            EvaluatorKind::GetHealth => "get_health",
            EvaluatorKind::GetWeapon(WeaponKind::Blaster) => "get_blaster",
            EvaluatorKind::GetWeapon(WeaponKind::Shotgun) => "get_shotgun",
            EvaluatorKind::GetWeapon(WeaponKind::RocketLauncher) => "get_rocket_launcher",
            EvaluatorKind::GetWeapon(WeaponKind::Railgun) => "get_railgun",
            EvaluatorKind::Custom(custom) => custom.label,
        }
    }
}

impl fmt::Display for EvaluatorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// An evaluator variant together with its bias.
#[derive(Clone, Copy, Debug)]
pub struct GoalEvaluator {
    kind: EvaluatorKind,
    bias: f64,
}

impl GoalEvaluator {
    pub const fn new(kind: EvaluatorKind, bias: f64) -> Self {
        Self { kind, bias }
    }

    /// The standard evaluator set, in declaration order, biased by `biases`.
    pub fn standard_set(biases: &BiasProfile) -> Vec<Self> {
        vec![
            Self::new(EvaluatorKind::GetHealth, biases.get_health),
            Self::new(EvaluatorKind::Explore, biases.explore),
            Self::new(EvaluatorKind::AttackTarget, biases.attack_target),
            Self::new(
                EvaluatorKind::GetWeapon(WeaponKind::Shotgun),
                biases.get_shotgun,
            ),
            Self::new(
                EvaluatorKind::GetWeapon(WeaponKind::RocketLauncher),
                biases.get_rocket_launcher,
            ),
            Self::new(
                EvaluatorKind::GetWeapon(WeaponKind::Railgun),
                biases.get_railgun,
            ),
        ]
    }

    pub fn kind(&self) -> EvaluatorKind {
        self.kind
    }

    pub fn bias(&self) -> f64 {
        self.bias
    }

    pub fn label(&self) -> &'static str {
        self.kind.label()
    }

    /// Biased desirability of this evaluator's goal. Reads the bot only.
    pub fn calculate_desirability(&self, bot: &BotBody) -> f64 {
        clamp_unit(self.base_desirability(bot)) * self.bias
    }

    /// Un-biased score before clamping.
    pub fn base_desirability(&self, bot: &BotBody) -> f64 {
        match self.kind {
            EvaluatorKind::Explore => EXPLORE_DESIRABILITY,
            EvaluatorKind::AttackTarget => attack_target(bot),
            EvaluatorKind::GetHealth => get_health(bot),
            EvaluatorKind::GetWeapon(weapon) => get_weapon(bot, weapon),
            EvaluatorKind::Custom(custom) => (custom.score)(bot),
        }
    }

    /// Installs this evaluator's goal on `think`.
    pub fn set_goal(&self, think: &mut Think, bot: &mut BotBody) {
        match self.kind {
            EvaluatorKind::Explore => think.add_goal_explore(bot),
            EvaluatorKind::AttackTarget => think.add_goal_attack_target(bot),
            EvaluatorKind::GetHealth => think.add_goal_get_item(bot, ItemKind::Health),
            EvaluatorKind::GetWeapon(weapon) => match weapon.item() {
                Some(item) => think.add_goal_get_item(bot, item),
                None => think.add_goal_explore(bot),
            },
            EvaluatorKind::Custom(custom) => (custom.install)(think, bot),
        }
    }

    /// Reports the current desirability to a diagnostics reporter.
    pub fn report<K>(&self, bot: &BotBody, reporter: &mut dyn GoalReporter<K>) {
        reporter.evaluation(self.label(), self.calculate_desirability(bot));
    }
}

fn attack_target(bot: &BotBody) -> f64 {
    if !bot.is_target_present() {
        return 0.0;
    }
    features::health(bot) * features::total_weapon_strength(bot)
}

fn get_health(bot: &BotBody) -> f64 {
    let health = features::health(bot);
    if health >= 1.0 {
        return 0.0;
    }
    match features::distance_to_item(bot, ItemKind::Health) {
        Some(distance) => HEALTH_TWEAKER * (1.0 - health) / distance,
        None => 0.0,
    }
}

fn get_weapon(bot: &BotBody, weapon: WeaponKind) -> f64 {
    let Some(item) = weapon.item() else {
        return 0.0;
    };
    match features::distance_to_item(bot, item) {
        Some(distance) => {
            let strength = features::individual_weapon_strength(bot, weapon);
            WEAPON_TWEAKER * features::health(bot) * (1.0 - strength) / distance
        }
        None => 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{add_item, bot_at, set_target};

    fn unbiased(kind: EvaluatorKind) -> GoalEvaluator {
        GoalEvaluator::new(kind, 1.0)
    }

    #[test]
    fn explore_is_constant() {
        let bot = bot_at(0.0, 0.0);
        assert_eq!(
            unbiased(EvaluatorKind::Explore).calculate_desirability(&bot),
            EXPLORE_DESIRABILITY
        );
    }

    #[test]
    fn attack_requires_a_target() {
        let mut bot = bot_at(0.0, 0.0);
        let evaluator = unbiased(EvaluatorKind::AttackTarget);
        assert_eq!(evaluator.calculate_desirability(&bot), 0.0);

        set_target(&mut bot, 50.0, 0.0, true);
        assert!((evaluator.calculate_desirability(&bot) - 0.25).abs() < 1e-9);
    }

    #[test]
    fn health_score_grows_as_health_falls() {
        let mut bot = bot_at(0.0, 0.0);
        add_item(&mut bot, 1, ItemKind::Health, 100.0, 0.0);
        let evaluator = unbiased(EvaluatorKind::GetHealth);

        assert_eq!(evaluator.calculate_desirability(&bot), 0.0);

        bot.set_health(50);
        let half = evaluator.calculate_desirability(&bot);
        bot.set_health(20);
        let low = evaluator.calculate_desirability(&bot);
        assert!((half - 0.5).abs() < 1e-9);
        assert!((low - 0.8).abs() < 1e-9);
    }

    #[test]
    fn scores_are_clamped_before_bias() {
        let mut bot = bot_at(0.0, 0.0);
        add_item(&mut bot, 1, ItemKind::Health, 1.0, 0.0);
        bot.set_health(10);
        let evaluator = GoalEvaluator::new(EvaluatorKind::GetHealth, 2.0);
        assert_eq!(evaluator.calculate_desirability(&bot), 2.0);
    }

    #[test]
    fn held_weapon_lowers_desire() {
        let mut bot = bot_at(0.0, 0.0);
        add_item(&mut bot, 1, ItemKind::Railgun, 50.0, 0.0);
        let evaluator = unbiased(EvaluatorKind::GetWeapon(WeaponKind::Railgun));

        let empty = evaluator.calculate_desirability(&bot);
        bot.inventory_mut().add_rounds(WeaponKind::Railgun, 50);
        let full = evaluator.calculate_desirability(&bot);

        assert!((empty - 1.0).abs() < 1e-9);
        assert_eq!(full, 0.0);
    }

    #[test]
    fn unreachable_items_score_zero() {
        let mut bot = bot_at(0.0, 0.0);
        add_item(&mut bot, 1, ItemKind::Shotgun, 5000.0, 0.0);
        bot.set_health(10);
        add_item(&mut bot, 2, ItemKind::Health, -5000.0, 0.0);

        assert_eq!(
            unbiased(EvaluatorKind::GetWeapon(WeaponKind::Shotgun)).calculate_desirability(&bot),
            0.0
        );
        assert_eq!(unbiased(EvaluatorKind::GetHealth).calculate_desirability(&bot), 0.0);
    }

    #[test]
    fn custom_scores_are_clamped() {
        let custom = CustomEvaluator {
            label: "always",
            score: |_| 3.0,
            install: |think, bot| think.add_goal_wander(bot),
        };
        let evaluator = GoalEvaluator::new(EvaluatorKind::Custom(custom), 0.5);
        assert_eq!(evaluator.calculate_desirability(&bot_at(0.0, 0.0)), 0.5);
        assert_eq!(evaluator.label(), "always");
    }
}
