//! World configuration.

use raven_core::BrainConfig;
use serde::{Deserialize, Serialize};

use crate::error::{Result, RuntimeError};

/// Configuration shared by every system of a [`World`](crate::World).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RuntimeConfig {
    pub brain: BrainConfig,

    /// Simulation rate. Only used to convert ticks to seconds for display.
    pub ticks_per_second: u32,

    /// Distance within which a bot can see opponents.
    pub view_distance: f64,

    /// How long a bot keeps hunting a target it can no longer see.
    pub target_memory_ticks: u64,

    /// Seed for every random draw in the world, including per-bot generators.
    pub seed: u64,

    /// Ticks before a picked-up item becomes available again.
    pub item_respawn_ticks: u64,

    /// Ticks a dead bot waits before respawning.
    pub bot_respawn_ticks: u64,

    /// Goal journal entries kept per bot.
    pub journal_capacity: usize,
}

impl RuntimeConfig {
    pub const DEFAULT_TICKS_PER_SECOND: u32 = 60;

    /// Validates the world settings and the embedded brain config.
    pub fn validate(&self) -> Result<()> {
        self.brain.validate()?;
        if self.ticks_per_second == 0 {
            return Err(RuntimeError::InvalidConfig {
                reason: "ticks_per_second must be positive",
            });
        }
        if !self.view_distance.is_finite() || self.view_distance <= 0.0 {
            return Err(RuntimeError::InvalidConfig {
                reason: "view_distance must be positive",
            });
        }
        Ok(())
    }

    /// Converts a tick count to seconds at the configured rate.
    pub fn seconds(&self, ticks: u64) -> f64 {
        ticks as f64 / f64::from(self.ticks_per_second.max(1))
    }
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            brain: BrainConfig::default(),
            ticks_per_second: Self::DEFAULT_TICKS_PER_SECOND,
            view_distance: 400.0,
            target_memory_ticks: 300,
            seed: 0,
            item_respawn_ticks: 600,
            bot_respawn_ticks: 120,
            journal_capacity: 64,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert_eq!(RuntimeConfig::default().validate(), Ok(()));
        assert_eq!(RuntimeConfig::default().seconds(90), 1.5);
    }

    #[test]
    fn brain_errors_surface() {
        let mut config = RuntimeConfig::default();
        config.brain.arbitration_interval_ticks = 0;
        assert!(matches!(config.validate(), Err(RuntimeError::Config(_))));
    }

    #[test]
    fn zero_view_distance_is_rejected() {
        let config = RuntimeConfig {
            view_distance: 0.0,
            ..RuntimeConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(RuntimeError::InvalidConfig { .. })
        ));
    }
}
