//! Brain configuration: evaluator biases and arbitration cadence.

use rand::Rng;

use crate::WeaponKind;

/// Errors raised when validating a [`BrainConfig`].
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("bias `{name}` must be finite and non-negative (got {value})")]
    InvalidBias { name: &'static str, value: f64 },

    #[error("bias range is invalid: low {low} must not exceed high {high} and both must be >= 0")]
    InvalidRange { low: f64, high: f64 },

    #[error("arbitration interval must be at least one tick")]
    ZeroArbitrationInterval,
}

/// Per-evaluator bias multipliers.
///
/// Biases shape a bot's personality: a bot with a high `attack_target` bias
/// picks fights that a cautious bot would avoid.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BiasProfile {
    pub explore: f64,
    pub attack_target: f64,
    pub get_health: f64,
    pub get_shotgun: f64,
    pub get_rocket_launcher: f64,
    pub get_railgun: f64,
}

impl BiasProfile {
    /// Every bias set to `bias`.
    pub const fn uniform(bias: f64) -> Self {
        Self {
            explore: bias,
            attack_target: bias,
            get_health: bias,
            get_shotgun: bias,
            get_rocket_launcher: bias,
            get_railgun: bias,
        }
    }

    /// Draws every bias independently from `range`.
    pub fn randomized<R: Rng + ?Sized>(range: BiasRange, rng: &mut R) -> Self {
        let mut draw = || {
            if range.low == range.high {
                range.low
            } else {
                rng.gen_range(range.low..=range.high)
            }
        };
        Self {
            explore: draw(),
            attack_target: draw(),
            get_health: draw(),
            get_shotgun: draw(),
            get_rocket_launcher: draw(),
            get_railgun: draw(),
        }
    }

    /// Bias of the "get weapon" evaluator for `weapon`. The blaster cannot be
    /// picked up and has no evaluator, so it reports zero.
    pub const fn for_weapon(&self, weapon: WeaponKind) -> f64 {
        match weapon {
            WeaponKind::Blaster => 0.0,
            WeaponKind::Shotgun => self.get_shotgun,
            WeaponKind::RocketLauncher => self.get_rocket_launcher,
            WeaponKind::Railgun => self.get_railgun,
        }
    }

    fn named(&self) -> [(&'static str, f64); 6] {
        [
            ("explore", self.explore),
            ("attack_target", self.attack_target),
            ("get_health", self.get_health),
            ("get_shotgun", self.get_shotgun),
            ("get_rocket_launcher", self.get_rocket_launcher),
            ("get_railgun", self.get_railgun),
        ]
    }

    /// Checks that every bias is finite and non-negative.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidBias`] naming the first offending bias.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, value) in self.named() {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::InvalidBias { name, value });
            }
        }
        Ok(())
    }
}

impl Default for BiasProfile {
    fn default() -> Self {
        Self::uniform(1.0)
    }
}

/// Inclusive range biases are drawn from when randomization is enabled.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BiasRange {
    pub low: f64,
    pub high: f64,
}

impl BiasRange {
    /// Wide enough to give each bot a noticeably different personality.
    pub const CLASSIC: Self = Self {
        low: 0.5,
        high: 1.5,
    };

    pub fn validate(&self) -> Result<(), ConfigError> {
        let valid = self.low.is_finite()
            && self.high.is_finite()
            && self.low >= 0.0
            && self.low <= self.high;
        if valid {
            Ok(())
        } else {
            Err(ConfigError::InvalidRange {
                low: self.low,
                high: self.high,
            })
        }
    }
}

/// Configuration shared by every bot brain in a world.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BrainConfig {
    /// Biases used when `randomize_biases` is `None`.
    pub biases: BiasProfile,

    /// When set, each bot draws its own biases from this range.
    pub randomize_biases: Option<BiasRange>,

    /// Ticks between scheduled arbitrations. The brain also arbitrates
    /// whenever its goal list runs empty.
    pub arbitration_interval_ticks: u64,
}

impl BrainConfig {
    /// Four arbitrations per second at 60 ticks per second.
    pub const DEFAULT_ARBITRATION_INTERVAL: u64 = 15;

    pub fn new() -> Self {
        Self {
            biases: BiasProfile::default(),
            randomize_biases: None,
            arbitration_interval_ticks: Self::DEFAULT_ARBITRATION_INTERVAL,
        }
    }

    /// # Errors
    ///
    /// Returns the first [`ConfigError`] found in the biases, the bias range or
    /// the arbitration interval.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.biases.validate()?;
        if let Some(range) = self.randomize_biases {
            range.validate()?;
        }
        if self.arbitration_interval_ticks == 0 {
            return Err(ConfigError::ZeroArbitrationInterval);
        }
        Ok(())
    }

    /// The biases a newly spawned bot should use.
    pub fn biases_for<R: Rng + ?Sized>(&self, rng: &mut R) -> BiasProfile {
        match self.randomize_biases {
            Some(range) => BiasProfile::randomized(range, rng),
            None => self.biases,
        }
    }
}

impl Default for BrainConfig {
    fn default() -> Self {
        Self::new()
    }
}
