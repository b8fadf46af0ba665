//! Data-driven content for Raven worlds.
//!
//! This crate provides loaders for the data files a Raven run is built from:
//! - Brain configuration (evaluator biases, arbitration cadence) from TOML
//! - Scenarios (arena bounds, obstacles, item triggers, bot spawns) from RON
//!
//! All loaders deserialize `raven-core` types directly through serde.

#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "loaders")]
pub use loaders::{BrainConfigLoader, ContentFactory, LoadResult, ScenarioLoader};
