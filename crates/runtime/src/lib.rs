//! Headless simulation runtime for Raven bots.
//!
//! The runtime owns the world the goal-driven brains act in: it senses on
//! their behalf, schedules arbitration, turns steering into motion and runs
//! the weapon and item systems. It is single-threaded and deterministic for a
//! given [`RuntimeConfig::seed`].
//!
//! # Example
//!
//! ```no_run
//! use raven_core::{OpenFieldPlanner, Rect, Vector2D};
//! use raven_runtime::{RuntimeConfig, World};
//!
//! let arena = OpenFieldPlanner::new(Rect::new(Vector2D::ZERO, Vector2D::new(400.0, 300.0)));
//! let mut world = World::new("demo", arena, RuntimeConfig::default())?;
//! world.spawn_bot("raven", Vector2D::new(50.0, 50.0), None)?;
//! for _ in 0..600 {
//!     world.tick();
//! }
//! # Ok::<(), raven_runtime::RuntimeError>(())
//! ```

pub mod bot;
pub mod config;
pub mod error;
pub mod events;
pub mod regulator;
pub mod stimulus;
pub mod systems;
pub mod world;

pub use bot::{Bot, BotStats};
pub use config::RuntimeConfig;
pub use error::{Result, RuntimeError};
pub use events::{TickReport, WorldEvent};
pub use regulator::Regulator;
pub use stimulus::Stimulus;
pub use systems::combat::WeaponStats;
pub use systems::items::ItemTrigger;
pub use world::World;
