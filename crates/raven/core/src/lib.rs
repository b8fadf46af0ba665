//! Bot data model shared by the Raven brain and runtime.
//!
//! `raven-core` defines the agent side of the goal engine: the [`BotBody`]
//! that goals act upon, the collaborator traits it consumes (see [`env`]),
//! goal type tags and brain configuration. It holds no decision logic; the
//! goals and evaluators live in `raven-brain`.
pub mod config;
pub mod env;
pub mod geometry;
pub mod goal_kind;
pub mod scenario;
pub mod state;

pub use config::{BiasProfile, BiasRange, BrainConfig, ConfigError};
pub use env::{OpenFieldPlanner, Path, PathEdge, PathPlanner};
pub use geometry::Vector2D;
pub use goal_kind::GoalKind;
pub use scenario::{BotSpawn, ItemSpawn, Rect, ScenarioSpec};
pub use state::{
    BotBody, EntityId, GoalJournal, Inventory, ItemId, ItemKind, ItemSighting, JournalEntry,
    Perception, Pickup, Steering, SteeringFlags, TargetInfo, Tick, WeaponKind,
};
