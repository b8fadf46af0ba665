//! Errors surfaced by the world API.
//!
//! Goal failures never show up here: they are status data inside the goal
//! tree. These errors cover misuse of the world itself.

use raven_core::{ConfigError, EntityId, Vector2D};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum RuntimeError {
    #[error("no bot with id {0}")]
    UnknownBot(EntityId),

    #[error("a bot named `{name}` already exists")]
    DuplicateBot { name: String },

    #[error("bot `{name}` spawned at {position}, outside the navigable arena")]
    SpawnOutOfBounds { name: String, position: Vector2D },

    #[error("scenario `{name}` has no bots")]
    EmptyScenario { name: String },

    #[error("invalid runtime config: {reason}")]
    InvalidConfig { reason: &'static str },

    #[error(transparent)]
    Config(#[from] ConfigError),
}
