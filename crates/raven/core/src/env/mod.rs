//! Read-only collaborators consumed by bots.
//!
//! The path planner is the only oracle a bot talks to directly. It is shared
//! between all bots of a world behind an `Arc`.
mod open_field;
mod planner;

pub use open_field::OpenFieldPlanner;
pub use planner::{Path, PathEdge, PathPlanner};
