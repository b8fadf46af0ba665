//! Concrete goals of the bot brain.
//!
//! Primitive goals drive steering directly: [`Wander`], [`SeekToPosition`] and
//! [`TraverseEdge`]. Composite goals decompose into sub-goals: [`FollowPath`],
//! [`MoveToPosition`], [`Explore`], [`GetItem`], [`HuntTarget`] and
//! [`AttackTarget`]. The root [`Think`](crate::Think) goal lives in its own
//! module.

mod attack_target;
mod explore;
mod follow_path;
mod get_item;
mod hunt_target;
mod move_to_position;
mod seek_to_position;
mod traverse_edge;
mod wander;

pub use attack_target::AttackTarget;
pub use explore::Explore;
pub use follow_path::FollowPath;
pub use get_item::GetItem;
pub use hunt_target::HuntTarget;
pub use move_to_position::MoveToPosition;
pub use seek_to_position::SeekToPosition;
pub use traverse_edge::TraverseEdge;
pub use wander::Wander;
