//! Per-tick world systems, run by [`World::tick`](crate::World::tick) in
//! this order: perception, think, steering, combat, items.

pub mod combat;
pub mod items;
pub mod perception;
pub mod steering;
