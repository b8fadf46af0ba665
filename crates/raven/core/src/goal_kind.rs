use strum::{Display, EnumIter};

use crate::ItemKind;

/// Type tag carried by every goal in a bot's goal tree.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, EnumIter)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GoalKind {
    Think,
    Explore,
    Wander,
    SeekToPosition,
    FollowPath,
    TraverseEdge,
    MoveToPosition,
    GetHealth,
    GetShotgun,
    GetRocketLauncher,
    GetRailgun,
    HuntTarget,
    AttackTarget,
}

impl GoalKind {
    /// The "get item" goal kind for an item kind.
    pub const fn get_item(item: ItemKind) -> Self {
        match item {
            ItemKind::Health => GoalKind::GetHealth,
            ItemKind::Shotgun => GoalKind::GetShotgun,
            ItemKind::RocketLauncher => GoalKind::GetRocketLauncher,
            ItemKind::Railgun => GoalKind::GetRailgun,
        }
    }
}
