use bitflags::bitflags;

use crate::Vector2D;

bitflags! {
    /// Steering behaviors currently switched on for a bot.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct SteeringFlags: u8 {
        const WANDER = 0b0001;
        const SEEK   = 0b0010;
        const ARRIVE = 0b0100;
    }
}

/// Steering commands issued by goals.
///
/// Goals only toggle behaviors and set the shared target; the runtime turns
/// the active behaviors into motion.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Steering {
    flags: SteeringFlags,
    target: Vector2D,
}

impl Steering {
    pub fn flags(&self) -> SteeringFlags {
        self.flags
    }

    pub fn is_on(&self, behavior: SteeringFlags) -> bool {
        self.flags.contains(behavior)
    }

    /// Target shared by seek and arrive.
    pub fn target(&self) -> Vector2D {
        self.target
    }

    pub fn wander_on(&mut self) {
        self.flags.insert(SteeringFlags::WANDER);
    }

    pub fn wander_off(&mut self) {
        self.flags.remove(SteeringFlags::WANDER);
    }

    pub fn seek_on(&mut self, target: Vector2D) {
        self.target = target;
        self.flags.insert(SteeringFlags::SEEK);
    }

    pub fn seek_off(&mut self) {
        self.flags.remove(SteeringFlags::SEEK);
    }

    pub fn arrive_on(&mut self, target: Vector2D) {
        self.target = target;
        self.flags.insert(SteeringFlags::ARRIVE);
    }

    pub fn arrive_off(&mut self) {
        self.flags.remove(SteeringFlags::ARRIVE);
    }

    /// Switches every behavior off.
    pub fn clear(&mut self) {
        self.flags = SteeringFlags::empty();
    }
}
