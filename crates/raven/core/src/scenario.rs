//! Declarative description of a world: arena geometry, item triggers and bot
//! spawn points. Loaded from RON by `raven-content` and instantiated by the
//! runtime.

use crate::{BiasProfile, ItemKind, Vector2D};

/// Axis-aligned rectangle in world space.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect {
    pub min: Vector2D,
    pub max: Vector2D,
}

impl Rect {
    pub const fn new(min: Vector2D, max: Vector2D) -> Self {
        Self { min, max }
    }

    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    pub fn contains(&self, point: Vector2D) -> bool {
        point.x >= self.min.x && point.x <= self.max.x && point.y >= self.min.y && point.y <= self.max.y
    }

    /// True if the segment from `a` to `b` touches the rectangle.
    ///
    /// Liang–Barsky clipping against the four slabs.
    pub fn intersects_segment(&self, a: Vector2D, b: Vector2D) -> bool {
        let delta = b - a;
        let mut t_enter = 0.0_f64;
        let mut t_exit = 1.0_f64;

        for (p, q) in [
            (-delta.x, a.x - self.min.x),
            (delta.x, self.max.x - a.x),
            (-delta.y, a.y - self.min.y),
            (delta.y, self.max.y - a.y),
        ] {
            if p.abs() <= f64::EPSILON {
                if q < 0.0 {
                    return false;
                }
                continue;
            }
            let t = q / p;
            if p < 0.0 {
                t_enter = t_enter.max(t);
            } else {
                t_exit = t_exit.min(t);
            }
            if t_enter > t_exit {
                return false;
            }
        }
        true
    }
}

/// An item trigger placed in the arena.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemSpawn {
    pub kind: ItemKind,
    pub position: Vector2D,
}

/// A bot to spawn when the world is built.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BotSpawn {
    pub name: String,
    pub position: Vector2D,
    /// Overrides the brain config's biases for this bot.
    #[cfg_attr(feature = "serde", serde(default))]
    pub biases: Option<BiasProfile>,
}

/// Complete arena description.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScenarioSpec {
    pub name: String,
    pub bounds: Rect,
    #[cfg_attr(feature = "serde", serde(default))]
    pub obstacles: Vec<Rect>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub items: Vec<ItemSpawn>,
    pub bots: Vec<BotSpawn>,
}
