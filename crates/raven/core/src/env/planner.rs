use rand::RngCore;

use crate::Vector2D;

/// One waypoint segment of a planned path.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PathEdge {
    pub source: Vector2D,
    pub destination: Vector2D,
}

impl PathEdge {
    pub const fn new(source: Vector2D, destination: Vector2D) -> Self {
        Self {
            source,
            destination,
        }
    }

    pub fn length(&self) -> f64 {
        self.source.distance(self.destination)
    }
}

/// Ordered sequence of edges produced by a [`PathPlanner`].
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Path {
    edges: Vec<PathEdge>,
}

impl Path {
    pub fn new(edges: Vec<PathEdge>) -> Self {
        Self { edges }
    }

    /// A path with no edges (source and destination coincide).
    pub fn empty() -> Self {
        Self { edges: Vec::new() }
    }

    pub fn edges(&self) -> &[PathEdge] {
        &self.edges
    }

    pub fn into_edges(self) -> Vec<PathEdge> {
        self.edges
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    pub fn len(&self) -> usize {
        self.edges.len()
    }

    /// Final waypoint, `None` for an empty path.
    pub fn destination(&self) -> Option<Vector2D> {
        self.edges.last().map(|edge| edge.destination)
    }

    /// Total length of all edges.
    pub fn cost(&self) -> f64 {
        self.edges.iter().map(PathEdge::length).sum()
    }
}

/// Read-only navigation oracle.
///
/// Implementations are shared between every bot in a world, so they must not
/// hold per-bot state. All calls are synchronous.
pub trait PathPlanner: Send + Sync {
    /// Plans a path between two points. `None` means the destination is
    /// unreachable.
    fn plan_path(&self, from: Vector2D, to: Vector2D) -> Option<Path>;

    /// Cost of the cheapest path, `None` if unreachable.
    fn path_cost(&self, from: Vector2D, to: Vector2D) -> Option<f64> {
        self.plan_path(from, to).map(|path| path.cost())
    }

    /// A random navigable location, used for exploration.
    fn random_location(&self, rng: &mut dyn RngCore) -> Option<Vector2D>;

    /// True if nothing blocks the straight line between the two points.
    fn line_of_sight(&self, _from: Vector2D, _to: Vector2D) -> bool {
        true
    }
}
