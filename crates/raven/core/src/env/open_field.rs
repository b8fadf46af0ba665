use rand::{Rng, RngCore};

use crate::{Path, PathEdge, PathPlanner, Rect, Vector2D};

/// Planner for open arenas with rectangular obstacles.
///
/// Paths are straight lines split into edges no longer than
/// `max_edge_length`. A destination is unreachable when it lies outside the
/// bounds, inside an obstacle, or when an obstacle blocks the straight line.
/// There is no search around obstacles.
#[derive(Clone, Debug, PartialEq)]
pub struct OpenFieldPlanner {
    bounds: Rect,
    obstacles: Vec<Rect>,
    max_edge_length: f64,
}

impl OpenFieldPlanner {
    pub const DEFAULT_EDGE_LENGTH: f64 = 50.0;
    const RANDOM_LOCATION_ATTEMPTS: usize = 32;

    pub fn new(bounds: Rect) -> Self {
        Self {
            bounds,
            obstacles: Vec::new(),
            max_edge_length: Self::DEFAULT_EDGE_LENGTH,
        }
    }

    #[must_use]
    pub fn with_obstacles(mut self, obstacles: Vec<Rect>) -> Self {
        self.obstacles = obstacles;
        self
    }

    #[must_use]
    pub fn with_max_edge_length(mut self, length: f64) -> Self {
        self.max_edge_length = length.max(1.0);
        self
    }

    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    pub fn obstacles(&self) -> &[Rect] {
        &self.obstacles
    }

    /// True if `point` is inside the bounds and outside every obstacle.
    pub fn is_navigable(&self, point: Vector2D) -> bool {
        self.bounds.contains(point) && !self.obstacles.iter().any(|rect| rect.contains(point))
    }

    fn is_blocked(&self, from: Vector2D, to: Vector2D) -> bool {
        self.obstacles
            .iter()
            .any(|rect| rect.intersects_segment(from, to))
    }
}

impl PathPlanner for OpenFieldPlanner {
    fn plan_path(&self, from: Vector2D, to: Vector2D) -> Option<Path> {
        if !self.is_navigable(to) || self.is_blocked(from, to) {
            return None;
        }

        let distance = from.distance(to);
        if distance <= f64::EPSILON {
            return Some(Path::empty());
        }

        let segments = (distance / self.max_edge_length).ceil().max(1.0) as usize;
        let step = (to - from) * (1.0 / segments as f64);
        let mut edges = Vec::with_capacity(segments);
        let mut source = from;
        for index in 1..=segments {
            let destination = if index == segments {
                to
            } else {
                from + step * index as f64
            };
            edges.push(PathEdge::new(source, destination));
            source = destination;
        }

        Some(Path::new(edges))
    }

    fn path_cost(&self, from: Vector2D, to: Vector2D) -> Option<f64> {
        if !self.is_navigable(to) || self.is_blocked(from, to) {
            return None;
        }
        Some(from.distance(to))
    }

    fn random_location(&self, rng: &mut dyn RngCore) -> Option<Vector2D> {
        let (min, max) = (self.bounds.min, self.bounds.max);
        if min.x >= max.x || min.y >= max.y {
            return None;
        }
        (0..Self::RANDOM_LOCATION_ATTEMPTS)
            .map(|_| Vector2D::new(rng.gen_range(min.x..max.x), rng.gen_range(min.y..max.y)))
            .find(|point| self.is_navigable(*point))
    }

    fn line_of_sight(&self, from: Vector2D, to: Vector2D) -> bool {
        !self.is_blocked(from, to)
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use super::*;

    fn arena() -> OpenFieldPlanner {
        OpenFieldPlanner::new(Rect::new(Vector2D::ZERO, Vector2D::new(500.0, 500.0))).with_obstacles(
            vec![Rect::new(
                Vector2D::new(200.0, 200.0),
                Vector2D::new(300.0, 300.0),
            )],
        )
    }

    #[test]
    fn straight_path_is_split_into_edges() {
        let path = arena()
            .plan_path(Vector2D::new(10.0, 10.0), Vector2D::new(130.0, 10.0))
            .unwrap();
        assert_eq!(path.len(), 3);
        assert_eq!(path.destination(), Some(Vector2D::new(130.0, 10.0)));
        assert!((path.cost() - 120.0).abs() < 1e-9);
        assert_eq!(path.edges()[1].source, path.edges()[0].destination);
    }

    #[test]
    fn blocked_or_outside_destinations_are_unreachable() {
        let planner = arena();
        let start = Vector2D::new(10.0, 250.0);
        assert!(planner.plan_path(start, Vector2D::new(490.0, 250.0)).is_none());
        assert!(planner.plan_path(start, Vector2D::new(250.0, 250.0)).is_none());
        assert!(planner.plan_path(start, Vector2D::new(600.0, 10.0)).is_none());
        assert!(!planner.line_of_sight(start, Vector2D::new(490.0, 250.0)));
    }

    #[test]
    fn same_point_yields_empty_path() {
        let point = Vector2D::new(50.0, 50.0);
        assert_eq!(arena().plan_path(point, point), Some(Path::empty()));
    }

    #[test]
    fn random_locations_are_navigable() {
        let planner = arena();
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        for _ in 0..20 {
            let point = planner.random_location(&mut rng).unwrap();
            assert!(planner.is_navigable(point));
        }
    }
}
