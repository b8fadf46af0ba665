use std::fmt;
use std::sync::Arc;

use goal_tree::{GoalOwner, Status};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::{
    EntityId, GoalJournal, GoalKind, Inventory, ItemKind, ItemSighting, Path, PathPlanner,
    Perception, Steering, Vector2D,
};

/// Everything about a bot except its brain.
///
/// The body is the owner type the goal tree acts upon: goals read its state
/// and issue steering and path requests through it. Keeping the brain outside
/// the body lets a bot process its goal tree while lending the body mutably.
pub struct BotBody {
    id: EntityId,
    position: Vector2D,
    velocity: Vector2D,
    heading: Vector2D,
    max_speed: f64,
    bounding_radius: f64,
    health: i32,
    max_health: i32,
    steering: Steering,
    inventory: Inventory,
    perception: Perception,
    planner: Arc<dyn PathPlanner>,
    rng: ChaCha8Rng,
    journal: GoalJournal,
}

impl BotBody {
    pub const DEFAULT_MAX_HEALTH: i32 = 100;
    pub const DEFAULT_MAX_SPEED: f64 = 1.0;
    pub const DEFAULT_BOUNDING_RADIUS: f64 = 5.0;
    /// Distance within which a bot counts as standing on a position.
    pub const POSITION_TOLERANCE: f64 = 8.0;

    /// Creates a healthy bot holding only the blaster.
    pub fn new(id: EntityId, position: Vector2D, planner: Arc<dyn PathPlanner>) -> Self {
        Self {
            id,
            position,
            velocity: Vector2D::ZERO,
            heading: Vector2D::new(0.0, 1.0),
            max_speed: Self::DEFAULT_MAX_SPEED,
            bounding_radius: Self::DEFAULT_BOUNDING_RADIUS,
            health: Self::DEFAULT_MAX_HEALTH,
            max_health: Self::DEFAULT_MAX_HEALTH,
            steering: Steering::default(),
            inventory: Inventory::new(),
            perception: Perception::default(),
            planner,
            rng: ChaCha8Rng::seed_from_u64(u64::from(id.0)),
            journal: GoalJournal::default(),
        }
    }

    /// Reseeds the bot's random number generator (builder pattern).
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = ChaCha8Rng::seed_from_u64(seed);
        self
    }

    #[must_use]
    pub fn with_max_speed(mut self, max_speed: f64) -> Self {
        self.max_speed = max_speed;
        self
    }

    #[must_use]
    pub fn with_max_health(mut self, max_health: i32) -> Self {
        self.max_health = max_health.max(1);
        self.health = self.max_health;
        self
    }

    #[must_use]
    pub fn with_journal_capacity(mut self, capacity: usize) -> Self {
        self.journal = GoalJournal::new(capacity);
        self
    }

    // ========================================================================
    // Kinematics
    // ========================================================================

    pub fn id(&self) -> EntityId {
        self.id
    }

    pub fn position(&self) -> Vector2D {
        self.position
    }

    pub fn set_position(&mut self, position: Vector2D) {
        self.position = position;
    }

    pub fn velocity(&self) -> Vector2D {
        self.velocity
    }

    /// Sets the velocity, truncated to the bot's max speed. The heading
    /// follows the velocity whenever the bot is moving.
    pub fn set_velocity(&mut self, velocity: Vector2D) {
        self.velocity = velocity.truncate(self.max_speed);
        if self.velocity.length_sq() > f64::EPSILON {
            self.heading = self.velocity.normalize();
        }
    }

    pub fn heading(&self) -> Vector2D {
        self.heading
    }

    pub fn max_speed(&self) -> f64 {
        self.max_speed
    }

    pub fn bounding_radius(&self) -> f64 {
        self.bounding_radius
    }

    /// True if the bot stands within [`Self::POSITION_TOLERANCE`] of `position`.
    pub fn is_at_position(&self, position: Vector2D) -> bool {
        self.position.distance_sq(position) < Self::POSITION_TOLERANCE * Self::POSITION_TOLERANCE
    }

    // ========================================================================
    // Health
    // ========================================================================

    pub fn health(&self) -> i32 {
        self.health
    }

    pub fn max_health(&self) -> i32 {
        self.max_health
    }

    /// Current health as a fraction of maximum, in `[0, 1]`.
    pub fn health_fraction(&self) -> f64 {
        (f64::from(self.health) / f64::from(self.max_health)).clamp(0.0, 1.0)
    }

    pub fn set_health(&mut self, health: i32) {
        self.health = health.clamp(0, self.max_health);
    }

    pub fn heal(&mut self, amount: i32) {
        self.set_health(self.health.saturating_add(amount));
    }

    /// Applies damage. Returns true if the bot died from it.
    pub fn take_damage(&mut self, amount: i32) -> bool {
        let was_alive = self.is_alive();
        self.set_health(self.health.saturating_sub(amount));
        was_alive && !self.is_alive()
    }

    pub fn is_alive(&self) -> bool {
        self.health > 0
    }

    // ========================================================================
    // Capabilities used by goals
    // ========================================================================

    pub fn steering(&self) -> &Steering {
        &self.steering
    }

    pub fn steering_mut(&mut self) -> &mut Steering {
        &mut self.steering
    }

    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    pub fn inventory_mut(&mut self) -> &mut Inventory {
        &mut self.inventory
    }

    pub fn perception(&self) -> &Perception {
        &self.perception
    }

    pub fn perception_mut(&mut self) -> &mut Perception {
        &mut self.perception
    }

    pub fn has_visible_target(&self) -> bool {
        self.perception.has_visible_target()
    }

    pub fn is_target_present(&self) -> bool {
        self.perception.is_target_present()
    }

    pub fn planner(&self) -> &dyn PathPlanner {
        self.planner.as_ref()
    }

    /// Plans a path from the bot's position. `None` if unreachable.
    pub fn plan_path(&self, destination: Vector2D) -> Option<Path> {
        self.planner.plan_path(self.position, destination)
    }

    /// The closest reachable active item of `kind`, with its path cost.
    ///
    /// Items at equal cost resolve to the one listed first.
    pub fn closest_item(&self, kind: ItemKind) -> Option<(ItemSighting, f64)> {
        let mut best: Option<(ItemSighting, f64)> = None;
        for item in self.perception.items_of_kind(kind) {
            let Some(cost) = self.planner.path_cost(self.position, item.position) else {
                continue;
            };
            if best.is_none_or(|(_, best_cost)| cost < best_cost) {
                best = Some((*item, cost));
            }
        }
        best
    }

    /// A random navigable location drawn from the bot's own generator.
    pub fn random_location(&mut self) -> Option<Vector2D> {
        self.planner.random_location(&mut self.rng)
    }

    pub fn rng_mut(&mut self) -> &mut ChaCha8Rng {
        &mut self.rng
    }

    pub fn journal(&self) -> &GoalJournal {
        &self.journal
    }

    pub fn journal_mut(&mut self) -> &mut GoalJournal {
        &mut self.journal
    }

    /// Restores the body to a freshly spawned state at `position`.
    ///
    /// Inventory, perception and steering are reset; the journal is kept.
    pub fn respawn(&mut self, position: Vector2D) {
        self.position = position;
        self.velocity = Vector2D::ZERO;
        self.health = self.max_health;
        self.steering.clear();
        self.inventory = Inventory::new();
        self.perception = Perception::default();
    }
}

impl GoalOwner for BotBody {
    type Kind = GoalKind;

    fn goal_removed(&mut self, kind: GoalKind, status: Status) {
        self.journal.record(kind, status);
    }
}

impl fmt::Debug for BotBody {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BotBody")
            .field("id", &self.id)
            .field("position", &self.position)
            .field("velocity", &self.velocity)
            .field("health", &self.health)
            .field("steering", &self.steering)
            .field("inventory", &self.inventory)
            .field("perception", &self.perception)
            .finish_non_exhaustive()
    }
}
