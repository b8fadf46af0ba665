//! The simulated world: bots, item triggers and the tick loop.

use std::sync::Arc;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use raven_brain::BrainSnapshot;
use raven_core::{
    BiasProfile, BotBody, EntityId, ItemId, ItemKind, OpenFieldPlanner, PathPlanner,
    ScenarioSpec, Tick, Vector2D,
};

use crate::regulator::Regulator;
use crate::systems::{combat, items, perception, steering};
use crate::{Bot, ItemTrigger, Result, RuntimeConfig, RuntimeError, Stimulus, TickReport, WorldEvent};

/// A headless Raven world.
///
/// # Tick order
///
/// 1. Dead bots whose delay has passed respawn at their spawn point
/// 2. Perception: active items and targets are refreshed
/// 3. Think: regulated arbitration, then one step of every goal tree
/// 4. Steering: active behaviors become velocity, bots move
/// 5. Combat: bots fire at visible targets
/// 6. Items: triggers respawn and are picked up
pub struct World {
    name: String,
    config: RuntimeConfig,
    planner: Arc<OpenFieldPlanner>,
    bots: Vec<Bot>,
    items: Vec<ItemTrigger>,
    now: Tick,
    rng: ChaCha8Rng,
}

impl World {
    /// Creates an empty world over `planner`.
    pub fn new(
        name: impl Into<String>,
        planner: OpenFieldPlanner,
        config: RuntimeConfig,
    ) -> Result<Self> {
        config.validate()?;
        let rng = ChaCha8Rng::seed_from_u64(config.seed);
        Ok(Self {
            name: name.into(),
            config,
            planner: Arc::new(planner),
            bots: Vec::new(),
            items: Vec::new(),
            now: Tick::ZERO,
            rng,
        })
    }

    /// Builds a world from a scenario: arena, items and bots.
    pub fn from_scenario(scenario: &ScenarioSpec, config: RuntimeConfig) -> Result<Self> {
        if scenario.bots.is_empty() {
            return Err(RuntimeError::EmptyScenario {
                name: scenario.name.clone(),
            });
        }

        let planner =
            OpenFieldPlanner::new(scenario.bounds).with_obstacles(scenario.obstacles.clone());
        let mut world = Self::new(scenario.name.clone(), planner, config)?;

        for item in &scenario.items {
            world.add_item(item.kind, item.position);
        }
        for bot in &scenario.bots {
            world.spawn_bot(bot.name.clone(), bot.position, bot.biases)?;
        }

        tracing::info!(
            scenario = %world.name,
            bots = world.bots.len(),
            items = world.items.len(),
            "world built"
        );
        Ok(world)
    }

    /// Adds a bot. Without explicit `biases` the brain config decides,
    /// drawing random biases if configured to.
    pub fn spawn_bot(
        &mut self,
        name: impl Into<String>,
        position: Vector2D,
        biases: Option<BiasProfile>,
    ) -> Result<EntityId> {
        let name = name.into();
        if self.bots.iter().any(|bot| bot.name() == name) {
            return Err(RuntimeError::DuplicateBot { name });
        }
        if !self.planner.is_navigable(position) {
            return Err(RuntimeError::SpawnOutOfBounds { name, position });
        }

        let biases = match biases {
            Some(biases) => {
                biases.validate()?;
                biases
            }
            None => self.config.brain.biases_for(&mut self.rng),
        };

        let index = self.bots.len();
        let id = EntityId(index as u32 + 1);
        let planner: Arc<dyn PathPlanner> = self.planner.clone();
        let body = BotBody::new(id, position, planner)
            .with_seed(bot_seed(self.config.seed, id))
            .with_journal_capacity(self.config.journal_capacity);
        let regulator = Regulator::new(self.config.brain.arbitration_interval_ticks, index as u64);

        tracing::info!(bot = %id, %name, %position, "bot spawned");
        self.bots.push(Bot::new(name, body, biases, regulator));
        Ok(id)
    }

    /// Places an item trigger and returns its id.
    pub fn add_item(&mut self, kind: ItemKind, position: Vector2D) -> ItemId {
        let id = ItemId(self.items.len() as u32 + 1);
        self.items.push(ItemTrigger::new(id, kind, position));
        id
    }

    // ========================================================================
    // Queries
    // ========================================================================

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn config(&self) -> &RuntimeConfig {
        &self.config
    }

    pub fn planner(&self) -> &OpenFieldPlanner {
        &self.planner
    }

    /// The tick about to be simulated.
    pub fn now(&self) -> Tick {
        self.now
    }

    pub fn bots(&self) -> &[Bot] {
        &self.bots
    }

    pub fn items(&self) -> &[ItemTrigger] {
        &self.items
    }

    pub fn bot(&self, id: EntityId) -> Result<&Bot> {
        self.bots
            .iter()
            .find(|bot| bot.id() == id)
            .ok_or(RuntimeError::UnknownBot(id))
    }

    pub fn bot_by_name(&self, name: &str) -> Option<&Bot> {
        self.bots.iter().find(|bot| bot.name() == name)
    }

    fn bot_mut(&mut self, id: EntityId) -> Result<&mut Bot> {
        self.bots
            .iter_mut()
            .find(|bot| bot.id() == id)
            .ok_or(RuntimeError::UnknownBot(id))
    }

    pub fn snapshot(&self, id: EntityId) -> Result<BrainSnapshot> {
        Ok(self.bot(id)?.snapshot())
    }

    pub fn report(&self, id: EntityId) -> Result<String> {
        Ok(self.bot(id)?.report())
    }

    // ========================================================================
    // External control
    // ========================================================================

    /// Injects a stimulus into a bot's brain. Dead bots ignore stimuli.
    pub fn inject(&mut self, id: EntityId, stimulus: Stimulus) -> Result<()> {
        let bot = self.bot_mut(id)?;
        if !bot.is_alive() {
            return Ok(());
        }

        tracing::debug!(bot = %id, ?stimulus, "stimulus");
        let Bot { body, brain, .. } = bot;
        match stimulus {
            Stimulus::MoveTo(position) => brain.add_goal_move_to_position(position),
            Stimulus::QueueMoveTo(position) => brain.queue_goal_move_to_position(position),
            Stimulus::Explore => brain.add_goal_explore(body),
            Stimulus::AttackTarget => brain.add_goal_attack_target(body),
            Stimulus::GetItem(kind) => brain.add_goal_get_item(body, kind),
            Stimulus::Wander => brain.add_goal_wander(body),
            Stimulus::Arbitrate => {
                brain.arbitrate(body);
            }
        }
        Ok(())
    }

    /// Applies damage from outside the combat system. Returns true if the
    /// bot died from it.
    pub fn damage_bot(&mut self, id: EntityId, amount: i32) -> Result<bool> {
        let now = self.now;
        let config = self.config.clone();
        let bot = self.bot_mut(id)?;
        if !bot.is_alive() || !bot.body.take_damage(amount) {
            return Ok(false);
        }
        combat::kill(bot, &config, now);
        tracing::info!(bot = %id, "bot killed by damage");
        Ok(true)
    }

    // ========================================================================
    // Simulation
    // ========================================================================

    /// Simulates one tick and returns what happened during it.
    pub fn tick(&mut self) -> TickReport {
        let now = self.now;
        let mut events = Vec::new();

        self.respawn_bots(now, &mut events);
        perception::sense(&mut self.bots, &self.items, &self.planner, &self.config, now);
        self.think(now, &mut events);
        for bot in self.bots.iter_mut().filter(|bot| bot.is_alive()) {
            steering::steer(bot);
            steering::integrate(bot, &self.planner);
        }
        combat::update(&mut self.bots, &self.config, now, &mut events);
        items::update(&mut self.bots, &mut self.items, &self.config, now, &mut events);

        self.now = now + 1;
        TickReport { tick: now, events }
    }

    /// Simulates `ticks` ticks and returns every event, in order.
    pub fn run(&mut self, ticks: u64) -> Vec<WorldEvent> {
        (0..ticks).flat_map(|_| self.tick().events).collect()
    }

    fn respawn_bots(&mut self, now: Tick, events: &mut Vec<WorldEvent>) {
        for bot in &mut self.bots {
            if !bot.respawn_at.is_some_and(|at| at <= now) {
                continue;
            }
            bot.respawn_at = None;
            let spawn_point = bot.spawn_point();
            bot.brain.reset(&mut bot.body);
            bot.body.respawn(spawn_point);
            bot.regulator.restart(now);

            tracing::info!(bot = %bot.id(), "bot respawned");
            events.push(WorldEvent::BotRespawned { bot: bot.id() });
        }
    }

    fn think(&mut self, now: Tick, events: &mut Vec<WorldEvent>) {
        use goal_tree::Goal;

        for bot in self.bots.iter_mut().filter(|bot| bot.is_alive()) {
            let before = bot.brain.front_kind();
            let Bot {
                body,
                brain,
                regulator,
                ..
            } = bot;

            if regulator.is_ready(now) {
                brain.arbitrate(body);
            }
            brain.process(body);

            let after = bot.brain.front_kind();
            if before != after {
                events.push(WorldEvent::GoalChanged {
                    bot: bot.id(),
                    from: before,
                    to: after,
                });
            }
        }
    }
}

/// Per-bot generator seed derived from the world seed.
fn bot_seed(seed: u64, id: EntityId) -> u64 {
    seed.wrapping_mul(0x9E37_79B9_7F4A_7C15) ^ u64::from(id.0)
}
