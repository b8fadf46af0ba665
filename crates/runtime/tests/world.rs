//! World-level behavior: building, ticking, combat, items and respawn.

use raven_content::ContentFactory;
use raven_core::{
    BiasProfile, BotSpawn, EntityId, GoalKind, ItemId, ItemKind, ItemSpawn, OpenFieldPlanner, Rect,
    ScenarioSpec, Tick, Vector2D,
};
use raven_runtime::{RuntimeConfig, RuntimeError, Stimulus, World, WorldEvent};

fn arena() -> OpenFieldPlanner {
    OpenFieldPlanner::new(Rect::new(Vector2D::ZERO, Vector2D::new(400.0, 300.0)))
}

fn config() -> RuntimeConfig {
    RuntimeConfig {
        seed: 5,
        ..RuntimeConfig::default()
    }
}

fn lone_bot() -> (World, EntityId) {
    let mut world = World::new("test", arena(), config()).unwrap();
    let id = world
        .spawn_bot("solo", Vector2D::new(50.0, 50.0), None)
        .unwrap();
    (world, id)
}

#[test]
fn scenario_without_bots_is_rejected() {
    let scenario = ScenarioSpec {
        name: "ghost town".into(),
        bounds: Rect::new(Vector2D::ZERO, Vector2D::new(10.0, 10.0)),
        obstacles: Vec::new(),
        items: Vec::new(),
        bots: Vec::new(),
    };
    assert_eq!(
        World::from_scenario(&scenario, config()).err(),
        Some(RuntimeError::EmptyScenario {
            name: "ghost town".into()
        })
    );
}

#[test]
fn spawn_errors() {
    let (mut world, _) = lone_bot();

    assert!(matches!(
        world.spawn_bot("solo", Vector2D::new(60.0, 60.0), None),
        Err(RuntimeError::DuplicateBot { .. })
    ));
    assert!(matches!(
        world.spawn_bot("lost", Vector2D::new(900.0, 60.0), None),
        Err(RuntimeError::SpawnOutOfBounds { .. })
    ));
    assert!(matches!(
        world.spawn_bot("odd", Vector2D::new(60.0, 60.0), Some(BiasProfile::uniform(-1.0))),
        Err(RuntimeError::Config(_))
    ));
    assert_eq!(
        world.inject(EntityId(99), Stimulus::Explore),
        Err(RuntimeError::UnknownBot(EntityId(99)))
    );
}

#[test]
fn idle_bot_explores_and_moves() {
    let (mut world, id) = lone_bot();
    let report = world.tick();

    assert_eq!(report.tick, Tick::ZERO);
    assert!(report.events.contains(&WorldEvent::GoalChanged {
        bot: id,
        from: None,
        to: Some(GoalKind::Explore),
    }));

    for _ in 0..10 {
        world.tick();
    }
    let bot = world.bot(id).unwrap();
    assert_ne!(bot.body().position(), Vector2D::new(50.0, 50.0));
    assert_eq!(bot.current_goal(), Some(GoalKind::Explore));
}

#[test]
fn wounded_bot_fetches_health() {
    let (mut world, id) = lone_bot();
    let item = world.add_item(ItemKind::Health, Vector2D::new(150.0, 50.0));
    world.damage_bot(id, 80).unwrap();

    world.tick();
    assert_eq!(world.bot(id).unwrap().current_goal(), Some(GoalKind::GetHealth));

    let events = world.run(200);
    assert!(events.contains(&WorldEvent::ItemPickedUp {
        bot: id,
        item,
        kind: ItemKind::Health,
    }));
    assert_eq!(world.bot(id).unwrap().body().health(), 70);
    assert!(!world.items()[0].is_active());
}

fn quick_respawn_bot() -> (World, EntityId) {
    let config = RuntimeConfig {
        item_respawn_ticks: 50,
        ..config()
    };
    let mut world = World::new("test", arena(), config).unwrap();
    let id = world
        .spawn_bot("solo", Vector2D::new(50.0, 50.0), None)
        .unwrap();
    (world, id)
}

fn pickups(events: &[WorldEvent], by: EntityId) -> usize {
    events
        .iter()
        .filter(|event| matches!(event, WorldEvent::ItemPickedUp { bot, .. } if *bot == by))
        .count()
}

/// Ticks until `item` respawns, returning every event seen on the way.
fn run_until_respawned(world: &mut World, item: ItemId, limit: u64) -> Vec<WorldEvent> {
    let mut events = Vec::new();
    for _ in 0..limit {
        let report = world.tick();
        let respawned = report.events.contains(&WorldEvent::ItemRespawned { item });
        events.extend(report.events);
        if respawned {
            return events;
        }
    }
    panic!("item {item} did not respawn within {limit} ticks");
}

#[test]
fn wounded_bot_fetches_the_same_health_pack_twice() {
    let (mut world, id) = quick_respawn_bot();
    let item = world.add_item(ItemKind::Health, Vector2D::new(150.0, 50.0));
    world.damage_bot(id, 80).unwrap();

    let first = run_until_respawned(&mut world, item, 400);
    assert_eq!(pickups(&first, id), 1);
    assert_eq!(world.bot(id).unwrap().body().health(), 70);
    assert!(world.items()[0].is_active());

    world.damage_bot(id, 60).unwrap();
    world.tick();
    assert_eq!(world.bot(id).unwrap().current_goal(), Some(GoalKind::GetHealth));

    let second = world.run(600);
    assert!(second.contains(&WorldEvent::ItemPickedUp {
        bot: id,
        item,
        kind: ItemKind::Health,
    }));
    assert!(world.bot(id).unwrap().body().health() > 10);
}

#[test]
fn wounded_bot_fetches_health_once_it_respawns() {
    let (mut world, id) = quick_respawn_bot();
    let item = world.add_item(ItemKind::Health, Vector2D::new(150.0, 50.0));
    world.damage_bot(id, 80).unwrap();

    let mut events = Vec::new();
    while pickups(&events, id) == 0 {
        assert!(world.now() < Tick(400), "first pickup never happened");
        events.extend(world.tick().events);
    }
    assert!(!world.items()[0].is_active());

    // Wounded again while the pack is still down: nothing to fetch yet.
    world.damage_bot(id, 60).unwrap();
    world.tick();
    assert_ne!(world.bot(id).unwrap().current_goal(), Some(GoalKind::GetHealth));

    let events = run_until_respawned(&mut world, item, 100);
    assert_eq!(pickups(&events, id), 0);

    let events = world.run(600);
    assert!(pickups(&events, id) >= 1);
    assert!(world.bot(id).unwrap().body().health() >= 60);
}

#[test]
fn picked_up_items_respawn() {
    let (mut world, id) = lone_bot();
    let item = world.add_item(ItemKind::Railgun, Vector2D::new(52.0, 50.0));

    let first = world.tick();
    assert!(first.events.contains(&WorldEvent::ItemPickedUp {
        bot: id,
        item,
        kind: ItemKind::Railgun,
    }));
    assert!(
        world
            .bot(id)
            .unwrap()
            .body()
            .inventory()
            .has_weapon(raven_core::WeaponKind::Railgun)
    );

    let respawn = world.config().item_respawn_ticks;
    let events = world.run(respawn);
    assert!(events.contains(&WorldEvent::ItemRespawned { item }));
}

#[test]
fn opponents_in_view_attack_each_other() {
    let mut world = World::new("duel", arena(), config()).unwrap();
    let alpha = world
        .spawn_bot("alpha", Vector2D::new(100.0, 150.0), Some(BiasProfile::default()))
        .unwrap();
    let beta = world
        .spawn_bot("beta", Vector2D::new(300.0, 150.0), Some(BiasProfile::default()))
        .unwrap();

    let events = world.run(60);
    assert_eq!(world.bot(alpha).unwrap().current_goal(), Some(GoalKind::AttackTarget));
    assert_eq!(world.bot(beta).unwrap().current_goal(), Some(GoalKind::AttackTarget));
    assert!(events.iter().any(|event| matches!(
        event,
        WorldEvent::WeaponFired { bot, target, .. } if *bot == alpha && *target == beta
    )));
    assert!(world.bot(beta).unwrap().body().health() < 100);
}

#[test]
fn dead_bots_respawn_at_their_spawn_point() {
    let (mut world, id) = lone_bot();
    world.run(30);

    assert!(world.damage_bot(id, 500).unwrap());
    let bot = world.bot(id).unwrap();
    assert!(!bot.is_alive());
    assert_eq!(bot.stats().deaths, 1);
    assert_eq!(bot.current_goal(), None);
    assert!(bot.body().steering().flags().is_empty());

    let delay = world.config().bot_respawn_ticks;
    let events = world.run(delay + 1);
    assert!(events.contains(&WorldEvent::BotRespawned { bot: id }));

    let bot = world.bot(id).unwrap();
    assert!(bot.is_alive());
    assert_eq!(bot.body().health(), bot.body().max_health());
}

#[test]
fn injected_move_pre_empts_exploration() {
    let (mut world, id) = lone_bot();
    world.tick();

    world
        .inject(id, Stimulus::MoveTo(Vector2D::new(50.0, 250.0)))
        .unwrap();
    world.tick();

    let bot = world.bot(id).unwrap();
    assert_eq!(
        bot.brain().subgoal_kinds(),
        vec![GoalKind::MoveToPosition, GoalKind::Explore]
    );
    assert!(bot.body().velocity().y > 0.0);
}

#[test]
fn reports_describe_the_goal_tree() {
    let (mut world, id) = lone_bot();
    world.tick();

    let text = world.report(id).unwrap();
    assert!(text.starts_with("Think (active)"));
    let snapshot = world.snapshot(id).unwrap();
    assert_eq!(snapshot.bot, id.0);
    assert!(snapshot.goals.iter().any(|goal| goal.kind == GoalKind::FollowPath));
}

#[test]
fn same_seed_same_run() {
    let scenario = ContentFactory::bundled().load_scenario("arena").unwrap();
    let positions = |seed: u64| {
        let config = RuntimeConfig {
            seed,
            ..RuntimeConfig::default()
        };
        let mut world = World::from_scenario(&scenario, config).unwrap();
        world.run(300);
        world
            .bots()
            .iter()
            .map(|bot| bot.body().position())
            .collect::<Vec<_>>()
    };

    assert_eq!(positions(9), positions(9));
}

#[test]
fn scenario_items_and_bots_are_placed() {
    let scenario = ScenarioSpec {
        name: "pair".into(),
        bounds: Rect::new(Vector2D::ZERO, Vector2D::new(200.0, 200.0)),
        obstacles: vec![Rect::new(Vector2D::new(90.0, 0.0), Vector2D::new(110.0, 200.0))],
        items: vec![ItemSpawn {
            kind: ItemKind::Shotgun,
            position: Vector2D::new(50.0, 150.0),
        }],
        bots: vec![
            BotSpawn {
                name: "left".into(),
                position: Vector2D::new(20.0, 20.0),
                biases: None,
            },
            BotSpawn {
                name: "right".into(),
                position: Vector2D::new(180.0, 20.0),
                biases: None,
            },
        ],
    };
    let mut world = World::from_scenario(&scenario, config()).unwrap();
    assert_eq!(world.bots().len(), 2);
    assert_eq!(world.items().len(), 1);

    // The wall blocks line of sight, so nobody gets targeted.
    world.tick();
    for bot in world.bots() {
        assert!(!bot.body().is_target_present());
    }
}
