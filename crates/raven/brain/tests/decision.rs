//! End-to-end decision making of a single bot brain.

use std::sync::Arc;

use goal_tree::{Goal, Status};
use raven_brain::{CustomEvaluator, EvaluatorKind, GoalEvaluator, Think};
use raven_core::{
    BiasProfile, BotBody, EntityId, GoalKind, ItemId, ItemKind, ItemSighting, OpenFieldPlanner,
    Rect, SteeringFlags, TargetInfo, Tick, Vector2D,
};

fn bot() -> BotBody {
    let planner = Arc::new(OpenFieldPlanner::new(Rect::new(
        Vector2D::new(-1000.0, -1000.0),
        Vector2D::new(1000.0, 1000.0),
    )));
    BotBody::new(EntityId(1), Vector2D::ZERO, planner).with_seed(42)
}

fn think(bot: &BotBody) -> Think {
    Think::new(bot.id(), &BiasProfile::default())
}

fn spot_enemy(bot: &mut BotBody, position: Vector2D) {
    bot.perception_mut().target = Some(TargetInfo {
        id: EntityId(2),
        last_sensed_position: position,
        last_sensed_at: Tick(10),
        visible: true,
    });
}

#[test]
fn low_health_with_reachable_health_item_selects_get_health() {
    let mut bot = bot();
    let mut brain = think(&bot);
    brain.process(&mut bot);
    assert_eq!(brain.front_kind(), Some(GoalKind::Explore));

    bot.set_health(20);
    bot.perception_mut().items.push(ItemSighting {
        id: ItemId(1),
        kind: ItemKind::Health,
        position: Vector2D::new(150.0, 0.0),
    });

    let winner = brain.arbitrate(&mut bot);
    assert!(matches!(winner, Some(EvaluatorKind::GetHealth)));
    assert_eq!(brain.front_kind(), Some(GoalKind::GetHealth));

    assert_eq!(brain.process(&mut bot), Status::Active);
    assert_eq!(brain.front_kind(), Some(GoalKind::GetHealth));
}

#[test]
fn visible_enemy_replaces_path_following_with_attack() {
    let mut bot = bot();
    let mut brain = think(&bot);
    brain.process(&mut bot);

    let mut tree = Vec::new();
    brain.report(0, &mut Collect(&mut tree));
    assert!(tree.contains(&GoalKind::FollowPath));

    spot_enemy(&mut bot, Vector2D::new(120.0, 40.0));
    let scores = brain.scores(&bot);
    let score_of = |label: &str| {
        scores
            .iter()
            .find(|(kind, _)| kind.label() == label)
            .map(|(_, score)| *score)
            .unwrap()
    };
    assert!(score_of("attack_target") > score_of("explore"));

    brain.arbitrate(&mut bot);
    assert_eq!(brain.front_kind(), Some(GoalKind::AttackTarget));
    assert_eq!(bot.journal().count(GoalKind::FollowPath), 1);
    assert_eq!(bot.journal().count(GoalKind::Explore), 1);

    brain.process(&mut bot);
    assert!(bot.steering().is_on(SteeringFlags::SEEK));
    assert_eq!(bot.steering().target(), Vector2D::new(120.0, 40.0));
    assert_eq!(bot.journal().count(GoalKind::FollowPath), 1);
}

#[test]
fn scoring_does_not_touch_the_bot() {
    let mut bot = bot();
    let brain = think(&bot);
    bot.set_health(35);
    spot_enemy(&mut bot, Vector2D::new(50.0, 0.0));

    let before = format!("{bot:?}");
    let first = brain.scores(&bot);
    let second = brain.scores(&bot);

    assert_eq!(format!("{bot:?}"), before);
    let first: Vec<f64> = first.into_iter().map(|(_, score)| score).collect();
    let second: Vec<f64> = second.into_iter().map(|(_, score)| score).collect();
    assert_eq!(first, second);
}

#[test]
fn equal_scores_pick_the_first_evaluator() {
    fn half(_: &BotBody) -> f64 {
        0.5
    }
    let wander = CustomEvaluator {
        label: "wander",
        score: half,
        install: |think, bot| think.add_goal_wander(bot),
    };
    let explore = CustomEvaluator {
        label: "explore_too",
        score: half,
        install: |think, bot| think.add_goal_explore(bot),
    };

    for _ in 0..5 {
        let mut bot = bot();
        let mut brain = Think::with_evaluators(
            bot.id(),
            vec![
                GoalEvaluator::new(EvaluatorKind::Custom(wander), 1.0),
                GoalEvaluator::new(EvaluatorKind::Custom(explore), 1.0),
            ],
        );
        brain.arbitrate(&mut bot);
        assert_eq!(brain.front_kind(), Some(GoalKind::Wander));
    }
}

#[test]
fn bias_can_flip_the_decision() {
    let mut bot = bot();
    spot_enemy(&mut bot, Vector2D::new(50.0, 0.0));
    let timid = BiasProfile {
        attack_target: 0.1,
        explore: 1.0,
        ..BiasProfile::default()
    };
    let mut brain = Think::new(bot.id(), &timid);

    brain.arbitrate(&mut bot);
    assert_eq!(brain.front_kind(), Some(GoalKind::Explore));
}

#[test]
fn repeated_arbitration_keeps_the_current_goal() {
    let mut bot = bot();
    let mut brain = think(&bot);
    brain.process(&mut bot);

    for _ in 0..3 {
        brain.arbitrate(&mut bot);
        brain.process(&mut bot);
    }
    assert_eq!(brain.subgoal_kinds(), vec![GoalKind::Explore]);
    assert_eq!(bot.journal().count(GoalKind::Explore), 0);
}

struct Collect<'a>(&'a mut Vec<GoalKind>);

impl goal_tree::GoalReporter<GoalKind> for Collect<'_> {
    fn goal(&mut self, _depth: usize, kind: GoalKind, _status: Status) {
        self.0.push(kind);
    }
}
