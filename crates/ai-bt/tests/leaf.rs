use ai_bt::{ActionNode, BtNode, ConditionNode, LeafOutput, NodeKind, Status};
use ai_core::{Actor, BbKey, Blackboard, TickContext, WorldMut, WorldView};

#[derive(Debug, Default)]
struct TestWorld {
    food: u32,
}

#[derive(Debug, Default)]
struct Critter {
    hunger: f32,
}

impl Actor for Critter {
    type Id = u64;

    fn id(&self) -> u64 {
        3
    }

    fn set_idle(&mut self) {}
}

impl WorldView for TestWorld {
    type Actor = Critter;
}

impl WorldMut for TestWorld {}

const MEALS: BbKey<u32> = BbKey::new("meals");

#[test]
fn bare_status_and_pair_normalize_the_same_way() {
    assert_eq!(LeafOutput::from(Status::Running), LeafOutput::new(Status::Running));
    let pair = LeafOutput::from((Status::Failure, "blocked"));
    assert_eq!(pair.status, Status::Failure);
    assert_eq!(pair.debug.as_deref(), Some("blocked"));
}

#[test]
fn action_mutates_actor_world_and_blackboard() {
    let mut node = ActionNode::<TestWorld>::new(|_, critter, world, bb| {
        world.food -= 1;
        critter.hunger = 0.0;
        let meals = bb.get(&MEALS).copied().unwrap_or(0);
        bb.set(&MEALS, meals + 1);
        (Status::Success, format!("meal {}", meals + 1))
    })
    .named("eat");
    let mut world = TestWorld { food: 2 };
    let mut critter = Critter { hunger: 0.9 };
    let mut bb = Blackboard::new();

    let status = node.execute(&TickContext::at(2.0), &mut critter, &mut world, &mut bb);

    assert_eq!(status, Status::Success);
    assert_eq!(world.food, 1);
    assert_eq!(critter.hunger, 0.0);
    assert_eq!(bb.get(&MEALS), Some(&1));
    let record = bb.node_execution("eat").unwrap();
    assert_eq!(record.debug_info, "meal 1");
    assert_eq!(record.last_executed, 2.0);
    assert_eq!(node.kind(), NodeKind::Action);
}

#[test]
fn unnamed_leaf_runs_without_telemetry() {
    let mut node = ActionNode::<TestWorld>::new(|_, _, _, _| Status::Running);
    let mut bb = Blackboard::new();

    let status = node.execute(
        &TickContext::at(0.0),
        &mut Critter::default(),
        &mut TestWorld::default(),
        &mut bb,
    );

    assert_eq!(status, Status::Running);
    assert_eq!(node.last_status(), Some(Status::Running));
    assert!(bb.node_execution_data().is_empty());
}

#[test]
fn condition_maps_predicate_to_status() {
    let mut hungry = ConditionNode::<TestWorld>::new(|_, critter, _, _| {
        (critter.hunger > 0.5, format!("hunger {:.1}", critter.hunger))
    })
    .named("hungry");
    let mut bb = Blackboard::new();
    let mut world = TestWorld::default();

    let mut critter = Critter { hunger: 0.8 };
    let status = hungry.execute(&TickContext::at(0.0), &mut critter, &mut world, &mut bb);
    assert_eq!(status, Status::Success);

    critter.hunger = 0.1;
    let status = hungry.execute(&TickContext::at(1.0), &mut critter, &mut world, &mut bb);
    assert_eq!(status, Status::Failure);

    let record = bb.node_execution("hungry").unwrap();
    assert_eq!(record.status, Status::Failure);
    assert_eq!(record.debug_info, "hunger 0.1");
    assert_eq!(hungry.kind(), NodeKind::Condition);
}

#[test]
fn bare_condition_records_empty_debug() {
    let mut node =
        ConditionNode::<TestWorld>::new(|_, _, world, _| world.food > 0).named("has_food");
    let mut bb = Blackboard::new();

    node.execute(
        &TickContext::at(0.0),
        &mut Critter::default(),
        &mut TestWorld { food: 1 },
        &mut bb,
    );

    assert_eq!(bb.node_execution("has_food").unwrap().debug_info, "");
}
