use ai_bt::builder::{action, condition, cooldown, selector, sequence};
use ai_bt::{BtNode, BtPolicy, Status};
use ai_core::{Actor, Blackboard, Brain, Policy, TickContext, WorldMut, WorldView};
use ai_tools::{snapshot_tree, ActorSnapshot, LedgerSnapshot};

#[derive(Debug, Default)]
struct Meadow;

#[derive(Debug)]
struct Rabbit {
    id: u64,
    hungry: bool,
}

impl Actor for Rabbit {
    type Id = u64;

    fn id(&self) -> u64 {
        self.id
    }

    fn set_idle(&mut self) {}
}

impl WorldView for Meadow {
    type Actor = Rabbit;
}

impl WorldMut for Meadow {}

type Node = Box<dyn BtNode<Meadow>>;

fn is_hungry(_: &TickContext, rabbit: &mut Rabbit, _: &mut Meadow, _: &mut Blackboard) -> bool {
    rabbit.hungry
}

fn graze(_: &TickContext, rabbit: &mut Rabbit, _: &mut Meadow, _: &mut Blackboard) -> Status {
    rabbit.hungry = false;
    Status::Success
}

fn wander(_: &TickContext, _: &mut Rabbit, _: &mut Meadow, _: &mut Blackboard) -> Status {
    Status::Running
}

fn rabbit_tree() -> Node {
    selector(
        "root",
        vec![
            sequence(
                "feed",
                vec![
                    condition("hungry", is_hungry),
                    cooldown("eat", 4.0, action("graze", graze)),
                ],
            ),
            action("wander", wander),
        ],
    )
}

#[test]
fn snapshot_mirrors_tree_shape() {
    let policy = BtPolicy::new(rabbit_tree());
    let snap = snapshot_tree(policy.root());

    assert_eq!(snap.name.as_deref(), Some("root"));
    assert_eq!(snap.kind, "selector");
    assert_eq!(snap.node_count(), 6);
    assert_eq!(snap.last_status, None);

    let graze = snap.find("graze").unwrap();
    assert_eq!(graze.depth, 3);
    assert_eq!(graze.kind, "action");
    assert_eq!(snap.find("eat").unwrap().kind, "cooldown");
    assert!(snap.find("missing").is_none());
}

#[test]
fn snapshot_reports_last_statuses_without_touching_state() {
    let mut policy = BtPolicy::new(rabbit_tree());
    let mut rabbit = Rabbit { id: 1, hungry: true };
    let mut bb = Blackboard::new();

    policy.tick(&TickContext::at(1.0), &mut rabbit, &mut Meadow, &mut bb);
    policy.tick(&TickContext::at(2.0), &mut rabbit, &mut Meadow, &mut bb);

    let before = bb.node_execution_data().clone();
    let snap = snapshot_tree(policy.root());

    assert_eq!(snap.last_status, Some(Status::Running));
    assert_eq!(snap.find("hungry").unwrap().last_status, Some(Status::Failure));
    assert_eq!(snap.find("graze").unwrap().last_status, Some(Status::Success));
    assert_eq!(snap.find("wander").unwrap().last_status, Some(Status::Running));
    assert_eq!(bb.node_execution_data().len(), before.len());
}

#[test]
fn actor_snapshot_bundles_tree_and_ledger() {
    let mut brain: Brain<Meadow> = Brain::new(Box::new(BtPolicy::new(rabbit_tree())));
    let mut rabbit = Rabbit { id: 42, hungry: true };
    brain.tick(&TickContext::at(1.0), &mut rabbit, &mut Meadow);

    let snap = ActorSnapshot::capture(&rabbit, &brain);

    assert_eq!(snap.actor, 42);
    assert_eq!(snap.last_update, 1.0);
    assert_eq!(snap.tree.as_ref().map(|t| t.kind.as_str()), Some("selector"));
    let statuses: Vec<(&str, Status)> = snap.ledger.statuses().collect();
    assert_eq!(
        statuses,
        vec![
            ("eat", Status::Success),
            ("feed", Status::Success),
            ("graze", Status::Success),
            ("hungry", Status::Success),
            ("root", Status::Success),
        ]
    );
}

#[test]
fn ledger_snapshot_of_fresh_blackboard_is_empty() {
    assert!(LedgerSnapshot::capture(&Blackboard::new()).nodes.is_empty());
}
