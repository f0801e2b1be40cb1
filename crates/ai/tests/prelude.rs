#![cfg(feature = "full")]

use ai::prelude::*;

#[derive(Debug, Default)]
struct Pond;

#[derive(Debug)]
struct Frog {
    id: u32,
    croaks: u32,
}

impl Actor for Frog {
    type Id = u32;

    fn id(&self) -> u32 {
        self.id
    }

    fn set_idle(&mut self) {}
}

impl WorldView for Pond {
    type Actor = Frog;
}

impl WorldMut for Pond {}

fn quiet(_: &TickContext, frog: &mut Frog, _: &mut Pond, _: &mut Blackboard) -> bool {
    frog.croaks < 3
}

fn croak(_: &TickContext, frog: &mut Frog, _: &mut Pond, _: &mut Blackboard) -> Status {
    frog.croaks += 1;
    Status::Success
}

#[test]
fn prelude_builds_and_ticks_a_tree() {
    let tree: Box<dyn BtNode<Pond>> = sequence(
        "chorus",
        vec![condition("quiet", quiet), action("croak", croak)],
    );
    let mut population = vec![Inhabitant::new(
        Frog { id: 1, croaks: 0 },
        Brain::with_config(Box::new(BtPolicy::new(tree)), &EngineConfig::default()),
    )];

    for hour in 1..=4 {
        tick_population(&TickContext::new(hour, hour as f64), &mut Pond, &mut population);
    }

    assert_eq!(population[0].actor.croaks, 3);
    let snapshot = ai::tools::snapshot_tree(
        population[0]
            .brain
            .as_ref()
            .and_then(|b| b.policy.as_any().downcast_ref::<BtPolicy<Pond>>())
            .map(BtPolicy::root)
            .unwrap(),
    );
    assert_eq!(snapshot.last_status, Some(Status::Failure));
}
