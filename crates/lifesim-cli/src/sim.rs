use ai_bt::BtPolicy;
use ai_core::{tick_population, Brain, EngineConfig, Inhabitant, TickContext, TickOutcome};
use ai_tools::ActorSnapshot;

use crate::meadow::{critter_tree, Critter, Meadow};

/// Walks, throttled calls and idle fallbacks seen over a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OutcomeCounts {
    pub walked: u64,
    pub throttled: u64,
    pub unconfigured: u64,
}

impl OutcomeCounts {
    fn add(&mut self, outcome: TickOutcome) {
        match outcome {
            TickOutcome::Walked(_) => self.walked += 1,
            TickOutcome::Throttled => self.throttled += 1,
            TickOutcome::Unconfigured => self.unconfigured += 1,
        }
    }
}

pub struct Simulation {
    pub meadow: Meadow,
    pub population: Vec<Inhabitant<Meadow>>,
    pub tick: u64,
    pub time: f64,
    pub counts: OutcomeCounts,
}

impl Simulation {
    /// `critters` configured critters with ids `1..=critters`, plus one stray
    /// with no brain attached.
    pub fn new(config: &EngineConfig, critters: u64) -> Self {
        let mut population: Vec<Inhabitant<Meadow>> = (1..=critters)
            .map(|id| {
                let policy = Box::new(BtPolicy::new(critter_tree()));
                let brain: Brain<Meadow> = Brain::with_config(policy, config);
                Inhabitant::new(Critter::new(id), brain)
            })
            .collect();
        population.push(Inhabitant::without_brain(Critter::new(critters + 1)));

        Self {
            meadow: Meadow::default(),
            population,
            tick: 0,
            time: 0.0,
            counts: OutcomeCounts::default(),
        }
    }

    /// Advance the clock by `hours` and give every inhabitant its AI tick.
    pub fn step(&mut self, hours: f64) {
        self.tick += 1;
        self.time += hours;
        self.meadow.regrow(hours);
        for inhabitant in self.population.iter_mut() {
            inhabitant.actor.drift(hours);
        }

        let ctx = TickContext::new(self.tick, self.time);
        let outcomes = tick_population(&ctx, &mut self.meadow, &mut self.population);
        let mut walked = 0;
        for outcome in outcomes {
            walked += u64::from(matches!(outcome, TickOutcome::Walked(_)));
            self.counts.add(outcome);
        }
        tracing::debug!(
            tick = self.tick,
            time = self.time,
            walked,
            grass = self.meadow.grass,
            "meadow tick"
        );
    }

    /// Advance `hours` in whole steps of `step`; a trailing partial step is
    /// dropped.
    pub fn run(&mut self, hours: f64, step: f64) {
        let steps = (hours / step + 1e-9).floor() as u64;
        for _ in 0..steps {
            self.step(step);
        }
    }

    pub fn inhabitant(&self, id: u64) -> Option<&Inhabitant<Meadow>> {
        self.population.iter().find(|i| i.actor.id == id)
    }

    /// Debug snapshot for a configured critter.
    pub fn snapshot(&self, id: u64) -> Option<ActorSnapshot> {
        let inhabitant = self.inhabitant(id)?;
        let brain = inhabitant.brain.as_ref()?;
        Some(ActorSnapshot::capture(&inhabitant.actor, brain))
    }
}
