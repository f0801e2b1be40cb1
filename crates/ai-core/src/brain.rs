use crate::{
    Actor, AgentId, BbKey, Blackboard, EngineConfig, Policy, Status, TickContext, WorldMut,
};

/// Simulation time of the actor's last tree walk.
pub const LAST_AI_UPDATE: BbKey<f64> = BbKey::new("last_ai_update_time");

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BrainConfig {
    /// Minimum elapsed simulation time between two walks.
    pub tick_interval: f64,
}

impl Default for BrainConfig {
    fn default() -> Self {
        EngineConfig::default().brain_config()
    }
}

impl BrainConfig {
    pub fn should_think(&self, now: f64, last_update: f64) -> bool {
        now - last_update >= self.tick_interval
    }
}

/// What a scheduler call did for one actor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// The tree was walked and returned this status.
    Walked(Status),
    /// Not enough time has passed since the last walk.
    Throttled,
    /// The actor has no brain attached; it was forced idle.
    Unconfigured,
}

/// An actor's decision policy together with its blackboard.
///
/// Both are built once when the actor is created and dropped with it.
pub struct Brain<W>
where
    W: WorldMut + 'static,
{
    pub config: BrainConfig,
    pub blackboard: Blackboard,
    pub policy: Box<dyn Policy<W>>,
}

impl<W> Brain<W>
where
    W: WorldMut + 'static,
{
    pub fn new(policy: Box<dyn Policy<W>>) -> Self {
        Self {
            config: BrainConfig::default(),
            blackboard: Blackboard::new(),
            policy,
        }
    }

    pub fn with_config(policy: Box<dyn Policy<W>>, config: &EngineConfig) -> Self {
        Self {
            config: config.brain_config(),
            blackboard: Blackboard::with_telemetry(config.telemetry()),
            policy,
        }
    }

    pub fn last_update(&self) -> f64 {
        self.blackboard.get(&LAST_AI_UPDATE).copied().unwrap_or(0.0)
    }

    /// Walk the policy if at least one tick interval has passed since the
    /// previous walk. Otherwise the actor keeps whatever action the last walk
    /// left it with.
    pub fn tick(&mut self, ctx: &TickContext, actor: &mut W::Actor, world: &mut W) -> TickOutcome {
        let last = self.last_update();
        if !self.config.should_think(ctx.time, last) {
            return TickOutcome::Throttled;
        }

        let status = self.policy.tick(ctx, actor, world, &mut self.blackboard);
        self.blackboard.set(&LAST_AI_UPDATE, ctx.time);
        tracing::trace!(
            actor = actor.id().stable_id(),
            time = ctx.time,
            ?status,
            "policy walked"
        );
        TickOutcome::Walked(status)
    }
}

/// Scheduler entry point: the single call the simulation loop makes once per
/// actor per tick.
///
/// A missing brain is a configuration fault, not an error: the actor is forced
/// idle and the fault is logged.
pub fn tick_actor<W>(
    ctx: &TickContext,
    actor: &mut W::Actor,
    world: &mut W,
    brain: Option<&mut Brain<W>>,
) -> TickOutcome
where
    W: WorldMut + 'static,
{
    match brain {
        Some(brain) => brain.tick(ctx, actor, world),
        None => {
            tracing::warn!(
                actor = actor.id().stable_id(),
                "actor has no behavior tree or blackboard attached; forcing idle"
            );
            actor.set_idle();
            TickOutcome::Unconfigured
        }
    }
}

/// An actor as the simulation stores it: the actor value plus its brain, if
/// one was attached.
pub struct Inhabitant<W>
where
    W: WorldMut + 'static,
{
    pub actor: W::Actor,
    pub brain: Option<Brain<W>>,
}

impl<W> Inhabitant<W>
where
    W: WorldMut + 'static,
{
    pub fn new(actor: W::Actor, brain: Brain<W>) -> Self {
        Self {
            actor,
            brain: Some(brain),
        }
    }

    pub fn without_brain(actor: W::Actor) -> Self {
        Self { actor, brain: None }
    }

    pub fn tick(&mut self, ctx: &TickContext, world: &mut W) -> TickOutcome {
        tick_actor(ctx, &mut self.actor, world, self.brain.as_mut())
    }
}

/// Tick a whole population in stable actor-id order.
///
/// The slice is left sorted by id; the returned outcomes line up with it.
pub fn tick_population<W>(
    ctx: &TickContext,
    world: &mut W,
    population: &mut [Inhabitant<W>],
) -> Vec<TickOutcome>
where
    W: WorldMut + 'static,
{
    population.sort_by_key(|i| i.actor.id().stable_id());
    population
        .iter_mut()
        .map(|inhabitant| inhabitant.tick(ctx, world))
        .collect()
}
