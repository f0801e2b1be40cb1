use std::borrow::Cow;

use ai_core::{Blackboard, Status, TickContext, WorldMut};

use crate::bt::{BtNode, NodeKind, NodeMeta};

/// What an action callback reports: a status plus an optional debug note.
///
/// Callbacks can return a bare `Status`, or `(Status, note)` when they have
/// something to show in the telemetry ledger.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeafOutput {
    pub status: Status,
    pub debug: Option<String>,
}

impl LeafOutput {
    pub fn new(status: Status) -> Self {
        Self {
            status,
            debug: None,
        }
    }

    pub fn with_debug(mut self, debug: impl Into<String>) -> Self {
        self.debug = Some(debug.into());
        self
    }
}

impl From<Status> for LeafOutput {
    fn from(status: Status) -> Self {
        Self::new(status)
    }
}

impl From<(Status, String)> for LeafOutput {
    fn from((status, debug): (Status, String)) -> Self {
        Self::new(status).with_debug(debug)
    }
}

impl From<(Status, &str)> for LeafOutput {
    fn from((status, debug): (Status, &str)) -> Self {
        Self::new(status).with_debug(debug)
    }
}

/// What a condition predicate reports: pass/fail plus an optional debug note.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConditionOutput {
    pub passed: bool,
    pub debug: Option<String>,
}

impl From<bool> for ConditionOutput {
    fn from(passed: bool) -> Self {
        Self {
            passed,
            debug: None,
        }
    }
}

impl From<(bool, String)> for ConditionOutput {
    fn from((passed, debug): (bool, String)) -> Self {
        Self {
            passed,
            debug: Some(debug),
        }
    }
}

impl From<(bool, &str)> for ConditionOutput {
    fn from((passed, debug): (bool, &str)) -> Self {
        Self {
            passed,
            debug: Some(debug.to_owned()),
        }
    }
}

type ActionFn<W> = dyn FnMut(
    &TickContext,
    &mut <W as ai_core::WorldView>::Actor,
    &mut W,
    &mut Blackboard,
) -> LeafOutput;

/// Leaf that runs caller-supplied domain logic.
///
/// The engine puts no limits on what the callback reads or mutates. State that
/// has to survive between walks (progress counters, targets) belongs in the
/// closure or the blackboard; if a higher-priority branch takes over, the
/// callback is simply not called again and must cope with stale state when it
/// is reached later.
pub struct ActionNode<W>
where
    W: WorldMut + 'static,
{
    meta: NodeMeta,
    callback: Box<ActionFn<W>>,
}

impl<W> ActionNode<W>
where
    W: WorldMut + 'static,
{
    pub fn new<F, R>(mut callback: F) -> Self
    where
        F: FnMut(&TickContext, &mut W::Actor, &mut W, &mut Blackboard) -> R + 'static,
        R: Into<LeafOutput>,
    {
        Self {
            meta: NodeMeta::default(),
            callback: Box::new(
                move |ctx: &TickContext,
                      actor: &mut W::Actor,
                      world: &mut W,
                      bb: &mut Blackboard|
                      -> LeafOutput { callback(ctx, actor, world, bb).into() },
            ),
        }
    }

    pub fn named(mut self, name: impl Into<Cow<'static, str>>) -> Self {
        self.meta.name = Some(name.into());
        self
    }

    pub fn at_depth(mut self, depth: u32) -> Self {
        self.meta.depth = depth;
        self
    }
}

impl<W> BtNode<W> for ActionNode<W>
where
    W: WorldMut + 'static,
{
    fn execute(
        &mut self,
        ctx: &TickContext,
        actor: &mut W::Actor,
        world: &mut W,
        blackboard: &mut Blackboard,
    ) -> Status {
        let output = (self.callback)(ctx, actor, world, blackboard);
        let debug = output.debug.as_deref().unwrap_or("");
        self.meta.finish(output.status, debug, ctx, blackboard)
    }

    fn kind(&self) -> NodeKind {
        NodeKind::Action
    }

    fn meta(&self) -> &NodeMeta {
        &self.meta
    }

    fn meta_mut(&mut self) -> &mut NodeMeta {
        &mut self.meta
    }
}

type PredicateFn<W> = dyn FnMut(
    &TickContext,
    &mut <W as ai_core::WorldView>::Actor,
    &mut W,
    &mut Blackboard,
) -> ConditionOutput;

/// Leaf that maps a predicate to `Success` (true) or `Failure` (false). Never
/// returns `Running`.
pub struct ConditionNode<W>
where
    W: WorldMut + 'static,
{
    meta: NodeMeta,
    predicate: Box<PredicateFn<W>>,
}

impl<W> ConditionNode<W>
where
    W: WorldMut + 'static,
{
    pub fn new<F, R>(mut predicate: F) -> Self
    where
        F: FnMut(&TickContext, &mut W::Actor, &mut W, &mut Blackboard) -> R + 'static,
        R: Into<ConditionOutput>,
    {
        Self {
            meta: NodeMeta::default(),
            predicate: Box::new(
                move |ctx: &TickContext,
                      actor: &mut W::Actor,
                      world: &mut W,
                      bb: &mut Blackboard|
                      -> ConditionOutput { predicate(ctx, actor, world, bb).into() },
            ),
        }
    }

    pub fn named(mut self, name: impl Into<Cow<'static, str>>) -> Self {
        self.meta.name = Some(name.into());
        self
    }

    pub fn at_depth(mut self, depth: u32) -> Self {
        self.meta.depth = depth;
        self
    }
}

impl<W> BtNode<W> for ConditionNode<W>
where
    W: WorldMut + 'static,
{
    fn execute(
        &mut self,
        ctx: &TickContext,
        actor: &mut W::Actor,
        world: &mut W,
        blackboard: &mut Blackboard,
    ) -> Status {
        let output = (self.predicate)(ctx, actor, world, blackboard);
        let status = if output.passed {
            Status::Success
        } else {
            Status::Failure
        };
        let debug = output.debug.as_deref().unwrap_or("");
        self.meta.finish(status, debug, ctx, blackboard)
    }

    fn kind(&self) -> NodeKind {
        NodeKind::Condition
    }

    fn meta(&self) -> &NodeMeta {
        &self.meta
    }

    fn meta_mut(&mut self) -> &mut NodeMeta {
        &mut self.meta
    }
}
