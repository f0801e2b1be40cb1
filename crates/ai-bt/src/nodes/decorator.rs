use std::borrow::Cow;

use ai_core::{BbKey, Blackboard, Status, TickContext, WorldMut};

use crate::bt::{stamp_child, BtNode, NodeKind, NodeMeta};

/// Boilerplate shared by every single-child decorator.
macro_rules! decorator_common {
    ($kind:expr) => {
        fn kind(&self) -> NodeKind {
            $kind
        }

        fn meta(&self) -> &NodeMeta {
            &self.meta
        }

        fn meta_mut(&mut self) -> &mut NodeMeta {
            &mut self.meta
        }

        fn children(&self) -> Vec<&dyn BtNode<W>> {
            vec![&*self.child as &dyn BtNode<W>]
        }

        fn attach_depth(&mut self, depth: u32) {
            self.meta.depth = depth;
            self.child.attach_depth(depth + 1);
        }
    };
}

fn wrap<W>(mut child: Box<dyn BtNode<W>>) -> Box<dyn BtNode<W>>
where
    W: WorldMut + 'static,
{
    stamp_child(&mut child, 0);
    child
}

/// Swaps `Success` and `Failure`; `Running` passes through.
pub struct Inverter<W>
where
    W: WorldMut + 'static,
{
    meta: NodeMeta,
    child: Box<dyn BtNode<W>>,
}

impl<W> Inverter<W>
where
    W: WorldMut + 'static,
{
    pub fn new(child: Box<dyn BtNode<W>>) -> Self {
        Self {
            meta: NodeMeta::default(),
            child: wrap(child),
        }
    }

    pub fn named(mut self, name: impl Into<Cow<'static, str>>) -> Self {
        self.meta.name = Some(name.into());
        self
    }

    pub fn at_depth(mut self, depth: u32) -> Self {
        self.meta.depth = depth;
        stamp_child(&mut self.child, depth);
        self
    }
}

impl<W> BtNode<W> for Inverter<W>
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
        let status = self.child.execute(ctx, actor, world, blackboard).invert();
        self.meta.finish(status, "", ctx, blackboard)
    }

    decorator_common!(NodeKind::Inverter);
}

/// Runs its child for its side effects and always reports `Success`.
pub struct Succeeder<W>
where
    W: WorldMut + 'static,
{
    meta: NodeMeta,
    child: Box<dyn BtNode<W>>,
}

impl<W> Succeeder<W>
where
    W: WorldMut + 'static,
{
    pub fn new(child: Box<dyn BtNode<W>>) -> Self {
        Self {
            meta: NodeMeta::default(),
            child: wrap(child),
        }
    }

    pub fn named(mut self, name: impl Into<Cow<'static, str>>) -> Self {
        self.meta.name = Some(name.into());
        self
    }

    pub fn at_depth(mut self, depth: u32) -> Self {
        self.meta.depth = depth;
        stamp_child(&mut self.child, depth);
        self
    }
}

impl<W> BtNode<W> for Succeeder<W>
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
        let child_status = self.child.execute(ctx, actor, world, blackboard);
        self.meta.finish_with(
            Status::Success,
            || format!("child returned {child_status:?}"),
            ctx,
            blackboard,
        )
    }

    decorator_common!(NodeKind::Succeeder);
}

/// Blocks a fresh start of its child until `duration` hours have passed since
/// the child last started successfully.
///
/// The expiry time is kept in the blackboard under `"cooldown_" + name`. A
/// child that is still `Running` is never cut off by the gate and does not
/// re-arm it. A child that fails does not arm it either.
pub struct Cooldown<W>
where
    W: WorldMut + 'static,
{
    meta: NodeMeta,
    child: Box<dyn BtNode<W>>,
    duration: f64,
    key: BbKey<f64>,
}

impl<W> Cooldown<W>
where
    W: WorldMut + 'static,
{
    pub fn new(
        duration_hours: f64,
        child: Box<dyn BtNode<W>>,
        name: impl Into<Cow<'static, str>>,
    ) -> Self {
        let name = name.into();
        let key = BbKey::owned(format!("cooldown_{name}"));
        Self {
            meta: NodeMeta {
                name: Some(name),
                ..NodeMeta::default()
            },
            child: wrap(child),
            duration: duration_hours,
            key,
        }
    }

    pub fn at_depth(mut self, depth: u32) -> Self {
        self.meta.depth = depth;
        stamp_child(&mut self.child, depth);
        self
    }

    pub fn duration(&self) -> f64 {
        self.duration
    }

    /// Blackboard key holding the expiry time.
    pub fn key(&self) -> &BbKey<f64> {
        &self.key
    }
}

impl<W> BtNode<W> for Cooldown<W>
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
        if self.child.last_status() == Some(Status::Running) {
            let status = self.child.execute(ctx, actor, world, blackboard);
            return self.meta.finish(status, "child in progress", ctx, blackboard);
        }

        if let Some(expiry) = blackboard.get(&self.key).copied() {
            if ctx.time < expiry {
                tracing::trace!(key = self.key.name(), expiry, now = ctx.time, "cooldown active");
                return self.meta.finish_with(
                    Status::Failure,
                    || format!("cooling down until {expiry:.2}"),
                    ctx,
                    blackboard,
                );
            }
        }

        let status = self.child.execute(ctx, actor, world, blackboard);
        if matches!(status, Status::Success | Status::Running) {
            blackboard.set(&self.key, ctx.time + self.duration);
        }
        self.meta.finish(status, "", ctx, blackboard)
    }

    decorator_common!(NodeKind::Cooldown);
}

/// Re-runs its child within one walk while it keeps succeeding.
///
/// With the default count of one this is a plain pass-through.
pub struct Repeater<W>
where
    W: WorldMut + 'static,
{
    meta: NodeMeta,
    child: Box<dyn BtNode<W>>,
    times: u32,
}

impl<W> Repeater<W>
where
    W: WorldMut + 'static,
{
    pub fn new(child: Box<dyn BtNode<W>>) -> Self {
        Self {
            meta: NodeMeta::default(),
            child: wrap(child),
            times: 1,
        }
    }

    /// Run the child up to `times` times per walk (at least once).
    pub fn times(mut self, times: u32) -> Self {
        self.times = times.max(1);
        self
    }

    pub fn named(mut self, name: impl Into<Cow<'static, str>>) -> Self {
        self.meta.name = Some(name.into());
        self
    }

    pub fn at_depth(mut self, depth: u32) -> Self {
        self.meta.depth = depth;
        stamp_child(&mut self.child, depth);
        self
    }
}

impl<W> BtNode<W> for Repeater<W>
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
        let times = self.times;
        let mut completed = 0u32;
        let mut status = Status::Success;
        while completed < times {
            status = self.child.execute(ctx, actor, world, blackboard);
            if status != Status::Success {
                break;
            }
            completed += 1;
        }
        self.meta.finish_with(
            status,
            || format!("{completed}/{times} repetitions"),
            ctx,
            blackboard,
        )
    }

    decorator_common!(NodeKind::Repeater);
}

/// Bounds how long its child may stay `Running`.
///
/// Without a limit this is a plain pass-through. With one, the node remembers
/// when the child first reported `Running`; once the limit has elapsed it
/// returns `Failure` without calling the child. The start time is node state,
/// so a branch abandoned mid-run and entered again later still counts from
/// the earlier start.
pub struct Timeout<W>
where
    W: WorldMut + 'static,
{
    meta: NodeMeta,
    child: Box<dyn BtNode<W>>,
    limit: Option<f64>,
    started: Option<f64>,
}

impl<W> Timeout<W>
where
    W: WorldMut + 'static,
{
    pub fn new(child: Box<dyn BtNode<W>>) -> Self {
        Self {
            meta: NodeMeta::default(),
            child: wrap(child),
            limit: None,
            started: None,
        }
    }

    pub fn limit(mut self, hours: f64) -> Self {
        self.limit = Some(hours);
        self
    }

    pub fn named(mut self, name: impl Into<Cow<'static, str>>) -> Self {
        self.meta.name = Some(name.into());
        self
    }

    pub fn at_depth(mut self, depth: u32) -> Self {
        self.meta.depth = depth;
        stamp_child(&mut self.child, depth);
        self
    }

    /// Time at which the current `Running` stretch began.
    pub fn started_at(&self) -> Option<f64> {
        self.started
    }
}

impl<W> BtNode<W> for Timeout<W>
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
        let Some(limit) = self.limit else {
            let status = self.child.execute(ctx, actor, world, blackboard);
            return self.meta.finish(status, "", ctx, blackboard);
        };

        if let Some(started) = self.started {
            if ctx.elapsed_since(started) >= limit {
                self.started = None;
                return self.meta.finish_with(
                    Status::Failure,
                    || format!("timed out after {limit:.2}h (started {started:.2})"),
                    ctx,
                    blackboard,
                );
            }
        }

        let status = self.child.execute(ctx, actor, world, blackboard);
        if status.is_running() {
            self.started.get_or_insert(ctx.time);
        } else {
            self.started = None;
        }
        self.meta.finish(status, "", ctx, blackboard)
    }

    decorator_common!(NodeKind::Timeout);
}
