use std::borrow::Cow;

use ai_core::{Blackboard, Status, TickContext, WorldMut};

use crate::bt::{stamp_child, BtNode, NodeKind, NodeMeta};

fn stamp_children<W>(children: &mut [Box<dyn BtNode<W>>], depth: u32)
where
    W: WorldMut + 'static,
{
    for child in children.iter_mut() {
        stamp_child(child, depth);
    }
}

fn child_refs<W>(children: &[Box<dyn BtNode<W>>]) -> Vec<&dyn BtNode<W>>
where
    W: WorldMut + 'static,
{
    children.iter().map(|c| &**c as &dyn BtNode<W>).collect()
}

/// Runs children in order until one does not succeed (AND).
///
/// Every call starts again at the first child, so a child that returned
/// `Running` last walk is only reached again if all earlier children pass
/// again this walk.
pub struct Sequence<W>
where
    W: WorldMut + 'static,
{
    meta: NodeMeta,
    children: Vec<Box<dyn BtNode<W>>>,
}

impl<W> Sequence<W>
where
    W: WorldMut + 'static,
{
    pub fn new(mut children: Vec<Box<dyn BtNode<W>>>) -> Self {
        stamp_children(&mut children, 0);
        Self {
            meta: NodeMeta::default(),
            children,
        }
    }

    pub fn named(mut self, name: impl Into<Cow<'static, str>>) -> Self {
        self.meta.name = Some(name.into());
        self
    }

    /// Place this node at `depth`; immediate children move to `depth + 1`.
    pub fn at_depth(mut self, depth: u32) -> Self {
        self.meta.depth = depth;
        stamp_children(&mut self.children, depth);
        self
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}

impl<W> BtNode<W> for Sequence<W>
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
        for (i, child) in self.children.iter_mut().enumerate() {
            let status = child.execute(ctx, actor, world, blackboard);
            if status != Status::Success {
                return self.meta.finish_with(
                    status,
                    || format!("child {i} returned {status:?}"),
                    ctx,
                    blackboard,
                );
            }
        }
        self.meta.finish(Status::Success, "", ctx, blackboard)
    }

    fn kind(&self) -> NodeKind {
        NodeKind::Sequence
    }

    fn meta(&self) -> &NodeMeta {
        &self.meta
    }

    fn meta_mut(&mut self) -> &mut NodeMeta {
        &mut self.meta
    }

    fn children(&self) -> Vec<&dyn BtNode<W>> {
        child_refs(&self.children)
    }

    fn attach_depth(&mut self, depth: u32) {
        self.meta.depth = depth;
        for child in self.children.iter_mut() {
            child.attach_depth(depth + 1);
        }
    }
}

/// Runs children in order until one does not fail (OR, by priority).
///
/// Earlier children always get the first chance each walk, which is what lets
/// a higher-priority branch interrupt a lower one that was `Running`.
pub struct Selector<W>
where
    W: WorldMut + 'static,
{
    meta: NodeMeta,
    children: Vec<Box<dyn BtNode<W>>>,
    running: Option<usize>,
}

impl<W> Selector<W>
where
    W: WorldMut + 'static,
{
    pub fn new(mut children: Vec<Box<dyn BtNode<W>>>) -> Self {
        stamp_children(&mut children, 0);
        Self {
            meta: NodeMeta::default(),
            children,
            running: None,
        }
    }

    pub fn named(mut self, name: impl Into<Cow<'static, str>>) -> Self {
        self.meta.name = Some(name.into());
        self
    }

    /// Place this node at `depth`; immediate children move to `depth + 1`.
    pub fn at_depth(mut self, depth: u32) -> Self {
        self.meta.depth = depth;
        stamp_children(&mut self.children, depth);
        self
    }

    /// Index of the child that returned `Running` on the last walk.
    ///
    /// Informational only; traversal never reads it.
    pub fn running_child_index(&self) -> Option<usize> {
        self.running
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}

impl<W> BtNode<W> for Selector<W>
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
        for (i, child) in self.children.iter_mut().enumerate() {
            let status = child.execute(ctx, actor, world, blackboard);
            if status != Status::Failure {
                self.running = status.is_running().then_some(i);
                return self.meta.finish_with(
                    status,
                    || format!("child {i} returned {status:?}"),
                    ctx,
                    blackboard,
                );
            }
        }
        self.running = None;
        self.meta.finish(Status::Failure, "all children failed", ctx, blackboard)
    }

    fn kind(&self) -> NodeKind {
        NodeKind::Selector
    }

    fn meta(&self) -> &NodeMeta {
        &self.meta
    }

    fn meta_mut(&mut self) -> &mut NodeMeta {
        &mut self.meta
    }

    fn children(&self) -> Vec<&dyn BtNode<W>> {
        child_refs(&self.children)
    }

    fn attach_depth(&mut self, depth: u32) {
        self.meta.depth = depth;
        for child in self.children.iter_mut() {
            child.attach_depth(depth + 1);
        }
    }
}

/// How a [`Parallel`] node turns its children's results into one status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParallelPolicy {
    /// Run every child and report `Success` whatever they return.
    #[default]
    AlwaysSucceed,
    /// `Success` once at least this many children succeed in the same walk,
    /// `Failure` once so many failed that the threshold is out of reach,
    /// `Running` otherwise.
    RequireSuccesses(usize),
}

/// Runs every child on every walk, within the same synchronous call.
pub struct Parallel<W>
where
    W: WorldMut + 'static,
{
    meta: NodeMeta,
    children: Vec<Box<dyn BtNode<W>>>,
    policy: ParallelPolicy,
}

impl<W> Parallel<W>
where
    W: WorldMut + 'static,
{
    pub fn new(mut children: Vec<Box<dyn BtNode<W>>>) -> Self {
        stamp_children(&mut children, 0);
        Self {
            meta: NodeMeta::default(),
            children,
            policy: ParallelPolicy::default(),
        }
    }

    pub fn with_policy(mut self, policy: ParallelPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn named(mut self, name: impl Into<Cow<'static, str>>) -> Self {
        self.meta.name = Some(name.into());
        self
    }

    pub fn at_depth(mut self, depth: u32) -> Self {
        self.meta.depth = depth;
        stamp_children(&mut self.children, depth);
        self
    }

    pub fn policy(&self) -> ParallelPolicy {
        self.policy
    }
}

impl<W> BtNode<W> for Parallel<W>
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
        let mut successes = 0usize;
        let mut failures = 0usize;
        for child in self.children.iter_mut() {
            match child.execute(ctx, actor, world, blackboard) {
                Status::Success => successes += 1,
                Status::Failure => failures += 1,
                Status::Running => {}
            }
        }

        let status = match self.policy {
            ParallelPolicy::AlwaysSucceed => Status::Success,
            ParallelPolicy::RequireSuccesses(required) => {
                let reachable = self.children.len() - failures;
                if successes >= required {
                    Status::Success
                } else if reachable < required {
                    Status::Failure
                } else {
                    Status::Running
                }
            }
        };
        self.meta.finish_with(
            status,
            || format!("{successes} succeeded, {failures} failed"),
            ctx,
            blackboard,
        )
    }

    fn kind(&self) -> NodeKind {
        NodeKind::Parallel
    }

    fn meta(&self) -> &NodeMeta {
        &self.meta
    }

    fn meta_mut(&mut self) -> &mut NodeMeta {
        &mut self.meta
    }

    fn children(&self) -> Vec<&dyn BtNode<W>> {
        child_refs(&self.children)
    }

    fn attach_depth(&mut self, depth: u32) {
        self.meta.depth = depth;
        for child in self.children.iter_mut() {
            child.attach_depth(depth + 1);
        }
    }
}
