use std::borrow::Cow;

use ai_core::{Blackboard, Status, TickContext, WorldMut};

/// Broad node category, for introspection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Action,
    Condition,
    Sequence,
    Selector,
    Parallel,
    Inverter,
    Succeeder,
    Cooldown,
    Repeater,
    Timeout,
}

impl NodeKind {
    pub fn as_str(self) -> &'static str {
        match self {
            NodeKind::Action => "action",
            NodeKind::Condition => "condition",
            NodeKind::Sequence => "sequence",
            NodeKind::Selector => "selector",
            NodeKind::Parallel => "parallel",
            NodeKind::Inverter => "inverter",
            NodeKind::Succeeder => "succeeder",
            NodeKind::Cooldown => "cooldown",
            NodeKind::Repeater => "repeater",
            NodeKind::Timeout => "timeout",
        }
    }
}

/// State every node carries regardless of its kind.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NodeMeta {
    /// Telemetry key. Unnamed nodes run the same way but are not recorded.
    pub name: Option<Cow<'static, str>>,
    pub depth: u32,
    pub last_status: Option<Status>,
}

impl NodeMeta {
    /// Store `status` as the node's latest result and, for named nodes, append
    /// it to the blackboard ledger.
    pub fn finish(
        &mut self,
        status: Status,
        debug_info: &str,
        ctx: &TickContext,
        blackboard: &mut Blackboard,
    ) -> Status {
        self.last_status = Some(status);
        if let Some(name) = self.name.as_deref() {
            blackboard.record_node_execution(name, status, ctx.time, self.depth, debug_info);
        }
        status
    }

    /// Like [`finish`](Self::finish), but only builds the debug note when the
    /// node is named and the note will actually be recorded.
    pub fn finish_with(
        &mut self,
        status: Status,
        debug_info: impl FnOnce() -> String,
        ctx: &TickContext,
        blackboard: &mut Blackboard,
    ) -> Status {
        if self.name.is_some() {
            let debug_info = debug_info();
            self.finish(status, &debug_info, ctx, blackboard)
        } else {
            self.finish(status, "", ctx, blackboard)
        }
    }
}

/// A behavior-tree node.
///
/// `execute` performs one bounded walk of the subtree. Composite and decorator
/// nodes keep no resume position: every call starts again from the first
/// child, and anything that must survive between walks lives in leaf closures
/// or in the blackboard.
pub trait BtNode<W>: 'static
where
    W: WorldMut + 'static,
{
    fn execute(
        &mut self,
        ctx: &TickContext,
        actor: &mut W::Actor,
        world: &mut W,
        blackboard: &mut Blackboard,
    ) -> Status;

    fn kind(&self) -> NodeKind;

    fn meta(&self) -> &NodeMeta;

    fn meta_mut(&mut self) -> &mut NodeMeta;

    /// Structural children, for introspection only.
    fn children(&self) -> Vec<&dyn BtNode<W>> {
        Vec::new()
    }

    /// Assign `depth` to this node and `depth + 1`, `depth + 2`, ... to its
    /// whole subtree.
    fn attach_depth(&mut self, depth: u32) {
        self.meta_mut().depth = depth;
    }

    fn name(&self) -> Option<&str> {
        self.meta().name.as_deref()
    }

    fn depth(&self) -> u32 {
        self.meta().depth
    }

    fn last_status(&self) -> Option<Status> {
        self.meta().last_status
    }
}

pub(crate) fn stamp_child<W>(child: &mut Box<dyn BtNode<W>>, parent_depth: u32)
where
    W: WorldMut + 'static,
{
    child.meta_mut().depth = parent_depth + 1;
}
