use std::any::Any;

use ai_core::{Blackboard, Policy, Status, TickContext, WorldMut};

use crate::bt::BtNode;

/// Adapts a tree root to the scheduler's [`Policy`] seam.
///
/// Attaching a root assigns depths to the whole tree in one recursive pass, so
/// subtrees built without explicit depths still report correct depths.
pub struct BtPolicy<W>
where
    W: WorldMut + 'static,
{
    root: Box<dyn BtNode<W>>,
    last: Option<Status>,
}

impl<W> BtPolicy<W>
where
    W: WorldMut + 'static,
{
    pub fn new(mut root: Box<dyn BtNode<W>>) -> Self {
        root.attach_depth(0);
        Self { root, last: None }
    }

    pub fn root(&self) -> &dyn BtNode<W> {
        &*self.root
    }

    pub fn last_status(&self) -> Option<Status> {
        self.last
    }
}

impl<W> Policy<W> for BtPolicy<W>
where
    W: WorldMut + 'static,
{
    fn tick(
        &mut self,
        ctx: &TickContext,
        actor: &mut W::Actor,
        world: &mut W,
        blackboard: &mut Blackboard,
    ) -> Status {
        let status = self.root.execute(ctx, actor, world, blackboard);
        self.last = Some(status);
        status
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
