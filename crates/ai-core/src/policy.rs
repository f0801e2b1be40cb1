use std::any::Any;

use crate::{Blackboard, Status, TickContext, WorldMut};

/// Decision logic walked by a [`Brain`](crate::Brain) once per AI tick.
///
/// `ai-bt` provides the behavior-tree implementation; the scheduler itself only
/// sees this trait.
pub trait Policy<W>: 'static
where
    W: WorldMut + 'static,
{
    fn tick(
        &mut self,
        ctx: &TickContext,
        actor: &mut W::Actor,
        world: &mut W,
        blackboard: &mut Blackboard,
    ) -> Status;

    /// Concrete policy, for tooling that inspects a [`Brain`](crate::Brain)
    /// without knowing what drives it.
    fn as_any(&self) -> &dyn Any;
}
