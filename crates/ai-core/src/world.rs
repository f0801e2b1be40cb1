use core::fmt::Debug;

/// Actor identifier. Populations are ticked in ascending `stable_id` order,
/// which is also the value logged as the `actor` field.
pub trait AgentId: Copy + Ord + Debug {
    fn stable_id(self) -> u64;
}

macro_rules! widen_agent_id {
    ($($t:ty),*) => {
        $(impl AgentId for $t {
            fn stable_id(self) -> u64 {
                self as u64
            }
        })*
    };
}

widen_agent_id!(u16, u32, u64, usize);

/// The simulated creature a tree drives.
///
/// The engine only needs a stable id (for ordering and logs) and a way to force
/// the actor back to a safe resting action; leaf callbacks read and mutate the
/// rest of the concrete type directly.
pub trait Actor {
    type Id: AgentId;

    fn id(&self) -> Self::Id;

    /// Force the current action to the safe default ("idle").
    fn set_idle(&mut self);
}

/// Read-only world access.
///
/// The core crate intentionally does not prescribe which queries a world must
/// expose; leaf callbacks interpret the concrete world type themselves.
pub trait WorldView {
    type Actor: Actor;
}

/// Write access / effect sink.
pub trait WorldMut: WorldView {}
