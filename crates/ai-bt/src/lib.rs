//! Behavior trees that are walked from the root on every AI tick.
//!
//! There is no resume pointer: composites always restart at their first
//! child, so higher-priority branches are re-checked every walk and can
//! interrupt a lower branch that was `Running`. Multi-tick continuity comes
//! from state held by leaf callbacks and by the actor's [`Blackboard`].
//!
//! - [`BtNode`]: the node contract, plus [`NodeMeta`] (name, depth, last status)
//! - Leaves: [`ActionNode`], [`ConditionNode`]
//! - Composites: [`Sequence`], [`Selector`], [`Parallel`]
//! - Decorators: [`Inverter`], [`Succeeder`], [`Cooldown`], [`Repeater`], [`Timeout`]
//! - [`BtPolicy`]: plugs a tree into [`ai_core::Brain`]
//!
//! [`Blackboard`]: ai_core::Blackboard

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

pub mod bt;
pub mod builder;
pub mod nodes;
pub mod policy;

pub use ai_core::Status;
pub use bt::{BtNode, NodeKind, NodeMeta};
pub use nodes::{
    ActionNode, ConditionNode, ConditionOutput, Cooldown, Inverter, LeafOutput, Parallel,
    ParallelPolicy, Repeater, Selector, Sequence, Succeeder, Timeout,
};
pub use policy::BtPolicy;
