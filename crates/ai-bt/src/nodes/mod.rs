//! Concrete node types: leaves wrap domain callbacks, composites and
//! decorators combine other nodes.

pub mod composite;
pub mod decorator;
pub mod leaf;

pub use composite::{Parallel, ParallelPolicy, Selector, Sequence};
pub use decorator::{Cooldown, Inverter, Repeater, Succeeder, Timeout};
pub use leaf::{ActionNode, ConditionNode, ConditionOutput, LeafOutput};
