//! Umbrella crate that re-exports the `ai-*` building blocks.
//!
//! - [`core`]: blackboard, telemetry ledger, configuration and the tick scheduler
//! - [`bt`]: behavior-tree nodes and the [`BtPolicy`](bt::BtPolicy) adapter
//! - [`tools`]: read-only snapshots for debug overlays
//!
//! [`prelude`] pulls in what a simulation needs to define actors and trees.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

#[cfg(feature = "core")]
#[cfg_attr(docsrs, doc(cfg(feature = "core")))]
pub use ai_core as core;

#[cfg(feature = "bt")]
#[cfg_attr(docsrs, doc(cfg(feature = "bt")))]
pub use ai_bt as bt;

#[cfg(feature = "tools")]
#[cfg_attr(docsrs, doc(cfg(feature = "tools")))]
pub use ai_tools as tools;

#[cfg(feature = "bt")]
#[cfg_attr(docsrs, doc(cfg(feature = "bt")))]
pub mod prelude {
    pub use ai_bt::builder::{action, condition, cooldown, inverter, selector, sequence, succeeder};
    pub use ai_bt::{BtNode, BtPolicy};
    pub use ai_core::{
        tick_actor, tick_population, Actor, BbKey, Blackboard, Brain, EngineConfig, Inhabitant,
        Status, TickContext, TickOutcome, WorldMut, WorldView,
    };
}
