//! Per-actor memory, execution telemetry and tick scheduling for behavior-driven actors.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

pub mod blackboard;
pub mod brain;
pub mod config;
pub mod error;
pub mod ledger;
pub mod policy;
pub mod status;
pub mod tick;
pub mod world;

pub use blackboard::{BbKey, Blackboard};
pub use brain::{
    tick_actor, tick_population, Brain, BrainConfig, Inhabitant, TickOutcome, LAST_AI_UPDATE,
};
pub use config::EngineConfig;
pub use error::{BlackboardError, ConfigError};
pub use ledger::{ExecutionLedger, ExecutionSample, NodeExecutionRecord, TelemetryConfig};
pub use policy::Policy;
pub use status::{SampleStatus, Status};
pub use tick::TickContext;
pub use world::{Actor, AgentId, WorldMut, WorldView};
