//! Read-only introspection for behavior-driven actors.
//!
//! Snapshots copy a tree's structure and a blackboard's telemetry into plain
//! data that debug overlays and tooling can render, or (with the `serde`
//! feature) dump as JSON. Taking a snapshot never touches the live tree.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

pub mod snapshot;

pub use snapshot::{snapshot_tree, ActorSnapshot, LedgerSnapshot, NodeSnapshot};
