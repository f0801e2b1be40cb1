use std::collections::BTreeMap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use ai_bt::{BtNode, BtPolicy};
use ai_core::{Actor, AgentId, Blackboard, Brain, NodeExecutionRecord, Status, WorldMut};

/// One node of a tree, with its subtree.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct NodeSnapshot {
    pub name: Option<String>,
    pub kind: String,
    pub depth: u32,
    pub last_status: Option<Status>,
    pub children: Vec<NodeSnapshot>,
}

impl NodeSnapshot {
    /// Pre-order search by node name.
    pub fn find(&self, name: &str) -> Option<&NodeSnapshot> {
        if self.name.as_deref() == Some(name) {
            return Some(self);
        }
        self.children.iter().find_map(|c| c.find(name))
    }

    /// Number of nodes in this subtree, including this one.
    pub fn node_count(&self) -> usize {
        1 + self.children.iter().map(NodeSnapshot::node_count).sum::<usize>()
    }
}

/// Copy the structure and latest statuses of the tree under `root`.
pub fn snapshot_tree<W>(root: &dyn BtNode<W>) -> NodeSnapshot
where
    W: WorldMut + 'static,
{
    NodeSnapshot {
        name: root.name().map(str::to_owned),
        kind: root.kind().as_str().to_owned(),
        depth: root.depth(),
        last_status: root.last_status(),
        children: root.children().into_iter().map(snapshot_tree).collect(),
    }
}

/// Copy of a blackboard's execution ledger.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LedgerSnapshot {
    pub nodes: BTreeMap<String, NodeExecutionRecord>,
}

impl LedgerSnapshot {
    pub fn capture(blackboard: &Blackboard) -> Self {
        Self {
            nodes: blackboard.node_execution_data().clone(),
        }
    }

    /// Latest recorded status per node, in name order.
    pub fn statuses(&self) -> impl Iterator<Item = (&str, Status)> + '_ {
        self.nodes.iter().map(|(name, r)| (name.as_str(), r.status))
    }
}

/// Everything tooling needs to show one actor's decision state.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ActorSnapshot {
    pub actor: u64,
    pub last_update: f64,
    /// Present when the actor's brain is driven by a behavior tree.
    pub tree: Option<NodeSnapshot>,
    pub ledger: LedgerSnapshot,
}

impl ActorSnapshot {
    pub fn capture<W>(actor: &W::Actor, brain: &Brain<W>) -> Self
    where
        W: WorldMut + 'static,
    {
        let tree = brain
            .policy
            .as_any()
            .downcast_ref::<BtPolicy<W>>()
            .map(|policy| snapshot_tree(policy.root()));
        Self {
            actor: actor.id().stable_id(),
            last_update: brain.last_update(),
            tree,
            ledger: LedgerSnapshot::capture(&brain.blackboard),
        }
    }

    #[cfg(feature = "serde")]
    #[cfg_attr(docsrs, doc(cfg(feature = "serde")))]
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
