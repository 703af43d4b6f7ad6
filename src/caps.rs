use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::nav::NavNode;

/// Explicit set of enabled module capabilities.
///
/// Navigation nodes may name a capability; nodes whose capability is
/// not enabled are filtered out of the tree before resolution, along
/// with their whole subtree. Passing the set in explicitly keeps the
/// resolver itself capability-agnostic.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CapabilitySet {
    enabled: HashSet<String>,
}

impl CapabilitySet {
    pub fn new() -> Self {
        CapabilitySet::default()
    }

    pub fn enable(&mut self, name: impl Into<String>) {
        self.enabled.insert(name.into());
    }

    pub fn is_enabled(&self, name: &str) -> bool {
        self.enabled.contains(name)
    }

    /// Whether a node is visible under this capability set. Ungated
    /// nodes are always visible.
    pub fn allows(&self, node: &NavNode) -> bool {
        match &node.capability {
            Some(cap) => self.is_enabled(cap),
            None => true,
        }
    }

    /// Copy of the tree with disallowed nodes removed. A disallowed
    /// node takes its subtree with it; splicing grandchildren up a
    /// level would leak the contents of gated sections. Sibling order
    /// is preserved.
    pub fn filter_tree(&self, tree: &[NavNode]) -> Vec<NavNode> {
        let filtered: Vec<NavNode> = tree
            .iter()
            .filter(|node| self.allows(node))
            .map(|node| {
                let mut node = node.clone();
                node.children = self.filter_tree(&node.children);
                node
            })
            .collect();
        if filtered.len() != tree.len() {
            debug!(
                dropped = tree.len() - filtered.len(),
                "capability filter removed nodes"
            );
        }
        filtered
    }
}

impl<S: Into<String>> FromIterator<S> for CapabilitySet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        CapabilitySet {
            enabled: iter.into_iter().map(Into::into).collect(),
        }
    }
}
