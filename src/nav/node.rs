use serde::{Deserialize, Serialize};

use crate::icons::IconRef;

/// One node of the server-supplied navigation tree.
///
/// Trees are at most three levels deep: top-level sections, their
/// children, and grandchildren. Deeper nesting is simply never visited
/// by the resolver. Every field defaults when absent so a partially
/// malformed tree still deserializes instead of taking the whole
/// navigation down with it.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct NavNode {
    /// Display label for the node.
    #[serde(default)]
    pub name: String,

    /// Route path this node links to. `None` for section headers that
    /// group children but are not themselves pages.
    #[serde(default)]
    pub path: Option<String>,

    /// Icon for the node, either a registry name or an inline icon.
    #[serde(default)]
    pub icon: Option<IconRef>,

    /// Capability gating this node. `None` means always visible.
    #[serde(default)]
    pub capability: Option<String>,

    #[serde(default)]
    pub children: Vec<NavNode>,
}

impl NavNode {
    /// Convenience constructor for a leaf page node.
    pub fn page(name: impl Into<String>, path: impl Into<String>) -> Self {
        NavNode {
            name: name.into(),
            path: Some(path.into()),
            ..Default::default()
        }
    }

    /// Convenience constructor for a section without a path of its own.
    pub fn section(name: impl Into<String>, children: Vec<NavNode>) -> Self {
        NavNode {
            name: name.into(),
            children,
            ..Default::default()
        }
    }

    pub fn with_icon(mut self, icon: IconRef) -> Self {
        self.icon = Some(icon);
        self
    }

    pub fn with_capability(mut self, capability: impl Into<String>) -> Self {
        self.capability = Some(capability.into());
        self
    }

    pub fn with_children(mut self, children: Vec<NavNode>) -> Self {
        self.children = children;
        self
    }
}
