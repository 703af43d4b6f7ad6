use serde::Serialize;
use tracing::debug;

use crate::icons::{builtin, Icon, IconRegistry};

use super::NavNode;

/// One clickable or static label in a breadcrumb trail.
///
/// `href == None` marks the current page: the rendering layer shows it
/// as a static label instead of a link.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct BreadcrumbEntry {
    pub label: String,
    pub icon: Option<Icon>,
    pub href: Option<String>,
    /// Stable identity for the rendering layer. "home" for the home
    /// entry, the node's path when it has one, otherwise its name.
    pub key: String,
}

/// Resolves a current path against a navigation tree into an ordered
/// breadcrumb trail.
///
/// Resolution is a pure function of its inputs: no I/O, no caching, no
/// mutation of the tree. It never fails; missing or malformed data
/// degrades to the fallback entry or to absent icons/hrefs.
#[derive(Clone, Debug)]
pub struct Resolver {
    icons: IconRegistry,
}

impl Resolver {
    pub fn new(icons: IconRegistry) -> Self {
        Resolver { icons }
    }

    /// Resolver backed by the built-in icon set.
    pub fn with_builtin_icons() -> Self {
        Resolver {
            icons: builtin().clone(),
        }
    }

    /// Produce the breadcrumb trail for `current_path`.
    ///
    /// Behaviour:
    /// - Entry 0 is always "Home" linking to `home_href`.
    /// - The tree is searched one level at a time (top-level nodes,
    ///   then all children, then all grandchildren); the first node
    ///   whose `path` equals `current_path` wins. Comparison is an
    ///   exact string match with no normalization.
    /// - A match at depth N emits N entries, ancestors first. Ancestors
    ///   link to their own path when they have one; the matched node is
    ///   the current page and never links.
    /// - No match emits a single static entry labelled
    ///   `fallback_title`.
    pub fn resolve(
        &self,
        tree: &[NavNode],
        current_path: &str,
        home_href: &str,
        fallback_title: &str,
    ) -> Vec<BreadcrumbEntry> {
        let mut trail = vec![BreadcrumbEntry {
            label: "Home".to_string(),
            icon: self.icons.lookup("home"),
            href: Some(home_href.to_string()),
            key: "home".to_string(),
        }];

        match find_match(tree, current_path) {
            Some(chain) => {
                debug!(path = current_path, depth = chain.len(), "breadcrumb match");
                let last = chain.len() - 1;
                for (i, node) in chain.iter().enumerate() {
                    let href = if i == last { None } else { node.path.clone() };
                    trail.push(self.entry_for(node, href));
                }
            }
            None => {
                debug!(path = current_path, "no breadcrumb match, using fallback");
                trail.push(BreadcrumbEntry {
                    label: fallback_title.to_string(),
                    icon: None,
                    href: None,
                    key: "fallback".to_string(),
                });
            }
        }

        trail
    }

    fn entry_for(&self, node: &NavNode, href: Option<String>) -> BreadcrumbEntry {
        let icon = node.icon.as_ref().and_then(|r| self.icons.resolve(r));
        let key = node
            .path
            .clone()
            .unwrap_or_else(|| node.name.clone());
        BreadcrumbEntry {
            label: node.name.clone(),
            icon,
            href,
            key,
        }
    }
}

// Search the first three levels of the tree for an exact path match.
// Level-by-level so a shallow match always beats a deeper one, and
// within a level array order decides ties. Returns the ancestor chain
// ending at the matched node.
fn find_match<'a>(tree: &'a [NavNode], current_path: &str) -> Option<Vec<&'a NavNode>> {
    for top in tree {
        if top.path.as_deref() == Some(current_path) {
            return Some(vec![top]);
        }
    }
    for top in tree {
        for child in &top.children {
            if child.path.as_deref() == Some(current_path) {
                return Some(vec![top, child]);
            }
        }
    }
    for top in tree {
        for child in &top.children {
            for grandchild in &child.children {
                if grandchild.path.as_deref() == Some(current_path) {
                    return Some(vec![top, child, grandchild]);
                }
            }
        }
    }
    None
}
