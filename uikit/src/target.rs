//! References to widget instances.

use std::fmt;

use uidom::{Document, NodeId, SelectorList};

/// What a widget call refers to: a node handle or a selector.
///
/// A selector resolves to its first match in document order. Nodes that
/// are no longer connected resolve to nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    Node(NodeId),
    Selector(String),
}

impl Target {
    pub fn resolve(&self, doc: &Document) -> Option<NodeId> {
        match self {
            Self::Node(node) => {
                (doc.is_element(*node) && doc.is_connected(*node)).then_some(*node)
            }
            Self::Selector(source) => match SelectorList::parse(source) {
                Ok(selector) => doc.query(&selector),
                Err(err) => {
                    log::debug!("[uikit] target not resolved: {err}");
                    None
                }
            },
        }
    }
}

impl From<NodeId> for Target {
    fn from(node: NodeId) -> Self {
        Self::Node(node)
    }
}

impl From<&NodeId> for Target {
    fn from(node: &NodeId) -> Self {
        Self::Node(*node)
    }
}

impl From<&str> for Target {
    fn from(selector: &str) -> Self {
        Self::Selector(selector.to_string())
    }
}

impl From<String> for Target {
    fn from(selector: String) -> Self {
        Self::Selector(selector)
    }
}

impl From<&Target> for Target {
    fn from(target: &Target) -> Self {
        target.clone()
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Node(node) => write!(f, "{node}"),
            Self::Selector(source) => f.write_str(source),
        }
    }
}
