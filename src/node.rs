use std::collections::BTreeMap;
use std::fmt;

/// A node of a categorical decision tree.
///
/// Parents own their children, so a tree is a strict hierarchy that is
/// dropped recursively with its root.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// Terminal node carrying the predicted label.
    Leaf { label: String },
    /// Node splitting on an attribute, with one child per observed value.
    Internal {
        attribute: String,
        children: BTreeMap<String, Node>,
    },
}

impl Node {
    pub fn leaf(label: impl Into<String>) -> Self {
        Node::Leaf { label: label.into() }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, Node::Leaf { .. })
    }

    /// Number of internal nodes on the longest path from this node to a leaf.
    pub fn depth(&self) -> usize {
        match self {
            Node::Leaf { .. } => 0,
            Node::Internal { children, .. } => 1 + children.values().map(Node::depth).max().unwrap_or(0),
        }
    }

    pub fn n_leaves(&self) -> usize {
        match self {
            Node::Leaf { .. } => 1,
            Node::Internal { children, .. } => children.values().map(Node::n_leaves).sum(),
        }
    }

    pub fn n_nodes(&self) -> usize {
        match self {
            Node::Leaf { .. } => 1,
            Node::Internal { children, .. } => 1 + children.values().map(Node::n_nodes).sum::<usize>(),
        }
    }
}

impl fmt::Display for Node {
    // This trait requires `fmt` with this exact signature.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Node::Leaf { label } => write!(f, "Label: {}", label),
            Node::Internal { attribute, .. } => write!(f, "Attribute: {}", attribute),
        }
    }
}
