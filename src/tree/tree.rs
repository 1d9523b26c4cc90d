use crate::constants::{LEVEL_INDENT, VALUE_INDENT};
use crate::data::Dataset;
use crate::errors::Id3Error;
use crate::node::Node;
use crate::splitter::Splitter;
use crate::utils::majority_label;
use log::debug;
use std::collections::{BTreeMap, BTreeSet};
use std::fmt::{self, Display};

/// A fitted categorical decision tree.
#[derive(Debug, Clone, PartialEq)]
pub struct Tree {
    pub root: Node,
    pub depth: usize,
    pub n_leaves: usize,
}

impl Tree {
    /// Grow a tree on `data`.
    ///
    /// * `splitter` - Chooses the attribute to split each node on.
    /// * `data` - The rows to learn from, must not be empty.
    /// * `candidates` - Attribute indices the tree is allowed to split on.
    pub fn fit<T: Splitter>(splitter: &T, data: &Dataset, candidates: BTreeSet<usize>) -> Result<Self, Id3Error> {
        if data.is_empty() {
            return Err(Id3Error::EmptyDataset);
        }
        let n_attributes = data.n_attributes();
        if let Some(&attr) = candidates.iter().find(|&&attr| attr >= n_attributes) {
            return Err(Id3Error::AttributeIndexOutOfRange(attr, n_attributes));
        }

        let root = build_node(splitter, data, candidates, 0)?;
        Ok(Tree {
            depth: root.depth(),
            n_leaves: root.n_leaves(),
            root,
        })
    }

    pub fn n_nodes(&self) -> usize {
        self.root.n_nodes()
    }

    /// Indented outline of the tree, one line per node.
    pub fn render(&self) -> String {
        self.to_string()
    }
}

/// Grow the subtree for `data`. Every split removes one attribute from the
/// candidates handed to the children, so recursion depth is bounded by the
/// number of candidates.
fn build_node<T: Splitter>(
    splitter: &T,
    data: &Dataset,
    candidates: BTreeSet<usize>,
    depth: usize,
) -> Result<Node, Id3Error> {
    let counts = data.class_counts();
    if counts.len() == 1 {
        if let Some(&label) = counts.keys().next() {
            return Ok(Node::leaf(label));
        }
    }

    let split = if candidates.is_empty() {
        None
    } else {
        splitter.best_split(data, &candidates)
    };
    let Some(split) = split else {
        let label = majority_label(&counts).ok_or(Id3Error::EmptyDataset)?;
        debug!(
            "Majority leaf {} over {} rows at depth {}, {} candidates left.",
            label,
            data.n_rows(),
            depth,
            candidates.len()
        );
        return Ok(Node::leaf(label));
    };

    let attr = split.split_feature;
    let attribute = data.attributes()[attr].clone();
    debug!(
        "Splitting {} rows on {} with gain {:.4} at depth {}.",
        data.n_rows(),
        attribute,
        split.split_gain,
        depth
    );

    let mut remaining = candidates;
    remaining.remove(&attr);

    let mut children = BTreeMap::new();
    for value in data.unique_values(attr) {
        let subset = data.filter(attr, value);
        let child = build_node(splitter, &subset, remaining.clone(), depth + 1)?;
        children.insert(value.to_string(), child);
    }

    Ok(Node::Internal { attribute, children })
}

fn render_node(node: &Node, indent: &str, r: &mut String) {
    match node {
        Node::Leaf { .. } => {
            *r += format!("{}{}\n", indent, node).as_str();
        }
        Node::Internal { children, .. } => {
            *r += format!("{}{}\n", indent, node).as_str();
            let child_indent = format!("{}{}", indent, LEVEL_INDENT);
            for (value, child) in children {
                *r += format!("{}{}Value: {}\n", indent, VALUE_INDENT, value).as_str();
                render_node(child, &child_indent, r);
            }
        }
    }
}

impl Display for Tree {
    // This trait requires `fmt` with this exact signature.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut r = String::new();
        render_node(&self.root, "", &mut r);
        write!(f, "{}", r)
    }
}
