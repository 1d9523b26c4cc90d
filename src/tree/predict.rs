use super::tree::Tree;
use crate::constants::UNKNOWN_LABEL;
use crate::errors::Id3Error;
use crate::node::Node;
use std::fmt;

/// Outcome of classifying an instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Prediction<'t> {
    /// A label seen during training.
    Label(&'t str),
    /// The instance carries a value with no matching branch in the tree.
    Unknown,
}

impl<'t> Prediction<'t> {
    pub fn label(&self) -> Option<&'t str> {
        match *self {
            Prediction::Label(label) => Some(label),
            Prediction::Unknown => None,
        }
    }

    pub fn is_unknown(&self) -> bool {
        matches!(self, Prediction::Unknown)
    }
}

impl fmt::Display for Prediction<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Prediction::Label(label) => write!(f, "{}", label),
            Prediction::Unknown => write!(f, "{}", UNKNOWN_LABEL),
        }
    }
}

impl Tree {
    /// Classify an instance by walking the tree from the root.
    ///
    /// * `instance` - Attribute values, indexed like `attributes`.
    /// * `attributes` - The attribute names the tree was trained with.
    ///
    /// A value without a branch gives `Prediction::Unknown`. An instance of
    /// the wrong length, or a split attribute missing from `attributes`, is
    /// an error.
    pub fn classify<S, A>(&self, instance: &[S], attributes: &[A]) -> Result<Prediction<'_>, Id3Error>
    where
        S: AsRef<str>,
        A: AsRef<str>,
    {
        if instance.len() != attributes.len() {
            return Err(Id3Error::InstanceLength(instance.len(), attributes.len()));
        }
        let mut node = &self.root;
        loop {
            match node {
                Node::Leaf { label } => return Ok(Prediction::Label(label.as_str())),
                Node::Internal { attribute, children } => {
                    let idx = attributes
                        .iter()
                        .position(|a| {
                            let name: &str = a.as_ref();
                            name == attribute
                        })
                        .ok_or_else(|| Id3Error::UnknownAttribute(attribute.clone()))?;
                    let value: &str = instance[idx].as_ref();
                    match children.get(value) {
                        Some(child) => node = child,
                        None => return Ok(Prediction::Unknown),
                    }
                }
            }
        }
    }
}
