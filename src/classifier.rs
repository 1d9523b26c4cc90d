use crate::constants::UNKNOWN_LABEL;
use crate::data::{Dataset, Table};
use crate::errors::Id3Error;
use crate::metric::accuracy;
use crate::splitter::InformationGainSplitter;
use crate::tree::predict::Prediction;
use crate::tree::tree::Tree;
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// ID3 Classifier object
///
/// Holds the parameters used to grow a tree, and the tree itself once
/// [`Id3Classifier::fit`] has been called. Only the parameters are
/// serialized.
#[derive(Deserialize, Serialize, Clone, Debug)]
pub struct Id3Classifier {
    /// Label returned by `predict` when an instance has a value with no
    /// matching branch in the tree.
    #[serde(default = "default_unknown_label")]
    pub unknown_label: String,
    /// Attribute indices the tree may split on. All attributes are used if `None`.
    #[serde(default)]
    pub candidate_attributes: Option<BTreeSet<usize>>,
    /// Should the fitted tree be written to the debug log.
    #[serde(default = "default_log_tree")]
    pub log_tree: bool,
    // Members internal to the classifier object, and not parameters set by the user.
    #[serde(skip)]
    tree: Option<Tree>,
    #[serde(skip)]
    attributes: Vec<String>,
}

fn default_unknown_label() -> String {
    UNKNOWN_LABEL.to_string()
}
fn default_log_tree() -> bool {
    false
}

impl Default for Id3Classifier {
    fn default() -> Self {
        Id3Classifier {
            unknown_label: default_unknown_label(),
            candidate_attributes: None,
            log_tree: default_log_tree(),
            tree: None,
            attributes: Vec::new(),
        }
    }
}

impl Id3Classifier {
    /// ID3 Classifier object
    ///
    /// * `unknown_label` - Label returned for instances that fall off the tree.
    /// * `candidate_attributes` - Attribute indices the tree may split on, all if `None`.
    /// * `log_tree` - Write the fitted tree to the debug log.
    pub fn new(
        unknown_label: String,
        candidate_attributes: Option<BTreeSet<usize>>,
        log_tree: bool,
    ) -> Result<Self, Id3Error> {
        let classifier = Id3Classifier {
            unknown_label,
            candidate_attributes,
            log_tree,
            tree: None,
            attributes: Vec::new(),
        };

        classifier.validate_parameters()?;

        Ok(classifier)
    }

    pub fn validate_parameters(&self) -> Result<(), Id3Error> {
        if self.unknown_label.is_empty() {
            return Err(Id3Error::InvalidParameter(
                "unknown_label".to_string(),
                "a non-empty string".to_string(),
                "an empty string".to_string(),
            ));
        }
        Ok(())
    }

    /// Grow the tree on every row of `table`, replacing any previous fit.
    pub fn fit(&mut self, table: &Table) -> Result<(), Id3Error> {
        self.validate_parameters()?;
        let data = Dataset::new(table);
        let candidates = match &self.candidate_attributes {
            Some(c) => c.clone(),
            None => (0..table.n_attributes()).collect(),
        };

        let tree = Tree::fit(&InformationGainSplitter, &data, candidates)?;
        info!(
            "Fitted tree on {} rows and {} attributes, depth {}, {} leaves.",
            table.n_rows(),
            table.n_attributes(),
            tree.depth,
            tree.n_leaves
        );
        if self.log_tree {
            debug!("\n{}", tree);
        }

        self.attributes = table.attributes().to_vec();
        self.tree = Some(tree);
        Ok(())
    }

    /// The fitted tree.
    pub fn tree(&self) -> Result<&Tree, Id3Error> {
        self.tree.as_ref().ok_or(Id3Error::NotFitted)
    }

    /// Names of the attributes the tree was fitted with.
    pub fn attributes(&self) -> &[String] {
        &self.attributes
    }

    /// Predict the label of a single instance of attribute values.
    pub fn predict<S: AsRef<str>>(&self, instance: &[S]) -> Result<String, Id3Error> {
        let prediction = self.tree()?.classify(instance, &self.attributes)?;
        Ok(match prediction {
            Prediction::Label(label) => label.to_string(),
            Prediction::Unknown => self.unknown_label.clone(),
        })
    }

    /// Predict every row of a table, ignoring its label column.
    pub fn predict_table(&self, table: &Table) -> Result<Vec<String>, Id3Error> {
        (0..table.n_rows()).map(|row| self.predict(&table.instance(row))).collect()
    }

    /// Accuracy of the predictions against the labels of `table`.
    pub fn score(&self, table: &Table) -> Result<f64, Id3Error> {
        let y_pred = self.predict_table(table)?;
        Ok(accuracy(&table.labels(), &y_pred))
    }

    /// Dump the parameters of the classifier as a json object.
    pub fn config_json(&self) -> Result<String, Id3Error> {
        serde_json::to_string(self).map_err(|e| Id3Error::UnableToRead(e.to_string()))
    }

    /// Load classifier parameters from a json string.
    ///
    /// * `json_str` - String object, which can be deserialized from json.
    pub fn from_json(json_str: &str) -> Result<Self, Id3Error> {
        let classifier =
            serde_json::from_str::<Id3Classifier>(json_str).map_err(|e| Id3Error::UnableToRead(e.to_string()))?;
        classifier.validate_parameters()?;
        Ok(classifier)
    }

    // Set methods for paramters

    /// Set the unknown label on the classifier.
    /// * `unknown_label` - Label returned for instances that fall off the tree.
    pub fn set_unknown_label(mut self, unknown_label: String) -> Self {
        self.unknown_label = unknown_label;
        self
    }

    /// Set the candidate attributes on the classifier.
    /// * `candidate_attributes` - Attribute indices the tree may split on.
    pub fn set_candidate_attributes(mut self, candidate_attributes: Option<BTreeSet<usize>>) -> Self {
        self.candidate_attributes = candidate_attributes;
        self
    }

    /// Set whether the fitted tree is logged.
    /// * `log_tree` - Write the fitted tree to the debug log.
    pub fn set_log_tree(mut self, log_tree: bool) -> Self {
        self.log_tree = log_tree;
        self
    }
}
