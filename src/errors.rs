//! Errors
//!
//! Custom error types used throughout the `id3_tree` crate.
use thiserror::Error;

/// Errors that can occur while building or using an ID3 tree.
#[derive(Debug, Error, PartialEq)]
pub enum Id3Error {
    /// A row does not have the expected number of values.
    #[error("Row {0} has {1} values, expected {2}.")]
    RaggedRow(usize, usize, usize),
    /// The label column does not exist in the row layout.
    #[error("Label index {0} is out of range for rows with {1} columns.")]
    LabelIndexOutOfRange(usize, usize),
    /// Two attributes share a name, so lookups by name would be ambiguous.
    #[error("Attribute name {0} is used more than once.")]
    DuplicateAttribute(String),
    /// A tree cannot be built from a dataset without rows.
    #[error("The dataset has no rows.")]
    EmptyDataset,
    /// A candidate attribute index is not part of the dataset.
    #[error("Attribute index {0} is out of range, the dataset has {1} attributes.")]
    AttributeIndexOutOfRange(usize, usize),
    /// An attribute name could not be resolved.
    #[error("Attribute {0} was not found in the attribute names.")]
    UnknownAttribute(String),
    /// An instance passed for classification has the wrong number of values.
    #[error("Instance has {0} values, expected {1}.")]
    InstanceLength(usize, usize),
    /// Unable to read data.
    #[error("Unable to read data: {0}")]
    UnableToRead(String),
    /// First value is the name of the parameter, second is expected, third is what was passed.
    #[error("Invalid parameter value passed for {0}, expected {1} but {2} provided.")]
    InvalidParameter(String, String, String),
    /// The classifier was used before `fit` was called.
    #[error("The classifier has not been fitted.")]
    NotFitted,
}
