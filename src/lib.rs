mod node;

// Modules
pub mod classifier;
pub mod constants;
pub mod data;
pub mod errors;
pub mod io;
pub mod metric;
pub mod splitter;
pub mod tree;
pub mod utils;

// Individual classes, and functions
pub use classifier::Id3Classifier;
pub use data::{Dataset, Table};
pub use errors::Id3Error;
pub use node::Node;
pub use tree::predict::Prediction;
pub use tree::tree::Tree;
