/// Text reported for an instance whose value has no branch in the tree.
pub const UNKNOWN_LABEL: &str = "Unknown";
/// Prefix added to a branch value line, relative to its attribute line.
pub const VALUE_INDENT: &str = "  ";
/// Prefix added to a child subtree, relative to its parent.
pub const LEVEL_INDENT: &str = "    ";
