//! Defining the diagnostics error codes.

/// A required child is missing from the tree.
pub const MALFORMED_TREE_ERROR: &str = "E0001";
/// A hole index was handed out twice.
pub const DUPLICATE_INDEX_ERROR: &str = "E0002";
/// Unknown variable name.
pub const UNRESOLVED_NAME_ERROR: &str = "E0003";
/// Hole indices are not contiguous.
pub const INDEX_GAP_ERROR: &str = "E0004";
/// A declaration shadows a variable of an enclosing scope.
pub const SHADOWING_WARNING: &str = "W0001";
