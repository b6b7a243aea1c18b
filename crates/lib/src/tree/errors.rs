//! Error types for tree operations.
//!
//! This module defines structured error types for path-addressed tree
//! operations: traversal landing on the wrong shape of value, and malformed
//! path input. Missing keys are deliberately not an error anywhere in this
//! crate; absence is a silent no-op, distinct from invalid input.

use thiserror::Error;

use super::path::Path;

/// Structured error types for tree operations.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum TreeError {
    /// A non-terminal path segment landed on a value that is not a map
    #[error("expected a map at '{path}', found {actual}")]
    NotAMap { path: Path, actual: &'static str },

    /// Type mismatch during value extraction
    #[error("type mismatch: expected {expected}, found {actual}")]
    TypeMismatch { expected: String, actual: String },

    /// Path operations require at least one segment
    #[error("empty path")]
    EmptyPath,
}

impl TreeError {
    /// Check if this error is a shape/type mismatch
    pub fn is_type_error(&self) -> bool {
        matches!(
            self,
            TreeError::NotAMap { .. } | TreeError::TypeMismatch { .. }
        )
    }

    /// Check if this error is caused by invalid path input
    pub fn is_path_error(&self) -> bool {
        matches!(self, TreeError::EmptyPath)
    }

    /// Get the offending path if this error carries one
    pub fn path(&self) -> Option<&Path> {
        match self {
            TreeError::NotAMap { path, .. } => Some(path),
            _ => None,
        }
    }
}

// Conversion from TreeError to the main Error type
impl From<TreeError> for crate::Error {
    fn from(err: TreeError) -> Self {
        crate::Error::Tree(err)
    }
}
