//!
//! Grove: path-addressed traversal and transformation of nested data.
//! This library provides a small engine for reading, rewriting, and pruning
//! tree-shaped values without writing bespoke recursive code for each case.
//!
//! ## Core Concepts
//!
//! * **Values (`tree::Value`)**: the polymorphic node type (scalars, keyed
//!   maps, ordered lists) that every operation consumes and produces.
//! * **Maps (`tree::Map`)**: the keyed container and entry point for the
//!   path-addressed operations (`get_at`, `update_at`, `delete_at`,
//!   `delete_and_clean`, `update_keys`).
//! * **Paths (`tree::Path`)**: ordered segment sequences addressing
//!   locations in a tree. The `*` wildcard segment fans an operation out to
//!   every entry at its level.
//! * **Walking (`tree::walk`)**: the stateful, parent-aware traversal
//!   primitive behind the higher-level transformations, usable directly for
//!   custom passes.
//! * **Decoration (`tree::decorate`)**: a walk that annotates every map with
//!   the path used to reach it.
//!
//! Every operation is purely functional: inputs are never mutated, and each
//! call returns a complete new tree that may alias unchanged subtrees of the
//! input by value. Inputs are assumed acyclic; cyclic values are outside the
//! model and will not terminate.
//!
//! ## Example
//!
//! ```
//! use grove::{path, tree::Map};
//!
//! let config = Map::new().with(
//!     "services",
//!     Map::new()
//!         .with("web", Map::new().with("replicas", 2).with("debug", true))
//!         .with("worker", Map::new().with("replicas", 1).with("debug", true)),
//! );
//!
//! // Strip the debug flag from every service, then drop a service and any
//! // container that removal leaves empty.
//! let stripped = config.delete_at(&path!("services.*.debug"))?;
//! let cleaned = stripped.delete_and_clean(&path!("services.worker.replicas"))?;
//!
//! assert!(cleaned.get_at(&path!("services.worker")).is_none());
//! assert_eq!(
//!     cleaned.get_at(&path!("services.web.replicas")).unwrap().as_int(),
//!     Some(2),
//! );
//! # Ok::<(), grove::tree::TreeError>(())
//! ```

pub mod scalar;
pub mod tree;

/// Re-export the core container type for easier access.
pub use tree::{Map, Value};

/// Result type used throughout the grove library.
pub type Result<T> = std::result::Result<T, Error>;

/// Common error type for the grove library.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Structured tree operation errors from the tree module
    #[error(transparent)]
    Tree(tree::TreeError),

    /// Structured scalar parsing errors from the scalar module
    #[error(transparent)]
    Scalar(scalar::ScalarError),
}

impl Error {
    /// Get the originating module for this error.
    pub fn module(&self) -> &'static str {
        match self {
            Error::Tree(_) => "tree",
            Error::Scalar(_) => "scalar",
        }
    }

    /// Check if this error is a shape/type mismatch.
    pub fn is_type_error(&self) -> bool {
        match self {
            Error::Tree(tree_err) => tree_err.is_type_error(),
            _ => false,
        }
    }

    /// Check if this error was caused by invalid path input.
    pub fn is_path_error(&self) -> bool {
        match self {
            Error::Tree(tree_err) => tree_err.is_path_error(),
            _ => false,
        }
    }

    /// Check if this error is a scalar parse failure.
    pub fn is_parse_error(&self) -> bool {
        matches!(self, Error::Scalar(_))
    }
}
