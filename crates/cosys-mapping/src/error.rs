//! Error types for transformation registry and path resolution operations.
//!
//! Every variant is a deterministic logic error given the current dataset
//! state; nothing here is worth retrying.

use cosys_core::TransformError;
use thiserror::Error;

use crate::element::ElementId;
use crate::graph::{NodeKey, Path};

/// Main error type for mapping operations.
#[derive(Error, Debug)]
pub enum MappingError {
    /// Invalid argument combination.
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// No transformation registered for the coordinate system.
    #[error("Transformation to {0:?} not found")]
    TransformationNotFound(String),

    /// The element is not part of the dataset.
    #[error("Element {0} not found in the dataset")]
    ElementNotFound(ElementId),

    /// Write-through could not be performed.
    #[error("Persistence error: {0}")]
    Persistence(String),

    /// The graph has no path between the two nodes.
    #[error("No path found between {from} and {to}")]
    NoPathFound { from: NodeKey, to: NodeKey },

    /// Several paths exist and none is a unique direct edge.
    #[error(
        "Multiple paths found between {from} and {to}. Please specify an intermediate \
         coordinate system. Available paths are:{description}"
    )]
    AmbiguousPath {
        from: NodeKey,
        to: NodeKey,
        paths: Vec<Path>,
        description: String,
    },

    /// None of the paths passes through the intermediate node.
    #[error("No path found between {from} and {to} passing through the intermediate {intermediate}")]
    NoPathThroughIntermediate {
        from: NodeKey,
        to: NodeKey,
        intermediate: NodeKey,
    },

    /// Several paths pass through the intermediate node.
    #[error(
        "Multiple paths found between {from} and {to} passing through the intermediate \
         {intermediate}. Available paths are:{description}"
    )]
    AmbiguousPathThroughIntermediate {
        from: NodeKey,
        to: NodeKey,
        intermediate: NodeKey,
        paths: Vec<Path>,
        description: String,
    },

    /// An element identity did not map back to exactly one element name.
    #[error("Identity resolution error: {0}")]
    IdentityResolution(String),

    /// Consecutive path nodes without a connecting edge.
    #[error("No edge from {from} to {to} in the transformation graph")]
    MissingEdge { from: NodeKey, to: NodeKey },

    /// Error from a transformation primitive.
    #[error(transparent)]
    Transform(#[from] TransformError),
}

/// Result type for mapping operations.
pub type Result<T> = std::result::Result<T, MappingError>;

impl MappingError {
    /// Create an invalid configuration error.
    pub fn invalid_configuration(msg: impl Into<String>) -> Self {
        Self::InvalidConfiguration(msg.into())
    }

    /// Create a persistence error.
    pub fn persistence(msg: impl Into<String>) -> Self {
        Self::Persistence(msg.into())
    }

    /// Create an identity resolution error.
    pub fn identity_resolution(msg: impl Into<String>) -> Self {
        Self::IdentityResolution(msg.into())
    }

    /// Candidate paths carried by an ambiguity error.
    pub fn candidate_paths(&self) -> Option<&[Path]> {
        match self {
            Self::AmbiguousPath { paths, .. }
            | Self::AmbiguousPathThroughIntermediate { paths, .. } => Some(paths),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let err = MappingError::invalid_configuration("test error");
        assert!(matches!(err, MappingError::InvalidConfiguration(_)));
    }

    #[test]
    fn test_error_display() {
        let err = MappingError::TransformationNotFound("global".to_string());
        assert_eq!(err.to_string(), "Transformation to \"global\" not found");
    }

    #[test]
    fn test_no_path_display() {
        let err = MappingError::NoPathFound {
            from: NodeKey::from("a"),
            to: NodeKey::from("b"),
        };
        assert_eq!(err.to_string(), "No path found between 'a' and 'b'");
    }

    #[test]
    fn test_transform_error_is_wrapped() {
        let err: MappingError = TransformError::non_invertible("singular").into();
        assert!(matches!(err, MappingError::Transform(_)));
        assert!(err.candidate_paths().is_none());
    }
}
