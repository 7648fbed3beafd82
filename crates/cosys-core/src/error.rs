//! Error types for transformation operations.

use thiserror::Error;

use crate::spatial::Axis;

/// Error type for transformation construction, inversion and matrix rendering.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TransformError {
    /// The transformation has no inverse.
    #[error("Transformation is not invertible: {0}")]
    NonInvertible(String),

    /// The requested axes are incompatible with the transformation.
    #[error("Axis mismatch: {0}")]
    AxisMismatch(String),

    /// Parameters have the wrong shape.
    #[error("Invalid shape: expected {expected:?}, got {actual:?}")]
    InvalidShape {
        expected: Vec<usize>,
        actual: Vec<usize>,
    },

    /// Matrix entries violate the homogeneous form.
    #[error("Invalid matrix: {0}")]
    InvalidMatrix(String),

    /// An axis appears more than once in an axis list.
    #[error("Duplicate axis {0} in axis list")]
    DuplicateAxis(Axis),
}

/// Result type for transformation operations.
pub type Result<T> = std::result::Result<T, TransformError>;

impl TransformError {
    /// Create a non-invertible error.
    pub fn non_invertible(msg: impl Into<String>) -> Self {
        Self::NonInvertible(msg.into())
    }

    /// Create an axis mismatch error.
    pub fn axis_mismatch(msg: impl Into<String>) -> Self {
        Self::AxisMismatch(msg.into())
    }
}
