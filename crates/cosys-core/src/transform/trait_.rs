//! Transform trait for axis-labelled coordinate transformations.
//!
//! This module defines the core Transform trait that all transformation
//! primitives implement.

use nalgebra::DMatrix;

use super::Transformation;
use crate::error::Result;
use crate::spatial::Axis;

/// Transform trait for axis-labelled coordinate transformations.
///
/// A transform does not fix the axis ordering of its inputs. It is rendered
/// on demand to a homogeneous affine matrix for a concrete ordering of input
/// and output axes, which lets one transformation be queried for `(x, y)`
/// data and for `(c, y, x)` data alike.
pub trait Transform {
    /// Axes produced when the transform is applied to data with `input_axes`.
    fn output_axes(&self, input_axes: &[Axis]) -> Result<Vec<Axis>>;

    /// Render the transform as a homogeneous affine matrix.
    ///
    /// # Returns
    /// Matrix of shape `[output_axes.len() + 1, input_axes.len() + 1]`. The last
    /// column holds the translation and the last row is `[0, ..., 0, 1]`.
    fn to_affine_matrix(&self, input_axes: &[Axis], output_axes: &[Axis]) -> Result<DMatrix<f64>>;

    /// Get the inverse transform.
    ///
    /// Fails with [`TransformError::NonInvertible`](crate::TransformError::NonInvertible)
    /// when the mapping has no inverse, e.g. an affine map that adds an axis.
    fn inverse(&self) -> Result<Transformation>;
}
