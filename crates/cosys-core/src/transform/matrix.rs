//! Homogeneous matrix helpers shared by the transform implementations.

use nalgebra::DMatrix;

use crate::error::{Result, TransformError};
use crate::spatial::axis::{position, validate_axes, Axis};

/// Zero matrix of shape `[out + 1, in + 1]` with the homogeneous corner set.
pub(crate) fn homogeneous_zeros(input_axes: &[Axis], output_axes: &[Axis]) -> DMatrix<f64> {
    let mut m = DMatrix::zeros(output_axes.len() + 1, input_axes.len() + 1);
    m[(output_axes.len(), input_axes.len())] = 1.0;
    m
}

/// Matrix copying each output axis from the input axis of the same name.
///
/// Every output axis must be present in the input; input axes missing from
/// the output are dropped.
pub(crate) fn passthrough(input_axes: &[Axis], output_axes: &[Axis]) -> Result<DMatrix<f64>> {
    validate_axes(input_axes)?;
    validate_axes(output_axes)?;
    let mut m = homogeneous_zeros(input_axes, output_axes);
    for (i, axis) in output_axes.iter().enumerate() {
        let j = position(input_axes, *axis).ok_or_else(|| {
            TransformError::axis_mismatch(format!(
                "output axis {} is not produced from input axes {:?}",
                axis, input_axes
            ))
        })?;
        m[(i, j)] = 1.0;
    }
    Ok(m)
}
