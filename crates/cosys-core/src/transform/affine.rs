//! Affine transform implementation.
//!
//! This module provides an affine transform (linear transformation + translation)
//! between explicitly labelled input and output axes.

use nalgebra::DMatrix;
use serde::{Deserialize, Serialize};

use super::matrix::homogeneous_zeros;
use super::trait_::Transform;
use super::Transformation;
use crate::error::{Result, TransformError};
use crate::spatial::axis::{position, validate_axes, Axis};

/// Affine Transform (Linear transformation + Translation).
///
/// Represents a general affine transformation in homogeneous form:
/// y = A x + t
///
/// stored as a single `[out + 1, in + 1]` matrix whose rows follow
/// `output_axes` and whose columns follow `input_axes`. The number of output
/// axes may differ from the number of input axes, in which case the
/// transform has no inverse.
///
/// When applied to data with more axes than `input_axes`, the extra axes pass
/// through unless the affine itself produces an axis of the same name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Affine {
    matrix: DMatrix<f64>,
    input_axes: Vec<Axis>,
    output_axes: Vec<Axis>,
}

impl Affine {
    /// Create a new affine transform.
    ///
    /// # Arguments
    /// * `matrix` - Homogeneous matrix of shape `[output_axes.len() + 1, input_axes.len() + 1]`
    ///   with last row `[0, ..., 0, 1]`
    /// * `input_axes` - Axes labelling the matrix columns
    /// * `output_axes` - Axes labelling the matrix rows
    pub fn new(
        matrix: DMatrix<f64>,
        input_axes: Vec<Axis>,
        output_axes: Vec<Axis>,
    ) -> Result<Self> {
        validate_axes(&input_axes)?;
        validate_axes(&output_axes)?;

        let expected = (output_axes.len() + 1, input_axes.len() + 1);
        if matrix.shape() != expected {
            return Err(TransformError::InvalidShape {
                expected: vec![expected.0, expected.1],
                actual: vec![matrix.nrows(), matrix.ncols()],
            });
        }

        let last = output_axes.len();
        let homogeneous = (0..input_axes.len()).all(|j| matrix[(last, j)] == 0.0)
            && matrix[(last, input_axes.len())] == 1.0;
        if !homogeneous {
            return Err(TransformError::InvalidMatrix(format!(
                "last row must be [0, ..., 0, 1], got {:?}",
                matrix.row(last).iter().collect::<Vec<_>>()
            )));
        }

        Ok(Self {
            matrix,
            input_axes,
            output_axes,
        })
    }

    /// Create an affine transform from row-major matrix entries.
    pub fn from_row_slice(
        data: &[f64],
        input_axes: Vec<Axis>,
        output_axes: Vec<Axis>,
    ) -> Result<Self> {
        let rows = output_axes.len() + 1;
        let cols = input_axes.len() + 1;
        if data.len() != rows * cols {
            return Err(TransformError::InvalidShape {
                expected: vec![rows * cols],
                actual: vec![data.len()],
            });
        }
        Self::new(DMatrix::from_row_slice(rows, cols, data), input_axes, output_axes)
    }

    /// Get the homogeneous matrix.
    pub fn matrix(&self) -> &DMatrix<f64> {
        &self.matrix
    }

    /// Axes labelling the matrix columns.
    pub fn input_axes(&self) -> &[Axis] {
        &self.input_axes
    }

    /// Axes labelling the matrix rows.
    pub fn declared_output_axes(&self) -> &[Axis] {
        &self.output_axes
    }
}

impl Transform for Affine {
    fn output_axes(&self, input_axes: &[Axis]) -> Result<Vec<Axis>> {
        validate_axes(input_axes)?;
        if let Some(missing) = self.input_axes.iter().find(|a| !input_axes.contains(*a)) {
            return Err(TransformError::axis_mismatch(format!(
                "affine input axis {} is missing from input axes {:?}",
                missing, input_axes
            )));
        }

        let mut axes = self.output_axes.clone();
        for axis in input_axes {
            if !self.input_axes.contains(axis) && !self.output_axes.contains(axis) {
                axes.push(*axis);
            }
        }
        Ok(axes)
    }

    fn to_affine_matrix(&self, input_axes: &[Axis], output_axes: &[Axis]) -> Result<DMatrix<f64>> {
        validate_axes(output_axes)?;
        let produced = self.output_axes(input_axes)?;
        let mut m = homogeneous_zeros(input_axes, output_axes);
        let translation_col = self.input_axes.len();

        for (i, axis) in output_axes.iter().enumerate() {
            if let Some(row) = position(&self.output_axes, *axis) {
                for (k, source) in self.input_axes.iter().enumerate() {
                    // present: checked by output_axes() above
                    if let Some(j) = position(input_axes, *source) {
                        m[(i, j)] = self.matrix[(row, k)];
                    }
                }
                m[(i, input_axes.len())] = self.matrix[(row, translation_col)];
            } else if produced.contains(axis) {
                if let Some(j) = position(input_axes, *axis) {
                    m[(i, j)] = 1.0;
                }
            } else {
                return Err(TransformError::axis_mismatch(format!(
                    "output axis {} is not produced from input axes {:?}",
                    axis, input_axes
                )));
            }
        }
        Ok(m)
    }

    fn inverse(&self) -> Result<Transformation> {
        if self.input_axes.len() != self.output_axes.len() {
            return Err(TransformError::non_invertible(format!(
                "affine maps {} input axes to {} output axes",
                self.input_axes.len(),
                self.output_axes.len()
            )));
        }
        let inverse = self
            .matrix
            .clone()
            .try_inverse()
            .ok_or_else(|| TransformError::non_invertible("affine matrix is singular"))?;
        Ok(Affine {
            matrix: inverse,
            input_axes: self.output_axes.clone(),
            output_axes: self.input_axes.clone(),
        }
        .into())
    }
}
