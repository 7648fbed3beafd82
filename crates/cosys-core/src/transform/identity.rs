//! Identity transform.

use nalgebra::DMatrix;
use serde::{Deserialize, Serialize};

use super::matrix::passthrough;
use super::trait_::Transform;
use super::Transformation;
use crate::error::Result;
use crate::spatial::axis::{validate_axes, Axis};

/// Identity Transform.
///
/// Every input axis is passed through unchanged.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Identity;

impl Transform for Identity {
    fn output_axes(&self, input_axes: &[Axis]) -> Result<Vec<Axis>> {
        validate_axes(input_axes)?;
        Ok(input_axes.to_vec())
    }

    fn to_affine_matrix(&self, input_axes: &[Axis], output_axes: &[Axis]) -> Result<DMatrix<f64>> {
        passthrough(input_axes, output_axes)
    }

    fn inverse(&self) -> Result<Transformation> {
        Ok(Identity.into())
    }
}
