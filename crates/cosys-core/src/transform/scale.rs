//! Scale transform implementation.
//!
//! This module provides an axis-wise scale transform.

use nalgebra::DMatrix;
use serde::{Deserialize, Serialize};

use super::matrix::passthrough;
use super::trait_::Transform;
use super::Transformation;
use crate::error::{Result, TransformError};
use crate::spatial::axis::{position, validate_axes, Axis};

/// Scale Transform.
///
/// Represents a scaling about the origin:
/// T(x)_a = s_a * x_a
///
/// where `s_a` is the factor for axis `a`. Axes without a factor are left
/// unchanged; factors for axes absent from the data are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scale {
    scale: Vec<f64>,
    axes: Vec<Axis>,
}

impl Scale {
    /// Create a new scale transform.
    ///
    /// # Arguments
    /// * `scale` - One factor per entry of `axes`
    /// * `axes` - The axes the factors apply to
    pub fn new(scale: Vec<f64>, axes: Vec<Axis>) -> Result<Self> {
        validate_axes(&axes)?;
        if scale.len() != axes.len() {
            return Err(TransformError::InvalidShape {
                expected: vec![axes.len()],
                actual: vec![scale.len()],
            });
        }
        Ok(Self { scale, axes })
    }

    /// Get the scale factors.
    pub fn scale(&self) -> &[f64] {
        &self.scale
    }

    /// Get the axes the factors apply to.
    pub fn axes(&self) -> &[Axis] {
        &self.axes
    }

    /// Factor for `axis`, 1.0 when the axis is not scaled.
    pub fn factor(&self, axis: Axis) -> f64 {
        position(&self.axes, axis).map_or(1.0, |i| self.scale[i])
    }
}

impl Transform for Scale {
    fn output_axes(&self, input_axes: &[Axis]) -> Result<Vec<Axis>> {
        validate_axes(input_axes)?;
        Ok(input_axes.to_vec())
    }

    fn to_affine_matrix(&self, input_axes: &[Axis], output_axes: &[Axis]) -> Result<DMatrix<f64>> {
        let mut m = passthrough(input_axes, output_axes)?;
        for (i, axis) in output_axes.iter().enumerate() {
            if let Some(j) = position(input_axes, *axis) {
                m[(i, j)] = self.factor(*axis);
            }
        }
        Ok(m)
    }

    fn inverse(&self) -> Result<Transformation> {
        if let Some(i) = self.scale.iter().position(|s| *s == 0.0) {
            return Err(TransformError::non_invertible(format!(
                "scale factor for axis {} is zero",
                self.axes[i]
            )));
        }
        let scale = self.scale.iter().map(|s| 1.0 / s).collect();
        Ok(Scale {
            scale,
            axes: self.axes.clone(),
        }
        .into())
    }
}
