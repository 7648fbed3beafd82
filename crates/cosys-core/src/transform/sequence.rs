//! Sequence transform implementation.
//!
//! This module provides a mechanism to chain any number of transforms together.
//! T(x) = Tn(...T2(T1(x)))

use nalgebra::DMatrix;
use serde::{Deserialize, Serialize};

use super::matrix::passthrough;
use super::trait_::Transform;
use super::Transformation;
use crate::error::Result;
use crate::spatial::axis::{validate_axes, Axis};

/// Sequence Transform (T1, then T2, ..., then Tn).
///
/// Applies its transforms in order. Composition is deferred: the steps are
/// kept as they are and only multiplied out when a matrix is requested for a
/// concrete axis ordering. The axes between two steps are whatever the
/// previous step produces for the requested input axes.
///
/// An empty sequence behaves like the identity.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Sequence {
    transformations: Vec<Transformation>,
}

impl Sequence {
    /// Create a new sequence.
    ///
    /// # Arguments
    /// * `transformations` - The transforms to apply, first to last
    pub fn new(transformations: Vec<Transformation>) -> Self {
        Self { transformations }
    }

    /// The steps of the sequence, first to last.
    pub fn transformations(&self) -> &[Transformation] {
        &self.transformations
    }

    /// Number of steps.
    pub fn len(&self) -> usize {
        self.transformations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transformations.is_empty()
    }
}

impl Transform for Sequence {
    fn output_axes(&self, input_axes: &[Axis]) -> Result<Vec<Axis>> {
        validate_axes(input_axes)?;
        self.transformations
            .iter()
            .try_fold(input_axes.to_vec(), |axes, t| t.output_axes(&axes))
    }

    fn to_affine_matrix(&self, input_axes: &[Axis], output_axes: &[Axis]) -> Result<DMatrix<f64>> {
        validate_axes(input_axes)?;
        let mut current_axes = input_axes.to_vec();
        let mut m = DMatrix::identity(input_axes.len() + 1, input_axes.len() + 1);

        for t in &self.transformations {
            let next_axes = t.output_axes(&current_axes)?;
            let step = t.to_affine_matrix(&current_axes, &next_axes)?;
            m = step * m;
            current_axes = next_axes;
        }

        let projection = passthrough(&current_axes, output_axes)?;
        Ok(projection * m)
    }

    fn inverse(&self) -> Result<Transformation> {
        let transformations = self
            .transformations
            .iter()
            .rev()
            .map(|t| t.inverse())
            .collect::<Result<Vec<_>>>()?;
        Ok(Sequence { transformations }.into())
    }
}
