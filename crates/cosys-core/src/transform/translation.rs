//! Translation transform implementation.

use nalgebra::DMatrix;
use serde::{Deserialize, Serialize};

use super::matrix::passthrough;
use super::trait_::Transform;
use super::Transformation;
use crate::error::{Result, TransformError};
use crate::spatial::axis::{position, validate_axes, Axis};

/// Translation Transform.
///
/// Represents a translation:
/// T(x)_a = x_a + t_a
///
/// Axes without an offset are left unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Translation {
    translation: Vec<f64>,
    axes: Vec<Axis>,
}

impl Translation {
    /// Create a new translation transform.
    ///
    /// # Arguments
    /// * `translation` - One offset per entry of `axes`
    /// * `axes` - The axes the offsets apply to
    pub fn new(translation: Vec<f64>, axes: Vec<Axis>) -> Result<Self> {
        validate_axes(&axes)?;
        if translation.len() != axes.len() {
            return Err(TransformError::InvalidShape {
                expected: vec![axes.len()],
                actual: vec![translation.len()],
            });
        }
        Ok(Self { translation, axes })
    }

    /// Get the translation vector.
    pub fn translation(&self) -> &[f64] {
        &self.translation
    }

    /// Get the axes the offsets apply to.
    pub fn axes(&self) -> &[Axis] {
        &self.axes
    }

    /// Offset for `axis`, 0.0 when the axis is not translated.
    pub fn offset(&self, axis: Axis) -> f64 {
        position(&self.axes, axis).map_or(0.0, |i| self.translation[i])
    }
}

impl Transform for Translation {
    fn output_axes(&self, input_axes: &[Axis]) -> Result<Vec<Axis>> {
        validate_axes(input_axes)?;
        Ok(input_axes.to_vec())
    }

    fn to_affine_matrix(&self, input_axes: &[Axis], output_axes: &[Axis]) -> Result<DMatrix<f64>> {
        let mut m = passthrough(input_axes, output_axes)?;
        let last = input_axes.len();
        for (i, axis) in output_axes.iter().enumerate() {
            m[(i, last)] = self.offset(*axis);
        }
        Ok(m)
    }

    fn inverse(&self) -> Result<Transformation> {
        Ok(Translation {
            translation: self.translation.iter().map(|t| -t).collect(),
            axes: self.axes.clone(),
        }
        .into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_translation_matrix() {
        let transform = Translation::new(vec![100.0], vec![Axis::X]).unwrap();
        let m = transform.to_affine_matrix(&[Axis::X, Axis::Y], &[Axis::X, Axis::Y]).unwrap();
        let expected = DMatrix::from_row_slice(3, 3, &[
            1.0, 0.0, 100.0,
            0.0, 1.0, 0.0,
            0.0, 0.0, 1.0,
        ]);
        assert_eq!(m, expected);
    }

    #[test]
    fn test_translation_inverse() {
        let transform = Translation::new(vec![1.0, -2.0], vec![Axis::X, Axis::Y]).unwrap();
        let inverse = transform.inverse().unwrap();
        assert_eq!(
            inverse,
            Translation::new(vec![-1.0, 2.0], vec![Axis::X, Axis::Y]).unwrap().into()
        );
    }
}
