//! Axis remapping transform.

use std::collections::{BTreeMap, BTreeSet};

use nalgebra::DMatrix;
use serde::{Deserialize, Serialize};

use super::matrix::homogeneous_zeros;
use super::trait_::Transform;
use super::Transformation;
use crate::error::{Result, TransformError};
use crate::spatial::axis::{position, validate_axes, Axis};

/// MapAxis Transform.
///
/// Copies coordinates between axes: each entry `output <- input` sets the
/// output axis to the value of the input axis. Input axes that are not the
/// target of an entry pass through unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapAxis {
    map_axis: BTreeMap<Axis, Axis>,
}

impl MapAxis {
    /// Create a new axis mapping from `output axis -> source input axis` pairs.
    pub fn new(map_axis: BTreeMap<Axis, Axis>) -> Self {
        Self { map_axis }
    }

    /// The `output axis -> source input axis` pairs.
    pub fn map_axis(&self) -> &BTreeMap<Axis, Axis> {
        &self.map_axis
    }

    fn source_of(&self, axis: Axis) -> Axis {
        self.map_axis.get(&axis).copied().unwrap_or(axis)
    }
}

impl Transform for MapAxis {
    fn output_axes(&self, input_axes: &[Axis]) -> Result<Vec<Axis>> {
        validate_axes(input_axes)?;
        let mut axes = input_axes.to_vec();
        for axis in self.map_axis.keys() {
            if !axes.contains(axis) {
                axes.push(*axis);
            }
        }
        Ok(axes)
    }

    fn to_affine_matrix(&self, input_axes: &[Axis], output_axes: &[Axis]) -> Result<DMatrix<f64>> {
        validate_axes(output_axes)?;
        let produced = self.output_axes(input_axes)?;
        let mut m = homogeneous_zeros(input_axes, output_axes);
        for (i, axis) in output_axes.iter().enumerate() {
            if !produced.contains(axis) {
                return Err(TransformError::axis_mismatch(format!(
                    "output axis {} is not produced from input axes {:?}",
                    axis, input_axes
                )));
            }
            let source = self.source_of(*axis);
            let j = position(input_axes, source).ok_or_else(|| {
                TransformError::axis_mismatch(format!(
                    "axis {} is mapped from {}, which is not among the input axes {:?}",
                    axis, source, input_axes
                ))
            })?;
            m[(i, j)] = 1.0;
        }
        Ok(m)
    }

    fn inverse(&self) -> Result<Transformation> {
        let targets: BTreeSet<Axis> = self.map_axis.keys().copied().collect();
        let sources: BTreeSet<Axis> = self.map_axis.values().copied().collect();
        if targets != sources || sources.len() != self.map_axis.len() {
            return Err(TransformError::non_invertible(format!(
                "axis mapping {:?} is not a permutation",
                self.map_axis
            )));
        }
        let map_axis = self.map_axis.iter().map(|(out, inp)| (*inp, *out)).collect();
        Ok(MapAxis { map_axis }.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn swap_xy() -> MapAxis {
        MapAxis::new(BTreeMap::from([(Axis::X, Axis::Y), (Axis::Y, Axis::X)]))
    }

    #[test]
    fn test_swap_axes_matrix() {
        let m = swap_xy().to_affine_matrix(&[Axis::X, Axis::Y], &[Axis::X, Axis::Y]).unwrap();
        let expected = DMatrix::from_row_slice(3, 3, &[
            0.0, 1.0, 0.0,
            1.0, 0.0, 0.0,
            0.0, 0.0, 1.0,
        ]);
        assert_eq!(m, expected);
    }

    #[test]
    fn test_copy_into_new_axis() {
        // z <- x, with x and y passing through
        let map = MapAxis::new(BTreeMap::from([(Axis::Z, Axis::X)]));
        assert_eq!(
            map.output_axes(&[Axis::X, Axis::Y]).unwrap(),
            vec![Axis::X, Axis::Y, Axis::Z]
        );
        let m = map.to_affine_matrix(&[Axis::X, Axis::Y], &[Axis::Z]).unwrap();
        assert_eq!(m.row(0).iter().copied().collect::<Vec<_>>(), vec![1.0, 0.0, 0.0]);
        assert!(map.inverse().is_err());
    }

    #[test]
    fn test_permutation_inverse() {
        let inverse = swap_xy().inverse().unwrap();
        assert_eq!(inverse, swap_xy().into());
    }
}
