//! Point type for representing axis-labelled coordinates.
//!
//! Points represent positions in a named coordinate system. Each coordinate
//! is paired with the axis it belongs to.

use nalgebra::DVector;
use serde::{Deserialize, Serialize};

use super::axis::{position, validate_axes, Axis};
use crate::error::{Result, TransformError};

/// A point whose coordinates are labelled by axis.
///
/// This is a thin wrapper around nalgebra's DVector that keeps the axis
/// ordering next to the coordinates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Point {
    axes: Vec<Axis>,
    coords: DVector<f64>,
}

impl Point {
    /// Create a new point from axes and matching coordinates.
    pub fn new(axes: Vec<Axis>, coords: Vec<f64>) -> Result<Self> {
        validate_axes(&axes)?;
        if axes.len() != coords.len() {
            return Err(TransformError::InvalidShape {
                expected: vec![axes.len()],
                actual: vec![coords.len()],
            });
        }
        Ok(Self {
            axes,
            coords: DVector::from_vec(coords),
        })
    }

    /// Create a point at the origin of the given axes.
    pub fn origin(axes: Vec<Axis>) -> Result<Self> {
        let n = axes.len();
        Self::new(axes, vec![0.0; n])
    }

    pub(crate) fn from_parts(axes: Vec<Axis>, coords: DVector<f64>) -> Self {
        Self { axes, coords }
    }

    /// Axis ordering of the coordinates.
    pub fn axes(&self) -> &[Axis] {
        &self.axes
    }

    /// Coordinates in axis order.
    pub fn coords(&self) -> &DVector<f64> {
        &self.coords
    }

    /// Coordinate along `axis`, if the point has it.
    pub fn get(&self, axis: Axis) -> Option<f64> {
        position(&self.axes, axis).map(|i| self.coords[i])
    }

    /// Homogeneous coordinates `[coords..., 1]`.
    pub fn to_homogeneous(&self) -> DVector<f64> {
        self.coords.clone().push(1.0)
    }

    /// Maximum absolute coordinate difference to `other` over shared axes.
    ///
    /// Returns `None` if the two points are not defined over the same axis set.
    pub fn max_abs_diff(&self, other: &Point) -> Option<f64> {
        if self.axes.len() != other.axes.len() {
            return None;
        }
        self.axes.iter().try_fold(0.0f64, |acc, axis| {
            let a = self.get(*axis)?;
            let b = other.get(*axis)?;
            Some(acc.max((a - b).abs()))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_creation() {
        let p = Point::new(vec![Axis::X, Axis::Y], vec![1.0, 2.0]).unwrap();
        assert_eq!(p.get(Axis::X), Some(1.0));
        assert_eq!(p.get(Axis::Y), Some(2.0));
        assert_eq!(p.get(Axis::Z), None);
    }

    #[test]
    fn test_point_shape_mismatch() {
        let err = Point::new(vec![Axis::X, Axis::Y], vec![1.0]).unwrap_err();
        assert!(matches!(err, TransformError::InvalidShape { .. }));
    }

    #[test]
    fn test_point_duplicate_axis() {
        let err = Point::new(vec![Axis::X, Axis::X], vec![1.0, 2.0]).unwrap_err();
        assert_eq!(err, TransformError::DuplicateAxis(Axis::X));
    }

    #[test]
    fn test_origin() {
        let p = Point::origin(vec![Axis::C, Axis::Y, Axis::X]).unwrap();
        assert_eq!(p.axes(), &[Axis::C, Axis::Y, Axis::X]);
        assert_eq!(p.coords().as_slice(), &[0.0, 0.0, 0.0]);
        assert!(Point::origin(vec![Axis::Y, Axis::Y]).is_err());
    }

    #[test]
    fn test_point_homogeneous() {
        let p = Point::new(vec![Axis::X, Axis::Y, Axis::Z], vec![1.0, 2.0, 3.0]).unwrap();
        assert_eq!(p.to_homogeneous().as_slice(), &[1.0, 2.0, 3.0, 1.0]);
    }

    #[test]
    fn test_max_abs_diff_ignores_axis_order() {
        let a = Point::new(vec![Axis::X, Axis::Y], vec![1.0, 2.0]).unwrap();
        let b = Point::new(vec![Axis::Y, Axis::X], vec![2.5, 1.0]).unwrap();
        assert_eq!(a.max_abs_diff(&b), Some(0.5));

        let c = Point::new(vec![Axis::X, Axis::Z], vec![1.0, 2.0]).unwrap();
        assert_eq!(a.max_abs_diff(&c), None);
    }
}
