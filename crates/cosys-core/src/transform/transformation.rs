//! The closed set of transformation primitives.

use nalgebra::DMatrix;
use serde::{Deserialize, Serialize};

use super::trait_::Transform;
use super::{Affine, Identity, MapAxis, Scale, Sequence, Translation};
use crate::error::Result;
use crate::spatial::{Axis, Point};

/// Any transformation primitive.
///
/// This is the value stored in transformation registries and on graph
/// edges. It dispatches the [`Transform`] trait to the wrapped primitive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Transformation {
    Identity(Identity),
    MapAxis(MapAxis),
    Translation(Translation),
    Scale(Scale),
    Affine(Affine),
    Sequence(Sequence),
}

impl Transformation {
    /// The identity transformation.
    pub fn identity() -> Self {
        Transformation::Identity(Identity)
    }

    /// A sequence applying `transformations` first to last.
    pub fn sequence(transformations: Vec<Transformation>) -> Self {
        Transformation::Sequence(Sequence::new(transformations))
    }

    pub fn is_identity(&self) -> bool {
        matches!(self, Transformation::Identity(_))
    }

    /// Apply the transformation to an axis-labelled point.
    ///
    /// The result is expressed in the axes the transformation produces for
    /// the point's axes.
    pub fn transform_point(&self, point: &Point) -> Result<Point> {
        let output_axes = self.output_axes(point.axes())?;
        let m = self.to_affine_matrix(point.axes(), &output_axes)?;
        let coords = (m * point.to_homogeneous()).remove_row(output_axes.len());
        Ok(Point::from_parts(output_axes, coords))
    }

    fn as_transform(&self) -> &dyn Transform {
        match self {
            Transformation::Identity(t) => t,
            Transformation::MapAxis(t) => t,
            Transformation::Translation(t) => t,
            Transformation::Scale(t) => t,
            Transformation::Affine(t) => t,
            Transformation::Sequence(t) => t,
        }
    }
}

impl Transform for Transformation {
    fn output_axes(&self, input_axes: &[Axis]) -> Result<Vec<Axis>> {
        self.as_transform().output_axes(input_axes)
    }

    fn to_affine_matrix(&self, input_axes: &[Axis], output_axes: &[Axis]) -> Result<DMatrix<f64>> {
        self.as_transform().to_affine_matrix(input_axes, output_axes)
    }

    fn inverse(&self) -> Result<Transformation> {
        self.as_transform().inverse()
    }
}

impl From<Identity> for Transformation {
    fn from(t: Identity) -> Self {
        Transformation::Identity(t)
    }
}

impl From<MapAxis> for Transformation {
    fn from(t: MapAxis) -> Self {
        Transformation::MapAxis(t)
    }
}

impl From<Translation> for Transformation {
    fn from(t: Translation) -> Self {
        Transformation::Translation(t)
    }
}

impl From<Scale> for Transformation {
    fn from(t: Scale) -> Self {
        Transformation::Scale(t)
    }
}

impl From<Affine> for Transformation {
    fn from(t: Affine) -> Self {
        Transformation::Affine(t)
    }
}

impl From<Sequence> for Transformation {
    fn from(t: Sequence) -> Self {
        Transformation::Sequence(t)
    }
}
