#![allow(dead_code)]

use cosys_core::transform::{Scale, Translation};
use cosys_core::{Axis, Transform, Transformation};
use cosys_mapping::{Dataset, Element, ElementId, ElementKind};
use nalgebra::DMatrix;

/// Handles to the elements of [`full_dataset`].
pub struct Fixture {
    pub dataset: Dataset,
    pub image: ElementId,
    pub image_multiscale: ElementId,
    pub labels: ElementId,
    pub labels_multiscale: ElementId,
    pub points: ElementId,
    pub poly: ElementId,
    pub multipoly: ElementId,
    pub circles: ElementId,
}

fn element(axes: &[Axis]) -> Element {
    let mut element = Element::new(axes.to_vec());
    element
        .transformations_mut()
        .set("global", Transformation::identity());
    element
}

/// One element per collection kind, each mapped to `"global"` by the identity.
pub fn full_dataset(dataset: Dataset) -> Fixture {
    let mut dataset = dataset;
    let image = dataset.add_element(
        ElementKind::Images,
        "image2d",
        element(&[Axis::C, Axis::Y, Axis::X]),
    );
    let image_multiscale = dataset.add_element(
        ElementKind::Images,
        "image2d_multiscale",
        element(&[Axis::C, Axis::Y, Axis::X]),
    );
    let labels = dataset.add_element(ElementKind::Labels, "labels2d", element(&[Axis::Y, Axis::X]));
    let labels_multiscale = dataset.add_element(
        ElementKind::Labels,
        "labels2d_multiscale",
        element(&[Axis::Y, Axis::X]),
    );
    let points = dataset.add_element(ElementKind::Points, "points_0", element(&[Axis::X, Axis::Y]));
    let poly = dataset.add_element(ElementKind::Polygons, "poly", element(&[Axis::X, Axis::Y]));
    let multipoly = dataset.add_element(
        ElementKind::Polygons,
        "multipoly",
        element(&[Axis::X, Axis::Y]),
    );
    let circles = dataset.add_element(ElementKind::Shapes, "circles", element(&[Axis::X, Axis::Y]));

    Fixture {
        dataset,
        image,
        image_multiscale,
        labels,
        labels_multiscale,
        points,
        poly,
        multipoly,
        circles,
    }
}

pub fn xy() -> Vec<Axis> {
    vec![Axis::X, Axis::Y]
}

pub fn scale_x(factor: f64) -> Transformation {
    Scale::new(vec![factor], vec![Axis::X]).unwrap().into()
}

pub fn translate_x(offset: f64) -> Transformation {
    Translation::new(vec![offset], vec![Axis::X]).unwrap().into()
}

/// Affine matrix of `t` for (x, y) -> (x, y).
pub fn xy_matrix(t: &Transformation) -> DMatrix<f64> {
    t.to_affine_matrix(&xy(), &xy()).unwrap()
}

pub fn assert_matrix_close(actual: &DMatrix<f64>, expected: &[&[f64]]) {
    assert_eq!(actual.nrows(), expected.len(), "row count of {}", actual);
    for (r, row) in expected.iter().enumerate() {
        assert_eq!(actual.ncols(), row.len(), "column count of {}", actual);
        for (c, value) in row.iter().enumerate() {
            assert!(
                (actual[(r, c)] - value).abs() < 1e-9,
                "entry ({}, {}) is {}, expected {}\n{}",
                r,
                c,
                actual[(r, c)],
                value,
                actual
            );
        }
    }
}
