//! Demo Mapping Example
//!
//! Registers a few elements with transformations into named coordinate
//! systems, then resolves transformations between them.
//!
//! Usage:
//!   RUST_LOG=debug cargo run --example demo_mapping

use cosys_core::transform::{Scale, Translation};
use cosys_core::{Axis, Point, Transform, Transformation};
use cosys_mapping::{Dataset, Element, ElementKind, LoggingWriter, MappingError, NodeKey, WriteMode};

fn main() -> anyhow::Result<()> {
    println!("cosys Demo Mapping");
    println!("==================\n");

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let xy = vec![Axis::X, Axis::Y];
    let mut dataset = Dataset::new().with_writer(LoggingWriter);

    let image = dataset.add_element(
        ElementKind::Images,
        "image2d",
        Element::new(vec![Axis::C, Axis::Y, Axis::X]),
    );
    let labels = dataset.add_element(
        ElementKind::Labels,
        "labels2d",
        Element::new(vec![Axis::Y, Axis::X]),
    );

    // 1. Register transformations
    let double = Transformation::from(Scale::new(vec![2.0, 2.0], xy.clone())?);
    let shift = Transformation::from(Translation::new(vec![10.0, 0.0], xy.clone())?);
    let half = Transformation::from(Scale::new(vec![0.5, 0.5], xy.clone())?);

    dataset.set_transformation(image, double.clone(), None, false, WriteMode::WriteThrough)?;
    dataset.set_transformation(image, shift, Some("aligned"), false, WriteMode::InMemory)?;
    dataset.set_transformation(labels, double, None, false, WriteMode::InMemory)?;
    dataset.set_transformation(labels, half, Some("aligned"), false, WriteMode::InMemory)?;

    println!("Coordinate systems: {:?}\n", dataset.coordinate_systems());

    // 2. Resolve
    let t = dataset.transformation_between(image, "global", None)?;
    println!("image2d -> global:\n{}", t.to_affine_matrix(&xy, &xy)?);

    match dataset.transformation_between("aligned", "global", None) {
        Err(err @ MappingError::AmbiguousPath { .. }) => println!("{}\n", err),
        other => anyhow::bail!("expected an ambiguous path, got {:?}", other),
    }

    let t = dataset.transformation_between("aligned", "global", Some(NodeKey::from(labels)))?;
    println!("aligned -> global through labels2d:\n{}", t.to_affine_matrix(&xy, &xy)?);

    // 3. Map a point
    let point = Point::new(xy.clone(), vec![1.0, 1.0])?;
    let mapped = dataset.map_point(&point, image, "aligned", None)?;
    println!(
        "{:?} in image2d is {:?} in 'aligned'",
        point.coords().as_slice(),
        mapped.coords().as_slice()
    );

    Ok(())
}
