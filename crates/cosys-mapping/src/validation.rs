//! Argument validation for registry operations.
//!
//! Every check here runs before any registry is touched, so a rejected call
//! leaves the dataset unchanged.

use crate::dataset::Dataset;
use crate::element::ElementId;
use crate::error::{MappingError, Result};
use crate::ops::TransformationArg;

/// Reject a specific coordinate system combined with "all" mode.
pub fn validate_mode(coordinate_system: Option<&str>, all: bool) -> Result<()> {
    if let (Some(cs), true) = (coordinate_system, all) {
        return Err(MappingError::invalid_configuration(format!(
            "Coordinate system {:?} cannot be combined with the 'all' flag",
            cs
        )));
    }
    Ok(())
}

/// Reject empty coordinate-system names.
pub fn validate_coordinate_system_name(coordinate_system: Option<&str>) -> Result<()> {
    match coordinate_system {
        Some(cs) if cs.trim().is_empty() => Err(MappingError::invalid_configuration(
            "Coordinate system name must not be empty",
        )),
        _ => Ok(()),
    }
}

/// A single transformation goes with single mode, a map with "all" mode.
pub fn validate_argument_kind(transformation: &TransformationArg, set_all: bool) -> Result<()> {
    match (transformation, set_all) {
        (TransformationArg::Single(_), false) | (TransformationArg::All(_), true) => Ok(()),
        (TransformationArg::Single(_), true) => Err(MappingError::invalid_configuration(
            "Setting all transformations requires a map from coordinate system to transformation",
        )),
        (TransformationArg::All(_), false) => Err(MappingError::invalid_configuration(
            "A map of transformations requires the 'all' flag",
        )),
    }
}

/// Map keys must be valid coordinate-system names.
pub fn validate_map_keys(transformation: &TransformationArg) -> Result<()> {
    if let TransformationArg::All(map) = transformation {
        for cs in map.keys() {
            validate_coordinate_system_name(Some(cs))?;
        }
    }
    Ok(())
}

/// All checks for a set call.
pub fn validate_set(
    transformation: &TransformationArg,
    coordinate_system: Option<&str>,
    set_all: bool,
) -> Result<()> {
    validate_mode(coordinate_system, set_all)?;
    validate_coordinate_system_name(coordinate_system)?;
    validate_argument_kind(transformation, set_all)?;
    validate_map_keys(transformation)
}

/// All checks for a get or remove call.
pub fn validate_lookup(coordinate_system: Option<&str>, all: bool) -> Result<()> {
    validate_mode(coordinate_system, all)?;
    validate_coordinate_system_name(coordinate_system)
}

/// Write-through needs an element owned by a backed dataset.
pub fn validate_write_through(dataset: &Dataset, id: ElementId) -> Result<()> {
    if !dataset.contains_element(id) {
        return Err(MappingError::persistence(format!(
            "Cannot write transformations of element {}: it is not part of the dataset",
            id
        )));
    }
    if !dataset.is_backed() {
        return Err(MappingError::persistence(
            "Cannot write transformations: the dataset is not backed by a store",
        ));
    }
    Ok(())
}
