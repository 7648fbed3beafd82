//! Set, get and remove operations on a bare element.
//!
//! These act on the element's registry in memory only. The dataset-level
//! variants in [`Dataset`](crate::Dataset) add persistence on top.

use cosys_core::Transformation;

use crate::config::DEFAULT_COORDINATE_SYSTEM;
use crate::element::Element;
use crate::error::Result;
use crate::registry::{TransformationMap, TransformationRegistry};
use crate::validation;

/// What to store: one transformation, or a complete replacement map.
#[derive(Debug, Clone, PartialEq)]
pub enum TransformationArg {
    Single(Transformation),
    All(TransformationMap),
}

impl From<Transformation> for TransformationArg {
    fn from(transformation: Transformation) -> Self {
        TransformationArg::Single(transformation)
    }
}

impl From<TransformationMap> for TransformationArg {
    fn from(map: TransformationMap) -> Self {
        TransformationArg::All(map)
    }
}

/// Result of a get: one transformation, or a copy of the whole registry.
#[derive(Debug, Clone, PartialEq)]
pub enum TransformationSelection {
    Single(Transformation),
    All(TransformationMap),
}

impl TransformationSelection {
    pub fn into_single(self) -> Option<Transformation> {
        match self {
            TransformationSelection::Single(t) => Some(t),
            TransformationSelection::All(_) => None,
        }
    }

    pub fn into_all(self) -> Option<TransformationMap> {
        match self {
            TransformationSelection::All(map) => Some(map),
            TransformationSelection::Single(_) => None,
        }
    }
}

/// Store a transformation on `element`.
///
/// Without `set_all` the transformation goes to `coordinate_system`, or to
/// `"global"` when none is given. With `set_all` the argument must be a map
/// and replaces the whole registry.
pub fn set_transformation(
    element: &mut Element,
    transformation: impl Into<TransformationArg>,
    coordinate_system: Option<&str>,
    set_all: bool,
) -> Result<()> {
    let transformation = transformation.into();
    validation::validate_set(&transformation, coordinate_system, set_all)?;
    apply_set(
        element.transformations_mut(),
        transformation,
        coordinate_system.unwrap_or(DEFAULT_COORDINATE_SYSTEM),
    );
    Ok(())
}

/// Read one transformation, or all of them with `get_all`.
pub fn get_transformation(
    element: &Element,
    coordinate_system: Option<&str>,
    get_all: bool,
) -> Result<TransformationSelection> {
    validation::validate_lookup(coordinate_system, get_all)?;
    apply_get(
        element.transformations(),
        coordinate_system.unwrap_or(DEFAULT_COORDINATE_SYSTEM),
        get_all,
    )
}

/// Remove one transformation, or clear the registry with `remove_all`.
pub fn remove_transformation(
    element: &mut Element,
    coordinate_system: Option<&str>,
    remove_all: bool,
) -> Result<()> {
    validation::validate_lookup(coordinate_system, remove_all)?;
    apply_remove(
        element.transformations_mut(),
        coordinate_system.unwrap_or(DEFAULT_COORDINATE_SYSTEM),
        remove_all,
    )
}

// The apply_* helpers expect validated arguments.

pub(crate) fn apply_set(
    registry: &mut TransformationRegistry,
    transformation: TransformationArg,
    coordinate_system: &str,
) {
    match transformation {
        TransformationArg::Single(t) => registry.set(coordinate_system, t),
        TransformationArg::All(map) => registry.set_all(map),
    }
}

pub(crate) fn apply_get(
    registry: &TransformationRegistry,
    coordinate_system: &str,
    get_all: bool,
) -> Result<TransformationSelection> {
    if get_all {
        return Ok(TransformationSelection::All(registry.get_all()));
    }
    registry
        .get(coordinate_system)
        .map(|t| TransformationSelection::Single(t.clone()))
}

pub(crate) fn apply_remove(
    registry: &mut TransformationRegistry,
    coordinate_system: &str,
    remove_all: bool,
) -> Result<()> {
    if remove_all {
        registry.remove_all();
    } else {
        registry.remove(coordinate_system)?;
    }
    Ok(())
}
