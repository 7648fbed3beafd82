//! Spatial elements and their surrogate identities.
//!
//! An element's identity is assigned once, when the element is constructed,
//! and never derived from its content: two elements with the same axes and
//! the same transformations are still two different graph nodes.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use cosys_core::Axis;

use crate::registry::TransformationRegistry;

static NEXT_ELEMENT_ID: AtomicU64 = AtomicU64::new(1);

/// Opaque, process-unique handle identifying one in-memory element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(u64);

impl ElementId {
    fn next() -> Self {
        Self(NEXT_ELEMENT_ID.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// The dataset collection an element belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ElementKind {
    Images,
    Labels,
    Points,
    Polygons,
    Shapes,
}

impl ElementKind {
    /// Collection name as shown in path descriptions.
    pub fn collection(&self) -> &'static str {
        match self {
            ElementKind::Images => "images",
            ElementKind::Labels => "labels",
            ElementKind::Points => "points",
            ElementKind::Polygons => "polygons",
            ElementKind::Shapes => "shapes",
        }
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.collection())
    }
}

/// A spatial element: its axes and the transformations out of its intrinsic
/// coordinate system.
///
/// Elements are deliberately not `Clone`; use [`Element::duplicate`] to get a
/// copy that is a distinct graph node.
#[derive(Debug)]
pub struct Element {
    id: ElementId,
    axes: Vec<Axis>,
    transformations: TransformationRegistry,
}

impl Element {
    /// Create an element with the given axes and no transformations.
    pub fn new(axes: Vec<Axis>) -> Self {
        Self {
            id: ElementId::next(),
            axes,
            transformations: TransformationRegistry::default(),
        }
    }

    /// Copy axes and transformations into a new element with a fresh identity.
    pub fn duplicate(&self) -> Self {
        Self {
            id: ElementId::next(),
            axes: self.axes.clone(),
            transformations: self.transformations.clone(),
        }
    }

    pub fn id(&self) -> ElementId {
        self.id
    }

    pub fn axes(&self) -> &[Axis] {
        &self.axes
    }

    /// The element's transformation registry.
    pub fn transformations(&self) -> &TransformationRegistry {
        &self.transformations
    }

    pub fn transformations_mut(&mut self) -> &mut TransformationRegistry {
        &mut self.transformations
    }
}
