//! Per-element transformation registry.
//!
//! Maps a coordinate-system name to the transformation taking the element's
//! intrinsic coordinates into that system.

use std::collections::BTreeMap;

use cosys_core::Transformation;

use crate::error::{MappingError, Result};

/// Transformations keyed by target coordinate-system name.
pub type TransformationMap = BTreeMap<String, Transformation>;

/// One element's transformations, at most one per coordinate system.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TransformationRegistry {
    entries: TransformationMap,
}

impl TransformationRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the transformation to `coordinate_system`, replacing any existing one.
    pub fn set(&mut self, coordinate_system: impl Into<String>, transformation: Transformation) {
        self.entries.insert(coordinate_system.into(), transformation);
    }

    /// Replace every entry at once.
    pub fn set_all(&mut self, transformations: TransformationMap) {
        self.entries = transformations;
    }

    /// Get the transformation to `coordinate_system`.
    pub fn get(&self, coordinate_system: &str) -> Result<&Transformation> {
        self.entries
            .get(coordinate_system)
            .ok_or_else(|| MappingError::TransformationNotFound(coordinate_system.to_string()))
    }

    /// Copy of all entries; later mutations of the registry are not reflected.
    pub fn get_all(&self) -> TransformationMap {
        self.entries.clone()
    }

    /// Remove the transformation to `coordinate_system`.
    pub fn remove(&mut self, coordinate_system: &str) -> Result<Transformation> {
        self.entries
            .remove(coordinate_system)
            .ok_or_else(|| MappingError::TransformationNotFound(coordinate_system.to_string()))
    }

    pub fn remove_all(&mut self) {
        self.entries.clear();
    }

    /// Entries in coordinate-system name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Transformation)> {
        self.entries.iter().map(|(cs, t)| (cs.as_str(), t))
    }

    /// Names of the coordinate systems with a registered transformation.
    pub fn coordinate_systems(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn contains(&self, coordinate_system: &str) -> bool {
        self.entries.contains_key(coordinate_system)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cosys_core::transform::Scale;
    use cosys_core::Axis;

    fn scale(factor: f64) -> Transformation {
        Scale::new(vec![factor], vec![Axis::X]).unwrap().into()
    }

    #[test]
    fn test_set_overwrites() {
        let mut registry = TransformationRegistry::new();
        registry.set("global", scale(2.0));
        registry.set("global", scale(3.0));
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.get("global").unwrap(), &scale(3.0));
    }

    #[test]
    fn test_get_missing() {
        let registry = TransformationRegistry::new();
        let err = registry.get("global").unwrap_err();
        assert!(matches!(err, MappingError::TransformationNotFound(cs) if cs == "global"));
    }

    #[test]
    fn test_get_all_is_a_snapshot() {
        let mut registry = TransformationRegistry::new();
        registry.set("a", scale(2.0));
        let snapshot = registry.get_all();
        registry.set("b", scale(3.0));
        assert_eq!(snapshot.len(), 1);
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_set_all_replaces_everything() {
        let mut registry = TransformationRegistry::new();
        registry.set("a", scale(2.0));
        registry.set_all(TransformationMap::from([("b".to_string(), scale(4.0))]));
        assert!(!registry.contains("a"));
        assert_eq!(registry.coordinate_systems().collect::<Vec<_>>(), vec!["b"]);
    }

    #[test]
    fn test_remove() {
        let mut registry = TransformationRegistry::new();
        registry.set("a", scale(2.0));
        assert_eq!(registry.remove("a").unwrap(), scale(2.0));
        assert!(registry.is_empty());
        assert!(matches!(registry.remove("a"), Err(MappingError::TransformationNotFound(_))));
    }

    #[test]
    fn test_remove_all() {
        let mut registry = TransformationRegistry::new();
        registry.set("a", scale(2.0));
        registry.set("b", scale(3.0));
        registry.remove_all();
        assert!(registry.is_empty());
    }
}
