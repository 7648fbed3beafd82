//! Human-readable rendering of candidate paths for ambiguity errors.

use crate::element::{Element, ElementId, ElementKind};
use crate::error::{MappingError, Result};
use crate::graph::{NodeKey, Path};

/// Renders paths using coordinate-system names and element names.
///
/// Element nodes are looked up by identity among the dataset's elements and
/// shown as `<prefix>.<collection>['<name>']`.
pub struct PathDescriber<'a> {
    prefix: &'a str,
    elements: Vec<(ElementKind, &'a str, ElementId)>,
}

impl<'a> PathDescriber<'a> {
    pub fn new<I>(prefix: &'a str, elements: I) -> Self
    where
        I: IntoIterator<Item = (ElementKind, &'a str, &'a Element)>,
    {
        Self {
            prefix,
            elements: elements
                .into_iter()
                .map(|(kind, name, element)| (kind, name, element.id()))
                .collect(),
        }
    }

    /// Render one node.
    ///
    /// An element identity that does not match exactly one dataset element is
    /// an [`MappingError::IdentityResolution`] error.
    pub fn describe_node(&self, node: &NodeKey) -> Result<String> {
        let id = match node {
            NodeKey::Named(name) => return Ok(format!("'{}'", name)),
            NodeKey::Element(id) => *id,
        };
        let mut matches = self.elements.iter().filter(|(_, _, e)| *e == id);
        match (matches.next(), matches.next()) {
            (Some((kind, name, _)), None) => Ok(format!("{}.{}['{}']", self.prefix, kind, name)),
            (None, _) => Err(MappingError::identity_resolution(format!(
                "element {} does not belong to the dataset",
                id
            ))),
            (Some(_), Some(_)) => Err(MappingError::identity_resolution(format!(
                "element {} is registered under several names",
                id
            ))),
        }
    }

    /// Render one path as `a -> b -> c`.
    pub fn describe_path(&self, path: &Path) -> Result<String> {
        let components = path
            .nodes()
            .iter()
            .map(|node| self.describe_node(node))
            .collect::<Result<Vec<_>>>()?;
        Ok(components.join(" -> "))
    }

    /// Render every path on its own indented line.
    pub fn describe(&self, paths: &[Path]) -> Result<String> {
        let mut out = String::new();
        for path in paths {
            out.push_str("\n    ");
            out.push_str(&self.describe_path(path)?);
        }
        Ok(out)
    }
}
