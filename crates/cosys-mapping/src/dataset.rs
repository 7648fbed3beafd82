//! Dataset: named element collections plus the transformation query entry point.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use cosys_core::{Point, Transformation};

use crate::compose::compose;
use crate::config::MappingConfig;
use crate::describe::PathDescriber;
use crate::element::{Element, ElementId, ElementKind};
use crate::error::{MappingError, Result};
use crate::graph::{build_graph, NodeKey, Path};
use crate::ops::{self, TransformationArg, TransformationSelection};
use crate::registry::TransformationMap;
use crate::resolver::{PathResolver, Unresolved};
use crate::validation;
use crate::writer::{TransformationWriter, WriteMode, WriteRecord};

/// Elements grouped by collection and name.
///
/// A dataset is backed when it has a [`TransformationWriter`]; only backed
/// datasets accept [`WriteMode::WriteThrough`].
pub struct Dataset {
    config: MappingConfig,
    collections: BTreeMap<ElementKind, BTreeMap<String, Element>>,
    writer: Option<Box<dyn TransformationWriter>>,
}

impl Default for Dataset {
    fn default() -> Self {
        Self::with_config(MappingConfig::default())
    }
}

impl fmt::Debug for Dataset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Dataset")
            .field("config", &self.config)
            .field("collections", &self.collections)
            .field("backed", &self.is_backed())
            .finish()
    }
}

impl Dataset {
    /// Create an empty in-memory dataset with the default config.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: MappingConfig) -> Self {
        Self {
            config,
            collections: BTreeMap::new(),
            writer: None,
        }
    }

    /// Install a persistence hook, making the dataset backed.
    pub fn with_writer(mut self, writer: impl TransformationWriter + 'static) -> Self {
        self.writer = Some(Box::new(writer));
        self
    }

    pub fn config(&self) -> &MappingConfig {
        &self.config
    }

    pub fn is_backed(&self) -> bool {
        self.writer.is_some()
    }

    /// Add `element` under `kind` and `name`, replacing any element of that name.
    pub fn add_element(
        &mut self,
        kind: ElementKind,
        name: impl Into<String>,
        element: Element,
    ) -> ElementId {
        let id = element.id();
        self.collections.entry(kind).or_default().insert(name.into(), element);
        id
    }

    /// Take an element out of the dataset.
    pub fn remove_element(&mut self, id: ElementId) -> Option<Element> {
        let (kind, name) = self
            .elements()
            .find(|(_, _, e)| e.id() == id)
            .map(|(kind, name, _)| (kind, name.to_string()))?;
        self.collections.get_mut(&kind)?.remove(&name)
    }

    pub fn contains_element(&self, id: ElementId) -> bool {
        self.element(id).is_some()
    }

    pub fn element(&self, id: ElementId) -> Option<&Element> {
        self.elements().find(|(_, _, e)| e.id() == id).map(|(_, _, e)| e)
    }

    pub fn element_mut(&mut self, id: ElementId) -> Option<&mut Element> {
        find_mut(&mut self.collections, id)
    }

    pub fn element_by_name(&self, kind: ElementKind, name: &str) -> Option<&Element> {
        self.collections.get(&kind)?.get(name)
    }

    /// Every element with its collection and name, in collection then name order.
    pub fn elements(&self) -> impl Iterator<Item = (ElementKind, &str, &Element)> + '_ {
        self.collections.iter().flat_map(|(kind, elements)| {
            elements
                .iter()
                .map(move |(name, element)| (*kind, name.as_str(), element))
        })
    }

    /// Sorted names of every coordinate system some element maps into.
    pub fn coordinate_systems(&self) -> Vec<String> {
        self.elements()
            .flat_map(|(_, _, e)| e.transformations().coordinate_systems())
            .map(str::to_string)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Store a transformation on a dataset element.
    ///
    /// The default coordinate system comes from the dataset config. With
    /// [`WriteMode::WriteThrough`] the element's full registry is handed to the
    /// writer after the in-memory update; if the writer fails, the registry is
    /// put back as it was.
    pub fn set_transformation(
        &mut self,
        id: ElementId,
        transformation: impl Into<TransformationArg>,
        coordinate_system: Option<&str>,
        set_all: bool,
        mode: WriteMode,
    ) -> Result<()> {
        let transformation = transformation.into();
        validation::validate_set(&transformation, coordinate_system, set_all)?;
        if mode == WriteMode::WriteThrough {
            validation::validate_write_through(self, id)?;
        }

        let element = find_mut(&mut self.collections, id).ok_or(MappingError::ElementNotFound(id))?;
        let snapshot =
            (mode == WriteMode::WriteThrough).then(|| element.transformations().get_all());
        let coordinate_system =
            coordinate_system.unwrap_or(self.config.default_coordinate_system.as_str());
        ops::apply_set(element.transformations_mut(), transformation, coordinate_system);

        match snapshot {
            Some(snapshot) => self.write_through_or_restore(id, snapshot),
            None => Ok(()),
        }
    }

    /// Read a transformation of a dataset element.
    pub fn get_transformation(
        &self,
        id: ElementId,
        coordinate_system: Option<&str>,
        get_all: bool,
    ) -> Result<TransformationSelection> {
        validation::validate_lookup(coordinate_system, get_all)?;
        let element = self.element(id).ok_or(MappingError::ElementNotFound(id))?;
        ops::apply_get(
            element.transformations(),
            coordinate_system.unwrap_or(self.config.default_coordinate_system.as_str()),
            get_all,
        )
    }

    /// Remove one or all transformations of a dataset element.
    pub fn remove_transformation(
        &mut self,
        id: ElementId,
        coordinate_system: Option<&str>,
        remove_all: bool,
        mode: WriteMode,
    ) -> Result<()> {
        validation::validate_lookup(coordinate_system, remove_all)?;
        if mode == WriteMode::WriteThrough {
            validation::validate_write_through(self, id)?;
        }

        let element = find_mut(&mut self.collections, id).ok_or(MappingError::ElementNotFound(id))?;
        let snapshot =
            (mode == WriteMode::WriteThrough).then(|| element.transformations().get_all());
        let coordinate_system =
            coordinate_system.unwrap_or(self.config.default_coordinate_system.as_str());
        ops::apply_remove(element.transformations_mut(), coordinate_system, remove_all)?;

        match snapshot {
            Some(snapshot) => self.write_through_or_restore(id, snapshot),
            None => Ok(()),
        }
    }

    /// The transformation mapping `source` coordinates into `target` coordinates.
    ///
    /// Source and target may be coordinate-system names or elements. When
    /// several paths connect them, `intermediate` selects the one passing
    /// through that node. The result is a [`Sequence`](cosys_core::transform::Sequence)
    /// of the edges along the path, or the identity when source equals target.
    pub fn transformation_between(
        &self,
        source: impl Into<NodeKey>,
        target: impl Into<NodeKey>,
        intermediate: Option<NodeKey>,
    ) -> Result<Transformation> {
        let (source, target) = (source.into(), target.into());
        if source == target {
            tracing::debug!("Source and target are both {}, using the identity", source);
            return Ok(Transformation::identity());
        }

        let graph = build_graph(self.elements().map(|(_, _, e)| e), self.coordinate_systems());
        let resolved = PathResolver::new(&graph).resolve(&source, &target, intermediate.as_ref());
        let path = match resolved {
            Ok(path) => path,
            Err(unresolved) => return Err(self.unresolved_error(unresolved, source, target)),
        };
        tracing::debug!("Resolved path {}", path);
        compose(&path, &graph)
    }

    /// Map a point from `source` into `target` coordinates.
    pub fn map_point(
        &self,
        point: &Point,
        source: impl Into<NodeKey>,
        target: impl Into<NodeKey>,
        intermediate: Option<NodeKey>,
    ) -> Result<Point> {
        let transformation = self.transformation_between(source, target, intermediate)?;
        Ok(transformation.transform_point(point)?)
    }

    /// Path renderer over this dataset's elements.
    pub fn describer(&self) -> PathDescriber<'_> {
        PathDescriber::new(&self.config.describe_prefix, self.elements())
    }

    fn unresolved_error(&self, unresolved: Unresolved, from: NodeKey, to: NodeKey) -> MappingError {
        let describe = |paths: &[Path]| self.describer().describe(paths);
        match unresolved {
            Unresolved::NoPath => MappingError::NoPathFound { from, to },
            Unresolved::NoPathThroughIntermediate(intermediate) => {
                MappingError::NoPathThroughIntermediate { from, to, intermediate }
            }
            Unresolved::Ambiguous(paths) => match describe(&paths) {
                Ok(description) => MappingError::AmbiguousPath {
                    from,
                    to,
                    paths,
                    description,
                },
                Err(err) => err,
            },
            Unresolved::AmbiguousThroughIntermediate {
                intermediate,
                paths,
            } => match describe(&paths) {
                Ok(description) => MappingError::AmbiguousPathThroughIntermediate {
                    from,
                    to,
                    intermediate,
                    paths,
                    description,
                },
                Err(err) => err,
            },
        }
    }

    /// Write the element's registry, or restore `snapshot` if the writer fails.
    fn write_through_or_restore(
        &mut self,
        id: ElementId,
        snapshot: TransformationMap,
    ) -> Result<()> {
        let Err(err) = self.write_through(id) else {
            return Ok(());
        };
        if let Some(element) = find_mut(&mut self.collections, id) {
            element.transformations_mut().set_all(snapshot);
        }
        tracing::debug!("Write-through of element {} failed, registry restored", id);
        Err(err)
    }

    fn write_through(&self, id: ElementId) -> Result<()> {
        let writer = self
            .writer
            .as_ref()
            .ok_or_else(|| MappingError::persistence("The dataset is not backed by a store"))?;
        let (kind, name, element) = self
            .elements()
            .find(|(_, _, e)| e.id() == id)
            .ok_or(MappingError::ElementNotFound(id))?;

        let record = WriteRecord {
            kind,
            name: name.to_string(),
            transformations: element.transformations().get_all(),
        };
        tracing::info!(
            "Writing {} transformations of {}['{}']",
            record.transformations.len(),
            kind,
            name
        );
        writer.write(&record)
    }
}

fn find_mut(
    collections: &mut BTreeMap<ElementKind, BTreeMap<String, Element>>,
    id: ElementId,
) -> Option<&mut Element> {
    collections
        .values_mut()
        .flat_map(|elements| elements.values_mut())
        .find(|e| e.id() == id)
}
