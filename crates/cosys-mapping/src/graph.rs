//! Transformation graph over coordinate systems and elements.
//!
//! Nodes are coordinate-system names and element identities. Every registry
//! entry contributes an element -> coordinate system edge, plus the reverse
//! edge when the transformation can be inverted. The graph is rebuilt for each
//! query and thrown away afterwards.

use std::collections::HashMap;
use std::fmt;

use cosys_core::{Transform, Transformation};
use petgraph::algo::all_simple_paths;
use petgraph::graph::{DiGraph, NodeIndex};

use crate::element::{Element, ElementId};

/// A graph node: a named (extrinsic) coordinate system or an element's
/// intrinsic coordinate system.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum NodeKey {
    Named(String),
    Element(ElementId),
}

impl fmt::Display for NodeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeKey::Named(name) => write!(f, "'{}'", name),
            NodeKey::Element(id) => write!(f, "element {}", id),
        }
    }
}

impl From<&str> for NodeKey {
    fn from(name: &str) -> Self {
        NodeKey::Named(name.to_string())
    }
}

impl From<String> for NodeKey {
    fn from(name: String) -> Self {
        NodeKey::Named(name)
    }
}

impl From<ElementId> for NodeKey {
    fn from(id: ElementId) -> Self {
        NodeKey::Element(id)
    }
}

impl From<&Element> for NodeKey {
    fn from(element: &Element) -> Self {
        NodeKey::Element(element.id())
    }
}

/// A simple path: distinct nodes from source to target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Path(Vec<NodeKey>);

impl Path {
    pub fn new(nodes: Vec<NodeKey>) -> Self {
        Self(nodes)
    }

    /// The zero-edge path from a node to itself.
    pub fn trivial(node: NodeKey) -> Self {
        Self(vec![node])
    }

    pub fn nodes(&self) -> &[NodeKey] {
        &self.0
    }

    /// Number of edges.
    pub fn len(&self) -> usize {
        self.0.len().saturating_sub(1)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn contains(&self, node: &NodeKey) -> bool {
        self.0.contains(node)
    }

    /// Consecutive node pairs, i.e. the edges walked by the path.
    pub fn hops(&self) -> impl Iterator<Item = (&NodeKey, &NodeKey)> {
        self.0.windows(2).map(|w| (&w[0], &w[1]))
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, node) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" -> ")?;
            }
            write!(f, "{}", node)?;
        }
        Ok(())
    }
}

/// Directed graph with transformation-labelled edges.
///
/// Wraps a petgraph `DiGraph` so the resolver only sees node keys. At most
/// one edge exists per ordered node pair; adding it again replaces the label.
#[derive(Debug, Default)]
pub struct TransformationGraph {
    graph: DiGraph<NodeKey, Transformation>,
    index: HashMap<NodeKey, NodeIndex>,
}

impl TransformationGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a node if not already present.
    pub fn add_node(&mut self, key: NodeKey) -> NodeIndex {
        if let Some(idx) = self.index.get(&key) {
            return *idx;
        }
        let idx = self.graph.add_node(key.clone());
        self.index.insert(key, idx);
        idx
    }

    /// Add or relabel the edge `from -> to`, adding missing nodes.
    pub fn add_edge(&mut self, from: NodeKey, to: NodeKey, transformation: Transformation) {
        let a = self.add_node(from);
        let b = self.add_node(to);
        self.graph.update_edge(a, b, transformation);
    }

    pub fn contains_node(&self, key: &NodeKey) -> bool {
        self.index.contains_key(key)
    }

    /// Label of the edge `from -> to`.
    pub fn edge(&self, from: &NodeKey, to: &NodeKey) -> Option<&Transformation> {
        let a = self.index.get(from)?;
        let b = self.index.get(to)?;
        self.graph.find_edge(*a, *b).map(|e| &self.graph[e])
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Every simple path from `from` to `to`.
    ///
    /// Unknown nodes have no paths. The enumeration is exhaustive and
    /// therefore exponential on densely connected graphs.
    pub fn all_simple_paths(&self, from: &NodeKey, to: &NodeKey) -> Vec<Path> {
        let (Some(a), Some(b)) = (self.index.get(from), self.index.get(to)) else {
            return Vec::new();
        };
        if a == b {
            return vec![Path::trivial(from.clone())];
        }
        all_simple_paths::<Vec<NodeIndex>, _>(&self.graph, *a, *b, 0, None)
            .map(|indices| Path(indices.into_iter().map(|i| self.graph[i].clone()).collect()))
            .collect()
    }
}

/// Build the transformation graph for a set of elements.
///
/// Every name in `coordinate_systems` becomes a node even without edges.
/// Reverse edges are added only for transformations that invert; a failed
/// inversion drops that edge and nothing else.
pub fn build_graph<'a, E, C>(elements: E, coordinate_systems: C) -> TransformationGraph
where
    E: IntoIterator<Item = &'a Element>,
    C: IntoIterator,
    C::Item: Into<String>,
{
    let mut graph = TransformationGraph::new();
    for cs in coordinate_systems {
        graph.add_node(NodeKey::Named(cs.into()));
    }

    for element in elements {
        let element_node = NodeKey::from(element);
        graph.add_node(element_node.clone());
        for (cs, transformation) in element.transformations().iter() {
            let cs_node = NodeKey::from(cs);
            graph.add_edge(element_node.clone(), cs_node.clone(), transformation.clone());
            match transformation.inverse() {
                Ok(inverse) => graph.add_edge(cs_node, element_node.clone(), inverse),
                Err(err) => {
                    tracing::debug!("No reverse edge from '{}' to {}: {}", cs, element_node, err);
                }
            }
        }
    }

    tracing::debug!(
        "Built transformation graph with {} nodes and {} edges",
        graph.node_count(),
        graph.edge_count()
    );
    graph
}
