//! Path search and disambiguation.
//!
//! Selection rules, in order:
//! 1. no candidate path: fail;
//! 2. exactly one candidate: take it;
//! 3. several candidates, no intermediate: take the unique direct edge if
//!    there is one, otherwise fail listing all candidates;
//! 4. several candidates with an intermediate: keep the candidates through
//!    the intermediate and require exactly one.
//!
//! There is no shortest-path tie-breaking beyond the direct edge rule: ties
//! among longer paths are always reported back to the caller.

use crate::graph::{NodeKey, Path, TransformationGraph};

/// Why no single path could be selected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Unresolved {
    NoPath,
    Ambiguous(Vec<Path>),
    NoPathThroughIntermediate(NodeKey),
    AmbiguousThroughIntermediate { intermediate: NodeKey, paths: Vec<Path> },
}

/// Pick exactly one path out of `candidates`.
pub fn select_path(
    candidates: Vec<Path>,
    intermediate: Option<&NodeKey>,
) -> Result<Path, Unresolved> {
    let mut candidates = candidates;
    match candidates.len() {
        0 => return Err(Unresolved::NoPath),
        1 => return Ok(candidates.remove(0)),
        _ => {}
    }

    let Some(intermediate) = intermediate else {
        let mut direct = candidates
            .iter()
            .enumerate()
            .filter(|(_, p)| p.len() == 1)
            .map(|(i, _)| i);
        let unique_direct = match (direct.next(), direct.next()) {
            (Some(i), None) => Some(i),
            _ => None,
        };
        return match unique_direct {
            Some(i) => {
                tracing::debug!("Selected direct edge among {} candidate paths", candidates.len());
                Ok(candidates.swap_remove(i))
            }
            None => Err(Unresolved::Ambiguous(candidates)),
        };
    };

    candidates.retain(|p| p.contains(intermediate));
    match candidates.len() {
        0 => Err(Unresolved::NoPathThroughIntermediate(intermediate.clone())),
        1 => {
            tracing::debug!("Selected the only path through {}", intermediate);
            Ok(candidates.remove(0))
        }
        _ => Err(Unresolved::AmbiguousThroughIntermediate {
            intermediate: intermediate.clone(),
            paths: candidates,
        }),
    }
}

/// Resolves node pairs to a single path in one transformation graph.
pub struct PathResolver<'g> {
    graph: &'g TransformationGraph,
}

impl<'g> PathResolver<'g> {
    pub fn new(graph: &'g TransformationGraph) -> Self {
        Self { graph }
    }

    /// Find the path from `from` to `to`, optionally through `intermediate`.
    ///
    /// A node resolves to itself with the zero-edge path without searching.
    pub fn resolve(
        &self,
        from: &NodeKey,
        to: &NodeKey,
        intermediate: Option<&NodeKey>,
    ) -> Result<Path, Unresolved> {
        if from == to {
            return Ok(Path::trivial(from.clone()));
        }
        let candidates = self.graph.all_simple_paths(from, to);
        tracing::debug!("Found {} candidate paths from {} to {}", candidates.len(), from, to);
        select_path(candidates, intermediate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cosys_core::Transformation;

    fn path(nodes: &[&str]) -> Path {
        Path::new(nodes.iter().map(|n| NodeKey::from(*n)).collect())
    }

    #[test]
    fn test_no_candidates() {
        assert_eq!(select_path(vec![], None), Err(Unresolved::NoPath));
        assert_eq!(select_path(vec![], Some(&NodeKey::from("m"))), Err(Unresolved::NoPath));
    }

    #[test]
    fn test_single_candidate_ignores_intermediate() {
        let only = path(&["a", "e", "b"]);
        assert_eq!(select_path(vec![only.clone()], Some(&NodeKey::from("zzz"))), Ok(only));
    }

    #[test]
    fn test_direct_edge_wins() {
        let direct = path(&["a", "b"]);
        let candidates = vec![
            path(&["a", "e1", "b"]),
            direct.clone(),
            path(&["a", "e2", "c", "e3", "b"]),
        ];
        assert_eq!(select_path(candidates, None), Ok(direct));
    }

    #[test]
    fn test_two_direct_edges_are_ambiguous() {
        let candidates = vec![path(&["a", "b"]), path(&["a", "b"]), path(&["a", "e", "b"])];
        assert_eq!(
            select_path(candidates.clone(), None),
            Err(Unresolved::Ambiguous(candidates))
        );
    }

    #[test]
    fn test_equal_length_paths_are_ambiguous() {
        let candidates = vec![path(&["a", "e1", "b"]), path(&["a", "e2", "b"])];
        assert_eq!(
            select_path(candidates.clone(), None),
            Err(Unresolved::Ambiguous(candidates))
        );
    }

    #[test]
    fn test_intermediate_filtering() {
        let candidates = vec![
            path(&["a", "e1", "b"]),
            path(&["a", "e2", "b"]),
            path(&["a", "e2", "c", "e3", "b"]),
        ];

        assert_eq!(
            select_path(candidates.clone(), Some(&NodeKey::from("e1"))),
            Ok(path(&["a", "e1", "b"]))
        );
        assert_eq!(
            select_path(candidates.clone(), Some(&NodeKey::from("x"))),
            Err(Unresolved::NoPathThroughIntermediate(NodeKey::from("x")))
        );
        assert_eq!(
            select_path(candidates.clone(), Some(&NodeKey::from("e2"))),
            Err(Unresolved::AmbiguousThroughIntermediate {
                intermediate: NodeKey::from("e2"),
                paths: candidates[1..].to_vec(),
            })
        );
    }

    #[test]
    fn test_intermediate_overrides_direct_edge() {
        let candidates = vec![path(&["a", "b"]), path(&["a", "e", "b"])];
        assert_eq!(
            select_path(candidates, Some(&NodeKey::from("e"))),
            Ok(path(&["a", "e", "b"]))
        );
    }

    #[test]
    fn test_resolve_same_node_is_trivial() {
        let graph = TransformationGraph::new();
        let resolver = PathResolver::new(&graph);
        let node = NodeKey::from("nowhere");
        let resolved = resolver.resolve(&node, &node, None).unwrap();
        assert!(resolved.is_empty());
    }

    #[test]
    fn test_resolve_through_graph() {
        let mut graph = TransformationGraph::new();
        let (a, b, c) = (NodeKey::from("a"), NodeKey::from("b"), NodeKey::from("c"));
        graph.add_edge(a.clone(), b.clone(), Transformation::identity());
        graph.add_edge(b.clone(), c.clone(), Transformation::identity());

        let resolver = PathResolver::new(&graph);
        assert_eq!(resolver.resolve(&a, &c, None), Ok(path(&["a", "b", "c"])));
        assert_eq!(resolver.resolve(&c, &a, None), Err(Unresolved::NoPath));
    }
}
