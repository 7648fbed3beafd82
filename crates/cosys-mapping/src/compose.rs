//! Composition of a resolved path into one transformation.

use cosys_core::Transformation;

use crate::error::{MappingError, Result};
use crate::graph::{Path, TransformationGraph};

/// Collect the edge transformations along `path` into one sequence.
///
/// The zero-edge path composes to the identity. Any other path yields a
/// [`Sequence`](cosys_core::transform::Sequence) of its edges in path order,
/// even when it has a single edge; nothing is multiplied out here.
pub fn compose(path: &Path, graph: &TransformationGraph) -> Result<Transformation> {
    if path.is_empty() {
        return Ok(Transformation::identity());
    }
    let steps = path
        .hops()
        .map(|(from, to)| {
            graph.edge(from, to).cloned().ok_or_else(|| MappingError::MissingEdge {
                from: from.clone(),
                to: to.clone(),
            })
        })
        .collect::<Result<Vec<_>>>()?;
    Ok(Transformation::sequence(steps))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::NodeKey;
    use cosys_core::transform::{Scale, Translation};
    use cosys_core::{Axis, Transform};
    use nalgebra::DMatrix;

    #[test]
    fn test_trivial_path_is_identity() {
        let graph = TransformationGraph::new();
        let t = compose(&Path::trivial(NodeKey::from("a")), &graph).unwrap();
        assert_eq!(t, Transformation::identity());
    }

    #[test]
    fn test_compose_in_path_order() {
        let scale: Transformation = Scale::new(vec![0.5], vec![Axis::X]).unwrap().into();
        let translation: Transformation =
            Translation::new(vec![100.0], vec![Axis::X]).unwrap().into();
        let (a, b, c) = (NodeKey::from("a"), NodeKey::from("b"), NodeKey::from("c"));

        let mut graph = TransformationGraph::new();
        graph.add_edge(a.clone(), b.clone(), scale.clone());
        graph.add_edge(b.clone(), c.clone(), translation.clone());

        let t = compose(&Path::new(vec![a, b, c]), &graph).unwrap();
        assert_eq!(t, Transformation::sequence(vec![scale, translation]));

        let axes = [Axis::X, Axis::Y];
        let m = t.to_affine_matrix(&axes, &axes).unwrap();
        let expected = DMatrix::from_row_slice(3, 3, &[
            0.5, 0.0, 100.0,
            0.0, 1.0, 0.0,
            0.0, 0.0, 1.0,
        ]);
        assert_eq!(m, expected);
    }

    #[test]
    fn test_missing_edge() {
        let graph = TransformationGraph::new();
        let path = Path::new(vec![NodeKey::from("a"), NodeKey::from("b")]);
        assert!(matches!(compose(&path, &graph), Err(MappingError::MissingEdge { .. })));
    }
}
