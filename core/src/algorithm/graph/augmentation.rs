//! Flow augmentation along a discovered path
//!
//! Given a path produced by the breadth-first search, the engine computes
//! the bottleneck residual capacity and pushes exactly that amount along
//! every hop. A path whose bottleneck is not strictly positive can only come
//! from a broken search, so it is reported as an invariant violation and the
//! residual state is left untouched.

use crate::algorithm::graph::augmenting_path::AugmentingPath;
use crate::algorithm::graph::error::InvariantViolation;
use crate::algorithm::graph::residual::ResidualState;
use crate::data_structures::capacity::Capacity;

/// Minimum residual capacity over the hops of `path`
pub fn bottleneck<C: Capacity>(
    residual: &ResidualState<C>,
    path: &AugmentingPath,
) -> Result<C, InvariantViolation> {
    let minimum = path
        .edges()
        .map(|(from, to)| residual.residual(from, to))
        .reduce(C::min_capacity);

    match minimum {
        Some(value) if value.is_positive() => Ok(value),
        _ => Err(InvariantViolation::ZeroBottleneck {
            path: path.nodes().to_vec(),
        }),
    }
}

/// Pushes the bottleneck amount along `path` and returns it
pub fn augment<C: Capacity>(
    residual: &mut ResidualState<C>,
    path: &AugmentingPath,
) -> Result<C, InvariantViolation> {
    let amount = bottleneck(residual, path)?;

    // Walk from the sink back to the source, as the parent pointers do
    let hops: Vec<_> = path.edges().collect();
    for &(from, to) in hops.iter().rev() {
        residual.adjust(from, to, amount)?;
    }

    Ok(amount)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithm::graph::augmenting_path::{find_augmenting_path, SearchOutcome};
    use crate::algorithm::traits::NodeId;
    use crate::data_structures::graph::CapacityGraph;

    fn first_path(residual: &ResidualState<i64>, sink: usize) -> AugmentingPath {
        match find_augmenting_path(residual, NodeId(0), NodeId(sink)) {
            SearchOutcome::Found(parents) => parents.path_to(NodeId(sink)).unwrap(),
            SearchOutcome::Unreachable => panic!("expected a path"),
        }
    }

    #[test]
    fn test_bottleneck_is_minimum_residual() {
        let graph = CapacityGraph::new(4, vec![(0, 1, 8i64), (1, 2, 3), (2, 3, 5)]).unwrap();
        let residual = ResidualState::from_graph(&graph);
        let path = first_path(&residual, 3);

        assert_eq!(bottleneck(&residual, &path), Ok(3));
    }

    #[test]
    fn test_augment_updates_both_directions() {
        let graph = CapacityGraph::new(3, vec![(0, 1, 4i64), (1, 2, 6)]).unwrap();
        let mut residual = ResidualState::from_graph(&graph);
        let path = first_path(&residual, 2);

        assert_eq!(augment(&mut residual, &path), Ok(4));
        assert_eq!(residual.residual(NodeId(0), NodeId(1)), 0);
        assert_eq!(residual.residual(NodeId(1), NodeId(0)), 4);
        assert_eq!(residual.residual(NodeId(1), NodeId(2)), 2);
        assert_eq!(residual.residual(NodeId(2), NodeId(1)), 4);
    }

    #[test]
    fn test_stale_path_is_zero_bottleneck() {
        let graph = CapacityGraph::new(2, vec![(0, 1, 2i64)]).unwrap();
        let mut residual = ResidualState::from_graph(&graph);
        let path = first_path(&residual, 1);

        augment(&mut residual, &path).unwrap();
        let before = residual.clone();

        // Reusing a saturated path must be caught, not silently applied
        let err = augment(&mut residual, &path).unwrap_err();
        assert_eq!(
            err,
            InvariantViolation::ZeroBottleneck {
                path: vec![NodeId(0), NodeId(1)]
            }
        );
        assert_eq!(residual, before);
    }
}
