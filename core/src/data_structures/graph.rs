//! Immutable capacity graph for flow networks
//!
//! This module implements the input side of a maximum-flow computation: a
//! fixed node set `0..n` and at most one capacity per ordered node pair.
//! Pairs without an entry have capacity zero, and an explicit zero entry
//! behaves exactly like an absent one in every computation.
//!
//! # Construction
//! Graphs are validated once, at construction time. Negative or non-finite
//! capacities, out-of-range endpoints and duplicate ordered pairs are
//! rejected before any search runs, as is any input whose capacities sum
//! past the largest value of `C`. There are no mutation operations.

use std::collections::BTreeMap;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::algorithm::graph::error::FlowError;
use crate::algorithm::traits::NodeId;
use crate::data_structures::capacity::Capacity;

/// Directed capacity graph over nodes `0..node_count`
#[derive(Debug, Clone, PartialEq)]
pub struct CapacityGraph<C> {
    /// Number of nodes; identifiers are `0..node_count`
    node_count: usize,

    /// Capacity lookup ordered by `(source, target)`
    capacities: BTreeMap<(NodeId, NodeId), C>,
}

impl<C: Capacity> CapacityGraph<C> {
    /// Creates a validated capacity graph from `(source, target, capacity)` triples
    pub fn new<I>(node_count: usize, edges: I) -> Result<Self, FlowError>
    where
        I: IntoIterator<Item = (usize, usize, C)>,
    {
        let mut capacities = BTreeMap::new();
        let mut total = C::zero();

        for (from, to, capacity) in edges {
            let (from, to) = (NodeId(from), NodeId(to));

            if from.as_usize() >= node_count {
                return Err(FlowError::InvalidNode(from));
            }
            if to.as_usize() >= node_count {
                return Err(FlowError::InvalidNode(to));
            }
            if !capacity.is_valid_capacity() {
                return Err(FlowError::InvalidCapacity {
                    from,
                    to,
                    capacity: capacity.to_string(),
                });
            }
            if capacities.insert((from, to), capacity).is_some() {
                return Err(FlowError::DuplicateEdge(from, to));
            }
            total = total
                .checked_total(capacity)
                .ok_or_else(|| FlowError::CapacityOverflow {
                    from,
                    to,
                    capacity: capacity.to_string(),
                })?;
        }

        debug!(
            "Built capacity graph with {} nodes and {} edges",
            node_count,
            capacities.len()
        );

        Ok(Self {
            node_count,
            capacities,
        })
    }

    /// Creates a capacity graph from a square adjacency matrix
    ///
    /// Zero cells are treated as absent edges.
    pub fn from_matrix<R>(rows: &[R]) -> Result<Self, FlowError>
    where
        R: AsRef<[C]>,
    {
        let node_count = rows.len();
        let mut edges = Vec::new();

        for (from, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != node_count {
                return Err(FlowError::InvalidGraph(format!(
                    "row {} has {} columns, expected {}",
                    from,
                    row.len(),
                    node_count
                )));
            }
            for (to, &capacity) in row.iter().enumerate() {
                if capacity != C::zero() {
                    edges.push((from, to, capacity));
                }
            }
        }

        Self::new(node_count, edges)
    }

    /// Capacity of `(from, to)`, zero for unlisted pairs
    #[inline]
    pub fn capacity(&self, from: NodeId, to: NodeId) -> C {
        self.capacities
            .get(&(from, to))
            .copied()
            .unwrap_or_else(C::zero)
    }

    #[inline]
    pub fn node_count(&self) -> usize {
        self.node_count
    }

    /// Number of listed edges, including explicit zero-capacity entries
    #[inline]
    pub fn edge_count(&self) -> usize {
        self.capacities.len()
    }

    #[inline]
    pub fn contains_node(&self, node: NodeId) -> bool {
        node.as_usize() < self.node_count
    }

    /// Whether `(from, to)` was listed in the input
    #[inline]
    pub fn has_edge(&self, from: NodeId, to: NodeId) -> bool {
        self.capacities.contains_key(&(from, to))
    }

    /// Listed edges in ascending `(source, target)` order
    pub fn edges(&self) -> impl Iterator<Item = (NodeId, NodeId, C)> + '_ {
        self.capacities
            .iter()
            .map(|(&(from, to), &capacity)| (from, to, capacity))
    }

    /// Iterates over all node identifiers in ascending order
    pub fn nodes(&self) -> impl Iterator<Item = NodeId> {
        (0..self.node_count).map(NodeId)
    }

    /// Dense adjacency-matrix view of the capacities
    pub fn to_matrix(&self) -> Vec<Vec<C>> {
        let mut matrix = vec![vec![C::zero(); self.node_count]; self.node_count];
        for (from, to, capacity) in self.edges() {
            matrix[from.as_usize()][to.as_usize()] = capacity;
        }
        matrix
    }
}

/// Serializable description of a flow network
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetworkDescription<C> {
    pub node_count: usize,
    pub edges: Vec<EdgeDescription<C>>,
}

/// Single capacity entry in a [`NetworkDescription`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeDescription<C> {
    pub from: usize,
    pub to: usize,
    pub capacity: C,
}

impl<C: Capacity> TryFrom<NetworkDescription<C>> for CapacityGraph<C> {
    type Error = FlowError;

    fn try_from(description: NetworkDescription<C>) -> Result<Self, Self::Error> {
        CapacityGraph::new(
            description.node_count,
            description
                .edges
                .into_iter()
                .map(|edge| (edge.from, edge.to, edge.capacity)),
        )
    }
}

impl<C: Capacity> From<&CapacityGraph<C>> for NetworkDescription<C> {
    fn from(graph: &CapacityGraph<C>) -> Self {
        Self {
            node_count: graph.node_count(),
            edges: graph
                .edges()
                .map(|(from, to, capacity)| EdgeDescription {
                    from: from.as_usize(),
                    to: to.as_usize(),
                    capacity,
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_graph_creation_and_lookup() {
        let graph = CapacityGraph::new(3, vec![(0, 1, 4u32), (1, 2, 7)]).unwrap();

        assert_eq!(graph.node_count(), 3);
        assert_eq!(graph.edge_count(), 2);
        assert_eq!(graph.capacity(NodeId(0), NodeId(1)), 4);
        assert_eq!(graph.capacity(NodeId(1), NodeId(2)), 7);

        // Unlisted pairs and reverse directions read as zero
        assert_eq!(graph.capacity(NodeId(1), NodeId(0)), 0);
        assert_eq!(graph.capacity(NodeId(0), NodeId(2)), 0);
    }

    #[test]
    fn test_negative_capacity_rejected() {
        let result = CapacityGraph::new(2, vec![(0, 1, -5i64)]);
        assert_eq!(
            result,
            Err(FlowError::InvalidCapacity {
                from: NodeId(0),
                to: NodeId(1),
                capacity: "-5".to_string(),
            })
        );
    }

    #[test]
    fn test_nan_capacity_rejected() {
        let result = CapacityGraph::new(2, vec![(0, 1, f64::NAN)]);
        assert!(matches!(result, Err(FlowError::InvalidCapacity { .. })));
    }

    #[test]
    fn test_infinite_capacity_rejected() {
        let result = CapacityGraph::new(3, vec![(0, 1, f64::INFINITY), (1, 2, f64::INFINITY)]);
        assert!(matches!(
            result,
            Err(FlowError::InvalidCapacity { from: NodeId(0), to: NodeId(1), .. })
        ));
    }

    #[test]
    fn test_capacity_total_must_fit() {
        let result = CapacityGraph::new(2, vec![(0, 1, 200u8), (1, 0, 100)]);
        assert_eq!(
            result,
            Err(FlowError::CapacityOverflow {
                from: NodeId(1),
                to: NodeId(0),
                capacity: "100".to_string(),
            })
        );

        let graph = CapacityGraph::new(2, vec![(0, 1, 200u8), (1, 0, 55)]).unwrap();
        assert_eq!(graph.edge_count(), 2);

        let huge = CapacityGraph::new(2, vec![(0, 1, f64::MAX), (1, 0, f64::MAX)]);
        assert!(matches!(huge, Err(FlowError::CapacityOverflow { .. })));
    }

    #[test]
    fn test_out_of_range_endpoint_rejected() {
        let result = CapacityGraph::new(2, vec![(0, 2, 1u32)]);
        assert_eq!(result, Err(FlowError::InvalidNode(NodeId(2))));
    }

    #[test]
    fn test_duplicate_edge_rejected() {
        let result = CapacityGraph::new(2, vec![(0, 1, 1u32), (0, 1, 2)]);
        assert_eq!(result, Err(FlowError::DuplicateEdge(NodeId(0), NodeId(1))));

        // Antiparallel edges are distinct ordered pairs
        assert!(CapacityGraph::new(2, vec![(0, 1, 1u32), (1, 0, 2)]).is_ok());
    }

    #[test]
    fn test_explicit_zero_matches_absent() {
        let graph = CapacityGraph::new(2, vec![(0, 1, 0u32)]).unwrap();
        assert!(graph.has_edge(NodeId(0), NodeId(1)));
        assert_eq!(
            graph.capacity(NodeId(0), NodeId(1)),
            graph.capacity(NodeId(1), NodeId(0))
        );
    }

    #[test]
    fn test_from_matrix() {
        let matrix = vec![vec![0, 3, 0], vec![0, 0, 2], vec![1, 0, 0]];
        let graph = CapacityGraph::<i32>::from_matrix(&matrix).unwrap();

        assert_eq!(graph.edge_count(), 3);
        assert_eq!(graph.capacity(NodeId(2), NodeId(0)), 1);
        assert_eq!(graph.to_matrix(), matrix);
    }

    #[test]
    fn test_from_matrix_rejects_ragged_rows() {
        let matrix = vec![vec![0, 3], vec![0]];
        let result = CapacityGraph::<i32>::from_matrix(&matrix);
        assert!(matches!(result, Err(FlowError::InvalidGraph(_))));
    }

    #[test]
    fn test_edges_are_ordered() {
        let graph = CapacityGraph::new(3, vec![(2, 0, 1u8), (0, 2, 1), (0, 1, 1)]).unwrap();
        let order: Vec<_> = graph.edges().map(|(u, v, _)| (u.0, v.0)).collect();
        assert_eq!(order, vec![(0, 1), (0, 2), (2, 0)]);
    }

    #[test]
    fn test_description_round_trip_validates() {
        let json = r#"{"node_count":2,"edges":[{"from":0,"to":1,"capacity":-1}]}"#;
        let description: NetworkDescription<i64> = serde_json::from_str(json).unwrap();
        assert!(CapacityGraph::try_from(description).is_err());

        let graph = CapacityGraph::new(2, vec![(0, 1, 9i64)]).unwrap();
        let description = NetworkDescription::from(&graph);
        assert_eq!(CapacityGraph::try_from(description).unwrap(), graph);
    }
}
