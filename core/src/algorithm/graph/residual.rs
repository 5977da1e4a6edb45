//! Residual capacity state for augmenting-path algorithms
//!
//! The residual state is derived once from a [`CapacityGraph`] and then
//! owned exclusively by a single maximum-flow run. Every listed edge
//! `(u, v)` seeds `residual(u, v)` with its capacity and, unless the input
//! also lists `(v, u)`, an implicit reverse entry `residual(v, u) = 0`.
//!
//! # Invariant
//! [`ResidualState::adjust`] moves capacity between the two directions of a
//! pair, so `residual(u, v) + residual(v, u)` is constant for every pair and
//! the implicit flow `capacity(u, v) - residual(u, v)` stays skew-symmetric.
//! No residual value is ever negative.

use std::collections::HashMap;
use std::fmt;

use crate::algorithm::graph::error::{FlowError, InvariantViolation};
use crate::algorithm::traits::NodeId;
use crate::data_structures::capacity::Capacity;
use crate::data_structures::graph::CapacityGraph;

/// Mutable residual capacities of one flow computation
#[derive(Debug, Clone, PartialEq)]
pub struct ResidualState<C> {
    /// Number of nodes in the underlying network
    node_count: usize,

    /// Residual capacity per modelled ordered pair
    residual: HashMap<(NodeId, NodeId), C>,

    /// Ascending neighbour lists over both edge directions, self-loops excluded
    adjacency: Vec<Vec<NodeId>>,
}

impl<C: Capacity> ResidualState<C> {
    /// Derives the initial residual state from a capacity graph
    pub fn from_graph(graph: &CapacityGraph<C>) -> Self {
        let node_count = graph.node_count();
        let mut residual = HashMap::with_capacity(graph.edge_count() * 2);
        let mut adjacency = vec![Vec::new(); node_count];

        for (from, to, capacity) in graph.edges() {
            residual.insert((from, to), capacity);
            residual.entry((to, from)).or_insert_with(C::zero);

            if from != to {
                adjacency[from.as_usize()].push(to);
                adjacency[to.as_usize()].push(from);
            }
        }

        for neighbours in &mut adjacency {
            neighbours.sort_unstable();
            neighbours.dedup();
        }

        Self {
            node_count,
            residual,
            adjacency,
        }
    }

    /// Current remaining capacity on `(from, to)`; zero for unmodelled pairs
    #[inline]
    pub fn residual(&self, from: NodeId, to: NodeId) -> C {
        self.residual
            .get(&(from, to))
            .copied()
            .unwrap_or_else(C::zero)
    }

    /// Moves `delta` units of residual capacity from `(from, to)` to `(to, from)`
    ///
    /// Fails without touching the state if either direction would become
    /// negative.
    pub fn adjust(&mut self, from: NodeId, to: NodeId, delta: C) -> Result<(), InvariantViolation> {
        let forward = self.residual(from, to);
        let backward = self.residual(to, from);

        if forward < delta {
            return Err(InvariantViolation::NegativeResidual {
                from,
                to,
                residual: forward.to_string(),
                delta: delta.to_string(),
            });
        }
        if backward + delta < C::zero() {
            return Err(InvariantViolation::NegativeResidual {
                from: to,
                to: from,
                residual: backward.to_string(),
                delta: delta.to_string(),
            });
        }
        if delta == C::zero() || from == to {
            return Ok(());
        }

        self.residual.insert((from, to), forward - delta);
        self.residual.insert((to, from), backward + delta);
        Ok(())
    }

    /// Nodes sharing an original edge with `node`, in ascending order
    #[inline]
    pub fn neighbors(&self, node: NodeId) -> &[NodeId] {
        self.adjacency
            .get(node.as_usize())
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    #[inline]
    pub fn node_count(&self) -> usize {
        self.node_count
    }

    /// Rejects a graph whose node range differs from the one this state was derived from
    pub fn ensure_derived_from(&self, graph: &CapacityGraph<C>) -> Result<(), FlowError> {
        if self.node_count != graph.node_count() {
            return Err(FlowError::InvalidGraph(format!(
                "residual state covers {} nodes but the graph has {}",
                self.node_count,
                graph.node_count()
            )));
        }
        Ok(())
    }

    /// Dense matrix view of the residual capacities
    pub fn to_matrix(&self) -> Vec<Vec<C>> {
        let mut matrix = vec![vec![C::zero(); self.node_count]; self.node_count];
        for (&(from, to), &value) in &self.residual {
            matrix[from.as_usize()][to.as_usize()] = value;
        }
        matrix
    }
}

impl<C: Capacity> fmt::Display for ResidualState<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.to_matrix() {
            let cells: Vec<String> = row.iter().map(ToString::to_string).collect();
            writeln!(f, "[{}]", cells.join(", "))?;
        }
        Ok(())
    }
}
