//! Breadth-first augmenting path search
//!
//! The search walks the residual state from the source, treating only
//! pairs with strictly positive residual capacity as traversable. It
//! records parent pointers and leaves path materialization to
//! [`ParentMap::path_to`], so the search itself never allocates a path.
//!
//! # Ordering
//! Neighbours are expanded in ascending node order and the queue is FIFO,
//! so the discovered path is always a fewest-edges path and ties between
//! equally short paths are broken identically on every run.

use std::collections::VecDeque;

use log::trace;

use crate::algorithm::graph::residual::ResidualState;
use crate::algorithm::traits::NodeId;
use crate::data_structures::capacity::Capacity;

/// Parent pointers produced by one breadth-first search
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParentMap {
    source: NodeId,
    parents: Vec<Option<NodeId>>,
    reached: Vec<bool>,
}

impl ParentMap {
    fn new(node_count: usize, source: NodeId) -> Self {
        let mut reached = vec![false; node_count];
        reached[source.as_usize()] = true;
        Self {
            source,
            parents: vec![None; node_count],
            reached,
        }
    }

    #[inline]
    fn record(&mut self, node: NodeId, parent: NodeId) {
        self.reached[node.as_usize()] = true;
        self.parents[node.as_usize()] = Some(parent);
    }

    /// The node the search started from
    #[inline]
    pub fn source(&self) -> NodeId {
        self.source
    }

    /// Whether `node` was reached by the search
    #[inline]
    pub fn reached(&self, node: NodeId) -> bool {
        self.reached.get(node.as_usize()).copied().unwrap_or(false)
    }

    /// Predecessor of `node` on its BFS tree path; `None` for the source and unreached nodes
    #[inline]
    pub fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.parents.get(node.as_usize()).copied().flatten()
    }

    /// Reconstructs the tree path from the source to `target`
    pub fn path_to(&self, target: NodeId) -> Option<AugmentingPath> {
        if !self.reached(target) {
            return None;
        }

        let mut nodes = vec![target];
        let mut current = target;
        while current != self.source {
            current = self.parent(current)?;
            nodes.push(current);
        }
        nodes.reverse();

        Some(AugmentingPath { nodes })
    }
}

/// Source-to-sink node sequence with positive residual on every hop
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AugmentingPath {
    nodes: Vec<NodeId>,
}

impl AugmentingPath {
    #[inline]
    pub fn nodes(&self) -> &[NodeId] {
        &self.nodes
    }

    /// Consecutive `(from, to)` hops along the path
    pub fn edges(&self) -> impl Iterator<Item = (NodeId, NodeId)> + '_ {
        self.nodes.windows(2).map(|pair| (pair[0], pair[1]))
    }

    /// Number of edges on the path
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len().saturating_sub(1)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn into_nodes(self) -> Vec<NodeId> {
        self.nodes
    }
}

/// Result of one augmenting path search
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    /// The sink was reached; parent pointers lead back to the source
    Found(ParentMap),
    /// No positive-residual path exists; the flow is maximal
    Unreachable,
}

/// Breadth-first search for a shortest augmenting path
///
/// Returns [`SearchOutcome::Unreachable`] when `source == sink` or either
/// endpoint lies outside the residual state.
pub fn find_augmenting_path<C: Capacity>(
    residual: &ResidualState<C>,
    source: NodeId,
    sink: NodeId,
) -> SearchOutcome {
    let node_count = residual.node_count();
    if source == sink || source.as_usize() >= node_count || sink.as_usize() >= node_count {
        return SearchOutcome::Unreachable;
    }

    let mut parents = ParentMap::new(node_count, source);
    let mut queue = VecDeque::from([source]);

    while let Some(current) = queue.pop_front() {
        for &next in residual.neighbors(current) {
            if parents.reached(next) || !residual.residual(current, next).is_positive() {
                continue;
            }

            parents.record(next, current);
            if next == sink {
                trace!("BFS reached sink {} via {}", sink, current);
                return SearchOutcome::Found(parents);
            }
            queue.push_back(next);
        }
    }

    trace!("BFS exhausted frontier without reaching sink {}", sink);
    SearchOutcome::Unreachable
}
