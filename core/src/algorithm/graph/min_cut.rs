//! Minimum cut extraction from a terminal residual state
//!
//! Once no augmenting path remains, the nodes still reachable from the
//! source through positive residual capacity form the source side of a
//! minimum cut. Every original edge leaving that set is saturated, so the
//! cut capacity equals the maximum flow.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::algorithm::graph::error::FlowError;
use crate::algorithm::graph::residual::ResidualState;
use crate::algorithm::traits::NodeId;
use crate::data_structures::capacity::Capacity;
use crate::data_structures::graph::CapacityGraph;

/// Source/sink partition with its crossing edges
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MinCut<C> {
    /// Nodes reachable from the source, ascending
    pub source_side: Vec<NodeId>,
    /// Remaining nodes, ascending
    pub sink_side: Vec<NodeId>,
    /// Positive-capacity edges from the source side to the sink side
    pub cut_edges: Vec<(NodeId, NodeId)>,
    /// Sum of capacities over `cut_edges`
    pub capacity: C,
}

impl<C> MinCut<C> {
    /// Whether `node` ended up on the sink side of the partition
    pub fn separates(&self, node: NodeId) -> bool {
        self.sink_side.binary_search(&node).is_ok()
    }
}

/// Nodes reachable from `source` over positive residual capacity
pub fn reachable_from<C: Capacity>(residual: &ResidualState<C>, source: NodeId) -> Vec<bool> {
    let mut reached = vec![false; residual.node_count()];
    if source.as_usize() >= reached.len() {
        return reached;
    }

    reached[source.as_usize()] = true;
    let mut queue = VecDeque::from([source]);

    while let Some(current) = queue.pop_front() {
        for &next in residual.neighbors(current) {
            if !reached[next.as_usize()] && residual.residual(current, next).is_positive() {
                reached[next.as_usize()] = true;
                queue.push_back(next);
            }
        }
    }

    reached
}

/// Partition induced by residual reachability from `source`
pub fn min_cut<C: Capacity>(
    graph: &CapacityGraph<C>,
    residual: &ResidualState<C>,
    source: NodeId,
) -> Result<MinCut<C>, FlowError> {
    if !graph.contains_node(source) {
        return Err(FlowError::InvalidNode(source));
    }
    residual.ensure_derived_from(graph)?;

    let reached = reachable_from(residual, source);
    let (source_side, sink_side): (Vec<NodeId>, Vec<NodeId>) =
        graph.nodes().partition(|node| reached[node.as_usize()]);

    let mut cut_edges = Vec::new();
    let mut capacity = C::zero();
    for (from, to, edge_capacity) in graph.edges() {
        if reached[from.as_usize()] && !reached[to.as_usize()] && edge_capacity.is_positive() {
            cut_edges.push((from, to));
            capacity += edge_capacity;
        }
    }

    Ok(MinCut {
        source_side,
        sink_side,
        cut_edges,
        capacity,
    })
}
