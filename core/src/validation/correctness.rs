//! Correctness verification for computed flows
//!
//! Independent checks that a maximum-flow result is genuine: capacity
//! respect and conservation of the extracted per-edge flow, agreement of
//! the flow value with a minimum cut (the max-flow min-cut certificate) and
//! the `V * E` bound on augmentations.
//!
//! Comparisons are exact, so floating-point inputs verify reliably only
//! when every capacity and partial sum is exactly representable.

use std::collections::BTreeMap;

use log::debug;
use thiserror::Error;

use crate::algorithm::graph::error::FlowError;
use crate::algorithm::graph::max_flow::MaxFlowResult;
use crate::algorithm::graph::min_cut::MinCut;
use crate::algorithm::traits::NodeId;
use crate::data_structures::capacity::Capacity;
use crate::data_structures::graph::CapacityGraph;

/// Verification failures
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CorrectnessError {
    #[error("flow {flow} on {from} -> {to} exceeds capacity {capacity}")]
    CapacityExceeded {
        from: NodeId,
        to: NodeId,
        flow: String,
        capacity: String,
    },

    #[error("negative flow {flow} on {from} -> {to}")]
    NegativeFlow { from: NodeId, to: NodeId, flow: String },

    #[error("conservation violated at {node}: inflow {inflow}, outflow {outflow}")]
    ConservationViolated {
        node: NodeId,
        inflow: String,
        outflow: String,
    },

    #[error("source {node} has more inflow than outflow")]
    NegativeNetFlow { node: NodeId },

    #[error("reported max flow {reported} differs from extracted flow value {extracted}")]
    FlowValueMismatch { reported: String, extracted: String },

    #[error("sink {sink} is still reachable in the terminal residual state")]
    SinkReachable { sink: NodeId },

    #[error("flow value {flow} differs from cut capacity {cut}")]
    CutMismatch { flow: String, cut: String },

    #[error("{iterations} augmentations exceed the bound {bound}")]
    IterationBoundExceeded { iterations: usize, bound: usize },

    #[error(transparent)]
    Flow(#[from] FlowError),
}

/// Checks capacity respect and conservation; returns the net outflow of `source`
pub fn verify_flow<C: Capacity>(
    graph: &CapacityGraph<C>,
    flows: &BTreeMap<(NodeId, NodeId), C>,
    source: NodeId,
    sink: NodeId,
) -> Result<C, CorrectnessError> {
    let node_count = graph.node_count();
    let mut inflow = vec![C::zero(); node_count];
    let mut outflow = vec![C::zero(); node_count];

    for (&(from, to), &flow) in flows {
        for node in [from, to] {
            if !graph.contains_node(node) {
                return Err(FlowError::InvalidNode(node).into());
            }
        }

        let capacity = graph.capacity(from, to);
        if flow < C::zero() {
            return Err(CorrectnessError::NegativeFlow {
                from,
                to,
                flow: flow.to_string(),
            });
        }
        if flow > capacity {
            return Err(CorrectnessError::CapacityExceeded {
                from,
                to,
                flow: flow.to_string(),
                capacity: capacity.to_string(),
            });
        }

        outflow[from.as_usize()] += flow;
        inflow[to.as_usize()] += flow;
    }

    for node in graph.nodes() {
        if node == source || node == sink {
            continue;
        }
        let (incoming, outgoing) = (inflow[node.as_usize()], outflow[node.as_usize()]);
        if incoming != outgoing {
            return Err(CorrectnessError::ConservationViolated {
                node,
                inflow: incoming.to_string(),
                outflow: outgoing.to_string(),
            });
        }
    }

    if !graph.contains_node(source) {
        return Err(FlowError::InvalidNode(source).into());
    }
    let (incoming, outgoing) = (inflow[source.as_usize()], outflow[source.as_usize()]);
    if incoming > outgoing {
        return Err(CorrectnessError::NegativeNetFlow { node: source });
    }

    Ok(outgoing - incoming)
}

/// Full certificate check of a maximum-flow result
///
/// Returns the minimum cut that certifies optimality.
pub fn verify_max_flow<C: Capacity>(
    graph: &CapacityGraph<C>,
    result: &MaxFlowResult<C>,
    source: NodeId,
    sink: NodeId,
) -> Result<MinCut<C>, CorrectnessError> {
    let flows = result.flows(graph)?;
    let value = if source == sink {
        C::zero()
    } else {
        verify_flow(graph, &flows, source, sink)?
    };

    if value != result.max_flow {
        return Err(CorrectnessError::FlowValueMismatch {
            reported: result.max_flow.to_string(),
            extracted: value.to_string(),
        });
    }

    let bound = graph.edge_count() * graph.node_count();
    if result.iterations > bound {
        return Err(CorrectnessError::IterationBoundExceeded {
            iterations: result.iterations,
            bound,
        });
    }

    let cut = result.min_cut(graph, source)?;
    if source != sink {
        if !cut.separates(sink) {
            return Err(CorrectnessError::SinkReachable { sink });
        }
        if cut.capacity != result.max_flow {
            return Err(CorrectnessError::CutMismatch {
                flow: result.max_flow.to_string(),
                cut: cut.capacity.to_string(),
            });
        }
    }

    debug!(
        "Verified max flow {} with cut of {} edges",
        result.max_flow,
        cut.cut_edges.len()
    );
    Ok(cut)
}
