//! Flow computation error taxonomy
//!
//! Two classes of failure are kept apart: [`FlowError`] covers input and
//! configuration problems the caller can fix, while [`InvariantViolation`]
//! signals a defect in the coupling between path search and augmentation.
//! An unreachable sink is never an error; it is the terminal condition of
//! the driver loop.
//!
//! Copyright (c) 2025 Mohammad Atashi <mohammadaliatashi@icloud.com>

use thiserror::Error;

use crate::algorithm::traits::NodeId;

/// User-facing flow errors
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FlowError {
    #[error("Invalid capacity {capacity} on edge {from} -> {to}: capacities must be non-negative")]
    InvalidCapacity {
        from: NodeId,
        to: NodeId,
        capacity: String,
    },

    #[error("Capacity {capacity} on edge {from} -> {to} pushes the capacity total past the largest representable value")]
    CapacityOverflow {
        from: NodeId,
        to: NodeId,
        capacity: String,
    },

    #[error("Invalid node: {0}")]
    InvalidNode(NodeId),

    #[error("Duplicate edge: {0} -> {1}")]
    DuplicateEdge(NodeId, NodeId),

    #[error("Invalid graph: {0}")]
    InvalidGraph(String),

    #[error("Invalid parameter: {name} - {reason}")]
    InvalidParameter { name: String, reason: String },

    #[error("Iteration limit of {limit} augmentations exceeded")]
    IterationLimitExceeded { limit: usize },

    #[error("Internal invariant violated: {0}")]
    Invariant(#[from] InvariantViolation),
}

impl FlowError {
    /// Returns true when the error indicates a logic defect rather than bad input
    pub fn is_invariant_violation(&self) -> bool {
        matches!(self, FlowError::Invariant(_))
    }
}

/// Programmer-facing invariant violations
///
/// These are unreachable from valid input when the path finder and the
/// augmentation engine are correctly coupled.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvariantViolation {
    #[error("adjusting {from} -> {to} by {delta} would drive residual {residual} below zero")]
    NegativeResidual {
        from: NodeId,
        to: NodeId,
        residual: String,
        delta: String,
    },

    #[error("augmenting path {path:?} has a non-positive bottleneck")]
    ZeroBottleneck { path: Vec<NodeId> },

    #[error("search reported sink {sink} as reached but its parent chain is broken")]
    BrokenParentChain { sink: NodeId },
}
