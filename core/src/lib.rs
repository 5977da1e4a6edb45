//! AUGMENT: step-traced maximum flow
//!
//! Edmonds-Karp maximum flow over immutable capacity graphs. A run owns a
//! fresh [`ResidualState`], searches breadth-first for the shortest
//! augmenting path, pushes its bottleneck and repeats until the sink is
//! unreachable. Progress is reported through [`FlowObserver`] hooks rather
//! than printed, and results can be certified against a minimum cut.
//!
//! ```
//! use augment_core::{compute_max_flow, CapacityGraph, NodeId};
//!
//! let graph = CapacityGraph::new(4, vec![(0, 1, 3u32), (0, 2, 3), (1, 3, 3), (2, 3, 3)])?;
//! assert_eq!(compute_max_flow(&graph, NodeId(0), NodeId(3))?, 6);
//! # Ok::<(), augment_core::FlowError>(())
//! ```
//!
//! Copyright (c) 2025 Mohammad Atashi <mohammadaliatashi@icloud.com>

pub mod algorithm;
pub mod data_structures;
pub mod execution;
pub mod validation;

pub use crate::algorithm::graph::{
    compute_max_flow, compute_max_flow_batch, extract_flow, min_cut, EdmondsKarp, FlowError,
    FlowPath, FlowProblem, InvariantViolation, MaxFlowConfig, MaxFlowResult, MinCut,
    ResidualState,
};
pub use crate::algorithm::traits::{Algorithm, NodeId};
pub use crate::data_structures::{Capacity, CapacityGraph, NetworkDescription};
pub use crate::execution::{ExecutionTracer, FlowObserver, LoggingObserver, NoopObserver};
pub use crate::validation::{verify_max_flow, CorrectnessError};
