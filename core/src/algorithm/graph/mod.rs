//! Maximum flow over capacity graphs with explicit residual bookkeeping
//! Copyright (c) 2025 Mohammad Atashi <mohammadaliatashi@icloud.com>

pub mod error;
pub mod residual;
pub mod augmenting_path;
pub mod augmentation;
pub mod max_flow;
pub mod min_cut;

pub use self::error::{FlowError, InvariantViolation};
pub use self::residual::ResidualState;
pub use self::augmenting_path::{find_augmenting_path, AugmentingPath, ParentMap, SearchOutcome};
pub use self::augmentation::{augment, bottleneck};
pub use self::max_flow::{
    compute_max_flow, compute_max_flow_batch, extract_flow, EdmondsKarp, FlowPath, FlowProblem,
    MaxFlowConfig, MaxFlowResult,
};
pub use self::min_cut::{min_cut, reachable_from, MinCut};
