//! Edmonds-Karp Maximum Flow Implementation
//!
//! This module implements the Ford-Fulkerson method with breadth-first
//! augmenting-path selection. The driver loop owns a fresh residual state
//! for the duration of one call and alternates between searching for the
//! shortest augmenting path and pushing its bottleneck, until the sink is
//! no longer reachable.
//!
//! # Termination
//! Every augmentation raises the total flow by a strictly positive amount,
//! and shortest-path selection bounds the number of augmentations by
//! `O(V * E)` independent of capacity magnitudes.
//!
//! Copyright (c) 2025 Mohammad Atashi <mohammadaliatashi@icloud.com>

use std::collections::BTreeMap;

use log::{debug, trace, warn};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::algorithm::graph::augmentation::augment;
use crate::algorithm::graph::augmenting_path::{find_augmenting_path, AugmentingPath, SearchOutcome};
use crate::algorithm::graph::error::{FlowError, InvariantViolation};
use crate::algorithm::graph::min_cut::{min_cut, MinCut};
use crate::algorithm::graph::residual::ResidualState;
use crate::algorithm::traits::{
    Algorithm, AlgorithmComplexity, AlgorithmParameter, NodeId, ParameterType,
};
use crate::data_structures::capacity::Capacity;
use crate::data_structures::graph::CapacityGraph;
use crate::execution::tracer::{AugmentationStep, FlowObserver, NoopObserver};

/// Solver configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaxFlowConfig {
    /// Optional ceiling on the number of augmentations
    pub max_iterations: Option<usize>,
    /// Whether the result keeps every augmenting path with its flow
    pub record_augmentations: bool,
}

impl Default for MaxFlowConfig {
    fn default() -> Self {
        Self {
            max_iterations: None,
            record_augmentations: true,
        }
    }
}

/// Flow path representation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlowPath<C> {
    /// Path vertices, source first
    pub path: Vec<NodeId>,
    /// Flow amount along path
    pub flow: C,
}

/// Maximum flow result with the terminal residual state
#[derive(Debug, Clone)]
pub struct MaxFlowResult<C> {
    /// Maximum flow value
    pub max_flow: C,
    /// Number of augmentations performed
    pub iterations: usize,
    /// Augmenting paths in discovery order (empty unless recorded)
    pub augmentations: Vec<FlowPath<C>>,
    residual: ResidualState<C>,
}

impl<C: Capacity> MaxFlowResult<C> {
    /// Residual state left behind by the last augmentation
    pub fn residual(&self) -> &ResidualState<C> {
        &self.residual
    }

    pub fn into_residual(self) -> ResidualState<C> {
        self.residual
    }

    /// Per-edge flow over the edges of `graph`
    pub fn flows(&self, graph: &CapacityGraph<C>) -> Result<BTreeMap<(NodeId, NodeId), C>, FlowError> {
        extract_flow(graph, &self.residual)
    }

    /// Minimum cut certified by the terminal residual state
    pub fn min_cut(&self, graph: &CapacityGraph<C>, source: NodeId) -> Result<MinCut<C>, FlowError> {
        min_cut(graph, &self.residual, source)
    }
}

/// Driver loop phases
#[derive(Debug)]
enum DriverPhase {
    Searching,
    Augmenting(AugmentingPath),
    Done,
}

/// Independent flow problem for batch solving
#[derive(Debug, Clone)]
pub struct FlowProblem<C> {
    pub graph: CapacityGraph<C>,
    pub source: NodeId,
    pub sink: NodeId,
}

/// Edmonds-Karp maximum flow solver
#[derive(Debug, Clone, Default)]
pub struct EdmondsKarp {
    config: MaxFlowConfig,
}

impl EdmondsKarp {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: MaxFlowConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &MaxFlowConfig {
        &self.config
    }

    /// Computes the maximum flow from `source` to `sink`, reporting progress to `observer`
    pub fn solve<C, O>(
        &self,
        graph: &CapacityGraph<C>,
        source: NodeId,
        sink: NodeId,
        mut observer: O,
    ) -> Result<MaxFlowResult<C>, FlowError>
    where
        C: Capacity,
        O: FlowObserver<C>,
    {
        for node in [source, sink] {
            if !graph.contains_node(node) {
                return Err(FlowError::InvalidNode(node));
            }
        }

        debug!(
            "Edmonds-Karp on {} nodes / {} edges from {} to {}",
            graph.node_count(),
            graph.edge_count(),
            source,
            sink
        );

        let mut residual = ResidualState::from_graph(graph);
        let mut total_flow = C::zero();
        let mut iterations = 0;
        let mut searches = 0;
        let mut augmentations = Vec::new();
        let mut phase = DriverPhase::Searching;

        loop {
            phase = match phase {
                DriverPhase::Searching => {
                    searches += 1;
                    observer.on_search_start(searches);

                    match find_augmenting_path(&residual, source, sink) {
                        SearchOutcome::Found(parents) => {
                            let path = parents
                                .path_to(sink)
                                .ok_or(InvariantViolation::BrokenParentChain { sink })?;
                            trace!("SEARCHING -> AUGMENTING with {} hops", path.len());
                            DriverPhase::Augmenting(path)
                        }
                        SearchOutcome::Unreachable => {
                            trace!("SEARCHING -> DONE after {} searches", searches);
                            DriverPhase::Done
                        }
                    }
                }
                DriverPhase::Augmenting(path) => {
                    if let Some(limit) = self.config.max_iterations {
                        if iterations >= limit {
                            warn!("Aborting max flow: augmentation limit {} reached", limit);
                            return Err(FlowError::IterationLimitExceeded { limit });
                        }
                    }

                    let bottleneck = augment(&mut residual, &path)?;
                    total_flow += bottleneck;
                    iterations += 1;

                    let step = AugmentationStep {
                        iteration: iterations,
                        path: path.into_nodes(),
                        bottleneck,
                        total_flow,
                    };
                    observer.on_augment(&step, &residual);

                    if self.config.record_augmentations {
                        augmentations.push(FlowPath {
                            path: step.path,
                            flow: bottleneck,
                        });
                    }

                    trace!("AUGMENTING -> SEARCHING, total flow {}", total_flow);
                    DriverPhase::Searching
                }
                DriverPhase::Done => break,
            };
        }

        observer.on_complete(total_flow, iterations);
        debug!(
            "Maximum flow {} reached after {} augmentations",
            total_flow, iterations
        );

        Ok(MaxFlowResult {
            max_flow: total_flow,
            iterations,
            augmentations,
            residual,
        })
    }

    /// Solves independent networks in parallel
    ///
    /// Each problem gets its own residual state; no state is shared between
    /// problems.
    pub fn solve_batch<C: Capacity>(&self, problems: &[FlowProblem<C>]) -> Vec<Result<C, FlowError>> {
        problems
            .par_iter()
            .map(|problem| {
                self.solve(&problem.graph, problem.source, problem.sink, NoopObserver)
                    .map(|result| result.max_flow)
            })
            .collect()
    }
}

/// Maximum flow value from `source` to `sink`
pub fn compute_max_flow<C: Capacity>(
    graph: &CapacityGraph<C>,
    source: NodeId,
    sink: NodeId,
) -> Result<C, FlowError> {
    let solver = EdmondsKarp::with_config(MaxFlowConfig {
        record_augmentations: false,
        ..MaxFlowConfig::default()
    });
    solver
        .solve(graph, source, sink, NoopObserver)
        .map(|result| result.max_flow)
}

/// Maximum flow values of independent problems, computed in parallel
pub fn compute_max_flow_batch<C: Capacity>(problems: &[FlowProblem<C>]) -> Vec<Result<C, FlowError>> {
    EdmondsKarp::new().solve_batch(problems)
}

/// Per-edge flow derived from a residual state
///
/// Only edges of `graph` are reported. When both `(u, v)` and `(v, u)` are
/// edges, the net flow appears on one of them and the other reads zero.
pub fn extract_flow<C: Capacity>(
    graph: &CapacityGraph<C>,
    residual: &ResidualState<C>,
) -> Result<BTreeMap<(NodeId, NodeId), C>, FlowError> {
    residual.ensure_derived_from(graph)?;

    Ok(graph
        .edges()
        .map(|(from, to, capacity)| {
            let remaining = residual.residual(from, to);
            let flow = if capacity > remaining {
                capacity - remaining
            } else {
                C::zero()
            };
            ((from, to), flow)
        })
        .collect())
}

impl Algorithm for EdmondsKarp {
    fn name(&self) -> &'static str {
        "Edmonds-Karp"
    }

    fn category(&self) -> &'static str {
        "max_flow"
    }

    fn description(&self) -> String {
        "Ford-Fulkerson maximum flow with breadth-first (shortest) augmenting paths, \
         deterministic ascending-index tie-breaking and explicit residual bookkeeping."
            .to_string()
    }

    fn complexity(&self) -> AlgorithmComplexity {
        AlgorithmComplexity {
            time_complexity: "O(V * E^2)".to_string(),
            space_complexity: "O(V + E)".to_string(),
            iteration_bound: "O(V * E) augmentations".to_string(),
        }
    }

    fn parameters(&self) -> Vec<AlgorithmParameter> {
        vec![
            AlgorithmParameter {
                name: "max_iterations".to_string(),
                value: self.get_parameter("max_iterations").unwrap_or_default(),
                value_type: ParameterType::OptionalInteger,
                description: "Ceiling on augmentations, or \"none\"".to_string(),
            },
            AlgorithmParameter {
                name: "record_augmentations".to_string(),
                value: self.get_parameter("record_augmentations").unwrap_or_default(),
                value_type: ParameterType::Boolean,
                description: "Keep every augmenting path in the result".to_string(),
            },
        ]
    }

    fn set_parameter(&mut self, name: &str, value: &str) -> Result<(), FlowError> {
        match name {
            "max_iterations" => {
                if value.eq_ignore_ascii_case("none") {
                    self.config.max_iterations = None;
                    return Ok(());
                }
                let limit = value.parse::<usize>().map_err(|_| FlowError::InvalidParameter {
                    name: name.to_string(),
                    reason: "must be a positive integer or \"none\"".to_string(),
                })?;
                if limit == 0 {
                    return Err(FlowError::InvalidParameter {
                        name: name.to_string(),
                        reason: "must be > 0".to_string(),
                    });
                }
                self.config.max_iterations = Some(limit);
                Ok(())
            }
            "record_augmentations" => {
                self.config.record_augmentations =
                    value.parse::<bool>().map_err(|_| FlowError::InvalidParameter {
                        name: name.to_string(),
                        reason: "must be true or false".to_string(),
                    })?;
                Ok(())
            }
            _ => Err(FlowError::InvalidParameter {
                name: name.to_string(),
                reason: "unknown parameter".to_string(),
            }),
        }
    }

    fn get_parameter(&self, name: &str) -> Option<String> {
        match name {
            "max_iterations" => Some(
                self.config
                    .max_iterations
                    .map_or_else(|| "none".to_string(), |limit| limit.to_string()),
            ),
            "record_augmentations" => Some(self.config.record_augmentations.to_string()),
            _ => None,
        }
    }
}
