//! Execution tracing for maximum-flow runs
//!
//! The driver loop reports its progress through the [`FlowObserver`] hook
//! instead of printing. Three observers ship with the crate:
//! [`NoopObserver`] for silent runs, [`LoggingObserver`] for the classic
//! step-by-step walkthrough through the `log` facade, and
//! [`ExecutionTracer`] which records a serializable event sequence for
//! later inspection or replay comparison.
//!
//! Copyright (c) 2025 Mohammad Atashi <mohammadaliatashi@icloud.com>

use log::{log, Level};
use serde::{Deserialize, Serialize};

use crate::algorithm::graph::residual::ResidualState;
use crate::algorithm::traits::NodeId;
use crate::data_structures::capacity::Capacity;

/// One completed augmentation as reported to observers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AugmentationStep<C> {
    /// 1-based augmentation counter
    pub iteration: usize,
    /// Nodes of the augmenting path, source first
    pub path: Vec<NodeId>,
    /// Amount pushed along the path
    pub bottleneck: C,
    /// Accumulated flow after this augmentation
    pub total_flow: C,
}

/// Progress hook invoked by the driver loop
///
/// All methods default to no-ops so observers only implement what they need.
pub trait FlowObserver<C: Capacity> {
    /// Called before each breadth-first search; `iteration` counts searches from 1
    fn on_search_start(&mut self, _iteration: usize) {}

    /// Called after the residual state has been updated for one path
    fn on_augment(&mut self, _step: &AugmentationStep<C>, _residual: &ResidualState<C>) {}

    /// Called once when no augmenting path remains
    fn on_complete(&mut self, _max_flow: C, _augmentations: usize) {}
}

impl<C: Capacity, O: FlowObserver<C> + ?Sized> FlowObserver<C> for &mut O {
    fn on_search_start(&mut self, iteration: usize) {
        (**self).on_search_start(iteration)
    }

    fn on_augment(&mut self, step: &AugmentationStep<C>, residual: &ResidualState<C>) {
        (**self).on_augment(step, residual)
    }

    fn on_complete(&mut self, max_flow: C, augmentations: usize) {
        (**self).on_complete(max_flow, augmentations)
    }
}

impl<C: Capacity, A: FlowObserver<C>, B: FlowObserver<C>> FlowObserver<C> for (A, B) {
    fn on_search_start(&mut self, iteration: usize) {
        self.0.on_search_start(iteration);
        self.1.on_search_start(iteration);
    }

    fn on_augment(&mut self, step: &AugmentationStep<C>, residual: &ResidualState<C>) {
        self.0.on_augment(step, residual);
        self.1.on_augment(step, residual);
    }

    fn on_complete(&mut self, max_flow: C, augmentations: usize) {
        self.0.on_complete(max_flow, augmentations);
        self.1.on_complete(max_flow, augmentations);
    }
}

/// Observer that ignores every event
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl<C: Capacity> FlowObserver<C> for NoopObserver {}

/// Step-by-step walkthrough emitted through the `log` facade
#[derive(Debug, Clone, Copy)]
pub struct LoggingObserver {
    level: Level,
    show_residual: bool,
}

impl LoggingObserver {
    pub fn new(level: Level) -> Self {
        Self {
            level,
            show_residual: true,
        }
    }

    /// Toggles the residual matrix dump after each step
    pub fn with_residual(mut self, show_residual: bool) -> Self {
        self.show_residual = show_residual;
        self
    }
}

impl Default for LoggingObserver {
    fn default() -> Self {
        Self::new(Level::Info)
    }
}

impl<C: Capacity> FlowObserver<C> for LoggingObserver {
    fn on_augment(&mut self, step: &AugmentationStep<C>, residual: &ResidualState<C>) {
        let hops: Vec<String> = step
            .path
            .windows(2)
            .map(|pair| format!("({}, {})", pair[0], pair[1]))
            .collect();

        log!(self.level, "--- Augmenting Path Step {} ---", step.iteration);
        log!(self.level, "Augmenting Path: [{}]", hops.join(", "));
        log!(self.level, "Path Flow: {}", step.bottleneck);
        log!(self.level, "Updated Max Flow: {}", step.total_flow);

        if self.show_residual {
            log!(self.level, "Residual Graph:");
            for line in residual.to_string().lines() {
                log!(self.level, "{}", line);
            }
        }
    }

    fn on_complete(&mut self, max_flow: C, augmentations: usize) {
        log!(self.level, "--- Final Result ---");
        log!(
            self.level,
            "Maximum Flow: {} ({} augmenting paths)",
            max_flow,
            augmentations
        );
    }
}

/// Trace event recorded by [`ExecutionTracer`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum TraceEvent<C> {
    SearchStarted {
        iteration: usize,
    },
    Augmented {
        step: AugmentationStep<C>,
        #[serde(skip_serializing_if = "Option::is_none", default)]
        residual: Option<Vec<Vec<C>>>,
    },
    Completed {
        max_flow: C,
        augmentations: usize,
    },
}

/// Records the full event sequence of a run
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExecutionTracer<C> {
    events: Vec<TraceEvent<C>>,
    capture_residual: bool,
}

impl<C: Capacity> ExecutionTracer<C> {
    pub fn new() -> Self {
        Self {
            events: Vec::new(),
            capture_residual: false,
        }
    }

    /// Tracer that also snapshots the residual matrix after every augmentation
    pub fn with_residual_snapshots() -> Self {
        Self {
            events: Vec::new(),
            capture_residual: true,
        }
    }

    pub fn events(&self) -> &[TraceEvent<C>] {
        &self.events
    }

    /// Augmentation steps in the order they were applied
    pub fn steps(&self) -> impl Iterator<Item = &AugmentationStep<C>> {
        self.events.iter().filter_map(|event| match event {
            TraceEvent::Augmented { step, .. } => Some(step),
            _ => None,
        })
    }

    /// Node sequences of every augmenting path, in discovery order
    pub fn augmenting_paths(&self) -> Vec<Vec<NodeId>> {
        self.steps().map(|step| step.path.clone()).collect()
    }

    /// Number of breadth-first searches performed, including the final failed one
    pub fn search_count(&self) -> usize {
        self.events
            .iter()
            .filter(|event| matches!(event, TraceEvent::SearchStarted { .. }))
            .count()
    }
}

impl<C: Capacity + Serialize> ExecutionTracer<C> {
    /// Serializes the recorded events as pretty-printed JSON
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(&self.events)
    }
}

impl<C: Capacity> Default for ExecutionTracer<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Capacity> FlowObserver<C> for ExecutionTracer<C> {
    fn on_search_start(&mut self, iteration: usize) {
        self.events.push(TraceEvent::SearchStarted { iteration });
    }

    fn on_augment(&mut self, step: &AugmentationStep<C>, residual: &ResidualState<C>) {
        let residual = self.capture_residual.then(|| residual.to_matrix());
        self.events.push(TraceEvent::Augmented {
            step: step.clone(),
            residual,
        });
    }

    fn on_complete(&mut self, max_flow: C, augmentations: usize) {
        self.events.push(TraceEvent::Completed {
            max_flow,
            augmentations,
        });
    }
}
