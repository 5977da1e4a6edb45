//! Core algorithm trait definitions for the AUGMENT flow engine
//!
//! This module establishes the shared vocabulary for algorithm
//! implementations: a type-safe node identifier, a descriptive trait with a
//! string-driven parameter surface, and complexity descriptors.
//!
//! # Key Design Principles
//! - Node identifiers never mix with capacities or iteration counters
//! - Parameters are validated at the boundary, never during execution
//! - Deterministic behavior for given inputs

use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};

use crate::algorithm::graph::error::FlowError;

/// Node identifier ensuring type safety and preventing mixing with other numeric types
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Ord, PartialOrd, Serialize, Deserialize)]
pub struct NodeId(pub usize);

impl NodeId {
    #[inline]
    pub fn as_usize(self) -> usize {
        self.0
    }
}

impl From<usize> for NodeId {
    #[inline]
    fn from(index: usize) -> Self {
        Self(index)
    }
}

impl Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Algorithm parameter with strongly typed values
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlgorithmParameter {
    pub name: String,
    pub value: String,
    pub value_type: ParameterType,
    pub description: String,
}

/// Parameter type enumeration for type-safe parameter handling
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ParameterType {
    Boolean,
    /// Integer ceiling that also accepts `"none"` to disable it
    OptionalInteger,
}

/// Algorithm complexity information
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlgorithmComplexity {
    pub time_complexity: String,
    pub space_complexity: String,
    /// Bound on the number of main-loop iterations
    pub iteration_bound: String,
}

/// Descriptive and configurable algorithm
///
/// # Invariants
/// - State isolation between runs
/// - Deterministic behavior for given inputs
pub trait Algorithm {
    /// Returns the algorithm's descriptive name
    fn name(&self) -> &'static str;

    /// Returns the algorithm's category (e.g., max_flow)
    fn category(&self) -> &'static str;

    /// Returns the algorithm's description with complexity guarantees
    fn description(&self) -> String;

    /// Returns the algorithm's asymptotic complexity
    fn complexity(&self) -> AlgorithmComplexity;

    /// Returns supported parameters with their current values
    fn parameters(&self) -> Vec<AlgorithmParameter>;

    /// Sets algorithm parameter with type validation
    fn set_parameter(&mut self, name: &str, value: &str) -> Result<(), FlowError>;

    /// Gets algorithm parameter value
    fn get_parameter(&self, name: &str) -> Option<String>;
}
