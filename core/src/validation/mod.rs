//! Result verification against the max-flow min-cut certificate

pub mod correctness;

pub use self::correctness::{verify_flow, verify_max_flow, CorrectnessError};
