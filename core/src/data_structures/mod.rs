//! Input-side data structures for flow networks

pub mod capacity;
pub mod graph;

pub use self::capacity::Capacity;
pub use self::graph::{CapacityGraph, EdgeDescription, NetworkDescription};
