//! Step-by-step maximum flow walkthrough
//!
//! Runs Edmonds-Karp on the classic six-node network, or on a network
//! loaded from the JSON file given as the first argument, logging every
//! augmenting path and printing the recorded trace as JSON.
//!
//! Copyright (c) 2025 Mohammad Atashi <mohammadaliatashi@icloud.com>

use std::error::Error;
use std::fs;

use augment_core::data_structures::NetworkDescription;
use augment_core::{
    verify_max_flow, CapacityGraph, EdmondsKarp, ExecutionTracer, LoggingObserver, NodeId,
};
use log::{info, Level};

fn classic_network() -> Result<CapacityGraph<i64>, augment_core::FlowError> {
    CapacityGraph::from_matrix(&[
        [0, 16, 13, 0, 0, 0],
        [0, 0, 10, 12, 0, 0],
        [0, 4, 0, 0, 14, 0],
        [0, 0, 9, 0, 0, 20],
        [0, 0, 0, 7, 0, 4],
        [0, 0, 0, 0, 0, 0],
    ])
}

fn load_network(path: &str) -> Result<CapacityGraph<i64>, Box<dyn Error>> {
    let text = fs::read_to_string(path)?;
    let description: NetworkDescription<i64> = serde_json::from_str(&text)?;
    Ok(CapacityGraph::try_from(description)?)
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut args = std::env::args().skip(1);
    let (graph, source, sink) = match args.next() {
        Some(path) => {
            let graph = load_network(&path)?;
            let source = args.next().map(|s| s.parse()).transpose()?.unwrap_or(0);
            let sink = args
                .next()
                .map(|s| s.parse())
                .transpose()?
                .unwrap_or(graph.node_count().saturating_sub(1));
            info!("Loaded network from {}", path);
            (graph, source, sink)
        }
        None => (classic_network()?, 0, 5),
    };

    let mut tracer = ExecutionTracer::new();
    let observer = (LoggingObserver::new(Level::Info), &mut tracer);
    let result = EdmondsKarp::new().solve(&graph, NodeId(source), NodeId(sink), observer)?;

    let cut = verify_max_flow(&graph, &result, NodeId(source), NodeId(sink))?;
    info!(
        "Minimum cut: {:?} | {:?} with capacity {}",
        cut.source_side, cut.sink_side, cut.capacity
    );

    println!("{}", tracer.to_json()?);
    Ok(())
}
