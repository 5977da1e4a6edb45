use std::collections::BTreeSet;

use augment_core::validation::verify_flow;
use augment_core::{verify_max_flow, CapacityGraph, EdmondsKarp, ExecutionTracer, NodeId};
use proptest::prelude::*;

/// Small random networks with distinct ordered pairs and a source/sink choice
fn network() -> impl Strategy<Value = (CapacityGraph<u64>, usize, usize)> {
    (2usize..8)
        .prop_flat_map(|n| {
            (
                Just(n),
                prop::collection::vec((0..n, 0..n, 0u64..20), 0..28),
                0..n,
                0..n,
            )
        })
        .prop_map(|(n, edges, source, sink)| {
            let mut seen = BTreeSet::new();
            let edges: Vec<_> = edges
                .into_iter()
                .filter(|&(u, v, _)| seen.insert((u, v)))
                .collect();
            (CapacityGraph::new(n, edges).unwrap(), source, sink)
        })
}

/// Minimum s-t cut by exhaustive enumeration of partitions
fn brute_force_min_cut(graph: &CapacityGraph<u64>, source: usize, sink: usize) -> u64 {
    let n = graph.node_count();
    (0u32..(1 << n))
        .filter(|mask| mask & (1 << source) != 0 && mask & (1 << sink) == 0)
        .map(|mask| {
            graph
                .edges()
                .filter(|(u, v, _)| mask & (1 << u.0) != 0 && mask & (1 << v.0) == 0)
                .map(|(_, _, c)| c)
                .sum::<u64>()
        })
        .min()
        .unwrap_or(0)
}

proptest! {
    #[test]
    fn prop_flow_is_certified_by_min_cut((graph, source, sink) in network()) {
        let result = EdmondsKarp::new()
            .solve(&graph, NodeId(source), NodeId(sink), ExecutionTracer::new())
            .unwrap();

        let verified = verify_max_flow(&graph, &result, NodeId(source), NodeId(sink));
        prop_assert!(verified.is_ok(), "{:?}", verified);
    }

    #[test]
    fn prop_flow_respects_capacity_and_conservation((graph, source, sink) in network()) {
        prop_assume!(source != sink);
        let result = EdmondsKarp::new()
            .solve(&graph, NodeId(source), NodeId(sink), ExecutionTracer::new())
            .unwrap();

        let flows = result.flows(&graph).unwrap();
        for (&(u, v), &flow) in &flows {
            prop_assert!(flow <= graph.capacity(u, v));
        }
        prop_assert_eq!(verify_flow(&graph, &flows, NodeId(source), NodeId(sink)), Ok(result.max_flow));
    }

    #[test]
    fn prop_matches_exhaustive_min_cut((graph, source, sink) in network()) {
        prop_assume!(source != sink);
        let result = EdmondsKarp::new()
            .solve(&graph, NodeId(source), NodeId(sink), ExecutionTracer::new())
            .unwrap();

        prop_assert_eq!(result.max_flow, brute_force_min_cut(&graph, source, sink));
    }

    #[test]
    fn prop_iterations_within_bound((graph, source, sink) in network()) {
        let result = EdmondsKarp::new()
            .solve(&graph, NodeId(source), NodeId(sink), ExecutionTracer::new())
            .unwrap();

        prop_assert!(result.iterations <= graph.edge_count() * graph.node_count());
        prop_assert!(result.augmentations.iter().all(|path| path.flow > 0));
    }

    #[test]
    fn prop_repeated_runs_are_identical((graph, source, sink) in network()) {
        let solver = EdmondsKarp::new();
        let mut first = ExecutionTracer::new();
        let mut second = ExecutionTracer::new();

        let a = solver.solve(&graph, NodeId(source), NodeId(sink), &mut first).unwrap();
        let b = solver.solve(&graph, NodeId(source), NodeId(sink), &mut second).unwrap();

        prop_assert_eq!(a.max_flow, b.max_flow);
        prop_assert_eq!(first.events(), second.events());
    }
}
