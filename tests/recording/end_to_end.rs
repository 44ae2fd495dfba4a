//! End-to-end trace scenarios
//!
//! The canonical flow: record `CONST + CONST -> ADD`, finalize, then
//! traverse the finalized graph read-only.

use crate::common::exclusive_recorder;
use tracegraph::prelude::*;

// ============================================================================
// The canonical add-two-constants trace
// ============================================================================

#[test]
fn record_add_of_two_constants() {
    let _recorder = exclusive_recorder();

    start_recording().unwrap();

    let (lhs, rhs, add) = with_active(|graph| {
        let lhs = graph.create_node(OpKind::CompileTimeConstant);
        graph
            .node_mut(lhs)
            .unwrap()
            .set_payload(Payload::Value(1.0));

        let rhs = graph.create_node(OpKind::CompileTimeConstant);
        graph
            .node_mut(rhs)
            .unwrap()
            .set_payload(Payload::Value(2.0));

        let add = graph.create_node(OpKind::Plus);
        graph.add_argument(add, lhs).unwrap();
        graph.add_argument(add, rhs).unwrap();
        (lhs, rhs, add)
    })
    .expect("trace is open");

    let graph = stop_recording().unwrap();

    assert_eq!(graph.len(), 3);
    assert_eq!(lhs.index(), 0);
    assert_eq!(rhs.index(), 1);
    assert_eq!(add.index(), 2);

    assert!(graph.depends_on(add, lhs).unwrap());
    assert!(graph.depends_on(add, rhs).unwrap());
    assert!(!graph.depends_on(lhs, add).unwrap());
    assert!(graph.depends_on(rhs, rhs).unwrap());

    let add_node = graph.node(add).unwrap();
    assert_eq!(add_node.kind(), OpKind::Plus);
    assert_eq!(add_node.args(), &[lhs, rhs]);
    assert!(add_node.references(lhs));
}

#[test]
fn empty_trace_yields_empty_graph() {
    let _recorder = exclusive_recorder();

    start_recording().unwrap();
    let graph = stop_recording().unwrap();

    assert_eq!(graph.len(), 0);
    assert!(graph.is_empty());
}

// ============================================================================
// Finalized graphs are ordinary values
// ============================================================================

#[test]
fn finalized_graph_outlives_later_traces() {
    let _recorder = exclusive_recorder();

    start_recording().unwrap();
    with_active(|graph| graph.create_node(OpKind::Parameter)).unwrap();
    let first = stop_recording().unwrap();

    start_recording().unwrap();
    let second = stop_recording().unwrap();

    assert_eq!(first.len(), 1);
    assert_eq!(second.len(), 0);
    assert_ne!(first, second);
}

#[test]
fn finalized_graph_survives_serde() {
    let _recorder = exclusive_recorder();

    start_recording().unwrap();
    with_active(|graph| {
        let x = graph.create_node(OpKind::Parameter);
        graph
            .node_mut(x)
            .unwrap()
            .set_payload(Payload::Name("x".to_string()));
        let out = graph.create_node(OpKind::OutputAssignment);
        graph.add_argument(out, x).unwrap();
    })
    .unwrap();
    let graph = stop_recording().unwrap();

    let json = serde_json::to_string(&graph).unwrap();
    let back: ExpressionGraph = serde_json::from_str(&json).unwrap();

    assert_eq!(graph, back);
    assert_eq!(
        *back.node(ExpressionId::from_index(0)).unwrap().payload(),
        Payload::Name("x".to_string())
    );
}

// ============================================================================
// Standalone recorder (no global state)
// ============================================================================

#[test]
fn injected_recorder_works_without_global_state() {
    let mut recorder = Recorder::new();
    recorder.start().unwrap();

    let graph = recorder.current_mut().expect("recording");
    let x = graph.create_node(OpKind::Parameter);
    let y = graph.create_node(OpKind::Multiplication);
    graph.add_argument(y, x).unwrap();
    graph.add_argument(y, x).unwrap();

    let finalized = recorder.stop().unwrap();
    assert_eq!(finalized.len(), 2);
    assert!(finalized.depends_on(y, x).unwrap());
}

#[test]
fn consumers_can_walk_the_graph_in_creation_order() {
    let mut recorder = Recorder::new();
    recorder.start().unwrap();
    {
        let graph = recorder.current_mut().unwrap();
        graph.create_node(OpKind::Parameter);
        graph.create_node(OpKind::Parameter);
        let call = graph.create_node(OpKind::FunctionCall);
        graph
            .node_mut(call)
            .unwrap()
            .set_payload(Payload::Name("sin".to_string()));
        graph
            .add_argument(call, ExpressionId::from_index(0))
            .unwrap();
    }
    let graph = recorder.stop().unwrap();

    let kinds: Vec<OpKind> = graph.iter().map(|(_, node)| node.kind()).collect();
    assert_eq!(
        kinds,
        vec![OpKind::Parameter, OpKind::Parameter, OpKind::FunctionCall]
    );
}
