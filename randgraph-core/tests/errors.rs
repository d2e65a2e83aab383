use randgraph_core::{
    GraphModel, GraphModelError, GraphModelErrorCode, ModelKind, RandGraphError,
    RandGraphErrorCode, RawParameters,
};
use rstest::rstest;

#[rstest]
#[case(GraphModelError::SelfLoop { index: 0, node: 1 }, GraphModelErrorCode::SelfLoop)]
#[case(
    GraphModelError::NodeOutOfRange { index: 2, node: 9, node_count: 4 },
    GraphModelErrorCode::NodeOutOfRange,
)]
#[case(
    GraphModelError::DuplicateEdge { index: 1, source_node: 0, target_node: 3 },
    GraphModelErrorCode::DuplicateEdge,
)]
fn returns_expected_graph_code(
    #[case] error: GraphModelError,
    #[case] expected: GraphModelErrorCode,
) {
    assert_eq!(error.code(), expected);
    assert_eq!(error.code().to_string(), expected.as_str());
}

#[rstest]
fn invalid_parameter_maps_to_its_code() {
    let error = RandGraphError::InvalidParameter {
        parameter: "p",
        reason: "out of range".into(),
    };
    assert_eq!(error.code(), RandGraphErrorCode::InvalidParameter);
}

#[rstest]
fn codes_are_stable_strings() {
    assert_eq!(
        RandGraphErrorCode::InvalidParameter.as_str(),
        "RANDGRAPH_INVALID_PARAMETER"
    );
    assert_eq!(GraphModelErrorCode::SelfLoop.as_str(), "GRAPH_SELF_LOOP");
    assert_eq!(
        GraphModelErrorCode::NodeOutOfRange.as_str(),
        "GRAPH_NODE_OUT_OF_RANGE"
    );
    assert_eq!(
        GraphModelErrorCode::DuplicateEdge.as_str(),
        "GRAPH_DUPLICATE_EDGE"
    );
}

#[rstest]
fn from_edges_reports_the_offending_edge() {
    let err = GraphModel::from_edges(2, [(0, 1), (0, 2)]).expect_err("edge must be rejected");
    assert_eq!(err.code(), GraphModelErrorCode::NodeOutOfRange);
    assert_eq!(
        err.to_string(),
        "edge 1 references node 2 but the graph has 2 nodes"
    );
}

#[rstest]
fn invalid_parameter_message_names_the_parameter() {
    let raw = RawParameters {
        m0: 6,
        n: 5,
        ..RawParameters::default()
    };
    let err = raw
        .resolve(ModelKind::BarabasiAlbert)
        .expect_err("m0 must be below N");
    assert!(matches!(
        err,
        RandGraphError::InvalidParameter { parameter: "m0", .. }
    ));
    assert!(err.to_string().starts_with("invalid parameter `m0`"));
}
