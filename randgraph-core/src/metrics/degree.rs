//! Degree-based statistics.

use crate::GraphModel;

/// Returns the degree of every node, indexed by node id.
#[must_use]
pub fn degree_sequence(graph: &GraphModel) -> Vec<usize> {
    graph.degrees()
}

/// Counts nodes per degree value, dense over `0..=max_degree`.
///
/// An empty graph yields an empty histogram.
///
/// # Examples
/// ```
/// use randgraph_core::{GraphModel, metrics::degree_histogram};
///
/// let path = GraphModel::from_edges(4, [(0, 1), (1, 2)]).expect("valid edges");
/// assert_eq!(degree_histogram(&path), vec![1, 2, 1]);
/// ```
#[must_use]
pub fn degree_histogram(graph: &GraphModel) -> Vec<usize> {
    histogram_from_degrees(&graph.degrees())
}

/// Returns `2|E| / |V|`, or `None` when the graph has fewer than two nodes.
#[must_use]
pub fn average_degree(graph: &GraphModel) -> Option<f64> {
    let nodes = graph.node_count();
    (nodes > 1).then(|| 2.0 * graph.edge_count() as f64 / nodes as f64)
}

/// Returns `2|E| / (|V|(|V|-1))`, or `None` when the graph has fewer than two
/// nodes.
#[must_use]
pub fn density(graph: &GraphModel) -> Option<f64> {
    let nodes = graph.node_count();
    (nodes > 1).then(|| {
        let nodes = nodes as f64;
        2.0 * graph.edge_count() as f64 / (nodes * (nodes - 1.0))
    })
}

pub(super) fn histogram_from_degrees(degrees: &[usize]) -> Vec<usize> {
    let Some(max) = degrees.iter().copied().max() else {
        return Vec::new();
    };
    let mut histogram = vec![0_usize; max + 1];
    for &degree in degrees {
        if let Some(bucket) = histogram.get_mut(degree) {
            *bucket += 1;
        }
    }
    histogram
}
