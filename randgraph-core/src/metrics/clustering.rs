//! Local clustering coefficients by brute-force neighbourhood intersection.

use crate::GraphModel;

/// Returns the clustering coefficient of `node`, or `None` when the node does
/// not exist.
///
/// Nodes with fewer than two neighbours have a coefficient of `0`.
///
/// # Examples
/// ```
/// use randgraph_core::{GraphModel, metrics::clustering_coefficient};
///
/// // Triangle 0-1-2 with a pendant 3 on node 0.
/// let graph = GraphModel::from_edges(4, [(0, 1), (1, 2), (0, 2), (0, 3)]).expect("valid");
/// assert_eq!(clustering_coefficient(&graph, 1), Some(1.0));
/// assert_eq!(clustering_coefficient(&graph, 3), Some(0.0));
/// let hub = clustering_coefficient(&graph, 0).expect("node exists");
/// assert!((hub - 1.0 / 3.0).abs() < 1e-12);
/// assert_eq!(clustering_coefficient(&graph, 9), None);
/// ```
#[must_use]
pub fn clustering_coefficient(graph: &GraphModel, node: usize) -> Option<f64> {
    let adjacency = graph.adjacency();
    adjacency
        .get(node)
        .map(|neighbours| local_coefficient(&adjacency, neighbours))
}

/// Returns the clustering coefficient of every node, indexed by node id.
#[must_use]
pub fn clustering_coefficients(graph: &GraphModel) -> Vec<f64> {
    coefficients_from_adjacency(&graph.adjacency())
}

/// Returns the mean clustering coefficient, `0` when it is not a number.
#[must_use]
pub fn average_clustering(graph: &GraphModel) -> f64 {
    mean(&clustering_coefficients(graph))
}

pub(super) fn coefficients_from_adjacency(adjacency: &[Vec<usize>]) -> Vec<f64> {
    adjacency
        .iter()
        .map(|neighbours| local_coefficient(adjacency, neighbours))
        .collect()
}

pub(super) fn mean(coefficients: &[f64]) -> f64 {
    let average = coefficients.iter().sum::<f64>() / coefficients.len() as f64;
    if average.is_nan() { 0.0 } else { average }
}

fn local_coefficient(adjacency: &[Vec<usize>], neighbours: &[usize]) -> f64 {
    let degree = neighbours.len();
    if degree < 2 {
        return 0.0;
    }
    let mut links = 0_usize;
    for (position, &a) in neighbours.iter().enumerate() {
        let Some(of_a) = adjacency.get(a) else {
            continue;
        };
        links += neighbours
            .iter()
            .skip(position + 1)
            .filter(|b| of_a.binary_search(b).is_ok())
            .count();
    }
    2.0 * links as f64 / (degree * (degree - 1)) as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mean_of_nothing_is_zero() {
        assert_eq!(mean(&[]), 0.0);
    }

    #[test]
    fn square_has_no_triangles() {
        let square = GraphModel::from_edges(4, [(0, 1), (1, 2), (2, 3), (3, 0)]).expect("valid");
        assert_eq!(clustering_coefficients(&square), vec![0.0; 4]);
        assert_eq!(average_clustering(&square), 0.0);
    }

    #[test]
    fn complete_graph_is_fully_clustered() {
        let edges = (0..5).flat_map(|i| ((i + 1)..5).map(move |j| (i, j)));
        let k5 = GraphModel::from_edges(5, edges).expect("valid");
        assert_eq!(clustering_coefficients(&k5), vec![1.0; 5]);
        assert_eq!(average_clustering(&k5), 1.0);
    }

    #[test]
    fn average_counts_low_degree_nodes_as_zero() {
        // Triangle plus an isolated node: (1 + 1 + 1 + 0) / 4.
        let graph = GraphModel::from_edges(4, [(0, 1), (1, 2), (0, 2)]).expect("valid");
        assert_eq!(average_clustering(&graph), 0.75);
    }
}
