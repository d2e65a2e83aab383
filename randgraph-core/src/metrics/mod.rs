//! Statistics derived from a [`GraphModel`].
//!
//! [`compute`] builds a full [`Metrics`] snapshot. The per-metric functions
//! are public so a consumer can refresh a single chart without recomputing
//! everything.
//!
//! Degenerate inputs never fail: ratios that are undefined for fewer than two
//! nodes are reported as `None`, and the average clustering coefficient falls
//! back to `0` when it cannot be formed.

mod clustering;
mod degree;
mod paths;

pub use clustering::{average_clustering, clustering_coefficient, clustering_coefficients};
pub use degree::{average_degree, degree_histogram, degree_sequence, density};
pub use paths::average_path_length;

use tracing::{debug, instrument};

use crate::GraphModel;

/// Snapshot of every statistic the front end displays.
///
/// # Examples
/// ```
/// use randgraph_core::{GraphModel, metrics};
///
/// let triangle = GraphModel::from_edges(3, [(0, 1), (1, 2), (0, 2)]).expect("valid edges");
/// let snapshot = metrics::compute(&triangle);
/// assert_eq!(snapshot.edge_count, 3);
/// assert_eq!(snapshot.avg_degree, Some(2.0));
/// assert_eq!(snapshot.density, Some(1.0));
/// assert_eq!(snapshot.avg_clustering_coefficient, 1.0);
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Metrics {
    /// Number of nodes.
    pub node_count: usize,
    /// Number of edges.
    pub edge_count: usize,
    /// Degree of every node, indexed by node id.
    pub degrees: Vec<usize>,
    /// `2|E| / |V|`; `None` for fewer than two nodes.
    pub avg_degree: Option<f64>,
    /// Largest degree; `0` for an empty graph.
    pub max_degree: usize,
    /// `2|E| / (|V|(|V|-1))`; `None` for fewer than two nodes.
    pub density: Option<f64>,
    /// Number of nodes per degree value over `0..=max_degree`.
    pub degree_histogram: Vec<usize>,
    /// Local clustering coefficient of every node.
    pub clustering_coefficients: Vec<f64>,
    /// Mean of the local clustering coefficients, `0` when undefined.
    pub avg_clustering_coefficient: f64,
    /// Breadth-first path-length statistic; `None` for an empty graph.
    pub avg_path_length: Option<f64>,
}

/// Computes every statistic for `graph`.
#[must_use]
#[instrument(
    name = "core.metrics",
    skip(graph),
    fields(nodes = graph.node_count(), edges = graph.edge_count()),
)]
pub fn compute(graph: &GraphModel) -> Metrics {
    let adjacency = graph.adjacency();
    let degrees: Vec<usize> = adjacency.iter().map(Vec::len).collect();
    let clustering = clustering::coefficients_from_adjacency(&adjacency);
    let metrics = Metrics {
        node_count: graph.node_count(),
        edge_count: graph.edge_count(),
        avg_degree: average_degree(graph),
        max_degree: degrees.iter().copied().max().unwrap_or(0),
        density: density(graph),
        degree_histogram: degree::histogram_from_degrees(&degrees),
        avg_clustering_coefficient: clustering::mean(&clustering),
        clustering_coefficients: clustering,
        avg_path_length: paths::path_length_from_adjacency(&adjacency),
        degrees,
    };
    debug!(
        max_degree = metrics.max_degree,
        avg_clustering = metrics.avg_clustering_coefficient,
        "metrics computed"
    );
    metrics
}
