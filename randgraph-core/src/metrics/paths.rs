//! Breadth-first path-length statistic.

use std::collections::VecDeque;

use crate::GraphModel;

/// Returns the path-length statistic shown alongside the graph.
///
/// A breadth-first search runs from every node and the depths of all nodes it
/// reaches are summed. The total is divided by `|V|` and then multiplied by
/// `|V| - 1`. Unreachable pairs contribute nothing. This is not the textbook
/// mean shortest-path length.
///
/// Returns `None` for a graph without nodes.
///
/// # Examples
/// ```
/// use randgraph_core::{GraphModel, metrics::average_path_length};
///
/// // Path 0-1-2: depth sums 3 + 2 + 3 = 8, then 8 / 3 * 2.
/// let path = GraphModel::from_edges(3, [(0, 1), (1, 2)]).expect("valid edges");
/// let value = average_path_length(&path).expect("graph has nodes");
/// assert!((value - 16.0 / 3.0).abs() < 1e-12);
/// ```
#[must_use]
pub fn average_path_length(graph: &GraphModel) -> Option<f64> {
    path_length_from_adjacency(&graph.adjacency())
}

pub(super) fn path_length_from_adjacency(adjacency: &[Vec<usize>]) -> Option<f64> {
    let nodes = adjacency.len();
    if nodes == 0 {
        return None;
    }
    let total: usize = (0..nodes).map(|start| depth_sum(adjacency, start)).sum();
    Some(total as f64 / nodes as f64 * (nodes - 1) as f64)
}

/// Sums the BFS depth of every node reachable from `start`.
fn depth_sum(adjacency: &[Vec<usize>], start: usize) -> usize {
    let mut depth: Vec<Option<usize>> = vec![None; adjacency.len()];
    let mut queue = VecDeque::new();
    if let Some(slot) = depth.get_mut(start) {
        *slot = Some(0);
        queue.push_back(start);
    }
    let mut total = 0;
    while let Some(node) = queue.pop_front() {
        let Some(current) = depth.get(node).copied().flatten() else {
            continue;
        };
        total += current;
        let Some(neighbours) = adjacency.get(node) else {
            continue;
        };
        for &next in neighbours {
            if let Some(slot) = depth.get_mut(next) {
                if slot.is_none() {
                    *slot = Some(current + 1);
                    queue.push_back(next);
                }
            }
        }
    }
    total
}
