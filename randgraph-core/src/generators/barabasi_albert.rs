//! Barabási–Albert preferential-attachment generator.
//!
//! The attachment walk reproduces a fixed, reproducible variant of the model:
//! the degree total used to normalise the walk is taken once per new node,
//! while individual degrees are bumped after every draw. Later draws in the
//! same round therefore see proportions that no longer sum to one, and a node
//! may select the same target more than once. The graph keeps such a pair
//! once; the degree bookkeeping counts every selection.

use tracing::trace;

use crate::{
    BarabasiAlbertParams, GraphModel, RandomSource, Result, graph::GraphBuilder,
};

/// Generates a Barabási–Albert graph with an `m0`-node complete seed and `m`
/// attachment draws per additional node.
///
/// # Errors
/// Returns [`crate::RandGraphError::InvalidParameter`] unless `m <= m0 < n`.
///
/// # Examples
/// ```
/// use randgraph_core::{SeededSource, barabasi_albert};
///
/// let graph = barabasi_albert(10, 3, 2, &mut SeededSource::from_seed(5))?;
/// assert_eq!(graph.node_count(), 10);
/// assert!(graph.contains_edge(0, 1) && graph.contains_edge(1, 2) && graph.contains_edge(0, 2));
/// # Ok::<(), randgraph_core::RandGraphError>(())
/// ```
pub fn barabasi_albert<R: RandomSource + ?Sized>(
    n: usize,
    m0: usize,
    m: usize,
    rng: &mut R,
) -> Result<GraphModel> {
    BarabasiAlbertParams { n, m0, m }.validate()?;

    let mut builder = GraphBuilder::new(n);
    let mut degrees = vec![0_usize; n];

    for i in 0..m0 {
        for j in (i + 1)..m0 {
            builder.add_edge(i, j);
        }
    }
    for slot in degrees.iter_mut().take(m0) {
        *slot = m0 - 1;
    }

    for new_node in m0..n {
        let total: usize = degrees.iter().take(new_node).sum();
        for _ in 0..m {
            let draw = rng.next_f64();
            let Some(target) = select_target(&degrees, new_node, total, draw) else {
                trace!(new_node, draw, "attachment walk selected no target");
                continue;
            };
            builder.add_edge(new_node, target);
            bump(&mut degrees, new_node);
            bump(&mut degrees, target);
        }
    }

    Ok(builder.build())
}

/// Walks nodes `0..limit`, accumulating `degree / total`, and returns the first
/// node whose cumulative share exceeds `draw`.
fn select_target(degrees: &[usize], limit: usize, total: usize, draw: f64) -> Option<usize> {
    if total == 0 {
        return None;
    }
    let total = total as f64;
    let mut cumulative = 0.0;
    for (node, &degree) in degrees.iter().take(limit).enumerate() {
        cumulative += degree as f64 / total;
        if draw < cumulative {
            return Some(node);
        }
    }
    None
}

fn bump(degrees: &mut [usize], node: usize) {
    if let Some(slot) = degrees.get_mut(node) {
        *slot += 1;
    }
}
