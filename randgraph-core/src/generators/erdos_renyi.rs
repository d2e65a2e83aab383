//! Erdős–Rényi `G(n, p)` generator.

use crate::{ErdosRenyiParams, GraphModel, RandomSource, Result, graph::GraphBuilder};

/// Generates a `G(n, p)` graph.
///
/// Pairs are visited as `(i, j)` with `i < j` in lexicographic order, one
/// sample per pair; the edge is kept when the sample is strictly below `p`.
/// `p = 0` therefore yields no edges and `p = 1` the complete graph.
///
/// # Errors
/// Returns [`crate::RandGraphError::InvalidParameter`] when `p` is not a
/// finite value in `[0, 1]`.
///
/// # Examples
/// ```
/// use randgraph_core::{SeededSource, erdos_renyi};
///
/// let graph = erdos_renyi(5, 0.0, &mut SeededSource::from_seed(3))?;
/// assert_eq!(graph.node_count(), 5);
/// assert_eq!(graph.edge_count(), 0);
/// # Ok::<(), randgraph_core::RandGraphError>(())
/// ```
pub fn erdos_renyi<R: RandomSource + ?Sized>(n: usize, p: f64, rng: &mut R) -> Result<GraphModel> {
    ErdosRenyiParams { n, p }.validate()?;
    let mut builder = GraphBuilder::new(n);
    for i in 0..n {
        for j in (i + 1)..n {
            if rng.next_f64() < p {
                builder.add_edge(i, j);
            }
        }
    }
    Ok(builder.build())
}
