//! Watts–Strogatz small-world generator.
//!
//! Shortcuts are added on top of the ring lattice; ring edges are never
//! removed. With `p = 0` the result is exactly the k-regular ring lattice and
//! every node keeps a degree of at least `k`.

use crate::{GraphModel, RandomSource, Result, WattsStrogatzParams, graph::GraphBuilder};

/// Generates a Watts–Strogatz graph on `n` nodes with ring degree `k` and
/// shortcut probability `p`.
///
/// Ring edges are visited node by node, `i` joined to `(i + j) mod n` for
/// `j` in `1..=k/2`. For each ring edge one sample decides whether a shortcut
/// is added; if so a second sample picks the shortcut target uniformly,
/// bumping it to the next node when it would land on `i`.
///
/// # Errors
/// Returns [`crate::RandGraphError::InvalidParameter`] when `k` is odd or not
/// below `n`, or when `p` is not a probability.
///
/// # Examples
/// ```
/// use randgraph_core::{SeededSource, watts_strogatz};
///
/// let graph = watts_strogatz(10, 4, 0.0, &mut SeededSource::from_seed(2))?;
/// assert_eq!(graph.edge_count(), 20);
/// assert!(graph.degrees().iter().all(|&d| d == 4));
/// # Ok::<(), randgraph_core::RandGraphError>(())
/// ```
pub fn watts_strogatz<R: RandomSource + ?Sized>(
    n: usize,
    k: usize,
    p: f64,
    rng: &mut R,
) -> Result<GraphModel> {
    WattsStrogatzParams { n, k, p }.validate()?;

    let half = k / 2;
    let mut builder = GraphBuilder::new(n);
    for i in 0..n {
        for offset in 1..=half {
            let neighbour = (i + offset) % n;
            if neighbour != i {
                builder.add_edge(i, neighbour);
            }
        }
    }

    for i in 0..n {
        for offset in 1..=half {
            if (i + offset) % n == i {
                continue;
            }
            if rng.next_f64() < p {
                let target = shortcut_target(i, n, rng.next_f64());
                builder.add_edge(i, target);
            }
        }
    }

    Ok(builder.build())
}

/// Maps a uniform sample onto a node other than `from`.
fn shortcut_target(from: usize, n: usize, sample: f64) -> usize {
    let target = ((sample * n as f64) as usize).min(n - 1);
    if target == from {
        (target + 1) % n
    } else {
        target
    }
}
