//! Random-graph generators.
//!
//! Each model lives in its own module and exposes a free function taking the
//! model's parameters and a [`RandomSource`]. [`generate`] dispatches a
//! [`ModelParams`] request to the matching generator.

mod barabasi_albert;
mod erdos_renyi;
mod watts_strogatz;

pub use barabasi_albert::barabasi_albert;
pub use erdos_renyi::erdos_renyi;
pub use watts_strogatz::watts_strogatz;

use tracing::{debug, instrument};

use crate::{GraphModel, ModelParams, RandomSource, Result};

/// Generates a graph for `params`, drawing randomness from `rng`.
///
/// # Errors
/// Returns [`crate::RandGraphError::InvalidParameter`] when `params` violates
/// its model's preconditions.
///
/// # Examples
/// ```
/// use randgraph_core::{ErdosRenyiParams, ModelParams, SeededSource, generate};
///
/// let params = ModelParams::ErdosRenyi(ErdosRenyiParams { n: 4, p: 1.0 });
/// let graph = generate(&params, &mut SeededSource::from_seed(1))?;
/// assert_eq!(graph.edge_count(), 6);
/// # Ok::<(), randgraph_core::RandGraphError>(())
/// ```
#[instrument(
    name = "core.generate",
    err,
    skip(params, rng),
    fields(model = %params.kind(), nodes = params.node_count()),
)]
pub fn generate<R: RandomSource + ?Sized>(params: &ModelParams, rng: &mut R) -> Result<GraphModel> {
    let graph = match params {
        ModelParams::ErdosRenyi(er) => erdos_renyi(er.n, er.p, rng)?,
        ModelParams::BarabasiAlbert(ba) => barabasi_albert(ba.n, ba.m0, ba.m, rng)?,
        ModelParams::WattsStrogatz(ws) => watts_strogatz(ws.n, ws.k, ws.p, rng)?,
    };
    debug!(edges = graph.edge_count(), "graph generated");
    Ok(graph)
}
