//! Generation orchestration for the randgraph library.
//!
//! Provides the [`Generator`] entry point, which turns a validated request
//! into a [`Realisation`]: the generated graph together with its metrics.

use tracing::{Span, field, info, instrument};

use crate::{
    GraphModel, ModelParams, RandomSource, Result, SeededSource,
    generators::generate,
    metrics::{self, Metrics},
};

/// A generated graph bundled with the request that produced it and its
/// statistics.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Realisation {
    /// Request that produced the graph.
    pub params: ModelParams,
    /// Seed used for the run, when one was configured.
    pub seed: Option<u64>,
    /// The generated graph.
    pub graph: GraphModel,
    /// Statistics computed over [`Realisation::graph`].
    pub metrics: Metrics,
}

/// Entry point for generating graphs and their metrics.
///
/// # Examples
/// ```
/// use randgraph_core::{BarabasiAlbertParams, GeneratorBuilder, ModelParams};
///
/// let generator = GeneratorBuilder::new().with_seed(7).build();
/// let params = ModelParams::BarabasiAlbert(BarabasiAlbertParams { n: 30, m0: 3, m: 2 });
/// let first = generator.run(&params)?;
/// let second = generator.run(&params)?;
/// assert_eq!(first.graph, second.graph);
/// assert_eq!(first.metrics.node_count, 30);
/// # Ok::<(), randgraph_core::RandGraphError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Generator {
    seed: Option<u64>,
}

impl Generator {
    pub(crate) fn new(seed: Option<u64>) -> Self {
        Self { seed }
    }

    /// Returns the seed applied to every run, if any.
    #[must_use]
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Generates a graph for `params` and computes its metrics.
    ///
    /// A configured seed makes the run reproducible; otherwise the random
    /// source is seeded from entropy.
    ///
    /// # Errors
    /// Returns [`crate::RandGraphError::InvalidParameter`] when `params`
    /// violates its model's preconditions. Nothing is generated in that case.
    #[instrument(
        name = "core.run",
        err,
        skip(self, params),
        fields(model = %params.kind(), nodes = params.node_count(), seed = field::Empty),
    )]
    pub fn run(&self, params: &ModelParams) -> Result<Realisation> {
        let mut source = match self.seed {
            Some(seed) => {
                Span::current().record("seed", seed);
                SeededSource::from_seed(seed)
            }
            None => SeededSource::from_entropy(),
        };
        self.run_with(params, &mut source)
    }

    /// Generates a graph for `params` using the caller's random source.
    ///
    /// # Errors
    /// Returns [`crate::RandGraphError::InvalidParameter`] when `params`
    /// violates its model's preconditions.
    ///
    /// # Examples
    /// ```
    /// use randgraph_core::{ErdosRenyiParams, GeneratorBuilder, ModelParams, ScriptedSource};
    ///
    /// let mut source = ScriptedSource::new(vec![0.2, 0.8, 0.4])?;
    /// let params = ModelParams::ErdosRenyi(ErdosRenyiParams { n: 3, p: 0.5 });
    /// let realisation = GeneratorBuilder::new().build().run_with(&params, &mut source)?;
    /// assert_eq!(realisation.graph.edge_count(), 2);
    /// # Ok::<(), randgraph_core::RandGraphError>(())
    /// ```
    pub fn run_with<R: RandomSource + ?Sized>(
        &self,
        params: &ModelParams,
        source: &mut R,
    ) -> Result<Realisation> {
        let graph = generate(params, source)?;
        let metrics = metrics::compute(&graph);
        info!(
            model = %params.kind(),
            nodes = metrics.node_count,
            edges = metrics.edge_count,
            max_degree = metrics.max_degree,
            "graph realised"
        );
        Ok(Realisation {
            params: *params,
            seed: self.seed,
            graph,
            metrics,
        })
    }
}
