//! Random-graph generation and statistics.
//!
//! Generates Erdős–Rényi, Barabási–Albert and Watts–Strogatz graphs from a
//! pluggable [`RandomSource`] and computes the statistics an explorer UI
//! displays next to them: degree distribution, clustering coefficients,
//! density and a breadth-first path-length figure.
//!
//! The quickest route is a [`Generator`], which bundles generation and metrics
//! into one instrumented call:
//!
//! ```
//! use randgraph_core::{GeneratorBuilder, ModelKind, RawParameters};
//!
//! let raw = RawParameters { n: 4, p: 1.0, ..RawParameters::default() };
//! let params = raw.resolve(ModelKind::ErdosRenyi)?;
//! let realisation = GeneratorBuilder::new().with_seed(1).build().run(&params)?;
//! assert_eq!(realisation.metrics.edge_count, 6);
//! # Ok::<(), randgraph_core::RandGraphError>(())
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]

mod builder;
mod error;
mod generator;
mod graph;
mod model;
mod rng;

pub mod generators;
pub mod metrics;

pub use crate::{
    builder::GeneratorBuilder,
    error::{GraphModelError, GraphModelErrorCode, RandGraphError, RandGraphErrorCode, Result},
    generator::{Generator, Realisation},
    generators::{barabasi_albert, erdos_renyi, generate, watts_strogatz},
    graph::{Edge, GraphModel},
    metrics::Metrics,
    model::{
        BarabasiAlbertParams, ErdosRenyiParams, MAX_NODES, ModelKind, ModelParams,
        RawParameters, WattsStrogatzParams, clamp_probability, force_even,
    },
    rng::{RandomSource, ScriptedSource, SeededSource},
};
