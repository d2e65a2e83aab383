//! Benchmark support crate for randgraph.
//!
//! Provides the parameter grid shared by the Criterion benchmarks for the
//! three generators and the metrics engine.

pub mod params;
