//! Benchmark parameter types.

use std::fmt;

use randgraph_core::{
    BarabasiAlbertParams, ErdosRenyiParams, ModelKind, ModelParams, WattsStrogatzParams,
};

/// Seed used for every benchmark run.
pub const SEED: u64 = 42;

/// Node counts benchmarked for every model.
pub const NODE_COUNTS: &[usize] = &[100, 250, 500];

/// One generator benchmark case.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct GeneratorBenchParams {
    /// Model under test.
    pub model: ModelKind,
    /// Number of nodes to generate.
    pub node_count: usize,
}

impl GeneratorBenchParams {
    /// Builds a request of comparable average degree (about 8) for every
    /// model.
    #[must_use]
    pub fn model_params(&self) -> ModelParams {
        let n = self.node_count;
        match self.model {
            ModelKind::ErdosRenyi => ModelParams::ErdosRenyi(ErdosRenyiParams {
                n,
                p: 8.0 / n.saturating_sub(1).max(1) as f64,
            }),
            ModelKind::BarabasiAlbert => {
                ModelParams::BarabasiAlbert(BarabasiAlbertParams { n, m0: 5, m: 4 })
            }
            ModelKind::WattsStrogatz => {
                ModelParams::WattsStrogatz(WattsStrogatzParams { n, k: 8, p: 0.1 })
            }
        }
    }

    /// Every model crossed with [`NODE_COUNTS`].
    pub fn grid() -> impl Iterator<Item = Self> {
        ModelKind::ALL.into_iter().flat_map(|model| {
            NODE_COUNTS
                .iter()
                .map(move |&node_count| Self { model, node_count })
        })
    }
}

impl fmt::Display for GeneratorBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},n={}", self.model, self.node_count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;

    #[rstest]
    fn grid_requests_are_valid() {
        let cases: Vec<_> = GeneratorBenchParams::grid().collect();
        assert_eq!(cases.len(), ModelKind::ALL.len() * NODE_COUNTS.len());
        for case in cases {
            case.model_params()
                .validate()
                .unwrap_or_else(|err| panic!("{case} must be valid: {err}"));
        }
    }

    #[rstest]
    fn display_names_model_and_size() {
        let case = GeneratorBenchParams {
            model: ModelKind::WattsStrogatz,
            node_count: 250,
        };
        assert_eq!(case.to_string(), "watts-strogatz,n=250");
    }
}
