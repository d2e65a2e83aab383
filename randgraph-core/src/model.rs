//! Model selection and parameter validation.
//!
//! [`ModelParams`] is the validated, tagged description of one generation
//! request. [`RawParameters`] mirrors the loosely typed form values a front
//! end collects and normalises them into [`ModelParams`].

use std::{fmt, str::FromStr};

use crate::{Result, error::RandGraphError};

/// Identifies one of the supported random-graph models.
///
/// # Examples
/// ```
/// use randgraph_core::ModelKind;
///
/// let kind: ModelKind = "watts-strogatz".parse().expect("known model");
/// assert_eq!(kind, ModelKind::WattsStrogatz);
/// assert_eq!(kind.to_string(), "watts-strogatz");
/// ```
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "kebab-case")
)]
pub enum ModelKind {
    /// Independent edges with a fixed probability.
    ErdosRenyi,
    /// Growth with preferential attachment.
    BarabasiAlbert,
    /// Ring lattice with random shortcuts.
    WattsStrogatz,
}

impl ModelKind {
    /// Every supported model, in display order.
    pub const ALL: [Self; 3] = [Self::ErdosRenyi, Self::BarabasiAlbert, Self::WattsStrogatz];

    /// Returns the stable label for this model.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ErdosRenyi => "erdos-renyi",
            Self::BarabasiAlbert => "barabasi-albert",
            Self::WattsStrogatz => "watts-strogatz",
        }
    }
}

impl fmt::Display for ModelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ModelKind {
    type Err = RandGraphError;

    fn from_str(raw: &str) -> Result<Self> {
        let normalised = raw.trim().to_ascii_lowercase().replace('_', "-");
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == normalised)
            .ok_or_else(|| {
                RandGraphError::invalid(
                    "model",
                    format!(
                        "unknown model `{raw}`; expected one of erdos-renyi, barabasi-albert, watts-strogatz"
                    ),
                )
            })
    }
}

/// Largest node count any model accepts.
///
/// Generation and the path statistic are quadratic in the node count, so
/// requests above this ceiling are rejected before anything is allocated.
pub const MAX_NODES: usize = 100_000;

/// Parameters of the Erdős–Rényi model.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ErdosRenyiParams {
    /// Number of nodes.
    pub n: usize,
    /// Probability of each pair being connected.
    pub p: f64,
}

/// Parameters of the Barabási–Albert model.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BarabasiAlbertParams {
    /// Number of nodes.
    pub n: usize,
    /// Size of the complete seed graph.
    pub m0: usize,
    /// Attachment draws per new node.
    pub m: usize,
}

/// Parameters of the Watts–Strogatz model.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WattsStrogatzParams {
    /// Number of nodes.
    pub n: usize,
    /// Ring degree; must be even.
    pub k: usize,
    /// Probability of adding a shortcut per ring edge.
    pub p: f64,
}

/// A validated generation request.
///
/// # Examples
/// ```
/// use randgraph_core::{ErdosRenyiParams, ModelKind, ModelParams};
///
/// let params = ModelParams::ErdosRenyi(ErdosRenyiParams { n: 4, p: 1.0 });
/// assert_eq!(params.kind(), ModelKind::ErdosRenyi);
/// assert_eq!(params.node_count(), 4);
/// assert!(params.validate().is_ok());
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(tag = "model", rename_all = "kebab-case")
)]
pub enum ModelParams {
    /// Erdős–Rényi request.
    ErdosRenyi(ErdosRenyiParams),
    /// Barabási–Albert request.
    BarabasiAlbert(BarabasiAlbertParams),
    /// Watts–Strogatz request.
    WattsStrogatz(WattsStrogatzParams),
}

impl ModelParams {
    /// Returns the model this request targets.
    #[must_use]
    pub fn kind(&self) -> ModelKind {
        match self {
            Self::ErdosRenyi(_) => ModelKind::ErdosRenyi,
            Self::BarabasiAlbert(_) => ModelKind::BarabasiAlbert,
            Self::WattsStrogatz(_) => ModelKind::WattsStrogatz,
        }
    }

    /// Returns the number of nodes the request will produce.
    #[must_use]
    pub fn node_count(&self) -> usize {
        match self {
            Self::ErdosRenyi(params) => params.n,
            Self::BarabasiAlbert(params) => params.n,
            Self::WattsStrogatz(params) => params.n,
        }
    }

    /// Checks every model precondition.
    ///
    /// # Errors
    /// Returns [`RandGraphError::InvalidParameter`] naming the first parameter
    /// that violates its constraint.
    pub fn validate(&self) -> Result<()> {
        match self {
            Self::ErdosRenyi(params) => params.validate(),
            Self::BarabasiAlbert(params) => params.validate(),
            Self::WattsStrogatz(params) => params.validate(),
        }
    }
}

impl ErdosRenyiParams {
    /// Checks the node count and that `p` is a probability.
    ///
    /// # Errors
    /// Returns [`RandGraphError::InvalidParameter`] when `n` exceeds
    /// [`MAX_NODES`] or `p` is not finite or lies outside `[0, 1]`.
    pub fn validate(&self) -> Result<()> {
        check_node_count(self.n)?;
        check_probability("p", self.p)
    }
}

impl BarabasiAlbertParams {
    /// Checks `m <= m0 < n <= MAX_NODES`.
    ///
    /// # Errors
    /// Returns [`RandGraphError::InvalidParameter`] when `n` exceeds
    /// [`MAX_NODES`], the seed graph is not smaller than `n`, or `m` exceeds
    /// `m0`.
    pub fn validate(&self) -> Result<()> {
        check_node_count(self.n)?;
        if self.m0 >= self.n {
            return Err(RandGraphError::invalid(
                "m0",
                format!("m0 ({}) must be smaller than N ({})", self.m0, self.n),
            ));
        }
        if self.m > self.m0 {
            return Err(RandGraphError::invalid(
                "m",
                format!("m ({}) must not exceed m0 ({})", self.m, self.m0),
            ));
        }
        Ok(())
    }
}

impl WattsStrogatzParams {
    /// Checks the node count, that `k` is even and below `n`, and that `p` is
    /// a probability.
    ///
    /// # Errors
    /// Returns [`RandGraphError::InvalidParameter`] naming the offending
    /// parameter.
    pub fn validate(&self) -> Result<()> {
        check_node_count(self.n)?;
        if self.k % 2 != 0 {
            return Err(RandGraphError::invalid(
                "k",
                format!("k ({}) must be even", self.k),
            ));
        }
        if self.k >= self.n {
            return Err(RandGraphError::invalid(
                "k",
                format!("k ({}) must be smaller than N ({})", self.k, self.n),
            ));
        }
        check_probability("p_watts", self.p)
    }
}

fn check_node_count(n: usize) -> Result<()> {
    if n > MAX_NODES {
        return Err(RandGraphError::invalid(
            "N",
            format!("N ({n}) must not exceed {MAX_NODES}"),
        ));
    }
    Ok(())
}

fn check_probability(parameter: &'static str, p: f64) -> Result<()> {
    if p.is_finite() && (0.0..=1.0).contains(&p) {
        Ok(())
    } else {
        Err(RandGraphError::invalid(
            parameter,
            format!("{parameter} ({p}) must lie in [0, 1]"),
        ))
    }
}

/// Unvalidated form values as a front end collects them.
///
/// Counts are signed because user input may be negative; probabilities may
/// be out of range. [`RawParameters::resolve`] applies the front-end
/// normalisation rules before validating.
///
/// # Examples
/// ```
/// use randgraph_core::{ModelKind, ModelParams, RawParameters};
///
/// let raw = RawParameters { n: 10, k: 5, p_watts: 1.7, ..RawParameters::default() };
/// let params = raw.resolve(ModelKind::WattsStrogatz).expect("normalised values are valid");
/// match params {
///     ModelParams::WattsStrogatz(ws) => {
///         assert_eq!(ws.k, 4);
///         assert_eq!(ws.p, 1.0);
///     }
///     other => panic!("unexpected params {other:?}"),
/// }
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RawParameters {
    /// Requested node count.
    pub n: i64,
    /// Erdős–Rényi edge probability.
    pub p: f64,
    /// Barabási–Albert seed size.
    pub m0: i64,
    /// Barabási–Albert attachments per node.
    pub m: i64,
    /// Watts–Strogatz ring degree.
    pub k: i64,
    /// Watts–Strogatz shortcut probability.
    pub p_watts: f64,
}

impl Default for RawParameters {
    fn default() -> Self {
        Self {
            n: 50,
            p: 0.1,
            m0: 3,
            m: 2,
            k: 4,
            p_watts: 0.1,
        }
    }
}

impl RawParameters {
    /// Normalises the form values and builds validated parameters for `kind`.
    ///
    /// Probabilities are clamped into `[0, 1]` and `k` is rounded down to the
    /// nearest even number. Negative counts and inconsistent combinations are
    /// reported rather than corrected.
    ///
    /// # Errors
    /// Returns [`RandGraphError::InvalidParameter`] for negative counts, a NaN
    /// probability, or a violated model constraint.
    pub fn resolve(&self, kind: ModelKind) -> Result<ModelParams> {
        let n = non_negative("N", self.n)?;
        let params = match kind {
            ModelKind::ErdosRenyi => ModelParams::ErdosRenyi(ErdosRenyiParams {
                n,
                p: clamp_probability("p", self.p)?,
            }),
            ModelKind::BarabasiAlbert => ModelParams::BarabasiAlbert(BarabasiAlbertParams {
                n,
                m0: non_negative("m0", self.m0)?,
                m: non_negative("m", self.m)?,
            }),
            ModelKind::WattsStrogatz => {
                let k = non_negative("k", self.k)?;
                ModelParams::WattsStrogatz(WattsStrogatzParams {
                    n,
                    k: force_even(k),
                    p: clamp_probability("p_watts", self.p_watts)?,
                })
            }
        };
        params.validate()?;
        Ok(params)
    }
}

/// Clamps `p` into `[0, 1]`.
///
/// # Errors
/// Returns [`RandGraphError::InvalidParameter`] when `p` is NaN, which has no
/// meaningful clamp.
pub fn clamp_probability(parameter: &'static str, p: f64) -> Result<f64> {
    if p.is_nan() {
        return Err(RandGraphError::invalid(
            parameter,
            format!("{parameter} must be a number"),
        ));
    }
    Ok(p.clamp(0.0, 1.0))
}

/// Rounds `k` down to the nearest even number.
#[must_use]
pub const fn force_even(k: usize) -> usize {
    k - k % 2
}

fn non_negative(parameter: &'static str, value: i64) -> Result<usize> {
    usize::try_from(value).map_err(|_| {
        RandGraphError::invalid(parameter, format!("{parameter} ({value}) must not be negative"))
    })
}

#[cfg(test)]
mod tests;
