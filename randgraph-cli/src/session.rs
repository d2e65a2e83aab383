//! Interactive exploration state.
//!
//! A [`Session`] owns the current form values, the selected model and the
//! last successful [`Realisation`]. Each request updates the form and
//! regenerates from scratch; a rejected request leaves the previous graph in
//! place.

use randgraph_core::{Generator, ModelKind, RandGraphError, RawParameters, Realisation};
use thiserror::Error;
use tracing::{debug, warn};

/// Errors raised while parsing an exploration request line.
#[derive(Debug, Error, PartialEq)]
pub enum RequestError {
    /// A token was neither a model name nor a `key=value` pair.
    #[error("expected `key=value`, found `{token}`")]
    MalformedAssignment {
        /// The offending token.
        token: String,
    },
    /// The key does not name a form field.
    #[error("unknown parameter `{key}`; expected one of n, p, m0, m, k, p_watts")]
    UnknownKey {
        /// The unrecognised key.
        key: String,
    },
    /// The value could not be parsed for its field.
    #[error("parameter `{key}` expects {expected}, found `{value}`")]
    InvalidValue {
        /// Field being assigned.
        key: &'static str,
        /// Description of the accepted values.
        expected: &'static str,
        /// Raw value supplied.
        value: String,
    },
    /// The first token named an unknown model.
    #[error(transparent)]
    Model(#[from] RandGraphError),
}

/// One assignment to a form field.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum FieldUpdate {
    /// Node count.
    Nodes(i64),
    /// Erdős–Rényi probability.
    P(f64),
    /// Barabási–Albert seed size.
    M0(i64),
    /// Barabási–Albert attachments per node.
    M(i64),
    /// Watts–Strogatz ring degree.
    K(i64),
    /// Watts–Strogatz shortcut probability.
    PWatts(f64),
}

impl FieldUpdate {
    fn parse(token: &str) -> Result<Self, RequestError> {
        let Some((key, value)) = token.split_once('=') else {
            return Err(RequestError::MalformedAssignment {
                token: token.to_owned(),
            });
        };
        let value = value.trim();
        match key.trim().to_ascii_lowercase().as_str() {
            "n" => parse_count("n", value).map(Self::Nodes),
            "p" => parse_probability("p", value).map(Self::P),
            "m0" => parse_count("m0", value).map(Self::M0),
            "m" => parse_count("m", value).map(Self::M),
            "k" => parse_count("k", value).map(Self::K),
            "p_watts" => parse_probability("p_watts", value).map(Self::PWatts),
            _ => Err(RequestError::UnknownKey {
                key: key.to_owned(),
            }),
        }
    }

    fn apply(self, form: &mut RawParameters) {
        match self {
            Self::Nodes(value) => form.n = value,
            Self::P(value) => form.p = value,
            Self::M0(value) => form.m0 = value,
            Self::M(value) => form.m = value,
            Self::K(value) => form.k = value,
            Self::PWatts(value) => form.p_watts = value,
        }
    }
}

fn parse_count(key: &'static str, value: &str) -> Result<i64, RequestError> {
    value.parse().map_err(|_| RequestError::InvalidValue {
        key,
        expected: "an integer",
        value: value.to_owned(),
    })
}

fn parse_probability(key: &'static str, value: &str) -> Result<f64, RequestError> {
    value.parse().map_err(|_| RequestError::InvalidValue {
        key,
        expected: "a number",
        value: value.to_owned(),
    })
}

/// A parsed exploration request: an optional model switch followed by field
/// assignments.
///
/// # Examples
/// ```
/// use randgraph_cli::session::{FieldUpdate, Request};
/// use randgraph_core::ModelKind;
///
/// let request: Request = "watts-strogatz n=20 k=4".parse()?;
/// assert_eq!(request.model, Some(ModelKind::WattsStrogatz));
/// assert_eq!(request.updates, vec![FieldUpdate::Nodes(20), FieldUpdate::K(4)]);
/// # Ok::<(), randgraph_cli::session::RequestError>(())
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Request {
    /// Model to switch to; `None` keeps the current model.
    pub model: Option<ModelKind>,
    /// Assignments applied in order.
    pub updates: Vec<FieldUpdate>,
}

impl std::str::FromStr for Request {
    type Err = RequestError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut tokens = line.split_whitespace().peekable();
        let model = match tokens.peek() {
            Some(first) if !first.contains('=') => Some(first.parse::<ModelKind>()?),
            _ => None,
        };
        if model.is_some() {
            tokens.next();
        }
        let updates = tokens.map(FieldUpdate::parse).collect::<Result<_, _>>()?;
        Ok(Self { model, updates })
    }
}

/// Current exploration state.
#[derive(Debug)]
pub struct Session {
    generator: Generator,
    model: ModelKind,
    form: RawParameters,
    current: Option<Realisation>,
}

impl Session {
    /// Creates a session with default form values and the Erdős–Rényi model
    /// selected. Nothing is generated until [`Session::regenerate`] or
    /// [`Session::apply`] runs.
    #[must_use]
    pub fn new(generator: Generator) -> Self {
        Self {
            generator,
            model: ModelKind::ErdosRenyi,
            form: RawParameters::default(),
            current: None,
        }
    }

    /// Returns the selected model.
    #[must_use]
    pub fn model(&self) -> ModelKind {
        self.model
    }

    /// Returns the form values as last entered, including rejected ones.
    #[must_use]
    pub fn form(&self) -> &RawParameters {
        &self.form
    }

    /// Returns the last successful realisation.
    #[must_use]
    pub fn current(&self) -> Option<&Realisation> {
        self.current.as_ref()
    }

    /// Regenerates the graph from the current model and form values.
    ///
    /// # Errors
    /// Returns [`RandGraphError`] when the form values do not resolve to valid
    /// parameters. The previous realisation is kept.
    pub fn regenerate(&mut self) -> Result<&Realisation, RandGraphError> {
        let outcome = self
            .form
            .resolve(self.model)
            .and_then(|params| self.generator.run(&params));
        match outcome {
            Ok(realisation) => {
                debug!(model = %self.model, edges = realisation.graph.edge_count(), "session updated");
                let current: &Realisation = self.current.insert(realisation);
                Ok(current)
            }
            Err(err) => {
                warn!(
                    model = %self.model,
                    code = err.code().as_str(),
                    error = %err,
                    "request rejected; keeping previous graph"
                );
                Err(err)
            }
        }
    }

    /// Applies `request` to the form and regenerates.
    ///
    /// # Errors
    /// Returns [`RandGraphError`] when the updated form is invalid. The form
    /// keeps the new values; the graph does not change.
    pub fn apply(&mut self, request: &Request) -> Result<&Realisation, RandGraphError> {
        if let Some(model) = request.model {
            self.model = model;
        }
        for update in &request.updates {
            update.apply(&mut self.form);
        }
        self.regenerate()
    }
}
