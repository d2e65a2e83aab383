use std::io::{self, BufRead, Write};
use std::str::FromStr;

use clap::{Args, Parser, Subcommand, ValueEnum};
use randgraph_core::{GeneratorBuilder, ModelKind, RandGraphError, RawParameters, Realisation};
use thiserror::Error;
use tracing::{Span, field, info, instrument};

use super::render::{render_json, render_summary};
use crate::session::{Request, RequestError, Session};

/// Top-level CLI options parsed by [`clap`].
#[derive(Debug, Parser, Clone)]
#[command(
    name = "randgraph",
    about = "Generate random graphs and report their statistics."
)]
pub struct Cli {
    /// Command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported CLI commands.
#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Generate one graph and print its statistics.
    Generate(GenerateCommand),
    /// Read requests from stdin and regenerate after each one.
    Explore(ExploreCommand),
}

/// Options accepted by the `generate` command.
#[derive(Debug, Args, Clone)]
pub struct GenerateCommand {
    /// Model to sample from.
    #[arg(value_parser = parse_model)]
    pub model: ModelKind,

    /// Number of nodes.
    #[arg(long = "nodes", short = 'n', default_value_t = RawParameters::default().n, allow_negative_numbers = true)]
    pub nodes: i64,

    /// Erdős–Rényi edge probability; clamped into [0, 1].
    #[arg(long, default_value_t = RawParameters::default().p, allow_negative_numbers = true)]
    pub p: f64,

    /// Barabási–Albert seed graph size.
    #[arg(long, default_value_t = RawParameters::default().m0, allow_negative_numbers = true)]
    pub m0: i64,

    /// Barabási–Albert attachments per new node.
    #[arg(long, default_value_t = RawParameters::default().m, allow_negative_numbers = true)]
    pub m: i64,

    /// Watts–Strogatz ring degree; rounded down to an even number.
    #[arg(long, default_value_t = RawParameters::default().k, allow_negative_numbers = true)]
    pub k: i64,

    /// Watts–Strogatz shortcut probability; clamped into [0, 1].
    #[arg(long = "p-watts", default_value_t = RawParameters::default().p_watts, allow_negative_numbers = true)]
    pub p_watts: f64,

    /// Seed for reproducible output; omitted means entropy.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,

    /// Include the edge list in the output.
    #[arg(long)]
    pub edges: bool,
}

impl GenerateCommand {
    /// Collects the numeric options into unvalidated form values.
    #[must_use]
    pub fn raw_parameters(&self) -> RawParameters {
        RawParameters {
            n: self.nodes,
            p: self.p,
            m0: self.m0,
            m: self.m,
            k: self.k,
            p_watts: self.p_watts,
        }
    }
}

/// Options accepted by the `explore` command.
#[derive(Debug, Args, Clone, Default)]
pub struct ExploreCommand {
    /// Seed applied to every regeneration; omitted means entropy.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Include the edge list after each regeneration.
    #[arg(long)]
    pub edges: bool,
}

/// Rendering formats for generated graphs.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable summary.
    #[default]
    Human,
    /// JSON document.
    Json,
}

fn parse_model(raw: &str) -> Result<ModelKind, RandGraphError> {
    ModelKind::from_str(raw)
}

/// Errors surfaced while executing CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// Generation failed.
    #[error(transparent)]
    Core(#[from] RandGraphError),
    /// An exploration request could not be parsed.
    #[error(transparent)]
    Request(#[from] RequestError),
    /// Serialising the output failed.
    #[error("failed to encode JSON output: {0}")]
    Json(#[from] serde_json::Error),
    /// Reading input or writing output failed.
    #[error("I/O failure: {0}")]
    Io(#[from] io::Error),
}

impl CliError {
    /// Returns the stable core error code, when the failure came from the
    /// core library.
    #[must_use]
    pub fn core_code(&self) -> Option<&'static str> {
        match self {
            Self::Core(err) | Self::Request(RequestError::Model(err)) => Some(err.code().as_str()),
            _ => None,
        }
    }
}

/// Outcome of the `explore` command.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct ExploreSummary {
    /// Requests that produced a new graph.
    pub accepted: usize,
    /// Requests that were rejected.
    pub rejected: usize,
}

/// Executes the CLI command represented by `cli`, reading requests from
/// `input` and writing rendered graphs to `output`.
///
/// # Errors
/// Returns [`CliError`] when a `generate` request is invalid or when I/O
/// fails. Rejected `explore` requests are reported on `output` instead.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use std::io::{Cursor, empty};
/// # use clap::Parser;
/// # use randgraph_cli::cli::{Cli, run_cli};
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let cli = Cli::try_parse_from(["randgraph", "generate", "erdos-renyi", "--nodes", "4", "--p", "1"])?;
/// let mut output = Cursor::new(Vec::new());
/// run_cli(cli, empty(), &mut output)?;
/// let text = String::from_utf8(output.into_inner())?;
/// assert!(text.contains("edges: 6"));
/// assert!(text.contains("average degree: 3.00"));
/// # Ok(())
/// # }
/// ```
#[instrument(
    name = "cli.run",
    err,
    skip_all,
    fields(command = field::Empty),
)]
pub fn run_cli(cli: Cli, input: impl BufRead, mut output: impl Write) -> Result<(), CliError> {
    let span = Span::current();
    match cli.command {
        Command::Generate(command) => {
            span.record("command", field::display("generate"));
            let realisation = run_generate(&command)?;
            match command.format {
                OutputFormat::Human => render_summary(&realisation, command.edges, &mut output)?,
                OutputFormat::Json => render_json(&realisation, command.edges, &mut output)?,
            }
        }
        Command::Explore(command) => {
            span.record("command", field::display("explore"));
            run_explore(&command, input, &mut output)?;
        }
    }
    output.flush()?;
    Ok(())
}

/// Resolves the options of a `generate` command and runs the generator.
///
/// # Errors
/// Returns [`CliError::Core`] when the options violate the model's
/// constraints.
#[instrument(
    name = "cli.generate",
    err,
    skip(command),
    fields(model = %command.model, seed = field::Empty),
)]
pub fn run_generate(command: &GenerateCommand) -> Result<Realisation, CliError> {
    if let Some(seed) = command.seed {
        Span::current().record("seed", seed);
    }
    let params = command.raw_parameters().resolve(command.model)?;
    let realisation = GeneratorBuilder::new()
        .with_optional_seed(command.seed)
        .build()
        .run(&params)?;
    info!(edges = realisation.metrics.edge_count, "command completed");
    Ok(realisation)
}

/// Runs an exploration session over `input`, one request per line.
///
/// The session starts from the default form values with the Erdős–Rényi
/// model selected and prints that graph first. Blank lines and lines starting
/// with `#` are skipped. A rejected request prints `error: ...` and keeps the
/// previous graph.
///
/// # Errors
/// Returns [`CliError::Io`] when reading or writing fails.
#[instrument(
    name = "cli.explore",
    err,
    skip(command, input, output),
    fields(accepted = field::Empty, rejected = field::Empty),
)]
pub fn run_explore(
    command: &ExploreCommand,
    input: impl BufRead,
    mut output: impl Write,
) -> Result<ExploreSummary, CliError> {
    let mut session = Session::new(
        GeneratorBuilder::new()
            .with_optional_seed(command.seed)
            .build(),
    );
    let mut summary = ExploreSummary::default();

    let initial = session.regenerate();
    report(initial, command.edges, &mut summary, &mut output)?;

    for line in input.lines() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        let outcome = match trimmed.parse::<Request>() {
            Ok(request) => session.apply(&request).map_err(CliError::from),
            Err(err) => Err(CliError::from(err)),
        };
        report(outcome, command.edges, &mut summary, &mut output)?;
    }

    let span = Span::current();
    span.record("accepted", summary.accepted);
    span.record("rejected", summary.rejected);
    Ok(summary)
}

fn report<E: Into<CliError>>(
    outcome: Result<&Realisation, E>,
    edges: bool,
    summary: &mut ExploreSummary,
    output: &mut impl Write,
) -> Result<(), CliError> {
    match outcome {
        Ok(realisation) => {
            summary.accepted += 1;
            render_summary(realisation, edges, &mut *output)?;
        }
        Err(err) => {
            summary.rejected += 1;
            let err: CliError = err.into();
            writeln!(output, "error: {err}")?;
        }
    }
    writeln!(output)?;
    Ok(())
}
