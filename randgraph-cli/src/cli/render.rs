//! Output renderers for [`Realisation`] values.

use std::io::{self, Write};

use randgraph_core::Realisation;
use serde_json::Value;

use super::CliError;

/// Renders `realisation` as a human-readable summary. Averages are printed
/// with two decimals and undefined statistics as `n/a`.
///
/// # Errors
/// Returns [`io::Error`] if writing to the supplied writer fails.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use std::io::Cursor;
/// # use randgraph_cli::cli::render_summary;
/// # use randgraph_core::{ErdosRenyiParams, GeneratorBuilder, ModelParams};
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let params = ModelParams::ErdosRenyi(ErdosRenyiParams { n: 1, p: 0.5 });
/// let realisation = GeneratorBuilder::new().with_seed(1).build().run(&params)?;
/// let mut buffer = Cursor::new(Vec::new());
/// render_summary(&realisation, false, &mut buffer)?;
/// let text = String::from_utf8(buffer.into_inner())?;
/// assert!(text.contains("average degree: n/a"));
/// # Ok(())
/// # }
/// ```
pub fn render_summary(
    realisation: &Realisation,
    edges: bool,
    mut writer: impl Write,
) -> io::Result<()> {
    let metrics = &realisation.metrics;
    writeln!(writer, "model: {}", realisation.params.kind())?;
    match realisation.seed {
        Some(seed) => writeln!(writer, "seed: {seed}")?,
        None => writeln!(writer, "seed: entropy")?,
    }
    writeln!(writer, "nodes: {}", metrics.node_count)?;
    writeln!(writer, "edges: {}", metrics.edge_count)?;
    writeln!(writer, "average degree: {}", two_decimals(metrics.avg_degree))?;
    writeln!(writer, "max degree: {}", metrics.max_degree)?;
    writeln!(writer, "density: {}", two_decimals(metrics.density))?;
    writeln!(
        writer,
        "average clustering: {:.2}",
        metrics.avg_clustering_coefficient
    )?;
    writeln!(
        writer,
        "average path length: {}",
        two_decimals(metrics.avg_path_length)
    )?;
    let histogram: Vec<String> = metrics
        .degree_histogram
        .iter()
        .enumerate()
        .filter(|&(_, &count)| count > 0)
        .map(|(degree, count)| format!("{degree}:{count}"))
        .collect();
    writeln!(writer, "degree histogram: {}", histogram.join(" "))?;
    if edges {
        for edge in realisation.graph.edges() {
            writeln!(writer, "{}\t{}", edge.source(), edge.target())?;
        }
    }
    Ok(())
}

/// Renders `realisation` as a pretty-printed JSON document. The edge list is
/// omitted unless `edges` is set.
///
/// # Errors
/// Returns [`CliError::Json`] if serialisation fails and [`CliError::Io`] if
/// writing fails.
pub fn render_json(
    realisation: &Realisation,
    edges: bool,
    mut writer: impl Write,
) -> Result<(), CliError> {
    let mut value = serde_json::to_value(realisation)?;
    if !edges && let Some(graph) = value.get_mut("graph").and_then(Value::as_object_mut) {
        graph.remove("edges");
    }
    serde_json::to_writer_pretty(&mut writer, &value)?;
    writeln!(writer)?;
    Ok(())
}

fn two_decimals(value: Option<f64>) -> String {
    value.map_or_else(|| "n/a".to_owned(), |value| format!("{value:.2}"))
}
