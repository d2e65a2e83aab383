//! Unit tests for argument parsing, rendering and command execution.

use super::{
    Cli, CliError, Command, ExploreCommand, ExploreSummary, GenerateCommand, OutputFormat,
    render_summary, run_cli, run_explore, run_generate,
};

use std::io::{Cursor, empty};

use clap::Parser;
use randgraph_core::{ModelKind, RandGraphError};
use randgraph_test_support::tracing::record;
use rstest::rstest;
use serde_json::Value;

type TestResult = Result<(), Box<dyn std::error::Error>>;

fn parse_generate(args: &[&str]) -> GenerateCommand {
    let argv = ["randgraph", "generate"].into_iter().chain(args.iter().copied());
    match Cli::try_parse_from(argv).expect("arguments must parse").command {
        Command::Generate(command) => command,
        other => panic!("unexpected command {other:?}"),
    }
}

fn run_to_string(cli: Cli, input: &str) -> Result<String, Box<dyn std::error::Error>> {
    let mut output = Cursor::new(Vec::new());
    run_cli(cli, Cursor::new(input.as_bytes()), &mut output)?;
    Ok(String::from_utf8(output.into_inner())?)
}

#[rstest]
fn generate_defaults_match_form_defaults() {
    let command = parse_generate(&["erdos-renyi"]);
    assert_eq!(command.model, ModelKind::ErdosRenyi);
    assert_eq!(command.raw_parameters(), randgraph_core::RawParameters::default());
    assert_eq!(command.seed, None);
    assert_eq!(command.format, OutputFormat::Human);
    assert!(!command.edges);
}

#[rstest]
#[case::kebab("barabasi-albert", ModelKind::BarabasiAlbert)]
#[case::snake("watts_strogatz", ModelKind::WattsStrogatz)]
#[case::upper("ERDOS-RENYI", ModelKind::ErdosRenyi)]
fn generate_accepts_model_spellings(#[case] raw: &str, #[case] expected: ModelKind) {
    assert_eq!(parse_generate(&[raw]).model, expected);
}

#[rstest]
fn generate_rejects_unknown_model() {
    let err = Cli::try_parse_from(["randgraph", "generate", "small-world"])
        .expect_err("unknown model must be rejected");
    assert!(err.to_string().contains("unknown model"));
}

#[rstest]
fn generate_parses_every_option() {
    let command = parse_generate(&[
        "watts-strogatz",
        "--nodes",
        "-3",
        "--p",
        "0.5",
        "--m0",
        "4",
        "--m",
        "1",
        "--k",
        "5",
        "--p-watts",
        "1.5",
        "--seed",
        "9",
        "--format",
        "json",
        "--edges",
    ]);
    let raw = command.raw_parameters();
    assert_eq!((raw.n, raw.m0, raw.m, raw.k), (-3, 4, 1, 5));
    assert_eq!((raw.p, raw.p_watts), (0.5, 1.5));
    assert_eq!(command.seed, Some(9));
    assert_eq!(command.format, OutputFormat::Json);
    assert!(command.edges);
}

#[rstest]
fn run_generate_reports_negative_node_count() {
    let command = parse_generate(&["erdos-renyi", "--nodes", "-3"]);
    let err = run_generate(&command).expect_err("negative N must be rejected");
    assert!(matches!(
        err,
        CliError::Core(RandGraphError::InvalidParameter { parameter: "N", .. })
    ));
    assert_eq!(err.core_code(), Some("RANDGRAPH_INVALID_PARAMETER"));
}

#[rstest]
fn run_generate_normalises_watts_strogatz_options() {
    let command = parse_generate(&[
        "watts-strogatz",
        "--nodes",
        "10",
        "--k",
        "5",
        "--p-watts",
        "-1",
        "--seed",
        "2",
    ]);
    let realisation = run_generate(&command).expect("normalised options are valid");
    // k = 5 rounds down to 4 and p_watts clamps to 0, leaving the bare ring.
    assert_eq!(realisation.graph.edge_count(), 20);
    assert!(realisation.metrics.degrees.iter().all(|&degree| degree == 4));
}

#[rstest]
fn human_summary_matches_complete_graph() -> TestResult {
    let cli = Cli::try_parse_from([
        "randgraph",
        "generate",
        "erdos-renyi",
        "--nodes",
        "4",
        "--p",
        "1",
        "--seed",
        "1",
        "--edges",
    ])?;
    let text = run_to_string(cli, "")?;
    let expected = "\
model: erdos-renyi
seed: 1
nodes: 4
edges: 6
average degree: 3.00
max degree: 3
density: 1.00
average clustering: 1.00
average path length: 9.00
degree histogram: 3:4
0\t1
0\t2
0\t3
1\t2
1\t3
2\t3
";
    assert_eq!(text, expected);
    Ok(())
}

#[rstest]
fn human_summary_marks_undefined_ratios() -> TestResult {
    let command = parse_generate(&["erdos-renyi", "--nodes", "0"]);
    let realisation = run_generate(&command)?;
    let mut buffer = Cursor::new(Vec::new());
    render_summary(&realisation, false, &mut buffer)?;
    let text = String::from_utf8(buffer.into_inner())?;
    assert!(text.contains("seed: entropy"));
    assert!(text.contains("average degree: n/a"));
    assert!(text.contains("density: n/a"));
    assert!(text.contains("average clustering: 0.00"));
    assert!(text.contains("average path length: n/a"));
    Ok(())
}

#[rstest]
#[case::with_edges(true, Some(3))]
#[case::without_edges(false, None)]
fn json_output_honours_edges_flag(
    #[case] edges: bool,
    #[case] expected_edges: Option<usize>,
) -> TestResult {
    let mut args = vec![
        "randgraph",
        "generate",
        "erdos-renyi",
        "--nodes",
        "3",
        "--p",
        "1",
        "--seed",
        "4",
        "--format",
        "json",
    ];
    if edges {
        args.push("--edges");
    }
    let text = run_to_string(Cli::try_parse_from(args)?, "")?;
    let value: Value = serde_json::from_str(&text)?;
    assert_eq!(value["params"]["model"], "erdos-renyi");
    assert_eq!(value["seed"], 4);
    assert_eq!(value["metrics"]["edge_count"], 3);
    assert_eq!(
        value["graph"].get("edges").and_then(Value::as_array).map(Vec::len),
        expected_edges
    );
    Ok(())
}

#[rstest]
fn explore_keeps_previous_graph_after_rejections() -> TestResult {
    let input = "\
# switch model
barabasi-albert n=10 m0=3 m=2

barabasi-albert n=2
n=ten
";
    let mut output = Cursor::new(Vec::new());
    let summary = run_explore(
        &ExploreCommand {
            seed: Some(8),
            edges: false,
        },
        Cursor::new(input.as_bytes()),
        &mut output,
    )?;
    assert_eq!(
        summary,
        ExploreSummary {
            accepted: 2,
            rejected: 2
        }
    );
    let text = String::from_utf8(output.into_inner())?;
    assert_eq!(text.matches("model: ").count(), 2);
    assert!(text.contains("model: erdos-renyi"));
    assert!(text.contains("model: barabasi-albert"));
    assert!(text.contains("error: invalid parameter `m0`"));
    assert!(text.contains("error: parameter `n` expects an integer, found `ten`"));
    Ok(())
}

#[rstest]
fn explore_with_empty_input_prints_initial_graph() -> TestResult {
    let cli = Cli::try_parse_from(["randgraph", "explore", "--seed", "3"])?;
    let text = run_to_string(cli, "")?;
    assert!(text.starts_with("model: erdos-renyi\nseed: 3\nnodes: 50\n"));
    Ok(())
}

#[rstest]
fn run_cli_records_command_spans() {
    let cli = Cli::try_parse_from([
        "randgraph",
        "generate",
        "barabasi-albert",
        "--nodes",
        "12",
        "--seed",
        "3",
    ])
    .expect("arguments must parse");
    let (result, layer) = record(|| run_cli(cli, empty(), Cursor::new(Vec::new())));
    result.expect("command must succeed");

    let run = layer.span("cli.run").expect("cli.run span recorded");
    assert_eq!(run.fields.get("command"), Some(&"generate".to_owned()));

    let generate = layer.span("cli.generate").expect("cli.generate span recorded");
    assert_eq!(generate.fields.get("model"), Some(&"barabasi-albert".to_owned()));
    assert_eq!(generate.fields.get("seed"), Some(&"3".to_owned()));

    assert!(layer.span("core.run").is_some());
    assert_eq!(layer.events_with_message("command completed").len(), 1);
}

#[rstest]
fn explore_span_records_request_counts() {
    let (result, layer) = record(|| {
        run_explore(
            &ExploreCommand::default(),
            Cursor::new("watts-strogatz n=6 k=8\n".as_bytes()),
            Cursor::new(Vec::new()),
        )
    });
    result.expect("explore must succeed");
    let explore = layer.span("cli.explore").expect("cli.explore span recorded");
    assert_eq!(explore.fields.get("accepted"), Some(&"1".to_owned()));
    assert_eq!(explore.fields.get("rejected"), Some(&"1".to_owned()));
    assert!(!layer.events_with_message("request rejected; keeping previous graph").is_empty());
}

#[rstest]
fn run_generate_rejects_node_count_above_ceiling() {
    let command = parse_generate(&["barabasi-albert", "--nodes", "9223372036854775807"]);
    let err = run_generate(&command).expect_err("oversized N must be rejected");
    assert!(matches!(
        err,
        CliError::Core(RandGraphError::InvalidParameter { parameter: "N", .. })
    ));
}

#[rstest]
fn explore_survives_oversized_request() -> TestResult {
    let input = "\
barabasi-albert n=9223372036854775807
n=20
";
    let mut output = Cursor::new(Vec::new());
    let summary = run_explore(
        &ExploreCommand {
            seed: Some(1),
            edges: false,
        },
        Cursor::new(input.as_bytes()),
        &mut output,
    )?;
    assert_eq!(
        summary,
        ExploreSummary {
            accepted: 2,
            rejected: 1
        }
    );
    let text = String::from_utf8(output.into_inner())?;
    assert!(text.contains("error: invalid parameter `N`"));
    assert!(text.contains("model: barabasi-albert\nseed: 1\nnodes: 20\n"));
    Ok(())
}
