// crates/itihasa-cli/src/main.rs
// ============================================================================
// Module: Itihasa CLI Entry Point
// Description: Thin command surface: load the graph, plan, execute,
//              resolve, and print the structured Answer.
// Purpose: The only crate with an entry point; everything else in the
//          workspace is a pure library.
// Dependencies: clap, itihasa-core, itihasa-executor, itihasa-graph,
//               itihasa-planner, itihasa-resolver, serde_json
// ============================================================================

//! ## Overview
//! Exit codes follow the specification's CLI surface exactly: `0` on
//! success, `2` on a graph load error, `1` on any other unexpected
//! internal failure. There is no interactive mode: one question, one
//! answer, one process.

mod config;

use std::io::Write as _;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use config::OutputFormat;
use itihasa_graph::GraphPaths;
use itihasa_graph::GraphStore;
use itihasa_resolver::Answer;

/// Answers a structured natural-language question against a precomputed
/// narrative knowledge graph.
#[derive(Debug, Parser)]
#[command(name = "itihasa", version, about)]
struct Cli {
    /// The question to answer, e.g. "Who killed Karna?".
    question: String,

    /// Directory containing `entities.ron`, `events.ron`, `edges.ron`.
    /// Overrides `itihasa.toml`'s `graph_dir` when given.
    #[arg(long)]
    graph_dir: Option<PathBuf>,

    /// Output format. Overrides `itihasa.toml`'s `format` when given.
    #[arg(long, value_enum)]
    format: Option<OutputFormat>,

    /// Also print the full decision trace to stderr.
    #[arg(long)]
    trace: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    run(&cli)
}

fn run(cli: &Cli) -> ExitCode {
    let current_dir = match std::env::current_dir() {
        Ok(dir) => dir,
        Err(err) => return fail_internal(&format!("cannot resolve current directory: {err}")),
    };

    let file_config = match config::load(&current_dir) {
        Ok(config) => config.unwrap_or_default(),
        Err(err) => return fail_internal(&format!("config error: {err}")),
    };

    let graph_dir = cli
        .graph_dir
        .clone()
        .or(file_config.graph_dir)
        .unwrap_or_else(|| current_dir.join("data"));
    let format = cli.format.unwrap_or(file_config.format.unwrap_or_default());

    let paths = GraphPaths::under_directory(&graph_dir);
    let graph = match GraphStore::load(&paths) {
        Ok(graph) => graph,
        Err(err) => {
            let mut stderr = std::io::stderr();
            let _ = writeln!(stderr, "itihasa: failed to load graph from {}: {err}", graph_dir.display());
            return ExitCode::from(2);
        }
    };

    let plan = itihasa_planner::plan(&cli.question, graph.registry());
    let result = itihasa_executor::execute(&plan, &graph);
    let answer = itihasa_resolver::resolve(&plan, &result);

    if cli.trace {
        let mut stderr = std::io::stderr();
        for line in answer.trace.lines() {
            let _ = writeln!(stderr, "{line}");
        }
    }

    print_answer(&answer, format)
}

fn print_answer(answer: &Answer, format: OutputFormat) -> ExitCode {
    let mut stdout = std::io::stdout();
    match format {
        OutputFormat::Json => match serde_json::to_string_pretty(answer) {
            Ok(text) => {
                let _ = writeln!(stdout, "{text}");
            }
            Err(err) => return fail_internal(&format!("failed to serialize answer: {err}")),
        },
        OutputFormat::Text => {
            let _ = writeln!(stdout, "{}", render_text(answer));
        }
    }
    ExitCode::SUCCESS
}

/// Renders an [`Answer`] as a short, human-readable summary line per
/// variant, never via `{:?}` (the workspace lints deny `use_debug`
/// outside test code).
fn render_text(answer: &Answer) -> String {
    use itihasa_core::Confidence;
    use itihasa_resolver::AnswerPayload;

    let confidence = match answer.confidence {
        Confidence::High => "high",
        Confidence::Medium => "medium",
        Confidence::Low => "low",
    };

    let body = match &answer.payload {
        AnswerPayload::Entity { entities } => {
            let names: Vec<String> =
                entities.iter().map(|entity| format!("{} ({})", entity.name, entity.frequency)).collect();
            format!("entities: {}", names.join(", "))
        }
        AnswerPayload::Chain { chain } => {
            let nodes: Vec<String> = chain
                .iter()
                .map(|node| match node {
                    itihasa_resolver::ChainNode::Entity { name, .. } => name.clone(),
                    itihasa_resolver::ChainNode::Event { id, event_type } => {
                        format!("{id}[{}]", event_type_label(*event_type))
                    }
                })
                .collect();
            format!("chain: {}", nodes.join(" -> "))
        }
        AnswerPayload::EventList { events } => {
            let ids: Vec<String> = events.iter().map(|event| event.id.to_string()).collect();
            format!("events: {}", ids.join(", "))
        }
        AnswerPayload::NoAnswer => "no answer".to_string(),
    };

    format!("{body} (confidence: {confidence})")
}

/// Lowercase label for an event type, for text-format rendering only.
fn event_type_label(event_type: itihasa_core::EventType) -> &'static str {
    match event_type {
        itihasa_core::EventType::Kill => "kill",
        itihasa_core::EventType::Death => "death",
        itihasa_core::EventType::Battle => "battle",
        itihasa_core::EventType::Command => "command",
        itihasa_core::EventType::Boon => "boon",
        itihasa_core::EventType::Vow => "vow",
        itihasa_core::EventType::Curse => "curse",
        itihasa_core::EventType::Coronation => "coronation",
        itihasa_core::EventType::EngagedInBattle => "engaged_in_battle",
        itihasa_core::EventType::Defeated => "defeated",
        itihasa_core::EventType::Protected => "protected",
        itihasa_core::EventType::Pursued => "pursued",
        itihasa_core::EventType::Rescued => "rescued",
        itihasa_core::EventType::AppointedAs => "appointed_as",
        itihasa_core::EventType::Abandoned => "abandoned",
        itihasa_core::EventType::Attacked => "attacked",
        itihasa_core::EventType::Defended => "defended",
        itihasa_core::EventType::Retreated => "retreated",
        itihasa_core::EventType::Surrounded => "surrounded",
        itihasa_core::EventType::Supported => "supported",
    }
}

fn fail_internal(message: &str) -> ExitCode {
    let mut stderr = std::io::stderr();
    let _ = writeln!(stderr, "itihasa: {message}");
    ExitCode::from(1)
}
