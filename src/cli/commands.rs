//! Command implementations for the PeopleLens CLI.

use std::io::{self, BufRead, Write};

use serde::Serialize;

use crate::cli::args::{AskArgs, ChatArgs, Command, OutputFormat, PeopleLensArgs, StatsArgs};
use crate::cli::output::{output_reply, output_result, print_json, DatasetStats};
use crate::dataset::loader::load_dataset;
use crate::engine::AnalyticsEngine;
use crate::error::Result;
use crate::intent::Intent;

/// Execute a CLI command.
pub fn execute_command(args: PeopleLensArgs) -> Result<()> {
    match &args.command {
        Command::Ask(ask_args) => ask(ask_args.clone(), &args),
        Command::Chat(chat_args) => chat(chat_args.clone(), &args),
        Command::Metrics => list_metrics(&args),
        Command::Stats(stats_args) => show_stats(stats_args.clone(), &args),
    }
}

/// Answer a single question and print the reply.
fn ask(args: AskArgs, cli_args: &PeopleLensArgs) -> Result<()> {
    let dataset = load_dataset(&args.data_file)?;
    let engine = AnalyticsEngine::new(dataset);

    let query = args.query.join(" ");
    let reply = engine.process(&query)?;
    output_reply(&reply, cli_args)
}

/// Run an interactive question loop over stdin.
///
/// The session keeps no transcript; every line is an independent query
/// against the same loaded dataset.
fn chat(args: ChatArgs, cli_args: &PeopleLensArgs) -> Result<()> {
    let dataset = load_dataset(&args.data_file)?;
    let engine = AnalyticsEngine::new(dataset);

    if cli_args.verbosity() > 0 {
        println!(
            "Loaded {} records. Ask about headcount, attrition, salary, engagement or diversity.",
            engine.dataset().len()
        );
        println!("Type `exit` to leave.");
    }

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        print!("> ");
        io::stdout().flush()?;

        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;
        let query = line.trim();

        if query.is_empty() {
            continue;
        }
        if query.eq_ignore_ascii_case("exit") || query.eq_ignore_ascii_case("quit") {
            break;
        }

        let reply = engine.process(query)?;
        output_reply(&reply, cli_args)?;
        println!();
    }

    Ok(())
}

/// One entry of the metric catalogue.
#[derive(Debug, Serialize)]
pub struct MetricInfo {
    pub name: &'static str,
    pub description: &'static str,
}

/// List the recognized metrics.
fn list_metrics(cli_args: &PeopleLensArgs) -> Result<()> {
    let catalogue: Vec<MetricInfo> = Intent::ALL
        .iter()
        .map(|intent| MetricInfo {
            name: intent.as_str(),
            description: intent.description(),
        })
        .collect();

    match cli_args.output_format {
        OutputFormat::Json => print_json(&catalogue, cli_args),
        OutputFormat::Human => {
            for metric in catalogue {
                println!("{:<22} {}", metric.name, metric.description);
            }
            Ok(())
        }
    }
}

/// Show a summary of the dataset.
fn show_stats(args: StatsArgs, cli_args: &PeopleLensArgs) -> Result<()> {
    let dataset = load_dataset(&args.data_file)?;
    let range = dataset.hire_year_range();

    let stats = DatasetStats {
        records: dataset.len(),
        active: dataset.active_count(),
        departments: dataset.departments(),
        earliest_hire_year: range.map(|(first, _)| first),
        latest_hire_year: range.map(|(_, last)| last),
    };

    output_result("Dataset summary", &stats, cli_args)
}
