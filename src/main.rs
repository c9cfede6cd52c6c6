mod chart;
mod error;
mod logging;
mod model;
mod report;

use std::path::PathBuf;

use clap::Parser;

use crate::chart::{ChartSpec, DEFAULT_OUTPUT, render_review_chart};
use crate::error::ChartError;
use crate::model::dataset::{LengthPolicy, ScoreDataset};
use crate::report::build_summary;
use crate::report::json::write_summary_json;
use crate::report::text::render_summary_text;

/// Render the review evaluation scores as a box-plot PNG.
#[derive(Debug, Parser)]
#[command(name = "review-boxplot", version, about)]
struct Cli {
    /// Output PNG path
    #[arg(long, default_value = DEFAULT_OUTPUT)]
    out: PathBuf,
    /// Fail when the score groups do not all have the same length
    #[arg(long)]
    strict_lengths: bool,
    /// Also write a JSON summary of the box statistics to this path
    #[arg(long)]
    summary: Option<PathBuf>,
    /// Print the box statistics table to stdout
    #[arg(long)]
    print_summary: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct RunConfig {
    out_path: PathBuf,
    length_policy: LengthPolicy,
    summary_path: Option<PathBuf>,
    print_summary: bool,
}

impl From<Cli> for RunConfig {
    fn from(cli: Cli) -> Self {
        Self {
            out_path: cli.out,
            length_policy: if cli.strict_lengths {
                LengthPolicy::Strict
            } else {
                LengthPolicy::Independent
            },
            summary_path: cli.summary,
            print_summary: cli.print_summary,
        }
    }
}

fn main() {
    let config = RunConfig::from(Cli::parse());
    logging::init();
    if let Err(err) = run(&config) {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

fn run(config: &RunConfig) -> Result<(), ChartError> {
    let dataset = ScoreDataset::builtin();
    tracing::info!(
        groups = dataset.groups.len(),
        lengths = ?dataset.groups.iter().map(|g| g.len()).collect::<Vec<_>>(),
        "score dataset loaded"
    );
    let lengths = dataset.check_lengths(config.length_policy)?;

    let spec = ChartSpec::review_scores();
    let labels = dataset.labels();
    let outcome = render_review_chart(&dataset, &labels, &spec, &config.out_path)?;

    if config.summary_path.is_some() || config.print_summary {
        let summary = build_summary(&outcome, &spec, &lengths);
        if let Some(path) = &config.summary_path {
            write_summary_json(&summary, path)?;
        }
        if config.print_summary {
            print!("{}", render_summary_text(&summary));
        }
    }

    Ok(())
}

#[cfg(test)]
#[path = "../tests/src_inline/main_inline.rs"]
mod tests;
