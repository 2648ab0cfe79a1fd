//! Target Ranker - Entry Point
//!
//! Loads a network snapshot, ranks every target by projected gain and exp
//! rate, prints a summary and writes the ranking for downstream schedulers.

use clap::Parser;
use std::path::PathBuf;

use target_ranker::core::config::{load_config, RankerConfig};
use target_ranker::core::error::{RankerError, Result};
use target_ranker::network::{SnapshotFile, TargetSource};
use target_ranker::ranking::{log_lists, rank_targets, render_summary, JsonFileSink, RecordSink};
use target_ranker::rates::StandardFormulas;

/// Rank network targets by projected gain and experience rate
#[derive(Parser, Debug)]
#[command(name = "target-ranker")]
#[command(about = "Rank targets by projected gain rate, extrapolating locked targets")]
struct Args {
    /// Network snapshot produced by the scanner (.json or .toml)
    #[arg(long)]
    snapshot: PathBuf,

    /// TOML file with default options; flags override it
    #[arg(long)]
    config: Option<PathBuf>,

    /// Also rank targets we have no access to
    #[arg(long)]
    all: bool,

    /// Suppress the printed summary
    #[arg(long)]
    silent: bool,

    /// Rank as if the actor had this skill level
    #[arg(long)]
    at_hack_level: Option<u32>,

    /// Fixed percentage of money taken per cycle (0-100, exclusive)
    #[arg(long)]
    hack_percent: Option<f64>,

    /// Count hacknet node capacity
    #[arg(long)]
    include_hacknet_ram: bool,

    /// Use the fallback model even though formulas are available
    #[arg(long)]
    disable_formulas_api: bool,

    /// Where to write the ranked records
    #[arg(long)]
    output: Option<PathBuf>,
}

impl Args {
    fn into_config(self, mut config: RankerConfig) -> RankerConfig {
        config.all |= self.all;
        config.silent |= self.silent;
        config.include_hacknet_ram |= self.include_hacknet_ram;
        config.disable_formulas_api |= self.disable_formulas_api;
        if self.at_hack_level.is_some() {
            config.at_hack_level = self.at_hack_level;
        }
        if self.hack_percent.is_some() {
            config.hack_percent = self.hack_percent;
        }
        if let Some(output) = self.output {
            config.output = output;
        }
        config
    }
}

/// Default log directive for this crate; `silent` only lets warnings through
fn log_directive(silent: bool) -> &'static str {
    if silent {
        "target_ranker=warn"
    } else {
        "target_ranker=info"
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    let file_config = match &args.config {
        Some(path) => load_config(path)?,
        None => RankerConfig::default(),
    };
    let source = SnapshotFile::new(args.snapshot.clone());
    let config = args.into_config(file_config);

    let directive = log_directive(config.silent)
        .parse()
        .map_err(|e| RankerError::InvalidConfig(format!("log directive: {}", e)))?;
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env().add_directive(directive))
        .init();

    config.validate()?;

    let snapshot = source.scan()?;
    let formulas = StandardFormulas::new();
    let ranking = rank_targets(&snapshot, &config, Some(&formulas))?;

    log_lists(&ranking);
    if !config.silent {
        print!("{}", render_summary(&ranking));
    }

    JsonFileSink::new(&config.output).write_records(&ranking.records())?;
    Ok(())
}
