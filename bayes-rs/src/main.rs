//! bayes-rs: Naive-Bayes spam filter
//!
//! # Usage
//!
//! ```bash
//! # Train, evaluate, calibrate and evaluate again
//! bayes-rs --config filter.toml
//!
//! # Same, as JSON
//! bayes-rs --config filter.toml --json run
//!
//! # Classify individual files with the fully trained model
//! bayes-rs --config filter.toml classify mail1.txt mail2.txt
//! ```

use bayes_rs::corpus::Document;
use bayes_rs::FilterConfig;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser)]
#[command(name = "bayes-rs")]
#[command(about = "Naive-Bayes spam filter", long_about = None)]
struct Cli {
    /// Configuration file (TOML); development defaults when omitted
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print results as JSON
    #[arg(long)]
    json: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Train and evaluate on the configured collections
    Run,
    /// Classify files with the trained and calibrated model
    Classify {
        /// Files to classify
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },
}

fn init_logging(config: &FilterConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("bayes_rs={}", config.logging.level).into());

    let registry = tracing_subscriber::registry().with(filter);
    if config.logging.format == "json" {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => FilterConfig::from_file(path)?,
        None => FilterConfig::development(),
    };
    config.validate()?;

    init_logging(&config);
    info!("Starting bayes-rs v{}", env!("CARGO_PKG_VERSION"));

    match cli.command.unwrap_or(Commands::Run) {
        Commands::Run => {
            let report = bayes_rs::run(&config)?;
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                println!("{}", report);
            }
        }
        Commands::Classify { files } => {
            let filter = bayes_rs::train(&config, true)?;

            let mut results = Vec::with_capacity(files.len());
            for path in &files {
                let document = Document::from_file(path)?;
                results.push(filter.classify(&document)?);
            }

            if cli.json {
                println!("{}", serde_json::to_string_pretty(&results)?);
            } else {
                for result in &results {
                    println!("{}", result);
                }
            }
        }
    }

    Ok(())
}
