// ABOUTME: NutriGap CLI - command-line front end for deficiency analysis and food recommendations
// ABOUTME: Lists patients and prints deficiencies, recommendations, and daily intake reports
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # List patients in the configured data source
//! nutrigap-cli patients
//!
//! # Show today's nutrient gaps for patient 7
//! nutrigap-cli deficiencies --patient 7
//!
//! # Recommend up to five foods for a specific day, as JSON
//! nutrigap-cli --format json recommend --patient 7 --date 2024-03-15 --max-items 5
//!
//! # Grade a day's intake against the reference standards
//! nutrigap-cli --data-source json:./demo/dataset.json report --patient 7
//! ```

mod commands;
mod helpers;

use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};
use nutrigap::{
    config::{DataSourceUrl, EngineConfig},
    data_sources::DataSource,
    errors::{AppResult, ErrorResponse},
    logging::LoggingConfig,
    models::PatientId,
    services::NutritionEngine,
};
use tracing::{debug, info};

type Result<T> = AppResult<T>;

#[derive(Parser)]
#[command(
    name = "nutrigap-cli",
    about = "NutriGap nutrient deficiency CLI",
    long_about = "Computes per-patient nutrient gaps against reference standards and recommends foods that close them per calorie."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Data source URL override (sqlite:<path>, sqlite::memory:, json:<path>)
    #[arg(long, global = true)]
    data_source: Option<String>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    format: OutputFormat,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

/// How command results are written to stdout
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable tables
    Text,
    /// Pretty-printed JSON
    Json,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// List patients
    Patients,

    /// Show remaining nutrient gaps for one day
    Deficiencies {
        /// Patient id
        #[arg(long)]
        patient: i64,

        /// Day to analyse (YYYY-MM-DD, defaults to today)
        #[arg(long)]
        date: Option<NaiveDate>,
    },

    /// Recommend foods that close the day's gaps
    Recommend {
        /// Patient id
        #[arg(long)]
        patient: i64,

        /// Day to analyse (YYYY-MM-DD, defaults to today)
        #[arg(long)]
        date: Option<NaiveDate>,

        /// Maximum foods to recommend (defaults to NUTRIGAP_MAX_ITEMS)
        #[arg(long)]
        max_items: Option<usize>,
    },

    /// Grade a day's intake against every applicable standard
    Report {
        /// Patient id
        #[arg(long)]
        patient: i64,

        /// Day to analyse (YYYY-MM-DD, defaults to today)
        #[arg(long)]
        date: Option<NaiveDate>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // --verbose beats RUST_LOG, which beats NUTRIGAP_LOG_LEVEL
    let mut logging = LoggingConfig::from_env();
    if cli.verbose {
        logging = logging.with_level("debug");
    }
    logging.init()?;

    let format = cli.format;
    if let Err(error) = load_and_run(cli).await {
        if format == OutputFormat::Json {
            let message = error.to_string();
            helpers::display::print_json(&ErrorResponse::from(error))?;
            anyhow::bail!(message);
        }
        return Err(error.into());
    }
    Ok(())
}

async fn load_and_run(cli: Cli) -> Result<()> {
    let mut config = EngineConfig::from_env()?;
    if let Some(url) = cli.data_source.as_deref() {
        config.data_source = DataSourceUrl::parse_url(url)?;
    }
    debug!("{}", config.summary());

    run(cli.command, cli.format, &config).await
}

async fn run(command: Command, format: OutputFormat, config: &EngineConfig) -> Result<()> {
    info!("Connecting to data source: {}", config.data_source);
    let source = DataSource::connect(&config.data_source).await?;
    let engine = NutritionEngine::new(source, config.recommender.clone());

    match command {
        Command::Patients => commands::patients::list(&engine, format).await?,
        Command::Deficiencies { patient, date } => {
            commands::analysis::deficiencies(&engine, PatientId(patient), date, format).await?;
        }
        Command::Recommend {
            patient,
            date,
            max_items,
        } => {
            commands::analysis::recommend(&engine, PatientId(patient), date, max_items, format)
                .await?;
        }
        Command::Report { patient, date } => {
            commands::analysis::report(&engine, PatientId(patient), date, format).await?;
        }
    }

    Ok(())
}
