//! Command-line interface for dlp-fixtures
//!
//! # Usage Examples
//!
//! ```bash
//! # Generate all three fixture files into the current directory
//! dlp-fixtures generate
//!
//! # Reproducible run with a fixed seed and custom output directory
//! dlp-fixtures generate --seed 42 --output-dir ./fixtures
//!
//! # Only the customer CSV pair, 200 rows
//! dlp-fixtures csv --row-count 200
//!
//! # Only the mock env file with a custom bucket nickname
//! dlp-fixtures env --nickname dev1
//! ```
//!
//! Output files:
//! - `customer-data.csv` - unmasked synthetic customer records
//! - `customer-data-safe.csv` - same records with RRN and card fields masked
//! - `config.env` - mock environment configuration with fake credentials

use anyhow::Context;
use clap::{Parser, Subcommand};
use fixture_generator::RecordGenerator;
use fixture_populate::{CommonFixtureArgs, ENV_FILE, MASKED_CSV_FILE, RAW_CSV_FILE};
use fixture_populate_csv::CsvPopulator;
use fixture_populate_env::EnvPopulator;
use tracing::info;

#[derive(Parser)]
#[command(name = "dlp-fixtures")]
#[command(about = "A tool for generating synthetic DLP and secret-scanning test fixtures")]
#[command(long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate the customer CSV pair and the mock env file
    Generate {
        #[command(flatten)]
        args: CommonFixtureArgs,
    },
    /// Generate only the customer CSV pair
    Csv {
        #[command(flatten)]
        args: CommonFixtureArgs,
    },
    /// Generate only the mock env file
    Env {
        #[command(flatten)]
        args: CommonFixtureArgs,
    },
}

fn main() -> anyhow::Result<()> {
    if let Err(e) = run() {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
    Ok(())
}

fn run() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Generate { args } => {
            let seed = resolve_seed(&args);
            populate_csv(&args, seed)?;
            populate_env(&args, seed)?;
            println!("generated: {RAW_CSV_FILE}, {MASKED_CSV_FILE}, {ENV_FILE}");
        }
        Commands::Csv { args } => {
            let seed = resolve_seed(&args);
            populate_csv(&args, seed)?;
            println!("generated: {RAW_CSV_FILE}, {MASKED_CSV_FILE}");
        }
        Commands::Env { args } => {
            let seed = resolve_seed(&args);
            populate_env(&args, seed)?;
            println!("generated: {ENV_FILE}");
        }
    }

    Ok(())
}

/// Use the seed from the CLI, or draw one from OS entropy and log it so a
/// run can be reproduced after the fact.
fn resolve_seed(args: &CommonFixtureArgs) -> u64 {
    match args.seed {
        Some(seed) => seed,
        None => {
            let seed: u64 = rand::random();
            info!("No seed given, using {seed}");
            seed
        }
    }
}

fn populate_csv(args: &CommonFixtureArgs, seed: u64) -> anyhow::Result<()> {
    let raw_path = args.output_dir.join(RAW_CSV_FILE);
    let masked_path = args.output_dir.join(MASKED_CSV_FILE);

    let mut populator = CsvPopulator::new(RecordGenerator::new(seed));
    populator
        .populate(&raw_path, &masked_path, args.row_count)
        .with_context(|| {
            format!(
                "Failed to write customer CSVs under {}",
                args.output_dir.display()
            )
        })?;
    Ok(())
}

fn populate_env(args: &CommonFixtureArgs, seed: u64) -> anyhow::Result<()> {
    let env_path = args.output_dir.join(ENV_FILE);

    let mut populator = EnvPopulator::new(seed, args.nickname.as_str());
    populator
        .populate(&env_path)
        .with_context(|| format!("Failed to write env file {}", env_path.display()))?;
    Ok(())
}
