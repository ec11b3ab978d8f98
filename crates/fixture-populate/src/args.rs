//! Common CLI argument definitions shared by all fixture subcommands.

use clap::Args;
use std::path::PathBuf;

/// Common arguments shared by the `generate`, `csv`, and `env` subcommands.
#[derive(Args, Clone, Debug)]
pub struct CommonFixtureArgs {
    /// Directory the fixture files are written to
    #[arg(long, short = 'o', default_value = ".")]
    pub output_dir: PathBuf,

    /// Number of customer records to generate
    #[arg(long, default_value = "60")]
    pub row_count: u64,

    /// Random seed for deterministic generation (same seed = same files);
    /// seeded from OS entropy when omitted
    #[arg(long)]
    pub seed: Option<u64>,

    /// Nickname used in the S3 bucket name (cnasg-<nickname>-customer-data)
    #[arg(long, default_value = "ongja")]
    pub nickname: String,
}
