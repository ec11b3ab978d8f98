//! Common types and conventions for dlp-fixtures populators.
//!
//! This crate provides the shared CLI argument struct and the fixed output
//! file names used by the CSV and env-file populators.

pub mod args;

pub use args::CommonFixtureArgs;

/// Unmasked customer CSV file name.
pub const RAW_CSV_FILE: &str = "customer-data.csv";

/// Masked ("safe") customer CSV file name.
pub const MASKED_CSV_FILE: &str = "customer-data-safe.csv";

/// Mock environment configuration file name.
pub const ENV_FILE: &str = "config.env";
