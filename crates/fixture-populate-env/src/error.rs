//! Error types for the env-file populator.

use thiserror::Error;

/// Errors that can occur during env-file population.
#[derive(Error, Debug)]
pub enum EnvPopulatorError {
    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
