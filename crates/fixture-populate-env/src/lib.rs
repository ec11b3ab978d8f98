//! Mock environment-configuration file populator.
//!
//! This crate renders a fixed env-file template with freshly generated fake
//! credentials (AWS key pair, database password, payment API key, OpenSSH
//! private key block) and writes it to disk. The output is fixture text for
//! secret scanners, not a config format anything parses.

mod error;
mod populator;
mod template;

pub use error::EnvPopulatorError;
pub use populator::{bucket_name, EnvPopulator};
pub use template::render_env;
