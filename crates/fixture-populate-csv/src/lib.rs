//! Customer CSV file populator.
//!
//! This crate generates the unmasked and masked customer CSV pair using the
//! fixture-generator crate. Both files are written from the same generated
//! rows, so the masked file is always a field-by-field redaction of the
//! unmasked one.
//!
//! # Example
//!
//! ```ignore
//! use fixture_populate_csv::CsvPopulator;
//! use fixture_generator::RecordGenerator;
//!
//! let mut populator = CsvPopulator::new(RecordGenerator::new(42));
//! let metrics = populator.populate("customer-data.csv", "customer-data-safe.csv", 60)?;
//! ```

mod error;
mod populator;

pub use error::CsvPopulatorError;
pub use populator::{CsvPopulator, PopulateMetrics};
