//! Core types for the dlp-fixtures toolkit.
//!
//! This crate provides the foundational pieces shared by the generator and
//! populator crates:
//!
//! - [`CustomerRecord`] - The synthetic customer row written to CSV
//! - [`mask`] - Partial-redaction functions for the "safe" output variant
//! - [`luhn`] - Mod-10 check digit computation for fake card numbers
//!
//! Everything here is pure: no I/O, no randomness. Random value generation
//! lives in the `fixture-generator` crate, file output in the
//! `fixture-populate-*` crates.

pub mod luhn;
pub mod mask;
pub mod record;

// Re-exports for convenience
pub use luhn::{is_luhn_valid, luhn_check_digit};
pub use mask::{mask_card, mask_rrn};
pub use record::CustomerRecord;
