//! Random data generation for the dlp-fixtures toolkit.
//!
//! This crate provides the [`RecordGenerator`], which produces synthetic
//! [`CustomerRecord`](fixture_core::CustomerRecord)s from a seeded RNG, and
//! the [`SecretSet`](secrets::SecretSet), which holds the fake credentials
//! interpolated into the mock environment file.
//!
//! # Architecture
//!
//! ```text
//! seed (u64)
//!    │
//!    ▼
//! ┌──────────────────┐
//! │ RecordGenerator  │
//! │                  │
//! │  - rng (StdRng)  │
//! │  - index         │
//! └────────┬─────────┘
//!          │
//!          ▼
//!   CustomerRecord { customer_id: "CUST-0001", ... }
//! ```
//!
//! Generation is deterministic: the same seed produces the same sequence of
//! records and secrets. Individual field generators live in [`fields`] and
//! take any `rand::Rng`, so they stay testable with a locally seeded RNG.

pub mod fields;
pub mod generator;
pub mod secrets;

// Re-exports for convenience
pub use generator::{RecordGenerator, RecordIterator};
pub use secrets::SecretSet;
