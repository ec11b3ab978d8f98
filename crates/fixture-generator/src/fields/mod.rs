//! Individual field generators for customer records.
//!
//! Each generator produces one scalar value with a constrained format and
//! consumes entropy from the caller's RNG. None of them can fail.

pub mod address;
pub mod identifier;
pub mod person;

use rand::Rng;

pub use address::generate_address;
pub use identifier::{generate_card_like, generate_phone, generate_rrn_like};
pub use person::{generate_email, generate_memo, generate_name};

/// Generate a string of exactly `n` random decimal digits.
///
/// Leading zeros are allowed; these are fixture strings, not numbers.
pub fn random_digits<R: Rng>(rng: &mut R, n: usize) -> String {
    let mut result = String::with_capacity(n);
    for _ in 0..n {
        result.push(char::from_digit(rng.random_range(0..10), 10).unwrap());
    }
    result
}

/// Pick one element from a non-empty slice of static strings.
pub(crate) fn pick<R: Rng>(rng: &mut R, values: &[&'static str]) -> &'static str {
    values[rng.random_range(0..values.len())]
}
