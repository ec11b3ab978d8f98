//! Address generator.

use super::pick;
use rand::Rng;

const CITIES: &[&str] = &["Seoul", "Busan", "Incheon", "Daegu", "Daejeon", "Gwangju"];

const STREETS: &[&str] = &[
    "Teheran-ro",
    "Gangnam-daero",
    "Sejong-daero",
    "Centum-ro",
    "Haeundae-ro",
];

/// Generate a `"City, Street N"` address with a street number in 1..=200.
pub fn generate_address<R: Rng>(rng: &mut R) -> String {
    let city = pick(rng, CITIES);
    let street = pick(rng, STREETS);
    let number = rng.random_range(1..=200);
    format!("{city}, {street} {number}")
}
