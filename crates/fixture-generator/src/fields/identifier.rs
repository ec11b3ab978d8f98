//! Phone, RRN-like, and card-like identifier generators.

use super::random_digits;
use fixture_core::luhn::luhn_check_digit;
use rand::Rng;

/// Generate a Korean-style mobile number matching `010-####-####`.
pub fn generate_phone<R: Rng>(rng: &mut R) -> String {
    format!(
        "010-{}-{}",
        random_digits(rng, 4),
        random_digits(rng, 4)
    )
}

/// Generate a synthetic RRN-shaped string: `YYMMDD-G######`.
///
/// 85% of values use birth years 1970-1999 (gender codes 1/2), the rest use
/// 2000-2009 (gender codes 3/4). Days stop at 28 so every month is valid.
pub fn generate_rrn_like<R: Rng>(rng: &mut R) -> String {
    let (year, gender_code) = if rng.random_bool(0.85) {
        (rng.random_range(70..=99), if rng.random_bool(0.5) { '1' } else { '2' })
    } else {
        (rng.random_range(0..=9), if rng.random_bool(0.5) { '3' } else { '4' })
    };

    let month = rng.random_range(1..=12);
    let day = rng.random_range(1..=28);
    let rest = random_digits(rng, 6);

    format!("{year:02}{month:02}{day:02}-{gender_code}{rest}")
}

/// Generate a Luhn-valid 16-digit card-shaped string, dashed in groups of 4.
///
/// The prefix is `4` or `5` so the value resembles a real network's range.
pub fn generate_card_like<R: Rng>(rng: &mut R) -> String {
    let prefix = if rng.random_bool(0.5) { '4' } else { '5' };
    let payload = format!("{prefix}{}", random_digits(rng, 14));
    let card = format!("{payload}{}", luhn_check_digit(&payload));

    format!(
        "{}-{}-{}-{}",
        &card[0..4],
        &card[4..8],
        &card[8..12],
        &card[12..16]
    )
}
