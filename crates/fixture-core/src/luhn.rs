//! Luhn (mod-10) checksum for fake payment card numbers.
//!
//! Generated card-like strings must validate under the standard algorithm so
//! that scanners applying a real Luhn check still flag them.

/// Compute the Luhn check digit for a payload of ASCII digits.
///
/// Once the returned digit is appended, the full number satisfies
/// [`is_luhn_valid`]. Counting from the rightmost payload digit, every
/// second digit (starting with the rightmost itself) is doubled, with 9
/// subtracted from doubled values above 9.
///
/// Non-digit characters are ignored, so dashed input is accepted.
pub fn luhn_check_digit(payload: &str) -> u32 {
    let mut sum = 0;
    for (offset, digit) in payload
        .chars()
        .rev()
        .filter_map(|c| c.to_digit(10))
        .enumerate()
    {
        let mut d = digit;
        // The appended check digit shifts the payload left by one position,
        // so the rightmost payload digit lands on a doubled position.
        if offset % 2 == 0 {
            d *= 2;
            if d > 9 {
                d -= 9;
            }
        }
        sum += d;
    }
    (10 - sum % 10) % 10
}

/// Validate a full number (check digit included) against the Luhn algorithm.
///
/// Non-digit characters are ignored, so dashed card formats validate as-is.
/// Returns `false` when the input contains no digits at all.
pub fn is_luhn_valid(number: &str) -> bool {
    let mut sum = 0;
    let mut digits = 0;
    for (offset, digit) in number
        .chars()
        .rev()
        .filter_map(|c| c.to_digit(10))
        .enumerate()
    {
        let mut d = digit;
        if offset % 2 == 1 {
            d *= 2;
            if d > 9 {
                d -= 9;
            }
        }
        sum += d;
        digits += 1;
    }
    digits > 0 && sum % 10 == 0
}
