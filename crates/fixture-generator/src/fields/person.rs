//! Name, email, and memo generators.

use super::pick;
use rand::Rng;

const FIRST_NAMES: &[&str] = &[
    "Minjun", "Seoyeon", "Jihun", "Sumin", "Jiwoo", "Hyunwoo", "Yuna", "Hana", "Junseo", "Eunji",
];

const LAST_NAMES: &[&str] = &[
    "Kim", "Lee", "Park", "Choi", "Jung", "Kang", "Cho", "Yoon", "Jang", "Lim",
];

const EMAIL_DOMAINS: &[&str] = &["example.com", "example.net", "corp.example", "mail.test"];

const MEMOS: &[&str] = &[
    "VIP customer",
    "Requested invoice email",
    "Address change requested",
    "Call back needed",
    "No special notes",
];

/// Generate a `"First Last"` name from the fixed name pools.
pub fn generate_name<R: Rng>(rng: &mut R) -> String {
    let first = pick(rng, FIRST_NAMES);
    let last = pick(rng, LAST_NAMES);
    format!("{first} {last}")
}

/// Generate an email address derived from a generated name.
///
/// The local part is the lowercased name with spaces replaced by dots plus
/// a random 1..=999 suffix.
pub fn generate_email<R: Rng>(rng: &mut R, name: &str) -> String {
    let user = name.to_lowercase().replace(' ', ".");
    let suffix = rng.random_range(1..=999);
    let domain = pick(rng, EMAIL_DOMAINS);
    format!("{user}{suffix}@{domain}")
}

/// Generate a memo line from the fixed memo pool.
pub fn generate_memo<R: Rng>(rng: &mut R) -> String {
    pick(rng, MEMOS).to_string()
}
