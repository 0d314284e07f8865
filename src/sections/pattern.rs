//! Pattern penalty section - detects keyboard walks, predictable endings
//! and common-password fragments.

use secrecy::{ExposeSecret, SecretString};

/// Sequential keyboard-adjacency runs that show up in weak passwords.
const KEYBOARD_PATTERNS: [&str; 8] = [
    "qwerty",
    "asdfgh",
    "zxcvbn",
    "12345",
    "qazwsx",
    "qwertyuiop",
    "asdfghjkl",
    "zxcvbnm",
];

/// Endings users tack on to satisfy complexity rules.
const PREDICTABLE_ENDINGS: [&str; 6] = ["123", "!", "!!!", "@123", "1!", "!1"];

/// Fragments of the most common passwords (partial list).
const COMMON_PASSWORDS: [&str; 10] = [
    "password",
    "letmein",
    "welcome",
    "monkey",
    "dragon",
    "master",
    "sunshine",
    "princess",
    "admin",
    "login",
];

const MAX_PENALTY: u8 = 30;

/// Scores predictable-pattern weakness, 0 to 30.
///
/// Each sub-check contributes +10 at most once: keyboard patterns and common
/// fragments match case-insensitively anywhere in the password, endings match
/// the raw password suffix.
pub fn pattern_penalty(password: &SecretString) -> u8 {
    let pwd = password.expose_secret();
    let lower = pwd.to_lowercase();
    let mut penalty = 0;

    if KEYBOARD_PATTERNS.iter().any(|p| lower.contains(p)) {
        penalty += 10;
    }

    if PREDICTABLE_ENDINGS.iter().any(|e| pwd.ends_with(e)) {
        penalty += 10;
    }

    if COMMON_PASSWORDS.iter().any(|c| lower.contains(c)) {
        penalty += 10;
    }

    penalty.min(MAX_PENALTY)
}
