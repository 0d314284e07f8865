//! Guessability penalty section - character-class and length weakness.

use secrecy::{ExposeSecret, SecretString};

const MIN_LENGTH: usize = 8;
const MAX_PENALTY: u8 = 20;

/// Scores easy-to-guess composition, 0 to 20.
///
/// +10 if the password is lowercase letters and nothing else, +10 if it is
/// shorter than 8 characters.
pub fn guessability_penalty(password: &SecretString) -> u8 {
    let pwd = password.expose_secret();
    let mut penalty = 0;

    let only_lowercase =
        !pwd.is_empty() && pwd.chars().all(|c| c.is_ascii_lowercase());
    if only_lowercase {
        penalty += 10;
    }

    if pwd.chars().count() < MIN_LENGTH {
        penalty += 10;
    }

    penalty.min(MAX_PENALTY)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn secret(s: &str) -> SecretString {
        SecretString::new(s.to_string().into())
    }

    #[test]
    fn test_lowercase_only_and_short() {
        assert_eq!(guessability_penalty(&secret("abc")), 20);
    }

    #[test]
    fn test_lowercase_only_long() {
        assert_eq!(guessability_penalty(&secret("abcdefghij")), 10);
    }

    #[test]
    fn test_short_mixed() {
        assert_eq!(guessability_penalty(&secret("Ab1!")), 10);
    }

    #[test]
    fn test_digit_defeats_lowercase_check() {
        assert_eq!(guessability_penalty(&secret("abcdefgh1")), 0);
    }

    #[test]
    fn test_exactly_minimum_length() {
        assert_eq!(guessability_penalty(&secret("Abcdefg1")), 0);
    }

    #[test]
    fn test_empty_password() {
        // empty is short but not "lowercase only"
        assert_eq!(guessability_penalty(&secret("")), 10);
    }
}
