//! Pattern-preserving suggestion generator.
//!
//! Decomposes the original password into its letter and digit runs and builds
//! three stronger variants around that skeleton, so the result stays
//! recognizable to the user while gaining unpredictability.

use rand::Rng;
use secrecy::{ExposeSecret, SecretString};

use crate::preferences::{PasswordStyle, UserPreferences};
use crate::types::PasswordSuggestion;

/// Symbols drawn from when the user expressed no preference.
pub const COMMON_SYMBOLS: [char; 7] = ['_', '-', '@', '#', '!', '~', '*'];

/// Default suffix words used when no matching preference is set.
const POPULAR_SUFFIXES: [&str; 10] = [
    "Dragon", "Phoenix", "Storm", "Nova", "Ace", "Alpha", "Cyber", "Nexus", "Orbit", "Pixel",
];

/// Generates exactly three pattern-preserving suggestions.
///
/// Symbol choice is the only non-deterministic element: when
/// `prefs.symbol` is unset a symbol is drawn uniformly from
/// [`COMMON_SYMBOLS`]. Everything else is a pure function of the inputs.
pub fn generate_password_suggestions(
    password: &SecretString,
    prefs: &UserPreferences,
) -> Vec<PasswordSuggestion> {
    generate_with_rng(password, prefs, &mut rand::thread_rng())
}

/// Same as [`generate_password_suggestions`] with a caller-supplied random
/// source, so tests can pin the symbol draw.
pub fn generate_with_rng<R: Rng>(
    password: &SecretString,
    prefs: &UserPreferences,
    rng: &mut R,
) -> Vec<PasswordSuggestion> {
    let (core, numbers) = extract_core(password.expose_secret());

    let symbol = prefs
        .symbol
        .unwrap_or_else(|| COMMON_SYMBOLS[rng.gen_range(0..COMMON_SYMBOLS.len())]);

    vec![
        suffix_variant(&core, &numbers, symbol, prefs),
        interrupted_variant(&core, &numbers, symbol, prefs),
        style_variant(&core, &numbers, prefs),
    ]
}

/// Variant 1: strategic capitalization plus a suffix from idol or hobby.
fn suffix_variant(
    core: &str,
    numbers: &str,
    symbol: char,
    prefs: &UserPreferences,
) -> PasswordSuggestion {
    let suffix = prefs
        .idol
        .as_deref()
        .or(prefs.hobby.as_deref())
        .unwrap_or(POPULAR_SUFFIXES[0]);

    let mut password = strategic_capitalize(core);
    if !numbers.is_empty() {
        password.push(symbol);
        password.push_str(numbers);
    }
    password.push(symbol);
    password.push_str(suffix);

    let description = if let Some(idol) = &prefs.idol {
        format!("With your idol: {idol}")
    } else if let Some(hobby) = &prefs.hobby {
        format!("Themed around: {hobby}")
    } else {
        "Enhanced with strong suffix".to_string()
    };

    PasswordSuggestion { password, description }
}

/// Variant 2: symbol spliced mid-core, suffix from nickname or place.
fn interrupted_variant(
    core: &str,
    numbers: &str,
    symbol: char,
    prefs: &UserPreferences,
) -> PasswordSuggestion {
    let suffix = prefs
        .nickname
        .as_deref()
        .or(prefs.place.as_deref())
        .unwrap_or(POPULAR_SUFFIXES[1]);

    let mut chars: Vec<char> = core.chars().collect();
    if chars.len() > 2 {
        let mid = chars.len() / 2;
        chars.insert(mid, symbol);
    }
    let interrupted: String = chars.into_iter().collect();

    let mut password = strategic_capitalize(&interrupted);
    if !numbers.is_empty() {
        password.push(symbol);
        password.push_str(numbers);
    }
    // literal underscore separator, independent of the chosen symbol
    password.push('_');
    password.push_str(suffix);

    let description = if let Some(nickname) = &prefs.nickname {
        format!("Your nickname added: {nickname}")
    } else if let Some(place) = &prefs.place {
        format!("Location-based: {place}")
    } else {
        "Mid-pattern reinforcement".to_string()
    };

    PasswordSuggestion { password, description }
}

/// Variant 3: keyed on the preferred style, defaulting to simple-but-strong.
fn style_variant(core: &str, numbers: &str, prefs: &UserPreferences) -> PasswordSuggestion {
    let password = match prefs.style {
        Some(PasswordStyle::Futuristic) => {
            let mut p = core.to_uppercase();
            if !numbers.is_empty() {
                p.push('@');
                p.push_str(numbers);
            }
            p.push('>');
            p.push_str(prefs.pet.as_deref().unwrap_or("Cyber"));
            p
        }
        Some(PasswordStyle::Stylish) => {
            let mut p = strategic_capitalize(core);
            if !numbers.is_empty() {
                p.push('~');
                p.push_str(numbers);
            }
            p.push('*');
            p.push_str(prefs.hobby.as_deref().unwrap_or(POPULAR_SUFFIXES[2]));
            p
        }
        _ => {
            let mut p = strategic_capitalize(core);
            if !numbers.is_empty() {
                p.push('_');
                p.push_str(numbers);
            }
            p.push('!');
            p.push_str(POPULAR_SUFFIXES[3]);
            p
        }
    };

    let description = match prefs.style {
        Some(style) => format!("{} style", style.label()),
        None => "Balanced strength".to_string(),
    };

    PasswordSuggestion { password, description }
}

/// Splits a password into its letter-only and digit-only components,
/// order preserved.
fn extract_core(password: &str) -> (String, String) {
    let core = password.chars().filter(char::is_ascii_alphabetic).collect();
    let numbers = password.chars().filter(char::is_ascii_digit).collect();
    (core, numbers)
}

/// Capitalizes the first character, and for strings longer than 3 also the
/// character at the midpoint. Deterministic by design, so the same core
/// always capitalizes identically.
fn strategic_capitalize(s: &str) -> String {
    let mut chars: Vec<char> = s.chars().collect();
    if chars.is_empty() {
        return String::new();
    }
    chars[0] = chars[0].to_ascii_uppercase();
    if chars.len() > 3 {
        let mid = chars.len() / 2;
        chars[mid] = chars[mid].to_ascii_uppercase();
    }
    chars.into_iter().collect()
}
