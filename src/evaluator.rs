//! Strength evaluator - combines the section penalties into the final score
//! and maps it to the gauge color and status message.

use secrecy::SecretString;

use crate::sections::{exposure_penalty, guessability_penalty, pattern_penalty};
use crate::types::{ScoreColor, StrengthScore};

/// Calculates the overall strength score for a password.
///
/// Starts from a perfect baseline of 100 and subtracts the three independent
/// penalty components (breach history, known-pattern weakness,
/// character-class/length weakness), clamping into `0..=100`.
///
/// # Arguments
/// * `times_exposed` - Breach count from the exposure lookup (0 when unknown)
/// * `password` - The password to evaluate
pub fn calculate_strength_score(times_exposed: u64, password: &SecretString) -> StrengthScore {
    let penalty = exposure_penalty(times_exposed) as i64
        + pattern_penalty(password) as i64
        + guessability_penalty(password) as i64;

    StrengthScore::clamped(100 - penalty)
}

/// Maps a score to its gauge color band.
pub fn get_score_color(score: StrengthScore) -> ScoreColor {
    match score.value() {
        0..=25 => ScoreColor::Red,
        26..=50 => ScoreColor::Orange,
        51..=70 => ScoreColor::Cyan,
        71..=90 => ScoreColor::Green,
        _ => ScoreColor::Purple,
    }
}

/// Returns the status message for a score, evaluated in order.
///
/// Exactly one message per `(score, times_exposed)` pair; the breach-count
/// message takes priority over the generic weak message when the count is
/// nonzero.
pub fn get_status_message(score: StrengthScore, times_exposed: u64) -> String {
    let value = score.value();

    if value == 100 {
        return "SHIELD ACTIVATED: this password is Sentinel-strong.".to_string();
    }
    if value >= 90 {
        return "Defense increasing... Strong password detected.".to_string();
    }
    if value >= 70 {
        return "Moderate defense level. Consider reinforcement.".to_string();
    }
    if value >= 50 {
        return "Shield compromised. Let's reinforce it.".to_string();
    }
    if times_exposed > 0 {
        return format!(
            "BREACH DETECTED: exposed {} times.",
            format_count(times_exposed)
        );
    }
    "Weak defense detected. Immediate upgrade recommended.".to_string()
}

/// Formats a count with thousands separators for the breach message.
fn format_count(n: u64) -> String {
    let digits = n.to_string();
    let mut result = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    result.chars().rev().collect()
}
