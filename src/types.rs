//! Core value types shared across the engine.

use std::fmt;

/// Overall password strength, always in `0..=100`.
///
/// The score is derived, stateless and recomputed from the password and its
/// exposure count on every analysis; there is no partial update.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct StrengthScore(u8);

impl StrengthScore {
    /// Builds a score from a raw penalty sum, clamping into `0..=100`.
    pub fn clamped(raw: i64) -> Self {
        Self(raw.clamp(0, 100) as u8)
    }

    pub fn value(self) -> u8 {
        self.0
    }
}

impl fmt::Display for StrengthScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Gauge color token for a score band.
///
/// Five contiguous, non-overlapping bands with inclusive upper bounds:
/// `<=25` red, `<=50` orange, `<=70` cyan, `<=90` green, else purple.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScoreColor {
    Red,
    Orange,
    Cyan,
    Green,
    Purple,
}

impl ScoreColor {
    /// Hex color the presentation layer renders for this band.
    pub fn as_hex(self) -> &'static str {
        match self {
            ScoreColor::Red => "#FF0040",
            ScoreColor::Orange => "#FF7A1A",
            ScoreColor::Cyan => "#00E6FB",
            ScoreColor::Green => "#11FF6D",
            ScoreColor::Purple => "#B300FF",
        }
    }
}

/// A generated stronger variant of the user's password, with a
/// human-readable description of how it was built.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PasswordSuggestion {
    pub password: String,
    pub description: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamped_within_range() {
        assert_eq!(StrengthScore::clamped(55).value(), 55);
    }

    #[test]
    fn test_clamped_below_zero() {
        assert_eq!(StrengthScore::clamped(-10).value(), 0);
    }

    #[test]
    fn test_clamped_above_hundred() {
        assert_eq!(StrengthScore::clamped(150).value(), 100);
    }

    #[test]
    fn test_color_hex_tokens() {
        assert_eq!(ScoreColor::Red.as_hex(), "#FF0040");
        assert_eq!(ScoreColor::Purple.as_hex(), "#B300FF");
    }
}
