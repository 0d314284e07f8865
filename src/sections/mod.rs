//! Scoring sections
//!
//! Each section computes one penalty component from a disjoint concern:
//! known-pattern weakness, character-class/length weakness, and breach
//! history. The components are summed with no weighting or cross-terms so
//! the final score stays auditable.

mod exposure;
mod guessability;
mod pattern;

pub use exposure::exposure_penalty;
pub use guessability::guessability_penalty;
pub use pattern::pattern_penalty;
