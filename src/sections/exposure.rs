//! Exposure penalty section - step function of the breach count.

/// Scores breach history, 0 to 60.
///
/// The only reachable values are 0, 20, 35, 50 and 60.
pub fn exposure_penalty(times_exposed: u64) -> u8 {
    match times_exposed {
        0 => 0,
        1..=1_000 => 20,
        1_001..=10_000 => 35,
        10_001..=100_000 => 50,
        _ => 60,
    }
}
