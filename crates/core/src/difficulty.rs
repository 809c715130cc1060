//! Difficulty curve: maps cumulative score to the spawn power cap.
//!
//! The curve is a step function, re-evaluated once per spawn. There is no
//! smoothing or interpolation; the cap jumps as soon as the score crosses
//! the threshold.

use drop_merge_types::{
    BASE_MAX_SPAWN_POWER, DIFFICULTY_SCORE_THRESHOLD, RAMPED_MAX_SPAWN_POWER,
};

/// Maximum spawn power for the given cumulative score.
///
/// Spawned tiles take a power `p` uniform in `[1, cap]`, giving value `2^p`.
pub fn current_max_power(score: u32) -> u32 {
    if score > DIFFICULTY_SCORE_THRESHOLD {
        RAMPED_MAX_SPAWN_POWER
    } else {
        BASE_MAX_SPAWN_POWER
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_cap_below_threshold() {
        assert_eq!(current_max_power(0), 2);
        assert_eq!(current_max_power(4999), 2);
        // Threshold is exclusive: exactly 5000 stays at the base cap.
        assert_eq!(current_max_power(5000), 2);
    }

    #[test]
    fn test_ramped_cap_above_threshold() {
        assert_eq!(current_max_power(5001), 4);
        assert_eq!(current_max_power(u32::MAX), 4);
    }
}
