//! Score tracking seam.
//!
//! The engine pushes merge deltas through [`ScoreTracker`] and reads the
//! current total back for the difficulty curve. Hosts inject their own
//! implementation when they need persistence or UI hooks; the provided
//! [`BasicScoreTracker`] keeps a running best in memory.

/// Score accumulation as seen by the engine.
pub trait ScoreTracker {
    /// Award points for a merge step.
    fn add(&mut self, amount: u32);

    /// Cumulative score of the current match.
    fn current(&self) -> u32;

    /// Start a new match: fold the finished match into any long-lived
    /// statistics and zero the current score.
    fn reset(&mut self);
}

/// In-memory tracker with a running best score.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BasicScoreTracker {
    score: u32,
    best: u32,
}

impl BasicScoreTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Best score seen so far, including the match in progress.
    pub fn best(&self) -> u32 {
        self.best.max(self.score)
    }
}

impl ScoreTracker for BasicScoreTracker {
    fn add(&mut self, amount: u32) {
        self.score = self.score.saturating_add(amount);
    }

    fn current(&self) -> u32 {
        self.score
    }

    fn reset(&mut self) {
        self.best = self.best.max(self.score);
        self.score = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_accumulates() {
        let mut tracker = BasicScoreTracker::new();
        tracker.add(8);
        tracker.add(16);
        assert_eq!(tracker.current(), 24);
    }

    #[test]
    fn test_best_tracks_live_match() {
        let mut tracker = BasicScoreTracker::new();
        tracker.add(100);
        assert_eq!(tracker.best(), 100);

        tracker.reset();
        assert_eq!(tracker.current(), 0);
        assert_eq!(tracker.best(), 100);

        tracker.add(40);
        assert_eq!(tracker.best(), 100);
        tracker.add(100);
        assert_eq!(tracker.best(), 140);
    }
}
