//! Score resource.
//!
//! Holds the running score of the current session and the best score known
//! to the high-score store. The running score only grows during a session;
//! [`Score::reset`] on restart is the single place it goes back to zero.

use bevy_ecs::prelude::Resource;

#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Score {
    pub current: u32,
    pub best: u32,
    /// A checkpoint cue fires every time `current` crosses a multiple of this.
    pub checkpoint_interval: u32,
}

impl Default for Score {
    fn default() -> Self {
        Self::new(0, 1000)
    }
}

impl Score {
    pub fn new(best: u32, checkpoint_interval: u32) -> Self {
        Self {
            current: 0,
            best,
            checkpoint_interval,
        }
    }

    /// Add points. Returns true if a checkpoint was crossed.
    pub fn add(&mut self, points: u32) -> bool {
        let before = self.current;
        self.current = self.current.saturating_add(points);
        if self.checkpoint_interval == 0 {
            return false;
        }
        self.current / self.checkpoint_interval > before / self.checkpoint_interval
    }

    /// Whether the running score beats the stored best.
    pub fn is_new_best(&self) -> bool {
        self.current > self.best
    }

    pub fn reset(&mut self) {
        self.current = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checkpoint_fires_once_on_crossing() {
        let mut s = Score::new(0, 1000);
        s.current = 998;
        assert!(!s.add(1));
        assert!(s.add(1));
        assert_eq!(s.current, 1000);
        assert!(!s.add(1));
    }

    #[test]
    fn test_bonus_jumping_over_checkpoint_still_fires() {
        let mut s = Score::new(0, 1000);
        s.current = 950;
        assert!(s.add(75));
        assert_eq!(s.current, 1025);
    }

    #[test]
    fn test_zero_interval_never_fires() {
        let mut s = Score::new(0, 0);
        assert!(!s.add(5000));
    }

    #[test]
    fn test_new_best_and_reset() {
        let mut s = Score::new(10, 1000);
        s.add(10);
        assert!(!s.is_new_best());
        s.add(1);
        assert!(s.is_new_best());
        s.reset();
        assert_eq!(s.current, 0);
        assert_eq!(s.best, 10);
    }
}
