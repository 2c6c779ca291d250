use crate::core::constants::{STREAK_BONUS_PER_STEP, STREAK_MAX_MULTIPLIER, STREAK_STEP};
use serde::{Deserialize, Serialize};

/// Consecutive-correct-answer tracker. The reward multiplier is derived from
/// `current` on demand so it can never drift from the counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct KnowledgeStreak {
    pub current: u32,
    pub best: u32,
    pub last_correct_time: Option<i64>,
}

impl KnowledgeStreak {
    /// Applies one judged answer. Returns the new streak length when it lands
    /// on a milestone (every fifth consecutive hit).
    pub fn record(&mut self, correct: bool, now: i64) -> Option<u32> {
        if !correct {
            self.current = 0;
            return None;
        }
        self.current += 1;
        self.best = self.best.max(self.current);
        self.last_correct_time = Some(now);
        (self.current % STREAK_STEP == 0).then_some(self.current)
    }

    /// Multiplier in tenths: 10 means 1.0x, capped at 20.
    pub fn multiplier_tenths(&self) -> u64 {
        let max_tenths = (STREAK_MAX_MULTIPLIER * 10.0) as u64;
        let per_step = (STREAK_BONUS_PER_STEP * 10.0) as u64;
        (10 + (self.current / STREAK_STEP) as u64 * per_step).min(max_tenths)
    }

    pub fn multiplier(&self) -> f64 {
        self.multiplier_tenths() as f64 / 10.0
    }

    /// Bonus over 1.0x as a whole percentage, for display.
    pub fn bonus_percent(&self) -> u64 {
        (self.multiplier_tenths() - 10) * 10
    }
}
