use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CategoryAccuracy {
    pub correct: u64,
    pub total: u64,
}

impl CategoryAccuracy {
    pub fn ratio(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.correct as f64 / self.total as f64
        }
    }
}

/// Lifetime counters. Every field only ever grows, except
/// `session_start_time`, which is reset whenever a snapshot is loaded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Statistics {
    pub total_questions_answered: u64,
    pub correct_answers: u64,
    /// Seconds of play accrued by ticks.
    pub total_play_time: u64,
    pub zones_reached: u32,
    pub items_collected: u64,
    pub coins_earned: u64,
    pub gems_earned: u64,
    pub shiny_gems_earned: u64,
    pub chests_opened: u64,
    pub accuracy_by_category: BTreeMap<String, CategoryAccuracy>,
    pub session_start_time: i64,
}

impl Default for Statistics {
    fn default() -> Self {
        Self {
            total_questions_answered: 0,
            correct_answers: 0,
            total_play_time: 0,
            zones_reached: 1,
            items_collected: 0,
            coins_earned: 0,
            gems_earned: 0,
            shiny_gems_earned: 0,
            chests_opened: 0,
            accuracy_by_category: BTreeMap::new(),
            session_start_time: 0,
        }
    }
}

impl Statistics {
    /// Counts one answered trivia question. Answers without a category are
    /// not tracked at all.
    pub fn record_answer(&mut self, category: Option<&str>, correct: bool) {
        let Some(category) = category else {
            return;
        };
        self.total_questions_answered += 1;
        if correct {
            self.correct_answers += 1;
        }
        let entry = self
            .accuracy_by_category
            .entry(category.to_string())
            .or_default();
        entry.total += 1;
        if correct {
            entry.correct += 1;
        }
    }

    pub fn overall_accuracy(&self) -> f64 {
        if self.total_questions_answered == 0 {
            0.0
        } else {
            self.correct_answers as f64 / self.total_questions_answered as f64
        }
    }

    pub fn record_zone(&mut self, zone: u32) {
        self.zones_reached = self.zones_reached.max(zone);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_answer_with_category() {
        let mut stats = Statistics::default();
        stats.record_answer(Some("science"), true);
        stats.record_answer(Some("science"), false);
        stats.record_answer(Some("history"), true);

        assert_eq!(stats.total_questions_answered, 3);
        assert_eq!(stats.correct_answers, 2);
        let science = stats.accuracy_by_category["science"];
        assert_eq!(science.total, 2);
        assert_eq!(science.correct, 1);
        assert_eq!(science.ratio(), 0.5);
    }

    #[test]
    fn test_record_answer_without_category_is_ignored() {
        let mut stats = Statistics::default();
        stats.record_answer(None, true);
        assert_eq!(stats.total_questions_answered, 0);
        assert_eq!(stats.correct_answers, 0);
        assert!(stats.accuracy_by_category.is_empty());
    }

    #[test]
    fn test_zones_reached_never_drops() {
        let mut stats = Statistics::default();
        stats.record_zone(7);
        stats.record_zone(3);
        assert_eq!(stats.zones_reached, 7);
    }

    #[test]
    fn test_empty_accuracy_is_zero() {
        assert_eq!(Statistics::default().overall_accuracy(), 0.0);
        assert_eq!(CategoryAccuracy::default().ratio(), 0.0);
    }
}
