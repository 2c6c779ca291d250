//! Achievement and player-tag types.

use crate::persistence::lenient::map_skipping_malformed;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Achievement categories for grouping in a browser.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AchievementCategory {
    Combat,
    Knowledge,
    Collection,
    Progression,
}

impl AchievementCategory {
    pub const ALL: [AchievementCategory; 4] = [
        AchievementCategory::Combat,
        AchievementCategory::Knowledge,
        AchievementCategory::Collection,
        AchievementCategory::Progression,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            AchievementCategory::Combat => "Combat",
            AchievementCategory::Knowledge => "Knowledge",
            AchievementCategory::Collection => "Collection",
            AchievementCategory::Progression => "Progression",
        }
    }
}

/// Unique identifier for each achievement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AchievementId {
    FirstVictory,
    Zone10,
    Zone25,
    PremiumZone,
    Scholar,
    Streak10,
    Streak25,
    ChestHunter,
    Collector,
    Researcher,
    MythicalOwner,
    RelicBearer,
}

/// Static definition of an achievement.
#[derive(Debug, Clone)]
pub struct AchievementDef {
    pub id: AchievementId,
    pub name: &'static str,
    pub description: &'static str,
    pub category: AchievementCategory,
    pub reward_coins: u64,
    pub reward_gems: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnlockedAchievement {
    pub unlocked_at: i64,
}

/// Unlock record. Entries are only ever inserted.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Achievements {
    #[serde(deserialize_with = "map_skipping_malformed")]
    pub unlocked: BTreeMap<AchievementId, UnlockedAchievement>,
}

impl Achievements {
    pub fn is_unlocked(&self, id: AchievementId) -> bool {
        self.unlocked.contains_key(&id)
    }

    /// Returns true if newly unlocked.
    pub fn unlock(&mut self, id: AchievementId, now: i64) -> bool {
        if self.is_unlocked(id) {
            return false;
        }
        self.unlocked
            .insert(id, UnlockedAchievement { unlocked_at: now });
        true
    }

    pub fn unlocked_count(&self) -> usize {
        self.unlocked.len()
    }

    /// Unlock percentage (0.0 - 100.0).
    pub fn unlock_percentage(&self) -> f32 {
        use super::data::ALL_ACHIEVEMENTS;
        (self.unlocked_count() as f32 / ALL_ACHIEVEMENTS.len() as f32) * 100.0
    }

    /// (unlocked, total) within a category.
    pub fn count_by_category(&self, category: AchievementCategory) -> (usize, usize) {
        use super::data::ALL_ACHIEVEMENTS;

        let in_category: Vec<_> = ALL_ACHIEVEMENTS
            .iter()
            .filter(|a| a.category == category)
            .collect();
        let unlocked = in_category
            .iter()
            .filter(|a| self.is_unlocked(a.id))
            .count();
        (unlocked, in_category.len())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlayerTagId {
    GemCollector,
    ZoneMaster,
    ShinyHunter,
    RelicSeeker,
    KnowledgeMaster,
    EnchantedFinder,
}

#[derive(Debug, Clone)]
pub struct PlayerTagDef {
    pub id: PlayerTagId,
    pub name: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
}

/// Cosmetic titles. Like achievements, a tag once earned is never lost.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerTags {
    #[serde(deserialize_with = "map_skipping_malformed")]
    pub unlocked: BTreeMap<PlayerTagId, i64>,
}

impl PlayerTags {
    pub fn has(&self, id: PlayerTagId) -> bool {
        self.unlocked.contains_key(&id)
    }

    pub fn unlock(&mut self, id: PlayerTagId, now: i64) -> bool {
        if self.has(id) {
            return false;
        }
        self.unlocked.insert(id, now);
        true
    }
}
