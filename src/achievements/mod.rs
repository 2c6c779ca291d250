//! Achievement and player-tag catalogs.
//!
//! Both are one-way: once an entry unlocks it stays unlocked. Checks run as a
//! follow-up after each dispatcher action.

pub mod data;
pub mod tags;
pub mod types;

pub use data::{check_achievements, get_achievement_def, get_achievements_by_category, ALL_ACHIEVEMENTS};
pub use tags::{check_player_tags, get_player_tag_def, ALL_PLAYER_TAGS};
pub use types::{AchievementCategory, AchievementId, Achievements, PlayerTagId, PlayerTags};
