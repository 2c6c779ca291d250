//! Static achievement definitions and their unlock predicates.

use super::types::{AchievementCategory, AchievementDef, AchievementId};
use crate::core::constants::{MAX_EQUIPPED_RELICS, PREMIUM_ZONE};
use crate::core::game_state::GameState;
use crate::items::types::Rarity;

/// All achievement definitions in display order.
pub const ALL_ACHIEVEMENTS: &[AchievementDef] = &[
    // ═══════════════════════════════════════════════════════════════
    // COMBAT
    // ═══════════════════════════════════════════════════════════════
    AchievementDef {
        id: AchievementId::FirstVictory,
        name: "First Victory",
        description: "Win your first battle",
        category: AchievementCategory::Combat,
        reward_coins: 50,
        reward_gems: 0,
    },
    AchievementDef {
        id: AchievementId::Zone10,
        name: "Zone Explorer",
        description: "Reach zone 10",
        category: AchievementCategory::Combat,
        reward_coins: 200,
        reward_gems: 10,
    },
    AchievementDef {
        id: AchievementId::Zone25,
        name: "Zone Conqueror",
        description: "Reach zone 25",
        category: AchievementCategory::Combat,
        reward_coins: 500,
        reward_gems: 25,
    },
    AchievementDef {
        id: AchievementId::PremiumZone,
        name: "Premium Adventurer",
        description: "Reach zone 50 and unlock premium",
        category: AchievementCategory::Combat,
        reward_coins: 1000,
        reward_gems: 100,
    },
    // ═══════════════════════════════════════════════════════════════
    // KNOWLEDGE
    // ═══════════════════════════════════════════════════════════════
    AchievementDef {
        id: AchievementId::Scholar,
        name: "Scholar",
        description: "Answer 100 questions correctly",
        category: AchievementCategory::Knowledge,
        reward_coins: 0,
        reward_gems: 20,
    },
    AchievementDef {
        id: AchievementId::Streak10,
        name: "On a Roll",
        description: "Reach a knowledge streak of 10",
        category: AchievementCategory::Knowledge,
        reward_coins: 0,
        reward_gems: 15,
    },
    AchievementDef {
        id: AchievementId::Streak25,
        name: "Unstoppable Mind",
        description: "Reach a knowledge streak of 25",
        category: AchievementCategory::Knowledge,
        reward_coins: 0,
        reward_gems: 50,
    },
    // ═══════════════════════════════════════════════════════════════
    // COLLECTION
    // ═══════════════════════════════════════════════════════════════
    AchievementDef {
        id: AchievementId::ChestHunter,
        name: "Chest Hunter",
        description: "Open 10 chests",
        category: AchievementCategory::Collection,
        reward_coins: 100,
        reward_gems: 0,
    },
    AchievementDef {
        id: AchievementId::Collector,
        name: "Collector",
        description: "Collect 25 different items",
        category: AchievementCategory::Collection,
        reward_coins: 0,
        reward_gems: 25,
    },
    AchievementDef {
        id: AchievementId::MythicalOwner,
        name: "Mythical Owner",
        description: "Own a mythical item",
        category: AchievementCategory::Collection,
        reward_coins: 0,
        reward_gems: 100,
    },
    // ═══════════════════════════════════════════════════════════════
    // PROGRESSION
    // ═══════════════════════════════════════════════════════════════
    AchievementDef {
        id: AchievementId::Researcher,
        name: "Researcher",
        description: "Buy 10 research levels in total",
        category: AchievementCategory::Progression,
        reward_coins: 250,
        reward_gems: 0,
    },
    AchievementDef {
        id: AchievementId::RelicBearer,
        name: "Relic Bearer",
        description: "Equip five relics at once",
        category: AchievementCategory::Progression,
        reward_coins: 500,
        reward_gems: 0,
    },
];

/// Returns the definition for an achievement id.
pub fn get_achievement_def(id: AchievementId) -> Option<&'static AchievementDef> {
    ALL_ACHIEVEMENTS.iter().find(|a| a.id == id)
}

pub fn get_achievements_by_category(category: AchievementCategory) -> Vec<&'static AchievementDef> {
    ALL_ACHIEVEMENTS
        .iter()
        .filter(|a| a.category == category)
        .collect()
}

/// Whether the snapshot satisfies an achievement's unlock condition.
pub fn is_achieved(id: AchievementId, state: &GameState) -> bool {
    let stats = &state.statistics;
    match id {
        AchievementId::FirstVictory => state.zone >= 2,
        AchievementId::Zone10 => state.zone >= 10,
        AchievementId::Zone25 => state.zone >= 25,
        AchievementId::PremiumZone => state.zone >= PREMIUM_ZONE,
        AchievementId::Scholar => stats.correct_answers >= 100,
        AchievementId::Streak10 => state.knowledge_streak.best >= 10,
        AchievementId::Streak25 => state.knowledge_streak.best >= 25,
        AchievementId::ChestHunter => stats.chests_opened >= 10,
        AchievementId::Collector => stats.items_collected >= 25,
        AchievementId::Researcher => state.research.total_levels() >= 10,
        AchievementId::MythicalOwner => state
            .inventory
            .iter_all_items()
            .any(|i| i.rarity == Rarity::Mythical),
        AchievementId::RelicBearer => state.inventory.equipped_relics.len() >= MAX_EQUIPPED_RELICS,
    }
}

/// Unlocks every newly satisfied achievement and pays out its reward.
/// Rewards never feed back into an achievement predicate, so one pass settles.
pub fn check_achievements(state: &mut GameState, now: i64) -> Vec<AchievementId> {
    let newly_met: Vec<&AchievementDef> = ALL_ACHIEVEMENTS
        .iter()
        .filter(|def| !state.achievements.is_unlocked(def.id) && is_achieved(def.id, state))
        .collect();

    for def in &newly_met {
        state.achievements.unlock(def.id, now);
        state.earn_coins(def.reward_coins);
        state.earn_gems(def.reward_gems);
        tracing::info!(
            achievement = def.name,
            coins = def.reward_coins,
            gems = def.reward_gems,
            "achievement unlocked"
        );
    }
    newly_met.into_iter().map(|def| def.id).collect()
}
