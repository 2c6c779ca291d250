use super::types::{PlayerTagDef, PlayerTagId};
use crate::core::game_state::GameState;

pub const ALL_PLAYER_TAGS: &[PlayerTagDef] = &[
    PlayerTagDef {
        id: PlayerTagId::GemCollector,
        name: "Gem Collector",
        description: "Earn 5,000 gems",
        icon: "💎",
    },
    PlayerTagDef {
        id: PlayerTagId::ZoneMaster,
        name: "Zone Master",
        description: "Reach zone 100",
        icon: "🗺️",
    },
    PlayerTagDef {
        id: PlayerTagId::ShinyHunter,
        name: "Shiny Hunter",
        description: "Earn 100 shiny gems",
        icon: "✨",
    },
    PlayerTagDef {
        id: PlayerTagId::RelicSeeker,
        name: "Relic Seeker",
        description: "Own 5 relics",
        icon: "🏺",
    },
    PlayerTagDef {
        id: PlayerTagId::KnowledgeMaster,
        name: "Knowledge Master",
        description: "Answer 1,000 questions correctly",
        icon: "🧠",
    },
    PlayerTagDef {
        id: PlayerTagId::EnchantedFinder,
        name: "Enchanted Finder",
        description: "Own 10 enchanted items",
        icon: "🔮",
    },
];

pub fn get_player_tag_def(id: PlayerTagId) -> Option<&'static PlayerTagDef> {
    ALL_PLAYER_TAGS.iter().find(|t| t.id == id)
}

pub fn is_tag_earned(id: PlayerTagId, state: &GameState) -> bool {
    let stats = &state.statistics;
    match id {
        PlayerTagId::GemCollector => stats.gems_earned >= 5000,
        PlayerTagId::ZoneMaster => state.zone >= 100,
        PlayerTagId::ShinyHunter => stats.shiny_gems_earned >= 100,
        PlayerTagId::RelicSeeker => state.inventory.relics.len() >= 5,
        PlayerTagId::KnowledgeMaster => stats.correct_answers >= 1000,
        PlayerTagId::EnchantedFinder => {
            state
                .inventory
                .iter_all_items()
                .filter(|i| i.is_enchanted)
                .count()
                >= 10
        }
    }
}

pub fn check_player_tags(state: &mut GameState, now: i64) -> Vec<PlayerTagId> {
    let earned: Vec<PlayerTagId> = ALL_PLAYER_TAGS
        .iter()
        .map(|t| t.id)
        .filter(|&id| !state.player_tags.has(id) && is_tag_earned(id, state))
        .collect();
    for &id in &earned {
        state.player_tags.unlock(id, now);
        tracing::info!(tag = ?id, "player tag earned");
    }
    earned
}
