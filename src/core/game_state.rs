use super::constants::{
    BASE_PLAYER_ATK, BASE_PLAYER_DEF, BASE_PLAYER_HP, PREMIUM_ZONE, STARTING_COINS, STARTING_ZONE,
};
use super::game_mode::GameModeState;
use crate::achievements::types::{Achievements, PlayerTags};
use crate::character::derived_stats::apply_derived_stats;
use crate::character::research::Research;
use crate::combat::types::CombatState;
use crate::economy::cheats::Cheats;
use crate::economy::mining::Mining;
use crate::economy::promo::PromoCodes;
use crate::game::error::ActionError;
use crate::items::collection::CollectionBook;
use crate::items::equipment::Inventory;
use crate::items::types::Item;
use crate::market::YojefMarket;
use crate::progression::statistics::Statistics;
use crate::progression::streak::KnowledgeStreak;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Base stats are fixed for a run; the rest are derived from them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerStats {
    pub hp: u64,
    pub max_hp: u64,
    pub atk: u64,
    pub def: u64,
    pub base_atk: u64,
    pub base_def: u64,
    pub base_hp: u64,
}

impl Default for PlayerStats {
    fn default() -> Self {
        Self {
            hp: BASE_PLAYER_HP as u64,
            max_hp: BASE_PLAYER_HP as u64,
            atk: BASE_PLAYER_ATK as u64,
            def: BASE_PLAYER_DEF as u64,
            base_atk: BASE_PLAYER_ATK as u64,
            base_def: BASE_PLAYER_DEF as u64,
            base_hp: BASE_PLAYER_HP as u64,
        }
    }
}

/// The whole persistent run.
///
/// Every field carries `#[serde(default)]` through the container attribute so
/// older snapshots load with new fields filled in. `combat` is never saved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameState {
    pub coins: u64,
    pub gems: u64,
    pub shiny_gems: u64,
    pub zone: u32,
    pub player_stats: PlayerStats,
    pub inventory: Inventory,
    pub research: Research,
    pub is_premium: bool,
    pub achievements: Achievements,
    pub player_tags: PlayerTags,
    pub collection_book: CollectionBook,
    pub knowledge_streak: KnowledgeStreak,
    pub game_mode: GameModeState,
    pub statistics: Statistics,
    pub cheats: Cheats,
    pub mining: Mining,
    pub promo_codes: PromoCodes,
    pub yojef_market: YojefMarket,
    #[serde(skip)]
    pub combat: CombatState,
}

impl Default for GameState {
    fn default() -> Self {
        Self {
            coins: STARTING_COINS,
            gems: 0,
            shiny_gems: 0,
            zone: STARTING_ZONE,
            player_stats: PlayerStats::default(),
            inventory: Inventory::default(),
            research: Research::default(),
            is_premium: false,
            achievements: Achievements::default(),
            player_tags: PlayerTags::default(),
            collection_book: CollectionBook::default(),
            knowledge_streak: KnowledgeStreak::default(),
            game_mode: GameModeState::default(),
            statistics: Statistics::default(),
            cheats: Cheats::default(),
            mining: Mining::default(),
            promo_codes: PromoCodes::default(),
            yojef_market: YojefMarket::default(),
            combat: CombatState::default(),
        }
    }
}

impl GameState {
    /// A fresh run started at `now`, with a stocked market.
    pub fn new(now: i64, rng: &mut impl Rng) -> Self {
        let mut state = Self::default();
        state.statistics.session_start_time = now;
        state.yojef_market = YojefMarket::new(now, rng);
        state
    }

    pub fn in_combat(&self) -> bool {
        self.combat.current_enemy.is_some()
    }

    pub fn check_coins(&self, cost: u64) -> Result<(), ActionError> {
        if self.cheats.infinite_coins || self.coins >= cost {
            Ok(())
        } else {
            Err(ActionError::InsufficientCoins {
                needed: cost,
                available: self.coins,
            })
        }
    }

    pub fn check_gems(&self, cost: u64) -> Result<(), ActionError> {
        if self.cheats.infinite_gems || self.gems >= cost {
            Ok(())
        } else {
            Err(ActionError::InsufficientGems {
                needed: cost,
                available: self.gems,
            })
        }
    }

    pub fn check_shiny_gems(&self, cost: u64) -> Result<(), ActionError> {
        if self.shiny_gems >= cost {
            Ok(())
        } else {
            Err(ActionError::InsufficientShinyGems {
                needed: cost,
                available: self.shiny_gems,
            })
        }
    }

    /// Deducts coins, or nothing at all while infinite coins is on.
    pub fn spend_coins(&mut self, cost: u64) -> Result<(), ActionError> {
        self.check_coins(cost)?;
        if !self.cheats.infinite_coins {
            self.coins -= cost;
        }
        Ok(())
    }

    pub fn spend_gems(&mut self, cost: u64) -> Result<(), ActionError> {
        self.check_gems(cost)?;
        if !self.cheats.infinite_gems {
            self.gems -= cost;
        }
        Ok(())
    }

    pub fn spend_shiny_gems(&mut self, cost: u64) -> Result<(), ActionError> {
        self.check_shiny_gems(cost)?;
        self.shiny_gems -= cost;
        Ok(())
    }

    /// Credits coins and counts them toward lifetime earnings.
    pub fn earn_coins(&mut self, amount: u64) {
        self.coins = self.coins.saturating_add(amount);
        self.statistics.coins_earned = self.statistics.coins_earned.saturating_add(amount);
    }

    pub fn earn_gems(&mut self, amount: u64) {
        self.gems = self.gems.saturating_add(amount);
        self.statistics.gems_earned = self.statistics.gems_earned.saturating_add(amount);
    }

    pub fn earn_shiny_gems(&mut self, amount: u64) {
        self.shiny_gems = self.shiny_gems.saturating_add(amount);
        self.statistics.shiny_gems_earned =
            self.statistics.shiny_gems_earned.saturating_add(amount);
    }

    /// Puts a new item into the inventory and the collection book. Only a
    /// name the book has not seen counts toward `items_collected`.
    pub fn acquire_item(&mut self, item: Item) {
        if self.collection_book.record(&item) {
            self.statistics.items_collected += 1;
        }
        self.inventory.add(item);
    }

    /// Moves one zone forward, latching premium at the threshold.
    pub fn advance_zone(&mut self) {
        self.zone += 1;
        self.statistics.record_zone(self.zone);
        if self.zone >= PREMIUM_ZONE && !self.is_premium {
            self.is_premium = true;
            tracing::info!(zone = self.zone, "premium unlocked");
        }
    }

    /// Restores invariants on a snapshot from outside the dispatcher.
    pub fn repair(&mut self) {
        self.zone = self.zone.max(STARTING_ZONE);
        self.is_premium |= self.zone >= PREMIUM_ZONE;
        self.inventory.repair_references();
        self.statistics.record_zone(self.zone);
        self.combat = CombatState::default();
        apply_derived_stats(self);
    }
}
