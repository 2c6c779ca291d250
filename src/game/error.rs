//! Why a dispatcher action was refused.

use thiserror::Error;

/// Every variant means the action changed nothing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ActionError {
    #[error("not enough coins: need {needed}, have {available}")]
    InsufficientCoins { needed: u64, available: u64 },

    #[error("not enough gems: need {needed}, have {available}")]
    InsufficientGems { needed: u64, available: u64 },

    #[error("not enough shiny gems: need {needed}, have {available}")]
    InsufficientShinyGems { needed: u64, available: u64 },

    #[error("no owned item with id {0}")]
    UnknownItem(String),

    #[error("no relic with id {0}")]
    UnknownRelic(String),

    #[error("item {0} is equipped")]
    ItemEquipped(String),

    #[error("all relic slots are in use")]
    RelicCapReached,

    #[error("relic is already equipped")]
    RelicAlreadyEquipped,

    #[error("not in combat")]
    NotInCombat,

    #[error("({x}, {y}) is outside the mining grid")]
    InvalidCoordinate { x: u32, y: u32 },

    #[error("unknown promo code")]
    UnknownPromoCode,

    #[error("promo code already redeemed")]
    PromoCodeAlreadyUsed,

    #[error("mining tool already owned")]
    ToolAlreadyOwned,

    #[error("unknown mining tool {0}")]
    UnknownTool(String),

    #[error("items cannot be combined")]
    IncompatibleItems,

    #[error("need {needed} matching items to sacrifice, found {found}")]
    NotEnoughSacrifices { needed: usize, found: usize },

    #[error("cheat is disabled")]
    CheatDisabled,

    #[error("amount must be positive")]
    InvalidAmount,
}
