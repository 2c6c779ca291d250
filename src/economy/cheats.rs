use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CheatKind {
    InfiniteCoins,
    InfiniteGems,
    ObtainAnyItem,
}

impl CheatKind {
    pub const ALL: [CheatKind; 3] = [
        CheatKind::InfiniteCoins,
        CheatKind::InfiniteGems,
        CheatKind::ObtainAnyItem,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            CheatKind::InfiniteCoins => "Infinite Coins",
            CheatKind::InfiniteGems => "Infinite Gems",
            CheatKind::ObtainAnyItem => "Obtain Any Item",
        }
    }
}

/// Player-facing toggles. These are part of the game, not a security boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Cheats {
    pub infinite_coins: bool,
    pub infinite_gems: bool,
    pub obtain_any_item: bool,
}

impl Cheats {
    pub fn is_enabled(&self, kind: CheatKind) -> bool {
        match kind {
            CheatKind::InfiniteCoins => self.infinite_coins,
            CheatKind::InfiniteGems => self.infinite_gems,
            CheatKind::ObtainAnyItem => self.obtain_any_item,
        }
    }

    /// Flips the flag and returns its new value.
    pub fn toggle(&mut self, kind: CheatKind) -> bool {
        let flag = match kind {
            CheatKind::InfiniteCoins => &mut self.infinite_coins,
            CheatKind::InfiniteGems => &mut self.infinite_gems,
            CheatKind::ObtainAnyItem => &mut self.obtain_any_item,
        };
        *flag = !*flag;
        *flag
    }
}
