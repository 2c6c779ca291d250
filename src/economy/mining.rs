//! Gem mining on a fixed grid, pickaxe upgrades and the shiny exchange.

use crate::core::constants::{
    MINING_GRID_SIZE, SHINY_DROP_CHANCE, SHINY_DROP_GEMS, SHINY_EXCHANGE_RATE,
    STARTING_MINING_EFFICIENCY,
};
use crate::game::error::ActionError;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MiningTool {
    BasicPickaxe,
    SteelPickaxe,
    DiamondPickaxe,
    MythicalPickaxe,
}

impl MiningTool {
    pub const ALL: [MiningTool; 4] = [
        MiningTool::BasicPickaxe,
        MiningTool::SteelPickaxe,
        MiningTool::DiamondPickaxe,
        MiningTool::MythicalPickaxe,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            MiningTool::BasicPickaxe => "basic_pickaxe",
            MiningTool::SteelPickaxe => "steel_pickaxe",
            MiningTool::DiamondPickaxe => "diamond_pickaxe",
            MiningTool::MythicalPickaxe => "mythical_pickaxe",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        MiningTool::ALL.into_iter().find(|t| t.id() == id)
    }

    /// Gem price.
    pub fn cost(&self) -> u64 {
        match self {
            MiningTool::BasicPickaxe => 50,
            MiningTool::SteelPickaxe => 200,
            MiningTool::DiamondPickaxe => 500,
            MiningTool::MythicalPickaxe => 1000,
        }
    }

    pub fn efficiency_bonus(&self) -> u64 {
        match self {
            MiningTool::BasicPickaxe => 1,
            MiningTool::SteelPickaxe => 2,
            MiningTool::DiamondPickaxe => 3,
            MiningTool::MythicalPickaxe => 5,
        }
    }
}

impl FromStr for MiningTool {
    type Err = ActionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let id = s.trim().to_ascii_lowercase().replace([' ', '-'], "_");
        MiningTool::from_id(&id).ok_or_else(|| ActionError::UnknownTool(s.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Mining {
    pub efficiency: u64,
    pub tools: BTreeSet<MiningTool>,
    pub total_gems_mined: u64,
    pub total_shiny_gems_mined: u64,
}

impl Default for Mining {
    fn default() -> Self {
        Self {
            efficiency: STARTING_MINING_EFFICIENCY,
            tools: BTreeSet::new(),
            total_gems_mined: 0,
            total_shiny_gems_mined: 0,
        }
    }
}

impl Mining {
    pub fn owns(&self, tool: MiningTool) -> bool {
        self.tools.contains(&tool)
    }

    pub fn add_tool(&mut self, tool: MiningTool) {
        if self.tools.insert(tool) {
            self.efficiency += tool.efficiency_bonus();
        }
    }

    pub fn record(&mut self, mined: MineYield) {
        self.total_gems_mined += mined.gems;
        self.total_shiny_gems_mined += mined.shiny_gems;
    }
}

/// What one swing of the pickaxe produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MineYield {
    pub gems: u64,
    pub shiny_gems: u64,
}

impl MineYield {
    pub fn is_shiny(&self) -> bool {
        self.shiny_gems > 0
    }
}

pub fn in_grid(x: u32, y: u32) -> bool {
    x < MINING_GRID_SIZE && y < MINING_GRID_SIZE
}

/// A shiny node replaces the efficiency-based gems with a fixed bundle.
pub fn roll_mine_yield(efficiency: u64, rng: &mut impl Rng) -> MineYield {
    if rng.gen_bool(SHINY_DROP_CHANCE) {
        MineYield {
            gems: SHINY_DROP_GEMS,
            shiny_gems: 1,
        }
    } else {
        MineYield {
            gems: efficiency,
            shiny_gems: 0,
        }
    }
}

pub fn shiny_exchange_value(shiny: u64) -> u64 {
    shiny.saturating_mul(SHINY_EXCHANGE_RATE)
}
