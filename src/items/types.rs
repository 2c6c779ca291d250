use crate::core::constants::{
    ARMOR_DEF_PER_LEVEL, ARMOR_SELL_RATIO, DURABILITY_BY_RARITY, GEAR_UPGRADE_COSTS,
    RELIC_ATK_PER_LEVEL, RELIC_BASE_UPGRADE_COST, RELIC_COST_PER_POINT, RELIC_DEF_PER_LEVEL,
    WEAPON_ATK_PER_LEVEL, WEAPON_SELL_RATIO,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EquipmentSlot {
    Weapon,
    Armor,
}

impl EquipmentSlot {
    pub fn name(&self) -> &'static str {
        match self {
            EquipmentSlot::Weapon => "Weapon",
            EquipmentSlot::Armor => "Armor",
        }
    }

    /// Starting sell price for an item of this slot with the given base stat.
    pub fn base_sell_price(&self, base_power: u32) -> u64 {
        let ratio = match self {
            EquipmentSlot::Weapon => WEAPON_SELL_RATIO,
            EquipmentSlot::Armor => ARMOR_SELL_RATIO,
        };
        (base_power as f64 * ratio).floor() as u64
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Rarity {
    Common = 0,
    Rare = 1,
    Epic = 2,
    Legendary = 3,
    Mythical = 4,
}

impl Rarity {
    /// All rarities, lowest first. Indexes line up with the per-rarity constant tables.
    pub const ALL: [Rarity; 5] = [
        Rarity::Common,
        Rarity::Rare,
        Rarity::Epic,
        Rarity::Legendary,
        Rarity::Mythical,
    ];

    /// Returns the display name for this rarity tier.
    pub fn name(&self) -> &'static str {
        match self {
            Rarity::Common => "Common",
            Rarity::Rare => "Rare",
            Rarity::Epic => "Epic",
            Rarity::Legendary => "Legendary",
            Rarity::Mythical => "Mythical",
        }
    }

    pub fn index(&self) -> usize {
        *self as usize
    }

    pub fn max_durability(&self) -> u32 {
        DURABILITY_BY_RARITY[self.index()]
    }

    pub fn base_upgrade_cost(&self) -> u64 {
        GEAR_UPGRADE_COSTS[self.index()]
    }
}

/// A weapon or armor piece. `slot` is the discriminant; `base_power` is
/// attack for weapons and defense for armor, with any enchantment already
/// baked in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "ItemRecord")]
pub struct Item {
    pub id: String,
    pub slot: EquipmentSlot,
    pub name: String,
    pub rarity: Rarity,
    pub base_power: u32,
    pub level: u32,
    pub upgrade_cost: u64,
    pub sell_price: u64,
    pub durability: u32,
    pub max_durability: u32,
    pub is_enchanted: bool,
}

/// Saved form of an [`Item`]. Only identity and the rolled stat are
/// required; the rest is rebuilt from rarity and slot when missing.
#[derive(Deserialize)]
struct ItemRecord {
    id: String,
    slot: EquipmentSlot,
    name: String,
    rarity: Rarity,
    base_power: u32,
    level: Option<u32>,
    upgrade_cost: Option<u64>,
    sell_price: Option<u64>,
    durability: Option<u32>,
    max_durability: Option<u32>,
    #[serde(default)]
    is_enchanted: bool,
}

impl From<ItemRecord> for Item {
    fn from(record: ItemRecord) -> Self {
        let max_durability = record
            .max_durability
            .unwrap_or_else(|| record.rarity.max_durability());
        Item {
            level: record.level.unwrap_or(1).max(1),
            upgrade_cost: record
                .upgrade_cost
                .unwrap_or_else(|| record.rarity.base_upgrade_cost()),
            sell_price: record
                .sell_price
                .unwrap_or_else(|| record.slot.base_sell_price(record.base_power)),
            durability: record.durability.unwrap_or(max_durability).min(max_durability),
            max_durability,
            id: record.id,
            slot: record.slot,
            name: record.name,
            rarity: record.rarity,
            base_power: record.base_power,
            is_enchanted: record.is_enchanted,
        }
    }
}

impl Item {
    pub fn is_weapon(&self) -> bool {
        self.slot == EquipmentSlot::Weapon
    }

    /// Stat contributed while equipped: base plus the per-level step for the slot.
    pub fn effective_power(&self) -> u32 {
        let step = match self.slot {
            EquipmentSlot::Weapon => WEAPON_ATK_PER_LEVEL,
            EquipmentSlot::Armor => ARMOR_DEF_PER_LEVEL,
        };
        self.base_power + self.level.saturating_sub(1) * step
    }

    /// Loses one point of durability, never going below zero.
    pub fn wear(&mut self) {
        self.durability = self.durability.saturating_sub(1);
    }
}

/// A relic from the Yojef market. Same shape family as [`Item`], with a
/// purchase price instead of durability.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "RelicRecord")]
pub struct Relic {
    pub id: String,
    pub slot: EquipmentSlot,
    pub name: String,
    pub base_power: u32,
    pub level: u32,
    pub upgrade_cost: u64,
    pub cost: u64,
    pub description: String,
}

#[derive(Deserialize)]
struct RelicRecord {
    id: String,
    slot: EquipmentSlot,
    name: String,
    base_power: u32,
    level: Option<u32>,
    upgrade_cost: Option<u64>,
    cost: Option<u64>,
    #[serde(default)]
    description: String,
}

impl From<RelicRecord> for Relic {
    fn from(record: RelicRecord) -> Self {
        Relic {
            level: record.level.unwrap_or(1).max(1),
            upgrade_cost: record.upgrade_cost.unwrap_or(RELIC_BASE_UPGRADE_COST),
            cost: record
                .cost
                .unwrap_or(record.base_power as u64 * RELIC_COST_PER_POINT),
            id: record.id,
            slot: record.slot,
            name: record.name,
            base_power: record.base_power,
            description: record.description,
        }
    }
}

impl Relic {
    pub fn effective_power(&self) -> u32 {
        let step = match self.slot {
            EquipmentSlot::Weapon => RELIC_ATK_PER_LEVEL,
            EquipmentSlot::Armor => RELIC_DEF_PER_LEVEL,
        };
        self.base_power + self.level.saturating_sub(1) * step
    }
}

#[cfg(test)]
pub(crate) fn test_item(id: &str, slot: EquipmentSlot, rarity: Rarity, base_power: u32) -> Item {
    Item {
        id: id.to_string(),
        slot,
        name: format!("Test {}", slot.name()),
        rarity,
        base_power,
        level: 1,
        upgrade_cost: rarity.base_upgrade_cost(),
        sell_price: 10,
        durability: rarity.max_durability(),
        max_durability: rarity.max_durability(),
        is_enchanted: false,
    }
}
