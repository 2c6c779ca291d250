//! Collection book: which item names have ever been found.

use super::types::{EquipmentSlot, Item, Rarity};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RarityCounts {
    pub common: u64,
    pub rare: u64,
    pub epic: u64,
    pub legendary: u64,
    pub mythical: u64,
}

impl RarityCounts {
    pub fn get(&self, rarity: Rarity) -> u64 {
        match rarity {
            Rarity::Common => self.common,
            Rarity::Rare => self.rare,
            Rarity::Epic => self.epic,
            Rarity::Legendary => self.legendary,
            Rarity::Mythical => self.mythical,
        }
    }

    fn increment(&mut self, rarity: Rarity) {
        let slot = match rarity {
            Rarity::Common => &mut self.common,
            Rarity::Rare => &mut self.rare,
            Rarity::Epic => &mut self.epic,
            Rarity::Legendary => &mut self.legendary,
            Rarity::Mythical => &mut self.mythical,
        };
        *slot += 1;
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CollectionBook {
    pub weapons: BTreeSet<String>,
    pub armor: BTreeSet<String>,
    pub total_weapons_found: u64,
    pub total_armor_found: u64,
    pub rarity_stats: RarityCounts,
}

impl CollectionBook {
    /// Records an item. Returns true if its name was new to the book.
    pub fn record(&mut self, item: &Item) -> bool {
        let (names, total) = match item.slot {
            EquipmentSlot::Weapon => (&mut self.weapons, &mut self.total_weapons_found),
            EquipmentSlot::Armor => (&mut self.armor, &mut self.total_armor_found),
        };
        if !names.insert(item.name.clone()) {
            return false;
        }
        *total += 1;
        self.rarity_stats.increment(item.rarity);
        true
    }

    pub fn has_found(&self, slot: EquipmentSlot, name: &str) -> bool {
        match slot {
            EquipmentSlot::Weapon => self.weapons.contains(name),
            EquipmentSlot::Armor => self.armor.contains(name),
        }
    }
}
