//! Static name tables for generated gear and relics.

use super::types::Rarity;

pub fn weapon_names(rarity: Rarity) -> &'static [&'static str] {
    match rarity {
        Rarity::Common => &["Rusty Sword", "Wooden Club", "Stone Axe", "Iron Dagger"],
        Rarity::Rare => &["Steel Blade", "Silver Mace", "Enchanted Bow", "Crystal Staff"],
        Rarity::Epic => &["Flamebrand", "Frostbite", "Thunder Strike", "Shadow Cleaver"],
        Rarity::Legendary => &["Excalibur", "Mjolnir", "Gungnir", "Durandal"],
        Rarity::Mythical => &[
            "Void Reaper",
            "Cosmic Blade",
            "Reality Slicer",
            "Dimension Cutter",
            "Soul Harvester",
            "Infinity Edge",
            "Chaos Bringer",
            "Eternal Destroyer",
        ],
    }
}

pub fn armor_names(rarity: Rarity) -> &'static [&'static str] {
    match rarity {
        Rarity::Common => &["Leather Vest", "Cloth Robe", "Wooden Shield", "Iron Helm"],
        Rarity::Rare => &["Chainmail", "Steel Plate", "Mystic Cloak", "Silver Guard"],
        Rarity::Epic => &["Dragon Scale", "Phoenix Mail", "Void Armor", "Crystal Guard"],
        Rarity::Legendary => &["Divine Aegis", "Eternal Plate", "Shadowweave", "Celestial Ward"],
        Rarity::Mythical => &[
            "Abyssal Aegis",
            "Stellar Fortress",
            "Quantum Shield",
            "Infinity Guard",
            "Void Mantle",
            "Cosmic Barrier",
            "Reality Armor",
            "Dimensional Cloak",
        ],
    }
}

pub const RELIC_WEAPON_NAMES: &[&str] = &[
    "Ancient Blade of Yojef",
    "Primordial Sword",
    "Relic of the First War",
    "Eternal Flame Sword",
    "Void Touched Blade",
    "Starfall Weapon",
    "Temporal Slicer",
    "Reality Breaker",
];

pub const RELIC_ARMOR_NAMES: &[&str] = &[
    "Guardian's Ancient Shield",
    "Primordial Armor",
    "Relic of Protection",
    "Eternal Barrier",
    "Void Touched Guard",
    "Starfall Aegis",
    "Temporal Ward",
    "Reality Defender",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_rarity_has_names() {
        for rarity in Rarity::ALL {
            assert!(!weapon_names(rarity).is_empty());
            assert!(!armor_names(rarity).is_empty());
        }
    }

    #[test]
    fn test_mythical_pools_are_larger() {
        assert_eq!(weapon_names(Rarity::Mythical).len(), 8);
        assert_eq!(armor_names(Rarity::Mythical).len(), 8);
    }
}
