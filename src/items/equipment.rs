use super::types::{EquipmentSlot, Item, Relic};
use crate::core::constants::MAX_EQUIPPED_RELICS;
use crate::persistence::lenient::vec_skipping_malformed;
use serde::{Deserialize, Serialize};

/// Owned gear plus what is currently equipped.
///
/// Equipped gear and relics are stored as ids into the owned lists, so an
/// upgrade to an owned item is always what the equipped slot sees.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Inventory {
    #[serde(deserialize_with = "vec_skipping_malformed")]
    pub weapons: Vec<Item>,
    #[serde(deserialize_with = "vec_skipping_malformed")]
    pub armor: Vec<Item>,
    #[serde(deserialize_with = "vec_skipping_malformed")]
    pub relics: Vec<Relic>,
    pub current_weapon: Option<String>,
    pub current_armor: Option<String>,
    pub equipped_relics: Vec<String>,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self, slot: EquipmentSlot) -> &Vec<Item> {
        match slot {
            EquipmentSlot::Weapon => &self.weapons,
            EquipmentSlot::Armor => &self.armor,
        }
    }

    pub fn items_mut(&mut self, slot: EquipmentSlot) -> &mut Vec<Item> {
        match slot {
            EquipmentSlot::Weapon => &mut self.weapons,
            EquipmentSlot::Armor => &mut self.armor,
        }
    }

    pub fn find(&self, slot: EquipmentSlot, id: &str) -> Option<&Item> {
        self.items(slot).iter().find(|i| i.id == id)
    }

    pub fn find_mut(&mut self, slot: EquipmentSlot, id: &str) -> Option<&mut Item> {
        self.items_mut(slot).iter_mut().find(|i| i.id == id)
    }

    /// Adds an item to the list matching its slot.
    pub fn add(&mut self, item: Item) {
        self.items_mut(item.slot).push(item);
    }

    /// Removes and returns an owned item. Equipped status is not checked here.
    pub fn take(&mut self, slot: EquipmentSlot, id: &str) -> Option<Item> {
        let list = self.items_mut(slot);
        let index = list.iter().position(|i| i.id == id)?;
        Some(list.remove(index))
    }

    pub fn equipped_id(&self, slot: EquipmentSlot) -> Option<&str> {
        match slot {
            EquipmentSlot::Weapon => self.current_weapon.as_deref(),
            EquipmentSlot::Armor => self.current_armor.as_deref(),
        }
    }

    pub fn is_equipped(&self, slot: EquipmentSlot, id: &str) -> bool {
        self.equipped_id(slot) == Some(id)
    }

    pub fn equipped(&self, slot: EquipmentSlot) -> Option<&Item> {
        let id = self.equipped_id(slot)?;
        self.find(slot, id)
    }

    pub fn equipped_mut(&mut self, slot: EquipmentSlot) -> Option<&mut Item> {
        let id = self.equipped_id(slot)?.to_string();
        self.find_mut(slot, &id)
    }

    pub fn current_weapon(&self) -> Option<&Item> {
        self.equipped(EquipmentSlot::Weapon)
    }

    pub fn current_armor(&self) -> Option<&Item> {
        self.equipped(EquipmentSlot::Armor)
    }

    /// Equips an owned item. Returns false if the id is not owned.
    pub fn equip(&mut self, slot: EquipmentSlot, id: &str) -> bool {
        if self.find(slot, id).is_none() {
            return false;
        }
        let id = Some(id.to_string());
        match slot {
            EquipmentSlot::Weapon => self.current_weapon = id,
            EquipmentSlot::Armor => self.current_armor = id,
        }
        true
    }

    pub fn unequip(&mut self, slot: EquipmentSlot) -> bool {
        let slot_ref = match slot {
            EquipmentSlot::Weapon => &mut self.current_weapon,
            EquipmentSlot::Armor => &mut self.current_armor,
        };
        slot_ref.take().is_some()
    }

    pub fn find_relic(&self, id: &str) -> Option<&Relic> {
        self.relics.iter().find(|r| r.id == id)
    }

    pub fn find_relic_mut(&mut self, id: &str) -> Option<&mut Relic> {
        self.relics.iter_mut().find(|r| r.id == id)
    }

    pub fn is_relic_equipped(&self, id: &str) -> bool {
        self.equipped_relics.iter().any(|r| r == id)
    }

    pub fn relic_slots_full(&self) -> bool {
        self.equipped_relics.len() >= MAX_EQUIPPED_RELICS
    }

    pub fn iter_equipped_relics(&self) -> impl Iterator<Item = &Relic> {
        self.equipped_relics
            .iter()
            .filter_map(|id| self.find_relic(id))
    }

    pub fn iter_all_items(&self) -> impl Iterator<Item = &Item> {
        self.weapons.iter().chain(self.armor.iter())
    }

    /// Drops equip references that no longer resolve and enforces the relic cap.
    pub fn repair_references(&mut self) {
        if let Some(id) = self.current_weapon.clone() {
            if self.find(EquipmentSlot::Weapon, &id).is_none() {
                self.current_weapon = None;
            }
        }
        if let Some(id) = self.current_armor.clone() {
            if self.find(EquipmentSlot::Armor, &id).is_none() {
                self.current_armor = None;
            }
        }

        let owned: Vec<String> = self.relics.iter().map(|r| r.id.clone()).collect();
        let mut seen = Vec::new();
        self.equipped_relics.retain(|id| {
            if owned.contains(id) && !seen.contains(id) {
                seen.push(id.clone());
                true
            } else {
                false
            }
        });
        self.equipped_relics.truncate(MAX_EQUIPPED_RELICS);
    }
}

#[cfg(test)]
mod tests {
    use super::super::types::{test_item, Rarity};
    use super::*;

    fn relic(id: &str) -> Relic {
        Relic {
            id: id.to_string(),
            slot: EquipmentSlot::Weapon,
            name: "Primordial Sword".to_string(),
            base_power: 90,
            level: 1,
            upgrade_cost: 25,
            cost: 450,
            description: String::new(),
        }
    }

    #[test]
    fn test_inventory_starts_empty() {
        let inv = Inventory::new();
        assert!(inv.weapons.is_empty());
        assert!(inv.current_weapon().is_none());
        assert_eq!(inv.iter_equipped_relics().count(), 0);
    }

    #[test]
    fn test_equip_requires_ownership() {
        let mut inv = Inventory::new();
        assert!(!inv.equip(EquipmentSlot::Weapon, "missing"));
        inv.add(test_item("w1", EquipmentSlot::Weapon, Rarity::Common, 15));
        assert!(inv.equip(EquipmentSlot::Weapon, "w1"));
        assert_eq!(inv.current_weapon().map(|w| w.id.as_str()), Some("w1"));
    }

    #[test]
    fn test_equip_wrong_slot_rejected() {
        let mut inv = Inventory::new();
        inv.add(test_item("a1", EquipmentSlot::Armor, Rarity::Common, 8));
        assert!(!inv.equip(EquipmentSlot::Weapon, "a1"));
        assert!(inv.equip(EquipmentSlot::Armor, "a1"));
    }

    #[test]
    fn test_equipped_view_tracks_owned_mutation() {
        let mut inv = Inventory::new();
        inv.add(test_item("w1", EquipmentSlot::Weapon, Rarity::Rare, 25));
        inv.equip(EquipmentSlot::Weapon, "w1");
        inv.find_mut(EquipmentSlot::Weapon, "w1").unwrap().level = 3;
        assert_eq!(inv.current_weapon().unwrap().level, 3);
    }

    #[test]
    fn test_unequip() {
        let mut inv = Inventory::new();
        inv.add(test_item("w1", EquipmentSlot::Weapon, Rarity::Rare, 25));
        inv.equip(EquipmentSlot::Weapon, "w1");
        assert!(inv.unequip(EquipmentSlot::Weapon));
        assert!(!inv.unequip(EquipmentSlot::Weapon));
        assert!(inv.current_weapon().is_none());
    }

    #[test]
    fn test_take_removes_item() {
        let mut inv = Inventory::new();
        inv.add(test_item("a1", EquipmentSlot::Armor, Rarity::Common, 8));
        assert!(inv.take(EquipmentSlot::Armor, "a1").is_some());
        assert!(inv.take(EquipmentSlot::Armor, "a1").is_none());
    }

    #[test]
    fn test_repair_references_drops_dangling_ids() {
        let mut inv = Inventory::new();
        inv.current_weapon = Some("ghost".to_string());
        inv.current_armor = Some("ghost".to_string());
        inv.repair_references();
        assert!(inv.current_weapon.is_none());
        assert!(inv.current_armor.is_none());
    }

    #[test]
    fn test_repair_references_caps_relics() {
        let mut inv = Inventory::new();
        for i in 0..7 {
            let id = format!("r{i}");
            inv.relics.push(relic(&id));
            inv.equipped_relics.push(id);
        }
        inv.equipped_relics.push("r0".to_string());
        inv.equipped_relics.push("unowned".to_string());
        inv.repair_references();
        assert_eq!(inv.equipped_relics.len(), MAX_EQUIPPED_RELICS);
        assert!(inv.equipped_relics.iter().all(|id| inv.find_relic(id).is_some()));
        assert!(inv.relic_slots_full());
    }
}
