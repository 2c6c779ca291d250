//! Weapon and armor actions: equip, upgrade, sell, chests and the forge.

use super::{ActionError, Game};
use crate::character::derived_stats::apply_derived_stats;
use crate::core::constants::{CHEST_BONUS_GEMS_MAX, CHEST_BONUS_GEMS_MIN, MYTHICAL_COST};
use crate::effects::EffectColor;
use crate::items::drops::roll_chest_items;
use crate::items::forge::{can_repair_with_anvil, repair_with_anvil, reset_candidates, reset_item};
use crate::items::generation::{generate_item, generate_mythical};
use crate::items::types::{EquipmentSlot, Item, Rarity};
use crate::persistence::store::KeyValueStore;
use rand::Rng;

/// Sacrificed copies needed to reset an item.
const RESET_SACRIFICES: usize = 2;

#[derive(Debug, Clone, PartialEq)]
pub struct ChestReward {
    pub items: Vec<Item>,
    pub bonus_gems: u64,
}

impl<S: KeyValueStore, R: Rng> Game<S, R> {
    fn owned(&self, slot: EquipmentSlot, id: &str) -> Result<&Item, ActionError> {
        self.state
            .inventory
            .find(slot, id)
            .ok_or_else(|| ActionError::UnknownItem(id.to_string()))
    }

    fn ensure_unequipped(&self, slot: EquipmentSlot, id: &str) -> Result<(), ActionError> {
        if self.state.inventory.is_equipped(slot, id) {
            Err(ActionError::ItemEquipped(id.to_string()))
        } else {
            Ok(())
        }
    }

    pub fn equip(&mut self, slot: EquipmentSlot, id: &str) -> Result<(), ActionError> {
        self.owned(slot, id)?;
        self.state.inventory.equip(slot, id);
        apply_derived_stats(&mut self.state);
        self.commit(Ok(()))
    }

    pub fn equip_weapon(&mut self, id: &str) -> Result<(), ActionError> {
        self.equip(EquipmentSlot::Weapon, id)
    }

    pub fn equip_armor(&mut self, id: &str) -> Result<(), ActionError> {
        self.equip(EquipmentSlot::Armor, id)
    }

    /// Returns false when the slot was already empty.
    pub fn unequip(&mut self, slot: EquipmentSlot) -> bool {
        let changed = self.state.inventory.unequip(slot);
        if changed {
            apply_derived_stats(&mut self.state);
            let _ = self.commit(Ok(()));
        }
        changed
    }

    /// Spends the item's gem upgrade cost for one level. Upgrade cost grows
    /// by half and sell price by a fifth, both rounded down.
    pub fn upgrade_item(&mut self, slot: EquipmentSlot, id: &str) -> Result<u32, ActionError> {
        let cost = self.owned(slot, id)?.upgrade_cost;
        self.state.spend_gems(cost)?;

        let Some(item) = self.state.inventory.find_mut(slot, id) else {
            return Err(ActionError::UnknownItem(id.to_string()));
        };
        item.level += 1;
        item.upgrade_cost = item.upgrade_cost * 3 / 2;
        item.sell_price = item.sell_price * 6 / 5;
        let level = item.level;

        apply_derived_stats(&mut self.state);
        self.effects
            .text(format!("{} Upgraded!", slot.name()), EffectColor::Blue);
        self.commit(Ok(level))
    }

    pub fn upgrade_weapon(&mut self, id: &str) -> Result<u32, ActionError> {
        self.upgrade_item(EquipmentSlot::Weapon, id)
    }

    pub fn upgrade_armor(&mut self, id: &str) -> Result<u32, ActionError> {
        self.upgrade_item(EquipmentSlot::Armor, id)
    }

    /// Sells an unequipped item for its sell price.
    pub fn sell_item(&mut self, slot: EquipmentSlot, id: &str) -> Result<u64, ActionError> {
        self.owned(slot, id)?;
        self.ensure_unequipped(slot, id)?;
        let item = self
            .state
            .inventory
            .take(slot, id)
            .ok_or_else(|| ActionError::UnknownItem(id.to_string()))?;
        self.state.coins = self.state.coins.saturating_add(item.sell_price);
        self.effects
            .text(format!("+{} coins", item.sell_price), EffectColor::Yellow);
        self.commit(Ok(item.sell_price))
    }

    pub fn sell_weapon(&mut self, id: &str) -> Result<u64, ActionError> {
        self.sell_item(EquipmentSlot::Weapon, id)
    }

    pub fn sell_armor(&mut self, id: &str) -> Result<u64, ActionError> {
        self.sell_item(EquipmentSlot::Armor, id)
    }

    /// Throws an unequipped item away for nothing.
    pub fn discard_item(&mut self, slot: EquipmentSlot, id: &str) -> Result<(), ActionError> {
        self.owned(slot, id)?;
        self.ensure_unequipped(slot, id)?;
        self.state.inventory.take(slot, id);
        self.commit(Ok(()))
    }

    /// Buys a chest for `cost` coins. Pricier chests have better rarity odds.
    pub fn open_chest(&mut self, cost: u64) -> Result<ChestReward, ActionError> {
        if cost == 0 {
            return Err(ActionError::InvalidAmount);
        }
        self.state.spend_coins(cost)?;

        let items = roll_chest_items(cost, &mut self.rng);
        for item in &items {
            self.state.acquire_item(item.clone());
        }
        let base_gems = self.rng.gen_range(CHEST_BONUS_GEMS_MIN..CHEST_BONUS_GEMS_MAX);
        let bonus_gems = base_gems * self.state.knowledge_streak.multiplier_tenths() / 10;
        self.state.earn_gems(bonus_gems);
        self.state.statistics.chests_opened += 1;

        self.effects.text(
            format!("+{} items, +{} gems!", items.len(), bonus_gems),
            EffectColor::Green,
        );
        tracing::debug!(cost, items = items.len(), bonus_gems, "chest opened");
        self.commit(Ok(ChestReward { items, bonus_gems }))
    }

    pub fn purchase_mythical(&mut self) -> Result<Item, ActionError> {
        self.state.spend_coins(MYTHICAL_COST)?;
        let item = generate_mythical(&mut self.rng);
        self.state.acquire_item(item.clone());
        self.effects.text("Mythical Item Acquired!", EffectColor::Red);
        self.commit(Ok(item))
    }

    /// Grants a fresh item of exactly `slot` and `rarity` while the
    /// obtain-any-item cheat is on.
    pub fn obtain_item(&mut self, slot: EquipmentSlot, rarity: Rarity) -> Result<Item, ActionError> {
        if !self.state.cheats.obtain_any_item {
            return Err(ActionError::CheatDisabled);
        }
        let item = generate_item(slot, Some(rarity), false, &mut self.rng);
        self.state.acquire_item(item.clone());
        self.commit(Ok(item))
    }

    /// Fuses a duplicate into `target_id`, adding its durability up to the
    /// maximum. The sacrifice is destroyed.
    pub fn repair_with_anvil(
        &mut self,
        slot: EquipmentSlot,
        target_id: &str,
        sacrifice_id: &str,
    ) -> Result<u32, ActionError> {
        let target = self.owned(slot, target_id)?;
        let sacrifice = self.owned(slot, sacrifice_id)?;
        if !can_repair_with_anvil(target, sacrifice) {
            return Err(ActionError::IncompatibleItems);
        }
        self.ensure_unequipped(slot, sacrifice_id)?;

        let sacrifice = self
            .state
            .inventory
            .take(slot, sacrifice_id)
            .ok_or_else(|| ActionError::UnknownItem(sacrifice_id.to_string()))?;
        let Some(target) = self.state.inventory.find_mut(slot, target_id) else {
            return Err(ActionError::UnknownItem(target_id.to_string()));
        };
        repair_with_anvil(target, &sacrifice);
        let durability = target.durability;

        self.effects.text("Item Repaired!", EffectColor::Orange);
        self.commit(Ok(durability))
    }

    /// Resets `target_id` to level 1 at full durability by destroying two
    /// other unequipped items of the same slot and rarity.
    pub fn reset_item_with_sacrifice(
        &mut self,
        slot: EquipmentSlot,
        target_id: &str,
    ) -> Result<Vec<Item>, ActionError> {
        let target = self.owned(slot, target_id)?;
        let inventory = &self.state.inventory;
        let chosen: Vec<String> = reset_candidates(inventory.items(slot), target)
            .into_iter()
            .filter(|i| !inventory.is_equipped(slot, &i.id))
            .take(RESET_SACRIFICES)
            .map(|i| i.id.clone())
            .collect();
        if chosen.len() < RESET_SACRIFICES {
            return Err(ActionError::NotEnoughSacrifices {
                needed: RESET_SACRIFICES,
                found: chosen.len(),
            });
        }

        let consumed: Vec<Item> = chosen
            .iter()
            .filter_map(|id| self.state.inventory.take(slot, id))
            .collect();
        if let Some(target) = self.state.inventory.find_mut(slot, target_id) {
            reset_item(target);
        }
        apply_derived_stats(&mut self.state);

        self.effects.text("Item Reset!", EffectColor::Blue);
        self.commit(Ok(consumed))
    }
}
