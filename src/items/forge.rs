//! Anvil repair and sacrifice-reset rules.

use super::types::Item;

/// Two pieces can be fused on the anvil when they are the same named item
/// of the same rarity but distinct copies.
pub fn can_repair_with_anvil(target: &Item, sacrifice: &Item) -> bool {
    target.slot == sacrifice.slot
        && target.name == sacrifice.name
        && target.rarity == sacrifice.rarity
        && target.id != sacrifice.id
}

/// Adds the sacrifice's durability to the target, capped at its maximum.
pub fn repair_with_anvil(target: &mut Item, sacrifice: &Item) {
    target.durability = target
        .durability
        .saturating_add(sacrifice.durability)
        .min(target.max_durability);
}

/// Items in `pool` that may be sacrificed to reset `target`: same slot and
/// rarity, different id.
pub fn reset_candidates<'a>(pool: &'a [Item], target: &Item) -> Vec<&'a Item> {
    pool.iter()
        .filter(|i| i.slot == target.slot && i.rarity == target.rarity && i.id != target.id)
        .collect()
}

/// Returns the item to level 1 with full durability and its rarity's base
/// upgrade cost. Sell price and base stat are untouched.
pub fn reset_item(target: &mut Item) {
    target.level = 1;
    target.durability = target.max_durability;
    target.upgrade_cost = target.rarity.base_upgrade_cost();
}
