use super::generation::{chest_rarity_weights, generate_item, roll_rarity_weighted, roll_slot};
use super::types::Item;
use crate::core::constants::{
    CHEST_MAX_ITEMS, CHEST_MIN_ITEMS, ITEM_DROP_CHANCE, ITEM_DROP_MIN_ZONE,
};
use rand::Rng;

/// Rolls the 2-4 items inside a chest bought for `cost` coins.
pub fn roll_chest_items(cost: u64, rng: &mut impl Rng) -> Vec<Item> {
    let weights = chest_rarity_weights(cost);
    let count = rng.gen_range(CHEST_MIN_ITEMS..=CHEST_MAX_ITEMS);
    (0..count)
        .map(|_| {
            let slot = roll_slot(rng);
            let rarity = roll_rarity_weighted(&weights, rng);
            generate_item(slot, Some(rarity), false, rng)
        })
        .collect()
}

pub fn enemy_can_drop_items(zone: u32) -> bool {
    zone >= ITEM_DROP_MIN_ZONE
}

/// Independent 15% roll for a defeated item-carrying enemy to leave gear behind.
pub fn try_drop_from_enemy(can_drop: bool, rng: &mut impl Rng) -> Option<Item> {
    if !can_drop || rng.gen::<f64>() >= ITEM_DROP_CHANCE {
        return None;
    }
    let slot = roll_slot(rng);
    Some(generate_item(slot, None, false, rng))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::items::types::Rarity;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_chest_item_count_in_range() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let mut seen = [false; 5];
        for _ in 0..300 {
            let items = roll_chest_items(100, &mut rng);
            assert!((2..=4).contains(&items.len()));
            seen[items.len()] = true;
        }
        assert!(seen[2] && seen[3] && seen[4]);
    }

    #[test]
    fn test_expensive_chest_rarity_floor() {
        let mut rng = ChaCha8Rng::seed_from_u64(2);
        for _ in 0..200 {
            for item in roll_chest_items(400, &mut rng) {
                assert!(item.rarity >= Rarity::Epic);
            }
        }
    }

    #[test]
    fn test_low_zone_never_drops() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        assert!(!enemy_can_drop_items(9));
        for _ in 0..1000 {
            assert!(try_drop_from_enemy(false, &mut rng).is_none());
        }
    }

    #[test]
    fn test_drop_frequency_near_fifteen_percent() {
        let mut rng = ChaCha8Rng::seed_from_u64(4);
        assert!(enemy_can_drop_items(10));
        let drops = (0..10_000)
            .filter(|_| try_drop_from_enemy(true, &mut rng).is_some())
            .count();
        assert!(drops > 1300 && drops < 1700, "got {drops}");
    }
}
