use super::names::{armor_names, weapon_names, RELIC_ARMOR_NAMES, RELIC_WEAPON_NAMES};
use super::types::{EquipmentSlot, Item, Relic, Rarity};
use crate::core::constants::*;
use rand::seq::SliceRandom;
use rand::Rng;

/// Opaque unique item id drawn from the caller's RNG, so seeded runs are reproducible.
pub fn new_id(rng: &mut impl Rng) -> String {
    uuid::Builder::from_random_bytes(rng.gen()).into_uuid().to_string()
}

/// Cumulative-weight roulette over [common, rare, epic, legendary, mythical]
/// on a uniform [0, 100) draw.
pub fn roll_rarity_weighted(weights: &[u32; 5], rng: &mut impl Rng) -> Rarity {
    let draw = rng.gen::<f64>() * 100.0;
    let mut cumulative = 0.0;
    for (rarity, weight) in Rarity::ALL.iter().zip(weights) {
        cumulative += *weight as f64;
        if draw < cumulative {
            return *rarity;
        }
    }
    // Only reachable if the weights sum below 100; fall back to the highest weighted tier.
    Rarity::ALL
        .iter()
        .zip(weights)
        .rev()
        .find(|(_, w)| **w > 0)
        .map(|(r, _)| *r)
        .unwrap_or(Rarity::Common)
}

pub fn roll_rarity(rng: &mut impl Rng) -> Rarity {
    roll_rarity_weighted(&DEFAULT_RARITY_WEIGHTS, rng)
}

/// Rarity weights for a chest of the given coin cost. Pricier chests drop
/// the low tiers entirely.
pub fn chest_rarity_weights(cost: u64) -> [u32; 5] {
    if cost >= 1000 {
        [0, 0, 0, 70, 30]
    } else if cost >= 400 {
        [0, 0, 60, 30, 10]
    } else if cost >= 150 {
        [0, 50, 35, 13, 2]
    } else {
        [60, 30, 8, 2, 0]
    }
}

pub fn roll_slot(rng: &mut impl Rng) -> EquipmentSlot {
    if rng.gen_bool(0.5) {
        EquipmentSlot::Weapon
    } else {
        EquipmentSlot::Armor
    }
}

/// Generate a weapon or armor piece.
///
/// `rarity` forces the tier (otherwise the default table is rolled) and
/// `force_enchant` skips the enchantment roll. Enchantment doubles the rolled
/// base stat once, here, and is never recomputed.
pub fn generate_item(
    slot: EquipmentSlot,
    rarity: Option<Rarity>,
    force_enchant: bool,
    rng: &mut impl Rng,
) -> Item {
    let rarity = rarity.unwrap_or_else(|| roll_rarity(rng));

    let (floor, jitter, names) = match slot {
        EquipmentSlot::Weapon => (
            WEAPON_ATK_FLOORS[rarity.index()],
            WEAPON_ATK_JITTER,
            weapon_names(rarity),
        ),
        EquipmentSlot::Armor => (
            ARMOR_DEF_FLOORS[rarity.index()],
            ARMOR_DEF_JITTER,
            armor_names(rarity),
        ),
    };

    let name = names.choose(rng).copied().unwrap_or("Unknown");
    let mut base_power = floor + rng.gen_range(0..jitter);

    let is_enchanted = force_enchant || rng.gen::<f64>() < ENCHANT_CHANCE;
    if is_enchanted {
        base_power *= ENCHANT_MULTIPLIER;
    }

    let max_durability = rarity.max_durability();

    Item {
        id: new_id(rng),
        slot,
        name: if is_enchanted {
            format!("Enchanted {}", name)
        } else {
            name.to_string()
        },
        rarity,
        base_power,
        level: 1,
        upgrade_cost: rarity.base_upgrade_cost(),
        sell_price: slot.base_sell_price(base_power),
        durability: max_durability,
        max_durability,
        is_enchanted,
    }
}

pub fn generate_weapon(rarity: Option<Rarity>, force_enchant: bool, rng: &mut impl Rng) -> Item {
    generate_item(EquipmentSlot::Weapon, rarity, force_enchant, rng)
}

pub fn generate_armor(rarity: Option<Rarity>, force_enchant: bool, rng: &mut impl Rng) -> Item {
    generate_item(EquipmentSlot::Armor, rarity, force_enchant, rng)
}

/// A weapon or armor piece (50/50) of forced mythical rarity.
pub fn generate_mythical(rng: &mut impl Rng) -> Item {
    let slot = roll_slot(rng);
    generate_item(slot, Some(Rarity::Mythical), false, rng)
}

pub fn generate_relic(rng: &mut impl Rng) -> Relic {
    let slot = roll_slot(rng);
    let (names, base_power, description) = match slot {
        EquipmentSlot::Weapon => (
            RELIC_WEAPON_NAMES,
            RELIC_ATK_MIN + rng.gen_range(0..RELIC_ATK_SPREAD),
            "A powerful relic weapon from ancient times",
        ),
        EquipmentSlot::Armor => (
            RELIC_ARMOR_NAMES,
            RELIC_DEF_MIN + rng.gen_range(0..RELIC_DEF_SPREAD),
            "A powerful relic armor from ancient times",
        ),
    };
    let name = names.choose(rng).copied().unwrap_or("Nameless Relic");

    Relic {
        id: new_id(rng),
        slot,
        name: name.to_string(),
        base_power,
        level: 1,
        upgrade_cost: RELIC_BASE_UPGRADE_COST,
        cost: base_power as u64 * RELIC_COST_PER_POINT,
        description: description.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_weapon_stat_within_rarity_band() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        for rarity in Rarity::ALL {
            for _ in 0..50 {
                let item = generate_weapon(Some(rarity), false, &mut rng);
                let floor = WEAPON_ATK_FLOORS[rarity.index()];
                let ceiling = floor + WEAPON_ATK_JITTER - 1;
                if item.is_enchanted {
                    assert!(item.base_power >= floor * 2 && item.base_power <= ceiling * 2);
                } else {
                    assert!(item.base_power >= floor && item.base_power <= ceiling);
                }
            }
        }
    }

    #[test]
    fn test_armor_stat_within_rarity_band() {
        let mut rng = ChaCha8Rng::seed_from_u64(8);
        for _ in 0..100 {
            let item = generate_armor(Some(Rarity::Epic), false, &mut rng);
            let base = if item.is_enchanted {
                item.base_power / 2
            } else {
                item.base_power
            };
            assert!((25..=29).contains(&base), "got {base}");
        }
    }

    #[test]
    fn test_forced_enchantment_doubles_and_renames() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let item = generate_weapon(Some(Rarity::Common), true, &mut rng);
        assert!(item.is_enchanted);
        assert!(item.name.starts_with("Enchanted "));
        assert!(item.base_power >= 30 && item.base_power <= 48);
        assert_eq!(item.base_power % 2, 0);
    }

    #[test]
    fn test_new_item_starts_fresh() {
        let mut rng = ChaCha8Rng::seed_from_u64(2);
        let item = generate_armor(Some(Rarity::Legendary), false, &mut rng);
        assert_eq!(item.level, 1);
        assert_eq!(item.durability, 150);
        assert_eq!(item.max_durability, 150);
        assert_eq!(item.upgrade_cost, 40);
        assert_eq!(
            item.sell_price,
            (item.base_power as f64 * ARMOR_SELL_RATIO).floor() as u64
        );
    }

    #[test]
    fn test_enchant_rate_is_rare() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let enchanted = (0..4000)
            .filter(|_| generate_weapon(None, false, &mut rng).is_enchanted)
            .count();
        assert!(enchanted > 100 && enchanted < 330, "got {enchanted}");
    }

    #[test]
    fn test_default_rarity_distribution() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let mut counts = [0u32; 5];
        for _ in 0..10_000 {
            counts[roll_rarity(&mut rng).index()] += 1;
        }
        assert!(counts[0] > 3600 && counts[0] < 4400, "common {}", counts[0]);
        assert!(counts[1] > 2600 && counts[1] < 3400, "rare {}", counts[1]);
        assert!(counts[2] > 1700 && counts[2] < 2300, "epic {}", counts[2]);
        assert!(counts[3] > 600 && counts[3] < 1000, "legendary {}", counts[3]);
        assert!(counts[4] > 100 && counts[4] < 320, "mythical {}", counts[4]);
    }

    #[test]
    fn test_chest_weight_tiers() {
        assert_eq!(chest_rarity_weights(100), [60, 30, 8, 2, 0]);
        assert_eq!(chest_rarity_weights(150), [0, 50, 35, 13, 2]);
        assert_eq!(chest_rarity_weights(399), [0, 50, 35, 13, 2]);
        assert_eq!(chest_rarity_weights(400), [0, 0, 60, 30, 10]);
        assert_eq!(chest_rarity_weights(1000), [0, 0, 0, 70, 30]);
        for cost in [0, 150, 400, 1000, 50_000] {
            assert_eq!(chest_rarity_weights(cost).iter().sum::<u32>(), 100);
        }
    }

    #[test]
    fn test_top_chest_never_rolls_low_tiers() {
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let weights = chest_rarity_weights(1000);
        for _ in 0..2000 {
            assert!(roll_rarity_weighted(&weights, &mut rng) >= Rarity::Legendary);
        }
    }

    #[test]
    fn test_basic_chest_never_rolls_mythical() {
        let mut rng = ChaCha8Rng::seed_from_u64(6);
        let weights = chest_rarity_weights(50);
        for _ in 0..2000 {
            assert_ne!(roll_rarity_weighted(&weights, &mut rng), Rarity::Mythical);
        }
    }

    #[test]
    fn test_relic_ranges() {
        let mut rng = ChaCha8Rng::seed_from_u64(9);
        for _ in 0..200 {
            let relic = generate_relic(&mut rng);
            match relic.slot {
                EquipmentSlot::Weapon => assert!((80..120).contains(&relic.base_power)),
                EquipmentSlot::Armor => assert!((60..90).contains(&relic.base_power)),
            }
            assert_eq!(relic.cost, relic.base_power as u64 * 5);
            assert_eq!(relic.upgrade_cost, 25);
            assert_eq!(relic.level, 1);
        }
    }

    #[test]
    fn test_ids_unique_and_seed_stable() {
        let mut a = ChaCha8Rng::seed_from_u64(11);
        let mut b = ChaCha8Rng::seed_from_u64(11);
        let first = new_id(&mut a);
        assert_eq!(first, new_id(&mut b));
        assert_ne!(first, new_id(&mut a));
    }

    #[test]
    fn test_mythical_generation_forces_rarity() {
        let mut rng = ChaCha8Rng::seed_from_u64(12);
        for _ in 0..20 {
            assert_eq!(generate_mythical(&mut rng).rarity, Rarity::Mythical);
        }
    }
}
