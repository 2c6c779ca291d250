use crate::core::constants::*;
use crate::items::drops::enemy_can_drop_items;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Enemy {
    pub name: String,
    pub hp: u64,
    pub max_hp: u64,
    pub atk: u64,
    pub def: u64,
    pub zone: u32,
    pub can_drop_items: bool,
}

impl Enemy {
    pub fn is_alive(&self) -> bool {
        self.hp > 0
    }

    pub fn take_damage(&mut self, amount: u64) {
        self.hp = self.hp.saturating_sub(amount);
    }
}

/// One name per five-zone tier; the last name repeats forever.
const ENEMY_NAMES: [&str; 20] = [
    "Goblin Warrior",
    "Shadow Wolf",
    "Stone Golem",
    "Fire Imp",
    "Ice Troll",
    "Dark Mage",
    "Lightning Drake",
    "Void Wraith",
    "Crystal Beast",
    "Ancient Dragon",
    "Chaos Lord",
    "Nightmare King",
    "Abyssal Terror",
    "Cosmic Horror",
    "Reality Bender",
    "Dimension Lord",
    "Eternal Guardian",
    "Void Emperor",
    "Chaos Incarnate",
    "Reality Destroyer",
];

pub fn enemy_name_for_zone(zone: u32) -> &'static str {
    let tier = (zone.saturating_sub(1) / ZONES_PER_ENEMY_TIER) as usize;
    ENEMY_NAMES[tier.min(ENEMY_NAMES.len() - 1)]
}

fn grow(value: u64, factor: f64, exponent: u32) -> u64 {
    (value as f64 * factor.powi(exponent as i32)).floor() as u64
}

/// Linear stats for every zone, with exponential catch-up from zone 10 on.
/// Zone alone determines the enemy.
pub fn generate_enemy(zone: u32) -> Enemy {
    let z = zone as u64;
    let mut hp = ENEMY_BASE_HP as u64 + ENEMY_HP_PER_ZONE as u64 * z;
    let mut atk = ENEMY_BASE_ATK as u64 + ENEMY_ATK_PER_ZONE as u64 * z;
    let mut def = ENEMY_DEF_PER_ZONE as u64 * z;

    if zone >= ENEMY_SCALING_START_ZONE {
        let steps = zone - ENEMY_SCALING_START_ZONE;
        hp = grow(hp, ENEMY_HP_GROWTH, steps);
        atk = grow(atk, ENEMY_ATK_GROWTH, steps);
        def = grow(def, ENEMY_DEF_GROWTH, steps);
    }

    Enemy {
        name: enemy_name_for_zone(zone).to_string(),
        hp,
        max_hp: hp,
        atk,
        def,
        zone,
        can_drop_items: enemy_can_drop_items(zone),
    }
}

pub fn apply_crazy_mode(enemy: &mut Enemy) {
    let (hp_m, atk_m, def_m) = CRAZY_ENEMY_MULTIPLIERS;
    enemy.hp = enemy.hp.saturating_mul(hp_m as u64);
    enemy.max_hp = enemy.max_hp.saturating_mul(hp_m as u64);
    enemy.atk = enemy.atk.saturating_mul(atk_m as u64);
    enemy.def = enemy.def.saturating_mul(def_m as u64);
}

/// Transient encounter state. Never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CombatState {
    pub current_enemy: Option<Enemy>,
    pub log: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linear_zone() {
        let enemy = generate_enemy(1);
        assert_eq!(enemy.name, "Goblin Warrior");
        assert_eq!(enemy.hp, 215);
        assert_eq!(enemy.max_hp, 215);
        assert_eq!(enemy.atk, 28);
        assert_eq!(enemy.def, 2);
        assert!(!enemy.can_drop_items);
    }

    #[test]
    fn test_zone_ten_has_no_extra_growth_yet() {
        let enemy = generate_enemy(10);
        assert_eq!(enemy.hp, 350);
        assert_eq!(enemy.atk, 100);
        assert_eq!(enemy.def, 20);
        assert!(enemy.can_drop_items);
    }

    #[test]
    fn test_exponential_catch_up() {
        let enemy = generate_enemy(12);
        // floor(380 * 1.21), floor(116 * 1.1664), floor(24 * 1.1025)
        assert_eq!(enemy.hp, 459);
        assert_eq!(enemy.atk, 135);
        assert_eq!(enemy.def, 26);
    }

    #[test]
    fn test_name_tiers_clamp() {
        assert_eq!(enemy_name_for_zone(5), "Goblin Warrior");
        assert_eq!(enemy_name_for_zone(6), "Shadow Wolf");
        assert_eq!(enemy_name_for_zone(100), "Reality Destroyer");
        assert_eq!(enemy_name_for_zone(10_000), "Reality Destroyer");
    }

    #[test]
    fn test_crazy_mode_multipliers() {
        let mut enemy = generate_enemy(1);
        apply_crazy_mode(&mut enemy);
        assert_eq!(enemy.hp, 645);
        assert_eq!(enemy.max_hp, 645);
        assert_eq!(enemy.atk, 84);
        assert_eq!(enemy.def, 4);
    }

    #[test]
    fn test_take_damage_floors_at_zero() {
        let mut enemy = generate_enemy(1);
        enemy.take_damage(10_000);
        assert_eq!(enemy.hp, 0);
        assert!(!enemy.is_alive());
    }
}
