use super::types::{apply_crazy_mode, generate_enemy, Enemy};
use crate::character::derived_stats::apply_derived_stats;
use crate::core::constants::{COINS_PER_ZONE, COIN_REWARD_JITTER, GEM_REWARD_JITTER};
use crate::core::game_mode::GameMode;
use crate::core::game_state::GameState;
use crate::game::error::ActionError;
use crate::items::drops::try_drop_from_enemy;
use crate::items::types::{EquipmentSlot, Item};
use rand::Rng;

#[derive(Debug, Clone, PartialEq)]
pub struct VictoryReward {
    pub coins: u64,
    pub gems: u64,
    pub new_zone: u32,
    pub dropped_item: Option<Item>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum CombatEvent {
    PlayerHit { damage: u64, enemy_hp: u64 },
    EnemyHit { damage: u64, player_hp: u64 },
    EnemyDefeated(VictoryReward),
    PlayerDefeated,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct AttackOutcome {
    pub events: Vec<CombatEvent>,
    /// New streak length when this answer completed a multiple of five.
    pub streak_milestone: Option<u32>,
    /// The finished encounter's log. Empty while the fight goes on.
    pub encounter_log: Vec<String>,
}

impl AttackOutcome {
    pub fn victory(&self) -> Option<&VictoryReward> {
        self.events.iter().find_map(|e| match e {
            CombatEvent::EnemyDefeated(reward) => Some(reward),
            _ => None,
        })
    }

    pub fn defeated(&self) -> bool {
        self.events.contains(&CombatEvent::PlayerDefeated)
    }

    pub fn combat_ended(&self) -> bool {
        self.victory().is_some() || self.defeated()
    }
}

/// Never less than one, however lopsided the stats.
pub fn calculate_damage(attack: u64, defense: u64) -> u64 {
    attack.saturating_sub(defense).max(1)
}

/// Spawns the zone's enemy and fully heals the player.
pub fn start_combat(state: &mut GameState) -> &Enemy {
    let mut enemy = generate_enemy(state.zone);
    if state.game_mode.current == GameMode::Crazy {
        apply_crazy_mode(&mut enemy);
    }

    apply_derived_stats(state);
    state.player_stats.hp = state.player_stats.max_hp;
    state.combat.log = vec![format!(
        "You encounter a {} in Zone {}!",
        enemy.name, enemy.zone
    )];
    tracing::debug!(enemy = %enemy.name, zone = enemy.zone, hp = enemy.hp, "combat started");
    state.combat.current_enemy.insert(enemy)
}

/// Resolves one judged trivia answer against the current enemy.
pub fn resolve_attack(
    state: &mut GameState,
    hit: bool,
    category: Option<&str>,
    now: i64,
    rng: &mut impl Rng,
) -> Result<AttackOutcome, ActionError> {
    let Some(mut enemy) = state.combat.current_enemy.take() else {
        return Err(ActionError::NotInCombat);
    };

    state.statistics.record_answer(category, hit);
    // Rewards for this answer use the streak as it stood before it.
    let streak_tenths = state.knowledge_streak.multiplier_tenths();
    let mut outcome = AttackOutcome {
        streak_milestone: state.knowledge_streak.record(hit, now),
        ..Default::default()
    };

    if hit {
        let damage = calculate_damage(state.player_stats.atk, enemy.def);
        wear_equipped(state);
        enemy.take_damage(damage);
        state
            .combat
            .log
            .push(format!("You deal {} damage to the {}!", damage, enemy.name));
        outcome.events.push(CombatEvent::PlayerHit {
            damage,
            enemy_hp: enemy.hp,
        });

        if !enemy.is_alive() {
            state
                .combat
                .log
                .push(format!("You defeated the {}!", enemy.name));
            let reward = grant_victory(state, &enemy, streak_tenths, rng);
            state.combat.log.push(format!(
                "You earned {} coins and {} gems!",
                reward.coins, reward.gems
            ));
            outcome.events.push(CombatEvent::EnemyDefeated(reward));
            outcome.encounter_log = std::mem::take(&mut state.combat.log);
            return Ok(outcome);
        }
    } else {
        let damage = calculate_damage(enemy.atk, state.player_stats.def);
        let stats = &mut state.player_stats;
        stats.hp = stats.hp.saturating_sub(damage);
        state.combat.log.push(format!(
            "You missed! The {} deals {} damage to you!",
            enemy.name, damage
        ));
        outcome.events.push(CombatEvent::EnemyHit {
            damage,
            player_hp: state.player_stats.hp,
        });

        if state.player_stats.hp == 0 {
            state
                .combat
                .log
                .push(format!("You were defeated by the {}...", enemy.name));
            outcome.events.push(CombatEvent::PlayerDefeated);
            outcome.encounter_log = std::mem::take(&mut state.combat.log);
            tracing::debug!(zone = state.zone, "player defeated");
            return Ok(outcome);
        }
    }

    state.combat.current_enemy = Some(enemy);
    Ok(outcome)
}

fn wear_equipped(state: &mut GameState) {
    for slot in [EquipmentSlot::Weapon, EquipmentSlot::Armor] {
        if let Some(item) = state.inventory.equipped_mut(slot) {
            item.wear();
        }
    }
}

/// Victory coins and gems before any item drop. Mode and streak multipliers
/// stack; everything is integer so the floor happens once at the end.
/// `streak_tenths` is the streak multiplier in tenths.
pub fn roll_victory_currency(
    state: &GameState,
    streak_tenths: u64,
    rng: &mut impl Rng,
) -> (u64, u64) {
    let (coin_pct, gem_pct) = state.game_mode.current.reward_percent();

    let base_coins = state.zone as u64 * COINS_PER_ZONE + rng.gen_range(0..COIN_REWARD_JITTER);
    let base_gems = rng.gen_range(0..GEM_REWARD_JITTER) + 1;

    let coins = base_coins * coin_pct * streak_tenths / 1000;
    let gems = base_gems * gem_pct * streak_tenths / 1000;
    (coins, gems)
}

fn grant_victory(
    state: &mut GameState,
    enemy: &Enemy,
    streak_tenths: u64,
    rng: &mut impl Rng,
) -> VictoryReward {
    let (coins, gems) = roll_victory_currency(state, streak_tenths, rng);
    state.earn_coins(coins);
    state.earn_gems(gems);
    state.advance_zone();

    let dropped_item = try_drop_from_enemy(enemy.can_drop_items, rng);
    if let Some(item) = &dropped_item {
        state.acquire_item(item.clone());
    }

    tracing::info!(zone = state.zone, coins, gems, "enemy defeated, zone advanced");
    VictoryReward {
        coins,
        gems,
        new_zone: state.zone,
        dropped_item,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::items::types::{test_item, Rarity};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn enemy(hp: u64, atk: u64, def: u64) -> Enemy {
        Enemy {
            name: "Dummy".to_string(),
            hp,
            max_hp: hp,
            atk,
            def,
            zone: 1,
            can_drop_items: false,
        }
    }

    fn fighting(e: Enemy) -> GameState {
        let mut state = GameState::default();
        state.combat.current_enemy = Some(e);
        state.combat.log = vec!["start".to_string()];
        state
    }

    #[test]
    fn test_damage_floor() {
        assert_eq!(calculate_damage(50, 10), 40);
        assert_eq!(calculate_damage(30, 5), 25);
        assert_eq!(calculate_damage(5, 500), 1);
        assert_eq!(calculate_damage(0, 0), 1);
    }

    #[test]
    fn test_start_combat_heals_and_logs() {
        let mut state = GameState::default();
        state.player_stats.hp = 3;
        let name = start_combat(&mut state).name.clone();
        assert_eq!(state.player_stats.hp, 200);
        assert!(state.in_combat());
        assert_eq!(
            state.combat.log,
            vec![format!("You encounter a {name} in Zone 1!")]
        );
    }

    #[test]
    fn test_start_combat_crazy_enemy() {
        let mut state = GameState::default();
        state.game_mode.set(GameMode::Crazy);
        let e = start_combat(&mut state);
        assert_eq!(e.hp, 645);
        assert_eq!(e.def, 4);
    }

    #[test]
    fn test_hit_deals_exact_damage() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let mut state = fighting(enemy(500, 30, 10));
        let outcome = resolve_attack(&mut state, true, None, 0, &mut rng).unwrap();
        assert_eq!(
            outcome.events,
            vec![CombatEvent::PlayerHit {
                damage: 40,
                enemy_hp: 460
            }]
        );
        assert_eq!(state.combat.current_enemy.as_ref().unwrap().hp, 460);
        assert!(outcome.encounter_log.is_empty());
    }

    #[test]
    fn test_miss_deals_exact_damage() {
        let mut rng = ChaCha8Rng::seed_from_u64(2);
        let mut state = fighting(enemy(500, 30, 10));
        state.player_stats.def = 5;
        let outcome = resolve_attack(&mut state, false, Some("math"), 0, &mut rng).unwrap();
        assert_eq!(
            outcome.events,
            vec![CombatEvent::EnemyHit {
                damage: 25,
                player_hp: 175
            }]
        );
        assert_eq!(state.knowledge_streak.current, 0);
        assert_eq!(state.statistics.accuracy_by_category["math"].total, 1);
    }

    #[test]
    fn test_one_shot_victory_advances_zone() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let mut state = fighting(enemy(40, 30, 10));
        let coins = state.coins;
        let outcome = resolve_attack(&mut state, true, None, 0, &mut rng).unwrap();

        let reward = outcome.victory().unwrap().clone();
        assert!(!state.in_combat());
        assert_eq!(state.zone, 2);
        assert_eq!(reward.new_zone, 2);
        assert!(state.combat.log.is_empty());
        assert_eq!(outcome.encounter_log.len(), 4);
        assert_eq!(state.coins, coins + reward.coins);
        assert!((8..23).contains(&reward.coins));
        assert!((1..=3).contains(&reward.gems));
    }

    #[test]
    fn test_defeat_keeps_zone_and_pays_nothing() {
        let mut rng = ChaCha8Rng::seed_from_u64(4);
        let mut state = fighting(enemy(500, 1_000, 0));
        state.zone = 7;
        let outcome = resolve_attack(&mut state, false, None, 0, &mut rng).unwrap();
        assert!(outcome.defeated());
        assert_eq!(state.player_stats.hp, 0);
        assert_eq!(state.zone, 7);
        assert_eq!(state.coins, 100);
        assert!(!state.in_combat());
    }

    #[test]
    fn test_not_in_combat() {
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let mut state = GameState::default();
        let before = state.clone();
        assert_eq!(
            resolve_attack(&mut state, true, Some("x"), 0, &mut rng),
            Err(ActionError::NotInCombat)
        );
        assert_eq!(state, before);
    }

    #[test]
    fn test_hit_wears_equipped_gear_only() {
        let mut rng = ChaCha8Rng::seed_from_u64(6);
        let mut state = fighting(enemy(500, 1, 0));
        state
            .inventory
            .add(test_item("w", EquipmentSlot::Weapon, Rarity::Common, 15));
        state
            .inventory
            .add(test_item("w2", EquipmentSlot::Weapon, Rarity::Common, 15));
        state
            .inventory
            .add(test_item("a", EquipmentSlot::Armor, Rarity::Common, 8));
        state.inventory.equip(EquipmentSlot::Weapon, "w");
        state.inventory.equip(EquipmentSlot::Armor, "a");

        resolve_attack(&mut state, true, None, 0, &mut rng).unwrap();
        resolve_attack(&mut state, false, None, 0, &mut rng).unwrap();

        let inv = &state.inventory;
        assert_eq!(inv.find(EquipmentSlot::Weapon, "w").unwrap().durability, 49);
        assert_eq!(inv.find(EquipmentSlot::Weapon, "w2").unwrap().durability, 50);
        assert_eq!(inv.find(EquipmentSlot::Armor, "a").unwrap().durability, 49);
    }

    #[test]
    fn test_crazy_rewards_and_streak_stack() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let mut state = GameState::default();
        state.zone = 10;
        state.game_mode.set(GameMode::Crazy);
        state.knowledge_streak.current = 50;
        let tenths = state.knowledge_streak.multiplier_tenths();
        for _ in 0..200 {
            let (coins, gems) = roll_victory_currency(&state, tenths, &mut rng);
            // (80..95) * 6 * 2
            assert!((960..=1128).contains(&coins), "coins {coins}");
            assert!([12, 24, 36].contains(&gems), "gems {gems}");
        }
    }

    #[test]
    fn test_killing_answer_is_paid_at_the_previous_streak() {
        for seed in 0..50 {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let mut e = enemy(1, 0, 0);
            e.zone = 10;
            let mut state = fighting(e);
            state.zone = 10;
            state.knowledge_streak.current = 4;

            let outcome = resolve_attack(&mut state, true, Some("art"), 0, &mut rng).unwrap();
            let reward = outcome.victory().unwrap();
            // Streak 4 pays 1.0x: 80 + (0..15) coins, 1..=3 gems.
            assert!((80..=94).contains(&reward.coins), "coins {}", reward.coins);
            assert!((1..=3).contains(&reward.gems));
            assert_eq!(outcome.streak_milestone, Some(5));
            assert_eq!(state.knowledge_streak.multiplier_tenths(), 11);
        }
    }

    #[test]
    fn test_blitz_rewards_floor() {
        let mut rng = ChaCha8Rng::seed_from_u64(8);
        let mut state = GameState::default();
        state.game_mode.set(GameMode::Blitz);
        for _ in 0..200 {
            let (coins, gems) = roll_victory_currency(&state, 10, &mut rng);
            // floor((8..23) * 1.25), floor((1..=3) * 1.1)
            assert!((10..=27).contains(&coins));
            assert!((1..=3).contains(&gems));
        }
    }
}
