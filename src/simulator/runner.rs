//! Runs simulated playthroughs against [`Game`] backed by a memory store.

use super::config::SimConfig;
use super::report::{RunStats, SimReport};
use crate::character::research::ResearchTrack;
use crate::core::game_mode::GameMode;
use crate::core::game_state::GameState;
use crate::game::Game;
use crate::items::types::EquipmentSlot;
use crate::persistence::store::MemoryStore;
use rand::{Rng, RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Upper bound on answers in one fight, in case a build can never win or lose.
const MAX_ANSWERS_PER_FIGHT: u32 = 500;

/// Offset between the game's RNG stream and the answer stream of a run.
const ANSWER_SEED_OFFSET: u64 = 0x9E37_79B9_7F4A_7C15;

/// Question categories the simulated player is asked, drawn uniformly.
const CATEGORIES: [&str; 5] = ["science", "history", "geography", "math", "literature"];

pub fn run_simulation(config: &SimConfig) -> SimReport {
    let mut seeder = match config.seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_entropy(),
    };

    let mut runs = Vec::with_capacity(config.num_runs as usize);
    for run_idx in 0..config.num_runs {
        let stats = simulate_single_run(config, seeder.next_u64());
        if config.verbosity >= 2 {
            println!(
                "Run {}/{} - Zone {}, Wins {}, Losses {}, Best Streak {}",
                run_idx + 1,
                config.num_runs,
                stats.final_zone,
                stats.victories,
                stats.defeats,
                stats.best_streak
            );
        }
        runs.push(stats);
    }

    SimReport::from_runs(runs, config)
}

/// Plays one seeded run to completion and summarizes it.
pub fn simulate_single_run(config: &SimConfig, seed: u64) -> RunStats {
    let mut game_rng = ChaCha8Rng::seed_from_u64(seed);
    let mut answers = ChaCha8Rng::seed_from_u64(seed.wrapping_add(ANSWER_SEED_OFFSET));
    let state = GameState::new(0, &mut game_rng);
    let mut game = Game::from_state(state, MemoryStore::new(), game_rng, 0);
    if config.mode != GameMode::Normal {
        game.set_game_mode(config.mode);
    }

    let accuracy = if config.accuracy.is_finite() {
        config.accuracy.clamp(0.0, 1.0)
    } else {
        0.0
    };
    let mut now = 0;
    let mut stats = RunStats::default();
    game.tick(now);

    for _ in 0..config.fights_per_run {
        game.start_combat();
        for _ in 0..MAX_ANSWERS_PER_FIGHT {
            now += config.seconds_per_answer;
            let hit = answers.gen_bool(accuracy);
            let category = CATEGORIES[answers.gen_range(0..CATEGORIES.len())];
            let Ok(outcome) = game.attack(hit, Some(category), now) else {
                break;
            };
            stats.answers += 1;
            game.tick(now);

            if let Some(reward) = outcome.victory() {
                stats.victories += 1;
                if reward.dropped_item.is_some() {
                    stats.item_drops += 1;
                }
            }
            if outcome.defeated() {
                stats.defeats += 1;
            }
            if outcome.combat_ended() {
                break;
            }
        }
        if config.spend_income {
            spend_income(&mut game);
        }
        game.drain_effects();
    }

    let s = game.state();
    stats.final_zone = s.zone;
    stats.coins_earned = s.statistics.coins_earned;
    stats.gems_earned = s.statistics.gems_earned;
    stats.best_streak = s.knowledge_streak.best;
    stats.items_collected = s.statistics.items_collected;
    stats.research_levels = s.research.total_levels();
    stats.achievements_unlocked = s.achievements.unlocked_count();
    stats.play_time = s.statistics.total_play_time;
    stats
}

/// Equips the strongest gear, buys research on the lowest track, then puts
/// spare gems into the equipped weapon.
fn spend_income<R: Rng>(game: &mut Game<MemoryStore, R>) {
    for slot in [EquipmentSlot::Weapon, EquipmentSlot::Armor] {
        let inventory = &game.state().inventory;
        let best = inventory
            .items(slot)
            .iter()
            .max_by_key(|i| i.effective_power())
            .map(|i| i.id.clone());
        if let Some(id) = best {
            if !inventory.is_equipped(slot, &id) {
                let _ = game.equip(slot, &id);
            }
        }
    }

    loop {
        let research = &game.state().research;
        let Some(track) = ResearchTrack::ALL
            .into_iter()
            .min_by_key(|&t| research.level(t))
        else {
            break;
        };
        if game.upgrade_research(track).is_err() {
            break;
        }
    }

    while let Some(id) = game.state().inventory.current_weapon.clone() {
        if game.upgrade_weapon(&id).is_err() {
            break;
        }
    }
}
