//! Property tests for the currency, streak and research rules.

use hugoland::character::derived_stats::apply_derived_stats;
use hugoland::character::research::{research_bonus, research_cost, ResearchTrack};
use hugoland::core::game_state::GameState;
use hugoland::game::ActionError;
use hugoland::progression::streak::KnowledgeStreak;
use proptest::prelude::*;

fn longest_run(answers: &[bool]) -> u32 {
    let (mut best, mut run) = (0, 0);
    for &correct in answers {
        run = if correct { run + 1 } else { 0 };
        best = best.max(run);
    }
    best
}

fn trailing_run(answers: &[bool]) -> u32 {
    answers.iter().rev().take_while(|&&c| c).count() as u32
}

proptest! {
    #[test]
    fn spend_coins_deducts_or_refuses(balance in 0u64..1_000_000, cost in 0u64..1_000_000) {
        let mut state = GameState::default();
        state.coins = balance;
        let result = state.spend_coins(cost);
        if cost <= balance {
            prop_assert!(result.is_ok());
            prop_assert_eq!(state.coins, balance - cost);
        } else {
            prop_assert_eq!(
                result,
                Err(ActionError::InsufficientCoins { needed: cost, available: balance })
            );
            prop_assert_eq!(state.coins, balance);
        }
    }

    #[test]
    fn spend_gems_deducts_or_refuses(balance in 0u64..100_000, cost in 0u64..100_000) {
        let mut state = GameState::default();
        state.gems = balance;
        let ok = state.spend_gems(cost).is_ok();
        prop_assert_eq!(ok, cost <= balance);
        prop_assert_eq!(state.gems, if ok { balance - cost } else { balance });
    }

    #[test]
    fn spend_shiny_gems_deducts_or_refuses(balance in 0u64..1_000, cost in 0u64..1_000) {
        let mut state = GameState::default();
        state.shiny_gems = balance;
        let ok = state.spend_shiny_gems(cost).is_ok();
        prop_assert_eq!(ok, cost <= balance);
        prop_assert_eq!(state.shiny_gems, if ok { balance - cost } else { balance });
    }

    #[test]
    fn infinite_coins_never_deducts(balance in 0u64..10_000, cost in 0u64..10_000) {
        let mut state = GameState::default();
        state.coins = balance;
        state.cheats.infinite_coins = true;
        prop_assert!(state.spend_coins(cost).is_ok());
        prop_assert_eq!(state.coins, balance);
    }

    #[test]
    fn streak_tracks_runs(answers in proptest::collection::vec(any::<bool>(), 0..200)) {
        let mut streak = KnowledgeStreak::default();
        let mut milestones = Vec::new();
        for (t, &correct) in answers.iter().enumerate() {
            milestones.extend(streak.record(correct, t as i64));
        }
        prop_assert_eq!(streak.current, trailing_run(&answers));
        prop_assert_eq!(streak.best, longest_run(&answers));
        prop_assert_eq!(
            streak.multiplier_tenths(),
            (10 + (streak.current / 5) as u64).min(20)
        );
        prop_assert!(milestones.iter().all(|m| m % 5 == 0 && *m > 0));
    }

    #[test]
    fn research_cost_and_bonus_are_linear(level in 0u32..10_000) {
        prop_assert_eq!(research_cost(level), 100 + 25 * level as u64);
        prop_assert_eq!(research_bonus(level), 10 * level);
        prop_assert!(research_cost(level + 1) > research_cost(level));
        prop_assert!(research_bonus(level + 1) > research_bonus(level));
    }

    #[test]
    fn more_research_never_lowers_stats(atk_levels in 0u32..40, def_levels in 0u32..40) {
        let mut state = GameState::default();
        apply_derived_stats(&mut state);
        let mut previous = state.player_stats.atk;
        for level in 0..atk_levels {
            state.research.advance(ResearchTrack::Atk, research_cost(level));
            apply_derived_stats(&mut state);
            prop_assert!(state.player_stats.atk >= previous);
            previous = state.player_stats.atk;
        }
        for level in 0..def_levels {
            state.research.advance(ResearchTrack::Def, research_cost(level));
        }
        apply_derived_stats(&mut state);
        prop_assert_eq!(state.research.total_levels(), atk_levels + def_levels);
        prop_assert!(state.player_stats.hp <= state.player_stats.max_hp);
    }
}
