//! The action dispatcher: the only writer of [`GameState`].
//!
//! Each public action validates against the current snapshot first and
//! mutates only once validation passes, so an `Err` leaves the run untouched.
//! A successful action is followed by the achievement and tag checks and a
//! save. Save failures are logged and otherwise ignored.

pub mod combat;
pub mod economy;
pub mod error;
pub mod gear;
pub mod relics;

pub use error::ActionError;
pub use gear::ChestReward;

use crate::achievements::{check_achievements, check_player_tags, get_achievement_def, get_player_tag_def};
use crate::core::constants::PASSIVE_GEMS_PER_MINUTE;
use crate::core::game_state::GameState;
use crate::effects::{EffectColor, EffectQueue, VisualEffect};
use crate::persistence::snapshot::{clear_state, load_state, save_state};
use crate::persistence::store::KeyValueStore;
use rand::Rng;

/// What a periodic tick changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TickResult {
    pub seconds_played: u64,
    pub passive_gems: u64,
    pub market_refreshed: bool,
}

pub struct Game<S: KeyValueStore, R: Rng> {
    state: GameState,
    store: S,
    rng: R,
    effects: EffectQueue,
    /// Latest unix time seen; used to stamp unlocks.
    clock: i64,
    last_tick: Option<i64>,
}

impl<S: KeyValueStore, R: Rng> Game<S, R> {
    /// Resumes the saved run in `store`, or starts a new one.
    pub fn load(store: S, mut rng: R, now: i64) -> Self {
        let state = match load_state(&store, now) {
            Some(state) => state,
            None => {
                tracing::info!("no saved run, starting fresh");
                GameState::new(now, &mut rng)
            }
        };
        Self::from_state(state, store, rng, now)
    }

    /// Wraps an existing snapshot. Invariants are repaired first.
    pub fn from_state(mut state: GameState, store: S, rng: R, now: i64) -> Self {
        state.repair();
        Self {
            state,
            store,
            rng,
            effects: EffectQueue::default(),
            clock: now,
            last_tick: None,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn effects(&self) -> &EffectQueue {
        &self.effects
    }

    pub fn drain_effects(&mut self) -> Vec<VisualEffect> {
        self.effects.drain()
    }

    fn observe_time(&mut self, now: i64) {
        self.clock = self.clock.max(now);
    }

    /// Runs the follow-up work for a successful action.
    fn commit<T>(&mut self, result: Result<T, ActionError>) -> Result<T, ActionError> {
        if result.is_ok() {
            self.run_unlock_checks();
            self.persist();
        }
        result
    }

    fn run_unlock_checks(&mut self) {
        let (mut coins, mut gems) = (0, 0);
        for id in check_achievements(&mut self.state, self.clock) {
            if let Some(def) = get_achievement_def(id) {
                self.effects
                    .text(format!("Achievement Unlocked: {}!", def.name), EffectColor::Gold);
                coins += def.reward_coins;
                gems += def.reward_gems;
            }
        }
        if coins > 0 || gems > 0 {
            self.effects.text(
                format!("Achievement Rewards: +{coins} coins, +{gems} gems!"),
                EffectColor::Green,
            );
        }
        for id in check_player_tags(&mut self.state, self.clock) {
            if let Some(def) = get_player_tag_def(id) {
                self.effects
                    .text(format!("New Tag: {} {}", def.icon, def.name), EffectColor::Purple);
            }
        }
    }

    fn persist(&mut self) {
        if let Err(err) = save_state(&mut self.store, &self.state) {
            tracing::warn!(%err, "save failed, continuing in memory");
        }
    }

    /// Forces a save without any other change.
    pub fn save(&mut self) {
        self.persist();
    }

    /// Accrues play time, pays the passive gem trickle for every full minute
    /// crossed, and refreshes the market when its countdown has elapsed.
    /// The first tick of a session only sets the reference point.
    pub fn tick(&mut self, now: i64) -> TickResult {
        self.observe_time(now);
        let mut result = TickResult::default();

        if let Some(last) = self.last_tick {
            let elapsed = (now - last).max(0) as u64;
            if elapsed > 0 {
                let stats = &mut self.state.statistics;
                let minutes_before = stats.total_play_time / 60;
                stats.total_play_time += elapsed;
                let minutes_after = stats.total_play_time / 60;
                result.seconds_played = elapsed;
                result.passive_gems = (minutes_after - minutes_before) * PASSIVE_GEMS_PER_MINUTE;
            }
        }
        if self.last_tick.map_or(true, |last| now > last) {
            self.last_tick = Some(now);
        }

        if result.passive_gems > 0 {
            self.state.earn_gems(result.passive_gems);
        }
        result.market_refreshed = self
            .state
            .yojef_market
            .refresh_if_due(now, &mut self.rng);
        if result.market_refreshed {
            tracing::debug!(offers = self.state.yojef_market.items.len(), "market refreshed");
        }

        if result != TickResult::default() {
            // Ticks cannot fail.
            let _ = self.commit(Ok(()));
        }
        result
    }

    /// Deletes the saved run and starts over from defaults. The fresh run is
    /// written by the next action.
    pub fn reset_game(&mut self) {
        if let Err(err) = clear_state(&mut self.store) {
            tracing::warn!(%err, "could not clear saved run");
        }
        self.state = GameState::new(self.clock, &mut self.rng);
        self.state.repair();
        self.effects.clear();
        self.last_tick = None;
        tracing::info!("game reset");
    }
}
