//! Combat actions. The rules live in [`crate::combat`]; this layer turns
//! their events into effects and runs the follow-up checks.

use super::{ActionError, Game};
use crate::combat::logic::{resolve_attack, start_combat, AttackOutcome, CombatEvent};
use crate::combat::types::Enemy;
use crate::effects::{EffectColor, VisualEffect};
use crate::persistence::store::KeyValueStore;
use rand::Rng;

impl<S: KeyValueStore, R: Rng> Game<S, R> {
    /// Spawns the current zone's enemy. Starting again mid-fight replaces
    /// the enemy and heals the player.
    pub fn start_combat(&mut self) -> Enemy {
        let enemy = start_combat(&mut self.state).clone();
        self.effects.text(
            format!("A {} appears!", enemy.name),
            EffectColor::Orange,
        );
        // Combat state is never persisted, so there is nothing to save.
        enemy
    }

    /// Applies one judged trivia answer to the fight in progress.
    pub fn attack(
        &mut self,
        hit: bool,
        category: Option<&str>,
        now: i64,
    ) -> Result<AttackOutcome, ActionError> {
        if !self.state.in_combat() {
            return Err(ActionError::NotInCombat);
        }
        self.observe_time(now);
        let outcome = resolve_attack(&mut self.state, hit, category, now, &mut self.rng)?;

        for event in &outcome.events {
            match event {
                CombatEvent::PlayerHit { damage, .. } => {
                    self.effects.text(format!("-{damage}"), EffectColor::Red);
                }
                CombatEvent::EnemyHit { damage, .. } => {
                    self.effects.push(VisualEffect::ScreenShake);
                    self.effects.text(format!("-{damage} HP"), EffectColor::Red);
                }
                CombatEvent::EnemyDefeated(reward) => {
                    self.effects.text(
                        format!("Victory! +{} coins, +{} gems", reward.coins, reward.gems),
                        EffectColor::Gold,
                    );
                    if let Some(item) = &reward.dropped_item {
                        self.effects.text(
                            format!("{} dropped: {}!", item.rarity.name(), item.name),
                            EffectColor::Purple,
                        );
                    }
                }
                CombatEvent::PlayerDefeated => {
                    self.effects.text("Defeated...", EffectColor::Red);
                }
            }
        }
        if let Some(streak) = outcome.streak_milestone {
            self.effects.text(
                format!(
                    "{} Streak! +{}% Bonus!",
                    streak,
                    self.state.knowledge_streak.bonus_percent()
                ),
                EffectColor::Yellow,
            );
            self.effects.push(VisualEffect::Particles {
                color: EffectColor::Yellow,
            });
        }
        self.commit(Ok(outcome))
    }
}
