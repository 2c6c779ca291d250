//! Research, mining, promo codes, cheats and game-mode selection.

use super::{ActionError, Game};
use crate::character::derived_stats::apply_derived_stats;
use crate::character::research::{research_cost, ResearchTrack};
use crate::core::game_mode::GameMode;
use crate::economy::cheats::CheatKind;
use crate::economy::mining::{in_grid, roll_mine_yield, shiny_exchange_value, MineYield, MiningTool};
use crate::economy::promo::{find_promo_code, PromoReward};
use crate::effects::EffectColor;
use crate::persistence::store::KeyValueStore;
use rand::Rng;

impl<S: KeyValueStore, R: Rng> Game<S, R> {
    /// Buys the next research level. Returns the new level.
    pub fn upgrade_research(&mut self, track: ResearchTrack) -> Result<u32, ActionError> {
        let cost = research_cost(self.state.research.level(track));
        self.state.spend_coins(cost)?;
        self.state.research.advance(track, cost);
        apply_derived_stats(&mut self.state);

        let level = self.state.research.level(track);
        self.effects.text(
            format!("{} Research Level {}!", track.name(), level),
            EffectColor::Blue,
        );
        self.commit(Ok(level))
    }

    /// Swings at one cell of the mining grid.
    pub fn mine_gem(&mut self, x: u32, y: u32) -> Result<MineYield, ActionError> {
        if !in_grid(x, y) {
            return Err(ActionError::InvalidCoordinate { x, y });
        }
        let mined = roll_mine_yield(self.state.mining.efficiency, &mut self.rng);
        self.state.earn_gems(mined.gems);
        self.state.earn_shiny_gems(mined.shiny_gems);
        self.state.mining.record(mined);

        if mined.is_shiny() {
            self.effects
                .text(format!("Shiny Gem! +{} gems", mined.gems), EffectColor::Purple);
        } else {
            self.effects
                .text(format!("+{} gems", mined.gems), EffectColor::Blue);
        }
        self.commit(Ok(mined))
    }

    /// Returns the new mining efficiency.
    pub fn purchase_mining_tool(&mut self, tool: MiningTool) -> Result<u64, ActionError> {
        if self.state.mining.owns(tool) {
            return Err(ActionError::ToolAlreadyOwned);
        }
        self.state.spend_gems(tool.cost())?;
        self.state.mining.add_tool(tool);
        let efficiency = self.state.mining.efficiency;
        self.effects
            .text(format!("Mining efficiency {efficiency}!"), EffectColor::Green);
        self.commit(Ok(efficiency))
    }

    /// Trades shiny gems for regular gems at the fixed rate. Exchanged gems
    /// do not count as earned.
    pub fn exchange_shiny_gems(&mut self, amount: u64) -> Result<u64, ActionError> {
        if amount == 0 {
            return Err(ActionError::InvalidAmount);
        }
        self.state.spend_shiny_gems(amount)?;
        let gems = shiny_exchange_value(amount);
        self.state.gems = self.state.gems.saturating_add(gems);
        self.effects
            .text(format!("+{gems} gems"), EffectColor::Blue);
        self.commit(Ok(gems))
    }

    pub fn redeem_promo_code(&mut self, code: &str) -> Result<PromoReward, ActionError> {
        let promo = find_promo_code(code).ok_or(ActionError::UnknownPromoCode)?;
        if self.state.promo_codes.is_used(promo.code) {
            return Err(ActionError::PromoCodeAlreadyUsed);
        }

        let reward = promo.reward;
        self.state.earn_coins(reward.coins);
        self.state.earn_gems(reward.gems);
        for item in &reward.items {
            self.state.acquire_item(item.clone());
        }
        self.state.promo_codes.mark_used(promo.code);

        self.effects
            .text(format!("{} Redeemed!", promo.name), EffectColor::Gold);
        tracing::info!(code = promo.code, "promo code redeemed");
        self.commit(Ok(reward))
    }

    /// Flips a cheat and returns whether it is now on.
    pub fn toggle_cheat(&mut self, kind: CheatKind) -> bool {
        let enabled = self.state.cheats.toggle(kind);
        tracing::info!(cheat = kind.name(), enabled, "cheat toggled");
        let _ = self.commit(Ok(()));
        enabled
    }

    pub fn set_game_mode(&mut self, mode: GameMode) {
        self.state.game_mode.set(mode);
        apply_derived_stats(&mut self.state);
        self.effects
            .text(format!("{} Mode", mode.name()), EffectColor::Orange);
        let _ = self.commit(Ok(()));
    }
}
