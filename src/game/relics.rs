//! Relic actions against the Yojef market and the owned relic list.

use super::{ActionError, Game};
use crate::character::derived_stats::apply_derived_stats;
use crate::effects::EffectColor;
use crate::items::types::Relic;
use crate::persistence::store::KeyValueStore;
use rand::Rng;

impl<S: KeyValueStore, R: Rng> Game<S, R> {
    fn owned_relic(&self, id: &str) -> Result<&Relic, ActionError> {
        self.state
            .inventory
            .find_relic(id)
            .ok_or_else(|| ActionError::UnknownRelic(id.to_string()))
    }

    /// Buys a market offer and equips it straight away, so a purchase needs
    /// a free relic slot as well as the coins.
    pub fn purchase_relic(&mut self, id: &str) -> Result<Relic, ActionError> {
        let offer = self
            .state
            .yojef_market
            .find(id)
            .ok_or_else(|| ActionError::UnknownRelic(id.to_string()))?;
        if self.state.inventory.relic_slots_full() {
            return Err(ActionError::RelicCapReached);
        }
        let cost = offer.cost;
        self.state.spend_coins(cost)?;

        let relic = self
            .state
            .yojef_market
            .take(id)
            .ok_or_else(|| ActionError::UnknownRelic(id.to_string()))?;
        self.state.inventory.relics.push(relic.clone());
        self.state.inventory.equipped_relics.push(relic.id.clone());
        apply_derived_stats(&mut self.state);

        self.effects
            .text(format!("{} Acquired!", relic.name), EffectColor::Purple);
        tracing::debug!(relic = %relic.name, cost, "relic purchased");
        self.commit(Ok(relic))
    }

    /// Spends gems for one relic level. Cost grows by half, rounded down.
    pub fn upgrade_relic(&mut self, id: &str) -> Result<u32, ActionError> {
        let cost = self.owned_relic(id)?.upgrade_cost;
        self.state.spend_gems(cost)?;

        let Some(relic) = self.state.inventory.find_relic_mut(id) else {
            return Err(ActionError::UnknownRelic(id.to_string()));
        };
        relic.level += 1;
        relic.upgrade_cost = relic.upgrade_cost * 3 / 2;
        let level = relic.level;

        apply_derived_stats(&mut self.state);
        self.effects.text("Relic Upgraded!", EffectColor::Blue);
        self.commit(Ok(level))
    }

    pub fn equip_relic(&mut self, id: &str) -> Result<(), ActionError> {
        self.owned_relic(id)?;
        if self.state.inventory.is_relic_equipped(id) {
            return Err(ActionError::RelicAlreadyEquipped);
        }
        if self.state.inventory.relic_slots_full() {
            return Err(ActionError::RelicCapReached);
        }
        self.state.inventory.equipped_relics.push(id.to_string());
        apply_derived_stats(&mut self.state);
        self.commit(Ok(()))
    }

    /// Owned but unequipped relics are left alone.
    pub fn unequip_relic(&mut self, id: &str) -> Result<(), ActionError> {
        self.owned_relic(id)?;
        self.state.inventory.equipped_relics.retain(|r| r != id);
        apply_derived_stats(&mut self.state);
        self.commit(Ok(()))
    }

    /// Sells an unequipped relic back for half its purchase price.
    pub fn sell_relic(&mut self, id: &str) -> Result<u64, ActionError> {
        self.owned_relic(id)?;
        if self.state.inventory.is_relic_equipped(id) {
            return Err(ActionError::ItemEquipped(id.to_string()));
        }
        let inventory = &mut self.state.inventory;
        let Some(index) = inventory.relics.iter().position(|r| r.id == id) else {
            return Err(ActionError::UnknownRelic(id.to_string()));
        };
        let relic = inventory.relics.remove(index);
        let price = relic.cost / 2;
        self.state.coins = self.state.coins.saturating_add(price);

        self.effects
            .text(format!("+{price} coins"), EffectColor::Yellow);
        self.commit(Ok(price))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::game_state::GameState;
    use crate::items::types::EquipmentSlot;
    use crate::persistence::store::MemoryStore;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn relic(id: &str, slot: EquipmentSlot, base_power: u32) -> Relic {
        Relic {
            id: id.to_string(),
            slot,
            name: format!("Relic {id}"),
            base_power,
            level: 1,
            upgrade_cost: 25,
            cost: u64::from(base_power) * 5,
            description: String::new(),
        }
    }

    fn game_with(state: GameState) -> Game<MemoryStore, ChaCha8Rng> {
        Game::from_state(state, MemoryStore::new(), ChaCha8Rng::seed_from_u64(3), 0)
    }

    fn market_state() -> GameState {
        let mut state = GameState::default();
        state.coins = 10_000;
        state.gems = 100;
        state.yojef_market.items = vec![
            relic("m1", EquipmentSlot::Weapon, 100),
            relic("m2", EquipmentSlot::Armor, 70),
        ];
        state
    }

    #[test]
    fn test_purchase_moves_offer_to_equipped() {
        let mut game = game_with(market_state());
        let bought = game.purchase_relic("m1").unwrap();
        let s = game.state();
        assert_eq!(bought.id, "m1");
        assert_eq!(s.coins, 9_500);
        assert!(s.yojef_market.find("m1").is_none());
        assert!(s.inventory.is_relic_equipped("m1"));
        assert_eq!(s.player_stats.atk, 150);
    }

    #[test]
    fn test_purchase_unknown_or_unaffordable() {
        let mut state = market_state();
        state.coins = 10;
        let mut game = game_with(state);
        assert_eq!(
            game.purchase_relic("zzz"),
            Err(ActionError::UnknownRelic("zzz".to_string()))
        );
        assert!(matches!(
            game.purchase_relic("m2"),
            Err(ActionError::InsufficientCoins { .. })
        ));
        assert_eq!(game.state().yojef_market.items.len(), 2);
    }

    #[test]
    fn test_purchase_needs_free_slot() {
        let mut state = market_state();
        for i in 0..5 {
            let id = format!("r{i}");
            state.inventory.relics.push(relic(&id, EquipmentSlot::Armor, 60));
            state.inventory.equipped_relics.push(id);
        }
        let mut game = game_with(state);
        assert_eq!(game.purchase_relic("m1"), Err(ActionError::RelicCapReached));
        assert_eq!(game.state().coins, 10_000);
    }

    #[test]
    fn test_sixth_relic_equip_is_refused() {
        let mut state = GameState::default();
        for i in 0..6 {
            let id = format!("r{i}");
            state.inventory.relics.push(relic(&id, EquipmentSlot::Weapon, 80));
            if i < 5 {
                state.inventory.equipped_relics.push(id);
            }
        }
        let mut game = game_with(state);
        let before = game.state().inventory.equipped_relics.clone();
        assert_eq!(game.equip_relic("r5"), Err(ActionError::RelicCapReached));
        assert_eq!(game.state().inventory.equipped_relics, before);
        assert_eq!(game.equip_relic("r0"), Err(ActionError::RelicAlreadyEquipped));
    }

    #[test]
    fn test_unequip_then_equip() {
        let mut state = GameState::default();
        state.inventory.relics.push(relic("r", EquipmentSlot::Armor, 60));
        state.inventory.equipped_relics.push("r".to_string());
        let mut game = game_with(state);
        assert_eq!(game.state().player_stats.def, 60);

        game.unequip_relic("r").unwrap();
        assert_eq!(game.state().player_stats.def, 0);
        game.unequip_relic("r").unwrap();
        assert_eq!(
            game.unequip_relic("gone"),
            Err(ActionError::UnknownRelic("gone".to_string()))
        );
        game.equip_relic("r").unwrap();
        assert_eq!(game.state().player_stats.def, 60);
    }

    #[test]
    fn test_upgrade_relic() {
        let mut state = GameState::default();
        state.gems = 30;
        state.inventory.relics.push(relic("r", EquipmentSlot::Weapon, 80));
        state.inventory.equipped_relics.push("r".to_string());
        let mut game = game_with(state);

        assert_eq!(game.upgrade_relic("r"), Ok(2));
        let r = game.state().inventory.find_relic("r").unwrap();
        assert_eq!(r.upgrade_cost, 37);
        assert_eq!(game.state().gems, 5);
        assert_eq!(game.state().player_stats.atk, 50 + 80 + 22);
        assert!(matches!(
            game.upgrade_relic("r"),
            Err(ActionError::InsufficientGems { needed: 37, .. })
        ));
    }

    #[test]
    fn test_sell_relic() {
        let mut state = GameState::default();
        state.inventory.relics.push(relic("a", EquipmentSlot::Weapon, 90));
        state.inventory.relics.push(relic("b", EquipmentSlot::Weapon, 90));
        state.inventory.equipped_relics.push("a".to_string());
        let mut game = game_with(state);

        assert_eq!(
            game.sell_relic("a"),
            Err(ActionError::ItemEquipped("a".to_string()))
        );
        assert_eq!(game.sell_relic("b"), Ok(225));
        assert_eq!(game.state().coins, 325);
        assert_eq!(game.state().inventory.relics.len(), 1);
    }
}
