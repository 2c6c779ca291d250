use super::research::{research_bonus, ResearchTrack};
use crate::core::game_mode::Ratio;
use crate::core::game_state::GameState;
use crate::items::types::EquipmentSlot;

/// Effective combat stats, always recomputed from base values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DerivedStats {
    pub atk: u64,
    pub def: u64,
    pub max_hp: u64,
}

impl DerivedStats {
    pub fn calculate(state: &GameState) -> Self {
        let inventory = &state.inventory;

        let weapon_atk = inventory
            .current_weapon()
            .map_or(0, |w| w.effective_power() as u64);
        let armor_def = inventory
            .current_armor()
            .map_or(0, |a| a.effective_power() as u64);

        let (mut relic_atk, mut relic_def) = (0u64, 0u64);
        for relic in inventory.iter_equipped_relics() {
            match relic.slot {
                EquipmentSlot::Weapon => relic_atk += relic.effective_power() as u64,
                EquipmentSlot::Armor => relic_def += relic.effective_power() as u64,
            }
        }

        let (atk_mode, def_mode, hp_mode) = state.game_mode.current.stat_modifiers();
        let base = &state.player_stats;

        Self {
            atk: scale(
                base.base_atk + weapon_atk + relic_atk,
                research_percent(state, ResearchTrack::Atk),
                atk_mode,
            ),
            def: scale(
                base.base_def + armor_def + relic_def,
                research_percent(state, ResearchTrack::Def),
                def_mode,
            ),
            max_hp: scale(
                base.base_hp,
                research_percent(state, ResearchTrack::Hp),
                hp_mode,
            ),
        }
    }
}

fn research_percent(state: &GameState, track: ResearchTrack) -> u64 {
    100 + research_bonus(state.research.level(track)) as u64
}

/// floor(value * percent/100 * mode), in integers so the floor is exact.
fn scale(value: u64, percent: u64, mode: Ratio) -> u64 {
    let wide = value as u128 * percent as u128 * mode.num as u128;
    let den = 100u128 * mode.den as u128;
    u64::try_from(wide / den).unwrap_or(u64::MAX)
}

pub fn recompute(state: &GameState) -> DerivedStats {
    DerivedStats::calculate(state)
}

/// Writes the derived stats back. Current HP is only ever clamped down.
pub fn apply_derived_stats(state: &mut GameState) {
    let derived = DerivedStats::calculate(state);
    let stats = &mut state.player_stats;
    stats.atk = derived.atk;
    stats.def = derived.def;
    stats.max_hp = derived.max_hp;
    stats.hp = stats.hp.min(derived.max_hp);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::game_mode::GameMode;
    use crate::items::types::{test_item, Rarity, Relic};

    fn relic(id: &str, slot: EquipmentSlot, base_power: u32, level: u32) -> Relic {
        Relic {
            id: id.to_string(),
            slot,
            name: "Relic".to_string(),
            base_power,
            level,
            upgrade_cost: 25,
            cost: base_power as u64 * 5,
            description: String::new(),
        }
    }

    #[test]
    fn test_base_only() {
        let state = GameState::default();
        let d = recompute(&state);
        assert_eq!(d, DerivedStats { atk: 50, def: 0, max_hp: 200 });
    }

    #[test]
    fn test_equipment_and_levels() {
        let mut state = GameState::default();
        let mut weapon = test_item("w", EquipmentSlot::Weapon, Rarity::Rare, 30);
        weapon.level = 3;
        let mut armor = test_item("a", EquipmentSlot::Armor, Rarity::Rare, 15);
        armor.level = 2;
        state.inventory.add(weapon);
        state.inventory.add(armor);
        state.inventory.equip(EquipmentSlot::Weapon, "w");
        state.inventory.equip(EquipmentSlot::Armor, "a");

        let d = recompute(&state);
        assert_eq!(d.atk, 50 + 30 + 20);
        assert_eq!(d.def, 15 + 5);
    }

    #[test]
    fn test_unequipped_gear_does_not_count() {
        let mut state = GameState::default();
        state
            .inventory
            .add(test_item("w", EquipmentSlot::Weapon, Rarity::Epic, 45));
        assert_eq!(recompute(&state).atk, 50);
    }

    #[test]
    fn test_relics_sum_per_slot() {
        let mut state = GameState::default();
        state.inventory.relics.push(relic("r1", EquipmentSlot::Weapon, 100, 2));
        state.inventory.relics.push(relic("r2", EquipmentSlot::Armor, 60, 3));
        state.inventory.relics.push(relic("r3", EquipmentSlot::Weapon, 80, 1));
        state.inventory.equipped_relics = vec!["r1".into(), "r2".into()];

        let d = recompute(&state);
        assert_eq!(d.atk, 50 + 122);
        assert_eq!(d.def, 90);
    }

    #[test]
    fn test_research_then_mode() {
        let mut state = GameState::default();
        state.research.advance(ResearchTrack::Atk, 100);
        state.research.advance(ResearchTrack::Atk, 125);
        state.research.advance(ResearchTrack::Atk, 150);
        state.research.advance(ResearchTrack::Hp, 100);
        state.player_stats.base_def = 7;
        state.game_mode.set(GameMode::Bloodlust);

        let d = recompute(&state);
        // 50 * 1.3 * 2
        assert_eq!(d.atk, 130);
        // floor(7 * 0.5)
        assert_eq!(d.def, 3);
        // 200 * 1.1 * 0.5
        assert_eq!(d.max_hp, 110);
    }

    #[test]
    fn test_research_floor_is_exact() {
        let mut state = GameState::default();
        for _ in 0..7 {
            state.research.advance(ResearchTrack::Atk, 0);
        }
        state.player_stats.base_atk = 100;
        assert_eq!(recompute(&state).atk, 170);
    }

    #[test]
    fn test_crazy_halves_everything() {
        let mut state = GameState::default();
        state.game_mode.set(GameMode::Crazy);
        let d = recompute(&state);
        assert_eq!(d, DerivedStats { atk: 25, def: 0, max_hp: 100 });
    }

    #[test]
    fn test_apply_clamps_hp_but_never_raises_it() {
        let mut state = GameState::default();
        state.game_mode.set(GameMode::Crazy);
        apply_derived_stats(&mut state);
        assert_eq!(state.player_stats.hp, 100);

        state.game_mode.set(GameMode::Normal);
        apply_derived_stats(&mut state);
        assert_eq!(state.player_stats.max_hp, 200);
        assert_eq!(state.player_stats.hp, 100);
    }

    #[test]
    fn test_recompute_is_not_incremental() {
        let mut state = GameState::default();
        state.game_mode.set(GameMode::Bloodlust);
        apply_derived_stats(&mut state);
        apply_derived_stats(&mut state);
        assert_eq!(state.player_stats.atk, 100);
    }
}
