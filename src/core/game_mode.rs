use serde::{Deserialize, Serialize};

/// A multiplier expressed as `num / den` so stat floors are exact.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ratio {
    pub num: u64,
    pub den: u64,
}

impl Ratio {
    pub const ONE: Ratio = Ratio { num: 1, den: 1 };
    pub const DOUBLE: Ratio = Ratio { num: 2, den: 1 };
    pub const HALF: Ratio = Ratio { num: 1, den: 2 };

    pub fn as_f64(&self) -> f64 {
        self.num as f64 / self.den as f64
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameMode {
    #[default]
    Normal,
    Blitz,
    Bloodlust,
    Crazy,
}

impl GameMode {
    pub const ALL: [GameMode; 4] = [
        GameMode::Normal,
        GameMode::Blitz,
        GameMode::Bloodlust,
        GameMode::Crazy,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            GameMode::Normal => "Normal",
            GameMode::Blitz => "Blitz",
            GameMode::Bloodlust => "Bloodlust",
            GameMode::Crazy => "Crazy",
        }
    }

    /// (atk, def, hp) modifiers applied after research.
    pub fn stat_modifiers(&self) -> (Ratio, Ratio, Ratio) {
        match self {
            GameMode::Bloodlust => (Ratio::DOUBLE, Ratio::HALF, Ratio::HALF),
            GameMode::Crazy => (Ratio::HALF, Ratio::HALF, Ratio::HALF),
            GameMode::Normal | GameMode::Blitz => (Ratio::ONE, Ratio::ONE, Ratio::ONE),
        }
    }

    /// (coins, gems) victory reward modifiers in percent.
    pub fn reward_percent(&self) -> (u64, u64) {
        match self {
            GameMode::Blitz => (125, 110),
            GameMode::Crazy => (600, 600),
            GameMode::Normal | GameMode::Bloodlust => (100, 100),
        }
    }

    pub fn is_speed_mode(&self) -> bool {
        matches!(self, GameMode::Blitz | GameMode::Bloodlust)
    }

    pub fn from_name(name: &str) -> Option<Self> {
        GameMode::ALL
            .into_iter()
            .find(|m| m.name().eq_ignore_ascii_case(name))
    }
}

/// Persisted game-mode selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GameModeState {
    pub current: GameMode,
    pub speed_mode_active: bool,
}

impl GameModeState {
    pub fn set(&mut self, mode: GameMode) {
        self.current = mode;
        self.speed_mode_active = mode.is_speed_mode();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bloodlust_modifiers() {
        let (atk, def, hp) = GameMode::Bloodlust.stat_modifiers();
        assert_eq!(atk.as_f64(), 2.0);
        assert_eq!(def.as_f64(), 0.5);
        assert_eq!(hp.as_f64(), 0.5);
    }

    #[test]
    fn test_blitz_keeps_stats_but_boosts_rewards() {
        assert_eq!(
            GameMode::Blitz.stat_modifiers(),
            (Ratio::ONE, Ratio::ONE, Ratio::ONE)
        );
        assert_eq!(GameMode::Blitz.reward_percent(), (125, 110));
    }

    #[test]
    fn test_speed_mode_latch() {
        let mut state = GameModeState::default();
        state.set(GameMode::Bloodlust);
        assert!(state.speed_mode_active);
        state.set(GameMode::Crazy);
        assert!(!state.speed_mode_active);
    }

    #[test]
    fn test_from_name() {
        assert_eq!(GameMode::from_name("crazy"), Some(GameMode::Crazy));
        assert_eq!(GameMode::from_name("BLITZ"), Some(GameMode::Blitz));
        assert_eq!(GameMode::from_name("turbo"), None);
    }
}
