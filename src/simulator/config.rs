//! Simulation configuration.

use crate::core::game_mode::GameMode;

#[derive(Debug, Clone)]
pub struct SimConfig {
    /// Independent runs to aggregate.
    pub num_runs: u32,

    /// Fights per run.
    pub fights_per_run: u32,

    /// Chance each trivia answer is correct, 0.0 to 1.0.
    pub accuracy: f64,

    /// Random seed for reproducibility (None = random)
    pub seed: Option<u64>,

    pub mode: GameMode,

    /// Seconds of play each answer represents.
    pub seconds_per_answer: i64,

    /// Spend coins on research and chests between fights.
    pub spend_income: bool,

    /// Log verbosity (0 = silent, 1 = summary, 2 = per run)
    pub verbosity: u8,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            num_runs: 100,
            fights_per_run: 200,
            accuracy: 0.8,
            seed: None,
            mode: GameMode::Normal,
            seconds_per_answer: 15,
            spend_income: true,
            verbosity: 1,
        }
    }
}

impl SimConfig {
    /// Small config for a fast sanity check.
    pub fn quick() -> Self {
        Self {
            num_runs: 10,
            fights_per_run: 50,
            ..Default::default()
        }
    }
}
