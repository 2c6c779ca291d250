//! Simulation report generation.

use super::config::SimConfig;
use serde::Serialize;
use std::collections::BTreeMap;

/// Outcome of one simulated run.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct RunStats {
    pub final_zone: u32,
    pub victories: u32,
    pub defeats: u32,
    pub answers: u32,
    pub item_drops: u32,
    pub coins_earned: u64,
    pub gems_earned: u64,
    pub best_streak: u32,
    pub items_collected: u64,
    pub research_levels: u32,
    pub achievements_unlocked: usize,
    pub play_time: u64,
}

/// Aggregated results from multiple simulation runs.
#[derive(Debug, Clone, Serialize)]
pub struct SimReport {
    pub num_runs: u32,
    pub fights_per_run: u32,
    pub accuracy: f64,
    pub mode: String,

    pub avg_final_zone: f64,
    pub max_final_zone: u32,
    pub avg_victories: f64,
    pub avg_defeats: f64,
    pub avg_answers_per_fight: f64,
    pub avg_coins_earned: f64,
    pub avg_gems_earned: f64,
    pub avg_best_streak: f64,
    pub avg_research_levels: f64,
    pub avg_achievements: f64,
    pub drop_rate: f64,

    /// Final zone -> number of runs that ended there.
    pub zone_distribution: BTreeMap<u32, u32>,

    #[serde(skip)]
    pub runs: Vec<RunStats>,
}

fn mean(runs: &[RunStats], f: impl Fn(&RunStats) -> f64) -> f64 {
    if runs.is_empty() {
        return 0.0;
    }
    runs.iter().map(f).sum::<f64>() / runs.len() as f64
}

impl SimReport {
    pub fn from_runs(runs: Vec<RunStats>, config: &SimConfig) -> Self {
        let mut zone_distribution = BTreeMap::new();
        for run in &runs {
            *zone_distribution.entry(run.final_zone).or_insert(0) += 1;
        }

        let fights: u64 = runs.iter().map(|r| (r.victories + r.defeats) as u64).sum();
        let answers: u64 = runs.iter().map(|r| r.answers as u64).sum();
        let wins: u64 = runs.iter().map(|r| r.victories as u64).sum();
        let drops: u64 = runs.iter().map(|r| r.item_drops as u64).sum();

        Self {
            num_runs: runs.len() as u32,
            fights_per_run: config.fights_per_run,
            accuracy: config.accuracy,
            mode: config.mode.name().to_string(),
            avg_final_zone: mean(&runs, |r| r.final_zone as f64),
            max_final_zone: runs.iter().map(|r| r.final_zone).max().unwrap_or(0),
            avg_victories: mean(&runs, |r| r.victories as f64),
            avg_defeats: mean(&runs, |r| r.defeats as f64),
            avg_answers_per_fight: answers as f64 / fights.max(1) as f64,
            avg_coins_earned: mean(&runs, |r| r.coins_earned as f64),
            avg_gems_earned: mean(&runs, |r| r.gems_earned as f64),
            avg_best_streak: mean(&runs, |r| r.best_streak as f64),
            avg_research_levels: mean(&runs, |r| r.research_levels as f64),
            avg_achievements: mean(&runs, |r| r.achievements_unlocked as f64),
            drop_rate: drops as f64 / wins.max(1) as f64,
            zone_distribution,
            runs,
        }
    }

    pub fn to_text(&self) -> String {
        let mut report = String::new();

        report.push_str("═══════════════════════════════════════════════════════════════\n");
        report.push_str("                    SIMULATION REPORT\n");
        report.push_str("═══════════════════════════════════════════════════════════════\n\n");

        report.push_str(&format!(
            "Runs: {}   Fights/run: {}   Accuracy: {:.0}%   Mode: {}\n\n",
            self.num_runs,
            self.fights_per_run,
            self.accuracy * 100.0,
            self.mode
        ));

        report.push_str("── PROGRESSION ──────────────────────────────────────────────────\n");
        report.push_str(&format!("  Avg Final Zone:      {:.1}\n", self.avg_final_zone));
        report.push_str(&format!("  Best Final Zone:     {}\n", self.max_final_zone));
        report.push_str(&format!("  Avg Victories:       {:.1}\n", self.avg_victories));
        report.push_str(&format!("  Avg Defeats:         {:.1}\n", self.avg_defeats));
        report.push_str(&format!(
            "  Answers per Fight:   {:.1}\n",
            self.avg_answers_per_fight
        ));
        report.push_str(&format!("  Avg Best Streak:     {:.1}\n\n", self.avg_best_streak));

        report.push_str("── ECONOMY ──────────────────────────────────────────────────────\n");
        report.push_str(&format!("  Avg Coins Earned:    {:.0}\n", self.avg_coins_earned));
        report.push_str(&format!("  Avg Gems Earned:     {:.0}\n", self.avg_gems_earned));
        report.push_str(&format!(
            "  Avg Research Levels: {:.1}\n",
            self.avg_research_levels
        ));
        report.push_str(&format!("  Avg Achievements:    {:.1}\n", self.avg_achievements));
        report.push_str(&format!(
            "  Drop Rate:           {:.1}% of victories\n\n",
            self.drop_rate * 100.0
        ));

        report.push_str("── FINAL ZONES ──────────────────────────────────────────────────\n");
        for (zone, count) in &self.zone_distribution {
            let pct = *count as f64 / self.num_runs.max(1) as f64 * 100.0;
            let bar = "█".repeat((pct / 5.0) as usize);
            report.push_str(&format!("  Zone {:3}: {:>5.1}% {}\n", zone, pct, bar));
        }

        report.push_str("\n═══════════════════════════════════════════════════════════════\n");
        report
    }

    /// JSON report for further analysis. Per-run rows are left out.
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| "{}".to_string())
    }
}
