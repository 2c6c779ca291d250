use crate::core::constants::{RESEARCH_BASE_COST, RESEARCH_COST_STEP, RESEARCH_PERCENT_PER_LEVEL};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResearchTrack {
    Atk,
    Def,
    Hp,
}

impl ResearchTrack {
    pub const ALL: [ResearchTrack; 3] = [ResearchTrack::Atk, ResearchTrack::Def, ResearchTrack::Hp];

    pub fn name(&self) -> &'static str {
        match self {
            ResearchTrack::Atk => "ATK",
            ResearchTrack::Def => "DEF",
            ResearchTrack::Hp => "HP",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ResearchLevel {
    pub level: u32,
    pub total_spent: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Research {
    pub atk: ResearchLevel,
    pub def: ResearchLevel,
    pub hp: ResearchLevel,
}

impl Research {
    pub fn track(&self, track: ResearchTrack) -> &ResearchLevel {
        match track {
            ResearchTrack::Atk => &self.atk,
            ResearchTrack::Def => &self.def,
            ResearchTrack::Hp => &self.hp,
        }
    }

    pub fn level(&self, track: ResearchTrack) -> u32 {
        self.track(track).level
    }

    pub fn total_levels(&self) -> u32 {
        self.atk.level + self.def.level + self.hp.level
    }

    /// Records one purchased level at `cost`.
    pub fn advance(&mut self, track: ResearchTrack, cost: u64) {
        let entry = match track {
            ResearchTrack::Atk => &mut self.atk,
            ResearchTrack::Def => &mut self.def,
            ResearchTrack::Hp => &mut self.hp,
        };
        entry.level += 1;
        entry.total_spent += cost;
    }
}

/// Coins needed to buy the next level when at `level`.
pub fn research_cost(level: u32) -> u64 {
    RESEARCH_BASE_COST + level as u64 * RESEARCH_COST_STEP
}

/// Percent bonus granted by `level`.
pub fn research_bonus(level: u32) -> u32 {
    level * RESEARCH_PERCENT_PER_LEVEL
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cost_formula() {
        assert_eq!(research_cost(0), 100);
        assert_eq!(research_cost(1), 125);
        assert_eq!(research_cost(10), 350);
    }

    #[test]
    fn test_bonus_formula() {
        assert_eq!(research_bonus(0), 0);
        assert_eq!(research_bonus(3), 30);
    }

    #[test]
    fn test_cost_and_bonus_strictly_increase() {
        for n in 0..200 {
            assert!(research_cost(n + 1) > research_cost(n));
            assert!(research_bonus(n + 1) > research_bonus(n));
        }
    }

    #[test]
    fn test_advance_tracks_independently() {
        let mut research = Research::default();
        research.advance(ResearchTrack::Def, 100);
        research.advance(ResearchTrack::Def, 125);
        assert_eq!(research.level(ResearchTrack::Def), 2);
        assert_eq!(research.def.total_spent, 225);
        assert_eq!(research.level(ResearchTrack::Atk), 0);
        assert_eq!(research.total_levels(), 2);
    }
}
