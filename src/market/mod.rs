//! Yojef market: a rotating shelf of relic offers.

use crate::core::constants::{MARKET_MAX_OFFERS, MARKET_MIN_OFFERS, MARKET_REFRESH_SECONDS};
use crate::items::generation::generate_relic;
use crate::items::types::Relic;
use crate::persistence::lenient::vec_skipping_malformed;
use rand::Rng;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct YojefMarket {
    #[serde(deserialize_with = "vec_skipping_malformed")]
    pub items: Vec<Relic>,
    pub last_refresh: i64,
    pub next_refresh: i64,
}

impl YojefMarket {
    pub fn new(now: i64, rng: &mut impl Rng) -> Self {
        let mut market = Self::default();
        market.refresh(now, rng);
        market
    }

    pub fn is_due(&self, now: i64) -> bool {
        now >= self.next_refresh
    }

    /// Replaces the whole shelf. Unsold offers are gone for good.
    pub fn refresh(&mut self, now: i64, rng: &mut impl Rng) {
        self.items = generate_offers(rng);
        self.last_refresh = now;
        self.next_refresh = now + MARKET_REFRESH_SECONDS;
    }

    /// Refreshes when the countdown has elapsed. Returns true if it did.
    pub fn refresh_if_due(&mut self, now: i64, rng: &mut impl Rng) -> bool {
        if !self.is_due(now) {
            return false;
        }
        self.refresh(now, rng);
        true
    }

    pub fn find(&self, id: &str) -> Option<&Relic> {
        self.items.iter().find(|r| r.id == id)
    }

    pub fn take(&mut self, id: &str) -> Option<Relic> {
        let index = self.items.iter().position(|r| r.id == id)?;
        Some(self.items.remove(index))
    }

    pub fn seconds_until_refresh(&self, now: i64) -> i64 {
        (self.next_refresh - now).max(0)
    }
}

pub fn generate_offers(rng: &mut impl Rng) -> Vec<Relic> {
    let count = rng.gen_range(MARKET_MIN_OFFERS..=MARKET_MAX_OFFERS);
    (0..count).map(|_| generate_relic(rng)).collect()
}
