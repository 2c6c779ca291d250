use crate::items::Item;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// The one-time bundle a code grants.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PromoReward {
    pub coins: u64,
    pub gems: u64,
    pub items: Vec<Item>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PromoCode {
    pub code: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub reward: PromoReward,
}

pub fn promo_catalog() -> Vec<PromoCode> {
    vec![PromoCode {
        code: "TNT",
        name: "Explosive Start",
        description: "Get a head start with bonus resources!",
        reward: PromoReward {
            coins: 500,
            gems: 50,
            items: Vec::new(),
        },
    }]
}

/// Codes must match exactly, case included.
pub fn find_promo_code(code: &str) -> Option<PromoCode> {
    promo_catalog().into_iter().find(|p| p.code == code)
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PromoCodes {
    pub used_codes: BTreeSet<String>,
}

impl PromoCodes {
    pub fn is_used(&self, code: &str) -> bool {
        self.used_codes.contains(code)
    }

    pub fn mark_used(&mut self, code: &str) {
        self.used_codes.insert(code.to_string());
    }
}
