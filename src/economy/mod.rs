//! Side economies: mining, promo codes and cheat toggles.

#![allow(unused_imports)]

pub mod cheats;
pub mod mining;
pub mod promo;

pub use cheats::*;
pub use mining::*;
pub use promo::*;
