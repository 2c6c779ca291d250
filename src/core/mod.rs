//! Core game state, modes and tunables.

#![allow(unused_imports)]

pub mod constants;
pub mod game_mode;
pub mod game_state;

pub use constants::*;
pub use game_mode::*;
pub use game_state::*;
