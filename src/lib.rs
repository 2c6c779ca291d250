//! Hugoland - the game-state core of a trivia-gated idle RPG.
//!
//! [`game::Game`] is the only writer of [`core::GameState`]. A front end
//! drives it with actions, renders from [`game::Game::state`] and drains
//! [`effects::VisualEffect`]s after each call.

pub mod achievements;
pub mod character;
pub mod combat;
pub mod core;
pub mod economy;
pub mod effects;
pub mod game;
pub mod items;
pub mod market;
pub mod persistence;
pub mod progression;
pub mod simulator;
