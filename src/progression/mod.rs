//! Knowledge streak and lifetime statistics.

#![allow(unused_imports)]

pub mod statistics;
pub mod streak;

pub use statistics::*;
pub use streak::*;
