//! Research tracks and the derived-stats calculator.

#![allow(unused_imports)]

pub mod derived_stats;
pub mod research;

pub use derived_stats::*;
pub use research::*;
