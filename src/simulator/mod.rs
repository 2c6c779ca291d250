//! Balance simulator: seeded auto-play through the real dispatcher.
//!
//! A run answers questions at a fixed accuracy, fights zone after zone and
//! spends its income with a simple policy. Every rule it touches is the
//! game's own, so the numbers match real play.

mod config;
mod report;
mod runner;

pub use config::SimConfig;
pub use report::{RunStats, SimReport};
pub use runner::{run_simulation, simulate_single_run};
