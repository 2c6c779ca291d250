//! Snapshot persistence over a string key-value store.

#![allow(unused_imports)]

pub mod error;
pub mod lenient;
pub mod snapshot;
pub mod store;

pub use error::*;
pub use lenient::*;
pub use snapshot::*;
pub use store::*;
