//! Item system: types, generation, drops, inventory, collection book and forge.

#![allow(unused_imports)]

pub mod collection;
pub mod drops;
pub mod equipment;
pub mod forge;
pub mod generation;
pub mod names;
pub mod types;

pub use collection::*;
pub use drops::*;
pub use equipment::*;
pub use forge::*;
pub use generation::*;
pub use types::*;
