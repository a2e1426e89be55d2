//! Turn-based combat: enemy catalog, encounter state and the fight loop.

pub mod logic;
pub mod types;

pub use logic::*;
pub use types::*;
