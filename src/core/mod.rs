//! Core game state and logic.

pub mod combat_math;
pub mod constants;
pub mod game_logic;
pub mod game_loop;
pub mod game_state;

pub use constants::*;
pub use game_logic::*;
pub use game_loop::*;
pub use game_state::*;
