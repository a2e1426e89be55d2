//! TextQuest - Turn-Based Text Adventure Library
//!
//! This module exposes the game logic for testing and external use.

pub mod combat;
pub mod core;
pub mod errors;
pub mod high_score;
pub mod input;
pub mod save_manager;
pub mod ui;
pub mod utils;

pub use crate::core::game_state::PlayerState;
pub use errors::{GameError, SaveError};
pub use save_manager::SaveManager;
