use crate::core::combat_math::potion_heal_amount;
use crate::core::constants::*;
use crate::core::game_state::PlayerState;
use crate::errors::SaveError;
use crate::high_score::HighScoreReport;
use crate::save_manager::SaveManager;

/// Drinks a potion if one is left. Returns the HP actually restored.
pub fn use_potion(state: &mut PlayerState) -> Option<u32> {
    if state.potions == 0 {
        return None;
    }
    state.potions -= 1;
    let before = state.health;
    state.heal(potion_heal_amount(state.max_health));
    Some(state.health - before)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RestResult {
    Rested { healed: u32 },
    NeedMoreWins { remaining: u32 },
}

/// Full heal, paid for with the current win streak.
pub fn rest(state: &mut PlayerState) -> RestResult {
    if state.streak < REST_STREAK_REQUIRED {
        return RestResult::NeedMoreWins {
            remaining: REST_STREAK_REQUIRED - state.streak,
        };
    }
    let healed = state.max_health - state.health.min(state.max_health);
    state.health = state.max_health;
    state.streak = 0;
    RestResult::Rested { healed }
}

/// Game-over bookkeeping: record the high score, then wipe the save.
///
/// The save is removed even when the high score could not be written.
pub fn handle_defeat(
    state: &PlayerState,
    save_manager: &SaveManager,
) -> Result<HighScoreReport, SaveError> {
    let report = save_manager.record_high_score(state.score, state.battles_won);
    save_manager.delete_save()?;
    report
}
