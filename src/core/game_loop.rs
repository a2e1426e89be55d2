//! Top-level menu loop: fight, inspect, rest, save and quit.

use crate::combat::logic::resolve_encounter;
use crate::combat::types::CombatOutcome;
use crate::core::game_logic::{handle_defeat, rest};
use crate::core::game_state::PlayerState;
use crate::errors::{GameError, SaveError};
use crate::high_score::HighScoreReport;
use crate::input::PromptReader;
use crate::save_manager::SaveManager;
use crate::ui;
use rand::Rng;
use std::io::{BufRead, Write};

/// Why the menu loop returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameExit {
    /// The player chose "Save game and exit".
    Saved,
    /// Input ran out; progress was saved.
    InputClosed,
    /// The player died. The save is gone and the process should end.
    Defeated(HighScoreReport),
}

/// Loads the save record, or starts fresh when there is none or it is bad.
pub fn start_game<W: Write>(
    save_manager: &SaveManager,
    out: &mut W,
) -> Result<PlayerState, GameError> {
    match save_manager.load() {
        Ok(state) => {
            writeln!(
                out,
                "Welcome back! Save loaded ({} battles won).",
                state.battles_won
            )?;
            Ok(state)
        }
        Err(SaveError::Absent) => {
            writeln!(out, "Starting a new adventure.")?;
            Ok(PlayerState::new())
        }
        Err(SaveError::Tampered(reason)) => {
            writeln!(
                out,
                "Your save file was corrupted or modified ({}). Starting a new game.",
                reason
            )?;
            Ok(PlayerState::new())
        }
        Err(e) => Err(e.into()),
    }
}

/// Runs the main menu until the player quits or dies.
pub fn run_game<R: BufRead, W: Write>(
    state: &mut PlayerState,
    save_manager: &SaveManager,
    input: &mut PromptReader<R>,
    out: &mut W,
    rng: &mut impl Rng,
) -> Result<GameExit, GameError> {
    loop {
        ui::print_main_menu(out)?;
        let max_choice = ui::MAIN_MENU_ENTRIES.len() as u32;
        let choice = match input.read_choice(out, ui::MAIN_MENU_PROMPT, 1..=max_choice) {
            Ok(choice) => choice,
            Err(GameError::InputClosed) => return save_on_close(state, save_manager),
            Err(e) => return Err(e),
        };

        match choice {
            1 => match resolve_encounter(state, input, out, rng) {
                Ok(CombatOutcome::Defeat) => {
                    let report = match handle_defeat(state, save_manager) {
                        Ok(report) => report,
                        Err(e) => {
                            let stored = HighScoreReport {
                                best: save_manager.load_high_score(),
                                is_new: false,
                            };
                            ui::print_high_score(out, state.score, &stored)?;
                            return Err(e.into());
                        }
                    };
                    ui::print_high_score(out, state.score, &report)?;
                    return Ok(GameExit::Defeated(report));
                }
                Ok(_) => {}
                Err(GameError::InputClosed) => return save_on_close(state, save_manager),
                Err(e) => return Err(e),
            },
            2 => ui::print_stats(out, state)?,
            3 => {
                let result = rest(state);
                ui::print_rest_result(out, &result)?;
            }
            _ => {
                save_manager.save(state)?;
                writeln!(out, "Game saved. Farewell, adventurer!")?;
                return Ok(GameExit::Saved);
            }
        }
    }
}

fn save_on_close(
    state: &PlayerState,
    save_manager: &SaveManager,
) -> Result<GameExit, GameError> {
    log::info!("input closed, saving before exit");
    save_manager.save(state)?;
    Ok(GameExit::InputClosed)
}
