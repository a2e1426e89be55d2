//! Plain text rendering for menus and combat.
//!
//! Everything writes to a caller-supplied sink so the game can be driven
//! from tests as easily as from a terminal.

use crate::combat::types::{CombatAction, CombatEvent, CombatOutcome, Encounter};
use crate::core::game_logic::RestResult;
use crate::core::game_state::PlayerState;
use crate::high_score::HighScoreReport;
use crossterm::style::Stylize;
use std::io::{self, Write};

pub const MAIN_MENU_PROMPT: &str = "Enter your choice: ";
pub const COMBAT_PROMPT: &str = "Choose an action: ";

/// Main menu entries, numbered from 1.
pub const MAIN_MENU_ENTRIES: [&str; 4] = ["Start Combat", "View Stats", "Rest", "Save game and exit"];

pub fn print_main_menu<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", "=== Main Menu ===".bold())?;
    writeln!(out)?;
    for (i, entry) in MAIN_MENU_ENTRIES.iter().enumerate() {
        writeln!(out, "{}. {}", i + 1, entry)?;
    }
    writeln!(out)
}

pub fn print_stats<W: Write>(out: &mut W, state: &PlayerState) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", "=== Player Stats ===".bold())?;
    writeln!(out, "Health:      {}/{}", state.health, state.max_health)?;
    writeln!(out, "Attack:      {}", state.attack)?;
    writeln!(out, "Gold:        {}", state.gold)?;
    writeln!(out, "Potions:     {}", state.potions)?;
    writeln!(out, "Score:       {}", state.score)?;
    writeln!(out, "Battles won: {}", state.battles_won)?;
    writeln!(out, "Win streak:  {}", state.streak)
}

pub fn print_encounter_intro<W: Write>(out: &mut W, encounter: &Encounter) -> io::Result<()> {
    writeln!(out)?;
    writeln!(
        out,
        "A wild {} appears! (HP {}, ATK {})",
        encounter.name.red().bold(),
        encounter.max_hp,
        encounter.attack
    )
}

pub fn print_combat_status<W: Write>(
    out: &mut W,
    state: &PlayerState,
    encounter: &Encounter,
) -> io::Result<()> {
    writeln!(out)?;
    writeln!(
        out,
        "You: {}/{} HP | {}: {}/{} HP | Potions: {} | Spells left: {}",
        state.health,
        state.max_health,
        encounter.name,
        encounter.current_hp,
        encounter.max_hp,
        state.potions,
        encounter.spell_charges
    )?;
    for (i, action) in CombatAction::all().iter().enumerate() {
        writeln!(out, "{}. {}", i + 1, action.label())?;
    }
    Ok(())
}

/// One line describing a combat event.
pub fn describe_event(event: &CombatEvent, enemy_name: &str) -> String {
    match event {
        CombatEvent::PlayerAttack {
            damage,
            was_crit: true,
        } => format!(
            "{} You hit the {} for {} damage.",
            "Critical hit!".yellow().bold(),
            enemy_name,
            damage
        ),
        CombatEvent::PlayerAttack { damage, .. } => {
            format!("You hit the {} for {} damage.", enemy_name, damage)
        }
        CombatEvent::PotionUsed {
            healed,
            potions_left,
        } => format!(
            "You drink a potion and recover {} HP. ({} left)",
            healed, potions_left
        ),
        CombatEvent::NoPotions => "You have no potions left!".to_string(),
        CombatEvent::AlmostFullHealth => "You are already near full health.".to_string(),
        CombatEvent::FleeSucceeded => "You escaped! Your win streak is lost.".to_string(),
        CombatEvent::FleeFailed => "You failed to escape!".to_string(),
        CombatEvent::SpellCast {
            damage,
            power_level,
            charges_left,
        } => format!(
            "You cast a level {} spell for {} damage! ({} casts left)",
            power_level,
            damage.to_string().magenta().bold(),
            charges_left
        ),
        CombatEvent::SpellFizzled { battles_required } => format!(
            "Your spell fizzles. You need {} victories before magic answers you.",
            battles_required
        ),
        CombatEvent::SpellsExhausted => "You are out of spells for this fight.".to_string(),
        CombatEvent::EnemyAttack { damage } => {
            format!("The {} hits you for {} damage.", enemy_name, damage)
        }
        CombatEvent::EnemyDefeated => format!("You defeated the {}!", enemy_name),
        CombatEvent::PlayerDefeated => format!("{}", "You have been defeated...".red().bold()),
    }
}

pub fn print_event<W: Write>(out: &mut W, event: &CombatEvent, enemy_name: &str) -> io::Result<()> {
    writeln!(out, "{}", describe_event(event, enemy_name))
}

pub fn print_outcome<W: Write>(out: &mut W, outcome: &CombatOutcome) -> io::Result<()> {
    match outcome {
        CombatOutcome::Victory { gold, score } => writeln!(
            out,
            "{} +{} gold, +{} score.",
            "Victory!".green().bold(),
            gold,
            score
        ),
        CombatOutcome::Fled => writeln!(out, "You live to fight another day."),
        CombatOutcome::Defeat => writeln!(out, "{}", "GAME OVER".red().bold()),
    }
}

pub fn print_rest_result<W: Write>(out: &mut W, result: &RestResult) -> io::Result<()> {
    match result {
        RestResult::Rested { healed } => writeln!(
            out,
            "You rest at the inn and recover {} HP. Your win streak resets.",
            healed
        ),
        RestResult::NeedMoreWins { remaining } => writeln!(
            out,
            "You are too restless to sleep. Win {} more battle(s) in a row first.",
            remaining
        ),
    }
}

pub fn print_high_score<W: Write>(
    out: &mut W,
    final_score: u32,
    report: &HighScoreReport,
) -> io::Result<()> {
    writeln!(out, "Final score: {}", final_score)?;
    if report.is_new {
        writeln!(out, "{}", "New High Score!".yellow().bold())?;
    }
    writeln!(
        out,
        "High score: {} (level {})",
        report.best.score, report.best.level
    )
}
