use crate::combat::types::*;
use crate::core::combat_math::*;
use crate::core::constants::*;
use crate::core::game_logic::use_potion;
use crate::core::game_state::PlayerState;
use crate::errors::GameError;
use crate::input::PromptReader;
use crate::ui;
use rand::Rng;
use std::io::{BufRead, Write};

/// Highest catalog index that may spawn after `battles_won` victories.
pub fn roster_limit(battles_won: u32) -> usize {
    ENEMY_ROSTER_BANDS
        .iter()
        .rev()
        .find(|(min_wins, _)| battles_won >= *min_wins)
        .map(|(_, max_index)| (*max_index).min(ENEMY_CATALOG.len() - 1))
        .unwrap_or(0)
}

/// Draws an enemy uniformly from the unlocked roster and scales it.
pub fn spawn_encounter(battles_won: u32, rng: &mut impl Rng) -> Encounter {
    let index = rng.gen_range(0..=roster_limit(battles_won));
    let encounter = Encounter::new(index, battles_won);
    log::debug!(
        "spawned {} (hp {}, atk {}) at {} wins",
        encounter.name,
        encounter.max_hp,
        encounter.attack,
        battles_won
    );
    encounter
}

/// Resolves one player action. Refused actions leave all state untouched.
pub fn player_turn(
    state: &mut PlayerState,
    encounter: &mut Encounter,
    action: CombatAction,
    rng: &mut impl Rng,
) -> CombatEvent {
    match action {
        CombatAction::Attack => {
            let attack = calculate_player_attack(state.attack, rng);
            encounter.take_damage(attack.damage);
            log::debug!(
                "player hit {} for {} (crit: {})",
                encounter.name,
                attack.damage,
                attack.is_crit
            );
            CombatEvent::PlayerAttack {
                damage: attack.damage,
                was_crit: attack.is_crit,
            }
        }
        CombatAction::UsePotion => {
            if state.potions == 0 {
                return CombatEvent::NoPotions;
            }
            if state.is_near_full_health() {
                return CombatEvent::AlmostFullHealth;
            }
            let healed = use_potion(state).unwrap_or(0);
            CombatEvent::PotionUsed {
                healed,
                potions_left: state.potions,
            }
        }
        CombatAction::Flee => {
            if roll_flee(rng) {
                state.streak = 0;
                CombatEvent::FleeSucceeded
            } else {
                CombatEvent::FleeFailed
            }
        }
        CombatAction::CastSpell => {
            if state.battles_won < SPELL_MIN_BATTLES_WON {
                return CombatEvent::SpellFizzled {
                    battles_required: SPELL_MIN_BATTLES_WON,
                };
            }
            if encounter.spell_charges == 0 {
                return CombatEvent::SpellsExhausted;
            }
            encounter.spell_charges -= 1;
            let power_level = spell_power_level(state.battles_won);
            let damage = spell_damage(power_level);
            encounter.take_damage(damage);
            log::debug!("spell level {} hit for {}", power_level, damage);
            CombatEvent::SpellCast {
                damage,
                power_level,
                charges_left: encounter.spell_charges,
            }
        }
    }
}

/// The enemy strikes back.
pub fn enemy_turn(
    state: &mut PlayerState,
    encounter: &Encounter,
    rng: &mut impl Rng,
) -> CombatEvent {
    let damage = calculate_enemy_attack(encounter.attack, rng);
    state.take_damage(damage);
    log::debug!("{} hit player for {}", encounter.name, damage);
    CombatEvent::EnemyAttack { damage }
}

/// Pays out a win. Rewards use the win count from before this victory.
pub fn grant_victory_rewards(state: &mut PlayerState, encounter: &Encounter) -> CombatOutcome {
    let gold = victory_gold(encounter.enemy_index, state.battles_won);
    let score = victory_score(encounter.enemy_index);

    state.gold = state.gold.saturating_add(gold);
    state.score = state.score.saturating_add(score);
    state.battles_won = state.battles_won.saturating_add(1);
    state.streak = state.streak.saturating_add(1);

    CombatOutcome::Victory { gold, score }
}

/// Runs a full fight, prompting `input` for each player turn.
///
/// Returns `CombatOutcome::Defeat` with the player at 0 HP; the caller owns
/// the game-over cleanup.
pub fn resolve_encounter<R: BufRead, W: Write>(
    state: &mut PlayerState,
    input: &mut PromptReader<R>,
    out: &mut W,
    rng: &mut impl Rng,
) -> Result<CombatOutcome, GameError> {
    let mut encounter = spawn_encounter(state.battles_won, rng);
    ui::print_encounter_intro(out, &encounter)?;

    let outcome = loop {
        ui::print_combat_status(out, state, &encounter)?;

        let event = loop {
            let actions = CombatAction::all();
            let choice = input.read_choice(out, ui::COMBAT_PROMPT, 1..=actions.len() as u32)?;
            let action = actions[choice as usize - 1];
            let event = player_turn(state, &mut encounter, action, rng);
            ui::print_event(out, &event, encounter.name)?;
            if event.consumes_turn() {
                break event;
            }
        };

        if event == CombatEvent::FleeSucceeded {
            break CombatOutcome::Fled;
        }

        if !encounter.is_alive() {
            ui::print_event(out, &CombatEvent::EnemyDefeated, encounter.name)?;
            break grant_victory_rewards(state, &encounter);
        }

        let enemy_event = enemy_turn(state, &encounter, rng);
        ui::print_event(out, &enemy_event, encounter.name)?;

        if !state.is_alive() {
            ui::print_event(out, &CombatEvent::PlayerDefeated, encounter.name)?;
            break CombatOutcome::Defeat;
        }
    };

    log::info!("encounter with {} ended: {:?}", encounter.name, outcome);
    ui::print_outcome(out, &outcome)?;
    Ok(outcome)
}
