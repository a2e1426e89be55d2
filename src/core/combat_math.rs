//! Pure combat math.
//!
//! Nothing here touches player or encounter state; callers apply the results.

use crate::core::constants::*;
use rand::Rng;

/// Result of an attack roll.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttackResult {
    /// Damage dealt (after crit multiplier if applicable).
    pub damage: u32,
    /// Whether this attack was a critical hit.
    pub is_crit: bool,
}

/// Roll a player attack: base attack plus a small random bonus, doubled on a crit.
pub fn calculate_player_attack(base_attack: u32, rng: &mut impl Rng) -> AttackResult {
    let mut damage = base_attack.saturating_add(roll_attack_bonus(rng));

    let is_crit = roll_crit(CRIT_CHANCE_PERCENT, rng);
    if is_crit {
        damage = damage.saturating_mul(CRIT_MULTIPLIER);
    }

    AttackResult { damage, is_crit }
}

/// Roll an enemy attack. Enemies never crit.
pub fn calculate_enemy_attack(base_attack: u32, rng: &mut impl Rng) -> u32 {
    base_attack.saturating_add(roll_attack_bonus(rng))
}

/// Uniform bonus in `0..=ATTACK_BONUS_MAX`.
pub fn roll_attack_bonus(rng: &mut impl Rng) -> u32 {
    rng.gen_range(0..=ATTACK_BONUS_MAX)
}

/// Roll for critical hit.
///
/// # Arguments
/// * `crit_chance_percent` - Chance to crit (0-100+)
/// * `rng` - Random number generator
pub fn roll_crit(crit_chance_percent: u32, rng: &mut impl Rng) -> bool {
    let roll = rng.gen_range(0..100);
    roll < crit_chance_percent
}

/// Coin flip for escaping an encounter.
pub fn roll_flee(rng: &mut impl Rng) -> bool {
    rng.gen_range(0..100) < FLEE_CHANCE_PERCENT
}

/// Apply damage to HP, returning remaining HP (minimum 0).
pub fn apply_damage(current_hp: u32, damage: u32) -> u32 {
    current_hp.saturating_sub(damage)
}

/// How much a potion restores for a character with `max_health`.
/// Always at least 1 so a potion is never wasted outright.
pub fn potion_heal_amount(max_health: u32) -> u32 {
    (max_health.saturating_mul(POTION_HEAL_PERCENT) / 100).max(1)
}

/// Spell power grows every few victories and stops at `SPELL_MAX_POWER_LEVEL`.
pub fn spell_power_level(battles_won: u32) -> u32 {
    (battles_won / SPELL_BATTLES_PER_POWER_LEVEL).min(SPELL_MAX_POWER_LEVEL)
}

/// Closed form of "base damage plus a flat bonus for every power level".
/// Levels above the cap are treated as the cap.
pub fn spell_damage(power_level: u32) -> u32 {
    let level = power_level.min(SPELL_MAX_POWER_LEVEL);
    SPELL_BASE_DAMAGE + SPELL_DAMAGE_PER_LEVEL * level
}

/// Gold for beating the enemy at `enemy_index` after `battles_won` prior wins.
pub fn victory_gold(enemy_index: usize, battles_won: u32) -> u32 {
    GOLD_REWARD_BASE
        + GOLD_REWARD_PER_TIER * enemy_index as u32
        + GOLD_REWARD_PER_WIN.saturating_mul(battles_won)
}

pub fn victory_score(enemy_index: usize) -> u32 {
    SCORE_REWARD_BASE + SCORE_REWARD_PER_TIER * enemy_index as u32
}
