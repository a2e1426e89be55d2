use crate::core::constants::*;

/// All persistent player progress.
///
/// Menu code may adjust gold, potions, attack, max_health and health.
/// `score`, `battles_won` and `streak` only change through combat and resting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerState {
    pub health: u32,
    pub max_health: u32,
    pub attack: u32,
    pub gold: u32,
    pub potions: u32,
    pub score: u32,
    pub battles_won: u32,
    /// Consecutive wins without fleeing or resting.
    pub streak: u32,
}

impl Default for PlayerState {
    fn default() -> Self {
        Self::new()
    }
}

impl PlayerState {
    /// A fresh character.
    pub fn new() -> Self {
        Self {
            health: START_HEALTH,
            max_health: START_MAX_HEALTH,
            attack: START_ATTACK,
            gold: START_GOLD,
            potions: START_POTIONS,
            score: 0,
            battles_won: 0,
            streak: 0,
        }
    }

    pub fn is_alive(&self) -> bool {
        self.health > 0
    }

    /// At or above `POTION_NEAR_FULL_PERCENT` of max health.
    pub fn is_near_full_health(&self) -> bool {
        u64::from(self.health) * 100
            >= u64::from(self.max_health) * u64::from(POTION_NEAR_FULL_PERCENT)
    }

    /// Health never exceeds max health.
    pub fn is_valid(&self) -> bool {
        self.health <= self.max_health
    }

    pub fn take_damage(&mut self, amount: u32) {
        self.health = crate::core::combat_math::apply_damage(self.health, amount);
    }

    pub fn heal(&mut self, amount: u32) {
        self.health = self.health.saturating_add(amount).min(self.max_health);
    }
}
