use crate::core::constants::*;

/// Static enemy definition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnemyTemplate {
    pub name: &'static str,
    pub base_hp: u32,
    pub base_attack: u32,
}

/// Every enemy in the game, weakest roster first.
pub const ENEMY_CATALOG: [EnemyTemplate; 5] = [
    EnemyTemplate {
        name: "Goblin",
        base_hp: 30,
        base_attack: 5,
    },
    EnemyTemplate {
        name: "Troll",
        base_hp: 50,
        base_attack: 10,
    },
    EnemyTemplate {
        name: "Dragon",
        base_hp: 100,
        base_attack: 20,
    },
    EnemyTemplate {
        name: "Orc",
        base_hp: 40,
        base_attack: 7,
    },
    EnemyTemplate {
        name: "Vampire",
        base_hp: 60,
        base_attack: 15,
    },
];

/// One fight. Lives only as long as `resolve_encounter`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Encounter {
    /// Position in `ENEMY_CATALOG`; doubles as the reward tier.
    pub enemy_index: usize,
    pub name: &'static str,
    pub max_hp: u32,
    pub current_hp: u32,
    pub attack: u32,
    /// Spell uses left in this fight only.
    pub spell_charges: u32,
}

impl Encounter {
    /// Scales a catalog entry linearly by `battles_won`.
    pub fn new(enemy_index: usize, battles_won: u32) -> Self {
        let template = &ENEMY_CATALOG[enemy_index];
        let max_hp = template
            .base_hp
            .saturating_add(ENEMY_HP_PER_WIN.saturating_mul(battles_won));
        Self {
            enemy_index,
            name: template.name,
            max_hp,
            current_hp: max_hp,
            attack: template
                .base_attack
                .saturating_add(ENEMY_ATTACK_PER_WIN.saturating_mul(battles_won)),
            spell_charges: SPELL_CHARGES_PER_ENCOUNTER,
        }
    }

    pub fn is_alive(&self) -> bool {
        self.current_hp > 0
    }

    pub fn take_damage(&mut self, amount: u32) {
        self.current_hp = crate::core::combat_math::apply_damage(self.current_hp, amount);
    }
}

/// What the player chose to do this turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CombatAction {
    Attack,
    UsePotion,
    Flee,
    CastSpell,
}

impl CombatAction {
    pub fn label(self) -> &'static str {
        match self {
            Self::Attack => "Attack",
            Self::UsePotion => "Use Potion",
            Self::Flee => "Flee",
            Self::CastSpell => "Cast Spell",
        }
    }

    /// Combat menu order: entry `n` is typed as `n + 1`.
    pub fn all() -> [Self; 4] {
        [Self::Attack, Self::UsePotion, Self::Flee, Self::CastSpell]
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CombatEvent {
    PlayerAttack {
        damage: u32,
        was_crit: bool,
    },
    PotionUsed {
        healed: u32,
        potions_left: u32,
    },
    NoPotions,
    AlmostFullHealth,
    FleeSucceeded,
    FleeFailed,
    SpellCast {
        damage: u32,
        power_level: u32,
        charges_left: u32,
    },
    /// Too inexperienced; the cast fails but the turn is spent.
    SpellFizzled {
        battles_required: u32,
    },
    SpellsExhausted,
    EnemyAttack {
        damage: u32,
    },
    EnemyDefeated,
    PlayerDefeated,
}

impl CombatEvent {
    /// Whether the enemy gets to act after this player event.
    /// Refused actions re-prompt instead.
    pub fn consumes_turn(&self) -> bool {
        !matches!(
            self,
            Self::NoPotions | Self::AlmostFullHealth | Self::SpellsExhausted
        )
    }
}

/// How an encounter ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CombatOutcome {
    Victory { gold: u32, score: u32 },
    Defeat,
    Fled,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encounter_scales_with_battles_won() {
        let fresh = Encounter::new(0, 0);
        assert_eq!(fresh.name, "Goblin");
        assert_eq!(fresh.max_hp, 30);
        assert_eq!(fresh.current_hp, 30);
        assert_eq!(fresh.attack, 5);

        let veteran = Encounter::new(0, 10);
        assert_eq!(veteran.max_hp, 30 + 10 * ENEMY_HP_PER_WIN);
        assert_eq!(veteran.attack, 5 + 10 * ENEMY_ATTACK_PER_WIN);
    }

    #[test]
    fn test_encounter_starts_with_full_spell_charges() {
        let encounter = Encounter::new(4, 3);
        assert_eq!(encounter.spell_charges, SPELL_CHARGES_PER_ENCOUNTER);
    }

    #[test]
    fn test_encounter_take_damage_clamps() {
        let mut encounter = Encounter::new(1, 0);
        encounter.take_damage(20);
        assert_eq!(encounter.current_hp, 30);
        encounter.take_damage(1000);
        assert_eq!(encounter.current_hp, 0);
        assert!(!encounter.is_alive());
    }

    #[test]
    fn test_action_menu_order() {
        assert_eq!(
            CombatAction::all(),
            [
                CombatAction::Attack,
                CombatAction::UsePotion,
                CombatAction::Flee,
                CombatAction::CastSpell
            ]
        );
    }

    #[test]
    fn test_refused_actions_do_not_consume_turn() {
        assert!(!CombatEvent::NoPotions.consumes_turn());
        assert!(!CombatEvent::AlmostFullHealth.consumes_turn());
        assert!(!CombatEvent::SpellsExhausted.consumes_turn());
        assert!(CombatEvent::FleeFailed.consumes_turn());
        assert!(CombatEvent::SpellFizzled {
            battles_required: 3
        }
        .consumes_turn());
    }
}
