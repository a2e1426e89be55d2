// Starting character
pub const START_HEALTH: u32 = 100;
pub const START_MAX_HEALTH: u32 = 100;
pub const START_ATTACK: u32 = 15;
pub const START_GOLD: u32 = 50;
pub const START_POTIONS: u32 = 1;

// Enemy scaling per battle won
pub const ENEMY_HP_PER_WIN: u32 = 5;
pub const ENEMY_ATTACK_PER_WIN: u32 = 1;

/// Roster bands: (minimum battles won, highest eligible catalog index).
/// Checked from the last band backwards; the first band must start at 0.
pub const ENEMY_ROSTER_BANDS: [(u32, usize); 3] = [(0, 2), (3, 3), (6, 4)];

// Attack rolls (shared by player and enemy)
pub const ATTACK_BONUS_MAX: u32 = 5;
pub const CRIT_CHANCE_PERCENT: u32 = 10;
pub const CRIT_MULTIPLIER: u32 = 2;

// Potions heal a percentage of max health
pub const POTION_HEAL_PERCENT: u32 = 40;
/// Potions are refused at or above this share of max health.
pub const POTION_NEAR_FULL_PERCENT: u32 = 90;

// Fleeing
pub const FLEE_CHANCE_PERCENT: u32 = 50;

// Magic
pub const SPELL_MIN_BATTLES_WON: u32 = 3;
pub const SPELL_CHARGES_PER_ENCOUNTER: u32 = 2;
pub const SPELL_BASE_DAMAGE: u32 = 10;
pub const SPELL_DAMAGE_PER_LEVEL: u32 = 5;
pub const SPELL_BATTLES_PER_POWER_LEVEL: u32 = 2;
pub const SPELL_MAX_POWER_LEVEL: u32 = 25;

// Victory rewards
pub const GOLD_REWARD_BASE: u32 = 20;
pub const GOLD_REWARD_PER_TIER: u32 = 10;
pub const GOLD_REWARD_PER_WIN: u32 = 2;
pub const SCORE_REWARD_BASE: u32 = 100;
pub const SCORE_REWARD_PER_TIER: u32 = 50;

// Resting
pub const REST_STREAK_REQUIRED: u32 = 3;

// Save system
pub const GAME_DIR_NAME: &str = ".textquest";
pub const SAVE_FILE_NAME: &str = "save.txt";
pub const HIGH_SCORE_FILE_NAME: &str = "highscore.txt";
pub const SAVE_CHECKSUM_MULTIPLIER: u64 = 7;
/// Per-slot XOR keys, in on-disk field order.
pub const SAVE_FIELD_KEYS: [u64; 9] = [
    0x5A17_C3E9,
    0x2B64_9F01,
    0x7E3D_A2C5,
    0x1C9B_5E77,
    0x6F02_D48B,
    0x3A85_E16D,
    0x4DC7_0B93,
    0x0E59_F72F,
    0x58B1_3C4D,
];
