use crate::core::constants::*;
use crate::core::game_state::PlayerState;
use crate::errors::SaveError;
use crate::high_score::{update_high_score, HighScoreRecord, HighScoreReport};
use crate::utils::persistence;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Number of integers in a save record (eight fields plus the checksum).
pub const SAVE_RECORD_LEN: usize = 9;

/// Slot of the checksum within the record.
const CHECKSUM_SLOT: usize = 2;

/// Sum of the plain field values, scaled. Computed before obfuscation.
pub fn compute_checksum(state: &PlayerState) -> u64 {
    let sum: u64 = [
        state.health,
        state.max_health,
        state.attack,
        state.gold,
        state.potions,
        state.score,
        state.battles_won,
        state.streak,
    ]
    .iter()
    .map(|v| u64::from(*v))
    .sum();
    sum * SAVE_CHECKSUM_MULTIPLIER
}

/// XOR with the slot's key. Its own inverse.
///
/// This only makes casual edits detectable; it hides nothing.
fn obfuscate(slot: usize, value: u64) -> u64 {
    value ^ SAVE_FIELD_KEYS[slot]
}

/// Encodes a player into the on-disk text record.
///
/// Field order: health, max health, checksum, attack, gold, potions,
/// score, battles won, streak. One integer per line.
pub fn encode(state: &PlayerState) -> String {
    let plain: [u64; SAVE_RECORD_LEN] = [
        u64::from(state.health),
        u64::from(state.max_health),
        compute_checksum(state),
        u64::from(state.attack),
        u64::from(state.gold),
        u64::from(state.potions),
        u64::from(state.score),
        u64::from(state.battles_won),
        u64::from(state.streak),
    ];

    let mut out = String::new();
    for (slot, value) in plain.iter().enumerate() {
        out.push_str(&obfuscate(slot, *value).to_string());
        out.push('\n');
    }
    out
}

/// Decodes and verifies a save record.
///
/// Any deviation from what `encode` produces is reported as
/// `SaveError::Tampered`; nothing is partially applied.
pub fn decode(text: &str) -> Result<PlayerState, SaveError> {
    let tokens: Vec<&str> = text.split_whitespace().collect();
    if tokens.len() != SAVE_RECORD_LEN {
        return Err(SaveError::Tampered(format!(
            "expected {} fields, found {}",
            SAVE_RECORD_LEN,
            tokens.len()
        )));
    }

    let mut plain = [0u64; SAVE_RECORD_LEN];
    for (slot, token) in tokens.iter().enumerate() {
        let stored: u64 = token
            .parse()
            .map_err(|_| SaveError::Tampered(format!("field {} is not a number", slot + 1)))?;
        plain[slot] = obfuscate(slot, stored);
    }

    let field = |slot: usize| -> Result<u32, SaveError> {
        u32::try_from(plain[slot])
            .map_err(|_| SaveError::Tampered(format!("field {} is out of range", slot + 1)))
    };

    let state = PlayerState {
        health: field(0)?,
        max_health: field(1)?,
        attack: field(3)?,
        gold: field(4)?,
        potions: field(5)?,
        score: field(6)?,
        battles_won: field(7)?,
        streak: field(8)?,
    };

    if compute_checksum(&state) != plain[CHECKSUM_SLOT] {
        return Err(SaveError::Tampered("checksum mismatch".to_string()));
    }
    if !state.is_valid() {
        return Err(SaveError::Tampered(
            "health exceeds max health".to_string(),
        ));
    }

    Ok(state)
}

/// Owns the save record and the high-score record on disk.
pub struct SaveManager {
    save_path: PathBuf,
    high_score_path: PathBuf,
}

impl SaveManager {
    /// Uses ~/.textquest/, creating it if needed.
    pub fn new() -> io::Result<Self> {
        let dir = persistence::game_dir()?;
        Ok(Self::with_dir(dir))
    }

    /// Keeps both records in `dir`. The directory must already exist.
    pub fn with_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self {
            save_path: dir.join(SAVE_FILE_NAME),
            high_score_path: dir.join(HIGH_SCORE_FILE_NAME),
        }
    }

    pub fn save_path(&self) -> &Path {
        &self.save_path
    }

    pub fn high_score_path(&self) -> &Path {
        &self.high_score_path
    }

    /// Writes the save record, replacing any previous one.
    pub fn save(&self, state: &PlayerState) -> Result<(), SaveError> {
        persistence::write_atomic(&self.save_path, &encode(state))?;
        log::info!(
            "saved game to {} ({} battles won)",
            self.save_path.display(),
            state.battles_won
        );
        Ok(())
    }

    /// Loads and verifies the save record.
    ///
    /// A record that fails verification is deleted before
    /// `SaveError::Tampered` is returned.
    pub fn load(&self) -> Result<PlayerState, SaveError> {
        let text = match fs::read_to_string(&self.save_path) {
            Ok(text) => text,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Err(SaveError::Absent),
            Err(e) if e.kind() == io::ErrorKind::InvalidData => {
                self.discard_save();
                return Err(SaveError::Tampered("save file is not text".to_string()));
            }
            Err(e) => return Err(SaveError::Io(e)),
        };

        match decode(&text) {
            Ok(state) => {
                log::info!("loaded save from {}", self.save_path.display());
                Ok(state)
            }
            Err(e) => {
                log::warn!("rejecting save {}: {}", self.save_path.display(), e);
                self.discard_save();
                Err(e)
            }
        }
    }

    fn discard_save(&self) {
        if let Err(e) = persistence::remove_if_exists(&self.save_path) {
            log::warn!("could not remove {}: {}", self.save_path.display(), e);
        }
    }

    /// Removes the save record. Missing files are fine.
    pub fn delete_save(&self) -> io::Result<()> {
        persistence::remove_if_exists(&self.save_path)?;
        log::info!("deleted save {}", self.save_path.display());
        Ok(())
    }

    pub fn save_exists(&self) -> bool {
        self.save_path.exists()
    }

    /// The stored best, or zeroes when missing or unreadable.
    pub fn load_high_score(&self) -> HighScoreRecord {
        match fs::read_to_string(&self.high_score_path) {
            Ok(text) => HighScoreRecord::parse(&text).unwrap_or_else(|| {
                log::warn!(
                    "ignoring unreadable high score file {}",
                    self.high_score_path.display()
                );
                HighScoreRecord::default()
            }),
            Err(_) => HighScoreRecord::default(),
        }
    }

    /// Compares `score` against the stored best and writes it if strictly greater.
    pub fn record_high_score(&self, score: u32, level: u32) -> Result<HighScoreReport, SaveError> {
        let report = update_high_score(self.load_high_score(), score, level);
        if report.is_new {
            persistence::write_atomic(&self.high_score_path, &report.best.to_record_string())?;
            log::info!("new high score {} at level {}", score, level);
        }
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_state() -> PlayerState {
        PlayerState {
            health: 73,
            max_health: 120,
            attack: 21,
            gold: 340,
            potions: 3,
            score: 1250,
            battles_won: 9,
            streak: 2,
        }
    }

    #[test]
    fn test_encode_has_nine_lines() {
        let text = encode(&PlayerState::new());
        assert_eq!(text.lines().count(), SAVE_RECORD_LEN);
        assert!(text.ends_with('\n'));
    }

    #[test]
    fn test_encode_is_not_plaintext() {
        let state = PlayerState::new();
        let first: u64 = encode(&state).lines().next().unwrap().parse().unwrap();
        assert_ne!(first, u64::from(state.health));
    }

    #[test]
    fn test_checksum_formula() {
        let state = PlayerState::new();
        // 100 + 100 + 15 + 50 + 1
        assert_eq!(compute_checksum(&state), 266 * SAVE_CHECKSUM_MULTIPLIER);
    }

    #[test]
    fn test_decode_reverses_encode() {
        let state = sample_state();
        assert_eq!(decode(&encode(&state)).unwrap(), state);
        assert_eq!(decode(&encode(&PlayerState::new())).unwrap(), PlayerState::new());
    }

    #[test]
    fn test_decode_accepts_any_whitespace() {
        let state = sample_state();
        let spaced = encode(&state).replace('\n', " ");
        assert_eq!(decode(&spaced).unwrap(), state);
    }

    #[test]
    fn test_decode_detects_every_single_field_edit() {
        let encoded = encode(&sample_state());
        let tokens: Vec<u64> = encoded.lines().map(|l| l.parse().unwrap()).collect();

        for slot in 0..SAVE_RECORD_LEN {
            for delta in [1u64, 2, 1000] {
                let mut edited = tokens.clone();
                edited[slot] = edited[slot].wrapping_add(delta);
                let text: Vec<String> = edited.iter().map(|v| v.to_string()).collect();
                let result = decode(&text.join("\n"));
                assert!(
                    matches!(result, Err(SaveError::Tampered(_))),
                    "edit of slot {} by {} went unnoticed",
                    slot,
                    delta
                );
            }
        }
    }

    #[test]
    fn test_decode_rejects_wrong_length() {
        let encoded = encode(&sample_state());
        let short: Vec<&str> = encoded.lines().take(8).collect();
        assert!(matches!(
            decode(&short.join("\n")),
            Err(SaveError::Tampered(_))
        ));
        assert!(matches!(decode(""), Err(SaveError::Tampered(_))));
    }

    #[test]
    fn test_decode_rejects_non_numbers() {
        let encoded = encode(&sample_state()).replacen(char::is_numeric, "x", 1);
        assert!(matches!(decode(&encoded), Err(SaveError::Tampered(_))));
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let manager = SaveManager::with_dir(dir.path());
        let state = sample_state();

        manager.save(&state).unwrap();
        assert!(manager.save_exists());
        assert_eq!(manager.load().unwrap(), state);
    }

    #[test]
    fn test_load_nonexistent() {
        let dir = tempfile::tempdir().unwrap();
        let manager = SaveManager::with_dir(dir.path());
        assert!(matches!(manager.load(), Err(SaveError::Absent)));
    }

    #[test]
    fn test_tampered_save_is_deleted() {
        let dir = tempfile::tempdir().unwrap();
        let manager = SaveManager::with_dir(dir.path());
        manager.save(&sample_state()).unwrap();

        let text = fs::read_to_string(manager.save_path()).unwrap();
        let mut lines: Vec<String> = text.lines().map(str::to_string).collect();
        let gold: u64 = lines[4].parse().unwrap();
        lines[4] = (gold ^ 0xFF).to_string();
        fs::write(manager.save_path(), lines.join("\n")).unwrap();

        assert!(matches!(manager.load(), Err(SaveError::Tampered(_))));
        assert!(!manager.save_exists());
        assert!(matches!(manager.load(), Err(SaveError::Absent)));
    }

    #[test]
    fn test_delete_save_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let manager = SaveManager::with_dir(dir.path());
        manager.save(&sample_state()).unwrap();
        manager.delete_save().unwrap();
        manager.delete_save().unwrap();
        assert!(!manager.save_exists());
    }

    #[test]
    fn test_high_score_defaults_to_zero() {
        let dir = tempfile::tempdir().unwrap();
        let manager = SaveManager::with_dir(dir.path());
        assert_eq!(manager.load_high_score(), HighScoreRecord::default());

        fs::write(manager.high_score_path(), "garbage").unwrap();
        assert_eq!(manager.load_high_score(), HighScoreRecord::default());
    }

    #[test]
    fn test_record_high_score_only_when_beaten() {
        let dir = tempfile::tempdir().unwrap();
        let manager = SaveManager::with_dir(dir.path());

        let report = manager.record_high_score(300, 3).unwrap();
        assert!(report.is_new);
        assert_eq!(
            fs::read_to_string(manager.high_score_path()).unwrap(),
            "300 3\n"
        );

        let report = manager.record_high_score(200, 8).unwrap();
        assert!(!report.is_new);
        assert_eq!(report.best.score, 300);
        assert_eq!(
            fs::read_to_string(manager.high_score_path()).unwrap(),
            "300 3\n"
        );
    }
}
