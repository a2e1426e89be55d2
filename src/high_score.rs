//! Best score ever reached, stored as `score level` on disk.

/// Best score and the battles-won level it was reached at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HighScoreRecord {
    pub score: u32,
    pub level: u32,
}

impl HighScoreRecord {
    /// Parses the two whitespace-separated integers of the record.
    pub fn parse(text: &str) -> Option<Self> {
        let mut fields = text.split_whitespace();
        let score = fields.next()?.parse().ok()?;
        let level = fields.next()?.parse().ok()?;
        if fields.next().is_some() {
            return None;
        }
        Some(Self { score, level })
    }

    pub fn to_record_string(&self) -> String {
        format!("{} {}\n", self.score, self.level)
    }
}

/// What the caller shows after a game over.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HighScoreReport {
    /// Best record after this update.
    pub best: HighScoreRecord,
    /// True when this run beat the previous best.
    pub is_new: bool,
}

/// Only a strictly greater score replaces the stored one.
pub fn update_high_score(stored: HighScoreRecord, score: u32, level: u32) -> HighScoreReport {
    if score > stored.score {
        HighScoreReport {
            best: HighScoreRecord { score, level },
            is_new: true,
        }
    } else {
        HighScoreReport {
            best: stored,
            is_new: false,
        }
    }
}
