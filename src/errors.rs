use thiserror::Error;

/// Failures loading or writing the save record.
#[derive(Debug, Error)]
pub enum SaveError {
    /// No save record on disk. Callers start a new game.
    #[error("no save file found")]
    Absent,

    /// The record failed its checksum or could not be parsed.
    /// The on-disk file has already been removed when this is returned.
    #[error("save file is corrupted or was tampered with: {0}")]
    Tampered(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors that end the menu loop or an encounter early.
#[derive(Debug, Error)]
pub enum GameError {
    /// The input stream reached end of file.
    #[error("input closed")]
    InputClosed,

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Save(#[from] SaveError),
}
