use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("not a high score file (bad magic)")]
    BadMagic,

    #[error("high score file truncated: expected {expected} bytes, found {found}")]
    Truncated { expected: usize, found: usize },

    #[error("invalid player name in high score file: {0:?}")]
    InvalidName([u8; 3]),
}

pub type Result<T> = std::result::Result<T, ScoreError>;
