use thiserror::Error;

/// Root error type for loading configuration and authored decks.
///
/// The design, judgment and scoring operations themselves are total and
/// never produce one of these.
#[derive(Error, Debug)]
pub enum LeftTurnError {
    /// A configuration value is out of range.
    #[error("config error: {0}")]
    Config(String),

    /// An authored scene deck or trial log is unusable.
    #[error("deck error: {0}")]
    Deck(String),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type LeftTurnResult<T> = Result<T, LeftTurnError>;
