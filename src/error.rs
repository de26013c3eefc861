use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum QuizError {
    #[error("Invalid difficulty level: {0}")]
    InvalidDifficulty(String),

    #[error("Word entry is missing required field `{0}`")]
    MissingField(&'static str),

    #[error("Word source {} is unavailable: {reason}", .path.display())]
    SourceUnavailable { path: PathBuf, reason: String },

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}
