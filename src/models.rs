use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::error::QuizError;

/// Difficulty tier of a word. Stored in SQLite as the lowercase tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(rename_all = "lowercase")]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

impl std::str::FromStr for Difficulty {
    type Err = QuizError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "beginner" => Ok(Difficulty::Beginner),
            "intermediate" => Ok(Difficulty::Intermediate),
            "advanced" => Ok(Difficulty::Advanced),
            other => Err(QuizError::InvalidDifficulty(other.to_string())),
        }
    }
}

/// A stored word. `katakana` is unique and acts as the natural key for
/// upserts; `id` and `created_at` never change after the first insert.
#[derive(Debug, Serialize, Deserialize, Clone, sqlx::FromRow)]
pub struct KatakanaWord {
    pub id: i64,
    pub katakana: String,
    pub romaji: String,
    pub english: String,
    pub difficulty: Difficulty,
    pub created_at: NaiveDateTime,
}

/// The shape returned by the words API: the caller already knows the
/// requested tier, so `difficulty` and `created_at` are not repeated.
#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct WordSummary {
    pub id: i64,
    pub katakana: String,
    pub romaji: String,
    pub english: String,
}

impl From<KatakanaWord> for WordSummary {
    fn from(word: KatakanaWord) -> Self {
        WordSummary {
            id: word.id,
            katakana: word.katakana,
            romaji: word.romaji,
            english: word.english,
        }
    }
}

/// One entry of the fixture file, before validation. Every field is
/// optional here so that a missing field is reported per entry instead
/// of failing the whole batch at deserialization time.
#[derive(Debug, Deserialize, Clone)]
pub struct WordEntry {
    pub katakana: Option<String>,
    pub romaji: Option<String>,
    pub english: Option<String>,
    pub difficulty: Option<String>,
}
