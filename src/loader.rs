use std::path::Path;

use crate::database::WordStore;
use crate::error::QuizError;
use crate::models::{Difficulty, WordEntry};

/// Outcome of one loader run.
#[derive(Debug, Default)]
pub struct LoadReport {
    pub total: usize,
    pub created: usize,
    pub updated: usize,
    pub failures: Vec<EntryFailure>,
}

/// A single rejected entry. Upserts committed for earlier entries in the
/// same run are unaffected.
#[derive(Debug)]
pub struct EntryFailure {
    pub index: usize,
    pub katakana: Option<String>,
    pub error: QuizError,
}

/// Reads a JSON array of word entries from `path` and upserts each one.
///
/// A missing or unparseable file fails before any entry is processed.
/// A bad entry is skipped and reported; the rest of the batch still runs.
pub async fn load_file(store: &WordStore, path: &Path) -> Result<LoadReport, QuizError> {
    let raw = std::fs::read_to_string(path).map_err(|e| QuizError::SourceUnavailable {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;

    let entries: Vec<WordEntry> =
        serde_json::from_str(&raw).map_err(|e| QuizError::SourceUnavailable {
            path: path.to_path_buf(),
            reason: format!("not a valid word list: {e}"),
        })?;

    load_entries(store, &entries).await
}

pub async fn load_entries(store: &WordStore, entries: &[WordEntry]) -> Result<LoadReport, QuizError> {
    let mut report = LoadReport {
        total: entries.len(),
        ..LoadReport::default()
    };

    for (index, entry) in entries.iter().enumerate() {
        match upsert_entry(store, entry).await {
            Ok(true) => report.created += 1,
            Ok(false) => report.updated += 1,
            Err(error) => report.failures.push(EntryFailure {
                index,
                katakana: entry.katakana.clone(),
                error,
            }),
        }
    }

    Ok(report)
}

async fn upsert_entry(store: &WordStore, entry: &WordEntry) -> Result<bool, QuizError> {
    let katakana = entry
        .katakana
        .as_deref()
        .ok_or(QuizError::MissingField("katakana"))?;
    let english = entry
        .english
        .as_deref()
        .ok_or(QuizError::MissingField("english"))?;
    let difficulty: Difficulty = entry
        .difficulty
        .as_deref()
        .ok_or(QuizError::MissingField("difficulty"))?
        .parse()?;

    let (_, created) = store
        .upsert(katakana, entry.romaji.as_deref(), english, difficulty)
        .await?;
    Ok(created)
}
