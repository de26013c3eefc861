use sqlx::SqlitePool;
use sqlx::sqlite::SqlitePoolOptions;

use crate::config::DatabaseConfig;
use crate::error::QuizError;
use crate::models::{Difficulty, KatakanaWord};

const WORD_COLUMNS: &str = "id, katakana, romaji, english, difficulty, created_at";

/// Durable storage for [`KatakanaWord`] records, backed by SQLite.
#[derive(Clone)]
pub struct WordStore {
    pool: SqlitePool,
}

impl WordStore {
    /// Opens (creating if necessary) the configured database file.
    pub async fn new(config: &DatabaseConfig) -> Result<Self, QuizError> {
        let db_url = format!("sqlite:{}?mode=rwc", config.db_file);
        Self::connect(&db_url).await
    }

    pub async fn connect(db_url: &str) -> Result<Self, QuizError> {
        // A single connection: SQLite has one writer anyway, and
        // `sqlite::memory:` gives every connection its own database.
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect(db_url)
            .await?;

        let store = WordStore { pool };
        store.initialize_tables().await?;
        Ok(store)
    }

    async fn initialize_tables(&self) -> Result<(), QuizError> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS words (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                katakana TEXT NOT NULL UNIQUE,
                romaji TEXT NOT NULL DEFAULT '',
                english TEXT NOT NULL,
                difficulty TEXT NOT NULL DEFAULT 'beginner',
                created_at DATETIME DEFAULT (datetime('now'))
            )
            "#,
        )
        .execute(&self.pool)
        .await?;

        // The read path always filters on difficulty.
        sqlx::query("CREATE INDEX IF NOT EXISTS idx_words_difficulty ON words (difficulty)")
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    /// Inserts a word or, if `katakana` is already present, overwrites its
    /// `romaji`, `english` and `difficulty` in place. `id` and `created_at`
    /// survive updates. Returns the stored record and whether it was
    /// newly created.
    pub async fn upsert(
        &self,
        katakana: &str,
        romaji: Option<&str>,
        english: &str,
        difficulty: Difficulty,
    ) -> Result<(KatakanaWord, bool), QuizError> {
        let existing = self.get(katakana).await?;

        let (id, was_created) = if let Some(word) = existing {
            sqlx::query("UPDATE words SET romaji = ?, english = ?, difficulty = ? WHERE id = ?")
                .bind(romaji.unwrap_or(""))
                .bind(english)
                .bind(difficulty)
                .bind(word.id)
                .execute(&self.pool)
                .await?;
            (word.id, false)
        } else {
            let result = sqlx::query(
                "INSERT INTO words (katakana, romaji, english, difficulty) VALUES (?, ?, ?, ?)",
            )
            .bind(katakana)
            .bind(romaji.unwrap_or(""))
            .bind(english)
            .bind(difficulty)
            .execute(&self.pool)
            .await?;
            (result.last_insert_rowid(), true)
        };

        let word = sqlx::query_as::<_, KatakanaWord>(&format!(
            "SELECT {WORD_COLUMNS} FROM words WHERE id = ?"
        ))
        .bind(id)
        .fetch_one(&self.pool)
        .await?;

        Ok((word, was_created))
    }

    /// Looks a word up by its katakana spelling.
    pub async fn get(&self, katakana: &str) -> Result<Option<KatakanaWord>, QuizError> {
        let word = sqlx::query_as::<_, KatakanaWord>(&format!(
            "SELECT {WORD_COLUMNS} FROM words WHERE katakana = ?"
        ))
        .bind(katakana)
        .fetch_optional(&self.pool)
        .await?;

        Ok(word)
    }

    /// All words of one tier, ordered by (difficulty, katakana). An empty
    /// result is an empty vec, not an error.
    pub async fn list_by_difficulty(
        &self,
        difficulty: Difficulty,
    ) -> Result<Vec<KatakanaWord>, QuizError> {
        let words = sqlx::query_as::<_, KatakanaWord>(&format!(
            "SELECT {WORD_COLUMNS} FROM words WHERE difficulty = ? ORDER BY difficulty, katakana"
        ))
        .bind(difficulty)
        .fetch_all(&self.pool)
        .await?;

        Ok(words)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn test_store() -> WordStore {
        WordStore::connect("sqlite::memory:").await.unwrap()
    }

    #[tokio::test]
    async fn upsert_is_idempotent() {
        let store = test_store().await;

        let (first, created) = store
            .upsert("アプリ", None, "app", Difficulty::Beginner)
            .await
            .unwrap();
        assert!(created);

        let (second, created) = store
            .upsert("アプリ", None, "app", Difficulty::Beginner)
            .await
            .unwrap();
        assert!(!created);

        assert_eq!(first.id, second.id);
        assert_eq!(first.created_at, second.created_at);

        let all = store.list_by_difficulty(Difficulty::Beginner).await.unwrap();
        assert_eq!(all.len(), 1);
    }

    #[tokio::test]
    async fn upsert_overwrites_fields_in_place() {
        let store = test_store().await;

        let (original, _) = store
            .upsert("アプリ", None, "app", Difficulty::Beginner)
            .await
            .unwrap();
        let (updated, created) = store
            .upsert(
                "アプリ",
                Some("apuri"),
                "application",
                Difficulty::Intermediate,
            )
            .await
            .unwrap();

        assert!(!created);
        assert_eq!(updated.id, original.id);
        assert_eq!(updated.created_at, original.created_at);
        assert_eq!(updated.romaji, "apuri");
        assert_eq!(updated.english, "application");
        assert_eq!(updated.difficulty, Difficulty::Intermediate);

        assert!(
            store
                .list_by_difficulty(Difficulty::Beginner)
                .await
                .unwrap()
                .is_empty()
        );
    }

    #[tokio::test]
    async fn listing_filters_by_tier_and_sorts_by_katakana() {
        let store = test_store().await;

        for (katakana, english, difficulty) in [
            ("テレビ", "television", Difficulty::Beginner),
            ("インフラ", "infrastructure", Difficulty::Advanced),
            ("アプリ", "app", Difficulty::Beginner),
            ("カメラ", "camera", Difficulty::Beginner),
            ("リストラ", "corporate downsizing", Difficulty::Intermediate),
        ] {
            store.upsert(katakana, None, english, difficulty).await.unwrap();
        }

        let beginners = store.list_by_difficulty(Difficulty::Beginner).await.unwrap();
        let spellings: Vec<&str> = beginners.iter().map(|w| w.katakana.as_str()).collect();
        assert_eq!(spellings, vec!["アプリ", "カメラ", "テレビ"]);
        assert!(beginners.iter().all(|w| w.difficulty == Difficulty::Beginner));
    }

    #[tokio::test]
    async fn missing_romaji_defaults_to_empty_string() {
        let store = test_store().await;

        let (word, _) = store
            .upsert("バナナ", None, "banana", Difficulty::Beginner)
            .await
            .unwrap();
        assert_eq!(word.romaji, "");
    }
}
