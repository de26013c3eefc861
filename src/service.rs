use crate::database::WordStore;
use crate::error::QuizError;
use crate::models::{Difficulty, WordSummary};

/// Validated read access for the serving layer.
#[derive(Clone)]
pub struct QueryService {
    store: WordStore,
}

impl QueryService {
    pub fn new(store: WordStore) -> Self {
        QueryService { store }
    }

    /// Returns the words of one tier, projected to what the quiz client
    /// needs. An unrecognized tag fails with `InvalidDifficulty`; an
    /// empty store is an empty vec.
    pub async fn get_words(&self, difficulty: &str) -> Result<Vec<WordSummary>, QuizError> {
        let tier: Difficulty = difficulty.parse()?;
        let words = self.store.list_by_difficulty(tier).await?;
        Ok(words.into_iter().map(WordSummary::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn test_service() -> QueryService {
        QueryService::new(WordStore::connect("sqlite::memory:").await.unwrap())
    }

    #[tokio::test]
    async fn unknown_tier_is_rejected() {
        let service = test_service().await;
        let err = service.get_words("expert").await.unwrap_err();
        assert!(matches!(err, QuizError::InvalidDifficulty(ref tag) if tag == "expert"));
    }

    #[tokio::test]
    async fn empty_store_yields_empty_list() {
        let service = test_service().await;
        let words = service.get_words("beginner").await.unwrap();
        assert!(words.is_empty());
    }

    #[tokio::test]
    async fn projection_drops_tier_and_timestamp() {
        let store = WordStore::connect("sqlite::memory:").await.unwrap();
        store
            .upsert("アプリ", None, "app", Difficulty::Beginner)
            .await
            .unwrap();

        let service = QueryService::new(store);
        let words = service.get_words("beginner").await.unwrap();

        assert_eq!(words.len(), 1);
        let json = serde_json::to_value(&words[0]).unwrap();
        assert_eq!(json["katakana"], "アプリ");
        assert_eq!(json["romaji"], "");
        assert_eq!(json["english"], "app");
        assert!(json.get("difficulty").is_none());
        assert!(json.get("created_at").is_none());
    }
}
