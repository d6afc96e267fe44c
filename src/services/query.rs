use std::sync::Arc;

use crate::core::record::LyricRecord;
use crate::error::Result;
use crate::services::repository::LyricsRepository;

/// Read-only access to the library for the CLI and HTTP layers.
#[derive(Clone)]
pub struct QueryService {
    repository: Arc<dyn LyricsRepository>,
}

impl QueryService {
    pub fn new(repository: Arc<dyn LyricsRepository>) -> Self {
        Self { repository }
    }

    pub async fn get(&self, id: i64) -> Result<Option<LyricRecord>> {
        self.repository.get(id).await
    }

    pub async fn search_by_title(&self, query: &str) -> Result<Vec<LyricRecord>> {
        self.repository.find_by_title(query).await
    }

    pub async fn search_by_artist(&self, query: &str) -> Result<Vec<LyricRecord>> {
        self.repository.find_by_artist(query).await
    }

    pub async fn list_all(&self) -> Result<Vec<LyricRecord>> {
        self.repository.list_all().await
    }
}
