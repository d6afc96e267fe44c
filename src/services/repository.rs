use crate::core::record::{LyricRecord, NewLyricRecord};
use crate::error::Result;

/// Storage for lyric records.
///
/// Substring lookups are case-insensitive and return records in insertion
/// order.
#[async_trait::async_trait]
pub trait LyricsRepository: Send + Sync {
    async fn insert(&self, record: &NewLyricRecord) -> Result<i64>;
    async fn get(&self, id: i64) -> Result<Option<LyricRecord>>;
    async fn find_by_title(&self, query: &str) -> Result<Vec<LyricRecord>>;
    async fn find_by_artist(&self, query: &str) -> Result<Vec<LyricRecord>>;
    async fn list_all(&self) -> Result<Vec<LyricRecord>>;

    /// Replace the fields of an existing record. Returns `false` if `id` is unknown.
    async fn update(&self, id: i64, record: &NewLyricRecord) -> Result<bool>;

    /// Returns `false` if `id` is unknown.
    async fn delete(&self, id: i64) -> Result<bool>;

    async fn count(&self) -> Result<usize> {
        Ok(self.list_all().await?.len())
    }
}

pub(crate) fn contains_folded(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

#[cfg(test)]
pub use memory::MemoryRepository;
