use async_trait::async_trait;

use crate::managers::StoreError;

/// Ordered set adapter. Each key names a set of unique members, every
/// member carrying a score, enumerable in ascending score order.
#[async_trait]
pub trait SortedSetManager: Send + Sync + Clone + 'static {
    /// Members of `key` from index `start` to `stop` inclusive, ordered by
    /// ascending score. Negative indices count from the end, `-1` being the
    /// last member.
    async fn range(&self, key: &str, start: i64, stop: i64) -> Result<Vec<String>, StoreError>;

    /// Inserts `member` with `score`, re-scoring it if already present.
    async fn add(&mut self, key: &str, score: u64, member: &str) -> Result<(), StoreError>;

    /// Removes `member`. Removing an absent member is not an error.
    async fn remove(&mut self, key: &str, member: &str) -> Result<(), StoreError>;
}
