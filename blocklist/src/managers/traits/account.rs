use async_trait::async_trait;

use crate::managers::StoreError;

/// Denormalized numeric fields on the account entity.
#[async_trait]
pub trait AccountManager: Send + Sync + Clone + 'static {
    async fn increment_field(&mut self, uid: u64, field: &str, delta: i64)
        -> Result<(), StoreError>;

    async fn decrement_field(&mut self, uid: u64, field: &str, delta: i64)
        -> Result<(), StoreError>;

    /// Current value of `field`, zero if never written.
    async fn get_field(&self, uid: u64, field: &str) -> Result<i64, StoreError>;
}
