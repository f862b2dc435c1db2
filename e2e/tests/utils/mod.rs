use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};

use async_trait::async_trait;
use blocklist::{
    managers::{InMemoryAccountManager, InMemorySortedSetManager, SortedSetManager, StoreError},
    BlockCache, Blocks,
};

/// Sorted-set manager whose reads and writes can be switched to fail, to
/// exercise pipeline aborts.
#[derive(Clone, Default)]
pub struct FaultySortedSetManager {
    inner: InMemorySortedSetManager,
    fail_reads: Arc<AtomicBool>,
    fail_writes: Arc<AtomicBool>,
}

impl FaultySortedSetManager {
    pub fn fail_reads(&self, fail: bool) {
        self.fail_reads.store(fail, Ordering::SeqCst);
    }

    pub fn fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }
}

#[async_trait]
impl SortedSetManager for FaultySortedSetManager {
    async fn range(&self, key: &str, start: i64, stop: i64) -> Result<Vec<String>, StoreError> {
        if self.fail_reads.load(Ordering::SeqCst) {
            return Err(StoreError::Unavailable);
        }
        self.inner.range(key, start, stop).await
    }

    async fn add(&mut self, key: &str, score: u64, member: &str) -> Result<(), StoreError> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(StoreError::WriteFailed);
        }
        self.inner.add(key, score, member).await
    }

    async fn remove(&mut self, key: &str, member: &str) -> Result<(), StoreError> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(StoreError::WriteFailed);
        }
        self.inner.remove(key, member).await
    }
}

pub fn blocks() -> Blocks<InMemorySortedSetManager, InMemoryAccountManager> {
    _ = env_logger::try_init();
    Blocks::builder()
        .sets(InMemorySortedSetManager::default())
        .accounts(InMemoryAccountManager::default())
        .build()
}

pub fn faulty_blocks(
    sets: FaultySortedSetManager,
    accounts: InMemoryAccountManager,
    cache: BlockCache,
) -> Blocks<FaultySortedSetManager, InMemoryAccountManager> {
    _ = env_logger::try_init();
    Blocks::builder()
        .sets(sets)
        .accounts(accounts)
        .cache(cache)
        .build()
}
