use std::{num::NonZeroUsize, sync::Arc};

use lru::LruCache;
use tokio::sync::Mutex;

pub const DEFAULT_CAPACITY: usize = 100;

/// Process-wide cache of materialized block lists, one entry per account,
/// unit cost per entry, no expiry. Entries are whole-list snapshots,
/// replaced or dropped as a unit, never edited in place.
///
/// Clones share the same entries, so one cache can back every service
/// handle in the process while tests build isolated instances. The lock
/// is scoped to single cache operations and is never held across store
/// I/O.
#[derive(Clone)]
pub struct BlockCache {
    entries: Arc<Mutex<LruCache<u64, Vec<u64>>>>,
}

impl Default for BlockCache {
    fn default() -> Self {
        BlockCache::new(DEFAULT_CAPACITY)
    }
}

impl BlockCache {
    pub fn new(capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
        BlockCache {
            entries: Arc::new(Mutex::new(LruCache::new(capacity))),
        }
    }

    /// A hit counts as an access for eviction purposes. Callers get a
    /// clone and cannot reach the cached list itself.
    pub async fn get(&self, uid: u64) -> Option<Vec<u64>> {
        self.entries.lock().await.get(&uid).cloned()
    }

    /// Inserts or replaces, evicting the least recently used entry when
    /// over capacity.
    pub async fn insert(&self, uid: u64, blocked: Vec<u64>) {
        self.entries.lock().await.put(uid, blocked);
    }

    /// Drops the entry unconditionally, silently if absent.
    pub async fn invalidate(&self, uid: u64) {
        self.entries.lock().await.pop(&uid);
    }

    /// Membership without touching recency.
    pub async fn contains(&self, uid: u64) -> bool {
        self.entries.lock().await.contains(&uid)
    }
}
