use serde::{Deserialize, Serialize};

use crate::cache::{BlockCache, DEFAULT_CAPACITY};

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlocksConfig {
    #[serde(default = "default_cache_capacity")]
    pub cache_capacity: usize,
}

fn default_cache_capacity() -> usize {
    DEFAULT_CAPACITY
}

impl Default for BlocksConfig {
    fn default() -> Self {
        BlocksConfig {
            cache_capacity: DEFAULT_CAPACITY,
        }
    }
}

impl BlocksConfig {
    pub fn load<R: std::io::Read>(reader: R) -> Result<Self, serde_json::Error> {
        serde_json::from_reader(reader)
    }

    pub fn create_cache(&self) -> BlockCache {
        BlockCache::new(self.cache_capacity)
    }
}
