use std::{collections::HashMap, sync::Arc};

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::managers::{SortedSetManager, StoreError};

type Sets = HashMap<String, Vec<(u64, String)>>;

#[derive(Clone, Default)]
pub struct InMemorySortedSetManager {
    sets: Arc<Mutex<Sets>>,
}

#[async_trait]
impl SortedSetManager for InMemorySortedSetManager {
    async fn range(&self, key: &str, start: i64, stop: i64) -> Result<Vec<String>, StoreError> {
        let sets = self.sets.lock().await;
        let Some(members) = sets.get(key) else {
            return Ok(Vec::new());
        };
        let len = members.len() as i64;
        let start = if start < 0 { (len + start).max(0) } else { start };
        let stop = if stop < 0 { len + stop } else { stop.min(len - 1) };
        if start >= len || start > stop {
            return Ok(Vec::new());
        }
        Ok(members[start as usize..=stop as usize]
            .iter()
            .map(|(_, member)| member.clone())
            .collect())
    }

    async fn add(&mut self, key: &str, score: u64, member: &str) -> Result<(), StoreError> {
        let mut sets = self.sets.lock().await;
        let set = sets.entry(key.to_string()).or_default();
        set.retain(|(_, existing)| existing != member);
        set.push((score, member.to_string()));
        // stable sort keeps insertion order between equal scores
        set.sort_by_key(|(score, _)| *score);
        Ok(())
    }

    async fn remove(&mut self, key: &str, member: &str) -> Result<(), StoreError> {
        let mut sets = self.sets.lock().await;
        if let Some(set) = sets.get_mut(key) {
            set.retain(|(_, existing)| existing != member);
        }
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use crate::managers::{InMemorySortedSetManager, SortedSetManager};

    #[tokio::test]
    async fn range_orders_by_score() {
        let mut sets = InMemorySortedSetManager::default();
        sets.add("key", 30, "c").await.expect("can add");
        sets.add("key", 10, "a").await.expect("can add");
        sets.add("key", 20, "b").await.expect("can add");

        let members = sets.range("key", 0, -1).await.expect("can range");

        assert_eq!(members, vec!["a", "b", "c"]);
    }

    #[tokio::test]
    async fn add_rescores_existing_member() {
        let mut sets = InMemorySortedSetManager::default();
        sets.add("key", 10, "a").await.expect("can add");
        sets.add("key", 20, "b").await.expect("can add");
        sets.add("key", 30, "a").await.expect("can add");

        let members = sets.range("key", 0, -1).await.expect("can range");

        assert_eq!(members, vec!["b", "a"]);
    }

    #[tokio::test]
    async fn range_of_missing_key_is_empty() {
        let sets = InMemorySortedSetManager::default();

        let members = sets.range("nope", 0, -1).await.expect("can range");

        assert!(members.is_empty());
    }

    #[tokio::test]
    async fn remove_absent_member_is_ok() {
        let mut sets = InMemorySortedSetManager::default();
        sets.add("key", 10, "a").await.expect("can add");

        sets.remove("key", "b").await.expect("can remove");

        let members = sets.range("key", 0, -1).await.expect("can range");
        assert_eq!(members, vec!["a"]);
    }
}
