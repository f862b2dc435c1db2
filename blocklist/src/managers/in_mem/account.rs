use std::{collections::HashMap, sync::Arc};

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::managers::{AccountManager, StoreError};

type Fields = HashMap<u64, HashMap<String, i64>>;

#[derive(Clone, Default)]
pub struct InMemoryAccountManager {
    fields: Arc<Mutex<Fields>>,
}

#[async_trait]
impl AccountManager for InMemoryAccountManager {
    async fn increment_field(
        &mut self,
        uid: u64,
        field: &str,
        delta: i64,
    ) -> Result<(), StoreError> {
        let mut fields = self.fields.lock().await;
        *fields
            .entry(uid)
            .or_default()
            .entry(field.to_string())
            .or_default() += delta;
        Ok(())
    }

    async fn decrement_field(
        &mut self,
        uid: u64,
        field: &str,
        delta: i64,
    ) -> Result<(), StoreError> {
        self.increment_field(uid, field, -delta).await
    }

    async fn get_field(&self, uid: u64, field: &str) -> Result<i64, StoreError> {
        let fields = self.fields.lock().await;
        Ok(fields
            .get(&uid)
            .and_then(|account| account.get(field))
            .copied()
            .unwrap_or(0))
    }
}
