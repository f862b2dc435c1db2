use serde_json::Value;

use crate::{
    blocks::Blocks,
    error::BlockError,
    managers::{AccountManager, SortedSetManager},
    utils::parse_uid,
};

pub const DEFAULT_PROPERTY: &str = "uid";

/// Item shapes the filter understands, resolved once from the first
/// element of the input.
enum SetShape {
    /// Bare numeric or numeric-string identifiers.
    Bare,
    /// Objects carrying the identifier under a named property.
    Keyed,
}

fn resolve_shape(property: &str, first: &Value) -> Option<SetShape> {
    match first {
        Value::Number(_) | Value::String(_) => Some(SetShape::Bare),
        Value::Object(record) if record.contains_key(property) => Some(SetShape::Keyed),
        _ => None,
    }
}

fn item_uid(shape: &SetShape, property: &str, item: &Value) -> Option<u64> {
    let id = match shape {
        SetShape::Bare => item,
        SetShape::Keyed => item.get(property)?,
    };
    match id {
        Value::Number(n) => n.as_u64().filter(|uid| *uid > 0),
        Value::String(s) => parse_uid(s),
        _ => None,
    }
}

impl<S: SortedSetManager, A: AccountManager> Blocks<S, A> {
    /// [`Blocks::filter_by`] with the identifier under `"uid"`.
    pub async fn filter(&self, uid: u64, set: Vec<Value>) -> Result<Vec<Value>, BlockError> {
        self.filter_by(uid, DEFAULT_PROPERTY, set).await
    }

    /// Drops items authored by accounts `uid` has blocked, preserving
    /// order. Reads the block list once; items never change. An empty set,
    /// or one whose first element matches neither supported shape, passes
    /// through unchanged. Items whose identifier does not resolve are
    /// kept.
    pub async fn filter_by(
        &self,
        uid: u64,
        property: &str,
        set: Vec<Value>,
    ) -> Result<Vec<Value>, BlockError> {
        let Some(shape) = set.first().and_then(|first| resolve_shape(property, first)) else {
            return Ok(set);
        };
        let blocked = self.list(uid).await?;
        Ok(set
            .into_iter()
            .filter(|item| {
                item_uid(&shape, property, item).is_none_or(|author| !blocked.contains(&author))
            })
            .collect())
    }
}
