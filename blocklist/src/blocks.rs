use bon::Builder;
use log::{error, info};

use crate::{
    cache::BlockCache,
    error::BlockError,
    managers::{AccountManager, SortedSetManager},
    utils::{blocked_uids_key, now_millis, parse_uid},
};

pub const BLOCKS_COUNT_FIELD: &str = "blocksCount";

/// Per-account blocking service. Reads combine the shared [`BlockCache`]
/// with the sorted-set store; mutations run a fixed pipeline of fallible
/// steps that aborts on the first error without rolling back completed
/// steps.
#[derive(Builder, Clone)]
pub struct Blocks<S: SortedSetManager, A: AccountManager> {
    sets: S,
    accounts: A,
    #[builder(default)]
    cache: BlockCache,
}

impl<S: SortedSetManager, A: AccountManager> Blocks<S, A> {
    /// Accounts blocked by `uid`, oldest block first. Served from the
    /// cache when present, otherwise read from the store and cached.
    pub async fn list(&self, uid: u64) -> Result<Vec<u64>, BlockError> {
        if let Some(blocked) = self.cache.get(uid).await {
            return Ok(blocked);
        }
        let members = self
            .sets
            .range(&blocked_uids_key(uid), 0, -1)
            .await
            .inspect_err(|err| error!("failed to read block list of uid {uid}: {err}"))?;
        let blocked: Vec<u64> = members.iter().filter_map(|m| parse_uid(m)).collect();
        self.cache.insert(uid, blocked.clone()).await;
        Ok(blocked)
    }

    pub async fn is_blocked(&self, target_uid: u64, uid: u64) -> Result<bool, BlockError> {
        Ok(self.list(uid).await?.contains(&target_uid))
    }

    /// Guard against mutations with no additional effect. `desired` is the
    /// membership state the caller is about to establish; if it already
    /// holds, the matching idempotency error is returned.
    pub async fn state_check(
        &self,
        desired: bool,
        target_uid: u64,
        uid: u64,
    ) -> Result<(), BlockError> {
        if self.is_blocked(target_uid, uid).await? != desired {
            return Ok(());
        }
        Err(if desired {
            BlockError::AlreadyBlocked
        } else {
            BlockError::AlreadyUnblocked
        })
    }

    /// Blocks `target_uid` for `uid` and returns the fresh list.
    ///
    /// Pipeline: state check, store insert scored by current time,
    /// `blocksCount` increment, cache invalidation, re-read. Concurrent
    /// calls for the same pair are not serialized: both can pass the state
    /// check, and while the store set stays correct, the counter is bumped
    /// twice. A step failing mid-pipeline likewise leaves the counter and
    /// list length diverged until the next successful mutation.
    pub async fn block(&mut self, target_uid: u64, uid: u64) -> Result<Vec<u64>, BlockError> {
        self.state_check(true, target_uid, uid).await?;
        self.sets
            .add(
                &blocked_uids_key(uid),
                now_millis(),
                &target_uid.to_string(),
            )
            .await
            .inspect_err(|err| error!("uid {uid} failed to block {target_uid}: {err}"))?;
        self.accounts
            .increment_field(uid, BLOCKS_COUNT_FIELD, 1)
            .await?;
        self.cache.invalidate(uid).await;
        info!("uid {uid} blocked uid {target_uid}");
        self.list(uid).await
    }

    /// Unblocks `target_uid` for `uid` and returns the fresh list. Same
    /// pipeline shape and caveats as [`Blocks::block`].
    pub async fn unblock(&mut self, target_uid: u64, uid: u64) -> Result<Vec<u64>, BlockError> {
        self.state_check(false, target_uid, uid).await?;
        self.sets
            .remove(&blocked_uids_key(uid), &target_uid.to_string())
            .await
            .inspect_err(|err| error!("uid {uid} failed to unblock {target_uid}: {err}"))?;
        self.accounts
            .decrement_field(uid, BLOCKS_COUNT_FIELD, 1)
            .await?;
        self.cache.invalidate(uid).await;
        info!("uid {uid} unblocked uid {target_uid}");
        self.list(uid).await
    }
}
