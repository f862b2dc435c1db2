use derive_more::{Display, Error, From};

use crate::managers::StoreError;

#[derive(Debug, Display, Error, From)]
pub enum BlockError {
    AlreadyBlocked,
    AlreadyUnblocked,
    Store(StoreError),
}
