use derive_more::{Display, Error};

#[derive(Debug, Display, Error)]
pub enum StoreError {
    Unavailable,
    WriteFailed,
}
