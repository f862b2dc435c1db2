pub mod in_mem;
mod error;
mod traits;

pub use error::StoreError;
pub use in_mem::{InMemoryAccountManager, InMemorySortedSetManager};
pub use traits::AccountManager;
pub use traits::SortedSetManager;
