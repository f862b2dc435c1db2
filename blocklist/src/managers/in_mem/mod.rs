mod account;
mod sorted_set;

pub use account::InMemoryAccountManager;
pub use sorted_set::InMemorySortedSetManager;
