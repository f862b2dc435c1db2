mod account;
mod sorted_set;

pub use account::AccountManager;
pub use sorted_set::SortedSetManager;
