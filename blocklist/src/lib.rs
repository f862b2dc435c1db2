pub mod blocks;
pub mod cache;
pub mod config;
pub mod error;
pub mod filter;
pub mod managers;
mod utils;

pub use blocks::Blocks;
pub use cache::BlockCache;
pub use config::BlocksConfig;
pub use error::BlockError;
