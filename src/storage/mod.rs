//! Durable key-value storage behind the store, the local analogue of an
//! origin-scoped browser storage namespace.

mod file;
mod memory;

pub use file::FileBackend;
pub use memory::MemoryBackend;

use crate::error::StoreResult;

/// Collection keys in the durable namespace.
pub mod keys {
    pub const PRODUCTS: &str = "products";
    pub const MESSAGES: &str = "messages";
    pub const FAVORITES: &str = "favorites";
    pub const CURRENT_USER: &str = "currentUser";
}

/// A synchronous string key-value store. Reads treat anything unreadable as
/// absent; only writes report failure.
pub trait StorageBackend {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str) -> StoreResult<()>;
    fn remove(&mut self, key: &str) -> StoreResult<()>;
}
