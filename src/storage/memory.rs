use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::error::StoreResult;
use crate::storage::StorageBackend;

/// In-memory backend for tests and ephemeral embedding. Clones share the
/// same underlying map, so a handle kept outside the store observes every
/// write-through.
#[derive(Debug, Clone, Default)]
pub struct MemoryBackend {
    data: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StorageBackend for MemoryBackend {
    fn get(&self, key: &str) -> Option<String> {
        self.data.borrow().get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> StoreResult<()> {
        self.data
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> StoreResult<()> {
        self.data.borrow_mut().remove(key);
        Ok(())
    }
}
