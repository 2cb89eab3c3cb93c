//! In-memory slot store: fastest backend, data is lost on drop.
//! Used by tests and ephemeral sessions that opt out of durability.

use crate::error::StorageError;
use crate::slot::SlotStore;
use std::collections::HashMap;

#[derive(Debug, Default, Clone)]
pub struct MemorySlotStore {
    slots: HashMap<String, String>,
}

impl MemorySlotStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SlotStore for MemorySlotStore {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.slots.get(key).cloned())
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.slots.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
