use crate::error::StorageError;

/// A named durable slot holding one serialized record as plain text.
/// Reading a slot that was never written yields `None`, not an error;
/// writing replaces the previous value wholesale.
pub trait SlotStore {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn write(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}
