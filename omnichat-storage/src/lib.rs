//! Storage crate: durable string slots behind a small key-value interface.
//!
//! ## Modules
//!
//! - [`error`] – Storage error type
//! - [`slot`] – SlotStore trait
//! - [`memory`] – MemorySlotStore (volatile, for tests and ephemeral runs)
//! - [`file`] – FileSlotStore (one file per slot under a directory)

mod error;
mod file;
mod memory;
mod slot;


pub use error::StorageError;
pub use file::FileSlotStore;
pub use memory::MemorySlotStore;
pub use slot::SlotStore;
