//! # omnichat-inbox
//!
//! The behavioral core of the inbox: the [`Inbox`] conversation store with
//! slot persistence, the pure [`visible_conversations`] filter/search
//! function, and the [`ConfigStore`] for integration credentials.
//!
//! ## Modules
//!
//! - [`inbox`] – Inbox store: collection, view state, mutation operations
//! - [`filter`] – ChannelFilter and the pure visibility function
//! - [`config`] – ConfigStore for IntegrationConfig
//! - [`error`] – InboxError

pub mod config;
pub mod error;
pub mod filter;
pub mod inbox;

#[cfg(test)]
mod inbox_test;

pub use config::{ConfigStore, CONFIG_SLOT};
pub use error::InboxError;
pub use filter::{visible_conversations, ChannelFilter};
pub use inbox::{Inbox, CONVERSATIONS_SLOT};
