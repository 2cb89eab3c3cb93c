//! # omnichat-core
//!
//! Core types for the OmniChat inbox: channels, agents, contacts, messages,
//! conversations, provider account shapes, integration config, the seed
//! dataset, and tracing initialization. Transport-agnostic; used by
//! omnichat-inbox, omnichat-onboarding and omnichat-ai.

pub mod logger;
pub mod seed;
pub mod types;

pub use logger::init_tracing;
pub use types::{
    Agent, Channel, Contact, Conversation, ConversationStatus, InstagramAccount,
    IntegrationConfig, MediaAttachment, Message, MessageKind, MetaPage,
};
