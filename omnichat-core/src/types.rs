//! Core types: channel, status, agent, contact, message, conversation,
//! provider account shapes and integration config.
//!
//! All persisted types serialize with camelCase field names and ISO-8601
//! timestamps so stored slots stay readable and stable across restarts.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Placeholder app id shipped as the default config value; treated as "not configured".
pub const PLACEHOLDER_APP_ID: &str = "YOUR_APP_ID";

/// A messaging provider a conversation arrives through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Channel {
    Whatsapp,
    Instagram,
    Messenger,
}

impl Channel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Channel::Whatsapp => "whatsapp",
            Channel::Instagram => "instagram",
            Channel::Messenger => "messenger",
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Workflow status of a conversation. `Snoozed` is reserved: it is a valid
/// stored value but no inbox action transitions into it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConversationStatus {
    Open,
    Snoozed,
    Resolved,
}

/// Kind of message content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageKind {
    Text,
    Image,
    Video,
}

impl MessageKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            MessageKind::Text => "text",
            MessageKind::Image => "image",
            MessageKind::Video => "video",
        }
    }
}

impl fmt::Display for MessageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Media payload attached to an outgoing message. Restricted to image/video
/// by construction; a plain text message carries no attachment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaAttachment {
    kind: MessageKind,
    url: String,
}

impl MediaAttachment {
    pub fn image(url: impl Into<String>) -> Self {
        Self {
            kind: MessageKind::Image,
            url: url.into(),
        }
    }

    pub fn video(url: impl Into<String>) -> Self {
        Self {
            kind: MessageKind::Video,
            url: url.into(),
        }
    }

    pub fn kind(&self) -> MessageKind {
        self.kind
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

/// A human handling conversations. Immutable once seeded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Agent {
    pub id: String,
    pub name: String,
    pub avatar: String,
    pub email: String,
}

/// The external party of a conversation. `channel` never changes for the
/// contact's lifetime; `tags` mutate only through the tag-update operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    pub id: String,
    pub name: String,
    pub avatar: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    pub social_id: String,
    pub channel: Channel,
    pub tags: Vec<String>,
}

/// A single message in a conversation. Append-only: never edited or deleted
/// once created. `is_me` marks agent-authored messages and is fixed at
/// creation time. When `kind` is not text, `media_url` must be present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub id: String,
    pub sender_id: String,
    pub sender_name: String,
    pub text: String,
    pub timestamp: DateTime<Utc>,
    pub is_me: bool,
    #[serde(rename = "type")]
    pub kind: MessageKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub media_url: Option<String>,
}

/// Aggregate root: one contact's thread plus workflow metadata.
/// `last_message` / `last_message_at` cache the tail of `messages` and are
/// updated on every append.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Conversation {
    pub id: String,
    pub contact: Contact,
    pub last_message: String,
    pub last_message_at: DateTime<Utc>,
    pub status: ConversationStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assignee_id: Option<String>,
    pub unread_count: u32,
    pub messages: Vec<Message>,
}

/// Instagram business account linked to a provider page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstagramAccount {
    pub id: String,
    pub username: String,
}

/// A page/account returned by the provider during onboarding. Transient;
/// field names keep the provider's snake_case wire shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetaPage {
    pub id: String,
    pub name: String,
    pub access_token: String,
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instagram_business_account: Option<InstagramAccount>,
}

/// External integration credentials; replaced wholesale on save.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntegrationConfig {
    pub meta_app_id: String,
    pub meta_app_secret: String,
    pub whatsapp_config_id: String,
}

impl Default for IntegrationConfig {
    fn default() -> Self {
        Self {
            meta_app_id: PLACEHOLDER_APP_ID.to_string(),
            meta_app_secret: String::new(),
            whatsapp_config_id: String::new(),
        }
    }
}

impl IntegrationConfig {
    /// True once a real app id has replaced the shipped placeholder.
    pub fn is_configured(&self) -> bool {
        !self.meta_app_id.is_empty() && self.meta_app_id != PLACEHOLDER_APP_ID
    }
}
