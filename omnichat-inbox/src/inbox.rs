//! Inbox store: owns the authoritative conversation collection and its view
//! state (selection, channel/status filters, search query), applies the
//! mutation operations, and mirrors every change to a durable slot.
//!
//! All mutations are total: an unknown conversation id is a no-op, never an
//! error. Persistence failures are logged and never surfaced to callers.

use crate::filter::{visible_conversations, ChannelFilter};
use crate::InboxError;
use chrono::Utc;
use omnichat_core::{
    seed, Agent, Channel, Contact, Conversation, ConversationStatus, MediaAttachment, Message,
    MessageKind,
};
use omnichat_storage::SlotStore;
use tracing::{info, warn};
use uuid::Uuid;

/// Slot key the conversation collection is persisted under.
pub const CONVERSATIONS_SLOT: &str = "omnichat_conversations";

pub struct Inbox<S: SlotStore> {
    conversations: Vec<Conversation>,
    selected_id: Option<String>,
    active_channel: ChannelFilter,
    active_status: ConversationStatus,
    search_query: String,
    agent: Agent,
    store: S,
}

impl<S: SlotStore> Inbox<S> {
    /// Loads the inbox from the conversations slot, falling back to the seed
    /// dataset when the slot is absent or unreadable. The first conversation
    /// starts selected.
    pub fn load(store: S, agent: Agent) -> Self {
        let conversations = match store.read(CONVERSATIONS_SLOT) {
            Ok(Some(raw)) => match serde_json::from_str::<Vec<Conversation>>(&raw) {
                Ok(conversations) => conversations,
                Err(e) => {
                    warn!("Persisted conversations unreadable, using seed data: {}", e);
                    seed::initial_conversations()
                }
            },
            Ok(None) => seed::initial_conversations(),
            Err(e) => {
                warn!("Failed to read conversations slot, using seed data: {}", e);
                seed::initial_conversations()
            }
        };

        let selected_id = conversations.first().map(|c| c.id.clone());
        Self {
            conversations,
            selected_id,
            active_channel: ChannelFilter::All,
            active_status: ConversationStatus::Open,
            search_query: String::new(),
            agent,
            store,
        }
    }

    // ---------- Views ----------

    pub fn conversations(&self) -> &[Conversation] {
        &self.conversations
    }

    /// The conversations visible under the current filters, source order
    /// preserved.
    pub fn visible(&self) -> Vec<&Conversation> {
        visible_conversations(
            &self.conversations,
            self.active_channel,
            self.active_status,
            &self.search_query,
        )
    }

    /// Resolves the current selection. A stale id (conversation no longer
    /// present) yields `None` rather than an error.
    pub fn selected(&self) -> Option<&Conversation> {
        let id = self.selected_id.as_deref()?;
        self.conversations.iter().find(|c| c.id == id)
    }

    pub fn select(&mut self, conversation_id: impl Into<String>) {
        self.selected_id = Some(conversation_id.into());
    }

    pub fn clear_selection(&mut self) {
        self.selected_id = None;
    }

    pub fn active_channel(&self) -> ChannelFilter {
        self.active_channel
    }

    pub fn set_active_channel(&mut self, filter: ChannelFilter) {
        self.active_channel = filter;
    }

    pub fn active_status(&self) -> ConversationStatus {
        self.active_status
    }

    pub fn set_active_status(&mut self, status: ConversationStatus) {
        self.active_status = status;
    }

    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    pub fn set_search_query(&mut self, query: impl Into<String>) {
        self.search_query = query.into();
    }

    pub fn agent(&self) -> &Agent {
        &self.agent
    }

    // ---------- Mutations ----------

    /// Appends an agent-authored message. No-op on unknown id, or when the
    /// text is empty and no media is attached.
    pub fn send_message(
        &mut self,
        conversation_id: &str,
        text: &str,
        media: Option<MediaAttachment>,
    ) {
        if text.is_empty() && media.is_none() {
            return;
        }
        let agent_id = self.agent.id.clone();
        let agent_name = self.agent.name.clone();
        let Some(conversation) = self.find_mut(conversation_id) else {
            return;
        };

        let now = Utc::now();
        let message = Message {
            id: format!("m_{}", Uuid::new_v4()),
            sender_id: agent_id,
            sender_name: agent_name,
            text: text.to_string(),
            timestamp: now,
            is_me: true,
            kind: media.as_ref().map(MediaAttachment::kind).unwrap_or(MessageKind::Text),
            media_url: media.as_ref().map(|m| m.url().to_string()),
        };

        conversation.last_message = match &media {
            Some(media) => format!("[{}]", media.kind()),
            None => text.to_string(),
        };
        conversation.last_message_at = now;
        conversation.messages.push(message);

        info!(conversation_id, "sent message");
        self.persist();
    }

    /// Sets the assignee, or clears it when `agent_id` is empty. Referential
    /// validity is the caller's responsibility.
    pub fn assign_agent(&mut self, conversation_id: &str, agent_id: &str) {
        let Some(conversation) = self.find_mut(conversation_id) else {
            return;
        };
        conversation.assignee_id = if agent_id.is_empty() {
            None
        } else {
            Some(agent_id.to_string())
        };
        info!(conversation_id, agent_id, "assigned agent");
        self.persist();
    }

    /// Overwrites the status unconditionally; any status is reachable from
    /// any status.
    pub fn set_status(&mut self, conversation_id: &str, status: ConversationStatus) {
        let Some(conversation) = self.find_mut(conversation_id) else {
            return;
        };
        conversation.status = status;
        info!(conversation_id, ?status, "changed status");
        self.persist();
    }

    /// The resolve/reopen toggle: resolved goes back to open, anything else
    /// becomes resolved. Snoozed is never produced here.
    pub fn toggle_status(&mut self, conversation_id: &str) {
        let Some(conversation) = self.find_mut(conversation_id) else {
            return;
        };
        let next = if conversation.status == ConversationStatus::Resolved {
            ConversationStatus::Open
        } else {
            ConversationStatus::Resolved
        };
        conversation.status = next;
        info!(conversation_id, status = ?next, "toggled status");
        self.persist();
    }

    /// Replaces the contact's tags wholesale. De-duplication and removal
    /// belong to the callers ([`Inbox::add_tag`] / [`Inbox::remove_tag`]).
    pub fn update_tags(&mut self, conversation_id: &str, tags: Vec<String>) {
        let Some(conversation) = self.find_mut(conversation_id) else {
            return;
        };
        conversation.contact.tags = tags;
        self.persist();
    }

    /// Adds one tag: trims it and skips blanks and duplicates.
    pub fn add_tag(&mut self, conversation_id: &str, tag: &str) {
        let tag = tag.trim();
        let Some(conversation) = self.find_mut(conversation_id) else {
            return;
        };
        if tag.is_empty() || conversation.contact.tags.iter().any(|t| t.as_str() == tag) {
            return;
        }
        let mut tags = conversation.contact.tags.clone();
        tags.push(tag.to_string());
        self.update_tags(conversation_id, tags);
    }

    /// Removes every occurrence of one tag.
    pub fn remove_tag(&mut self, conversation_id: &str, tag: &str) {
        let Some(conversation) = self.find_mut(conversation_id) else {
            return;
        };
        let tags: Vec<String> = conversation
            .contact
            .tags
            .iter()
            .filter(|t| t.as_str() != tag)
            .cloned()
            .collect();
        self.update_tags(conversation_id, tags);
    }

    /// Prepends a fully formed conversation and selects it.
    pub fn add_conversation(&mut self, conversation: Conversation) {
        self.selected_id = Some(conversation.id.clone());
        self.conversations.insert(0, conversation);
        self.persist();
    }

    /// Onboarding success path: synthesizes the conversation announcing the
    /// new channel, prepends and selects it, and narrows the channel filter
    /// to the connected channel. Returns the new conversation's id.
    pub fn connect_channel(&mut self, channel: Channel, name: &str, access_token: &str) -> String {
        let now = Utc::now();
        let token_preview: String = access_token.chars().take(8).collect();
        let conversation = Conversation {
            id: format!("conv_{}", Uuid::new_v4()),
            contact: Contact {
                id: format!("contact_{}", Uuid::new_v4()),
                name: name.to_string(),
                avatar: format!("https://ui-avatars.com/api/?name={}&background=random", name),
                phone_number: None,
                email: None,
                social_id: format!("new_{}_channel", channel),
                channel,
                tags: vec!["New Account".to_string()],
            },
            last_message: "System: Channel active.".to_string(),
            last_message_at: now,
            status: ConversationStatus::Open,
            assignee_id: None,
            unread_count: 0,
            messages: vec![Message {
                id: "m_welcome".to_string(),
                sender_id: "system".to_string(),
                sender_name: "System".to_string(),
                text: format!("Connection success! Authorized with token {}...", token_preview),
                timestamp: now,
                is_me: false,
                kind: MessageKind::Text,
                media_url: None,
            }],
        };

        info!(channel = %channel, name, "connected channel");
        let id = conversation.id.clone();
        self.add_conversation(conversation);
        self.active_channel = ChannelFilter::Only(channel);
        id
    }

    // ---------- Persistence ----------

    fn find_mut(&mut self, conversation_id: &str) -> Option<&mut Conversation> {
        self.conversations.iter_mut().find(|c| c.id == conversation_id)
    }

    /// Mirrors the collection to the slot. Failures are logged, not
    /// surfaced: the in-memory state stays authoritative for the session.
    fn persist(&mut self) {
        if let Err(e) = self.try_persist() {
            warn!("Failed to persist conversations: {}", e);
        }
    }

    fn try_persist(&mut self) -> Result<(), InboxError> {
        let payload = serde_json::to_string(&self.conversations)?;
        self.store.write(CONVERSATIONS_SLOT, &payload)?;
        Ok(())
    }
}
