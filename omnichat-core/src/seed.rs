//! Seed dataset: the agents and initial conversations the inbox starts with
//! when no persisted slot exists. Timestamps are offsets from load time so
//! the seed always looks recent.

use crate::types::{
    Agent, Channel, Contact, Conversation, ConversationStatus, Message, MessageKind,
};
use chrono::{Duration, Utc};

/// The agent acting in this session; author of every outgoing message.
pub fn current_agent() -> Agent {
    Agent {
        id: "agent_1".to_string(),
        name: "Alex Rivera".to_string(),
        avatar: "https://i.pravatar.cc/150?u=agent_1".to_string(),
        email: "alex@omnichat.io".to_string(),
    }
}

/// All agents available for assignment, current agent first.
pub fn agents() -> Vec<Agent> {
    vec![
        current_agent(),
        Agent {
            id: "agent_2".to_string(),
            name: "Sarah Chen".to_string(),
            avatar: "https://i.pravatar.cc/150?u=agent_2".to_string(),
            email: "sarah@omnichat.io".to_string(),
        },
        Agent {
            id: "agent_3".to_string(),
            name: "James Wilson".to_string(),
            avatar: "https://i.pravatar.cc/150?u=agent_3".to_string(),
            email: "james@omnichat.io".to_string(),
        },
    ]
}

fn contact_message(
    id: &str,
    contact: &Contact,
    text: &str,
    minutes_ago: i64,
    kind: MessageKind,
    media_url: Option<&str>,
) -> Message {
    Message {
        id: id.to_string(),
        sender_id: contact.id.clone(),
        sender_name: contact.name.clone(),
        text: text.to_string(),
        timestamp: Utc::now() - Duration::minutes(minutes_ago),
        is_me: false,
        kind,
        media_url: media_url.map(str::to_string),
    }
}

/// Initial conversations used when the persisted slot is absent or unreadable.
pub fn initial_conversations() -> Vec<Conversation> {
    let elena = Contact {
        id: "c1".to_string(),
        name: "Elena Gilbert".to_string(),
        avatar: "https://i.pravatar.cc/150?u=c1".to_string(),
        phone_number: Some("+1 555 010 1234".to_string()),
        email: None,
        social_id: "elena_wa".to_string(),
        channel: Channel::Whatsapp,
        tags: vec!["VIP".to_string(), "Support".to_string()],
    };
    let marcus = Contact {
        id: "c2".to_string(),
        name: "Marcus Sterling".to_string(),
        avatar: "https://i.pravatar.cc/150?u=c2".to_string(),
        phone_number: None,
        email: None,
        social_id: "marcus_ig".to_string(),
        channel: Channel::Instagram,
        tags: vec!["Sales".to_string()],
    };
    let sophie = Contact {
        id: "c3".to_string(),
        name: "Sophie Turner".to_string(),
        avatar: "https://i.pravatar.cc/150?u=c3".to_string(),
        phone_number: None,
        email: None,
        social_id: "sophie_fb".to_string(),
        channel: Channel::Messenger,
        tags: Vec::new(),
    };

    vec![
        Conversation {
            id: "conv_1".to_string(),
            last_message: "I need help with my recent order #4521".to_string(),
            last_message_at: Utc::now() - Duration::minutes(5),
            status: ConversationStatus::Open,
            assignee_id: None,
            unread_count: 2,
            messages: vec![
                contact_message("m1", &elena, "Hello, are you there?", 10, MessageKind::Text, None),
                contact_message(
                    "m2",
                    &elena,
                    "I need help with my recent order #4521",
                    5,
                    MessageKind::Text,
                    None,
                ),
            ],
            contact: elena,
        },
        Conversation {
            id: "conv_2".to_string(),
            last_message: "Awesome photo! How much is the shipping?".to_string(),
            last_message_at: Utc::now() - Duration::minutes(60),
            status: ConversationStatus::Open,
            assignee_id: Some("agent_2".to_string()),
            unread_count: 0,
            messages: vec![
                contact_message(
                    "m3",
                    &marcus,
                    "Awesome photo! How much is the shipping?",
                    60,
                    MessageKind::Text,
                    None,
                ),
                contact_message(
                    "m4",
                    &marcus,
                    "",
                    58,
                    MessageKind::Image,
                    Some("https://picsum.photos/seed/shop/400/300"),
                ),
            ],
            contact: marcus,
        },
        Conversation {
            id: "conv_3".to_string(),
            last_message: "Thank you for the quick resolution.".to_string(),
            last_message_at: Utc::now() - Duration::hours(24),
            status: ConversationStatus::Resolved,
            assignee_id: None,
            unread_count: 0,
            messages: vec![contact_message(
                "m5",
                &sophie,
                "Issue resolved. Thanks!",
                60 * 24,
                MessageKind::Text,
                None,
            )],
            contact: sophie,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_shape() {
        let conversations = initial_conversations();
        assert_eq!(conversations.len(), 3);
        assert_eq!(conversations[0].contact.name, "Elena Gilbert");
        assert_eq!(conversations[0].status, ConversationStatus::Open);
        assert_eq!(conversations[2].status, ConversationStatus::Resolved);

        // Cached tail matches the message list on every seed conversation.
        for conversation in &conversations {
            let last = conversation.messages.last().expect("seed messages");
            assert!(conversation.last_message_at >= last.timestamp - chrono::Duration::seconds(1));
        }
    }

    #[test]
    fn test_agents_include_current() {
        let agents = agents();
        assert_eq!(agents.len(), 3);
        assert_eq!(agents[0], current_agent());
    }
}
