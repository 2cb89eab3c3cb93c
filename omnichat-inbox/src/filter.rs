//! Filter/search engine: computes the visible subset of conversations for
//! the current channel filter, status filter and search query.

use omnichat_core::{Channel, Conversation, ConversationStatus};

/// Channel narrowing applied to the conversation list. `All` passes every
/// channel; `Only` requires an exact match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChannelFilter {
    #[default]
    All,
    Only(Channel),
}

impl From<Channel> for ChannelFilter {
    fn from(channel: Channel) -> Self {
        ChannelFilter::Only(channel)
    }
}

/// Pure visibility function. A conversation is included iff its channel
/// passes the filter, its status matches exactly, and the query (when
/// non-empty) is a case-insensitive substring of the contact name or the
/// last message. Source order is preserved; no re-sorting.
pub fn visible_conversations<'a>(
    all: &'a [Conversation],
    channel: ChannelFilter,
    status: ConversationStatus,
    query: &str,
) -> Vec<&'a Conversation> {
    let query = query.to_lowercase();
    all.iter()
        .filter(|c| {
            let matches_channel = match channel {
                ChannelFilter::All => true,
                ChannelFilter::Only(wanted) => c.contact.channel == wanted,
            };
            let matches_status = c.status == status;
            let matches_search = query.is_empty()
                || c.contact.name.to_lowercase().contains(&query)
                || c.last_message.to_lowercase().contains(&query);
            matches_channel && matches_status && matches_search
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use omnichat_core::seed;

    #[test]
    fn test_all_channel_passes_status_filtered_set() {
        let conversations = seed::initial_conversations();

        let open = visible_conversations(
            &conversations,
            ChannelFilter::All,
            ConversationStatus::Open,
            "",
        );
        assert_eq!(open.len(), 2);

        let resolved = visible_conversations(
            &conversations,
            ChannelFilter::All,
            ConversationStatus::Resolved,
            "",
        );
        assert_eq!(resolved.len(), 1);
        assert_eq!(resolved[0].contact.name, "Sophie Turner");
    }

    #[test]
    fn test_channel_not_present_yields_empty() {
        let conversations = seed::initial_conversations();
        // Sophie (messenger) is resolved, so no open messenger conversation exists.
        let visible = visible_conversations(
            &conversations,
            ChannelFilter::Only(Channel::Messenger),
            ConversationStatus::Open,
            "",
        );
        assert!(visible.is_empty());
    }

    #[test]
    fn test_search_is_case_insensitive_and_status_scoped() {
        let conversations = seed::initial_conversations();

        let hits = visible_conversations(
            &conversations,
            ChannelFilter::All,
            ConversationStatus::Open,
            "elena",
        );
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].contact.name, "Elena Gilbert");

        let hits = visible_conversations(
            &conversations,
            ChannelFilter::All,
            ConversationStatus::Resolved,
            "elena",
        );
        assert!(hits.is_empty());
    }

    #[test]
    fn test_search_matches_last_message() {
        let conversations = seed::initial_conversations();
        let hits = visible_conversations(
            &conversations,
            ChannelFilter::All,
            ConversationStatus::Open,
            "SHIPPING",
        );
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].contact.name, "Marcus Sterling");
    }

    #[test]
    fn test_idempotent_and_order_preserving() {
        let conversations = seed::initial_conversations();
        let first = visible_conversations(
            &conversations,
            ChannelFilter::All,
            ConversationStatus::Open,
            "",
        );
        let second = visible_conversations(
            &conversations,
            ChannelFilter::All,
            ConversationStatus::Open,
            "",
        );

        let first_ids: Vec<&str> = first.iter().map(|c| c.id.as_str()).collect();
        let second_ids: Vec<&str> = second.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(first_ids, second_ids);
        assert_eq!(first_ids, vec!["conv_1", "conv_2"]);
    }
}
