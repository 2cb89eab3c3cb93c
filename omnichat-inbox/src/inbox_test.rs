//! Unit tests for the Inbox store.
//!
//! Covers the mutation operations, the tag caller conventions, channel
//! connection, selection resolution and slot persistence fallback/round-trip.

use crate::filter::ChannelFilter;
use crate::inbox::{Inbox, CONVERSATIONS_SLOT};
use omnichat_core::{seed, Channel, ConversationStatus, MediaAttachment};
use omnichat_storage::{FileSlotStore, MemorySlotStore, SlotStore};

fn inbox() -> Inbox<MemorySlotStore> {
    Inbox::load(MemorySlotStore::new(), seed::current_agent())
}

#[test]
fn test_loads_seed_and_selects_first() {
    let inbox = inbox();
    assert_eq!(inbox.conversations().len(), 3);
    let selected = inbox.selected().expect("initial selection");
    assert_eq!(selected.id, "conv_1");
}

#[test]
fn test_send_message_appends_and_updates_tail_cache() {
    let mut inbox = inbox();
    let before = inbox.selected().expect("selected").messages.len();

    inbox.send_message("conv_1", "On it, checking order #4521 now.", None);

    let conversation = inbox.selected().expect("selected");
    assert_eq!(conversation.messages.len(), before + 1);
    let last = conversation.messages.last().expect("appended message");
    assert!(last.is_me);
    assert_eq!(last.sender_id, "agent_1");
    assert_eq!(last.sender_name, "Alex Rivera");
    assert_eq!(conversation.last_message, "On it, checking order #4521 now.");
    assert_eq!(conversation.last_message_at, last.timestamp);
}

#[test]
fn test_send_message_grows_by_one_per_call() {
    let mut inbox = inbox();
    for i in 0..5 {
        inbox.send_message("conv_1", &format!("reply {}", i), None);
        let conversation = inbox.selected().expect("selected");
        assert_eq!(conversation.messages.len(), 2 + i + 1);
        assert_eq!(conversation.last_message, format!("reply {}", i));
    }
}

#[test]
fn test_send_media_message_uses_kind_label() {
    let mut inbox = inbox();
    inbox.send_message(
        "conv_1",
        "",
        Some(MediaAttachment::image("https://example.com/receipt.png")),
    );

    let conversation = inbox.selected().expect("selected");
    assert_eq!(conversation.last_message, "[image]");
    let last = conversation.messages.last().expect("appended message");
    assert_eq!(last.media_url.as_deref(), Some("https://example.com/receipt.png"));
}

#[test]
fn test_send_message_noop_on_empty_and_unknown() {
    let mut inbox = inbox();
    let before = inbox.selected().expect("selected").messages.len();

    inbox.send_message("conv_1", "", None);
    inbox.send_message("no_such_conversation", "hello", None);

    assert_eq!(inbox.selected().expect("selected").messages.len(), before);
}

#[test]
fn test_message_ids_are_unique_within_conversation() {
    let mut inbox = inbox();
    inbox.send_message("conv_1", "one", None);
    inbox.send_message("conv_1", "two", None);

    let conversation = inbox.selected().expect("selected");
    let mut ids: Vec<&str> = conversation.messages.iter().map(|m| m.id.as_str()).collect();
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), conversation.messages.len());
}

#[test]
fn test_assign_agent_sets_and_clears() {
    let mut inbox = inbox();

    inbox.assign_agent("conv_1", "agent_3");
    assert_eq!(
        inbox.selected().expect("selected").assignee_id.as_deref(),
        Some("agent_3")
    );

    inbox.assign_agent("conv_1", "");
    assert!(inbox.selected().expect("selected").assignee_id.is_none());
}

#[test]
fn test_set_status_overwrites_unconditionally() {
    let mut inbox = inbox();
    inbox.set_status("conv_1", ConversationStatus::Snoozed);
    assert_eq!(
        inbox.selected().expect("selected").status,
        ConversationStatus::Snoozed
    );
}

#[test]
fn test_toggle_status_flips_open_and_resolved() {
    let mut inbox = inbox();

    inbox.toggle_status("conv_1");
    assert_eq!(
        inbox.selected().expect("selected").status,
        ConversationStatus::Resolved
    );
    inbox.toggle_status("conv_1");
    assert_eq!(
        inbox.selected().expect("selected").status,
        ConversationStatus::Open
    );

    // Snoozed is treated like open by the toggle: it resolves.
    inbox.set_status("conv_1", ConversationStatus::Snoozed);
    inbox.toggle_status("conv_1");
    assert_eq!(
        inbox.selected().expect("selected").status,
        ConversationStatus::Resolved
    );
}

#[test]
fn test_add_tag_dedups_and_trims() {
    let mut inbox = inbox();

    inbox.add_tag("conv_1", "  Billing ");
    assert_eq!(
        inbox.selected().expect("selected").contact.tags,
        vec!["VIP", "Support", "Billing"]
    );

    // Already present: no duplicate appended.
    inbox.add_tag("conv_1", "VIP");
    inbox.add_tag("conv_1", "Billing");
    assert_eq!(
        inbox.selected().expect("selected").contact.tags,
        vec!["VIP", "Support", "Billing"]
    );

    // Blank after trimming: no-op.
    inbox.add_tag("conv_1", "   ");
    assert_eq!(inbox.selected().expect("selected").contact.tags.len(), 3);
}

#[test]
fn test_remove_tag() {
    let mut inbox = inbox();
    inbox.remove_tag("conv_1", "VIP");
    assert_eq!(inbox.selected().expect("selected").contact.tags, vec!["Support"]);

    // Removing a tag that is not present leaves the list unchanged.
    inbox.remove_tag("conv_1", "VIP");
    assert_eq!(inbox.selected().expect("selected").contact.tags, vec!["Support"]);
}

#[test]
fn test_update_tags_replaces_wholesale() {
    let mut inbox = inbox();
    inbox.update_tags("conv_1", vec!["A".to_string(), "B".to_string()]);
    assert_eq!(inbox.selected().expect("selected").contact.tags, vec!["A", "B"]);
}

#[test]
fn test_connect_channel_prepends_selects_and_narrows_filter() {
    let mut inbox = inbox();
    let token = "EAAGlongopaquetokenvalue";

    let id = inbox.connect_channel(Channel::Instagram, "studio_ig", token);

    assert_eq!(inbox.conversations().len(), 4);
    assert_eq!(inbox.conversations()[0].id, id);
    assert_eq!(inbox.active_channel(), ChannelFilter::Only(Channel::Instagram));

    let conversation = inbox.selected().expect("new conversation selected");
    assert_eq!(conversation.id, id);
    assert_eq!(conversation.contact.name, "studio_ig");
    assert_eq!(conversation.contact.channel, Channel::Instagram);
    assert_eq!(conversation.contact.social_id, "new_instagram_channel");
    assert_eq!(conversation.contact.tags, vec!["New Account"]);
    assert_eq!(conversation.status, ConversationStatus::Open);
    assert_eq!(conversation.last_message, "System: Channel active.");

    let welcome = &conversation.messages[0];
    assert_eq!(welcome.sender_id, "system");
    assert!(!welcome.is_me);
    assert_eq!(
        welcome.text,
        "Connection success! Authorized with token EAAGlong..."
    );
}

#[test]
fn test_stale_selection_resolves_to_none() {
    let mut inbox = inbox();
    inbox.select("conv_gone");
    assert!(inbox.selected().is_none());

    inbox.clear_selection();
    assert!(inbox.selected().is_none());
}

#[test]
fn test_visible_respects_view_state() {
    let mut inbox = inbox();
    inbox.set_search_query("elena");
    assert_eq!(inbox.visible().len(), 1);

    inbox.set_active_status(ConversationStatus::Resolved);
    assert!(inbox.visible().is_empty());

    inbox.set_search_query("");
    inbox.set_active_status(ConversationStatus::Open);
    inbox.set_active_channel(ChannelFilter::Only(Channel::Whatsapp));
    let visible = inbox.visible();
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].contact.name, "Elena Gilbert");
}

#[test]
fn test_round_trip_through_file_store() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");

    let expected = {
        let store = FileSlotStore::open(dir.path()).expect("Failed to open store");
        let mut inbox = Inbox::load(store, seed::current_agent());
        inbox.send_message("conv_1", "Following up on the order.", None);
        inbox.connect_channel(Channel::Whatsapp, "WhatsApp Business", "token123456");
        inbox.conversations().to_vec()
    };

    let store = FileSlotStore::open(dir.path()).expect("Failed to reopen store");
    let reloaded = Inbox::load(store, seed::current_agent());

    // Ordering, content and timestamps all survive the slot round-trip.
    assert_eq!(reloaded.conversations(), expected.as_slice());
}

#[test]
fn test_malformed_slot_falls_back_to_seed() {
    let mut slots = MemorySlotStore::new();
    slots
        .write(CONVERSATIONS_SLOT, "not valid json at all")
        .expect("Failed to write");

    let inbox = Inbox::load(slots, seed::current_agent());
    assert_eq!(inbox.conversations().len(), 3);
    assert_eq!(inbox.conversations()[0].id, "conv_1");
}
