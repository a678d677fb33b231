//! Integration tests for statusboard-board crate.
//!
//! These tests exercise persistence, rendering and publishing together
//! through an in-memory channel.

use async_trait::async_trait;
use proptest::prelude::*;
use std::collections::HashMap;
use std::sync::Mutex;
use statusboard_board::{
    publish, publish_state, render, BoardChannel, BoardState, BoardStore, Document,
    PublishError, Status, StatusMapping, EMPTY_BOARD_HINT, UNKNOWN_SYMBOL,
};
use statusboard_common::test_utils::{init_test_logging, state_fixtures};
use statusboard_common::MessageId;

/// Channel that keeps messages in memory.
#[derive(Default)]
struct MemoryChannel {
    messages: Mutex<HashMap<MessageId, Document>>,
    next_id: Mutex<u64>,
    calls: Mutex<Vec<&'static str>>,
}

impl MemoryChannel {
    fn delete(&self, id: MessageId) {
        self.messages.lock().unwrap().remove(&id);
    }

    fn message(&self, id: MessageId) -> Option<Document> {
        self.messages.lock().unwrap().get(&id).cloned()
    }

    fn calls(&self) -> Vec<&'static str> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl BoardChannel for MemoryChannel {
    async fn fetch_message(&self, id: MessageId) -> Result<(), PublishError> {
        self.calls.lock().unwrap().push("fetch");
        if self.messages.lock().unwrap().contains_key(&id) {
            Ok(())
        } else {
            Err(PublishError::MessageNotFound(id))
        }
    }

    async fn edit_message(&self, id: MessageId, document: &Document) -> Result<(), PublishError> {
        self.calls.lock().unwrap().push("edit");
        self.messages.lock().unwrap().insert(id, document.clone());
        Ok(())
    }

    async fn send_message(&self, document: &Document) -> Result<MessageId, PublishError> {
        self.calls.lock().unwrap().push("send");
        let mut next = self.next_id.lock().unwrap();
        *next += 1;
        let id = MessageId(1000 + *next);
        self.messages.lock().unwrap().insert(id, document.clone());
        Ok(id)
    }
}

#[tokio::test]
async fn test_legacy_file_loads_and_round_trips() {
    init_test_logging();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("status.json");
    std::fs::write(&path, state_fixtures::legacy_state_json()).unwrap();

    let store = BoardStore::new(&path);
    let state = store.load().await;

    assert_eq!(state.games.len(), 3);
    assert_eq!(state.message_id, Some(MessageId(1380000000000000001)));
    assert_eq!(
        state.games.get("rust"),
        Some(("Rust", &Status::Unknown("maintenance".to_string())))
    );

    store.save(&state).await.unwrap();
    assert_eq!(store.load().await, state);

    // Saving what was loaded again produces byte-identical output.
    let first = std::fs::read_to_string(&path).unwrap();
    store.save(&store.load().await).await.unwrap();
    assert_eq!(std::fs::read_to_string(&path).unwrap(), first);
}

#[tokio::test]
async fn test_corrupt_file_loads_empty() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("status.json");
    std::fs::write(&path, state_fixtures::corrupt_state_json()).unwrap();

    let store = BoardStore::new(&path);
    assert_eq!(store.load().await, BoardState::default());
}

#[tokio::test]
async fn test_wrong_shape_loads_empty() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("status.json");
    std::fs::write(&path, r#"{"games": ["not", "a", "map"]}"#).unwrap();

    let store = BoardStore::new(&path);
    assert_eq!(store.load().await, BoardState::default());
}

#[tokio::test]
async fn test_missing_message_id_field_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("status.json");
    std::fs::write(&path, r#"{"games": {"Apex": "testing"}}"#).unwrap();

    let state = BoardStore::new(&path).load().await;
    assert_eq!(state.games.len(), 1);
    assert!(state.message_id.is_none());
}

#[tokio::test]
async fn test_zero_message_id_publishes_new_message() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("status.json");
    std::fs::write(&path, r#"{"games":{"Widget":"testing"},"message_id":0}"#).unwrap();

    let store = BoardStore::new(&path);
    let mut state = store.load().await;
    assert_eq!(state.games.len(), 1);
    assert!(state.message_id.is_none());

    let channel = MemoryChannel::default();
    let id = publish_state(&store, &mut state, &channel).await.unwrap();

    assert_eq!(channel.calls(), vec!["send"]);
    assert_eq!(store.load().await.message_id, Some(id));
    assert_eq!(
        channel.message(id).unwrap().description.as_deref(),
        Some("## 🟡 Widget\n• Testing")
    );
}

#[tokio::test]
async fn test_unreadable_message_id_keeps_tracked_entries() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("status.json");
    std::fs::write(
        &path,
        r#"{"games": {"Apex": "undetected", "Widget": "testing"}, "message_id": "abc"}"#,
    )
    .unwrap();

    let store = BoardStore::new(&path);
    let mut state = store.load().await;
    assert_eq!(state.games.len(), 2);
    assert!(state.message_id.is_none());

    // Adding after the bad id must not lose what was already tracked.
    state.games.insert_new("Rust", Status::Updating).unwrap();
    store.save(&state).await.unwrap();

    let reloaded = store.load().await;
    assert_eq!(reloaded.games.len(), 3);
    assert_eq!(reloaded.games.get("apex"), Some(("Apex", &Status::Undetected)));
}

#[test]
fn test_unknown_status_renders_with_neutral_symbol() {
    let mapping: StatusMapping = [("Old", Status::parse("retired"))].into_iter().collect();
    let doc = render(&mapping);
    assert_eq!(
        doc.description.as_deref(),
        Some(format!("## {UNKNOWN_SYMBOL} Old\n• Retired").as_str())
    );
}

#[test]
fn test_empty_render_never_has_empty_body() {
    let doc = render(&StatusMapping::new());
    assert!(!doc.description.unwrap_or_default().is_empty());
    assert!(doc.fields.iter().any(|f| f.value == EMPTY_BOARD_HINT));
}

#[tokio::test]
async fn test_deleted_board_message_is_replaced() {
    let dir = tempfile::tempdir().unwrap();
    let store = BoardStore::new(dir.path().join("status.json"));
    let channel = MemoryChannel::default();

    let mut state = BoardState::default();
    state.games.insert_new("Widget", Status::Testing).unwrap();
    store.save(&state).await.unwrap();

    let first = publish_state(&store, &mut state, &channel).await.unwrap();
    assert_eq!(channel.calls(), vec!["send"]);

    channel.delete(first);
    let second = publish_state(&store, &mut state, &channel).await.unwrap();

    assert_ne!(first, second);
    assert_eq!(channel.calls(), vec!["send", "fetch", "send"]);
    assert_eq!(store.load().await.message_id, Some(second));
    assert!(channel.message(second).is_some());
}

#[tokio::test]
async fn test_republish_edits_in_place() {
    let channel = MemoryChannel::default();
    let mut mapping = StatusMapping::new();
    mapping.insert_new("Widget", Status::Testing).unwrap();

    let id = publish(&channel, &render(&mapping), None).await.unwrap();
    mapping.set_status("widget", Status::Detected).unwrap();
    let again = publish(&channel, &render(&mapping), Some(id)).await.unwrap();

    assert_eq!(id, again);
    assert_eq!(channel.calls(), vec!["send", "fetch", "edit"]);
    assert_eq!(
        channel.message(id).unwrap().description.as_deref(),
        Some("## 🔴 Widget\n• Detected")
    );
}

proptest! {
    #[test]
    fn prop_render_order_is_case_insensitive_alphabetical(
        names in proptest::collection::hash_set("[A-Za-z][A-Za-z0-9 ]{0,11}", 1..20)
    ) {
        let mut mapping = StatusMapping::new();
        for name in &names {
            // Names equal ignoring case are rejected, which is the invariant under test too.
            let _ = mapping.insert_new(name.clone(), Status::Undetected);
        }

        let doc = render(&mapping);
        let description = doc.description.unwrap();
        let rendered: Vec<String> = description
            .lines()
            .filter_map(|line| line.strip_prefix("## 🟢 "))
            .map(str::to_lowercase)
            .collect();

        prop_assert_eq!(rendered.len(), mapping.len());
        let mut expected = rendered.clone();
        expected.sort();
        prop_assert_eq!(rendered, expected);
    }
}
