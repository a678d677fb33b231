//! Integration tests for statusboard-commands crate.
//!
//! These tests drive the command transitions against a real store file and
//! a scripted board channel, without connecting to Discord.

use async_trait::async_trait;
use statusboard_board::{
    publish_state, BoardChannel, BoardStore, Document, PublishError, Status,
};
use statusboard_commands::{
    apply_add, apply_remove, apply_set_status, commit, commands, refresh_reply,
    PendingSelections, REFRESHED,
};
use statusboard_common::test_utils::{discord_fixtures, init_test_logging};
use statusboard_common::MessageId;
use std::sync::Mutex;

/// Board channel that can be told to fail or to forget its message.
#[derive(Default)]
struct ScriptedChannel {
    current: Mutex<Option<(MessageId, Document)>>,
    sent: Mutex<u64>,
    offline: bool,
}

impl ScriptedChannel {
    fn offline() -> Self {
        Self {
            offline: true,
            ..Self::default()
        }
    }

    fn delete_message(&self) {
        *self.current.lock().unwrap() = None;
    }

    fn shown(&self) -> Option<String> {
        self.current
            .lock()
            .unwrap()
            .as_ref()
            .and_then(|(_, doc)| doc.description.clone())
    }

    fn check_online(&self) -> Result<(), PublishError> {
        if self.offline {
            Err(PublishError::Platform {
                message: "HTTP 503 Service Unavailable".to_string(),
                source: None,
            })
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl BoardChannel for ScriptedChannel {
    async fn fetch_message(&self, id: MessageId) -> Result<(), PublishError> {
        self.check_online()?;
        match &*self.current.lock().unwrap() {
            Some((current, _)) if *current == id => Ok(()),
            _ => Err(PublishError::MessageNotFound(id)),
        }
    }

    async fn edit_message(&self, id: MessageId, document: &Document) -> Result<(), PublishError> {
        self.check_online()?;
        *self.current.lock().unwrap() = Some((id, document.clone()));
        Ok(())
    }

    async fn send_message(&self, document: &Document) -> Result<MessageId, PublishError> {
        self.check_online()?;
        let mut sent = self.sent.lock().unwrap();
        *sent += 1;
        let id = MessageId(discord_fixtures::test_message_id().0 + *sent);
        *self.current.lock().unwrap() = Some((id, document.clone()));
        Ok(id)
    }
}

fn store() -> (tempfile::TempDir, BoardStore) {
    let dir = tempfile::tempdir().unwrap();
    let store = BoardStore::new(dir.path().join("data").join("status.json"));
    (dir, store)
}

#[tokio::test]
async fn test_add_then_set_status_scenario() {
    init_test_logging();
    let (_dir, store) = store();
    let channel = ScriptedChannel::default();

    let mut state = store.load().await;
    let t = apply_add(&mut state, "Widget", Status::Testing);
    let reply = commit(&store, &mut state, t, &channel).await.unwrap();

    assert_eq!(reply, "✅ Added 'Widget' with status 'Testing'");
    assert_eq!(channel.shown().as_deref(), Some("## 🟡 Widget\n• Testing"));

    let saved: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(store.path()).unwrap()).unwrap();
    assert_eq!(saved["games"], serde_json::json!({"Widget": "testing"}));
    let first_id = saved["message_id"].as_str().unwrap().to_string();

    let mut state = store.load().await;
    let t = apply_set_status(&mut state, "widget", Status::Detected);
    let reply = commit(&store, &mut state, t, &channel).await.unwrap();

    assert_eq!(reply, "✅ Updated 'Widget' from 'Testing' to 'Detected'");
    assert_eq!(channel.shown().as_deref(), Some("## 🔴 Widget\n• Detected"));

    let saved: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(store.path()).unwrap()).unwrap();
    assert_eq!(saved["games"]["Widget"], "detected");
    assert_eq!(saved["message_id"], first_id.as_str());
}

#[tokio::test]
async fn test_rejected_change_is_not_saved_or_published() {
    let (_dir, store) = store();
    let channel = ScriptedChannel::default();

    let mut state = store.load().await;
    let t = apply_set_status(&mut state, "Ghost", Status::Detected);
    let reply = commit(&store, &mut state, t, &channel).await.unwrap();

    assert_eq!(
        reply,
        "❌ Game 'Ghost' not found. Use `/listgames` to see all games."
    );
    assert!(!store.path().exists());
    assert!(channel.shown().is_none());
}

#[tokio::test]
async fn test_publish_failure_keeps_saved_change() {
    let (_dir, store) = store();
    let channel = ScriptedChannel::offline();

    let mut state = store.load().await;
    let t = apply_add(&mut state, "Widget", Status::Updating);
    let reply = commit(&store, &mut state, t, &channel).await.unwrap();

    assert_eq!(
        reply,
        "✅ Added 'Widget' with status 'Updating'\n\
         ⚠️ Saved, but the status board could not be updated: HTTP 503 Service Unavailable"
    );
    let saved = store.load().await;
    assert_eq!(saved.games.get("Widget"), Some(("Widget", &Status::Updating)));
    assert!(saved.message_id.is_none());
}

#[tokio::test]
async fn test_remove_then_refresh_after_deletion() {
    let (_dir, store) = store();
    let channel = ScriptedChannel::default();

    let mut state = store.load().await;
    for name in ["A", "B", "C"] {
        let t = apply_add(&mut state, name, Status::Undetected);
        commit(&store, &mut state, t, &channel).await.unwrap();
    }

    let mut state = store.load().await;
    let names = vec!["a".to_string(), "Z".to_string(), "C".to_string()];
    let t = apply_remove(&mut state, &names);
    let reply = commit(&store, &mut state, t, &channel).await.unwrap();
    assert_eq!(reply, "✅ Removed 2 games: 'A', 'C'");
    assert_eq!(channel.shown().as_deref(), Some("## 🟢 B\n• Undetected"));

    let before = store.load().await.message_id;
    channel.delete_message();

    let mut state = store.load().await;
    let result = publish_state(&store, &mut state, &channel).await;
    assert_eq!(refresh_reply(&result), REFRESHED);

    let after = store.load().await.message_id;
    assert!(after.is_some());
    assert_ne!(before, after);
}

#[tokio::test]
async fn test_refresh_failure_is_reported() {
    let (_dir, store) = store();
    let channel = ScriptedChannel::offline();

    let mut state = store.load().await;
    let result = publish_state(&store, &mut state, &channel).await;

    assert_eq!(
        refresh_reply(&result),
        "❌ Failed to update status board: HTTP 503 Service Unavailable"
    );
}

#[test]
fn test_selection_round_trip() {
    let selections = PendingSelections::new();
    let admin = discord_fixtures::test_admin_id();
    selections.open(42, admin, vec!["A".to_string(), "B".to_string()]);

    let names = selections
        .take(42, admin, &["B".to_string()])
        .unwrap();
    assert_eq!(names, vec!["B".to_string()]);
    assert!(selections.is_empty());
}

#[test]
fn test_registered_commands() {
    let commands = commands();
    assert_eq!(commands.len(), 5);
    for command in &commands {
        assert!(command.slash_action.is_some(), "{} is not a slash command", command.name);
    }
}
