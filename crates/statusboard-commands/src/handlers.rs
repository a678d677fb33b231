//! State transitions behind each command and the replies they produce.
//!
//! The functions here never touch Discord: they take the loaded
//! [`BoardState`], apply one change and return a [`Transition`] carrying the
//! reply text and whether the state has to be saved. [`commit`] then saves
//! and republishes through any [`BoardChannel`].

use statusboard_board::{
    publish_state, BoardChannel, BoardState, BoardStore, MappingError, PublishError, Status,
};
use statusboard_common::{MessageId, Result};
use tracing::{error, info};

/// Reply for callers not on the admin list.
pub const DENIED: &str = "❌ You don't have permission to use this command.";

/// Reply when a command fails unexpectedly.
pub const GENERIC_ERROR: &str = "❌ An error occurred while processing your command.";

/// Reply when there is nothing to list or remove.
pub const NOTHING_TRACKED: &str =
    "❌ No games are currently being tracked. Use `/addgame` to add some first.";

/// Reply when a removal matched nothing.
pub const NOTHING_REMOVED: &str = "❌ No games were removed";

/// Reply after a successful manual refresh.
pub const REFRESHED: &str = "✅ Status board updated successfully!";

/// Reply when the name argument is blank.
pub const EMPTY_NAME: &str = "❌ Game name cannot be empty.";

/// Discord allows at most this many options in one select menu.
pub const MAX_SELECT_OPTIONS: usize = 25;

/// Outcome of applying one command to the board state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    /// Text to send back to the caller.
    pub reply: String,
    /// Whether the state was modified and must be saved and republished.
    pub changed: bool,
}

impl Transition {
    fn changed(reply: String) -> Self {
        Self {
            reply,
            changed: true,
        }
    }

    fn unchanged(reply: impl Into<String>) -> Self {
        Self {
            reply: reply.into(),
            changed: false,
        }
    }
}

/// Starts tracking `name` with `status`.
pub fn apply_add(state: &mut BoardState, name: &str, status: Status) -> Transition {
    let name = name.trim();
    if name.is_empty() {
        return Transition::unchanged(EMPTY_NAME);
    }

    let label = status.label();
    match state.games.insert_new(name, status) {
        Ok(()) => {
            info!("Added '{}' with status '{}'", name, label);
            Transition::changed(format!("✅ Added '{name}' with status '{label}'"))
        }
        Err(MappingError::AlreadyExists { existing }) => {
            info!("Refused to add '{}', '{}' is already tracked", name, existing);
            Transition::unchanged(format!(
                "❌ Game '{name}' already exists. Use `/setstatus` to update it."
            ))
        }
        Err(MappingError::NotFound(_)) => Transition::unchanged(GENERIC_ERROR),
    }
}

/// Changes the status of an already tracked entry.
pub fn apply_set_status(state: &mut BoardState, name: &str, status: Status) -> Transition {
    let name = name.trim();
    if name.is_empty() {
        return Transition::unchanged(EMPTY_NAME);
    }

    match state.games.set_status(name, status) {
        Ok(change) => {
            let (old, new) = (change.previous.label(), change.current.label());
            info!("Updated '{}' from '{}' to '{}'", change.name, old, new);
            Transition::changed(format!(
                "✅ Updated '{}' from '{old}' to '{new}'",
                change.name
            ))
        }
        Err(_) => Transition::unchanged(format!(
            "❌ Game '{name}' not found. Use `/listgames` to see all games."
        )),
    }
}

/// Stops tracking every name in `names` that is present.
///
/// Names that are not tracked are skipped.
pub fn apply_remove(state: &mut BoardState, names: &[String]) -> Transition {
    let removed: Vec<String> = names
        .iter()
        .filter_map(|name| state.games.remove(name).map(|(stored, _)| stored))
        .collect();

    if removed.is_empty() {
        return Transition::unchanged(NOTHING_REMOVED);
    }

    info!("Removed {} entries: {:?}", removed.len(), removed);
    let list = removed.join("', '");
    let reply = if removed.len() == 1 {
        format!("✅ Removed '{list}' from tracking")
    } else {
        format!("✅ Removed {} games: '{list}'", removed.len())
    };
    Transition::changed(reply)
}

/// Entries offered for removal: display order, capped at [`MAX_SELECT_OPTIONS`].
pub fn removal_options(state: &BoardState) -> Vec<(String, Status)> {
    state
        .games
        .sorted()
        .into_iter()
        .take(MAX_SELECT_OPTIONS)
        .map(|(name, status)| (name.to_string(), status.clone()))
        .collect()
}

/// Reply for a manual refresh.
pub fn refresh_reply(result: &std::result::Result<MessageId, PublishError>) -> String {
    match result {
        Ok(_) => REFRESHED.to_string(),
        Err(e) => format!("❌ Failed to update status board: {e}"),
    }
}

/// Appends the publish failure note to a reply for a change that was saved.
pub fn with_publish_failure(reply: &str, error: &PublishError) -> String {
    format!("{reply}\n⚠️ Saved, but the status board could not be updated: {error}")
}

/// Saves a changed state, republishes the board and returns the reply.
///
/// A failed save is an error. A failed publish is not: the change stays
/// saved and the reply says the board is stale.
pub async fn commit<C>(
    store: &BoardStore,
    state: &mut BoardState,
    transition: Transition,
    channel: &C,
) -> Result<String>
where
    C: BoardChannel + ?Sized,
{
    if !transition.changed {
        return Ok(transition.reply);
    }

    store.save(state).await?;

    match publish_state(store, state, channel).await {
        Ok(_) => Ok(transition.reply),
        Err(e) => {
            error!("Failed to update status board: {}", e);
            Ok(with_publish_failure(&transition.reply, &e))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> BoardState {
        let mut state = BoardState::default();
        state.games.insert_new("foo", Status::Undetected).unwrap();
        state.games.insert_new("Bar", Status::Testing).unwrap();
        state
    }

    #[test]
    fn test_add() {
        let mut state = BoardState::default();
        let t = apply_add(&mut state, "Widget", Status::HighRisk);
        assert!(t.changed);
        assert_eq!(t.reply, "✅ Added 'Widget' with status 'High Risk'");
        assert_eq!(state.games.get("widget"), Some(("Widget", &Status::HighRisk)));
    }

    #[test]
    fn test_add_conflict_ignores_case() {
        let mut state = state();
        let t = apply_add(&mut state, "Foo", Status::Detected);
        assert!(!t.changed);
        assert_eq!(
            t.reply,
            "❌ Game 'Foo' already exists. Use `/setstatus` to update it."
        );
        assert_eq!(state, self::state());
    }

    #[test]
    fn test_add_trims_and_rejects_blank() {
        let mut state = BoardState::default();
        assert_eq!(apply_add(&mut state, "   ", Status::Testing).reply, EMPTY_NAME);
        assert!(state.games.is_empty());

        apply_add(&mut state, "  Widget ", Status::Testing);
        assert_eq!(state.games.find_key("widget"), Some("Widget"));
    }

    #[test]
    fn test_set_status_reports_stored_name() {
        let mut state = state();
        let t = apply_set_status(&mut state, "FOO", Status::Detected);
        assert!(t.changed);
        assert_eq!(t.reply, "✅ Updated 'foo' from 'Undetected' to 'Detected'");
        assert_eq!(state.games.get("foo"), Some(("foo", &Status::Detected)));
    }

    #[test]
    fn test_set_status_not_found() {
        let mut state = state();
        let t = apply_set_status(&mut state, "baz", Status::Detected);
        assert!(!t.changed);
        assert_eq!(
            t.reply,
            "❌ Game 'baz' not found. Use `/listgames` to see all games."
        );
    }

    #[test]
    fn test_remove_skips_missing() {
        let mut state = BoardState::default();
        for name in ["A", "C"] {
            state.games.insert_new(name, Status::Testing).unwrap();
        }
        let names = vec!["A".to_string(), "B".to_string(), "C".to_string()];
        let t = apply_remove(&mut state, &names);

        assert!(t.changed);
        assert_eq!(t.reply, "✅ Removed 2 games: 'A', 'C'");
        assert!(state.games.is_empty());
    }

    #[test]
    fn test_remove_single() {
        let mut state = state();
        let t = apply_remove(&mut state, &["bar".to_string()]);
        assert_eq!(t.reply, "✅ Removed 'Bar' from tracking");
        assert_eq!(state.games.len(), 1);
    }

    #[test]
    fn test_remove_nothing() {
        let mut state = state();
        let t = apply_remove(&mut state, &["zzz".to_string()]);
        assert!(!t.changed);
        assert_eq!(t.reply, NOTHING_REMOVED);
    }

    #[test]
    fn test_removal_options_sorted_and_capped() {
        let mut state = BoardState::default();
        for i in (0..30).rev() {
            state
                .games
                .insert_new(format!("Game {i:02}"), Status::Undetected)
                .unwrap();
        }
        let options = removal_options(&state);
        assert_eq!(options.len(), MAX_SELECT_OPTIONS);
        assert_eq!(options[0].0, "Game 00");
        assert_eq!(options[24].0, "Game 24");
    }

    #[test]
    fn test_refresh_reply() {
        assert_eq!(refresh_reply(&Ok(MessageId(1))), REFRESHED);
        let err = PublishError::Platform {
            message: "Missing Access".to_string(),
            source: None,
        };
        assert_eq!(
            refresh_reply(&Err(err)),
            "❌ Failed to update status board: Missing Access"
        );
    }
}
