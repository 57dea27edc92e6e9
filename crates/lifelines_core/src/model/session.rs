//! Session presence model and selection protocol.
//!
//! # Responsibility
//! - Track which moment x storyline pairs each connected client has
//!   selected, as a root parallel to `Life`.
//! - Hold only weak by-id references into Life entities; presence never
//!   cascades into the content lifecycle.
//!
//! # Invariants
//! - At most one `Client` entry exists per `client_id`.
//! - Selection lists never contain duplicate keys.
//! - Operations invoked for the `UNDEFINED_USER_ID` sentinel are silent
//!   no-ops; presence is not tracked before identity is established.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

use crate::model::moment::MomentId;
use crate::model::story_line::StoryLineId;

/// Sentinel client id used before presence/identity is established.
pub const UNDEFINED_USER_ID: &str = "[UNDEFINED]";

/// Composition key identifying one moment x storyline pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectionKey {
    pub story_line_id: StoryLineId,
    pub moment_id: MomentId,
}

impl SelectionKey {
    pub fn new(story_line_id: StoryLineId, moment_id: MomentId) -> Self {
        Self {
            story_line_id,
            moment_id,
        }
    }
}

impl Display for SelectionKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.story_line_id, self.moment_id)
    }
}

/// Selection action requested by a client.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectAction {
    /// Replace the client's whole selection with one key.
    Single,
    /// Toggle-add one key to the client's selection.
    Multi,
    /// Remove one key from the client's selection.
    Remove,
}

/// Per-client selection entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Client {
    pub client_id: String,
    pub selected: Vec<SelectionKey>,
}

impl Client {
    pub fn new(client_id: impl Into<String>, selected: Vec<SelectionKey>) -> Self {
        Self {
            client_id: client_id.into(),
            selected,
        }
    }
}

/// Local and remote selection flags for one key, as seen by one client.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SelectionState {
    /// The invoking client has the key selected.
    pub selected: bool,
    /// Some other currently-connected client has the key selected.
    pub remote_selected: bool,
}

/// Presence root: the roster of clients that have made selections.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientSession {
    pub clients: Vec<Client>,
}

impl ClientSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies one selection action for the given client.
    ///
    /// - `Remove` drops the key from the client's list when present; a
    ///   client with no entry is left untouched.
    /// - `Multi` toggle-adds the key, never duplicating; a client with no
    ///   entry is left untouched — the first selection must be `Single` for
    ///   presence to initialize.
    /// - `Single` replaces the client's whole selection with exactly the
    ///   key, creating the entry when absent.
    pub fn apply_selection(&mut self, key: SelectionKey, action: SelectAction, client_id: &str) {
        if client_id == UNDEFINED_USER_ID {
            return;
        }

        match action {
            SelectAction::Remove => {
                if let Some(client) = self.client_mut(client_id) {
                    client.selected.retain(|selected| *selected != key);
                }
            }
            SelectAction::Multi => {
                if let Some(client) = self.client_mut(client_id) {
                    if !client.selected.contains(&key) {
                        client.selected.push(key);
                    }
                }
            }
            SelectAction::Single => {
                match self
                    .clients
                    .iter()
                    .position(|client| client.client_id == client_id)
                {
                    Some(index) => {
                        let client = &mut self.clients[index];
                        client.selected.clear();
                        client.selected.push(key);
                    }
                    None => self.clients.push(Client::new(client_id, vec![key])),
                }
            }
        }
    }

    /// Computes local and remote selection flags for one key. Pure read.
    ///
    /// Remote selection only considers clients present in the supplied
    /// active-member roster, so entries left behind by disconnected clients
    /// never read as remote selections.
    pub fn selection_state(
        &self,
        key: SelectionKey,
        client_id: &str,
        active_member_ids: &[String],
    ) -> SelectionState {
        let mut state = SelectionState::default();
        if client_id == UNDEFINED_USER_ID {
            return state;
        }

        for client in &self.clients {
            if !client.selected.contains(&key) {
                continue;
            }
            if client.client_id == client_id {
                state.selected = true;
            } else if active_member_ids.iter().any(|id| *id == client.client_id) {
                state.remote_selected = true;
            }
        }
        state
    }

    /// Returns a snapshot of one client's selected keys.
    pub fn selected_keys(&self, client_id: &str) -> Vec<SelectionKey> {
        self.clients
            .iter()
            .find(|client| client.client_id == client_id)
            .map(|client| client.selected.clone())
            .unwrap_or_default()
    }

    /// Drops every entry whose client is absent from the active roster.
    ///
    /// Invoked whenever the roster changes, to bound the presence structure
    /// to currently-connected participants.
    pub fn prune(&mut self, active_member_ids: &[String]) {
        self.clients
            .retain(|client| active_member_ids.iter().any(|id| *id == client.client_id));
    }

    fn client_mut(&mut self, client_id: &str) -> Option<&mut Client> {
        self.clients
            .iter_mut()
            .find(|client| client.client_id == client_id)
    }
}
