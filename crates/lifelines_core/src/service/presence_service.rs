//! Presence protocol over the replicated session tree.
//!
//! # Responsibility
//! - Submit selection mutations as single transactions against the session
//!   root and expose the read side without commits.
//!
//! # Invariants
//! - Actions for the `UNDEFINED_USER_ID` sentinel never touch the tree, so
//!   no spurious change notification fires.

use crate::model::session::{
    ClientSession, SelectAction, SelectionKey, SelectionState, UNDEFINED_USER_ID,
};
use crate::sync::tree_view::TreeView;

/// Applies one selection action for the given client as one commit.
pub fn update_remote_selection(
    tree: &mut TreeView<ClientSession>,
    key: SelectionKey,
    action: SelectAction,
    client_id: &str,
) {
    if client_id == UNDEFINED_USER_ID {
        return;
    }
    tree.transact(|session| session.apply_selection(key, action, client_id));
}

/// Computes local and remote selection flags for one key. Pure read.
pub fn test_remote_selection(
    tree: &TreeView<ClientSession>,
    key: SelectionKey,
    client_id: &str,
    active_member_ids: &[String],
) -> SelectionState {
    tree.root().selection_state(key, client_id, active_member_ids)
}

/// Garbage-collects entries for clients absent from the roster, as one
/// commit. Invoke whenever the member roster changes.
pub fn clean_session_data(tree: &mut TreeView<ClientSession>, active_member_ids: &[String]) {
    tree.transact(|session| session.prune(active_member_ids));
}
