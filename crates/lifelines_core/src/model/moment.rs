//! Moment domain model.
//!
//! # Responsibility
//! - Define the discrete life-event record shared across participants.
//! - Provide content-edit helpers that keep `last_changed` honest.
//!
//! # Invariants
//! - `id` is stable and never reused for another moment.
//! - `last_changed >= created` after any edit helper.
//! - Every id in `story_line_ids` is mirrored by that storyline's
//!   `moment_ids`; the `Life` aggregate maintains the symmetry.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::model::story_line::StoryLineId;

/// Stable identifier for a moment.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type MomentId = Uuid;

/// A discrete life event recorded by a participant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Moment {
    /// Stable global ID used for storyline back-references and presence keys.
    pub id: MomentId,
    /// Creation time in epoch milliseconds. Never updated.
    pub created: i64,
    /// Last content edit in epoch milliseconds.
    pub last_changed: i64,
    /// What happened.
    pub description: String,
    /// Additional details about what happened.
    pub additional_notes: Option<String>,
    /// Storylines this moment belongs to, in association order.
    pub story_line_ids: Vec<StoryLineId>,
}

impl Moment {
    /// Creates a new moment with a generated stable ID.
    ///
    /// `created` and `last_changed` are stamped with the same value.
    pub fn create(description: impl Into<String>, additional_notes: Option<String>) -> Self {
        Self::with_id(Uuid::new_v4(), description, additional_notes)
    }

    /// Creates a new moment with a caller-provided stable ID.
    ///
    /// Used by sync/import paths where identity already exists externally,
    /// and by tests that need deterministic ids.
    pub fn with_id(
        id: MomentId,
        description: impl Into<String>,
        additional_notes: Option<String>,
    ) -> Self {
        let now = Utc::now().timestamp_millis();
        Self {
            id,
            created: now,
            last_changed: now,
            description: description.into(),
            additional_notes,
            story_line_ids: Vec::new(),
        }
    }

    /// Replaces the description and bumps `last_changed`.
    pub fn update_description(&mut self, text: impl Into<String>) {
        self.last_changed = Utc::now().timestamp_millis();
        self.description = text.into();
    }

    /// Replaces the additional notes and bumps `last_changed`.
    pub fn update_notes(&mut self, text: impl Into<String>) {
        self.last_changed = Utc::now().timestamp_millis();
        self.additional_notes = Some(text.into());
    }

    /// Removes one storyline reference by value. A missing id is a silent
    /// no-op; restoring symmetry on the storyline side is the caller's job.
    pub fn remove_story_line_id(&mut self, story_line_id: StoryLineId) {
        self.story_line_ids.retain(|id| *id != story_line_id);
    }
}
