//! StoryLine domain model.
//!
//! # Invariants
//! - `id` is stable and never reused for another storyline.
//! - Every id in `moment_ids` is mirrored by that moment's
//!   `story_line_ids`; the `Life` aggregate maintains the symmetry.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::model::moment::MomentId;

/// Stable identifier for a storyline.
pub type StoryLineId = Uuid;

/// A named grouping of moments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoryLine {
    /// Stable global ID used for moment back-references and presence keys.
    pub id: StoryLineId,
    /// Display name. Not required to be unique.
    pub name: String,
    /// Member moments, in display order.
    pub moment_ids: Vec<MomentId>,
}

impl StoryLine {
    /// Creates a new storyline with a generated stable ID.
    pub fn create(name: impl Into<String>, moment_ids: Vec<MomentId>) -> Self {
        Self::with_id(Uuid::new_v4(), name, moment_ids)
    }

    /// Creates a new storyline with a caller-provided stable ID.
    pub fn with_id(id: StoryLineId, name: impl Into<String>, moment_ids: Vec<MomentId>) -> Self {
        Self {
            id,
            name: name.into(),
            moment_ids,
        }
    }

    /// Renames this storyline.
    pub fn update_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Removes one moment reference by value. A missing id is a silent
    /// no-op; restoring symmetry on the moment side is the caller's job.
    pub fn remove_moment_id(&mut self, moment_id: MomentId) {
        self.moment_ids.retain(|id| *id != moment_id);
    }
}
