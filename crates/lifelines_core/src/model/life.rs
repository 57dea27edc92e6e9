//! Life root aggregate and association maintenance.
//!
//! # Responsibility
//! - Own every Moment and StoryLine instance for one collaborative session.
//! - Keep moment<->storyline back-references symmetric under every mutation.
//! - Provide the composite operations submitted as single transactions.
//!
//! # Invariants
//! - For every moment m and storyline s:
//!   `s.id in m.story_line_ids <=> m.id in s.moment_ids`.
//! - Every id stored in an association list resolves to a live entry in the
//!   corresponding collection.
//! - Removal primitives are silent no-ops when the value is already gone;
//!   concurrent deletion by another participant is an expected race.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::model::moment::{Moment, MomentId};
use crate::model::story_line::{StoryLine, StoryLineId};

/// Insertion-ordered keyed collection of moments.
///
/// Iteration follows insertion order; "first match in collection order"
/// throughout the crate means this order. Ids are unique: inserting a moment
/// whose id is already present replaces the existing entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MomentMap {
    entries: Vec<Moment>,
}

impl MomentMap {
    pub fn insert(&mut self, moment: Moment) {
        match self.entries.iter().position(|entry| entry.id == moment.id) {
            Some(index) => self.entries[index] = moment,
            None => self.entries.push(moment),
        }
    }

    pub fn get(&self, id: MomentId) -> Option<&Moment> {
        self.entries.iter().find(|entry| entry.id == id)
    }

    pub fn get_mut(&mut self, id: MomentId) -> Option<&mut Moment> {
        self.entries.iter_mut().find(|entry| entry.id == id)
    }

    /// Removes one moment by id. Missing ids are a silent no-op.
    pub fn remove(&mut self, id: MomentId) -> Option<Moment> {
        let index = self.entries.iter().position(|entry| entry.id == id)?;
        Some(self.entries.remove(index))
    }

    pub fn contains(&self, id: MomentId) -> bool {
        self.entries.iter().any(|entry| entry.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Moment> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Insertion-ordered keyed collection of storylines.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StoryLineMap {
    entries: Vec<StoryLine>,
}

impl StoryLineMap {
    pub fn insert(&mut self, story_line: StoryLine) {
        match self
            .entries
            .iter()
            .position(|entry| entry.id == story_line.id)
        {
            Some(index) => self.entries[index] = story_line,
            None => self.entries.push(story_line),
        }
    }

    pub fn get(&self, id: StoryLineId) -> Option<&StoryLine> {
        self.entries.iter().find(|entry| entry.id == id)
    }

    pub fn get_mut(&mut self, id: StoryLineId) -> Option<&mut StoryLine> {
        self.entries.iter_mut().find(|entry| entry.id == id)
    }

    /// Removes one storyline by id. Missing ids are a silent no-op.
    pub fn remove(&mut self, id: StoryLineId) -> Option<StoryLine> {
        let index = self.entries.iter().position(|entry| entry.id == id)?;
        Some(self.entries.remove(index))
    }

    pub fn contains(&self, id: StoryLineId) -> bool {
        self.entries.iter().any(|entry| entry.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &StoryLine> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Relocation request for one moment between two storylines.
///
/// `anchor` names the moment in the destination list to insert before;
/// without an anchor (or with an anchor that no longer resolves) the moment
/// is appended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveMomentRequest {
    pub moment_id: MomentId,
    pub origin_id: StoryLineId,
    pub destination_id: StoryLineId,
    pub anchor: Option<MomentId>,
}

/// Root aggregate for one collaborative session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Life {
    pub moments: MomentMap,
    pub story_lines: StoryLineMap,
}

impl Life {
    pub fn new() -> Self {
        Self::default()
    }

    /// Deterministic seed set used only for empty-session initialization.
    ///
    /// Back-references are established before the aggregate is handed out.
    pub fn sample_data() -> Self {
        let mut life = Self::new();
        let mut moment = Moment::create("arrived at Disneyland", None);
        let story_line = StoryLine::create("Vacation", vec![moment.id]);
        moment.story_line_ids.push(story_line.id);
        life.moments.insert(moment);
        life.story_lines.insert(story_line);
        life
    }

    /// Creates an unlinked moment and returns its id.
    pub fn create_moment(
        &mut self,
        description: impl Into<String>,
        additional_notes: Option<String>,
    ) -> MomentId {
        let moment = Moment::create(description, additional_notes);
        let id = moment.id;
        self.moments.insert(moment);
        id
    }

    /// Creates an empty storyline and returns its id.
    pub fn create_story_line(&mut self, name: impl Into<String>) -> StoryLineId {
        let story_line = StoryLine::create(name, Vec::new());
        let id = story_line.id;
        self.story_lines.insert(story_line);
        id
    }

    /// Creates a moment with exactly one initial storyline association.
    ///
    /// Returns `None` without creating anything when `story_line_id` does not
    /// resolve; a committed moment must never carry a dangling reference.
    pub fn create_and_add_moment(
        &mut self,
        description: impl Into<String>,
        story_line_id: StoryLineId,
    ) -> Option<MomentId> {
        let story_line = self.story_lines.get_mut(story_line_id)?;
        let mut moment = Moment::create(description, None);
        moment.story_line_ids.push(story_line_id);
        let moment_id = moment.id;
        story_line.moment_ids.push(moment_id);
        self.moments.insert(moment);
        Some(moment_id)
    }

    /// Resolves a storyline by exact name or creates a new one.
    ///
    /// With `is_existing` set, the first storyline in collection order whose
    /// name matches exactly (case-sensitive) wins; otherwise, or when no
    /// match exists, a new storyline with that name is created.
    pub fn create_and_get_story_line(&mut self, name: &str, is_existing: bool) -> StoryLineId {
        if is_existing {
            if let Some(existing) = self.story_lines.iter().find(|entry| entry.name == name) {
                return existing.id;
            }
        }
        self.create_story_line(name)
    }

    /// Rewrites the set of storylines a moment belongs to.
    ///
    /// Detaches the moment from every storyline no longer referenced, then
    /// rewrites the moment's own list, then appends the moment's id to every
    /// newly referenced storyline. Ids that do not resolve to a live
    /// storyline are dropped. Unknown `moment_id` is a silent no-op.
    pub fn update_story_line_ids(&mut self, moment_id: MomentId, new_ids: &[StoryLineId]) {
        let current = match self.moments.get(moment_id) {
            Some(moment) => moment.story_line_ids.clone(),
            None => return,
        };

        let mut resolved: Vec<StoryLineId> = Vec::with_capacity(new_ids.len());
        for id in new_ids {
            if self.story_lines.contains(*id) && !resolved.contains(id) {
                resolved.push(*id);
            }
        }

        for story_line_id in current {
            if !resolved.contains(&story_line_id) {
                if let Some(story_line) = self.story_lines.get_mut(story_line_id) {
                    story_line.remove_moment_id(moment_id);
                }
            }
        }

        if let Some(moment) = self.moments.get_mut(moment_id) {
            moment.story_line_ids = resolved.clone();
        }

        for story_line_id in resolved {
            if let Some(story_line) = self.story_lines.get_mut(story_line_id) {
                if !story_line.moment_ids.contains(&moment_id) {
                    story_line.moment_ids.push(moment_id);
                }
            }
        }
    }

    /// Relocates a moment from one storyline's ordered list to another's.
    ///
    /// Origin equal to destination degrades to a pure reorder within one
    /// list. Otherwise the moment is inserted into the destination at the
    /// resolved anchor index (appending without one), the destination id is
    /// added to the moment's own list when missing, and the moment is fully
    /// detached from the origin — cascading to moment deletion when it
    /// reaches zero storylines. Unresolvable ids are a silent no-op.
    pub fn move_moment_to_different_story_line(&mut self, request: &MoveMomentRequest) {
        let MoveMomentRequest {
            moment_id,
            origin_id,
            destination_id,
            anchor,
        } = *request;

        if !self.moments.contains(moment_id)
            || !self.story_lines.contains(origin_id)
            || !self.story_lines.contains(destination_id)
        {
            return;
        }

        if origin_id == destination_id {
            if let Some(story_line) = self.story_lines.get_mut(origin_id) {
                let Some(from) = story_line.moment_ids.iter().position(|id| *id == moment_id)
                else {
                    return;
                };
                story_line.moment_ids.remove(from);
                let to = resolve_insert_index(&story_line.moment_ids, anchor);
                story_line.moment_ids.insert(to, moment_id);
            }
            return;
        }

        if let Some(destination) = self.story_lines.get_mut(destination_id) {
            if !destination.moment_ids.contains(&moment_id) {
                let to = resolve_insert_index(&destination.moment_ids, anchor);
                destination.moment_ids.insert(to, moment_id);
            }
        }

        if let Some(moment) = self.moments.get_mut(moment_id) {
            if !moment.story_line_ids.contains(&destination_id) {
                moment.story_line_ids.push(destination_id);
            }
        }

        self.detach_moment_from_story_line(moment_id, origin_id);
    }

    /// Deletes a storyline, detaching every member moment.
    ///
    /// Moments left with zero storylines are removed from the root
    /// collection entirely. Unknown ids are a silent no-op.
    pub fn delete_story_line(&mut self, story_line_id: StoryLineId) {
        let member_ids = match self.story_lines.get(story_line_id) {
            Some(story_line) => story_line.moment_ids.clone(),
            None => return,
        };

        for moment_id in member_ids {
            self.detach_moment_from_story_line(moment_id, story_line_id);
        }
        self.story_lines.remove(story_line_id);
    }

    /// Deletes a moment, removing its id from every linked storyline.
    ///
    /// Unknown ids are a silent no-op.
    pub fn delete_moment(&mut self, moment_id: MomentId) {
        let story_line_ids = match self.moments.get(moment_id) {
            Some(moment) => moment.story_line_ids.clone(),
            None => return,
        };

        for story_line_id in story_line_ids {
            if let Some(story_line) = self.story_lines.get_mut(story_line_id) {
                story_line.remove_moment_id(moment_id);
            }
        }
        self.moments.remove(moment_id);
    }

    /// Returns the storylines a moment belongs to, in association order.
    pub fn story_lines_for_moment(&self, moment_id: MomentId) -> Vec<&StoryLine> {
        match self.moments.get(moment_id) {
            Some(moment) => moment
                .story_line_ids
                .iter()
                .filter_map(|id| self.story_lines.get(*id))
                .collect(),
            None => Vec::new(),
        }
    }

    fn detach_moment_from_story_line(&mut self, moment_id: MomentId, story_line_id: StoryLineId) {
        if let Some(story_line) = self.story_lines.get_mut(story_line_id) {
            story_line.remove_moment_id(moment_id);
        }

        let orphaned = match self.moments.get_mut(moment_id) {
            Some(moment) => {
                moment.remove_story_line_id(story_line_id);
                moment.story_line_ids.is_empty()
            }
            None => false,
        };

        if orphaned {
            self.moments.remove(moment_id);
            debug!(
                "event=moment_cascade_removed module=model status=ok moment_id={moment_id} story_line_id={story_line_id}"
            );
        }
    }
}

fn resolve_insert_index(moment_ids: &[MomentId], anchor: Option<MomentId>) -> usize {
    anchor
        .and_then(|anchor_id| moment_ids.iter().position(|id| *id == anchor_id))
        .unwrap_or(moment_ids.len())
}
