//! Life use-case service.
//!
//! # Responsibility
//! - Bind the composite Life mutations to the replicated tree so every
//!   multi-entity operation reaches the substrate as one commit.
//! - Drive the natural-language intake path through the injected classifier,
//!   recovering locally from every classifier failure.
//!
//! # Invariants
//! - The classifier is invoked at most once per intake; any error resolves
//!   to the deterministic fallback and is never surfaced to callers.
//! - An intake request always produces exactly one new moment.

use log::warn;

use crate::classify::{fallback_response, story_line_snapshot, StoryLineClassifier};
use crate::model::life::{Life, MoveMomentRequest};
use crate::model::moment::MomentId;
use crate::model::story_line::StoryLineId;
use crate::sync::tree_view::{SubscriptionId, TreeView};

/// Use-case facade over one replicated Life root.
pub struct LifeService<C: StoryLineClassifier> {
    tree: TreeView<Life>,
    classifier: C,
}

impl<C: StoryLineClassifier> LifeService<C> {
    /// Creates the service from an initialized tree and an injected
    /// classifier capability.
    pub fn new(tree: TreeView<Life>, classifier: C) -> Self {
        Self { tree, classifier }
    }

    /// Read access to the committed aggregate state.
    pub fn life(&self) -> &Life {
        self.tree.root()
    }

    /// Subscribes to committed-change notifications on the Life tree.
    pub fn on_changed(&mut self, listener: impl FnMut() + 'static) -> SubscriptionId {
        self.tree.on_changed(listener)
    }

    /// Removes one change subscription.
    pub fn unsubscribe(&mut self, subscription: SubscriptionId) -> bool {
        self.tree.unsubscribe(subscription)
    }

    /// Files a natural-language moment description into a storyline.
    ///
    /// Builds the in-context sample snapshot, asks the classifier once, and
    /// falls back to the deterministic default on any failure — the moment
    /// is never dropped. Storyline resolution and moment creation commit as
    /// a single transaction.
    pub fn add_moment_from_input(&mut self, description: &str) -> MomentId {
        let samples = story_line_snapshot(self.tree.root());
        let response = match self.classifier.classify(description, &samples) {
            Ok(response) => response,
            Err(err) => {
                warn!("event=classifier_fallback module=service status=recovered error={err}");
                fallback_response(description)
            }
        };

        self.tree.transact(|life| {
            let story_line_id = life.create_and_get_story_line(
                &response.story_line.name,
                response.story_line.is_existing,
            );
            // The storyline was resolved inside this same transaction, so the
            // add cannot miss; either arm produces exactly one new moment.
            life.create_and_add_moment(&response.moment_description, story_line_id)
                .unwrap_or_else(|| life.create_moment(&response.moment_description, None))
        })
    }

    /// Creates an empty storyline as one commit.
    pub fn create_story_line(&mut self, name: &str) -> StoryLineId {
        self.tree.transact(|life| life.create_story_line(name))
    }

    /// Creates a moment linked to one storyline as one commit.
    pub fn create_and_add_moment(
        &mut self,
        description: &str,
        story_line_id: StoryLineId,
    ) -> Option<MomentId> {
        self.tree
            .transact(|life| life.create_and_add_moment(description, story_line_id))
    }

    /// Rewrites a moment's storyline set as one commit.
    pub fn update_story_line_ids(&mut self, moment_id: MomentId, new_ids: &[StoryLineId]) {
        self.tree
            .transact(|life| life.update_story_line_ids(moment_id, new_ids));
    }

    /// Relocates a moment between storylines as one commit.
    pub fn move_moment(&mut self, request: MoveMomentRequest) {
        self.tree
            .transact(|life| life.move_moment_to_different_story_line(&request));
    }

    /// Deletes a storyline with its cascade as one commit.
    pub fn delete_story_line(&mut self, story_line_id: StoryLineId) {
        self.tree
            .transact(|life| life.delete_story_line(story_line_id));
    }

    /// Deletes a moment and its back-references as one commit.
    pub fn delete_moment(&mut self, moment_id: MomentId) {
        self.tree.transact(|life| life.delete_moment(moment_id));
    }

    /// Edits a moment's description as one commit.
    pub fn update_moment_description(&mut self, moment_id: MomentId, text: &str) {
        self.tree.transact(|life| {
            if let Some(moment) = life.moments.get_mut(moment_id) {
                moment.update_description(text);
            }
        });
    }

    /// Edits a moment's additional notes as one commit.
    pub fn update_moment_notes(&mut self, moment_id: MomentId, text: &str) {
        self.tree.transact(|life| {
            if let Some(moment) = life.moments.get_mut(moment_id) {
                moment.update_notes(text);
            }
        });
    }

    /// Renames a storyline as one commit.
    pub fn update_story_line_name(&mut self, story_line_id: StoryLineId, name: &str) {
        self.tree.transact(|life| {
            if let Some(story_line) = life.story_lines.get_mut(story_line_id) {
                story_line.update_name(name);
            }
        });
    }
}
