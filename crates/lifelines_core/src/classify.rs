//! Storyline classifier boundary.
//!
//! # Responsibility
//! - Define the narrow request/response contract for the external service
//!   that files a new moment into an existing or new storyline.
//! - Provide the deterministic local fallback used when the service fails,
//!   so a moment is never dropped.
//!
//! # Invariants
//! - The classifier is an explicitly constructed capability injected at the
//!   composition root, never ambient process-wide state.
//! - The call is at-most-once; no retry policy exists beyond the fallback.
//!
//! Transport, authentication, and endpoint configuration are out of scope.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

use crate::model::life::Life;

/// Name of the storyline that absorbs moments when classification fails.
pub const FALLBACK_STORY_LINE_NAME: &str = "Unsorted moments";

/// Storyline suggested by the classifier for one moment.
///
/// Wire names match the service's JSON response schema.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoryLineSuggestion {
    #[serde(rename = "storyline")]
    pub name: String,
    #[serde(rename = "existing")]
    pub is_existing: bool,
}

/// Full classifier response for one intake request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptResponse {
    pub moment_description: String,
    pub story_line: StoryLineSuggestion,
}

/// Failure modes of the external classifier call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClassifyError {
    /// Network-level failure reaching the service.
    Transport(String),
    /// The service answered with something the contract cannot parse.
    MalformedResponse(String),
    /// The service did not answer in time.
    Timeout,
}

impl Display for ClassifyError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Transport(message) => write!(f, "classifier transport failure: {message}"),
            Self::MalformedResponse(message) => {
                write!(f, "classifier response is malformed: {message}")
            }
            Self::Timeout => write!(f, "classifier call timed out"),
        }
    }
}

impl Error for ClassifyError {}

/// Capability suggesting a storyline for a newly entered moment.
///
/// `samples_json` carries a serialized snapshot of current storylines and
/// their moment descriptions, used as in-context examples.
pub trait StoryLineClassifier {
    fn classify(
        &self,
        description: &str,
        samples_json: &str,
    ) -> Result<PromptResponse, ClassifyError>;
}

/// Deterministic local recovery: file the moment under the fallback
/// storyline, marked as not existing.
pub fn fallback_response(description: &str) -> PromptResponse {
    PromptResponse {
        moment_description: description.to_string(),
        story_line: StoryLineSuggestion {
            name: FALLBACK_STORY_LINE_NAME.to_string(),
            is_existing: false,
        },
    }
}

#[derive(Serialize)]
struct SnapshotEntry<'a> {
    moment: &'a str,
    storyline: &'a str,
}

/// Serializes current storylines and their moment descriptions to the JSON
/// in-context sample format: `[{"moment": ..., "storyline": ...}, ...]`.
pub fn story_line_snapshot(life: &Life) -> String {
    let mut entries = Vec::new();
    for story_line in life.story_lines.iter() {
        for moment_id in &story_line.moment_ids {
            if let Some(moment) = life.moments.get(*moment_id) {
                entries.push(SnapshotEntry {
                    moment: &moment.description,
                    storyline: &story_line.name,
                });
            }
        }
    }
    serde_json::to_string(&entries).unwrap_or_else(|_| "[]".to_string())
}

#[cfg(test)]
mod tests {
    use super::{fallback_response, story_line_snapshot, FALLBACK_STORY_LINE_NAME};
    use crate::model::life::Life;

    #[test]
    fn fallback_keeps_description_and_marks_new_storyline() {
        let response = fallback_response("I ate a cheeseburger");
        assert_eq!(response.moment_description, "I ate a cheeseburger");
        assert_eq!(response.story_line.name, FALLBACK_STORY_LINE_NAME);
        assert!(!response.story_line.is_existing);
    }

    #[test]
    fn snapshot_of_empty_life_is_empty_array() {
        assert_eq!(story_line_snapshot(&Life::new()), "[]");
    }

    #[test]
    fn snapshot_pairs_moment_descriptions_with_storyline_names() {
        let life = Life::sample_data();
        let snapshot = story_line_snapshot(&life);
        assert_eq!(
            snapshot,
            r#"[{"moment":"arrived at Disneyland","storyline":"Vacation"}]"#
        );
    }
}
