//! Core domain logic for LifeLines.
//! This crate is the single source of truth for association and presence
//! invariants; rendering, transport, and identity live elsewhere.

pub mod classify;
pub mod logging;
pub mod model;
pub mod service;
pub mod sync;

pub use classify::{
    fallback_response, story_line_snapshot, ClassifyError, PromptResponse, StoryLineClassifier,
    StoryLineSuggestion, FALLBACK_STORY_LINE_NAME,
};
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::life::{Life, MomentMap, MoveMomentRequest, StoryLineMap};
pub use model::moment::{Moment, MomentId};
pub use model::session::{
    Client, ClientSession, SelectAction, SelectionKey, SelectionState, UNDEFINED_USER_ID,
};
pub use model::story_line::{StoryLine, StoryLineId};
pub use service::life_service::LifeService;
pub use service::presence_service::{
    clean_session_data, test_remote_selection, update_remote_selection,
};
pub use sync::tree_view::{SubscriptionId, TreeView};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
