//! Domain model for one collaborative life-journaling session.
//!
//! # Responsibility
//! - Define the replicated content entities (moments, storylines, the Life
//!   root aggregate) and the ephemeral presence entities.
//! - Keep every association bidirectionally consistent after each committed
//!   operation.
//!
//! # Invariants
//! - Every domain object is identified by a stable `Uuid`.
//! - Content and presence are separate roots; presence holds only weak
//!   by-id references into content.

pub mod life;
pub mod moment;
pub mod session;
pub mod story_line;
