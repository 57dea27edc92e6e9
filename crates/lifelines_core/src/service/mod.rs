//! Use-case services binding the domain model to the replicated trees.
//!
//! # Responsibility
//! - Guarantee that every composite mutation reaches the substrate as a
//!   single indivisible commit.
//! - Keep external capabilities (the storyline classifier) injected, never
//!   ambient.

pub mod life_service;
pub mod presence_service;
