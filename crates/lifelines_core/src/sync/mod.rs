//! Boundary to the external replicated-tree substrate.
//!
//! The core depends on three substrate behaviors only: initializing a root
//! with a value when empty, submitting named mutations as atomic
//! transactions, and subscribing to committed-change notifications.
//! `tree_view` reproduces exactly that contract in process.

pub mod tree_view;
