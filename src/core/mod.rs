//! Core portfolio logic
//!
//! Everything in here is synchronous and free of UI and I/O concerns:
//!
//! - [`catalog`]: The static project catalog and its invariants
//! - [`filter`]: Category/tag filtering, counts and gallery selection state
//! - [`contact`]: Contact form record and field validation
//! - [`submission`]: Idle/Submitting/Success state machine around the send operation
//! - [`error`]: Error types

pub mod catalog;
pub mod contact;
pub mod error;
pub mod filter;
pub mod submission;

#[cfg(test)]
mod tests;
