//! Message handlers organized by domain
//!
//! Each submodule owns the message variants of one page area so that
//! `State::update` stays a flat dispatch table.

pub mod contact;
pub mod gallery;
pub mod navigation;

#[cfg(test)]
pub mod test_utils;

// Re-export all handlers for clean imports in app/mod.rs
pub(crate) use contact::*;
pub(crate) use gallery::*;
pub(crate) use navigation::*;
