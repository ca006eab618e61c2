//! Helper utilities for the app layer
//!
//! This module contains pure functions and small state holders for geometry,
//! animation and formatting that do not touch `State` directly.

pub mod counters;
pub mod formatting;
pub mod visibility;

pub use counters::{ABOUT_COUNTERS, CounterAnimation};
pub use visibility::{
    PointerTracker, Section, SectionLayout, ViewportTracker, VisibilityObserver,
};
