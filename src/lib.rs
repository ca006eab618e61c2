//! Folio - personal portfolio showcase
//!
//! Library half of the Folio application, holding everything that does not
//! need a window.
//!
//! # Architecture
//!
//! - [`core`] - Project catalog, filter engine, contact validation and the
//!   submission state machine
//! - [`mailer`] - Contact message delivery through EmailJS
//! - [`config`] - Read-only start-up configuration
//! - [`theme`] - Color palettes for the light and dark modes
//! - [`utils`] - Utility functions (XDG directories, etc.)

// Allow pedantic clippy warnings that are not worth fixing for this codebase
#![allow(clippy::must_use_candidate)]
#![allow(clippy::return_self_not_must_use)]
#![allow(clippy::needless_lifetimes)]
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::too_many_lines)]
#![allow(clippy::missing_errors_doc)]

pub mod config;
pub mod core;
pub mod mailer;
pub mod theme;
pub mod utils;

// Re-export commonly used types
pub use core::catalog::{CATALOG, Project};
pub use core::error::{Error, Result};
pub use core::filter::{CategoryFilter, GalleryState};
