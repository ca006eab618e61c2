//! Page chrome
//!
//! Handles everything that is not gallery or contact state:
//! - Anchor navigation and scroll-spy
//! - Scroll progress and window geometry
//! - Theme toggling
//! - Hero text rotation and About counters
//! - Opening external links

use crate::app::helpers::visibility::{COUNTER_THRESHOLD, NAV_THRESHOLD};
use crate::app::helpers::{Section, VisibilityObserver};
use crate::app::view::PAGE_SCROLLABLE_ID;
use crate::app::{CURRENTLY_LEARNING, Message, State};
use iced::widget::{Id, scrollable};
use iced::{Size, Task};
use std::time::Instant;

/// Feeds threshold crossings into scroll-spy and the counter trigger
pub(crate) fn apply_visibility_changes(state: &mut State) {
    for change in state.viewport.observe() {
        if !change.visible {
            continue;
        }
        if (change.threshold - NAV_THRESHOLD).abs() < f32::EPSILON
            && state.active_section != change.section
        {
            tracing::debug!("Scroll-spy: {} is now active", change.section);
            state.active_section = change.section;
        }
        if change.section == Section::About
            && (change.threshold - COUNTER_THRESHOLD).abs() < f32::EPSILON
            && !state.counters.has_started()
        {
            tracing::debug!("About section in view, starting counters");
            state.counters.start(Instant::now());
        }
    }
}

/// Handles a nav item, CTA or "Hire Me" click
pub(crate) fn handle_navigate(state: &mut State, section: Section) -> Task<Message> {
    let top = state.viewport.layout().top(section);
    tracing::info!("Navigating to {section}");

    state.active_section = section;
    state.viewport.jump_to(top);
    apply_visibility_changes(state);

    iced::widget::operation::scroll_to(
        Id::new(PAGE_SCROLLABLE_ID),
        scrollable::AbsoluteOffset { x: 0.0, y: top },
    )
}

pub(crate) fn handle_page_scrolled(state: &mut State, viewport: &scrollable::Viewport) {
    state.viewport.scrolled(
        viewport.absolute_offset().y,
        viewport.bounds(),
        viewport.content_bounds().height,
    );
    apply_visibility_changes(state);
}

pub(crate) fn handle_window_resized(state: &mut State, size: Size) {
    state.viewport.resize(size);
    apply_visibility_changes(state);
}

pub(crate) fn handle_theme_toggled(state: &mut State) {
    state.theme_mode = state.theme_mode.toggled();
    state.theme = state.theme_mode.to_theme();
    tracing::info!("Theme switched to {}", state.theme_mode);
}

pub(crate) fn handle_learning_tick(state: &mut State) {
    state.learning_index = (state.learning_index + 1) % CURRENTLY_LEARNING.len();
}

/// Opens a project link in the desktop's default handler
pub(crate) fn handle_open_link(url: &str) {
    tracing::info!("Opening {url}");

    #[cfg(target_os = "linux")]
    let spawned = std::process::Command::new("xdg-open").arg(url).spawn();
    #[cfg(target_os = "macos")]
    let spawned = std::process::Command::new("open").arg(url).spawn();
    #[cfg(target_os = "windows")]
    let spawned = std::process::Command::new("explorer").arg(url).spawn();
    #[cfg(not(any(target_os = "linux", target_os = "macos", target_os = "windows")))]
    let spawned: std::io::Result<std::process::Child> = Err(std::io::ErrorKind::Unsupported.into());

    if let Err(e) = spawned {
        tracing::warn!("Could not open {url}: {e}");
    }
}
