//! Project gallery selection
//!
//! Category and tag are independent selectors; every change resizes the
//! projects section, which shifts the sections below it.

use crate::app::State;
use crate::app::handlers::apply_visibility_changes;
use crate::app::helpers::SectionLayout;
use crate::core::filter::CategoryFilter;

fn relayout(state: &mut State) {
    state
        .viewport
        .set_layout(SectionLayout::for_gallery(&state.gallery));
    apply_visibility_changes(state);
}

pub(crate) fn handle_category_selected(state: &mut State, filter: CategoryFilter) {
    tracing::debug!("Category filter: {filter}");
    state.gallery.select_category(filter);
    relayout(state);
}

/// Handles a click on a technology chip of any card
pub(crate) fn handle_tag_selected(state: &mut State, tag: &str) {
    tracing::debug!("Tag filter: {tag}");
    state.gallery.select_tag(tag);
    relayout(state);
}

pub(crate) fn handle_tag_cleared(state: &mut State) {
    state.gallery.clear_tag();
    relayout(state);
}

pub(crate) fn handle_project_inspected(state: &mut State, title: &str) {
    state.gallery.inspect(title);
    if state.gallery.inspected().is_none() {
        tracing::warn!("No project titled {title:?}");
    }
}

pub(crate) fn handle_detail_closed(state: &mut State) {
    state.gallery.close_detail();
}
