//! Section geometry, visibility and pointer tracking
//!
//! The page is one vertical scrollable made of fixed-height sections, so
//! every section's extent is known up front from [`SectionLayout`]. The
//! [`ViewportTracker`] combines that layout with the scrollable's viewport to
//! answer "how much of this section is on screen" and "where is the pointer
//! inside this section", which is all the scroll-spy, counter trigger and
//! hover glow need.

use crate::core::filter::GalleryState;
use iced::{Point, Rectangle, Size};
use strum::{Display, EnumIter, IntoEnumIterator};

/// Height reserved for the sticky header above the page scrollable
pub const HEADER_HEIGHT: f32 = 72.0;
/// Scroll distance after which the header switches to its compact style
pub const SCROLLED_THRESHOLD: f32 = 20.0;
/// Share of a section that must be on screen for its nav item to light up
pub const NAV_THRESHOLD: f32 = 0.6;
/// Share of the About section that must be on screen before counters run
pub const COUNTER_THRESHOLD: f32 = 0.2;

pub const HOME_HEIGHT: f32 = 760.0;
pub const ABOUT_HEIGHT: f32 = 980.0;
pub const CONTACT_HEIGHT: f32 = 1040.0;
/// Title, filter bar, tag banner and statistics
pub const PROJECTS_CHROME_HEIGHT: f32 = 720.0;
pub const PROJECT_ROW_HEIGHT: f32 = 440.0;
pub const PROJECTS_EMPTY_HEIGHT: f32 = 260.0;
pub const CARDS_PER_ROW: usize = 2;

/// Anchored page sections in top-to-bottom order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum Section {
    Home,
    About,
    Projects,
    Contact,
}

impl Section {
    pub fn nav_icon(self) -> &'static str {
        match self {
            Self::Home => "🏠",
            Self::About => "👤",
            Self::Projects => "💼",
            Self::Contact => "📧",
        }
    }
}

/// Section heights for the current page contents
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionLayout {
    projects_height: f32,
}

impl SectionLayout {
    /// Layout for a gallery showing `visible_cards` project cards
    #[allow(clippy::cast_precision_loss)]
    pub fn for_cards(visible_cards: usize) -> Self {
        let rows = visible_cards.div_ceil(CARDS_PER_ROW);
        let grid = if rows == 0 {
            PROJECTS_EMPTY_HEIGHT
        } else {
            rows as f32 * PROJECT_ROW_HEIGHT
        };
        Self {
            projects_height: PROJECTS_CHROME_HEIGHT + grid,
        }
    }

    pub fn for_gallery(gallery: &GalleryState<'_>) -> Self {
        Self::for_cards(gallery.visible().len())
    }

    pub fn height(&self, section: Section) -> f32 {
        match section {
            Section::Home => HOME_HEIGHT,
            Section::About => ABOUT_HEIGHT,
            Section::Projects => self.projects_height,
            Section::Contact => CONTACT_HEIGHT,
        }
    }

    /// Offset of the section's top edge within the page content
    pub fn top(&self, section: Section) -> f32 {
        Section::iter()
            .take_while(|s| *s != section)
            .map(|s| self.height(s))
            .sum()
    }

    pub fn total_height(&self) -> f32 {
        Section::iter().map(|s| self.height(s)).sum()
    }
}

/// A section crossing a watched threshold in either direction
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisibilityChange {
    pub section: Section,
    pub threshold: f32,
    pub visible: bool,
}

/// Answers visibility questions about page sections
pub trait VisibilityObserver {
    fn is_visible(&self, section: Section, threshold: f32) -> bool;

    /// Re-evaluates every watched threshold and reports the ones that flipped
    /// since the previous call.
    fn observe(&mut self) -> Vec<VisibilityChange>;
}

/// Pointer position relative to a section, in percent of its width and height
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerPosition {
    pub x: f32,
    pub y: f32,
}

impl Default for PointerPosition {
    fn default() -> Self {
        Self { x: 50.0, y: 50.0 }
    }
}

pub trait PointerTracker {
    /// `None` while the pointer is outside the section or the window
    fn position(&self, region: Section) -> Option<PointerPosition>;
}

#[derive(Debug, Clone, Copy)]
struct Watch {
    section: Section,
    threshold: f32,
    visible: bool,
}

/// Viewport state of the page scrollable
#[derive(Debug, Clone)]
pub struct ViewportTracker {
    layout: SectionLayout,
    offset_y: f32,
    bounds: Rectangle,
    content_height: f32,
    cursor: Option<Point>,
    watches: Vec<Watch>,
}

impl ViewportTracker {
    pub fn new(layout: SectionLayout, window: Size) -> Self {
        let mut tracker = Self {
            layout,
            offset_y: 0.0,
            bounds: Rectangle::default(),
            content_height: layout.total_height(),
            cursor: None,
            watches: Vec::new(),
        };
        tracker.resize(window);
        tracker
    }

    /// Registers a threshold to be reported by [`VisibilityObserver::observe`]
    pub fn watch(&mut self, section: Section, threshold: f32) {
        self.watches.push(Watch {
            section,
            threshold,
            visible: false,
        });
    }

    pub fn layout(&self) -> SectionLayout {
        self.layout
    }

    pub fn set_layout(&mut self, layout: SectionLayout) {
        self.layout = layout;
        self.content_height = layout.total_height();
        self.offset_y = self.offset_y.min(self.max_offset());
    }

    /// Window size changed; the scrollable fills everything below the header
    pub fn resize(&mut self, window: Size) {
        self.bounds = Rectangle {
            x: 0.0,
            y: HEADER_HEIGHT,
            width: window.width,
            height: (window.height - HEADER_HEIGHT).max(0.0),
        };
        self.offset_y = self.offset_y.min(self.max_offset());
    }

    /// Scroll event from the page scrollable
    pub fn scrolled(&mut self, offset_y: f32, bounds: Rectangle, content_height: f32) {
        self.bounds = bounds;
        self.content_height = content_height;
        self.offset_y = offset_y.max(0.0);
    }

    /// Programmatic scroll; clamped to the scrollable range
    pub fn jump_to(&mut self, offset_y: f32) {
        self.offset_y = offset_y.clamp(0.0, self.max_offset());
    }

    pub fn set_cursor(&mut self, cursor: Option<Point>) {
        self.cursor = cursor;
    }

    fn max_offset(&self) -> f32 {
        (self.content_height - self.bounds.height).max(0.0)
    }

    /// Share of the section on screen, normalized by whichever is smaller of
    /// the section and the viewport so tall sections can still reach 1.0.
    pub fn intersection_ratio(&self, section: Section) -> f32 {
        let top = self.layout.top(section);
        let bottom = top + self.layout.height(section);
        let view_top = self.offset_y;
        let view_bottom = self.offset_y + self.bounds.height;

        let overlap = (bottom.min(view_bottom) - top.max(view_top)).max(0.0);
        let basis = self.layout.height(section).min(self.bounds.height);
        if basis <= 0.0 {
            return 0.0;
        }
        (overlap / basis).clamp(0.0, 1.0)
    }

    /// Scroll progress through the page in percent, clamped to 0..=100
    pub fn scroll_progress(&self) -> f32 {
        let total = self.max_offset();
        if total <= 0.0 {
            return 0.0;
        }
        (self.offset_y / total * 100.0).clamp(0.0, 100.0)
    }

    pub fn is_scrolled(&self) -> bool {
        self.offset_y > SCROLLED_THRESHOLD
    }

    /// On-screen rectangle of a section in window coordinates
    fn section_rect(&self, section: Section) -> Rectangle {
        Rectangle {
            x: self.bounds.x,
            y: self.bounds.y + self.layout.top(section) - self.offset_y,
            width: self.bounds.width,
            height: self.layout.height(section),
        }
    }
}

impl VisibilityObserver for ViewportTracker {
    fn is_visible(&self, section: Section, threshold: f32) -> bool {
        let ratio = self.intersection_ratio(section);
        ratio > 0.0 && ratio >= threshold
    }

    fn observe(&mut self) -> Vec<VisibilityChange> {
        let mut changes = Vec::new();
        for i in 0..self.watches.len() {
            let Watch {
                section,
                threshold,
                visible,
            } = self.watches[i];
            let now = self.is_visible(section, threshold);
            if now != visible {
                self.watches[i].visible = now;
                changes.push(VisibilityChange {
                    section,
                    threshold,
                    visible: now,
                });
            }
        }
        changes
    }
}

impl PointerTracker for ViewportTracker {
    fn position(&self, region: Section) -> Option<PointerPosition> {
        let cursor = self.cursor?;
        let rect = self.section_rect(region);
        if !rect.contains(cursor) || !self.bounds.contains(cursor) || rect.width <= 0.0 {
            return None;
        }
        Some(PointerPosition {
            x: (cursor.x - rect.x) / rect.width * 100.0,
            y: (cursor.y - rect.y) / rect.height * 100.0,
        })
    }
}
