//! Project filter engine
//!
//! Derives the visible gallery subset from two independent selectors:
//! the active category and the active technology tag. Both are kept as
//! separate cells in [`GalleryState`]; changing one never touches the other.

use crate::core::catalog::{Category, Project, ProjectStatus, find_project};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;
use strum::IntoEnumIterator;

/// Category selector: the synthetic `All` entry or one concrete category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    /// Filter buttons in display order: `All` first, then every category
    pub fn all_options() -> Vec<Self> {
        std::iter::once(Self::All)
            .chain(Category::iter().map(Self::Only))
            .collect()
    }

    pub fn matches(self, project: &Project) -> bool {
        match self {
            Self::All => true,
            Self::Only(category) => project.category == category,
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str("All"),
            Self::Only(category) => write!(f, "{category}"),
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "All" {
            return Ok(Self::All);
        }
        Category::from_str(s).map(Self::Only).map_err(|_| {
            let options: Vec<String> = Self::all_options().iter().map(ToString::to_string).collect();
            format!("unknown category '{s}' (expected one of: {})", options.join(", "))
        })
    }
}

/// Returns the catalog entries matching both selectors, in catalog order.
///
/// Pure and idempotent. An empty result is returned as-is; rendering an
/// empty state is the caller's job.
pub fn filter_projects<'a>(
    catalog: &'a [Project],
    category: CategoryFilter,
    tag: Option<&str>,
) -> Vec<&'a Project> {
    catalog
        .iter()
        .filter(|p| category.matches(p))
        .filter(|p| tag.is_none_or(|t| p.uses(t)))
        .collect()
}

/// Per-category membership counts, `All` first.
///
/// Independent of the tag selector.
pub fn category_counts(catalog: &[Project]) -> Vec<(CategoryFilter, usize)> {
    CategoryFilter::all_options()
        .into_iter()
        .map(|filter| {
            let count = match filter {
                CategoryFilter::All => catalog.len(),
                CategoryFilter::Only(_) => catalog.iter().filter(|p| filter.matches(p)).count(),
            };
            (filter, count)
        })
        .collect()
}

/// Aggregate figures shown under the gallery
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CatalogStats {
    pub total: usize,
    pub live: usize,
    pub technologies: usize,
    pub featured: usize,
}

impl CatalogStats {
    pub fn compute(catalog: &[Project]) -> Self {
        let technologies: BTreeSet<&str> =
            catalog.iter().flat_map(|p| p.tech.iter().copied()).collect();
        Self {
            total: catalog.len(),
            live: catalog
                .iter()
                .filter(|p| p.status == ProjectStatus::Live)
                .count(),
            technologies: technologies.len(),
            featured: catalog.iter().filter(|p| p.featured).count(),
        }
    }
}

/// Gallery view state over a borrowed catalog
///
/// Counts are derived once at construction since the catalog never changes
/// while borrowed.
#[derive(Debug, Clone)]
pub struct GalleryState<'a> {
    catalog: &'a [Project],
    active_category: CategoryFilter,
    active_tag: Option<String>,
    inspected: Option<&'a Project>,
    counts: Vec<(CategoryFilter, usize)>,
    stats: CatalogStats,
}

impl<'a> GalleryState<'a> {
    pub fn new(catalog: &'a [Project]) -> Self {
        Self {
            catalog,
            active_category: CategoryFilter::All,
            active_tag: None,
            inspected: None,
            counts: category_counts(catalog),
            stats: CatalogStats::compute(catalog),
        }
    }

    pub fn active_category(&self) -> CategoryFilter {
        self.active_category
    }

    pub fn active_tag(&self) -> Option<&str> {
        self.active_tag.as_deref()
    }

    /// Leaves the tag selector untouched
    pub fn select_category(&mut self, category: CategoryFilter) {
        self.active_category = category;
    }

    /// Leaves the category selector untouched
    pub fn select_tag(&mut self, tag: impl Into<String>) {
        self.active_tag = Some(tag.into());
    }

    pub fn clear_tag(&mut self) {
        self.active_tag = None;
    }

    pub fn visible(&self) -> Vec<&'a Project> {
        filter_projects(self.catalog, self.active_category, self.active_tag.as_deref())
    }

    pub fn counts(&self) -> &[(CategoryFilter, usize)] {
        &self.counts
    }

    pub fn stats(&self) -> CatalogStats {
        self.stats
    }

    /// Opens the detail view regardless of the active filters.
    ///
    /// Unknown titles leave the current selection unchanged.
    pub fn inspect(&mut self, title: &str) {
        if let Some(project) = find_project(self.catalog, title) {
            self.inspected = Some(project);
        }
    }

    pub fn close_detail(&mut self) {
        self.inspected = None;
    }

    pub fn inspected(&self) -> Option<&'a Project> {
        self.inspected
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::catalog::CATALOG;

    fn titles(projects: &[&Project]) -> Vec<&'static str> {
        projects.iter().map(|p| p.title).collect()
    }

    #[test]
    fn test_all_without_tag_returns_full_catalog() {
        let visible = filter_projects(CATALOG, CategoryFilter::All, None);
        assert_eq!(visible.len(), CATALOG.len());
    }

    #[test]
    fn test_web_app_category() {
        let visible = filter_projects(CATALOG, CategoryFilter::Only(Category::WebApp), None);
        assert_eq!(
            titles(&visible),
            vec!["AI Career Guide", "Finance-Tracker", "Blog Website"]
        );
    }

    #[test]
    fn test_web_app_with_react_tag() {
        let visible = filter_projects(
            CATALOG,
            CategoryFilter::Only(Category::WebApp),
            Some("React"),
        );
        assert!(visible.iter().all(|p| p.category == Category::WebApp));
        assert!(visible.iter().all(|p| p.tech.contains(&"React")));
        assert_eq!(visible.len(), 3);
    }

    #[test]
    fn test_tag_narrows_across_categories() {
        let visible = filter_projects(CATALOG, CategoryFilter::All, Some("CSS"));
        assert_eq!(titles(&visible), vec!["Tic-Tac-Toe", "Portfolio v2"]);
    }

    #[test]
    fn test_unknown_tag_yields_empty() {
        let visible = filter_projects(CATALOG, CategoryFilter::Only(Category::Game), Some("Rust"));
        assert!(visible.is_empty());
    }

    #[test]
    fn test_tag_match_is_exact() {
        assert!(filter_projects(CATALOG, CategoryFilter::All, Some("react")).is_empty());
    }

    #[test]
    fn test_counts_for_shipped_catalog() {
        let counts = category_counts(CATALOG);
        assert_eq!(
            counts,
            vec![
                (CategoryFilter::All, 6),
                (CategoryFilter::Only(Category::WebApp), 3),
                (CategoryFilter::Only(Category::Ui), 2),
                (CategoryFilter::Only(Category::Game), 1),
            ]
        );
    }

    #[test]
    fn test_stats_for_shipped_catalog() {
        let stats = CatalogStats::compute(CATALOG);
        assert_eq!(stats.total, 6);
        assert_eq!(stats.live, 4);
        assert_eq!(stats.featured, 4);
        // React, Tailwind, Node.js, MongoDB, Express, Framer Motion, EmailJS,
        // CSS, JS, HTML, JavaScript
        assert_eq!(stats.technologies, 11);
    }

    #[test]
    fn test_selectors_are_independent() {
        let mut gallery = GalleryState::new(CATALOG);
        gallery.select_tag("React");
        gallery.select_category(CategoryFilter::Only(Category::Game));
        assert_eq!(gallery.active_tag(), Some("React"));

        gallery.select_category(CategoryFilter::All);
        gallery.select_tag("HTML");
        assert_eq!(gallery.active_category(), CategoryFilter::All);
        assert_eq!(titles(&gallery.visible()), vec!["Portfolio v2"]);

        gallery.clear_tag();
        assert_eq!(gallery.active_category(), CategoryFilter::All);
        assert_eq!(gallery.visible().len(), 6);
    }

    #[test]
    fn test_counts_ignore_tag() {
        let mut gallery = GalleryState::new(CATALOG);
        let before = gallery.counts().to_vec();
        gallery.select_tag("HTML");
        assert_eq!(gallery.counts(), before.as_slice());
        assert!(
            gallery
                .counts()
                .contains(&(CategoryFilter::Only(Category::WebApp), 3))
        );
    }

    #[test]
    fn test_inspect_hidden_project() {
        let mut gallery = GalleryState::new(CATALOG);
        gallery.select_category(CategoryFilter::Only(Category::Game));
        gallery.inspect("Finance-Tracker");
        assert_eq!(gallery.inspected().map(|p| p.title), Some("Finance-Tracker"));

        gallery.inspect("Does Not Exist");
        assert_eq!(gallery.inspected().map(|p| p.title), Some("Finance-Tracker"));

        gallery.close_detail();
        assert!(gallery.inspected().is_none());
    }

    #[test]
    fn test_category_filter_parsing() {
        assert_eq!("All".parse::<CategoryFilter>(), Ok(CategoryFilter::All));
        assert_eq!(
            "Web App".parse::<CategoryFilter>(),
            Ok(CategoryFilter::Only(Category::WebApp))
        );
        let err = "Mobile".parse::<CategoryFilter>().unwrap_err();
        assert!(err.contains("Web App"));
    }
}
