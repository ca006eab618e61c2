//! Static project catalog
//!
//! The catalog is compiled into the binary. Every gallery view, count and
//! statistic is derived from [`CATALOG`] without ever mutating it.

use crate::core::error::CatalogError;
use std::collections::HashSet;
use strum::{Display, EnumIter, EnumString};

/// Closed set of gallery categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Display, EnumIter, EnumString)]
pub enum Category {
    #[strum(serialize = "Web App")]
    WebApp,
    #[strum(serialize = "UI")]
    Ui,
    #[strum(serialize = "Game")]
    Game,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum ProjectStatus {
    Live,
    #[strum(serialize = "In Progress")]
    InProgress,
    Completed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ProjectLinks {
    pub github: Option<&'static str>,
    pub demo: Option<&'static str>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Project {
    /// Unique key within the catalog
    pub title: &'static str,
    pub about: &'static str,
    /// Technology tags in display order
    pub tech: &'static [&'static str],
    pub category: Category,
    pub links: ProjectLinks,
    pub status: ProjectStatus,
    pub featured: bool,
    /// Opaque asset reference, never dereferenced by the core
    pub image: &'static str,
}

impl Project {
    pub fn uses(&self, tag: &str) -> bool {
        self.tech.contains(&tag)
    }
}

pub static CATALOG: &[Project] = &[
    Project {
        title: "AI Career Guide",
        about: "An intelligent career assistance platform that provides personalized roadmaps, \
                interview preparation, skill assessment, and mentorship guidance for students \
                and professionals.",
        tech: &["React", "Tailwind", "Node.js", "MongoDB", "Express"],
        category: Category::WebApp,
        links: ProjectLinks {
            github: Some("https://github.com/deepakjoshi9239/Ai-Career-Guide"),
            demo: Some("https://ai-career-guide-frontend.netlify.app/"),
        },
        status: ProjectStatus::Live,
        featured: true,
        image: "assets/AiCareerGuide.png",
    },
    Project {
        title: "Finance-Tracker",
        about: "Personal finance management tool with expense tracking, budgeting, and \
                financial goal setting.",
        tech: &["React", "Tailwind", "Node.js", "MongoDB", "Express"],
        category: Category::WebApp,
        links: ProjectLinks {
            github: Some("https://github.com/deepakjoshi9239/finance-tracker"),
            demo: Some("https://finance-tracker-je8i.vercel.app/"),
        },
        status: ProjectStatus::Live,
        featured: true,
        image: "assets/Finance.png",
    },
    Project {
        title: "Portfolio v1",
        about: "Modern personal portfolio showcasing projects with custom animations, \
                responsive layouts, and interactive elements.",
        tech: &["React", "Framer Motion", "Tailwind", "EmailJS"],
        category: Category::Ui,
        links: ProjectLinks {
            github: None,
            demo: None,
        },
        status: ProjectStatus::Live,
        featured: true,
        image: "assets/portfolio1.png",
    },
    Project {
        title: "Blog Website",
        about: "Personal blog platform with user authentication, post creation, and comments.",
        tech: &["React", "Node.js", "MongoDB", "Tailwind"],
        category: Category::WebApp,
        links: ProjectLinks {
            github: None,
            demo: None,
        },
        status: ProjectStatus::InProgress,
        featured: false,
        image: "assets/Blog.png",
    },
    Project {
        title: "Tic-Tac-Toe",
        about: "A classic Tic-Tac-Toe game built with React.",
        tech: &["React", "CSS", "JS"],
        category: Category::Game,
        links: ProjectLinks {
            github: Some("https://github.com/deepakjoshi9239/Tic-Tac-Toe"),
            demo: Some("https://tic-tac-toe-tw.netlify.app/"),
        },
        status: ProjectStatus::Completed,
        featured: false,
        image: "assets/Tic_game.png",
    },
    Project {
        title: "Portfolio v2",
        about: "Modern personal portfolio showcasing projects with custom animations, \
                responsive layouts, and interactive elements.",
        tech: &["HTML", "CSS", "JavaScript"],
        category: Category::Ui,
        links: ProjectLinks {
            github: Some("https://github.com/deepakjoshi9239/Portfolio"),
            demo: Some("https://dancing-concha-ca700b.netlify.app/"),
        },
        status: ProjectStatus::Live,
        featured: true,
        image: "assets/portfolio2.png",
    },
];

/// Checks catalog invariants: unique titles and non-empty tech lists.
///
/// Categories are a closed enum, so membership needs no runtime check.
///
/// # Errors
///
/// Returns the first violation found, in catalog order.
pub fn validate_catalog(catalog: &[Project]) -> Result<(), CatalogError> {
    let mut seen = HashSet::with_capacity(catalog.len());
    for project in catalog {
        if !seen.insert(project.title) {
            return Err(CatalogError::DuplicateTitle(project.title.to_string()));
        }
        if project.tech.is_empty() {
            return Err(CatalogError::EmptyTech(project.title.to_string()));
        }
    }
    Ok(())
}

/// Looks a project up by its title key
pub fn find_project<'a>(catalog: &'a [Project], title: &str) -> Option<&'a Project> {
    catalog.iter().find(|p| p.title == title)
}
