#[cfg(test)]
mod tests_impl {
    use crate::core::catalog::{CATALOG, Category};
    use crate::core::contact::Field;
    use crate::core::filter::{CategoryFilter, GalleryState, filter_projects};
    use crate::core::submission::{ContactSession, SubmissionStatus, SubmitDecision};

    #[test]
    fn test_gallery_walkthrough() {
        let mut gallery = GalleryState::new(CATALOG);

        // Clicking a chip on a UI card while viewing all categories
        gallery.select_tag("Tailwind");
        let titles: Vec<_> = gallery.visible().iter().map(|p| p.title).collect();
        assert_eq!(
            titles,
            vec!["AI Career Guide", "Finance-Tracker", "Portfolio v1", "Blog Website"]
        );

        gallery.select_category(CategoryFilter::Only(Category::Ui));
        let titles: Vec<_> = gallery.visible().iter().map(|p| p.title).collect();
        assert_eq!(titles, vec!["Portfolio v1"]);

        gallery.select_category(CategoryFilter::Only(Category::Game));
        assert!(gallery.visible().is_empty());

        gallery.clear_tag();
        assert_eq!(gallery.visible().len(), 1);
    }

    #[test]
    fn test_gallery_matches_free_function() {
        let mut gallery = GalleryState::new(CATALOG);
        gallery.select_category(CategoryFilter::Only(Category::WebApp));
        gallery.select_tag("Express");
        assert_eq!(
            gallery.visible(),
            filter_projects(
                CATALOG,
                CategoryFilter::Only(Category::WebApp),
                Some("Express")
            )
        );
    }

    #[test]
    fn test_typing_fixes_errors_one_by_one() {
        let mut session = ContactSession::default();
        assert!(matches!(session.submit(), SubmitDecision::Blocked(_)));

        session.form.set(Field::Name, "Linus".to_string());
        session.form.set(Field::Email, "linus@kernel.org".to_string());
        assert_eq!(session.form.errors().len(), 2);
        assert!(!session.can_submit());

        session.form.set(Field::Subject, "Patch".to_string());
        session.form.set(Field::Message, "Please review my patch.".to_string());
        assert!(session.can_submit());
        assert!(matches!(session.submit(), SubmitDecision::Send(_)));
        assert_eq!(session.status(), SubmissionStatus::Submitting);
    }
}

#[cfg(test)]
mod property_tests {
    use crate::core::catalog::{Category, Project, ProjectLinks, ProjectStatus};
    use crate::core::contact::{Field, validate};
    use crate::core::filter::{CategoryFilter, category_counts, filter_projects};
    use proptest::prelude::*;

    const TAG_POOL: &[&str] = &["React", "Rust", "CSS", "Node.js", "Tailwind", "Go"];

    prop_compose! {
        fn arb_category()(idx in 0usize..3) -> Category {
            [Category::WebApp, Category::Ui, Category::Game][idx]
        }
    }

    prop_compose! {
        fn arb_category_filter()(category in proptest::option::of(arb_category())) -> CategoryFilter {
            category.map_or(CategoryFilter::All, CategoryFilter::Only)
        }
    }

    prop_compose! {
        fn arb_tech()(mask in 1u8..64) -> &'static [&'static str] {
            let tech: Vec<&'static str> = TAG_POOL
                .iter()
                .enumerate()
                .filter(|(i, _)| mask & (1 << i) != 0)
                .map(|(_, t)| *t)
                .collect();
            &*Box::leak(tech.into_boxed_slice())
        }
    }

    prop_compose! {
        fn arb_catalog()(
            entries in prop::collection::vec((arb_category(), arb_tech(), any::<bool>()), 0..12)
        ) -> Vec<Project> {
            entries
                .into_iter()
                .enumerate()
                .map(|(i, (category, tech, featured))| Project {
                    title: Box::leak(format!("Project {i}").into_boxed_str()),
                    about: "",
                    tech,
                    category,
                    links: ProjectLinks::default(),
                    status: ProjectStatus::Live,
                    featured,
                    image: "",
                })
                .collect()
        }
    }

    proptest! {
        #[test]
        fn test_filter_is_idempotent(
            catalog in arb_catalog(),
            category in arb_category_filter(),
            tag in proptest::option::of(proptest::sample::select(TAG_POOL)),
        ) {
            let first = filter_projects(&catalog, category, tag);
            let second = filter_projects(&catalog, category, tag);
            prop_assert_eq!(first, second);
        }

        #[test]
        fn test_filter_preserves_catalog_order(
            catalog in arb_catalog(),
            category in arb_category_filter(),
            tag in proptest::option::of(proptest::sample::select(TAG_POOL)),
        ) {
            let visible = filter_projects(&catalog, category, tag);
            let positions: Vec<usize> = visible
                .iter()
                .map(|v| catalog.iter().position(|p| p.title == v.title).unwrap())
                .collect();
            prop_assert!(positions.windows(2).all(|w| w[0] < w[1]));
            prop_assert!(visible.iter().all(|p| category.matches(p)));
            prop_assert!(visible.iter().all(|p| tag.is_none_or(|t| p.uses(t))));
        }

        #[test]
        fn test_filter_is_exhaustive(
            catalog in arb_catalog(),
            category in arb_category_filter(),
            tag in proptest::option::of(proptest::sample::select(TAG_POOL)),
        ) {
            let visible = filter_projects(&catalog, category, tag);
            let expected = catalog
                .iter()
                .filter(|p| category.matches(p) && tag.is_none_or(|t| p.tech.contains(&t)))
                .count();
            prop_assert_eq!(visible.len(), expected);
        }

        #[test]
        fn test_all_count_equals_sum_of_categories(catalog in arb_catalog()) {
            let counts = category_counts(&catalog);
            let (all, rest) = counts.split_first().unwrap();
            prop_assert_eq!(all.0, CategoryFilter::All);
            prop_assert_eq!(all.1, rest.iter().map(|(_, n)| n).sum::<usize>());
        }

        #[test]
        fn test_validator_flags_exactly_the_bad_fields(
            name in "[ a-z]{0,8}",
            email in "[a-z@. ]{0,12}",
            subject in "[ a-z]{0,8}",
            message in "[ a-z]{0,20}",
        ) {
            let errors = validate(&name, &email, &subject, &message);
            prop_assert_eq!(errors.contains_key(&Field::Name), name.trim().is_empty());
            prop_assert_eq!(errors.contains_key(&Field::Subject), subject.trim().is_empty());
            prop_assert_eq!(
                errors.contains_key(&Field::Message),
                message.trim().chars().count() < 10
            );
            prop_assert!(errors.len() <= 4);
        }
    }
}
