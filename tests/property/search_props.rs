//! Ranking invariants over generated queries and catalogs.

use super::common::{campus_catalog, make_department, make_subject, make_video};
use polyportal::{search, Catalog, Semester, MAX_RESULTS};
use proptest::prelude::*;

// ============================================================================
// STRATEGIES
// ============================================================================

fn word_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z]{2,7}").unwrap()
}

fn title_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(word_strategy(), 1..4).prop_map(|words| words.join(" "))
}

fn semester_strategy() -> impl Strategy<Value = Semester> {
    prop::sample::select(Semester::ALL.to_vec())
}

/// Small random catalogs with unique ids.
fn catalog_strategy() -> impl Strategy<Value = Catalog> {
    prop::collection::vec(
        (
            title_strategy(),
            prop::collection::vec((title_strategy(), semester_strategy()), 0..6),
            prop::collection::vec((title_strategy(), word_strategy(), semester_strategy()), 0..4),
        ),
        0..4,
    )
    .prop_map(|departments| {
        let departments = departments
            .into_iter()
            .enumerate()
            .map(|(d, (name, subjects, videos))| {
                let subjects = subjects
                    .into_iter()
                    .enumerate()
                    .map(|(s, (title, sem))| make_subject(&format!("d{}_s{}", d, s), &title, sem))
                    .collect();
                let videos = videos
                    .into_iter()
                    .enumerate()
                    .map(|(v, (title, who, sem))| {
                        make_video(&format!("d{}_v{}", d, v), &title, &who, sem)
                    })
                    .collect();
                make_department(&format!("d{}", d), &name, subjects, videos)
            })
            .collect();
        Catalog::new(departments)
    })
}

// ============================================================================
// PROPERTIES
// ============================================================================

proptest! {
    #[test]
    fn prop_results_sorted_positive_and_capped(catalog in catalog_strategy(), query in title_strategy()) {
        let results = search(&query, &catalog);
        prop_assert!(results.len() <= MAX_RESULTS);
        for result in &results {
            prop_assert!(result.score() > 0.0);
        }
        for pair in results.windows(2) {
            prop_assert!(pair[0].score() >= pair[1].score());
        }
    }

    #[test]
    fn prop_exact_subject_title_ranks_at_least_exact_tier(catalog in catalog_strategy()) {
        for dept in &catalog.departments {
            for subject in &dept.subjects {
                let results = search(&subject.title, &catalog);
                let hit = results.iter().find(|r| r.entity_id() == subject.id);
                // may be crowded out of the top 20 by equal scores, never outscored by a partial
                if let Some(hit) = hit {
                    prop_assert!(hit.score() >= 800.0);
                } else {
                    prop_assert_eq!(results.len(), MAX_RESULTS);
                }
            }
        }
    }

    #[test]
    fn prop_query_case_and_spacing_do_not_matter(query in title_strategy()) {
        let catalog = campus_catalog();
        let shouted = format!("  {}  ", query.to_uppercase().replace(' ', "   "));
        let a: Vec<_> = search(&query, &catalog).iter().map(|r| (r.entity_id(), r.score())).collect();
        let b: Vec<_> = search(&shouted, &catalog).iter().map(|r| (r.entity_id(), r.score())).collect();
        prop_assert_eq!(a, b);
    }

    #[test]
    fn prop_semester_shorthand_surfaces_every_subject_of_that_semester(query in word_strategy(), n in 1u8..=6) {
        let catalog = campus_catalog();
        let semester = Semester::from_number(n).unwrap();
        let boosted = search(&format!("{} s{}", query, n), &catalog);
        for dept in &catalog.departments {
            for subject in dept.subjects_in(semester) {
                let hit = boosted.iter().find(|r| r.entity_id() == subject.id);
                prop_assert!(hit.map_or(false, |h| h.score() >= 20.0), "{} missing", subject.id);
            }
        }
    }
}
