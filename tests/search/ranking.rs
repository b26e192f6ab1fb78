//! Tier and weight interplay on the campus catalog.
//!
//! Scores are exact products of the field weight and tier multiplier, so the
//! assertions compare exact values.

use super::common::{campus_catalog, ranked_ids, sample_catalog};

fn pairs(expected: &[(&str, f64)]) -> Vec<(String, f64)> {
    expected.iter().map(|(id, s)| (id.to_string(), *s)).collect()
}

// ============================================================================
// TIERS
// ============================================================================

#[test]
fn test_exact_department_name_outranks_everything() {
    let catalog = campus_catalog();
    let results = ranked_ids("Computer Engineering", &catalog);
    assert_eq!(
        results,
        pairs(&[
            ("ce", 1000.0),      // name, exact
            ("me", 100.0),       // name, 1 of 2 tokens
            ("me_1001", 80.0),   // "Engineering Drawing", 1 of 2 tokens
        ])
    );
}

#[test]
fn test_exact_match_is_case_and_space_insensitive() {
    let catalog = campus_catalog();
    let results = ranked_ids("  computer   ENGINEERING ", &catalog);
    assert_eq!(results[0], ("ce".to_string(), 1000.0));
}

#[test]
fn test_substring_matches_inside_words() {
    let catalog = campus_catalog();
    // "data" is inside "Database" as well as "Data"
    assert_eq!(
        ranked_ids("data", &catalog),
        pairs(&[("ce_3001", 400.0), ("ce_3002", 400.0)])
    );
}

#[test]
fn test_subject_beats_its_video() {
    let catalog = campus_catalog();
    assert_eq!(
        ranked_ids("thermo", &catalog),
        pairs(&[("me_3001", 400.0), ("me_v1", 250.0)])
    );
}

#[test]
fn test_instructor_match_is_weak() {
    let catalog = campus_catalog();
    assert_eq!(ranked_ids("traversy", &catalog), pairs(&[("ce_v1", 50.0)]));
}

#[test]
fn test_department_description_only() {
    let catalog = sample_catalog();
    assert_eq!(ranked_ids("networks", &catalog), pairs(&[("ce", 50.0)]));
}

// ============================================================================
// SEMESTER BOOST
// ============================================================================

#[test]
fn test_semester_shorthand_boosts_matching_subjects() {
    let catalog = campus_catalog();
    assert_eq!(
        ranked_ids("data s3", &catalog),
        pairs(&[
            ("ce_3001", 100.0), // partial 80 + boost 20
            ("ce_3002", 100.0),
            ("me_3001", 20.0),  // boost alone still surfaces it
        ])
    );
}

#[test]
fn test_boost_never_touches_videos() {
    let catalog = campus_catalog();
    let results = ranked_ids("lists s3", &catalog);
    // "Linked Lists Explained": 1 of 2 tokens × 50
    assert!(results.contains(&("ce_v2".to_string(), 50.0)));
    // Third-semester subjects get the boost on a zero title score
    assert!(results.contains(&("ce_3001".to_string(), 20.0)));
}

#[test]
fn test_sem_space_digit_form() {
    let catalog = campus_catalog();
    let results = ranked_ids("drawing sem 1", &catalog);
    assert_eq!(results[0], ("me_1001".to_string(), 100.0));
}

// ============================================================================
// ORDERING
// ============================================================================

#[test]
fn test_ties_keep_catalog_order() {
    let catalog = campus_catalog();
    let ids: Vec<String> = ranked_ids("s1", &catalog).into_iter().map(|(id, _)| id).collect();
    // every first-semester subject, boost only, departments in order
    assert_eq!(ids, vec!["ce_1002", "ce_1003", "me_1001"]);
}

#[test]
fn test_hits_carry_department_for_navigation() {
    let catalog = campus_catalog();
    let hits = super::common::hits("thermo", &catalog);
    assert!(hits.iter().all(|hit| hit.department_id == "me"));
    assert_eq!(hits[0].kind, "subject");
    assert_eq!(hits[1].kind, "video");
}
