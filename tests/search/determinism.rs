//! Same query, same catalog, same list.

use super::common::{campus_catalog, hits};
use polyportal::{Catalog, SearchSession};

#[test]
fn test_repeated_search_is_identical() {
    let catalog = campus_catalog();
    for query in ["data", "s3", "engineering", "lists s3", "e"] {
        let first = hits(query, &catalog);
        let second = hits(query, &catalog);
        assert_eq!(first, second, "query {:?} is not deterministic", query);
    }
}

#[test]
fn test_catalog_round_trip_preserves_ranking() {
    let catalog = campus_catalog();
    let json = serde_json::to_string(&catalog).unwrap();
    let reloaded = Catalog::from_json_str(&json).unwrap();
    assert_eq!(hits("engineering s1", &catalog), hits("engineering s1", &reloaded));
}

#[test]
fn test_debounced_session_matches_direct_search() {
    let catalog = campus_catalog();
    let mut session = SearchSession::default();

    session.type_query("d", 0);
    session.type_query("da", 100);
    session.type_query("data", 200);
    assert!(!session.tick(499, &catalog));
    assert!(session.hits().is_empty());

    assert!(session.tick(500, &catalog));
    assert_eq!(session.hits(), hits("data", &catalog).as_slice());
    assert!(!session.is_pending());

    // nothing pending: later ticks change nothing
    assert!(!session.tick(10_000, &catalog));
}

#[test]
fn test_clearing_the_box_drops_results_immediately() {
    let catalog = campus_catalog();
    let mut session = SearchSession::default();
    session.type_query("thermo", 0);
    session.tick(300, &catalog);
    assert_eq!(session.hits().len(), 2);

    session.type_query("   ", 310);
    assert!(session.hits().is_empty());
    assert!(!session.is_pending());
}
