//! Navigation invariants: restore never fails, and what is pushed comes back.

use super::common::mounted_navigator;
use polyportal::{NavigationSnapshot, OverlayKind, Semester, Tab};
use proptest::prelude::*;
use serde_json::{json, Map, Value};

// ============================================================================
// STRATEGIES
// ============================================================================

/// Arbitrary JSON leaves, including the wrong types for every field.
fn leaf_strategy() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i32>().prop_map(|n| json!(n)),
        prop::sample::select(vec![
            "home", "dept", "sem", "sub", "video", "pdf", "bookmarks", "ce", "me", "ce_1002",
            "ce_3001", "me_v1", "ce_v2", "ce_1002_notes", "Semester 3", "s1", "quiz", "about",
            "videos", "ai", "", "??",
        ])
        .prop_map(|s| Value::String(s.to_string())),
    ]
}

fn state_strategy() -> impl Strategy<Value = Value> {
    let keys = prop::sample::select(vec![
        "view", "deptId", "semId", "subId", "videoId", "resourceId", "modal", "tab", "extra",
    ]);
    prop::collection::vec((keys, leaf_strategy()), 0..8).prop_map(|pairs| {
        let map: Map<String, Value> = pairs.into_iter().map(|(k, v)| (k.to_string(), v)).collect();
        Value::Object(map)
    })
}

/// One user action against the campus catalog.
#[derive(Debug, Clone)]
enum Action {
    Home,
    Bookmarks,
    Department(&'static str),
    Semester(u8),
    Subject(&'static str),
    Tab(Tab),
    Video(&'static str),
    Resource(&'static str),
    Modal(OverlayKind),
    Close,
    Back,
    Forward,
}

fn action_strategy() -> impl Strategy<Value = Action> {
    prop_oneof![
        Just(Action::Home),
        Just(Action::Bookmarks),
        prop::sample::select(vec!["ce", "me", "xx"]).prop_map(Action::Department),
        (1u8..=6).prop_map(Action::Semester),
        prop::sample::select(vec!["ce_1002", "ce_3001", "me_3001"]).prop_map(Action::Subject),
        prop::sample::select(vec![Tab::Materials, Tab::Videos, Tab::Ai]).prop_map(Action::Tab),
        prop::sample::select(vec!["ce_v1", "ce_v2", "me_v1"]).prop_map(Action::Video),
        prop::sample::select(vec!["ce_1002_notes", "ce_3001_syllabus"]).prop_map(Action::Resource),
        prop::sample::select(vec![OverlayKind::Quiz, OverlayKind::About, OverlayKind::Sync])
            .prop_map(Action::Modal),
        Just(Action::Close),
        Just(Action::Back),
        Just(Action::Forward),
    ]
}

// ============================================================================
// PROPERTIES
// ============================================================================

proptest! {
    #[test]
    fn prop_any_state_restores_without_panicking(state in state_strategy()) {
        let mut nav = mounted_navigator();
        nav.on_pop_state(Some(&state));
        // and the result is stable under its own snapshot
        let selection = nav.selection().clone();
        nav.restore_view(selection.snapshot());
        prop_assert_eq!(nav.selection(), &selection);
    }

    #[test]
    fn prop_back_then_forward_is_identity(actions in prop::collection::vec(action_strategy(), 1..16)) {
        let mut nav = mounted_navigator();
        for action in actions {
            // failed preconditions are fine; they push nothing
            let _ = match action {
                Action::Home => { nav.go_home(); Ok(()) }
                Action::Bookmarks => { nav.open_bookmarks(); Ok(()) }
                Action::Department(id) => nav.select_department(id),
                Action::Semester(n) => nav.select_semester(Semester::from_number(n).unwrap()),
                Action::Subject(id) => nav.select_subject(id),
                Action::Tab(tab) => nav.set_tab(tab),
                Action::Video(id) => nav.open_video(id),
                Action::Resource(id) => nav.open_resource(id),
                Action::Modal(kind) => nav.open_modal(kind),
                Action::Close => { nav.close_overlay(); Ok(()) }
                Action::Back => { nav.back(); Ok(()) }
                Action::Forward => { nav.forward(); Ok(()) }
            };
        }

        let here = nav.selection().clone();
        if nav.back() {
            prop_assert!(nav.forward());
            prop_assert_eq!(nav.selection(), &here);
        }
    }

    #[test]
    fn prop_snapshot_query_string_round_trip(state in state_strategy()) {
        let snapshot = NavigationSnapshot::from_state(Some(&state));
        let again = NavigationSnapshot::from_query_string(&snapshot.to_query_string());
        prop_assert_eq!(again, snapshot);
    }
}
