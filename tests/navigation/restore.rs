//! Rebuilding a view from a stored history state or a deep link.

use super::common::{campus_catalog, mounted_navigator};
use polyportal::{
    HistoryStack, MemoryHistory, NavigationSnapshot, Navigator, OverlayKind, Semester, Tab, View,
    Viewer,
};
use serde_json::{json, Value};

fn restored(state: Value) -> Navigator<MemoryHistory> {
    let mut nav = Navigator::new(campus_catalog(), MemoryHistory::new());
    nav.mount(Some(&state));
    nav
}

#[test]
fn test_reload_on_subject_page() {
    let nav = restored(json!({
        "view": "sub",
        "deptId": "ce",
        "semId": "Semester 1",
        "subId": "ce_1002",
        "tab": "ai"
    }));
    let sel = nav.selection();
    assert_eq!(sel.view, View::Sub);
    assert_eq!(sel.department_id.as_deref(), Some("ce"));
    assert_eq!(sel.semester, Some(Semester::First));
    assert_eq!(sel.subject_id.as_deref(), Some("ce_1002"));
    assert_eq!(sel.tab, Tab::Ai);
    assert_eq!(sel.overlay, None);
}

#[test]
fn test_reload_records_the_restored_entry() {
    let nav = restored(json!({"view": "dept", "deptId": "me", "semId": "bogus"}));
    assert_eq!(nav.history().len(), 1);
    assert_eq!(
        nav.history().current(),
        Some(&NavigationSnapshot {
            view: View::Dept,
            dept_id: Some("me".to_string()),
            ..NavigationSnapshot::default()
        })
    );
}

#[test]
fn test_reload_then_navigate_then_back() {
    let mut nav = restored(json!({"view": "dept", "deptId": "ce"}));
    nav.select_subject("ce_1002").unwrap();
    assert_eq!(nav.selection().view, View::Sub);

    assert!(nav.back());
    assert_eq!(nav.selection().view, View::Dept);
    assert_eq!(nav.selection().department_id.as_deref(), Some("ce"));
    assert!(nav.forward());
    assert_eq!(nav.selection().subject_id.as_deref(), Some("ce_1002"));
}

#[test]
fn test_reloaded_modal_closes_after_navigating_on() {
    let mut nav = restored(json!({"view": "dept", "deptId": "ce", "modal": "about"}));
    // nothing earlier to go back to
    assert!(!nav.close_overlay());
    assert_eq!(nav.selection().overlay, Some(OverlayKind::About));

    nav.open_modal(OverlayKind::Quiz).unwrap();
    assert!(nav.close_overlay());
    assert_eq!(nav.selection().overlay, Some(OverlayKind::About));
    assert_eq!(nav.selection().view, View::Dept);
}

#[test]
fn test_lenient_semester_labels() {
    for label in ["Semester 3", "3rd Semester", "sem 3", "S3", "3"] {
        let nav = restored(json!({"view": "sem", "deptId": "ce", "semId": label}));
        assert_eq!(nav.selection().semester, Some(Semester::Third), "label {:?}", label);
    }
}

#[test]
fn test_subject_semester_wins_over_stale_sem_id() {
    let nav = restored(json!({
        "view": "sub", "deptId": "ce", "semId": "Semester 6", "subId": "ce_3001"
    }));
    assert_eq!(nav.selection().semester, Some(Semester::Third));
}

#[test]
fn test_unknown_department_falls_back_home() {
    let nav = restored(json!({"view": "sub", "deptId": "xx", "subId": "ce_1002"}));
    assert!(nav.selection().is_home());
}

#[test]
fn test_unknown_subject_stops_at_semester() {
    let nav = restored(json!({
        "view": "sub", "deptId": "ce", "semId": "Semester 1", "subId": "ce_9999"
    }));
    let sel = nav.selection();
    assert_eq!(sel.view, View::Sem);
    assert_eq!(sel.semester, Some(Semester::First));
    assert_eq!(sel.subject_id, None);
}

#[test]
fn test_unknown_video_leaves_context() {
    let nav = restored(json!({"view": "video", "deptId": "ce", "videoId": "nope"}));
    let sel = nav.selection();
    assert_eq!(sel.view, View::Dept);
    assert_eq!(sel.viewer, None);
    assert_eq!(sel.overlay, None);
}

#[test]
fn test_garbage_states_mean_home() {
    for state in [
        json!(null),
        json!("sub"),
        json!(42),
        json!([]),
        json!({}),
        json!({"view": "galaxy", "deptId": "ce"}),
        json!({"view": 7}),
    ] {
        let mut nav = mounted_navigator();
        nav.select_department("ce").unwrap();
        nav.on_pop_state(Some(&state));
        assert!(nav.selection().is_home(), "state {} should restore home", state);
    }
}

#[test]
fn test_wrongly_typed_fields_are_dropped_individually() {
    let nav = restored(json!({
        "view": "sub", "deptId": "ce", "semId": 3, "subId": "ce_1002", "modal": true
    }));
    let sel = nav.selection();
    assert_eq!(sel.view, View::Sub);
    assert_eq!(sel.semester, Some(Semester::First));
    assert_eq!(sel.overlay, None);
}

#[test]
fn test_modal_restores_over_any_view() {
    let nav = restored(json!({"view": "dept", "deptId": "me", "modal": "scholarships"}));
    assert_eq!(nav.selection().view, View::Dept);
    assert_eq!(nav.selection().overlay, Some(OverlayKind::Scholarships));
}

// ============================================================================
// DEEP LINKS
// ============================================================================

#[test]
fn test_query_string_deep_link() {
    let snapshot =
        NavigationSnapshot::from_query_string("?view=pdf&deptId=ce&semId=Semester+1&subId=ce_1002&resourceId=ce_1002_notes");
    let mut nav = mounted_navigator();
    nav.restore_view(snapshot);
    let sel = nav.selection();
    assert_eq!(sel.view, View::Pdf);
    assert_eq!(
        sel.viewer,
        Some(Viewer::Resource {
            subject_id: "ce_1002".to_string(),
            resource_id: "ce_1002_notes".to_string(),
        })
    );
    assert_eq!(sel.overlay, Some(OverlayKind::PdfViewer));
}

#[test]
fn test_share_link_reproduces_view() {
    let mut nav = mounted_navigator();
    nav.select_department("ce").unwrap();
    nav.select_subject("ce_3001").unwrap();
    nav.set_tab(Tab::Videos).unwrap();
    nav.open_modal(OverlayKind::Quiz).unwrap();
    let link = nav.selection().snapshot().to_query_string();

    let mut other = mounted_navigator();
    other.restore_view(NavigationSnapshot::from_query_string(&link));
    assert_eq!(other.selection(), nav.selection());
}

#[test]
fn test_history_state_survives_json_round_trip() {
    let mut nav = mounted_navigator();
    nav.select_department("me").unwrap();
    nav.open_video("me_v1").unwrap();
    let stored = serde_json::to_string(&nav.current_snapshot().to_state()).unwrap();

    let value: Value = serde_json::from_str(&stored).unwrap();
    let reloaded = restored(value);
    assert_eq!(reloaded.selection(), nav.selection());
}
