//! Modals and viewers: one overlay at a time, closed through history.

use super::common::mounted_navigator;
use polyportal::{NavigationError, OverlayKind, Tab, View, Viewer};

#[test]
fn test_close_modal_then_forward_reopens_it() {
    let mut nav = mounted_navigator();
    nav.select_department("ce").unwrap();
    nav.open_modal(OverlayKind::About).unwrap();
    assert_eq!(nav.selection().overlay, Some(OverlayKind::About));

    assert!(nav.close_overlay());
    assert_eq!(nav.selection().overlay, None);
    assert_eq!(nav.selection().view, View::Dept);

    assert!(nav.forward());
    assert_eq!(nav.selection().overlay, Some(OverlayKind::About));
}

#[test]
fn test_second_modal_replaces_first() {
    let mut nav = mounted_navigator();
    nav.open_modal(OverlayKind::Sync).unwrap();
    nav.open_modal(OverlayKind::Quiz).unwrap();
    assert_eq!(nav.selection().overlay, Some(OverlayKind::Quiz));

    nav.close_overlay();
    assert_eq!(nav.selection().overlay, Some(OverlayKind::Sync));
}

#[test]
fn test_modal_survives_merge_navigation() {
    let mut nav = mounted_navigator();
    nav.select_department("ce").unwrap();
    nav.open_modal(OverlayKind::Scholarships).unwrap();
    nav.select_subject("ce_1002").unwrap();
    nav.set_tab(Tab::Ai).unwrap();
    assert_eq!(nav.selection().overlay, Some(OverlayKind::Scholarships));
    assert_eq!(nav.selection().view, View::Sub);
}

#[test]
fn test_top_level_jump_drops_modal() {
    let mut nav = mounted_navigator();
    nav.open_modal(OverlayKind::About).unwrap();
    nav.select_department("me").unwrap();
    assert_eq!(nav.selection().overlay, None);
}

#[test]
fn test_video_viewer_closes_back_to_subject() {
    let mut nav = mounted_navigator();
    nav.select_department("ce").unwrap();
    nav.select_subject("ce_3001").unwrap();
    nav.set_tab(Tab::Videos).unwrap();
    nav.open_video("ce_v2").unwrap();

    let sel = nav.selection();
    assert_eq!(sel.overlay, Some(OverlayKind::VideoPlayer));
    assert_eq!(nav.viewer_video().map(|v| v.title.as_str()), Some("Linked Lists Explained"));

    assert!(nav.close_overlay());
    let sel = nav.selection();
    assert_eq!(sel.view, View::Sub);
    assert_eq!(sel.tab, Tab::Videos);
    assert_eq!(sel.viewer, None);
}

#[test]
fn test_video_from_other_department_resets_context() {
    let mut nav = mounted_navigator();
    nav.select_department("ce").unwrap();
    nav.select_subject("ce_1002").unwrap();
    nav.open_video("me_v1").unwrap();

    let sel = nav.selection();
    assert_eq!(sel.department_id.as_deref(), Some("me"));
    assert_eq!(sel.subject_id, None);
    assert_eq!(sel.semester, None);
    assert_eq!(
        sel.viewer,
        Some(Viewer::Video {
            video_id: "me_v1".to_string()
        })
    );
}

#[test]
fn test_modal_over_viewer_wins_and_keeps_payload() {
    let mut nav = mounted_navigator();
    nav.select_department("ce").unwrap();
    nav.open_video("ce_v1").unwrap();
    nav.open_modal(OverlayKind::Quiz).unwrap();

    let sel = nav.selection();
    assert_eq!(sel.overlay, Some(OverlayKind::Quiz));
    assert!(sel.viewer.is_some());

    nav.close_overlay();
    assert_eq!(nav.selection().overlay, Some(OverlayKind::VideoPlayer));
}

#[test]
fn test_viewers_cannot_open_as_plain_modals() {
    let mut nav = mounted_navigator();
    for kind in [OverlayKind::PdfViewer, OverlayKind::VideoPlayer] {
        assert!(matches!(
            nav.open_modal(kind),
            Err(NavigationError::ViewerNeedsPayload(_))
        ));
    }
    assert_eq!(nav.history().len(), 1);
}

#[test]
fn test_close_with_nothing_open_is_a_no_op() {
    let mut nav = mounted_navigator();
    nav.select_department("ce").unwrap();
    assert!(!nav.close_overlay());
    assert_eq!(nav.selection().view, View::Dept);
    assert_eq!(nav.history().cursor(), 1);
}
