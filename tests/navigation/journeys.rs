//! Multi-step journeys through the portal, walked back and forward.

use super::common::mounted_navigator;
use polyportal::{BookmarkItem, BookmarkKind, NavigationError, Semester, Tab, View, Viewer};

#[test]
fn test_drill_down_and_back_out() {
    let mut nav = mounted_navigator();
    nav.select_department("ce").unwrap();
    nav.select_semester(Semester::Third).unwrap();
    nav.select_subject("ce_3001").unwrap();
    nav.set_tab(Tab::Videos).unwrap();

    let sel = nav.selection();
    assert_eq!(sel.view, View::Sub);
    assert_eq!(sel.subject_id.as_deref(), Some("ce_3001"));
    assert_eq!(sel.tab, Tab::Videos);
    assert_eq!(nav.history().len(), 5);

    let mut views = Vec::new();
    while nav.back() {
        views.push((nav.selection().view, nav.selection().tab));
    }
    assert_eq!(
        views,
        vec![
            (View::Sub, Tab::Materials),
            (View::Sem, Tab::Materials),
            (View::Dept, Tab::Materials),
            (View::Home, Tab::Materials),
        ]
    );
    assert!(nav.selection().is_home());
}

#[test]
fn test_forward_replays_exact_selections() {
    let mut nav = mounted_navigator();
    nav.select_department("me").unwrap();
    nav.select_subject("me_3001").unwrap();
    nav.open_video("me_v1").unwrap();
    let deepest = nav.selection().clone();

    nav.back();
    nav.back();
    nav.back();
    assert!(nav.selection().is_home());

    nav.forward();
    nav.forward();
    nav.forward();
    assert_eq!(nav.selection(), &deepest);
    assert!(!nav.forward());
}

#[test]
fn test_new_navigation_discards_forward_entries() {
    let mut nav = mounted_navigator();
    nav.select_department("ce").unwrap();
    nav.select_subject("ce_1002").unwrap();
    nav.back();
    nav.select_subject("ce_1003").unwrap();

    assert!(!nav.forward());
    assert_eq!(nav.selection().subject_id.as_deref(), Some("ce_1003"));
    assert_eq!(nav.history().len(), 3);
}

#[test]
fn test_selecting_subject_implies_its_semester() {
    let mut nav = mounted_navigator();
    nav.select_department("ce").unwrap();
    nav.select_subject("ce_3002").unwrap();
    assert_eq!(nav.selection().semester, Some(Semester::Third));
    assert_eq!(nav.current_snapshot().sem_id.as_deref(), Some("Semester 3"));
}

#[test]
fn test_changing_semester_drops_subject() {
    let mut nav = mounted_navigator();
    nav.select_department("ce").unwrap();
    nav.select_subject("ce_1002").unwrap();
    nav.select_semester(Semester::Third).unwrap();

    let sel = nav.selection();
    assert_eq!(sel.view, View::Sem);
    assert_eq!(sel.subject_id, None);
    assert_eq!(nav.current_snapshot().tab, None);
}

#[test]
fn test_resource_viewer_under_subject() {
    let mut nav = mounted_navigator();
    nav.select_department("ce").unwrap();
    nav.select_subject("ce_1002").unwrap();
    nav.open_resource("ce_1002_paper").unwrap();

    assert_eq!(nav.selection().view, View::Pdf);
    assert_eq!(
        nav.viewer_resource().map(|r| r.title.as_str()),
        Some("Mathematics I Paper 2023")
    );
    // the subject context stays behind the viewer
    assert_eq!(nav.subject().map(|s| s.id.as_str()), Some("ce_1002"));
}

#[test]
fn test_preconditions_are_errors_without_pushing() {
    let mut nav = mounted_navigator();
    assert!(matches!(
        nav.select_semester(Semester::First),
        Err(NavigationError::NoDepartment)
    ));
    assert!(matches!(nav.select_subject("ce_1002"), Err(NavigationError::NoDepartment)));
    assert!(matches!(nav.set_tab(Tab::Ai), Err(NavigationError::NoSubject)));
    assert!(matches!(nav.open_resource("ce_1002_notes"), Err(NavigationError::NoSubject)));

    nav.select_department("me").unwrap();
    assert!(matches!(
        nav.select_subject("ce_1002"),
        Err(NavigationError::UnknownSubject { .. })
    ));
    assert_eq!(nav.history().len(), 2);
}

#[test]
fn test_open_bookmark_jumps_from_anywhere() {
    let mut nav = mounted_navigator();
    nav.open_bookmarks();
    assert_eq!(nav.selection().view, View::Bookmarks);

    let item = BookmarkItem::new("ce_3001", BookmarkKind::Subject, "Data Structures")
        .in_department("ce");
    nav.open_bookmark(&item).unwrap();
    assert_eq!(nav.selection().view, View::Sub);
    assert_eq!(nav.selection().semester, Some(Semester::Third));

    nav.back();
    assert_eq!(nav.selection().view, View::Bookmarks);
}

#[test]
fn test_open_bookmark_with_stale_department_hint() {
    let mut nav = mounted_navigator();
    let item = BookmarkItem::new("me_v1", BookmarkKind::Video, "Thermodynamics Basics")
        .in_department("ce");
    nav.open_bookmark(&item).unwrap();
    assert_eq!(nav.selection().department_id.as_deref(), Some("me"));
    assert_eq!(
        nav.selection().viewer,
        Some(Viewer::Video {
            video_id: "me_v1".to_string()
        })
    );
}

#[test]
fn test_open_pdf_bookmark_without_hint() {
    let mut nav = mounted_navigator();
    let item = BookmarkItem::new("ce_3001_syllabus", BookmarkKind::Pdf, "Data Structures Syllabus");
    nav.open_bookmark(&item).unwrap();
    let sel = nav.selection();
    assert_eq!(sel.view, View::Pdf);
    assert_eq!(sel.subject_id.as_deref(), Some("ce_3001"));
}

#[test]
fn test_unknown_bookmark_is_an_error() {
    let mut nav = mounted_navigator();
    let item = BookmarkItem::new("gone", BookmarkKind::Video, "Removed lecture");
    assert!(matches!(nav.open_bookmark(&item), Err(NavigationError::UnknownVideo(_))));
    assert!(nav.selection().is_home());
}
