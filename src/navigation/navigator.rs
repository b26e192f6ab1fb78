// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The navigation state machine.
//!
//! Every forward navigation builds a snapshot, pushes it, and then restores
//! from it. Back, forward, and popstate restore the same way. There is one
//! path from snapshot to selection (`restore_view`), so "what you pushed is
//! what you get back" holds by construction rather than by keeping two code
//! paths in sync.
//!
//! ```text
//! home ──► dept ──► sem ──► sub ──► video | pdf
//!   │                             (tab: materials | videos | ai)
//!   └────► bookmarks
//!
//! any view + open_modal(kind) ──push──► same view, modal = kind
//! close_overlay ──history.back()──► previous entry
//! ```
//!
//! Top-level jumps (home, bookmarks, department, bookmark) start from a fresh
//! snapshot. Everything else merges onto a copy of the current snapshot so an
//! open modal survives unrelated navigation.

use serde_json::Value;
use tracing::{debug, warn};

use super::history::HistoryStack;
use super::selection::{Selection, Viewer};
use super::snapshot::{NavigationSnapshot, OverlayKind, Tab, View};
use crate::contracts::check_selection_consistent;
use crate::error::NavigationError;
use crate::search::SearchSession;
use crate::storage::{BookmarkItem, BookmarkKind};
use crate::types::{Catalog, Department, Semester, StudyResource, Subject, VideoLecture};

#[derive(Debug)]
pub struct Navigator<H> {
    catalog: Catalog,
    history: H,
    current: NavigationSnapshot,
    selection: Selection,
    search: SearchSession,
}

impl<H: HistoryStack> Navigator<H> {
    pub fn new(catalog: Catalog, history: H) -> Self {
        Self::with_search(catalog, history, SearchSession::default())
    }

    pub fn with_search(catalog: Catalog, history: H, search: SearchSession) -> Self {
        Navigator {
            catalog,
            history,
            current: NavigationSnapshot::home(),
            selection: Selection::home(),
            search,
        }
    }

    // =========================================================================
    // READ SIDE
    // =========================================================================

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn history(&self) -> &H {
        &self.history
    }

    pub fn history_mut(&mut self) -> &mut H {
        &mut self.history
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// The snapshot that reproduces the current selection.
    pub fn current_snapshot(&self) -> &NavigationSnapshot {
        &self.current
    }

    pub fn search(&self) -> &SearchSession {
        &self.search
    }

    pub fn department(&self) -> Option<&Department> {
        let id = self.selection.department_id.as_deref()?;
        self.catalog.department(id)
    }

    pub fn subject(&self) -> Option<&Subject> {
        let dept = self.department()?;
        let id = self.selection.subject_id.as_deref()?;
        self.catalog.subject(dept, id)
    }

    pub fn viewer_video(&self) -> Option<&VideoLecture> {
        match &self.selection.viewer {
            Some(Viewer::Video { video_id }) => self.catalog.find_video(video_id).map(|(_, v)| v),
            _ => None,
        }
    }

    pub fn viewer_resource(&self) -> Option<&StudyResource> {
        match &self.selection.viewer {
            Some(Viewer::Resource {
                subject_id,
                resource_id,
            }) => {
                let (_, subject) = self.catalog.find_subject(subject_id)?;
                self.catalog.resource(subject, resource_id)
            }
            _ => None,
        }
    }

    // =========================================================================
    // SEARCH BOX
    // =========================================================================

    pub fn type_query(&mut self, query: impl Into<String>, now_ms: u64) {
        self.search.type_query(query, now_ms);
    }

    /// Score the debounced query if due. Returns `true` when results changed.
    pub fn tick(&mut self, now_ms: u64) -> bool {
        self.search.tick(now_ms, &self.catalog)
    }

    // =========================================================================
    // LIFECYCLE
    // =========================================================================

    /// First render. An existing history entry is restored; otherwise history
    /// is seeded with home via replace, so home is never popped into nothing.
    ///
    /// A stack that holds no current entry (a fresh in-memory stack fed a
    /// deep link, or a host-owned one) gets the restored view written in via
    /// replace, so later pushes have an entry to come back to.
    pub fn mount(&mut self, existing: Option<&Value>) {
        match existing {
            Some(state) if !state.is_null() => {
                self.on_pop_state(Some(state));
                if self.history.current().is_none() {
                    debug!(view = self.current.view.as_str(), "seeding history with restored entry");
                    self.history.replace(self.current.clone());
                }
            }
            _ => {
                let home = NavigationSnapshot::home();
                debug!("seeding history with home");
                self.history.replace(home.clone());
                self.restore_view(home);
            }
        }
    }

    /// The host moved through history. Whatever the entry holds is authoritative.
    pub fn on_pop_state(&mut self, state: Option<&Value>) {
        self.restore_view(NavigationSnapshot::from_state(state));
    }

    /// Returns `false` when the stack could not answer synchronously.
    pub fn back(&mut self) -> bool {
        match self.history.back() {
            Some(snapshot) => {
                self.restore_view(snapshot);
                true
            }
            None => false,
        }
    }

    pub fn forward(&mut self) -> bool {
        match self.history.forward() {
            Some(snapshot) => {
                self.restore_view(snapshot);
                true
            }
            None => false,
        }
    }

    /// Full reset, then rebuild the selection from `snapshot` alone.
    ///
    /// Overlays close, the viewer clears, and the search box empties before
    /// anything is re-derived. Ids the catalog cannot resolve are left unset
    /// and the view falls back toward home; nothing here fails. The current
    /// snapshot becomes the resolved one, so unresolved ids never leak into
    /// later pushes.
    pub fn restore_view(&mut self, snapshot: NavigationSnapshot) {
        self.search.clear();
        self.selection = Selection::home();

        let selection = self.resolve(&snapshot);
        if selection.view != snapshot.view {
            warn!(
                requested = snapshot.view.as_str(),
                resolved = selection.view.as_str(),
                "snapshot degraded during restore"
            );
        }
        check_selection_consistent(&selection);

        self.current = selection.snapshot();
        self.selection = selection;
    }

    // =========================================================================
    // TOP-LEVEL JUMPS
    // =========================================================================

    pub fn go_home(&mut self) {
        self.navigate(NavigationSnapshot::home());
    }

    pub fn open_bookmarks(&mut self) {
        self.navigate(NavigationSnapshot::of_view(View::Bookmarks));
    }

    pub fn select_department(&mut self, id: &str) -> Result<(), NavigationError> {
        let dept = self
            .catalog
            .department(id)
            .ok_or_else(|| NavigationError::UnknownDepartment(id.to_string()))?;
        let next = NavigationSnapshot {
            view: View::Dept,
            dept_id: Some(dept.id.clone()),
            ..NavigationSnapshot::default()
        };
        self.navigate(next);
        Ok(())
    }

    /// Jump straight to a bookmarked entity.
    ///
    /// `deptId` on the bookmark is a hint: entities saved without one, or
    /// with a stale one, are looked up across the whole catalog.
    pub fn open_bookmark(&mut self, item: &BookmarkItem) -> Result<(), NavigationError> {
        let hint = item.dept_id.as_deref();
        let next = match item.kind {
            BookmarkKind::Dept => return self.select_department(&item.id),
            BookmarkKind::Subject => {
                let (dept, subject) = locate_subject(&self.catalog, hint, &item.id).ok_or_else(
                    || NavigationError::UnknownSubject {
                        department: hint.unwrap_or_default().to_string(),
                        subject: item.id.clone(),
                    },
                )?;
                NavigationSnapshot {
                    view: View::Sub,
                    dept_id: Some(dept.id.clone()),
                    sem_id: Some(subject.semester.label().to_string()),
                    sub_id: Some(subject.id.clone()),
                    tab: Some(Tab::Materials),
                    ..NavigationSnapshot::default()
                }
            }
            BookmarkKind::Video => {
                let (dept, video) = locate_video(&self.catalog, hint, &item.id)
                    .ok_or_else(|| NavigationError::UnknownVideo(item.id.clone()))?;
                NavigationSnapshot {
                    view: View::Video,
                    dept_id: Some(dept.id.clone()),
                    video_id: Some(video.id.clone()),
                    ..NavigationSnapshot::default()
                }
            }
            BookmarkKind::Pdf => {
                let (dept, subject, resource) =
                    locate_resource(&self.catalog, hint, None, &item.id).ok_or_else(|| {
                        NavigationError::UnknownResource {
                            subject: String::new(),
                            resource: item.id.clone(),
                        }
                    })?;
                NavigationSnapshot {
                    view: View::Pdf,
                    dept_id: Some(dept.id.clone()),
                    sem_id: Some(subject.semester.label().to_string()),
                    sub_id: Some(subject.id.clone()),
                    resource_id: Some(resource.id.clone()),
                    tab: Some(Tab::Materials),
                    ..NavigationSnapshot::default()
                }
            }
        };
        self.navigate(next);
        Ok(())
    }

    // =========================================================================
    // MERGE PUSHES
    // =========================================================================

    pub fn select_semester(&mut self, semester: Semester) -> Result<(), NavigationError> {
        if self.selection.department_id.is_none() {
            return Err(NavigationError::NoDepartment);
        }
        let mut next = self.merged();
        next.view = View::Sem;
        next.sem_id = Some(semester.label().to_string());
        next.sub_id = None;
        next.tab = None;
        next.video_id = None;
        next.resource_id = None;
        self.navigate(next);
        Ok(())
    }

    /// Open a subject of the selected department on its materials tab.
    pub fn select_subject(&mut self, id: &str) -> Result<(), NavigationError> {
        let dept = self.department().ok_or(NavigationError::NoDepartment)?;
        let subject =
            self.catalog
                .subject(dept, id)
                .ok_or_else(|| NavigationError::UnknownSubject {
                    department: dept.id.clone(),
                    subject: id.to_string(),
                })?;
        let sem_id = subject.semester.label().to_string();
        let sub_id = subject.id.clone();

        let mut next = self.merged();
        next.view = View::Sub;
        next.sem_id = Some(sem_id);
        next.sub_id = Some(sub_id);
        next.tab = Some(Tab::Materials);
        next.video_id = None;
        next.resource_id = None;
        self.navigate(next);
        Ok(())
    }

    pub fn set_tab(&mut self, tab: Tab) -> Result<(), NavigationError> {
        if self.selection.subject_id.is_none() {
            return Err(NavigationError::NoSubject);
        }
        let mut next = self.merged();
        next.view = View::Sub;
        next.tab = Some(tab);
        next.video_id = None;
        next.resource_id = None;
        self.navigate(next);
        Ok(())
    }

    /// Open the video player. Looks in the selected department first, then
    /// anywhere; a video from another department drops the subject context.
    pub fn open_video(&mut self, id: &str) -> Result<(), NavigationError> {
        let current_dept = self.selection.department_id.as_deref();
        let (dept, video) = locate_video(&self.catalog, current_dept, id)
            .ok_or_else(|| NavigationError::UnknownVideo(id.to_string()))?;
        let switched = current_dept != Some(dept.id.as_str());
        let dept_id = dept.id.clone();
        let video_id = video.id.clone();

        let mut next = self.merged();
        if switched {
            next.sem_id = None;
            next.sub_id = None;
            next.tab = None;
        }
        next.view = View::Video;
        next.dept_id = Some(dept_id);
        next.video_id = Some(video_id);
        next.resource_id = None;
        self.navigate(next);
        Ok(())
    }

    /// Open one of the selected subject's resources in the PDF viewer.
    pub fn open_resource(&mut self, id: &str) -> Result<(), NavigationError> {
        let subject = self.subject().ok_or(NavigationError::NoSubject)?;
        let resource =
            self.catalog
                .resource(subject, id)
                .ok_or_else(|| NavigationError::UnknownResource {
                    subject: subject.id.clone(),
                    resource: id.to_string(),
                })?;
        let resource_id = resource.id.clone();

        let mut next = self.merged();
        next.view = View::Pdf;
        next.resource_id = Some(resource_id);
        next.video_id = None;
        self.navigate(next);
        Ok(())
    }

    /// Push `{...current, modal: kind}`. Opening a second modal replaces the
    /// first; the type has room for only one.
    pub fn open_modal(&mut self, kind: OverlayKind) -> Result<(), NavigationError> {
        if kind.is_viewer() {
            return Err(NavigationError::ViewerNeedsPayload(kind.as_str().to_string()));
        }
        let mut next = self.merged();
        next.modal = Some(kind);
        self.navigate(next);
        Ok(())
    }

    /// Close whatever overlay is open by going back in history, so forward
    /// can reopen it. Returns whether the back step was taken or journaled:
    /// `false` when nothing is open or there is no earlier entry.
    ///
    /// With a host-owned history the selection changes only when the host
    /// answers through `on_pop_state`.
    pub fn close_overlay(&mut self) -> bool {
        let Some(overlay) = self.selection.overlay else {
            debug!("close_overlay with nothing open");
            return false;
        };
        if !self.history.can_go_back() {
            debug!(overlay = overlay.as_str(), "close_overlay with no earlier entry");
            return false;
        }
        debug!(overlay = overlay.as_str(), "closing overlay via history back");
        self.back();
        true
    }

    // =========================================================================
    // INTERNALS
    // =========================================================================

    fn navigate(&mut self, next: NavigationSnapshot) {
        self.history.push(next.clone());
        self.restore_view(next);
    }

    /// Merge base: the resolved current snapshot, open modal included.
    fn merged(&self) -> NavigationSnapshot {
        self.current.clone()
    }

    fn resolve(&self, snapshot: &NavigationSnapshot) -> Selection {
        let mut selection = match snapshot.view {
            View::Home => Selection::home(),
            View::Bookmarks => Selection {
                view: View::Bookmarks,
                ..Selection::home()
            },
            View::Dept | View::Sem | View::Sub => self.resolve_context(snapshot, snapshot.view),
            View::Video => self.resolve_video(snapshot),
            View::Pdf => self.resolve_resource(snapshot),
        };

        // an explicit modal wins over the viewer overlay
        selection.overlay = match snapshot.modal {
            Some(kind) if !kind.is_viewer() => Some(kind),
            _ => selection.viewer.as_ref().map(Viewer::overlay),
        };
        selection
    }

    /// Department, then semester, then subject, stopping at `deepest` or at the
    /// first id that does not resolve.
    fn resolve_context(&self, snapshot: &NavigationSnapshot, deepest: View) -> Selection {
        let mut selection = Selection::home();
        let Some(dept) = self.lookup_department(snapshot.dept_id.as_deref()) else {
            return selection;
        };
        selection.view = View::Dept;
        selection.department_id = Some(dept.id.clone());
        if deepest == View::Dept {
            return selection;
        }

        if let Some(raw) = snapshot.sem_id.as_deref() {
            match Semester::parse(raw) {
                Some(semester) => {
                    selection.view = View::Sem;
                    selection.semester = Some(semester);
                }
                None => warn!(sem_id = raw, "snapshot names unknown semester"),
            }
        }
        if deepest == View::Sem {
            return selection;
        }

        if let Some(id) = snapshot.sub_id.as_deref() {
            match self.catalog.subject(dept, id) {
                Some(subject) => {
                    selection.view = View::Sub;
                    selection.semester = Some(subject.semester);
                    selection.subject_id = Some(subject.id.clone());
                    selection.tab = snapshot.tab.unwrap_or_default();
                }
                None => warn!(dept_id = %dept.id, sub_id = id, "snapshot names unknown subject"),
            }
        }
        selection
    }

    fn resolve_video(&self, snapshot: &NavigationSnapshot) -> Selection {
        let mut selection = self.resolve_context(snapshot, View::Sub);
        let Some(id) = snapshot.video_id.as_deref() else {
            return selection;
        };
        match locate_video(&self.catalog, selection.department_id.as_deref(), id) {
            Some((dept, video)) => {
                if selection.department_id.as_deref() != Some(dept.id.as_str()) {
                    selection = department_only(dept);
                }
                selection.view = View::Video;
                selection.viewer = Some(Viewer::Video {
                    video_id: video.id.clone(),
                });
            }
            None => warn!(video_id = id, "snapshot names unknown video"),
        }
        selection
    }

    fn resolve_resource(&self, snapshot: &NavigationSnapshot) -> Selection {
        let mut selection = self.resolve_context(snapshot, View::Sub);
        let Some(id) = snapshot.resource_id.as_deref() else {
            return selection;
        };
        let found = locate_resource(
            &self.catalog,
            selection.department_id.as_deref(),
            selection.subject_id.as_deref(),
            id,
        );
        match found {
            Some((dept, subject, resource)) => {
                if selection.department_id.as_deref() != Some(dept.id.as_str()) {
                    selection = department_only(dept);
                }
                selection.view = View::Pdf;
                selection.viewer = Some(Viewer::Resource {
                    subject_id: subject.id.clone(),
                    resource_id: resource.id.clone(),
                });
            }
            None => warn!(resource_id = id, "snapshot names unknown resource"),
        }
        selection
    }

    fn lookup_department(&self, id: Option<&str>) -> Option<&Department> {
        let id = id?;
        let dept = self.catalog.department(id);
        if dept.is_none() {
            warn!(dept_id = id, "snapshot names unknown department");
        }
        dept
    }
}

fn department_only(dept: &Department) -> Selection {
    Selection {
        view: View::Dept,
        department_id: Some(dept.id.clone()),
        ..Selection::home()
    }
}

fn locate_subject<'c>(
    catalog: &'c Catalog,
    dept_hint: Option<&str>,
    id: &str,
) -> Option<(&'c Department, &'c Subject)> {
    dept_hint
        .and_then(|d| catalog.department(d))
        .and_then(|d| catalog.subject(d, id).map(|s| (d, s)))
        .or_else(|| catalog.find_subject(id))
}

fn locate_video<'c>(
    catalog: &'c Catalog,
    dept_hint: Option<&str>,
    id: &str,
) -> Option<(&'c Department, &'c VideoLecture)> {
    dept_hint
        .and_then(|d| catalog.department(d))
        .and_then(|d| catalog.video(d, id).map(|v| (d, v)))
        .or_else(|| catalog.find_video(id))
}

/// Subject first, then the rest of the department, then the whole catalog.
fn locate_resource<'c>(
    catalog: &'c Catalog,
    dept_hint: Option<&str>,
    subject_hint: Option<&str>,
    id: &str,
) -> Option<(&'c Department, &'c Subject, &'c StudyResource)> {
    if let Some(dept) = dept_hint.and_then(|d| catalog.department(d)) {
        let in_subject = subject_hint
            .and_then(|s| catalog.subject(dept, s))
            .and_then(|s| catalog.resource(s, id).map(|r| (s, r)));
        if let Some((subject, resource)) = in_subject.or_else(|| catalog.find_resource(dept, id)) {
            return Some((dept, subject, resource));
        }
    }
    catalog.locate_resource(id)
}
