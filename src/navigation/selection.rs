// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Selection state: what the presentation layer renders.
//!
//! Derived from a snapshot, never edited field by field. Entities are held by
//! id so a selection can sit next to the catalog it was resolved against.

use serde::Serialize;

use super::snapshot::{NavigationSnapshot, OverlayKind, Tab, View};
use crate::types::Semester;

/// Payload of an open viewer overlay.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Viewer {
    /// A study resource in the PDF viewer, with the subject that owns it.
    #[serde(rename_all = "camelCase")]
    Resource {
        subject_id: String,
        resource_id: String,
    },
    #[serde(rename_all = "camelCase")]
    Video { video_id: String },
}

impl Viewer {
    /// The overlay this payload is shown in.
    pub fn overlay(&self) -> OverlayKind {
        match self {
            Viewer::Resource { .. } => OverlayKind::PdfViewer,
            Viewer::Video { .. } => OverlayKind::VideoPlayer,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Selection {
    pub view: View,
    pub department_id: Option<String>,
    pub semester: Option<Semester>,
    pub subject_id: Option<String>,
    /// Meaningful only while a subject is selected; `Materials` otherwise.
    pub tab: Tab,
    pub overlay: Option<OverlayKind>,
    pub viewer: Option<Viewer>,
}

impl Selection {
    pub fn home() -> Self {
        Self::default()
    }

    pub fn is_home(&self) -> bool {
        *self == Self::home()
    }

    /// Serialize back to the snapshot that reproduces this selection.
    ///
    /// Viewer overlays are implied by `videoId`/`resourceId` and never written
    /// as `modal`. `tab` is written only when a subject is selected.
    pub fn snapshot(&self) -> NavigationSnapshot {
        let (video_id, resource_id) = match &self.viewer {
            Some(Viewer::Video { video_id }) => (Some(video_id.clone()), None),
            Some(Viewer::Resource { resource_id, .. }) => (None, Some(resource_id.clone())),
            None => (None, None),
        };

        NavigationSnapshot {
            view: self.view,
            dept_id: self.department_id.clone(),
            sem_id: self.semester.map(|s| s.label().to_string()),
            sub_id: self.subject_id.clone(),
            video_id,
            resource_id,
            modal: self.overlay.filter(|kind| !kind.is_viewer()),
            tab: self.subject_id.as_ref().map(|_| self.tab),
        }
    }
}
