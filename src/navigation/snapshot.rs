// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The unit pushed onto (and popped off) the history stack.
//!
//! A snapshot is flat and self-sufficient: together with the static catalog it
//! names everything needed to rebuild a view. It is also the only thing that
//! crosses the history boundary, so its wire shape is fixed:
//!
//! ```text
//! { "view": "sub", "deptId": "ce", "semId": "Semester 1",
//!   "subId": "ce_1002", "tab": "materials", "modal": "quiz" }
//! ```
//!
//! `view` is required; every other field is an optional string and absent
//! fields are omitted. History state can be written by anything with access
//! to the page (extensions, a hand-edited URL), so `from_state` accepts
//! arbitrary JSON and degrades instead of failing.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use tracing::debug;
use url::form_urlencoded;

// =============================================================================
// DISCRIMINANTS
// =============================================================================

/// Which base view a snapshot describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum View {
    #[default]
    Home,
    Bookmarks,
    Dept,
    Sem,
    Sub,
    Video,
    Pdf,
}

impl View {
    pub fn as_str(self) -> &'static str {
        match self {
            View::Home => "home",
            View::Bookmarks => "bookmarks",
            View::Dept => "dept",
            View::Sem => "sem",
            View::Sub => "sub",
            View::Video => "video",
            View::Pdf => "pdf",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "home" => Some(View::Home),
            "bookmarks" => Some(View::Bookmarks),
            "dept" => Some(View::Dept),
            "sem" => Some(View::Sem),
            "sub" => Some(View::Sub),
            "video" => Some(View::Video),
            "pdf" => Some(View::Pdf),
            _ => None,
        }
    }
}

/// Subject page tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tab {
    #[default]
    Materials,
    Videos,
    Ai,
}

impl Tab {
    pub fn as_str(self) -> &'static str {
        match self {
            Tab::Materials => "materials",
            Tab::Videos => "videos",
            Tab::Ai => "ai",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "materials" => Some(Tab::Materials),
            "videos" => Some(Tab::Videos),
            "ai" => Some(Tab::Ai),
            _ => None,
        }
    }
}

/// The single overlay layered above the base view.
///
/// One field, one value: two overlays open at once cannot be represented.
/// `PdfViewer` and `VideoPlayer` are opened by the `pdf`/`video` views; the
/// rest are named by a snapshot's `modal` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OverlayKind {
    #[serde(rename = "pdf")]
    PdfViewer,
    #[serde(rename = "video")]
    VideoPlayer,
    Quiz,
    Sync,
    Scholarships,
    About,
}

impl OverlayKind {
    pub fn as_str(self) -> &'static str {
        match self {
            OverlayKind::PdfViewer => "pdf",
            OverlayKind::VideoPlayer => "video",
            OverlayKind::Quiz => "quiz",
            OverlayKind::Sync => "sync",
            OverlayKind::Scholarships => "scholarships",
            OverlayKind::About => "about",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "pdf" => Some(OverlayKind::PdfViewer),
            "video" => Some(OverlayKind::VideoPlayer),
            "quiz" => Some(OverlayKind::Quiz),
            "sync" => Some(OverlayKind::Sync),
            "scholarships" => Some(OverlayKind::Scholarships),
            "about" => Some(OverlayKind::About),
            _ => None,
        }
    }

    /// Viewer overlays carry a payload (resource or video).
    pub fn is_viewer(self) -> bool {
        matches!(self, OverlayKind::PdfViewer | OverlayKind::VideoPlayer)
    }
}

impl fmt::Display for OverlayKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// SNAPSHOT
// =============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NavigationSnapshot {
    pub view: View,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dept_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sem_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modal: Option<OverlayKind>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tab: Option<Tab>,
}

impl NavigationSnapshot {
    pub fn home() -> Self {
        Self::default()
    }

    pub fn of_view(view: View) -> Self {
        Self {
            view,
            ..Self::default()
        }
    }

    /// Lenient decode of whatever the history entry holds.
    ///
    /// Never fails. Not an object, or no recognizable `view` ⇒ home. Fields
    /// that are present but not strings (or name an unknown tab/modal) are
    /// dropped one by one; the rest of the snapshot survives.
    pub fn from_state(state: Option<&Value>) -> Self {
        let Some(Value::Object(map)) = state else {
            debug!("history state is not an object; treating as home");
            return Self::home();
        };

        let text = |key: &str| -> Option<String> {
            match map.get(key) {
                Some(Value::String(s)) => (!s.is_empty()).then(|| s.clone()),
                Some(Value::Null) | None => None,
                Some(other) => {
                    debug!(field = key, value = %other, "dropping non-string history field");
                    None
                }
            }
        };

        let view = match text("view").as_deref().map(View::parse) {
            Some(Some(view)) => view,
            Some(None) => {
                debug!("unrecognized view in history state; treating as home");
                View::Home
            }
            None => View::Home,
        };

        let modal = text("modal").and_then(|name| {
            let parsed = OverlayKind::parse(&name);
            if parsed.is_none() {
                debug!(modal = %name, "dropping unknown modal name");
            }
            parsed
        });

        NavigationSnapshot {
            view,
            dept_id: text("deptId"),
            sem_id: text("semId"),
            sub_id: text("subId"),
            video_id: text("videoId"),
            resource_id: text("resourceId"),
            modal,
            tab: text("tab").as_deref().and_then(Tab::parse),
        }
    }

    /// The JSON object written into a history entry.
    pub fn to_state(&self) -> Value {
        // A struct of strings and unit enums always serializes.
        serde_json::to_value(self).unwrap_or(Value::Null)
    }

    /// Deep-link form: `view=sub&deptId=ce&semId=Semester+1&subId=ce_1002`.
    ///
    /// For hosts without a history primitive, this is what survives a reload.
    pub fn to_query_string(&self) -> String {
        let mut out = form_urlencoded::Serializer::new(String::new());
        out.append_pair("view", self.view.as_str());
        let fields = [
            ("deptId", self.dept_id.as_deref()),
            ("semId", self.sem_id.as_deref()),
            ("subId", self.sub_id.as_deref()),
            ("videoId", self.video_id.as_deref()),
            ("resourceId", self.resource_id.as_deref()),
            ("modal", self.modal.map(OverlayKind::as_str)),
            ("tab", self.tab.map(Tab::as_str)),
        ];
        for (key, value) in fields {
            if let Some(value) = value {
                out.append_pair(key, value);
            }
        }
        out.finish()
    }

    /// Inverse of `to_query_string`. A leading `?` is ignored; unknown keys
    /// are skipped; decoding goes through `from_state`, so it never fails.
    pub fn from_query_string(query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);
        let map: serde_json::Map<String, Value> = form_urlencoded::parse(query.as_bytes())
            .map(|(k, v)| (k.into_owned(), Value::String(v.into_owned())))
            .collect();
        Self::from_state(Some(&Value::Object(map)))
    }
}
