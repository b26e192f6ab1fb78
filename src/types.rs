// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The building blocks of the study catalog.
//!
//! A catalog is a read-only tree: departments own subjects and video lectures,
//! subjects own their study resources. Everything here deserializes straight
//! from the catalog JSON the portal ships, so field names follow the wire
//! format (camelCase) rather than Rust conventions.
//!
//! # Invariants
//!
//! - **Department**: `id` unique across the catalog.
//! - **Subject**: `id` unique across the whole catalog, not just its department.
//! - **VideoLecture**: `subject_id`, when present, names a subject of the *same*
//!   department.
//!
//! `Catalog::validate` checks all three. Lookups never assume they hold; a
//! stale id simply resolves to `None`.

use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// SEMESTER
// =============================================================================

/// One of the seven semester buckets a subject or video can belong to.
///
/// Diploma programmes run six semesters; `Common` holds material shared
/// across all of them (induction courses, soft skills).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Semester {
    First,
    Second,
    Third,
    Fourth,
    Fifth,
    Sixth,
    Common,
}

impl Semester {
    /// All semesters in display order.
    pub const ALL: [Semester; 7] = [
        Semester::First,
        Semester::Second,
        Semester::Third,
        Semester::Fourth,
        Semester::Fifth,
        Semester::Sixth,
        Semester::Common,
    ];

    /// Semester from its number (1-6).
    pub fn from_number(n: u8) -> Option<Self> {
        match n {
            1 => Some(Semester::First),
            2 => Some(Semester::Second),
            3 => Some(Semester::Third),
            4 => Some(Semester::Fourth),
            5 => Some(Semester::Fifth),
            6 => Some(Semester::Sixth),
            _ => None,
        }
    }

    /// Semester number, or `None` for `Common`.
    pub fn number(self) -> Option<u8> {
        match self {
            Semester::First => Some(1),
            Semester::Second => Some(2),
            Semester::Third => Some(3),
            Semester::Fourth => Some(4),
            Semester::Fifth => Some(5),
            Semester::Sixth => Some(6),
            Semester::Common => None,
        }
    }

    /// Canonical label, the form written into snapshots (`"Semester 3"`).
    pub fn label(self) -> &'static str {
        match self {
            Semester::First => "Semester 1",
            Semester::Second => "Semester 2",
            Semester::Third => "Semester 3",
            Semester::Fourth => "Semester 4",
            Semester::Fifth => "Semester 5",
            Semester::Sixth => "Semester 6",
            Semester::Common => "Common",
        }
    }

    /// Lenient parse. Accepts `"Semester 3"`, `"3rd Semester"`, `"sem 3"`,
    /// `"s3"` and bare `"3"`, in any case and spacing.
    pub fn parse(value: &str) -> Option<Self> {
        let compact: String = value
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect::<String>()
            .to_lowercase();

        if compact == "common" {
            return Some(Semester::Common);
        }

        let leading = ["semester", "sem", "s"]
            .iter()
            .find_map(|prefix| compact.strip_prefix(*prefix))
            .unwrap_or(compact.as_str());
        if let Ok(n) = leading.parse::<u8>() {
            return Self::from_number(n);
        }

        let without_word = compact.strip_suffix("semester")?;
        let digits = ["st", "nd", "rd", "th"]
            .iter()
            .find_map(|suffix| without_word.strip_suffix(*suffix))
            .unwrap_or(without_word);
        digits.parse::<u8>().ok().and_then(Self::from_number)
    }
}

impl fmt::Display for Semester {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl TryFrom<String> for Semester {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Semester::parse(&value).ok_or_else(|| format!("unrecognized semester label: {value:?}"))
    }
}

impl From<Semester> for String {
    fn from(semester: Semester) -> Self {
        semester.label().to_string()
    }
}

// =============================================================================
// CATALOG ENTITIES
// =============================================================================

/// Kind of downloadable study material.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceKind {
    Notes,
    Syllabus,
    Paper,
    Lab,
}

/// A PDF (or other document) shown in the viewer overlay.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudyResource {
    pub id: String,
    pub title: String,
    pub kind: ResourceKind,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Subject {
    pub id: String,
    pub title: String,
    pub semester: Semester,
    #[serde(default)]
    pub description: String,
    /// External drive/folder link for the full material set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    #[serde(default)]
    pub resources: Vec<StudyResource>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoLecture {
    pub id: String,
    pub title: String,
    pub instructor: String,
    /// Display label such as `"1:40:12"`; never parsed.
    pub duration: String,
    pub semester: Semester,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Department {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub subjects: Vec<Subject>,
    #[serde(default)]
    pub videos: Vec<VideoLecture>,
}

impl Department {
    /// Subjects taught in the given semester, in catalog order.
    pub fn subjects_in(&self, semester: Semester) -> impl Iterator<Item = &Subject> {
        self.subjects.iter().filter(move |s| s.semester == semester)
    }

    /// Videos attached to a subject, in catalog order.
    pub fn videos_for<'a>(
        &'a self,
        subject_id: &'a str,
    ) -> impl Iterator<Item = &'a VideoLecture> + 'a {
        self.videos
            .iter()
            .filter(move |v| v.subject_id.as_deref() == Some(subject_id))
    }
}

/// The full content tree. Read-only once loaded.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Catalog {
    pub departments: Vec<Department>,
}

// =============================================================================
// SEARCH RESULTS
// =============================================================================

/// One ranked search hit, borrowing the entity it points at.
///
/// Produced fresh per query and never persisted. Subject and video hits carry
/// their owning department so the caller can navigate straight to them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum SearchResult<'c> {
    #[serde(rename = "dept")]
    Department {
        department: &'c Department,
        score: f64,
    },
    #[serde(rename = "subject")]
    Subject {
        subject: &'c Subject,
        department: &'c Department,
        semester: Semester,
        score: f64,
    },
    #[serde(rename = "video")]
    Video {
        video: &'c VideoLecture,
        department: &'c Department,
        semester: Semester,
        score: f64,
    },
}

impl<'c> SearchResult<'c> {
    pub fn score(&self) -> f64 {
        match self {
            SearchResult::Department { score, .. }
            | SearchResult::Subject { score, .. }
            | SearchResult::Video { score, .. } => *score,
        }
    }

    /// Id of the entity this hit points at.
    pub fn entity_id(&self) -> &'c str {
        match self {
            SearchResult::Department { department, .. } => &department.id,
            SearchResult::Subject { subject, .. } => &subject.id,
            SearchResult::Video { video, .. } => &video.id,
        }
    }

    /// Human-facing title of the hit.
    pub fn title(&self) -> &'c str {
        match self {
            SearchResult::Department { department, .. } => &department.name,
            SearchResult::Subject { subject, .. } => &subject.title,
            SearchResult::Video { video, .. } => &video.title,
        }
    }

    /// Owning department (the department itself for department hits).
    pub fn department(&self) -> &'c Department {
        match self {
            SearchResult::Department { department, .. }
            | SearchResult::Subject { department, .. }
            | SearchResult::Video { department, .. } => department,
        }
    }

    /// Wire tag: `dept`, `subject` or `video`.
    pub fn kind(&self) -> &'static str {
        match self {
            SearchResult::Department { .. } => "dept",
            SearchResult::Subject { .. } => "subject",
            SearchResult::Video { .. } => "video",
        }
    }
}

/// Owned copy of a `SearchResult`, for holders that outlive the borrow
/// (search sessions, the wasm boundary).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchHit {
    /// `dept`, `subject` or `video`.
    #[serde(rename = "type")]
    pub kind: String,
    pub id: String,
    pub title: String,
    pub department_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub semester: Option<Semester>,
    pub score: f64,
}

impl From<&SearchResult<'_>> for SearchHit {
    fn from(result: &SearchResult<'_>) -> Self {
        let semester = match result {
            SearchResult::Department { .. } => None,
            SearchResult::Subject { semester, .. } | SearchResult::Video { semester, .. } => {
                Some(*semester)
            }
        };
        SearchHit {
            kind: result.kind().to_string(),
            id: result.entity_id().to_string(),
            title: result.title().to_string(),
            department_id: result.department().id.clone(),
            semester,
            score: result.score(),
        }
    }
}
