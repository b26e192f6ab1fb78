// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Saved departments, subjects, videos, and documents.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookmarkKind {
    Dept,
    Subject,
    Video,
    Pdf,
}

/// One saved entity, as stored under the `bookmarks` key.
///
/// `data` is opaque to the core: the presentation layer keeps whatever it
/// needs to render the bookmark without a catalog lookup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookmarkItem {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: BookmarkKind,
    pub title: String,
    #[serde(default)]
    pub subtitle: String,
    #[serde(default)]
    pub data: Value,
    #[serde(rename = "deptId", default, skip_serializing_if = "Option::is_none")]
    pub dept_id: Option<String>,
}

impl BookmarkItem {
    pub fn new(id: impl Into<String>, kind: BookmarkKind, title: impl Into<String>) -> Self {
        BookmarkItem {
            id: id.into(),
            kind,
            title: title.into(),
            subtitle: String::new(),
            data: Value::Null,
            dept_id: None,
        }
    }

    pub fn with_subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = subtitle.into();
        self
    }

    pub fn in_department(mut self, dept_id: impl Into<String>) -> Self {
        self.dept_id = Some(dept_id.into());
        self
    }
}

/// Ordered bookmark list, unique by `id`. Newest additions go last.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Vec<Value>", into = "Vec<BookmarkItem>")]
pub struct BookmarkList {
    items: Vec<BookmarkItem>,
}

impl BookmarkList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[BookmarkItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.items.iter().any(|item| item.id == id)
    }

    pub fn get(&self, id: &str) -> Option<&BookmarkItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Append unless an item with the same id exists. Returns `true` if added.
    pub fn add(&mut self, item: BookmarkItem) -> bool {
        if self.contains(&item.id) {
            return false;
        }
        self.items.push(item);
        true
    }

    pub fn remove(&mut self, id: &str) -> Option<BookmarkItem> {
        let index = self.items.iter().position(|item| item.id == id)?;
        Some(self.items.remove(index))
    }

    /// Add if absent, remove if present. Returns whether it is now bookmarked.
    pub fn toggle(&mut self, item: BookmarkItem) -> bool {
        if self.remove(&item.id).is_some() {
            false
        } else {
            self.items.push(item);
            true
        }
    }

    /// Another tab's list replaces ours wholesale (last writer wins).
    pub fn replace_with(&mut self, incoming: BookmarkList) {
        *self = incoming;
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }
}

impl From<Vec<Value>> for BookmarkList {
    fn from(raw: Vec<Value>) -> Self {
        let mut list = BookmarkList::new();
        for value in raw {
            match serde_json::from_value::<BookmarkItem>(value) {
                Ok(item) => {
                    if !list.add(item) {
                        debug!("dropping duplicate bookmark");
                    }
                }
                Err(err) => debug!(error = %err, "skipping invalid bookmark"),
            }
        }
        list
    }
}

impl From<BookmarkList> for Vec<BookmarkItem> {
    fn from(list: BookmarkList) -> Self {
        list.items
    }
}

impl FromIterator<BookmarkItem> for BookmarkList {
    fn from_iter<I: IntoIterator<Item = BookmarkItem>>(iter: I) -> Self {
        let mut list = BookmarkList::new();
        for item in iter {
            list.add(item);
        }
        list
    }
}
