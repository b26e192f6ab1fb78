// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Progress and bookmarks together, and the cross-tab merge policy.
//!
//! Two tabs share one store. When the other tab writes a key, the host sees
//! a storage event carrying the key and its new raw value (or `None` when the
//! key was removed). The two keys merge differently and on purpose:
//!
//! | key         | incoming value            | removed key     |
//! |-------------|---------------------------|-----------------|
//! | `progress`  | per subject, max wins     | left untouched  |
//! | `bookmarks` | whole list replaces ours  | cleared         |
//!
//! A payload that does not parse is logged and ignored; local state stays.

use tracing::{debug, warn};

use super::bookmarks::BookmarkList;
use super::progress::ProgressMap;
use super::store::{read_persisted, write_persisted, PersistedStore, BOOKMARKS_KEY, PROGRESS_KEY};
use crate::contracts::check_progress_in_range;
use crate::error::StorageError;

/// What a storage event did to local state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageChange {
    /// This many subjects moved forward.
    Progress(usize),
    /// Bookmarks were replaced (or cleared).
    Bookmarks,
    /// Unknown key, corrupt payload, or a removal that changes nothing.
    Ignored,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PersistedState {
    pub progress: ProgressMap,
    pub bookmarks: BookmarkList,
}

impl PersistedState {
    /// Read both keys. Missing or corrupt values load as empty.
    pub fn load<S: PersistedStore + ?Sized>(store: &S) -> Self {
        let state = PersistedState {
            progress: read_persisted(store, PROGRESS_KEY),
            bookmarks: read_persisted(store, BOOKMARKS_KEY),
        };
        check_progress_in_range(&state.progress);
        debug!(
            progress = state.progress.len(),
            bookmarks = state.bookmarks.len(),
            "loaded persisted state"
        );
        state
    }

    pub fn save<S: PersistedStore + ?Sized>(&self, store: &mut S) -> Result<(), StorageError> {
        self.save_progress(store)?;
        self.save_bookmarks(store)
    }

    pub fn save_progress<S: PersistedStore + ?Sized>(&self, store: &mut S) -> Result<(), StorageError> {
        write_persisted(store, PROGRESS_KEY, &self.progress)
    }

    pub fn save_bookmarks<S: PersistedStore + ?Sized>(&self, store: &mut S) -> Result<(), StorageError> {
        write_persisted(store, BOOKMARKS_KEY, &self.bookmarks)
    }

    /// Apply another tab's write to `key`.
    pub fn apply_storage_event(&mut self, key: &str, new_value: Option<&str>) -> StorageChange {
        match (key, new_value) {
            (PROGRESS_KEY, None) => {
                debug!("progress removed in another tab; keeping local progress");
                StorageChange::Ignored
            }
            (PROGRESS_KEY, Some(raw)) => match serde_json::from_str::<ProgressMap>(raw) {
                Ok(incoming) => {
                    let changed = self.progress.merge_incoming(&incoming);
                    check_progress_in_range(&self.progress);
                    StorageChange::Progress(changed)
                }
                Err(err) => {
                    warn!(key, error = %err, "ignoring corrupt storage event");
                    StorageChange::Ignored
                }
            },
            (BOOKMARKS_KEY, None) => {
                self.bookmarks.clear();
                StorageChange::Bookmarks
            }
            (BOOKMARKS_KEY, Some(raw)) => match serde_json::from_str::<BookmarkList>(raw) {
                Ok(incoming) => {
                    self.bookmarks.replace_with(incoming);
                    StorageChange::Bookmarks
                }
                Err(err) => {
                    warn!(key, error = %err, "ignoring corrupt storage event");
                    StorageChange::Ignored
                }
            },
            _ => {
                debug!(key, "storage event for unrelated key");
                StorageChange::Ignored
            }
        }
    }
}
