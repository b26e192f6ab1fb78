// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Persisted client state: study progress and bookmarks.
//!
//! The state lives outside the history stack under two keys, `progress` and
//! `bookmarks`, each holding JSON. Storage is read-modify-write with no
//! locking; hosts must deliver writes and storage events on one thread.

mod bookmarks;
mod progress;
mod state;
mod store;

pub use bookmarks::{BookmarkItem, BookmarkKind, BookmarkList};
pub use progress::{ProgressMap, MAX_PROGRESS};
pub use state::{PersistedState, StorageChange};
pub use store::{
    read_persisted, write_persisted, FileStore, MemoryStore, PersistedStore, BOOKMARKS_KEY,
    PROGRESS_KEY,
};
