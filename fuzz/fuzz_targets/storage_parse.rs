// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for persisted payloads and storage events.
//!
//! Another tab (or a hand-edited store) can write anything under our keys.
//! Events must never panic, progress must stay in range, and a corrupt
//! payload must leave local state alone.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use polyportal::storage::{BOOKMARKS_KEY, MAX_PROGRESS, PROGRESS_KEY};
use polyportal::{PersistedState, StorageChange};

#[derive(Arbitrary, Debug)]
struct Event {
    bookmarks: bool,
    removed: bool,
    payload: String,
}

fuzz_target!(|events: Vec<Event>| {
    let mut state = PersistedState::default();
    state.progress.set("ce_1002", 50);

    for event in events.iter().take(16) {
        let key = if event.bookmarks { BOOKMARKS_KEY } else { PROGRESS_KEY };
        let value = (!event.removed).then_some(event.payload.as_str());

        let before = state.clone();
        let change = state.apply_storage_event(key, value);
        if change == StorageChange::Ignored {
            assert_eq!(state, before);
        }

        for (_, percent) in state.progress.iter() {
            assert!(percent <= MAX_PROGRESS);
        }
        // progress is never lowered by another tab
        assert!(state.progress.get("ce_1002").unwrap_or(0) >= 50);
    }
});
