// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for history state decoding and view restore.
//!
//! Whatever a history entry or query string holds, restore must land on a
//! consistent selection, and that selection must reproduce itself.

#![no_main]

use libfuzzer_sys::fuzz_target;
use polyportal::testing::campus_catalog;
use polyportal::{MemoryHistory, NavigationSnapshot, Navigator};

fuzz_target!(|data: &[u8]| {
    let text = String::from_utf8_lossy(data);

    let snapshot = match serde_json::from_str::<serde_json::Value>(&text) {
        Ok(value) => NavigationSnapshot::from_state(Some(&value)),
        Err(_) => NavigationSnapshot::from_query_string(&text),
    };

    let mut nav = Navigator::new(campus_catalog(), MemoryHistory::new());
    nav.mount(None);
    nav.restore_view(snapshot.clone());

    let selection = nav.selection().clone();
    nav.restore_view(selection.snapshot());
    assert_eq!(nav.selection(), &selection);

    let again = NavigationSnapshot::from_query_string(&snapshot.to_query_string());
    assert_eq!(again, snapshot);
});
