// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for search query handling.
//!
//! Arbitrary bytes as the query: emoji, RTL text, null bytes, whitespace of
//! every kind. Search must never panic and must keep its ranking shape.

#![no_main]

use libfuzzer_sys::fuzz_target;
use polyportal::testing::campus_catalog;
use polyportal::{search, QueryTerms, MAX_RESULTS};

fuzz_target!(|query: &[u8]| {
    static CATALOG: std::sync::OnceLock<polyportal::Catalog> = std::sync::OnceLock::new();
    let catalog = CATALOG.get_or_init(campus_catalog);

    let query = String::from_utf8_lossy(query);
    let query: String = query.chars().take(200).collect();

    let results = search(&query, catalog);

    assert!(results.len() <= MAX_RESULTS);
    for result in &results {
        assert!(result.score() > 0.0, "zero score survived: {:?}", result);
    }
    for pair in results.windows(2) {
        assert!(pair[0].score() >= pair[1].score());
    }

    // blank after normalization means no results at all
    if QueryTerms::parse(&query).is_none() {
        assert!(results.is_empty());
    }
});
