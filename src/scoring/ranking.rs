// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Result ranking: how search results get sorted.
//!
//! One flat list, highest score first. Ties keep catalog order, which is why
//! ranking goes through the stable `sort_by` and never `sort_unstable_by`:
//! a department listed first in the catalog stays ahead of an equally scored
//! department listed later.

use crate::types::SearchResult;
use std::cmp::Ordering;

/// Compare two search results for ranking: descending by score.
///
/// Equal scores compare `Equal` so the stable sort preserves insertion
/// (catalog) order. NaN scores are treated as equal rather than panicking.
pub fn compare_results(a: &SearchResult<'_>, b: &SearchResult<'_>) -> Ordering {
    b.score().partial_cmp(&a.score()).unwrap_or(Ordering::Equal)
}

/// Drop zero scores, sort descending (stable), and keep the top `limit`.
pub fn rank_results<'c>(
    mut results: Vec<SearchResult<'c>>,
    limit: usize,
) -> Vec<SearchResult<'c>> {
    results.retain(|r| r.score() > 0.0);
    results.sort_by(compare_results);
    results.truncate(limit);
    results
}
