// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Runtime contracts for ranking, navigation, and persisted state.
//!
//! Debug-mode assertions that state the properties the rest of the crate
//! relies on. They:
//!
//! 1. Are **zero-cost in release builds** (use `debug_assert!`)
//! 2. Fail **at the point of violation** during development and in tests
//! 3. Mirror the **testable properties** exactly
//!
//! # INVARIANTS (DO NOT REMOVE THESE CHECKS)
//!
//! | Contract Function              | Property                                    |
//! |--------------------------------|---------------------------------------------|
//! | `check_results_ranked`         | results capped and non-increasing by score  |
//! | `check_selection_consistent`   | selection never references a missing parent |
//! | `check_progress_in_range`      | every progress value is within 0..=100      |

use crate::navigation::{Selection, Tab, View, Viewer};
use crate::scoring::{ALL_TOKENS_MULTIPLIER, EXACT_MULTIPLIER, PARTIAL_MULTIPLIER};
use crate::storage::{ProgressMap, MAX_PROGRESS};
use crate::types::SearchResult;

// ============================================================================
// COMPILE-TIME ASSERTIONS (evaluated at build time)
// ============================================================================

/// The default tier table must keep exact above all-tokens above partial.
const _: () = {
    assert!(EXACT_MULTIPLIER > ALL_TOKENS_MULTIPLIER);
    assert!(ALL_TOKENS_MULTIPLIER > PARTIAL_MULTIPLIER);
    assert!(PARTIAL_MULTIPLIER > 0.0);
};

// ============================================================================
// RANKING CONTRACTS
// ============================================================================

/// Results are at most `limit`, all positive, sorted non-increasing by score.
///
/// # Panics (debug builds only)
/// Panics on an over-long list, a non-positive score, or an inversion.
#[inline]
pub fn check_results_ranked(results: &[SearchResult<'_>], limit: usize) {
    debug_assert!(
        results.len() <= limit,
        "Contract violation: {} results exceed the cap of {}",
        results.len(),
        limit
    );
    for (i, pair) in results.windows(2).enumerate() {
        debug_assert!(
            pair[0].score() >= pair[1].score(),
            "Contract violation: results[{}] score {} < results[{}] score {}",
            i,
            pair[0].score(),
            i + 1,
            pair[1].score()
        );
    }
    for result in results {
        debug_assert!(
            result.score() > 0.0,
            "Contract violation: zero-score result {:?} was not filtered",
            result.entity_id()
        );
    }
}

// ============================================================================
// NAVIGATION CONTRACTS
// ============================================================================

/// A restored selection is internally consistent.
///
/// - a semester or subject implies a department
/// - a non-default tab implies a subject
/// - a viewer payload implies an overlay; a viewer overlay implies its payload
/// - `sub`, `video`, and `pdf` views carry what they name
///
/// # Panics (debug builds only)
#[inline]
pub fn check_selection_consistent(selection: &Selection) {
    debug_assert!(
        selection.department_id.is_some()
            || (selection.semester.is_none() && selection.subject_id.is_none()),
        "Contract violation: semester or subject selected without a department: {:?}",
        selection
    );
    debug_assert!(
        selection.tab == Tab::Materials || selection.subject_id.is_some(),
        "Contract violation: tab {:?} set without a subject",
        selection.tab
    );

    match (&selection.viewer, selection.overlay) {
        (Some(viewer), overlay) => debug_assert!(
            overlay.map_or(false, |o| !o.is_viewer() || o == viewer.overlay()),
            "Contract violation: viewer {:?} shown under overlay {:?}",
            viewer,
            overlay
        ),
        (None, Some(overlay)) => debug_assert!(
            !overlay.is_viewer(),
            "Contract violation: {} overlay open with no payload",
            overlay
        ),
        (None, None) => {}
    }

    match selection.view {
        View::Sub => debug_assert!(
            selection.subject_id.is_some(),
            "Contract violation: sub view without a subject"
        ),
        View::Video => debug_assert!(
            matches!(selection.viewer, Some(Viewer::Video { .. })),
            "Contract violation: video view without a video"
        ),
        View::Pdf => debug_assert!(
            matches!(selection.viewer, Some(Viewer::Resource { .. })),
            "Contract violation: pdf view without a resource"
        ),
        View::Sem => debug_assert!(
            selection.semester.is_some(),
            "Contract violation: sem view without a semester"
        ),
        View::Dept => debug_assert!(
            selection.department_id.is_some(),
            "Contract violation: dept view without a department"
        ),
        View::Home | View::Bookmarks => debug_assert!(
            selection.department_id.is_none(),
            "Contract violation: {} view kept a department",
            selection.view.as_str()
        ),
    }
}

// ============================================================================
// STORAGE CONTRACTS
// ============================================================================

/// Every stored progress value is within 0..=100.
///
/// # Panics (debug builds only)
#[inline]
pub fn check_progress_in_range(progress: &ProgressMap) {
    for (subject_id, percent) in progress.iter() {
        debug_assert!(
            percent <= MAX_PROGRESS,
            "Contract violation: progress[{:?}] = {} exceeds {}",
            subject_id,
            percent,
            MAX_PROGRESS
        );
    }
}
