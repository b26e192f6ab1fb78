// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Search-as-you-type without scoring every keystroke.
//!
//! Keystrokes update the query text immediately. Scoring waits until the
//! input has been quiet for `quiet_ms`; each new keystroke re-arms the
//! deadline and replaces the pending query, so a stale query is never scored.
//!
//! Time is passed in by the caller as monotonic milliseconds (e.g. the
//! browser's `performance.now()`), which keeps this module free of clocks and
//! timers and makes it deterministic under test.

use tracing::debug;

use crate::scoring::{RankingWeights, MAX_RESULTS};
use crate::error::ConfigError;
use crate::search::search_with;
use crate::types::{Catalog, SearchHit};

/// Quiet period before a query is scored.
pub const DEFAULT_DEBOUNCE_MS: u64 = 300;

#[derive(Debug, Clone, PartialEq, Eq)]
struct Pending {
    query: String,
    due_at: u64,
}

/// Holds the latest query until input goes quiet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Debouncer {
    quiet_ms: u64,
    pending: Option<Pending>,
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new(DEFAULT_DEBOUNCE_MS)
    }
}

impl Debouncer {
    pub fn new(quiet_ms: u64) -> Self {
        Self {
            quiet_ms,
            pending: None,
        }
    }

    pub fn quiet_ms(&self) -> u64 {
        self.quiet_ms
    }

    /// Record a keystroke. Replaces any pending query and re-arms the deadline.
    pub fn input(&mut self, query: impl Into<String>, now_ms: u64) {
        self.pending = Some(Pending {
            query: query.into(),
            due_at: now_ms.saturating_add(self.quiet_ms),
        });
    }

    /// Take the pending query if its quiet period has elapsed.
    ///
    /// Yields each armed query at most once.
    pub fn poll(&mut self, now_ms: u64) -> Option<String> {
        match &self.pending {
            Some(pending) if now_ms >= pending.due_at => self.pending.take().map(|p| p.query),
            _ => None,
        }
    }

    /// Drop the pending query without scoring it.
    pub fn cancel(&mut self) {
        self.pending = None;
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// When the pending query becomes due, if any.
    pub fn due_at(&self) -> Option<u64> {
        self.pending.as_ref().map(|p| p.due_at)
    }
}

/// The search box: raw query text, its debouncer, and the latest results.
///
/// Results are owned `SearchHit`s so the session can live next to the catalog
/// it searches (inside a navigator) without borrowing it.
#[derive(Debug, Clone)]
pub struct SearchSession {
    query: String,
    debouncer: Debouncer,
    hits: Vec<SearchHit>,
    weights: RankingWeights,
    max_results: usize,
}

impl Default for SearchSession {
    fn default() -> Self {
        Self::with_weights(RankingWeights::default(), MAX_RESULTS, DEFAULT_DEBOUNCE_MS)
    }
}

impl SearchSession {
    /// Fails with `ConfigError::TierOrder` when the weights invert the tiers.
    pub fn new(
        weights: RankingWeights,
        max_results: usize,
        debounce_ms: u64,
    ) -> Result<Self, ConfigError> {
        weights.validate()?;
        Ok(Self::with_weights(weights, max_results, debounce_ms))
    }

    fn with_weights(weights: RankingWeights, max_results: usize, debounce_ms: u64) -> Self {
        Self {
            query: String::new(),
            debouncer: Debouncer::new(debounce_ms),
            hits: Vec::new(),
            weights,
            max_results,
        }
    }

    /// Raw query text as typed.
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Results for the last query that was actually scored.
    pub fn hits(&self) -> &[SearchHit] {
        &self.hits
    }

    pub fn is_pending(&self) -> bool {
        self.debouncer.is_pending()
    }

    /// A keystroke. Blank input clears results at once; anything else waits
    /// for the debounce deadline.
    pub fn type_query(&mut self, query: impl Into<String>, now_ms: u64) {
        self.query = query.into();
        if self.query.trim().is_empty() {
            self.debouncer.cancel();
            self.hits.clear();
        } else {
            self.debouncer.input(self.query.clone(), now_ms);
        }
    }

    /// Score the pending query if it is due. Returns `true` when results changed.
    pub fn tick(&mut self, now_ms: u64, catalog: &Catalog) -> bool {
        let Some(query) = self.debouncer.poll(now_ms) else {
            return false;
        };
        self.hits = search_with(&query, catalog, &self.weights, self.max_results)
            .iter()
            .map(SearchHit::from)
            .collect();
        debug!(query = %query, hits = self.hits.len(), "scored debounced query");
        true
    }

    /// Empty query, no pending work, no results.
    pub fn clear(&mut self) {
        self.query.clear();
        self.debouncer.cancel();
        self.hits.clear();
    }
}
