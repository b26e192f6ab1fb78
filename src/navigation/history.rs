// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The history stack, abstracted.
//!
//! A browser's history is an ordered stack of serializable states with
//! push, replace, and back/forward that report the newly current state
//! (`popstate`). `HistoryStack` captures exactly that, so the navigator can
//! run against:
//!
//! - `MemoryHistory`: an explicit in-memory stack. Back/forward answer
//!   synchronously. Used natively and in tests.
//! - `JournalHistory`: records operations for a host that owns the real
//!   stack (the browser via wasm). Back/forward answer `None`; the host
//!   delivers the popped state later through `Navigator::on_pop_state`.
//!
//! Both are read-modify-write without locks. That is only sound because the
//! host dispatches history events on a single thread; keep it that way.

use serde::Serialize;
use tracing::debug;

use super::snapshot::NavigationSnapshot;

pub trait HistoryStack {
    /// Add an entry after the current one, discarding any forward entries.
    fn push(&mut self, snapshot: NavigationSnapshot);

    /// Overwrite the current entry in place.
    fn replace(&mut self, snapshot: NavigationSnapshot);

    /// Step back. `Some(state)` when the stack can answer synchronously.
    fn back(&mut self) -> Option<NavigationSnapshot>;

    /// Step forward. `Some(state)` when the stack can answer synchronously.
    fn forward(&mut self) -> Option<NavigationSnapshot>;

    /// State of the current entry, if the stack knows it.
    fn current(&self) -> Option<&NavigationSnapshot>;

    /// Whether a back step has somewhere to go.
    fn can_go_back(&self) -> bool;
}

// =============================================================================
// IN-MEMORY STACK
// =============================================================================

/// Explicit stack with a cursor, mirroring browser semantics.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryHistory {
    entries: Vec<NavigationSnapshot>,
    cursor: usize,
}

impl MemoryHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Index of the current entry.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn entries(&self) -> &[NavigationSnapshot] {
        &self.entries
    }

    pub fn can_go_forward(&self) -> bool {
        self.cursor + 1 < self.entries.len()
    }
}

impl HistoryStack for MemoryHistory {
    fn push(&mut self, snapshot: NavigationSnapshot) {
        if !self.entries.is_empty() {
            self.entries.truncate(self.cursor + 1);
        }
        self.entries.push(snapshot);
        self.cursor = self.entries.len() - 1;
    }

    fn replace(&mut self, snapshot: NavigationSnapshot) {
        match self.entries.get_mut(self.cursor) {
            Some(entry) => *entry = snapshot,
            None => {
                self.entries.push(snapshot);
                self.cursor = self.entries.len() - 1;
            }
        }
    }

    fn back(&mut self) -> Option<NavigationSnapshot> {
        if !self.can_go_back() {
            return None;
        }
        self.cursor -= 1;
        self.entries.get(self.cursor).cloned()
    }

    fn forward(&mut self) -> Option<NavigationSnapshot> {
        if !self.can_go_forward() {
            return None;
        }
        self.cursor += 1;
        self.entries.get(self.cursor).cloned()
    }

    fn current(&self) -> Option<&NavigationSnapshot> {
        self.entries.get(self.cursor)
    }

    fn can_go_back(&self) -> bool {
        self.cursor > 0
    }
}

// =============================================================================
// JOURNAL (host-owned stack)
// =============================================================================

/// One operation for the host to apply to its real history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "op", content = "state", rename_all = "lowercase")]
pub enum HistoryOp {
    Push(NavigationSnapshot),
    Replace(NavigationSnapshot),
    Back,
    Forward,
}

/// Queues operations instead of applying them.
///
/// The host owns the real stack, so the journal never knows the current
/// entry and leaves every back step for the host to judge.
#[derive(Debug, Clone, Default)]
pub struct JournalHistory {
    ops: Vec<HistoryOp>,
}

impl JournalHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Hand pending operations to the host, oldest first.
    pub fn drain(&mut self) -> Vec<HistoryOp> {
        std::mem::take(&mut self.ops)
    }

    pub fn pending(&self) -> &[HistoryOp] {
        &self.ops
    }
}

impl HistoryStack for JournalHistory {
    fn push(&mut self, snapshot: NavigationSnapshot) {
        debug!(view = snapshot.view.as_str(), "journal push");
        self.ops.push(HistoryOp::Push(snapshot));
    }

    fn replace(&mut self, snapshot: NavigationSnapshot) {
        debug!(view = snapshot.view.as_str(), "journal replace");
        self.ops.push(HistoryOp::Replace(snapshot));
    }

    fn back(&mut self) -> Option<NavigationSnapshot> {
        self.ops.push(HistoryOp::Back);
        None
    }

    fn forward(&mut self) -> Option<NavigationSnapshot> {
        self.ops.push(HistoryOp::Forward);
        None
    }

    fn current(&self) -> Option<&NavigationSnapshot> {
        None
    }

    fn can_go_back(&self) -> bool {
        true
    }
}
