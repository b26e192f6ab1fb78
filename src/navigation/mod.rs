// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! View-state navigation kept in lockstep with a history stack.
//!
//! - `snapshot`: the serializable unit on the stack, plus its lenient decoder
//!   and a query-string encoding for reload on hosts without history state
//! - `history`: the stack itself, in memory or journaled for a host
//! - `selection`: what the current view shows, derived from one snapshot
//! - `navigator`: the state machine tying them together

pub mod history;
mod navigator;
pub mod selection;
pub mod snapshot;

pub use history::{HistoryOp, HistoryStack, JournalHistory, MemoryHistory};
pub use navigator::Navigator;
pub use selection::{Selection, Viewer};
pub use snapshot::{NavigationSnapshot, OverlayKind, Tab, View};
