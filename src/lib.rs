// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Search and navigation core for the Polytechnic study portal.
//!
//! Three pieces with real logic, everything else (rendering, ads, the AI
//! tutor) is the host's business:
//!
//! - **Ranked search**: tiered substring scoring over departments, subjects,
//!   and videos, with a semester boost, capped at 20 results.
//! - **Navigation**: a state machine that keeps view selection in lockstep
//!   with a history stack, so back, forward, and reload rebuild the exact view.
//! - **Persisted state**: progress and bookmarks, with the cross-tab merge
//!   policy (progress: best wins; bookmarks: last writer wins).
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌─────────────────┐
//! │  types.rs   │────▶│  search/     │────▶│  SearchSession  │
//! │  catalog.rs │     │  scoring/    │     │  (debounced)    │
//! │ (Department,│     │ (tiers,      │     └────────┬────────┘
//! │  Subject,…) │     │  ranking)    │              │ owned by
//! └──────┬──────┘     └──────────────┘              ▼
//!        │ id lookups                    ┌─────────────────────┐
//!        └──────────────────────────────▶│  navigation/        │
//!                                        │  Navigator<History> │
//!                                        │  snapshot ⇄ history │
//!                                        └─────────────────────┘
//!  storage/  PersistedState { progress, bookmarks } ⇄ PersistedStore
//! ```
//!
//! # Usage
//!
//! ```
//! use polyportal::{search, testing::sample_catalog};
//!
//! let catalog = sample_catalog();
//! let results = search("math", &catalog);
//! assert_eq!(results[0].title(), "Mathematics I");
//! assert_eq!(results[0].score(), 400.0);
//! ```
//!
//! ```
//! use polyportal::navigation::{MemoryHistory, Navigator, View};
//! use polyportal::testing::sample_catalog;
//!
//! let mut nav = Navigator::new(sample_catalog(), MemoryHistory::new());
//! nav.mount(None);
//! nav.select_department("ce").unwrap();
//! nav.select_subject("ce_1002").unwrap();
//! assert_eq!(nav.selection().view, View::Sub);
//!
//! nav.back();
//! assert_eq!(nav.selection().view, View::Dept);
//! ```

mod catalog;
pub mod config;
pub mod contracts;
pub mod error;
pub mod navigation;
pub mod scoring;
pub mod search;
pub mod storage;
pub mod testing;
mod types;
mod utils;

#[cfg(feature = "wasm")]
mod wasm;

pub use config::{PortalConfig, SearchSettings};
pub use error::{CatalogError, ConfigError, NavigationError, StorageError};
pub use navigation::{
    HistoryOp, HistoryStack, JournalHistory, MemoryHistory, NavigationSnapshot, Navigator,
    OverlayKind, Selection, Tab, View, Viewer,
};
pub use scoring::{field_score, match_tier, Field, MatchTier, RankingWeights, MAX_RESULTS};
pub use search::{search, search_with, Debouncer, QueryTerms, SearchSession};
pub use storage::{
    BookmarkItem, BookmarkKind, BookmarkList, FileStore, MemoryStore, PersistedState,
    PersistedStore, ProgressMap, StorageChange, MAX_PROGRESS,
};
pub use types::{
    Catalog, Department, ResourceKind, SearchHit, SearchResult, Semester, StudyResource, Subject,
    VideoLecture,
};
pub use utils::normalize;
