// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! WebAssembly bindings for the browser.
//!
//! The browser owns the real history stack and `localStorage`; this side owns
//! the ranking, the state machine, and the merge policy. The page wires them:
//!
//! ```js
//! const app = new PortalApp(catalogJson);
//! app.mount(history.state);
//! const flush = () => {
//!     for (const { op, state } of app.drainHistoryOps()) {
//!         if (op === "push") history.pushState(state, "");
//!         else if (op === "replace") history.replaceState(state, "");
//!         else if (op === "back") history.back();
//!         else if (op === "forward") history.forward();
//!     }
//! };
//! flush();
//! window.addEventListener("popstate", (e) => app.onPopState(e.state));
//!
//! app.selectDepartment("ce"); flush();
//! render(app.selection());
//! ```
//!
//! Values cross the boundary as plain JS objects (JSON-compatible encoding),
//! so history states can be handed to `pushState` unchanged.

use js_sys::Date;
use serde::Serialize;
use serde_json::Value;
use serde_wasm_bindgen::{from_value, Serializer};
use wasm_bindgen::prelude::*;

use crate::config::PortalConfig;
use crate::navigation::{JournalHistory, Navigator, OverlayKind, Tab};
use crate::search::search_with;
use crate::storage::{
    BookmarkItem, MemoryStore, PersistedState, PersistedStore, StorageChange, BOOKMARKS_KEY,
    PROGRESS_KEY,
};
use crate::types::{Catalog, SearchHit, Semester};

fn to_js<T: Serialize + ?Sized>(value: &T) -> Result<JsValue, JsValue> {
    value
        .serialize(&Serializer::json_compatible())
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

fn js_err(e: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&e.to_string())
}

fn load(catalog_json: &str, config_json: Option<String>) -> Result<(Catalog, PortalConfig), JsValue> {
    let catalog = Catalog::from_json_str(catalog_json).map_err(js_err)?;
    let config = match config_json {
        Some(raw) => PortalConfig::from_json_str(&raw).map_err(js_err)?,
        None => PortalConfig::default(),
    };
    Ok((catalog, config))
}

/// History state as handed over by the browser. `undefined`, `null`, and
/// anything that does not decode are all "no state".
fn history_state(state: JsValue) -> Option<Value> {
    if state.is_undefined() || state.is_null() {
        return None;
    }
    from_value(state).ok()
}

// =============================================================================
// SEARCH ONLY
// =============================================================================

/// Stateless ranked search over a catalog.
#[wasm_bindgen]
pub struct PortalSearch {
    catalog: Catalog,
    config: PortalConfig,
}

#[wasm_bindgen]
impl PortalSearch {
    #[wasm_bindgen(constructor)]
    pub fn new(catalog_json: &str, config_json: Option<String>) -> Result<PortalSearch, JsValue> {
        let (catalog, config) = load(catalog_json, config_json)?;
        Ok(PortalSearch { catalog, config })
    }

    /// Ranked hits, best first. Empty query ⇒ empty array.
    #[wasm_bindgen]
    pub fn search(&self, query: &str, limit: Option<usize>) -> Result<JsValue, JsValue> {
        let limit = limit.unwrap_or(self.config.search.max_results);
        let hits: Vec<SearchHit> = search_with(query, &self.catalog, &self.config.ranking, limit)
            .iter()
            .map(SearchHit::from)
            .collect();
        to_js(&hits)
    }

    #[wasm_bindgen(js_name = "entityCount")]
    pub fn entity_count(&self) -> usize {
        self.catalog.entity_count()
    }
}

// =============================================================================
// NAVIGATION + SEARCH BOX
// =============================================================================

#[wasm_bindgen]
pub struct PortalApp {
    nav: Navigator<JournalHistory>,
}

#[wasm_bindgen]
impl PortalApp {
    #[wasm_bindgen(constructor)]
    pub fn new(catalog_json: &str, config_json: Option<String>) -> Result<PortalApp, JsValue> {
        let (catalog, config) = load(catalog_json, config_json)?;
        let search = config.search_session().map_err(js_err)?;
        let nav = Navigator::with_search(catalog, JournalHistory::new(), search);
        Ok(PortalApp { nav })
    }

    /// First render, with `history.state` as found on load.
    #[wasm_bindgen]
    pub fn mount(&mut self, state: JsValue) {
        self.nav.mount(history_state(state).as_ref());
    }

    #[wasm_bindgen(js_name = "onPopState")]
    pub fn on_pop_state(&mut self, state: JsValue) {
        self.nav.on_pop_state(history_state(state).as_ref());
    }

    /// History operations the page must apply, oldest first.
    #[wasm_bindgen(js_name = "drainHistoryOps")]
    pub fn drain_history_ops(&mut self) -> Result<JsValue, JsValue> {
        to_js(&self.nav.history_mut().drain())
    }

    #[wasm_bindgen]
    pub fn selection(&self) -> Result<JsValue, JsValue> {
        to_js(self.nav.selection())
    }

    /// Current view as a query string, for a shareable URL.
    #[wasm_bindgen(js_name = "deepLink")]
    pub fn deep_link(&self) -> String {
        self.nav.selection().snapshot().to_query_string()
    }

    #[wasm_bindgen(js_name = "goHome")]
    pub fn go_home(&mut self) {
        self.nav.go_home();
    }

    #[wasm_bindgen(js_name = "openBookmarks")]
    pub fn open_bookmarks(&mut self) {
        self.nav.open_bookmarks();
    }

    #[wasm_bindgen(js_name = "openBookmark")]
    pub fn open_bookmark(&mut self, item: JsValue) -> Result<(), JsValue> {
        let item: BookmarkItem = from_value(item).map_err(js_err)?;
        self.nav.open_bookmark(&item).map_err(js_err)
    }

    #[wasm_bindgen(js_name = "selectDepartment")]
    pub fn select_department(&mut self, id: &str) -> Result<(), JsValue> {
        self.nav.select_department(id).map_err(js_err)
    }

    /// Accepts any semester label the catalog would (`"Semester 3"`, `"s3"`).
    #[wasm_bindgen(js_name = "selectSemester")]
    pub fn select_semester(&mut self, label: &str) -> Result<(), JsValue> {
        let semester = Semester::parse(label)
            .ok_or_else(|| js_err(format!("unrecognized semester {label:?}")))?;
        self.nav.select_semester(semester).map_err(js_err)
    }

    #[wasm_bindgen(js_name = "selectSubject")]
    pub fn select_subject(&mut self, id: &str) -> Result<(), JsValue> {
        self.nav.select_subject(id).map_err(js_err)
    }

    #[wasm_bindgen(js_name = "setTab")]
    pub fn set_tab(&mut self, tab: &str) -> Result<(), JsValue> {
        let tab = Tab::parse(tab).ok_or_else(|| js_err(format!("unknown tab {tab:?}")))?;
        self.nav.set_tab(tab).map_err(js_err)
    }

    #[wasm_bindgen(js_name = "openVideo")]
    pub fn open_video(&mut self, id: &str) -> Result<(), JsValue> {
        self.nav.open_video(id).map_err(js_err)
    }

    #[wasm_bindgen(js_name = "openResource")]
    pub fn open_resource(&mut self, id: &str) -> Result<(), JsValue> {
        self.nav.open_resource(id).map_err(js_err)
    }

    #[wasm_bindgen(js_name = "openModal")]
    pub fn open_modal(&mut self, name: &str) -> Result<(), JsValue> {
        let kind =
            OverlayKind::parse(name).ok_or_else(|| js_err(format!("unknown overlay {name:?}")))?;
        self.nav.open_modal(kind).map_err(js_err)
    }

    /// Queues a history back when an overlay is open.
    #[wasm_bindgen(js_name = "closeOverlay")]
    pub fn close_overlay(&mut self) -> bool {
        self.nav.close_overlay()
    }

    /// A keystroke in the search box.
    #[wasm_bindgen(js_name = "typeQuery")]
    pub fn type_query(&mut self, query: &str) {
        self.nav.type_query(query, Date::now() as u64);
    }

    /// Call from a timer; returns `true` when new results are ready.
    #[wasm_bindgen]
    pub fn tick(&mut self) -> bool {
        self.nav.tick(Date::now() as u64)
    }

    #[wasm_bindgen(js_name = "searchResults")]
    pub fn search_results(&self) -> Result<JsValue, JsValue> {
        to_js(self.nav.search().hits())
    }
}

// =============================================================================
// PERSISTED STATE
// =============================================================================

/// Progress and bookmarks mirrored from `localStorage`.
///
/// The page reads the two keys, hands them over raw, and writes back
/// whatever `progressJson()`/`bookmarksJson()` return after a change.
#[wasm_bindgen]
pub struct PortalStorage {
    state: PersistedState,
}

#[wasm_bindgen]
impl PortalStorage {
    #[wasm_bindgen(constructor)]
    pub fn new(progress: Option<String>, bookmarks: Option<String>) -> Result<PortalStorage, JsValue> {
        let mut store = MemoryStore::new();
        if let Some(raw) = progress {
            store.write(PROGRESS_KEY, &raw).map_err(js_err)?;
        }
        if let Some(raw) = bookmarks {
            store.write(BOOKMARKS_KEY, &raw).map_err(js_err)?;
        }
        Ok(PortalStorage {
            state: PersistedState::load(&store),
        })
    }

    /// Feed a `storage` event from another tab. Returns which key changed
    /// (`"progress"`, `"bookmarks"`) or `undefined`.
    #[wasm_bindgen(js_name = "applyStorageEvent")]
    pub fn apply_storage_event(&mut self, key: &str, new_value: Option<String>) -> Option<String> {
        match self.state.apply_storage_event(key, new_value.as_deref()) {
            StorageChange::Progress(0) | StorageChange::Ignored => None,
            StorageChange::Progress(_) => Some(PROGRESS_KEY.to_string()),
            StorageChange::Bookmarks => Some(BOOKMARKS_KEY.to_string()),
        }
    }

    #[wasm_bindgen(js_name = "setProgress")]
    pub fn set_progress(&mut self, subject_id: &str, percent: u8) -> u8 {
        self.state.progress.set(subject_id, percent)
    }

    #[wasm_bindgen(js_name = "progressOf")]
    pub fn progress_of(&self, subject_id: &str) -> Option<u8> {
        self.state.progress.get(subject_id)
    }

    /// Returns whether the item is bookmarked afterwards.
    #[wasm_bindgen(js_name = "toggleBookmark")]
    pub fn toggle_bookmark(&mut self, item: JsValue) -> Result<bool, JsValue> {
        let item: BookmarkItem = from_value(item).map_err(js_err)?;
        Ok(self.state.bookmarks.toggle(item))
    }

    #[wasm_bindgen(js_name = "isBookmarked")]
    pub fn is_bookmarked(&self, id: &str) -> bool {
        self.state.bookmarks.contains(id)
    }

    #[wasm_bindgen]
    pub fn bookmarks(&self) -> Result<JsValue, JsValue> {
        to_js(self.state.bookmarks.items())
    }

    #[wasm_bindgen(js_name = "progressJson")]
    pub fn progress_json(&self) -> Result<String, JsValue> {
        serde_json::to_string(&self.state.progress).map_err(js_err)
    }

    #[wasm_bindgen(js_name = "bookmarksJson")]
    pub fn bookmarks_json(&self) -> Result<String, JsValue> {
        serde_json::to_string(&self.state.bookmarks).map_err(js_err)
    }
}
