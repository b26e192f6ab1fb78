// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Portal configuration.
//!
//! Every field has a default, so an empty object (or no file at all) gives the
//! standard ranking policy:
//!
//! ```json
//! {
//!   "ranking": {
//!     "fields": { "departmentName": 100, "subjectTitle": 80 },
//!     "tiers": { "exact": 10, "allTokens": 5, "partial": 1 },
//!     "semesterBoost": 20
//!   },
//!   "search": { "maxResults": 20, "debounceMs": 300 }
//! }
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::scoring::{RankingWeights, MAX_RESULTS};
use crate::search::{SearchSession, DEFAULT_DEBOUNCE_MS};

/// Search box behaviour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SearchSettings {
    /// Result list cap.
    pub max_results: usize,
    /// Quiet period before a typed query is scored.
    pub debounce_ms: u64,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            max_results: MAX_RESULTS,
            debounce_ms: DEFAULT_DEBOUNCE_MS,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PortalConfig {
    pub ranking: RankingWeights,
    pub search: SearchSettings,
}

impl PortalConfig {
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: PortalConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&raw)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.ranking.validate()
    }

    /// A search box using this config's weights, cap, and debounce.
    pub fn search_session(&self) -> Result<SearchSession, ConfigError> {
        SearchSession::new(self.ranking, self.search.max_results, self.search.debounce_ms)
    }
}
