// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Per-subject study progress, 0 to 100.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

pub const MAX_PROGRESS: u8 = 100;

/// `subjectId → percent`. Stored under the `progress` key as a JSON object.
///
/// Decoding is per entry: numbers are rounded and clamped into range, anything
/// else is dropped, and the remaining entries are kept.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "BTreeMap<String, Value>", into = "BTreeMap<String, u8>")]
pub struct ProgressMap {
    entries: BTreeMap<String, u8>,
}

impl ProgressMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, subject_id: &str) -> Option<u8> {
        self.entries.get(subject_id).copied()
    }

    /// Record progress for a subject, clamped to 100. Returns the stored value.
    pub fn set(&mut self, subject_id: impl Into<String>, percent: u8) -> u8 {
        let percent = percent.min(MAX_PROGRESS);
        self.entries.insert(subject_id.into(), percent);
        percent
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u8)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), *v))
    }

    /// Fold in another tab's progress: per subject, keep the incoming value
    /// only if it is strictly greater. Never lowers anything.
    ///
    /// Returns how many subjects changed.
    pub fn merge_incoming(&mut self, incoming: &ProgressMap) -> usize {
        let mut changed = 0;
        for (subject_id, &value) in &incoming.entries {
            let local = self.entries.get(subject_id).copied();
            if local.map_or(true, |local| value > local) {
                self.entries.insert(subject_id.clone(), value);
                changed += 1;
            }
        }
        changed
    }
}

impl From<BTreeMap<String, Value>> for ProgressMap {
    fn from(raw: BTreeMap<String, Value>) -> Self {
        let entries = raw
            .into_iter()
            .filter_map(|(subject_id, value)| match percent_of(&value) {
                Some(percent) => Some((subject_id, percent)),
                None => {
                    debug!(subject_id = %subject_id, value = %value, "dropping non-numeric progress");
                    None
                }
            })
            .collect();
        ProgressMap { entries }
    }
}

impl From<ProgressMap> for BTreeMap<String, u8> {
    fn from(map: ProgressMap) -> Self {
        map.entries
    }
}

impl FromIterator<(String, u8)> for ProgressMap {
    fn from_iter<I: IntoIterator<Item = (String, u8)>>(iter: I) -> Self {
        let mut map = ProgressMap::new();
        for (subject_id, percent) in iter {
            map.set(subject_id, percent);
        }
        map
    }
}

fn percent_of(value: &Value) -> Option<u8> {
    let n = value.as_f64().filter(|n| n.is_finite())?;
    Some(n.round().clamp(0.0, f64::from(MAX_PROGRESS)) as u8)
}
