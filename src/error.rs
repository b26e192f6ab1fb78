// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Error types.
//!
//! Only operations that can meaningfully refuse have an error type. Search,
//! snapshot restore, and persisted reads never fail: they degrade to an empty
//! or home state and log through `tracing` instead.

use std::path::PathBuf;

/// Catalog loading or validation failure.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("failed to read catalog {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid catalog JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("duplicate department id {0:?}")]
    DuplicateDepartment(String),
    #[error("duplicate subject id {0:?}")]
    DuplicateSubject(String),
    #[error("video {video:?} in department {department:?} references unknown subject {subject:?}")]
    DanglingVideoSubject {
        department: String,
        video: String,
        subject: String,
    },
}

/// A navigation call named something the catalog does not contain, or was
/// issued from a view where it makes no sense. Nothing is pushed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NavigationError {
    #[error("unknown department {0:?}")]
    UnknownDepartment(String),
    #[error("unknown subject {subject:?} in department {department:?}")]
    UnknownSubject { department: String, subject: String },
    #[error("unknown video {0:?}")]
    UnknownVideo(String),
    #[error("unknown resource {resource:?} for subject {subject:?}")]
    UnknownResource { subject: String, resource: String },
    #[error("no department selected")]
    NoDepartment,
    #[error("no subject selected")]
    NoSubject,
    #[error("the {0} viewer opens with a payload, not as a modal")]
    ViewerNeedsPayload(String),
}

/// Writing persisted client state failed.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("storage I/O error for key {key:?}: {source}")]
    Io {
        key: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to serialize {key:?}: {source}")]
    Serialize {
        key: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("invalid storage key {0:?}")]
    InvalidKey(String),
}

/// Config file could not be loaded.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("tier multipliers must satisfy exact > allTokens > partial > 0")]
    TierOrder,
}
