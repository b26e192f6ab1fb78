// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Catalog loading, validation, and id lookups.
//!
//! Lookups are linear scans. Catalogs hold a handful of departments with a
//! few dozen subjects each, so an index would cost more to build than it saves.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::CatalogError;
use crate::types::{Catalog, Department, StudyResource, Subject, VideoLecture};

/// Catalogs ship either as a bare department array or wrapped in an object.
#[derive(Deserialize)]
#[serde(untagged)]
enum CatalogPayload {
    Bare(Vec<Department>),
    Wrapped(Catalog),
}

impl Catalog {
    pub fn new(departments: Vec<Department>) -> Self {
        Catalog { departments }
    }

    /// Parse and validate catalog JSON.
    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let catalog = match serde_json::from_str::<CatalogPayload>(json)? {
            CatalogPayload::Bare(departments) => Catalog::new(departments),
            CatalogPayload::Wrapped(catalog) => catalog,
        };
        catalog.validate()?;
        Ok(catalog)
    }

    /// Read, parse, and validate a catalog file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&raw)
    }

    /// Check id uniqueness and video → subject references.
    pub fn validate(&self) -> Result<(), CatalogError> {
        let mut dept_ids = HashSet::new();
        let mut subject_ids = HashSet::new();

        for dept in &self.departments {
            if !dept_ids.insert(dept.id.as_str()) {
                return Err(CatalogError::DuplicateDepartment(dept.id.clone()));
            }
            for subject in &dept.subjects {
                if !subject_ids.insert(subject.id.as_str()) {
                    return Err(CatalogError::DuplicateSubject(subject.id.clone()));
                }
            }
            for video in &dept.videos {
                if let Some(subject_id) = &video.subject_id {
                    if !dept.subjects.iter().any(|s| &s.id == subject_id) {
                        return Err(CatalogError::DanglingVideoSubject {
                            department: dept.id.clone(),
                            video: video.id.clone(),
                            subject: subject_id.clone(),
                        });
                    }
                }
            }
        }
        Ok(())
    }

    pub fn department(&self, id: &str) -> Option<&Department> {
        self.departments.iter().find(|d| d.id == id)
    }

    pub fn subject<'a>(&self, dept: &'a Department, id: &str) -> Option<&'a Subject> {
        dept.subjects.iter().find(|s| s.id == id)
    }

    pub fn video<'a>(&self, dept: &'a Department, id: &str) -> Option<&'a VideoLecture> {
        dept.videos.iter().find(|v| v.id == id)
    }

    /// Find a video in any department. Used when a deep link lost its `deptId`.
    pub fn find_video(&self, id: &str) -> Option<(&Department, &VideoLecture)> {
        self.departments
            .iter()
            .find_map(|d| d.videos.iter().find(|v| v.id == id).map(|v| (d, v)))
    }

    /// Find a subject in any department. Used for bookmarks saved without a `deptId`.
    pub fn find_subject(&self, id: &str) -> Option<(&Department, &Subject)> {
        self.departments
            .iter()
            .find_map(|d| d.subjects.iter().find(|s| s.id == id).map(|s| (d, s)))
    }

    pub fn resource<'a>(&self, subject: &'a Subject, id: &str) -> Option<&'a StudyResource> {
        subject.resources.iter().find(|r| r.id == id)
    }

    /// Find a resource anywhere in a department, returning its subject too.
    pub fn find_resource<'a>(
        &self,
        dept: &'a Department,
        id: &str,
    ) -> Option<(&'a Subject, &'a StudyResource)> {
        dept.subjects
            .iter()
            .find_map(|s| s.resources.iter().find(|r| r.id == id).map(|r| (s, r)))
    }

    /// Find a resource anywhere in the catalog.
    pub fn locate_resource(&self, id: &str) -> Option<(&Department, &Subject, &StudyResource)> {
        self.departments
            .iter()
            .find_map(|d| self.find_resource(d, id).map(|(s, r)| (d, s, r)))
    }

    /// Total number of searchable entities (departments + subjects + videos).
    pub fn entity_count(&self) -> usize {
        self.departments
            .iter()
            .map(|d| 1 + d.subjects.len() + d.videos.len())
            .sum()
    }
}
