// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Ranked catalog search.
//!
//! One pass over the catalog in its own order: each department, then its
//! subjects, then its videos. Every entity gets the best score among its
//! fields; subjects can add the semester boost on top. Zero scores drop out,
//! the rest are stably sorted and capped.
//!
//! Pure and synchronous: same query + same catalog = same list, every time.

pub mod debounce;
mod query;

pub use debounce::{Debouncer, SearchSession, DEFAULT_DEBOUNCE_MS};
pub use query::QueryTerms;

use crate::contracts::check_results_ranked;
use crate::scoring::ranking::rank_results;
use crate::scoring::{field_score, Field, RankingWeights, MAX_RESULTS};
use crate::types::{Catalog, Department, SearchResult, Subject, VideoLecture};

/// Search the catalog with the standard weights and the 20-result cap.
///
/// Empty or whitespace-only queries return an empty list.
pub fn search<'c>(query: &str, catalog: &'c Catalog) -> Vec<SearchResult<'c>> {
    search_with(query, catalog, &RankingWeights::default(), MAX_RESULTS)
}

/// Search with an explicit weight table and result cap.
pub fn search_with<'c>(
    query: &str,
    catalog: &'c Catalog,
    weights: &RankingWeights,
    max_results: usize,
) -> Vec<SearchResult<'c>> {
    let Some(terms) = QueryTerms::parse(query) else {
        return Vec::new();
    };

    let mut results = Vec::with_capacity(catalog.entity_count());
    for dept in &catalog.departments {
        results.push(SearchResult::Department {
            department: dept,
            score: score_department(dept, &terms, weights),
        });
        for subject in &dept.subjects {
            results.push(SearchResult::Subject {
                subject,
                department: dept,
                semester: subject.semester,
                score: score_subject(subject, &terms, weights),
            });
        }
        for video in &dept.videos {
            results.push(SearchResult::Video {
                video,
                department: dept,
                semester: video.semester,
                score: score_video(video, &terms, weights),
            });
        }
    }

    let ranked = rank_results(results, max_results);
    check_results_ranked(&ranked, max_results);
    ranked
}

/// max(name, description)
pub fn score_department(dept: &Department, terms: &QueryTerms, weights: &RankingWeights) -> f64 {
    let name = field_score(&dept.name, Field::DepartmentName, terms, weights);
    let description = field_score(&dept.description, Field::DepartmentDescription, terms, weights);
    name.max(description)
}

/// Title score, plus the semester boost when the query names this subject's
/// semester.
pub fn score_subject(subject: &Subject, terms: &QueryTerms, weights: &RankingWeights) -> f64 {
    let title = field_score(&subject.title, Field::SubjectTitle, terms, weights);
    if terms.names_semester(subject.semester) {
        title + weights.semester_boost
    } else {
        title
    }
}

/// max(title, instructor)
pub fn score_video(video: &VideoLecture, terms: &QueryTerms, weights: &RankingWeights) -> f64 {
    let title = field_score(&video.title, Field::VideoTitle, terms, weights);
    let instructor = field_score(&video.instructor, Field::VideoInstructor, terms, weights);
    title.max(instructor)
}
