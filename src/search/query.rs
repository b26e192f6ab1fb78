// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Query parsing: normalized text, tokens, and semester shorthands.
//!
//! Parsing happens once per query; every field is then scored against the
//! same `QueryTerms`. Semester shorthands (`s3`, `sem3`, `sem 3`) are detected
//! here but stay in the token list, so `s3` still matches a title containing
//! "s3" like any other token.

use crate::types::Semester;
use crate::utils::normalize;

/// A parsed, non-empty search query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryTerms {
    normalized: String,
    tokens: Vec<String>,
    semesters: Vec<Semester>,
}

impl QueryTerms {
    /// Parse a raw query. Returns `None` for empty or whitespace-only input.
    pub fn parse(raw: &str) -> Option<Self> {
        let normalized = normalize(raw);
        if normalized.is_empty() {
            return None;
        }

        let tokens: Vec<String> = normalized.split(' ').map(str::to_string).collect();
        let semesters = semester_shorthands(&tokens);

        Some(QueryTerms {
            normalized,
            tokens,
            semesters,
        })
    }

    /// Lowercased, whitespace-collapsed query.
    pub fn normalized(&self) -> &str {
        &self.normalized
    }

    /// Non-empty whitespace-separated tokens, in query order.
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    /// Semesters named by shorthand anywhere in the query.
    pub fn semesters(&self) -> &[Semester] {
        &self.semesters
    }

    pub fn names_semester(&self, semester: Semester) -> bool {
        self.semesters.contains(&semester)
    }
}

/// Recognize `s1`..`s6`, `sem1`..`sem6` and the two-token `sem 1`..`sem 6`.
fn semester_shorthands(tokens: &[String]) -> Vec<Semester> {
    let mut found = Vec::new();
    let mut push = |semester: Option<Semester>| {
        if let Some(semester) = semester {
            if !found.contains(&semester) {
                found.push(semester);
            }
        }
    };

    for (i, token) in tokens.iter().enumerate() {
        if let Some(rest) = token.strip_prefix("sem") {
            if rest.is_empty() {
                push(tokens.get(i + 1).and_then(|next| single_digit_semester(next)));
            } else {
                push(single_digit_semester(rest));
            }
        } else if let Some(rest) = token.strip_prefix('s') {
            push(single_digit_semester(rest));
        }
    }
    found
}

fn single_digit_semester(digits: &str) -> Option<Semester> {
    if digits.len() != 1 {
        return None;
    }
    digits.parse::<u8>().ok().and_then(Semester::from_number)
}
