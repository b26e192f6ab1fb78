// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The math behind search ranking.
//!
//! Every candidate field is scored by the first tier it satisfies, then
//! multiplied by the field's base weight. Tiers never add up: a field that
//! matches exactly scores the exact tier only, not exact + all-tokens.
//!
//! # Tiers
//!
//! | Tier        | Condition                                   | Multiplier           |
//! |-------------|---------------------------------------------|----------------------|
//! | Exact       | normalized field == normalized query        | 10                   |
//! | All tokens  | every query token is a substring            | 5                    |
//! | Partial     | at least one token is a substring           | 1 × matching tokens  |
//!
//! # Base weights
//!
//! | Field                  | Weight |
//! |------------------------|--------|
//! | Department name        | 100    |
//! | Subject title          | 80     |
//! | Video title            | 50     |
//! | Department description | 10     |
//! | Video instructor       | 10     |
//!
//! Matching is substring-only. There is no typo tolerance and no length
//! normalisation, so a long description matches as readily as a short title.
//! That is the ranking policy the portal ships with; change it through
//! `RankingWeights`, not by patching the tiers.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::search::QueryTerms;
use crate::utils::normalize;

// =============================================================================
// SCORING CONSTANTS
// =============================================================================

pub const DEPARTMENT_NAME_WEIGHT: f64 = 100.0;
pub const SUBJECT_TITLE_WEIGHT: f64 = 80.0;
pub const VIDEO_TITLE_WEIGHT: f64 = 50.0;
pub const DEPARTMENT_DESCRIPTION_WEIGHT: f64 = 10.0;
pub const VIDEO_INSTRUCTOR_WEIGHT: f64 = 10.0;

pub const EXACT_MULTIPLIER: f64 = 10.0;
pub const ALL_TOKENS_MULTIPLIER: f64 = 5.0;
pub const PARTIAL_MULTIPLIER: f64 = 1.0;

/// Added to a subject's score when the query names its semester (`s3`, `sem 3`).
pub const SEMESTER_BOOST: f64 = 20.0;

/// Result list cap.
pub const MAX_RESULTS: usize = 20;

// =============================================================================
// FIELDS AND TIERS
// =============================================================================

/// A scored text field of a catalog entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    DepartmentName,
    DepartmentDescription,
    SubjectTitle,
    VideoTitle,
    VideoInstructor,
}

/// Which tier a field matched. First tier wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchTier {
    Exact,
    AllTokens,
    /// Number of query tokens found in the field (at least one).
    Partial(usize),
}

/// Base weight per field.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FieldWeights {
    pub department_name: f64,
    pub department_description: f64,
    pub subject_title: f64,
    pub video_title: f64,
    pub video_instructor: f64,
}

impl Default for FieldWeights {
    fn default() -> Self {
        Self {
            department_name: DEPARTMENT_NAME_WEIGHT,
            department_description: DEPARTMENT_DESCRIPTION_WEIGHT,
            subject_title: SUBJECT_TITLE_WEIGHT,
            video_title: VIDEO_TITLE_WEIGHT,
            video_instructor: VIDEO_INSTRUCTOR_WEIGHT,
        }
    }
}

/// Multiplier per tier.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TierMultipliers {
    pub exact: f64,
    pub all_tokens: f64,
    pub partial: f64,
}

impl Default for TierMultipliers {
    fn default() -> Self {
        Self {
            exact: EXACT_MULTIPLIER,
            all_tokens: ALL_TOKENS_MULTIPLIER,
            partial: PARTIAL_MULTIPLIER,
        }
    }
}

/// The complete ranking policy. Every field defaults, so a config file only
/// needs to name what it overrides.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RankingWeights {
    pub fields: FieldWeights,
    pub tiers: TierMultipliers,
    pub semester_boost: f64,
}

impl Default for RankingWeights {
    fn default() -> Self {
        Self {
            fields: FieldWeights::default(),
            tiers: TierMultipliers::default(),
            semester_boost: SEMESTER_BOOST,
        }
    }
}

impl RankingWeights {
    /// Reject tier tables that would let a weaker match outrank a stronger one.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let tiers = &self.tiers;
        if tiers.exact > tiers.all_tokens && tiers.all_tokens > tiers.partial && tiers.partial > 0.0
        {
            Ok(())
        } else {
            Err(ConfigError::TierOrder)
        }
    }

    pub fn base_weight(&self, field: Field) -> f64 {
        match field {
            Field::DepartmentName => self.fields.department_name,
            Field::DepartmentDescription => self.fields.department_description,
            Field::SubjectTitle => self.fields.subject_title,
            Field::VideoTitle => self.fields.video_title,
            Field::VideoInstructor => self.fields.video_instructor,
        }
    }

    /// Multiplier for a tier, already scaled by the matching token count for
    /// partial matches.
    pub fn tier_factor(&self, tier: MatchTier) -> f64 {
        match tier {
            MatchTier::Exact => self.tiers.exact,
            MatchTier::AllTokens => self.tiers.all_tokens,
            MatchTier::Partial(matched) => self.tiers.partial * matched as f64,
        }
    }
}

/// Classify how a (normalized) candidate string matches the query.
pub fn match_tier(normalized_candidate: &str, query: &QueryTerms) -> Option<MatchTier> {
    if normalized_candidate.is_empty() {
        return None;
    }
    if normalized_candidate == query.normalized() {
        return Some(MatchTier::Exact);
    }

    let matched = query
        .tokens()
        .iter()
        .filter(|token| normalized_candidate.contains(token.as_str()))
        .count();

    if matched == 0 {
        None
    } else if matched == query.tokens().len() {
        Some(MatchTier::AllTokens)
    } else {
        Some(MatchTier::Partial(matched))
    }
}

/// Score one field: `base_weight × tier_factor`, or 0 when nothing matches.
pub fn field_score(
    candidate: &str,
    field: Field,
    query: &QueryTerms,
    weights: &RankingWeights,
) -> f64 {
    match match_tier(&normalize(candidate), query) {
        Some(tier) => weights.base_weight(field) * weights.tier_factor(tier),
        None => 0.0,
    }
}
