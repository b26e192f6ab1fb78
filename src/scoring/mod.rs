// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Scoring and ranking: how search results get their numbers.
//!
//! `core` holds the weight table and the per-field tier logic; `ranking`
//! turns scored entities into the capped, ordered result list.

mod core;
pub mod ranking;

pub use core::*;
