// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the polyportal command-line interface.
//!
//! Three subcommands over a catalog file: `search` to rank a query the way
//! the portal would, `restore` to see what view a history state or deep link
//! rebuilds, and `validate` to check a catalog before shipping it.

pub mod display;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "polyportal",
    about = "Search and navigation core of the Polytechnic study portal",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Rank catalog entities against a query
    Search {
        /// Catalog JSON (department array or {"departments": [...]})
        #[arg(short, long)]
        catalog: PathBuf,

        /// Search query
        query: String,

        /// Maximum number of results (defaults to the configured cap)
        #[arg(short, long)]
        limit: Option<usize>,

        /// Portal config JSON overriding ranking weights
        #[arg(long)]
        config: Option<PathBuf>,

        /// Print results as JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Rebuild the view a history state or deep link describes
    Restore {
        /// Catalog JSON
        #[arg(short, long)]
        catalog: PathBuf,

        /// History state as JSON (`{"view":"sub",...}`) or a query string
        /// (`view=sub&deptId=ce&...`)
        state: String,
    },

    /// Check ids are unique and video references resolve
    Validate {
        /// Catalog JSON
        #[arg(short, long)]
        catalog: PathBuf,
    },
}
