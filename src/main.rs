// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;
use serde_json::Value;
use tracing::debug;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use polyportal::{
    search_with, Catalog, MemoryHistory, NavigationSnapshot, Navigator, PortalConfig, SearchHit,
    Tab, View, Viewer,
};

mod cli;
use cli::display::{
    field, kind_badge, row, score_value, section_bot, section_top, themed, truncate, GRAY,
};
use cli::{Cli, Commands};

fn main() {
    init_tracing();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => e.exit(),
    };

    let outcome = match cli.command {
        Commands::Search {
            catalog,
            query,
            limit,
            config,
            json,
        } => run_search(&catalog, &query, limit, config.as_deref(), json),
        Commands::Restore { catalog, state } => run_restore(&catalog, &state),
        Commands::Validate { catalog } => run_validate(&catalog),
    };

    if let Err(e) = outcome {
        eprintln!("❌ {:#}", e);
        std::process::exit(1);
    }
}

/// Logs go to stderr; `RUST_LOG` overrides the `warn` default.
fn init_tracing() {
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();
}

fn load_catalog(path: &Path) -> Result<Catalog> {
    let catalog = Catalog::load(path)
        .with_context(|| format!("loading catalog {}", path.display()))?;
    debug!(
        path = %path.display(),
        departments = catalog.departments.len(),
        entities = catalog.entity_count(),
        "catalog loaded"
    );
    Ok(catalog)
}

fn run_search(
    catalog_path: &Path,
    query: &str,
    limit: Option<usize>,
    config_path: Option<&Path>,
    json: bool,
) -> Result<()> {
    let catalog = load_catalog(catalog_path)?;
    let config = match config_path {
        Some(path) => PortalConfig::load(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => PortalConfig::default(),
    };
    let limit = limit.unwrap_or(config.search.max_results);

    let results = search_with(query, &catalog, &config.ranking, limit);
    let hits: Vec<SearchHit> = results.iter().map(SearchHit::from).collect();

    if json {
        println!("{}", serde_json::to_string_pretty(&hits)?);
        return Ok(());
    }

    section_top(&format!("SEARCH \"{}\"", truncate(query, 40)));
    if hits.is_empty() {
        row(&format!(" {}", themed(GRAY, &[], "no matches")));
    }
    for hit in &hits {
        let semester = hit.semester.map(|s| s.label()).unwrap_or("");
        row(&format!(
            " {} {} {:<34} {:<6} {}",
            score_value(hit.score),
            kind_badge(&hit.kind),
            truncate(&hit.title, 34),
            truncate(&hit.department_id, 6),
            themed(GRAY, &[], semester),
        ));
    }
    section_bot();
    Ok(())
}

/// JSON objects are history states; anything else is a query string.
fn parse_state(raw: &str) -> Result<NavigationSnapshot> {
    let raw = raw.trim();
    if raw.starts_with('{') {
        let value: Value = serde_json::from_str(raw).context("parsing history state")?;
        Ok(NavigationSnapshot::from_state(Some(&value)))
    } else {
        Ok(NavigationSnapshot::from_query_string(raw))
    }
}

fn run_restore(catalog_path: &Path, raw_state: &str) -> Result<()> {
    let catalog = load_catalog(catalog_path)?;
    let snapshot = parse_state(raw_state)?;

    let mut nav = Navigator::new(catalog, MemoryHistory::new());
    nav.mount(Some(&snapshot.to_state()));

    let selection = nav.selection();
    let department = nav.department().map(|d| format!("{} ({})", d.name, d.id));
    let subject = nav.subject().map(|s| format!("{} ({})", s.title, s.id));
    let viewer = selection.viewer.as_ref().map(|viewer| match viewer {
        Viewer::Video { video_id } => format!("video {}", video_id),
        Viewer::Resource { resource_id, .. } => format!("pdf {}", resource_id),
    });

    section_top("RESTORED VIEW");
    row(&field("view", Some(selection.view.as_str())));
    row(&field("department", department.as_deref()));
    row(&field("semester", selection.semester.map(|s| s.label())));
    row(&field("subject", subject.as_deref()));
    row(&field(
        "tab",
        selection.subject_id.as_ref().map(|_| selection.tab.as_str()),
    ));
    row(&field("overlay", selection.overlay.map(|o| o.as_str())));
    row(&field("viewer", viewer.as_deref()));
    for item in listing(&nav) {
        row(&format!("   {} {}", themed(GRAY, &[], "·"), truncate(&item, 60)));
    }
    section_bot();

    println!("{}", nav.current_snapshot().to_query_string());
    Ok(())
}

/// What the restored page lists: a semester's subjects or a subject's videos.
fn listing(nav: &Navigator<MemoryHistory>) -> Vec<String> {
    let selection = nav.selection();
    let Some(dept) = nav.department() else {
        return Vec::new();
    };
    match (selection.view, selection.semester, selection.subject_id.as_deref()) {
        (View::Sem, Some(semester), _) => dept
            .subjects_in(semester)
            .map(|s| format!("{} ({})", s.title, s.id))
            .collect(),
        (View::Sub, _, Some(subject_id)) if selection.tab == Tab::Videos => dept
            .videos_for(subject_id)
            .map(|v| format!("{} · {} [{}]", v.title, v.instructor, v.duration))
            .collect(),
        _ => Vec::new(),
    }
}

fn run_validate(catalog_path: &Path) -> Result<()> {
    let catalog = load_catalog(catalog_path)?;
    let subjects: usize = catalog.departments.iter().map(|d| d.subjects.len()).sum();
    let videos: usize = catalog.departments.iter().map(|d| d.videos.len()).sum();
    println!(
        "✓ {} departments, {} subjects, {} videos",
        catalog.departments.len(),
        subjects,
        videos
    );
    Ok(())
}
