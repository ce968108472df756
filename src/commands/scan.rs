use crate::cli::{Cli, Commands, ScanArgs};
use crate::domain::models::{AnalysisResult, Classification, ListReport, RenameReport};
use crate::services::engine::{execute_renames, list_suggestions, RenameOptions};
use crate::services::history::HistoryStore;
use crate::services::output::print_json;
use crate::services::settings::Settings;
use crate::services::storage::JsonFileBackend;
use std::path::{Path, PathBuf};

pub fn handle_scan_commands(cli: &Cli, settings: &Settings) -> anyhow::Result<()> {
    let mut history = HistoryStore::open(JsonFileBackend::new(&settings.history_file));

    match &cli.command {
        Commands::List { scan } => {
            let report = scan_directory(scan, settings, &history)?;
            if cli.json {
                print_json(&report)?;
            } else {
                print_list_text(&report);
            }
        }
        Commands::Rename {
            scan,
            dry_run,
            force,
            auto_only,
            plan,
        } => {
            let listing = match plan {
                Some(path) => load_plan(path)?,
                None => scan_directory(scan, settings, &history)?,
            };
            let selected: Vec<&AnalysisResult> = listing
                .suggestions()
                .filter(|s| !auto_only || s.classification == Classification::Auto)
                .collect();
            let options = RenameOptions {
                dry_run: *dry_run,
                force: *force,
            };
            let report = execute_renames(selected, options, &mut history);
            if cli.json {
                print_json(&report)?;
            } else {
                print_rename_text(&report);
            }
        }
        Commands::History { .. } => {}
    }
    Ok(())
}

fn scan_directory(
    scan: &ScanArgs,
    settings: &Settings,
    history: &HistoryStore,
) -> anyhow::Result<ListReport> {
    let dir: PathBuf = scan
        .directory
        .clone()
        .unwrap_or_else(|| settings.default_directory.clone());
    let recursive = scan.recursive || settings.recursive;
    let known = scan.new_only.then_some(history);
    tracing::debug!(dir = %dir.display(), recursive, new_only = scan.new_only, "scanning");
    Ok(list_suggestions(&dir, recursive, known)?)
}

/// Accepts either a bare report or the `{"ok": .., "data": ..}` envelope
/// printed by `list --json`.
fn load_plan(path: &Path) -> anyhow::Result<ListReport> {
    let raw = std::fs::read_to_string(path)?;
    let mut value: serde_json::Value = serde_json::from_str(&raw)?;
    if let Some(data) = value.get_mut("data") {
        value = data.take();
    }
    Ok(serde_json::from_value(value)?)
}

fn print_list_text(report: &ListReport) {
    if report.auto.is_empty() && report.needs_review.is_empty() {
        println!("No files to rename.");
        if report.already_processed > 0 {
            println!("({} files previously processed)", report.already_processed);
        }
        return;
    }
    println!("Auto-rename ({} files):", report.auto.len());
    for item in &report.auto {
        println!("  {}", item.original_name);
        println!("    -> {}", item.suggested_name);
    }
    if !report.needs_review.is_empty() {
        println!();
        println!("Needs review ({} files):", report.needs_review.len());
        for item in &report.needs_review {
            println!("  {}", item.original_name);
            println!("    -> {}", item.suggested_name);
        }
    }
}

fn print_rename_text(report: &RenameReport) {
    for r in &report.renamed {
        let verb = if r.dry_run { "would rename" } else { "renamed" };
        println!("{}\t{} -> {}", verb, r.from, r.to);
    }
    for s in &report.skipped {
        println!("skipped\t{}\t{}", s.file, s.reason);
    }
    for e in &report.errors {
        println!("error\t{}\t{}", e.file, e.error);
    }
    println!(
        "{} renamed, {} skipped, {} errors",
        report.renamed.len(),
        report.skipped.len(),
        report.errors.len()
    );
}
