use crate::domain::constants::COMPOUND_EXTENSIONS;
use crate::domain::models::{
    AnalysisResult, Classification, ErrorItem, HistoryAction, ListReport, NameComponents,
    RenameReport, RenamedItem, SkippedItem,
};
use crate::services::classify::classify_change;
use crate::services::dates::extract_date;
use crate::services::formatted::is_already_formatted;
use crate::services::history::HistoryStore;
use crate::services::source::extract_source;
use crate::services::title::extract_title;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

#[derive(thiserror::Error, Debug)]
pub enum EngineError {
    #[error("not a directory: {0}")]
    NotADirectory(PathBuf),
}

#[derive(Debug, Clone, Copy, Default)]
pub struct RenameOptions {
    pub dry_run: bool,
    pub force: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameSuggestion {
    pub suggested_name: String,
    pub components: NameComponents,
    pub classification: Classification,
}

/// Splits `name` into stem and extension. Compound archive extensions count
/// as one unit; a leading or trailing dot is not an extension.
pub fn split_extension(name: &str) -> (&str, &str) {
    for ext in COMPOUND_EXTENSIONS {
        if name.len() <= ext.len() {
            continue;
        }
        let at = name.len() - ext.len();
        if let Some(tail) = name.get(at..) {
            if tail.eq_ignore_ascii_case(ext) {
                return (&name[..at], tail);
            }
        }
    }
    match name.rfind('.') {
        Some(at) if at > 0 && at + 1 < name.len() => (&name[..at], &name[at..]),
        _ => (name, ""),
    }
}

pub fn extract_components(stem: &str) -> NameComponents {
    let source = extract_source(stem);
    let date = extract_date(stem);
    let title = extract_title(
        stem,
        source.as_ref().map(|s| s.value.as_str()),
        date.as_ref().map(|d| d.value.as_str()),
    );
    NameComponents::from_matches(source, date, title)
}

/// Proposes a canonical name for `file_name`, or `None` when the name is
/// already compliant, the evidence is too thin, or nothing would change.
pub fn analyze_name(file_name: &str) -> Option<NameSuggestion> {
    let (stem, ext) = split_extension(file_name);
    if is_already_formatted(stem) {
        tracing::debug!(file_name, "already formatted");
        return None;
    }

    let components = extract_components(stem);
    let parts = components.parts();
    if parts.is_empty() || (parts.len() == 1 && components.date.is_none()) {
        tracing::debug!(file_name, ?components, "insufficient evidence");
        return None;
    }

    let suggested_name = format!("{}{}", parts.join("-"), ext);
    if suggested_name == file_name {
        return None;
    }

    let classification = classify_change(file_name, &suggested_name, &components);
    Some(NameSuggestion {
        suggested_name,
        components,
        classification,
    })
}

pub fn analyze_file(path: &Path) -> Option<AnalysisResult> {
    let Some(file_name) = path.file_name()?.to_str() else {
        tracing::debug!(path = %path.display(), "skipping non-UTF-8 file name");
        return None;
    };
    let suggestion = analyze_name(file_name)?;
    let c = suggestion.components;
    Some(AnalysisResult {
        original_name: file_name.to_string(),
        suggested_name: suggestion.suggested_name,
        classification: suggestion.classification,
        source: c.source,
        title: c.title,
        date: c.date,
        path: path.to_path_buf(),
    })
}

pub fn ensure_directory(dir: &Path) -> Result<(), EngineError> {
    if dir.is_dir() {
        Ok(())
    } else {
        Err(EngineError::NotADirectory(dir.to_path_buf()))
    }
}

fn candidate_files(dir: &Path, recursive: bool) -> Vec<PathBuf> {
    let depth = if recursive { usize::MAX } else { 1 };
    WalkDir::new(dir)
        .min_depth(1)
        .max_depth(depth)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(e) => Some(e),
            Err(err) => {
                tracing::warn!(error = %err, "skipping unreadable entry");
                None
            }
        })
        .filter(|e| !e.file_name().to_string_lossy().starts_with('.'))
        .map(|e| e.into_path())
        .filter(|p| p.is_file())
        .collect()
}

/// Analyzes every visible file under `dir`. With a history store, files
/// already handled and unchanged since are counted and skipped.
pub fn list_suggestions(
    dir: &Path,
    recursive: bool,
    history: Option<&HistoryStore>,
) -> Result<ListReport, EngineError> {
    ensure_directory(dir)?;

    let mut report = ListReport::default();
    for path in candidate_files(dir, recursive) {
        report.total_files += 1;

        if history.is_some_and(|h| h.is_known(&path)) {
            tracing::debug!(path = %path.display(), "already processed");
            report.already_processed += 1;
            continue;
        }

        if let Some(result) = analyze_file(&path) {
            match result.classification {
                Classification::Auto => report.auto.push(result),
                Classification::NeedsReview => report.needs_review.push(result),
            }
        }
    }
    report.new_files = report.total_files - report.already_processed;
    Ok(report)
}

pub fn execute_renames<'a>(
    suggestions: impl IntoIterator<Item = &'a AnalysisResult>,
    options: RenameOptions,
    history: &mut HistoryStore,
) -> RenameReport {
    let mut report = RenameReport::default();

    for item in suggestions {
        let src = &item.path;
        let dst = src
            .parent()
            .unwrap_or_else(|| Path::new("."))
            .join(&item.suggested_name);

        if dst.exists() && !options.force {
            report.skipped.push(SkippedItem {
                file: item.original_name.clone(),
                reason: "target exists".to_string(),
            });
            continue;
        }

        if options.dry_run {
            report.renamed.push(RenamedItem {
                from: item.original_name.clone(),
                to: item.suggested_name.clone(),
                dry_run: true,
            });
            continue;
        }

        match std::fs::rename(src, &dst) {
            Ok(()) => {
                tracing::info!(from = %src.display(), to = %dst.display(), "renamed");
                if let Err(e) = history.record(
                    &dst,
                    &item.original_name,
                    HistoryAction::Renamed,
                    Some(&item.suggested_name),
                ) {
                    tracing::warn!(path = %dst.display(), error = %e, "could not record rename");
                }
                report.renamed.push(RenamedItem {
                    from: item.original_name.clone(),
                    to: item.suggested_name.clone(),
                    dry_run: false,
                });
            }
            Err(e) => {
                tracing::warn!(path = %src.display(), error = %e, "rename failed");
                report.errors.push(ErrorItem {
                    file: item.original_name.clone(),
                    error: e.to_string(),
                });
            }
        }
    }

    report
}
