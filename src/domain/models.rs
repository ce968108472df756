use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;

pub const HISTORY_VERSION: u32 = 1;

fn history_version() -> u32 {
    HISTORY_VERSION
}

#[derive(Serialize)]
pub struct JsonOut<T: Serialize> {
    pub ok: bool,
    pub data: T,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    #[default]
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum DateFormat {
    Full,
    Quarter,
    Month,
    Year,
    #[default]
    None,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Classification {
    Auto,
    NeedsReview,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateMatch {
    pub value: String,
    pub format: DateFormat,
    pub confidence: Confidence,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceMatch {
    pub value: String,
    pub confidence: Confidence,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TitleMatch {
    pub value: String,
    pub confidence: Confidence,
}

/// Everything inferred from a single stem. Missing components carry `Low`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NameComponents {
    pub source: Option<String>,
    pub title: Option<String>,
    pub date: Option<String>,
    pub date_format: DateFormat,
    pub source_confidence: Confidence,
    pub title_confidence: Confidence,
    pub date_confidence: Confidence,
}

impl NameComponents {
    pub fn from_matches(
        source: Option<SourceMatch>,
        date: Option<DateMatch>,
        title: Option<TitleMatch>,
    ) -> Self {
        let mut out = NameComponents::default();
        if let Some(s) = source {
            out.source = Some(s.value);
            out.source_confidence = s.confidence;
        }
        if let Some(d) = date {
            out.date = Some(d.value);
            out.date_format = d.format;
            out.date_confidence = d.confidence;
        }
        if let Some(t) = title {
            out.title = Some(t.value);
            out.title_confidence = t.confidence;
        }
        out
    }

    /// Present components in canonical order: source, title, date.
    pub fn parts(&self) -> Vec<&str> {
        [&self.source, &self.title, &self.date]
            .into_iter()
            .filter_map(|c| c.as_deref())
            .filter(|c| !c.is_empty())
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub original_name: String,
    pub suggested_name: String,
    pub classification: Classification,
    pub source: Option<String>,
    pub title: Option<String>,
    pub date: Option<String>,
    pub path: PathBuf,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListReport {
    pub auto: Vec<AnalysisResult>,
    pub needs_review: Vec<AnalysisResult>,
    pub already_processed: usize,
    pub new_files: usize,
    pub total_files: usize,
}

impl ListReport {
    pub fn suggestions(&self) -> impl Iterator<Item = &AnalysisResult> {
        self.auto.iter().chain(self.needs_review.iter())
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenamedItem {
    pub from: String,
    pub to: String,
    pub dry_run: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct SkippedItem {
    pub file: String,
    pub reason: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ErrorItem {
    pub file: String,
    pub error: String,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct RenameReport {
    pub renamed: Vec<RenamedItem>,
    pub skipped: Vec<SkippedItem>,
    pub errors: Vec<ErrorItem>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HistoryAction {
    Renamed,
    Skipped,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
    /// Modification time in seconds since the epoch when the action was recorded.
    pub mtime: Option<f64>,
    pub original_name: String,
    pub action: HistoryAction,
    pub new_name: Option<String>,
    pub processed_at: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryFile {
    #[serde(default = "history_version")]
    pub version: u32,
    #[serde(default)]
    pub files: BTreeMap<String, HistoryEntry>,
}

impl Default for HistoryFile {
    fn default() -> Self {
        HistoryFile {
            version: HISTORY_VERSION,
            files: BTreeMap::new(),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryRecord {
    pub status: String,
    pub action: HistoryAction,
    pub file: String,
    pub new_name: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryListing {
    pub path: String,
    #[serde(flatten)]
    pub entry: HistoryEntry,
}

#[derive(Debug, Deserialize, Default)]
pub struct SettingsFile {
    #[serde(default)]
    pub general: SettingsGeneral,
}

#[derive(Debug, Deserialize, Default)]
pub struct SettingsGeneral {
    #[serde(default)]
    pub default_directory: Option<String>,
    #[serde(default)]
    pub history_file: Option<String>,
    #[serde(default)]
    pub recursive: bool,
}
