use crate::domain::models::HistoryFile;
use crate::services::history::HistoryBackend;
use std::path::PathBuf;

pub fn home_dir() -> anyhow::Result<PathBuf> {
    let home = std::env::var("HOME")?;
    Ok(PathBuf::from(home))
}

pub fn config_dir() -> anyhow::Result<PathBuf> {
    Ok(home_dir()?.join(".config/tidyname"))
}

pub fn default_history_path() -> anyhow::Result<PathBuf> {
    Ok(config_dir()?.join("history.json"))
}

pub fn settings_path() -> anyhow::Result<PathBuf> {
    Ok(config_dir()?.join("config.toml"))
}

/// Expands a leading `~/` against `$HOME`.
pub fn expand_home(raw: &str) -> anyhow::Result<PathBuf> {
    match raw.strip_prefix("~/") {
        Some(rest) => Ok(home_dir()?.join(rest)),
        None if raw == "~" => home_dir(),
        None => Ok(PathBuf::from(raw)),
    }
}

/// History persisted as one pretty-printed JSON document.
pub struct JsonFileBackend {
    path: PathBuf,
}

impl JsonFileBackend {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl HistoryBackend for JsonFileBackend {
    fn load(&self) -> HistoryFile {
        if !self.path.exists() {
            return HistoryFile::default();
        }
        let parsed = std::fs::read_to_string(&self.path)
            .map_err(anyhow::Error::from)
            .and_then(|raw| Ok(serde_json::from_str::<HistoryFile>(&raw)?));
        match parsed {
            Ok(file) => file,
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "ignoring unreadable history");
                HistoryFile::default()
            }
        }
    }

    fn save(&self, file: &HistoryFile) -> anyhow::Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&self.path, serde_json::to_string_pretty(file)?)?;
        Ok(())
    }

    fn clear(&self) -> anyhow::Result<()> {
        if self.path.exists() {
            std::fs::remove_file(&self.path)?;
        }
        Ok(())
    }
}
