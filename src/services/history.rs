use crate::domain::models::{HistoryAction, HistoryEntry, HistoryFile};
use std::path::{Path, PathBuf};
use std::time::UNIX_EPOCH;

/// Persistence for the history document. Loading never fails: anything
/// unreadable is an empty history.
pub trait HistoryBackend {
    fn load(&self) -> HistoryFile;
    fn save(&self, file: &HistoryFile) -> anyhow::Result<()>;
    fn clear(&self) -> anyhow::Result<()>;
}

/// Per-file memo of past decisions, keyed by resolved path and valid only
/// while the file's modification time is unchanged.
pub struct HistoryStore {
    backend: Box<dyn HistoryBackend>,
    snapshot: HistoryFile,
}

impl HistoryStore {
    pub fn open(backend: impl HistoryBackend + 'static) -> Self {
        let snapshot = backend.load();
        Self {
            backend: Box::new(backend),
            snapshot,
        }
    }

    pub fn record_action(
        &mut self,
        path: &Path,
        action: HistoryAction,
        new_name: Option<&str>,
    ) -> anyhow::Result<HistoryEntry> {
        let original_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        self.record(path, &original_name, action, new_name)
    }

    /// Overwrites the entry for `path`, re-reading the backend first so
    /// entries written since `open` survive.
    pub fn record(
        &mut self,
        path: &Path,
        original_name: &str,
        action: HistoryAction,
        new_name: Option<&str>,
    ) -> anyhow::Result<HistoryEntry> {
        let entry = HistoryEntry {
            mtime: modified_secs(path),
            original_name: original_name.to_string(),
            action,
            new_name: new_name.map(str::to_string),
            processed_at: chrono::Local::now().to_rfc3339(),
        };
        let mut file = self.backend.load();
        file.files.insert(history_key(path), entry.clone());
        self.backend.save(&file)?;
        self.snapshot = file;
        tracing::debug!(path = %path.display(), ?action, "history recorded");
        Ok(entry)
    }

    pub fn is_known(&self, path: &Path) -> bool {
        let Some(entry) = self.snapshot.files.get(&history_key(path)) else {
            return false;
        };
        match (entry.mtime, modified_secs(path)) {
            (Some(stored), Some(current)) => stored == current,
            _ => false,
        }
    }

    pub fn clear(&mut self) -> anyhow::Result<()> {
        self.backend.clear()?;
        self.snapshot = HistoryFile::default();
        Ok(())
    }

    pub fn entries(&self) -> impl Iterator<Item = (&String, &HistoryEntry)> {
        self.snapshot.files.iter()
    }

    pub fn len(&self) -> usize {
        self.snapshot.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshot.files.is_empty()
    }
}

/// Absolute, symlink-free path when the file exists; absolute otherwise.
pub fn resolve_path(path: &Path) -> PathBuf {
    path.canonicalize()
        .or_else(|_| std::path::absolute(path))
        .unwrap_or_else(|_| path.to_path_buf())
}

fn history_key(path: &Path) -> String {
    resolve_path(path).to_string_lossy().into_owned()
}

pub fn modified_secs(path: &Path) -> Option<f64> {
    let modified = std::fs::metadata(path).ok()?.modified().ok()?;
    Some(modified.duration_since(UNIX_EPOCH).ok()?.as_secs_f64())
}


#[cfg(test)]
mod tests {
    use super::testing::MemoryBackend;
    use super::*;
    use std::fs::File;
    use std::time::{Duration, SystemTime};
    use tempfile::TempDir;

    fn touch(path: &Path, offset_secs: u64) {
        let f = File::options().write(true).open(path).expect("open file");
        f.set_modified(SystemTime::UNIX_EPOCH + Duration::from_secs(1_600_000_000 + offset_secs))
            .expect("set mtime");
    }

    #[test]
    fn recorded_unchanged_file_is_known() {
        let tmp = TempDir::new().expect("temp dir");
        let path = tmp.path().join("report.pdf");
        std::fs::write(&path, "v1").expect("write file");
        touch(&path, 0);

        let mut store = HistoryStore::open(MemoryBackend::default());
        assert!(!store.is_known(&path));
        store
            .record_action(&path, HistoryAction::Renamed, Some("Report-2024.pdf"))
            .expect("record");
        assert!(store.is_known(&path));
    }

    #[test]
    fn modified_file_is_no_longer_known() {
        let tmp = TempDir::new().expect("temp dir");
        let path = tmp.path().join("report.pdf");
        std::fs::write(&path, "v1").expect("write file");
        touch(&path, 0);

        let mut store = HistoryStore::open(MemoryBackend::default());
        store
            .record_action(&path, HistoryAction::Skipped, None)
            .expect("record");
        std::fs::write(&path, "v2").expect("rewrite file");
        touch(&path, 60);
        assert!(!store.is_known(&path));
    }

    #[test]
    fn missing_file_records_without_mtime() {
        let tmp = TempDir::new().expect("temp dir");
        let path = tmp.path().join("gone.pdf");
        let mut store = HistoryStore::open(MemoryBackend::default());
        let entry = store
            .record_action(&path, HistoryAction::Renamed, Some("Gone-2024.pdf"))
            .expect("record");
        assert_eq!(entry.mtime, None);
        assert_eq!(entry.original_name, "gone.pdf");
        assert!(!store.is_known(&path));
    }

    #[test]
    fn entries_are_overwritten_per_path() {
        let tmp = TempDir::new().expect("temp dir");
        let path = tmp.path().join("a.txt");
        std::fs::write(&path, "x").expect("write file");

        let backend = MemoryBackend::default();
        let mut store = HistoryStore::open(backend.clone());
        store
            .record_action(&path, HistoryAction::Skipped, None)
            .expect("record skip");
        store
            .record_action(&path, HistoryAction::Renamed, Some("A-2024.txt"))
            .expect("record rename");

        assert_eq!(store.len(), 1);
        let (_, entry) = store.entries().next().expect("one entry");
        assert_eq!(entry.action, HistoryAction::Renamed);
        assert_eq!(backend.load().files.len(), 1);
    }

    #[test]
    fn processed_at_is_rfc3339() {
        let tmp = TempDir::new().expect("temp dir");
        let path = tmp.path().join("a.txt");
        std::fs::write(&path, "x").expect("write file");

        let mut store = HistoryStore::open(MemoryBackend::default());
        let entry = store
            .record_action(&path, HistoryAction::Skipped, None)
            .expect("record skip");
        assert!(chrono::DateTime::parse_from_rfc3339(&entry.processed_at).is_ok());
    }

    #[test]
    fn clear_forgets_everything() {
        let tmp = TempDir::new().expect("temp dir");
        let path = tmp.path().join("a.txt");
        std::fs::write(&path, "x").expect("write file");

        let mut store = HistoryStore::open(MemoryBackend::default());
        store
            .record_action(&path, HistoryAction::Skipped, None)
            .expect("record");
        store.clear().expect("clear");
        assert!(store.is_empty());
        assert!(!store.is_known(&path));
    }
}
