use crate::domain::models::SettingsFile;
use crate::services::storage::{default_history_path, expand_home, home_dir, settings_path};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct Settings {
    pub default_directory: PathBuf,
    pub history_file: PathBuf,
    pub recursive: bool,
}

pub fn load_settings_file() -> anyhow::Result<SettingsFile> {
    let path = settings_path()?;
    if !path.exists() {
        return Ok(SettingsFile::default());
    }
    let raw = std::fs::read_to_string(path)?;
    Ok(toml::from_str(&raw)?)
}

/// Resolves settings. An explicit history path wins over the config file.
pub fn load_settings(history_override: Option<&Path>) -> anyhow::Result<Settings> {
    let file = load_settings_file()?;
    resolve(file, history_override)
}

fn resolve(file: SettingsFile, history_override: Option<&Path>) -> anyhow::Result<Settings> {
    let general = file.general;
    let default_directory = match general.default_directory.as_deref() {
        Some(dir) => expand_home(dir)?,
        None => home_dir()?.join("Downloads"),
    };
    let history_file = match (history_override, general.history_file.as_deref()) {
        (Some(p), _) => p.to_path_buf(),
        (None, Some(p)) => expand_home(p)?,
        (None, None) => default_history_path()?,
    };
    Ok(Settings {
        default_directory,
        history_file,
        recursive: general.recursive,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_file_values_are_used() {
        let file: SettingsFile = toml::from_str(
            r#"
            [general]
            default_directory = "/srv/inbox"
            history_file = "/srv/history.json"
            recursive = true
            "#,
        )
        .expect("parse settings");
        let s = resolve(file, None).expect("resolve");
        assert_eq!(s.default_directory, PathBuf::from("/srv/inbox"));
        assert_eq!(s.history_file, PathBuf::from("/srv/history.json"));
        assert!(s.recursive);
    }

    #[test]
    fn explicit_history_path_wins() {
        let file: SettingsFile = toml::from_str("[general]\nhistory_file = \"/srv/a.json\"\n")
            .expect("parse settings");
        let s = resolve(file, Some(Path::new("/tmp/b.json"))).expect("resolve");
        assert_eq!(s.history_file, PathBuf::from("/tmp/b.json"));
    }

    #[test]
    fn empty_config_is_valid() {
        let file: SettingsFile = toml::from_str("").expect("parse settings");
        assert!(file.general.default_directory.is_none());
        assert!(!file.general.recursive);
    }
}
