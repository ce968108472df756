use crate::cli::{Cli, HistoryCommands};
use crate::domain::models::{HistoryAction, HistoryListing, HistoryRecord};
use crate::services::history::HistoryStore;
use crate::services::output::{print_one, print_rows};
use crate::services::settings::Settings;
use crate::services::storage::JsonFileBackend;

pub fn handle_history_commands(
    cli: &Cli,
    command: &HistoryCommands,
    settings: &Settings,
) -> anyhow::Result<()> {
    let mut store = HistoryStore::open(JsonFileBackend::new(&settings.history_file));

    match command {
        HistoryCommands::Skip { file } => {
            store.record_action(file, HistoryAction::Skipped, None)?;
            let record = HistoryRecord {
                status: "recorded".to_string(),
                action: HistoryAction::Skipped,
                file: file.display().to_string(),
                new_name: None,
            };
            print_one(cli.json, record, |r| format!("recorded skip for {}", r.file))?;
        }
        HistoryCommands::Rename { old, new } => {
            store.record_action(old, HistoryAction::Renamed, Some(new))?;
            let record = HistoryRecord {
                status: "recorded".to_string(),
                action: HistoryAction::Renamed,
                file: old.display().to_string(),
                new_name: Some(new.clone()),
            };
            print_one(cli.json, record, |r| {
                format!(
                    "recorded rename {} -> {}",
                    r.file,
                    r.new_name.as_deref().unwrap_or_default()
                )
            })?;
        }
        HistoryCommands::Clear => {
            store.clear()?;
            print_one(
                cli.json,
                serde_json::json!({"status": "history cleared"}),
                |_| "history cleared".to_string(),
            )?;
        }
        HistoryCommands::Show => {
            let rows: Vec<HistoryListing> = store
                .entries()
                .map(|(path, entry)| HistoryListing {
                    path: path.clone(),
                    entry: entry.clone(),
                })
                .collect();
            if !cli.json && store.is_empty() {
                println!("history is empty");
                return Ok(());
            }
            print_rows(cli.json, &rows, |r| {
                format!(
                    "{}\t{:?}\t{}",
                    r.path,
                    r.entry.action,
                    r.entry.new_name.as_deref().unwrap_or("-")
                )
            })?;
            if !cli.json {
                println!("{} entries", store.len());
            }
        }
    }
    Ok(())
}
