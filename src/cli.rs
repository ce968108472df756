use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "tidyname",
    version,
    about = "Suggest and apply Source-Title-Date file names"
)]
pub struct Cli {
    #[arg(long, global = true, help = "Output machine-readable JSON")]
    pub json: bool,
    #[arg(
        long,
        global = true,
        env = "TIDYNAME_HISTORY",
        help = "History file (default: ~/.config/tidyname/history.json)"
    )]
    pub history_file: Option<PathBuf>,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Suggest new names for the files in a directory.
    List {
        #[command(flatten)]
        scan: ScanArgs,
    },
    /// Apply suggested names.
    Rename {
        #[command(flatten)]
        scan: ScanArgs,
        #[arg(long, help = "Preview without touching any file")]
        dry_run: bool,
        #[arg(long, help = "Overwrite existing targets")]
        force: bool,
        #[arg(long, help = "Only apply suggestions classified as auto")]
        auto_only: bool,
        #[arg(long, help = "Apply a report saved from `list --json` instead of scanning")]
        plan: Option<PathBuf>,
    },
    History {
        #[command(subcommand)]
        command: HistoryCommands,
    },
}

#[derive(Args, Debug)]
pub struct ScanArgs {
    #[arg(help = "Target directory (default: ~/Downloads or the configured directory)")]
    pub directory: Option<PathBuf>,
    #[arg(long, help = "Process subdirectories")]
    pub recursive: bool,
    #[arg(long, help = "Skip files already processed and unchanged since")]
    pub new_only: bool,
}

#[derive(Subcommand, Debug)]
pub enum HistoryCommands {
    /// Record a file as skipped.
    Skip { file: PathBuf },
    /// Record a rename performed outside this tool.
    Rename { old: PathBuf, new: String },
    /// Delete the history file.
    Clear,
    /// Print every recorded entry.
    Show,
}
