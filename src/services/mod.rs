//! Service layer containing the inference engine and side-effect helpers.
//!
//! ## Service map
//! - `dates.rs` — ordered date matchers (ISO, European, compact, quarter, month, year).
//! - `source.rs` — organization abbreviation and person-name detection.
//! - `title.rs` — title cleanup and cased-phrase formatting.
//! - `formatted.rs` — detection of names already in `Source-Title-Date` form.
//! - `classify.rs` — auto vs. needs-review decision for a suggested rename.
//! - `engine.rs` — per-file analysis, directory listing, rename execution.
//! - `history.rs` — history store and its backend trait.
//! - `storage.rs` — paths and the JSON history backend.
//! - `settings.rs` — optional TOML configuration.
//! - `output.rs` — JSON/text output helpers.
//!
//! ## Conventions
//! - Extraction and classification are pure and never fail; absence is `None`.
//! - Filesystem side effects live in `engine`, `history` and `storage` only.
//! - Keep command handlers thin; delegate to services.

pub mod classify;
pub mod dates;
pub mod engine;
pub mod formatted;
pub mod history;
pub mod output;
pub mod settings;
pub mod source;
pub mod storage;
pub mod title;
