//! Shared data model layer (structs/constants only).
//!
//! ## Purpose
//! - Keep match/report/history structs in one place.
//! - Make JSON output schema changes explicit and reviewable.
//!
//! ## Files
//! - `models.rs` — name components, confidences, reports, history schema.
//! - `constants.rs` — lexicon tables (abbreviations, months, stop words).
//!
//! ## Rule of thumb
//! Domain types should be data-only: no filesystem side effects.
//!
//! ## Compatibility note
//! Changes in these structs affect `--json` outputs and the history file.
//! Keep schema-impacting changes synchronized with `docs/contracts/*`.

pub mod constants;
pub mod models;
