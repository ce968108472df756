//! Command handler layer.
//!
//! This module owns CLI-oriented orchestration and output wiring.
//!
//! ## Files
//! - `scan.rs` — list/rename over a directory or a saved plan.
//! - `history.rs` — history maintenance (skip/rename/clear/show).
//!
//! ## Principles
//! - Parse/match CLI inputs here.
//! - Delegate business logic to `services/*`.
//! - Keep behavior and output schema stable.

pub mod history;
pub mod scan;

pub use history::handle_history_commands;
pub use scan::handle_scan_commands;
