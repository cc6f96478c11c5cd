//! Terminal client for the weekz library.
//!
//! This is one possible UI over the tracker, and the only place that knows
//! about stdout, stderr, prompts, and exit codes. Handlers call the tracker,
//! repaint the views it reports stale, and print the structured messages that
//! come back.
//!
//! ## Module Structure
//!
//! - `setup`: argument parsing via clap
//! - `commands`: per-command handlers
//! - `render`: template-driven output formatting
//! - `styles`: the terminal theme
//! - `templates`: output templates

mod commands;
mod render;
mod setup;
mod styles;
mod templates;

pub use commands::run;
