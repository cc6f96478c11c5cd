//! # Weekz Architecture
//!
//! Weekz is a **UI-agnostic weekly journal library**. This is not a CLI
//! application that happens to have some library code—it's a library that
//! happens to have a CLI client.
//!
//! That distinction drives the architecture and should guide all development.
//!
//! ## The Three-Layer Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, renders views, handles terminal I/O    │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Tracker (api.rs)                                           │
//! │  - Loads state once, dispatches to commands                 │
//! │  - Normalizes inputs (display positions → stable ids)       │
//! │  - Flushes the journal after every mutation                 │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Pure business logic over (Journal, Session)              │
//! │  - Reports what changed and which views went stale          │
//! │  - No I/O assumptions whatsoever                            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - Abstract JournalStore trait                              │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## The Position System
//!
//! To stay ergonomic, weekz keeps a mapping between the 1-based positions
//! users see in the rendered list and the stable UUIDs at the data level.
//! Positions are resolved to ids at the tracker boundary, so a position is
//! never stored and never survives a repaint it could have drifted across.
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward (tracker, commands, storage), code:
//! - Takes regular Rust function arguments
//! - Returns regular Rust types (`Result<CmdResult>`)
//! - **Never** writes to stdout/stderr
//! - **Never** calls `std::process::exit`
//! - **Never** assumes a terminal environment
//!
//! The same core could serve a TUI, a web service, or any other UI.
//!
//! ## Testing Strategy
//!
//! 1. **Commands** (`commands/*.rs`): thorough unit tests of business logic.
//!    This is where the lion's share of testing lives.
//! 2. **Tracker** (`api.rs`): tests over `InMemoryStore` verifying dispatch,
//!    position resolution, and flush behavior.
//! 3. **CLI** (`cli/` + thin `main.rs`): argument parsing and output
//!    formatting tests, plus end-to-end runs under `tests/`.
//!
//! ## Module Overview
//!
//! - [`api`]: The tracker facade—entry point for all operations
//! - [`commands`]: Business logic for each command
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: Core data types (`Journal`, `Topic`, `Resource`)
//! - [`session`]: The selected day and visible week window
//! - [`view`]: Display models for the two rendered views
//! - [`week`]: Sunday-anchored week arithmetic
//! - [`timespan`]: The time wheel and its duration labels
//! - [`config`]: Configuration management
//! - [`error`]: Error types
//! - `cli`: Argument parsing, prompts, and templated rendering for the
//!   binary (not part of the lib API)

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod session;
pub mod store;
pub mod timespan;
pub mod view;
pub mod week;
