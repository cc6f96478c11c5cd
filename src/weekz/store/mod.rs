//! # Storage Layer
//!
//! Storage abstraction for weekz. The [`JournalStore`] trait lets the
//! application work with different backends.
//!
//! ## Design Rationale
//!
//! Storage is abstracted behind a trait to:
//! - Enable **testing** with `InMemoryStore` (no filesystem needed)
//! - Allow **future backends** without changing core logic
//! - Keep journal logic **decoupled** from persistence details
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: Production file-based storage under the data
//!   directory
//! - [`memory::InMemoryStore`]: serialized in-memory slots for tests
//!
//! ## Storage Format
//!
//! For `FileStore`:
//! ```text
//! <data dir>/
//! ├── journal.json        # The entire journal, one JSON document
//! ├── session.json        # Selected day + displayed week
//! └── config.json         # User configuration (managed by config.rs)
//! ```
//!
//! The journal is read whole and written whole. Every mutating command
//! is followed by a full rewrite of `journal.json`; there are no
//! per-record files, no migrations, and no version field.

use crate::error::Result;
use crate::model::Journal;
use crate::session::Session;

pub mod fs;
pub mod memory;

/// Abstract interface for journal and session persistence.
///
/// Loads of a missing journal yield an empty one; loads of an
/// unparseable journal fail, and callers are expected to let that
/// error surface rather than discard data by starting fresh.
pub trait JournalStore {
    /// Load the whole journal
    fn load_journal(&self) -> Result<Journal>;

    /// Persist the whole journal
    fn save_journal(&mut self, journal: &Journal) -> Result<()>;

    /// Load the session state
    fn load_session(&self) -> Result<Session>;

    /// Persist the session state
    fn save_session(&mut self, session: &Session) -> Result<()>;
}
