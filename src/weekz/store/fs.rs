use std::fs;
use std::path::{Path, PathBuf};

use super::JournalStore;
use crate::error::{Result, WeekzError};
use crate::model::Journal;
use crate::session::Session;

pub const JOURNAL_FILENAME: &str = "journal.json";
pub const SESSION_FILENAME: &str = "session.json";

pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(WeekzError::Io)?;
        }
        Ok(())
    }

    fn write_json(&self, filename: &str, content: String) -> Result<()> {
        self.ensure_dir()?;
        fs::write(self.root.join(filename), content).map_err(WeekzError::Io)
    }
}

impl JournalStore for FileStore {
    fn load_journal(&self) -> Result<Journal> {
        let data_file = self.root.join(JOURNAL_FILENAME);
        if !data_file.exists() {
            return Ok(Journal::default());
        }
        let content = fs::read_to_string(data_file).map_err(WeekzError::Io)?;
        serde_json::from_str(&content).map_err(WeekzError::Serialization)
    }

    fn save_journal(&mut self, journal: &Journal) -> Result<()> {
        let content = serde_json::to_string_pretty(journal).map_err(WeekzError::Serialization)?;
        self.write_json(JOURNAL_FILENAME, content)
    }

    fn load_session(&self) -> Result<Session> {
        let session_file = self.root.join(SESSION_FILENAME);
        if !session_file.exists() {
            return Ok(Session::default());
        }
        let content = fs::read_to_string(session_file).map_err(WeekzError::Io)?;
        serde_json::from_str(&content).map_err(WeekzError::Serialization)
    }

    fn save_session(&mut self, session: &Session) -> Result<()> {
        let content = serde_json::to_string_pretty(session).map_err(WeekzError::Serialization)?;
        self.write_json(SESSION_FILENAME, content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Topic;
    use tempfile::TempDir;

    fn store() -> (TempDir, FileStore) {
        let dir = TempDir::new().unwrap();
        let store = FileStore::new(dir.path().to_path_buf());
        (dir, store)
    }

    #[test]
    fn missing_journal_loads_empty() {
        let (_dir, store) = store();
        let journal = store.load_journal().unwrap();
        assert!(journal.days.is_empty());
    }

    #[test]
    fn journal_survives_a_save_load_cycle() {
        let (_dir, mut store) = store();
        let mut journal = Journal::default();
        journal.insert_topic("2026-03-04".parse().unwrap(), Topic::new("Rust".to_string()));

        store.save_journal(&journal).unwrap();
        let reloaded = store.load_journal().unwrap();
        assert_eq!(reloaded, journal);
    }

    #[test]
    fn corrupt_journal_is_an_error_not_a_reset() {
        let (dir, store) = store();
        fs::write(dir.path().join(JOURNAL_FILENAME), "{ not json").unwrap();

        let result = store.load_journal();
        assert!(matches!(result, Err(WeekzError::Serialization(_))));
    }

    #[test]
    fn session_survives_a_save_load_cycle() {
        let (_dir, mut store) = store();
        let mut session = Session::new("2026-03-04".parse().unwrap());
        session.selected_day = Some("2026-03-02".parse().unwrap());

        store.save_session(&session).unwrap();
        assert_eq!(store.load_session().unwrap(), session);
    }

    #[test]
    fn save_creates_the_data_dir() {
        let dir = TempDir::new().unwrap();
        let root = dir.path().join("nested").join("weekz");
        let mut store = FileStore::new(root.clone());

        store.save_journal(&Journal::default()).unwrap();
        assert!(root.join(JOURNAL_FILENAME).exists());
    }
}
