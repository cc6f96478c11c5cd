use super::JournalStore;
use crate::error::{Result, WeekzError};
use crate::model::Journal;
use crate::session::Session;

/// In-memory storage for testing and development. Does NOT persist.
///
/// Each slot holds serialized text, the same shape the file backend
/// writes, so tests exercise the full serialize/deserialize path and
/// can observe whether a command flushed at all.
#[derive(Default)]
pub struct InMemoryStore {
    journal_slot: Option<String>,
    session_slot: Option<String>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// The raw journal slot, `None` until the first flush.
    pub fn journal_text(&self) -> Option<&str> {
        self.journal_slot.as_deref()
    }

    /// Plants raw slot content, bypassing serialization. Lets tests
    /// stage corrupt or hand-written journals.
    #[cfg(any(test, feature = "test_utils"))]
    pub fn set_journal_text(&mut self, text: &str) {
        self.journal_slot = Some(text.to_string());
    }
}

impl JournalStore for InMemoryStore {
    fn load_journal(&self) -> Result<Journal> {
        match &self.journal_slot {
            Some(text) => serde_json::from_str(text).map_err(WeekzError::Serialization),
            None => Ok(Journal::default()),
        }
    }

    fn save_journal(&mut self, journal: &Journal) -> Result<()> {
        let text = serde_json::to_string(journal).map_err(WeekzError::Serialization)?;
        self.journal_slot = Some(text);
        Ok(())
    }

    fn load_session(&self) -> Result<Session> {
        match &self.session_slot {
            Some(text) => serde_json::from_str(text).map_err(WeekzError::Serialization),
            None => Ok(Session::default()),
        }
    }

    fn save_session(&mut self, session: &Session) -> Result<()> {
        let text = serde_json::to_string(session).map_err(WeekzError::Serialization)?;
        self.session_slot = Some(text);
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::{Resource, Topic};
    use crate::week::start_of_week;
    use chrono::NaiveDate;

    pub struct StoreFixture {
        pub store: InMemoryStore,
        journal: Journal,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
                journal: Journal::default(),
            }
        }

        pub fn with_topic(mut self, day: &str, title: &str) -> Self {
            let day: NaiveDate = day.parse().unwrap();
            self.journal.insert_topic(day, Topic::new(title.to_string()));
            self.store.save_journal(&self.journal).unwrap();
            self
        }

        pub fn with_resource(mut self, day: &str, topic_title: &str, resource_title: &str) -> Self {
            let day: NaiveDate = day.parse().unwrap();
            let record = self.journal.days.get_mut(&day).unwrap();
            let topic = record
                .topics
                .values_mut()
                .find(|t| t.title == topic_title)
                .unwrap();
            topic.resources.push(Resource::new(resource_title.to_string()));
            self.store.save_journal(&self.journal).unwrap();
            self
        }

        /// Selects `day` and points the displayed week at it.
        pub fn with_selected_day(mut self, day: &str) -> Self {
            let day: NaiveDate = day.parse().unwrap();
            let mut session = self.store.load_session().unwrap();
            session.selected_day = Some(day);
            session.week_start = start_of_week(day);
            self.store.save_session(&session).unwrap();
            self
        }
    }
}
