//! # Tracker Controller
//!
//! The single owner of application state. Every UI goes through
//! [`Tracker`]; nothing else holds the journal or the session.
//!
//! ## Role and Responsibilities
//!
//! The controller:
//! - **Loads once**: journal and session are read at open and held in
//!   memory for the lifetime of the process
//! - **Dispatches** to the command functions in `commands/*.rs`
//! - **Normalizes inputs** (1-based display positions become stable
//!   topic/resource ids before any command sees them)
//! - **Flushes** the whole journal after every command that reports a
//!   mutation, and the session after every navigation
//!
//! ## What the Controller Does NOT Do
//!
//! - **Business logic**: that belongs in `commands/*.rs`
//! - **Presentation**: it returns `CmdResult` and view models, never
//!   formatted strings
//! - **Prompting**: confirmation questions live in the CLI layer
//!
//! ## Generic Over JournalStore
//!
//! `Tracker<S: JournalStore>` works against any backend:
//! - Production: `Tracker<FileStore>`
//! - Testing: `Tracker<InMemoryStore>`

use chrono::{Local, NaiveDate};

use crate::commands::{self, helpers};
use crate::error::{Result, WeekzError};
use crate::model::{Journal, Resource, ResourceId, Topic, TopicId};
use crate::session::Session;
use crate::store::JournalStore;
use crate::view::{self, DayTopics, WeekStrip};

pub struct Tracker<S: JournalStore> {
    store: S,
    journal: Journal,
    session: Session,
}

impl<S: JournalStore> Tracker<S> {
    /// Loads state from the store. A missing journal starts empty; an
    /// unparseable one is a hard error, surfaced rather than clobbered.
    /// The session is best-effort and falls back to defaults.
    pub fn open(store: S) -> Result<Self> {
        let journal = store.load_journal()?;
        let mut session = store.load_session().unwrap_or_default();
        session.normalize();
        Ok(Self {
            store,
            journal,
            session,
        })
    }

    pub fn select_day(&mut self, date: NaiveDate) -> Result<commands::CmdResult> {
        let result = commands::select_day::run(&mut self.session, date)?;
        self.store.save_session(&self.session)?;
        Ok(result)
    }

    pub fn change_week(&mut self, weeks: i64) -> Result<commands::CmdResult> {
        let result = commands::change_week::run(&mut self.session, weeks)?;
        self.store.save_session(&self.session)?;
        Ok(result)
    }

    pub fn create_topic(&mut self, title: &str) -> Result<commands::CmdResult> {
        let result = commands::create_topic::run(&mut self.journal, &self.session, title)?;
        self.finish(result)
    }

    pub fn delete_topic(&mut self, topic: usize) -> Result<commands::CmdResult> {
        let id = self.topic_id_at(topic)?;
        let result = commands::delete_topic::run(&mut self.journal, &self.session, id)?;
        self.finish(result)
    }

    pub fn add_resource(
        &mut self,
        topic: usize,
        draft: &commands::ResourceDraft,
    ) -> Result<commands::CmdResult> {
        let id = self.topic_id_at(topic)?;
        let result =
            commands::save_resource::run(&mut self.journal, &self.session, id, draft, None)?;
        self.finish(result)
    }

    pub fn edit_resource(
        &mut self,
        topic: usize,
        resource: usize,
        draft: &commands::ResourceDraft,
    ) -> Result<commands::CmdResult> {
        let (topic_id, resource_id) = self.resource_ids_at(topic, resource)?;
        let result = commands::save_resource::run(
            &mut self.journal,
            &self.session,
            topic_id,
            draft,
            Some(resource_id),
        )?;
        self.finish(result)
    }

    pub fn delete_resource(&mut self, topic: usize, resource: usize) -> Result<commands::CmdResult> {
        let (topic_id, resource_id) = self.resource_ids_at(topic, resource)?;
        let result = commands::delete_resource::run(
            &mut self.journal,
            &self.session,
            topic_id,
            resource_id,
        )?;
        self.finish(result)
    }

    /// The topic at a display position for the selected day. Used by
    /// the CLI to name what a confirmation prompt is about.
    pub fn topic_at(&self, position: usize) -> Result<&Topic> {
        let day = self.session.selected_day.ok_or(WeekzError::NoDaySelected)?;
        let id = helpers::resolve_topic(self.journal.day(day), position)?;
        self.journal
            .topic(day, id)
            .ok_or(WeekzError::TopicNotFound(id))
    }

    pub fn resource_at(&self, topic: usize, resource: usize) -> Result<&Resource> {
        let topic = self.topic_at(topic)?;
        let id = helpers::resolve_resource(topic, resource)?;
        topic
            .resource(id)
            .ok_or(WeekzError::ResourceNotFound(id))
    }

    pub fn week_strip(&self) -> WeekStrip {
        view::week_strip(&self.journal, &self.session, Local::now().date_naive())
    }

    pub fn day_topics(&self) -> DayTopics {
        view::day_topics(&self.journal, &self.session)
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn journal(&self) -> &Journal {
        &self.journal
    }

    /// Hands the backend back, mainly so tests can inspect what got
    /// flushed.
    pub fn into_store(self) -> S {
        self.store
    }

    fn finish(&mut self, result: commands::CmdResult) -> Result<commands::CmdResult> {
        if result.mutated {
            self.store.save_journal(&self.journal)?;
        }
        Ok(result)
    }

    fn topic_id_at(&self, position: usize) -> Result<TopicId> {
        let day = self.session.selected_day.ok_or(WeekzError::NoDaySelected)?;
        helpers::resolve_topic(self.journal.day(day), position)
    }

    fn resource_ids_at(&self, topic: usize, resource: usize) -> Result<(TopicId, ResourceId)> {
        let topic_id = self.topic_id_at(topic)?;
        let resource_id = helpers::resolve_resource(self.topic_at(topic)?, resource)?;
        Ok((topic_id, resource_id))
    }
}

pub use crate::commands::{CmdMessage, CmdResult, MessageLevel, ResourceDraft, ViewUpdate};
