use std::collections::{BTreeMap, HashMap};
use std::fmt;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub const DEFAULT_BUTTON_TEXT: &str = "Link";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TopicId(Uuid);

impl TopicId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for TopicId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for TopicId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResourceId(Uuid);

impl ResourceId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ResourceId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ResourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// A link, document, or note attached to a topic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resource {
    pub id: ResourceId,
    pub title: String,
    pub url: Option<String>,
    #[serde(default = "default_button_text")]
    pub button_text: String,
    pub description: Option<String>,
    /// Free-form duration label, e.g. "1 hour 30 mins".
    pub time: Option<String>,
    pub screenshot: Option<String>,
    pub added_at: DateTime<Utc>,
    pub edited_at: Option<DateTime<Utc>>,
}

fn default_button_text() -> String {
    DEFAULT_BUTTON_TEXT.to_string()
}

impl Resource {
    pub fn new(title: String) -> Self {
        Self {
            id: ResourceId::new(),
            title,
            url: None,
            button_text: default_button_text(),
            description: None,
            time: None,
            screenshot: None,
            added_at: Utc::now(),
            edited_at: None,
        }
    }
}

/// A subject of study recorded for one calendar day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Topic {
    pub id: TopicId,
    pub title: String,
    pub resources: Vec<Resource>,
    pub created_at: DateTime<Utc>,
}

impl Topic {
    pub fn new(title: String) -> Self {
        Self {
            id: TopicId::new(),
            title,
            resources: Vec::new(),
            created_at: Utc::now(),
        }
    }

    pub fn resource(&self, id: ResourceId) -> Option<&Resource> {
        self.resources.iter().find(|r| r.id == id)
    }

    pub fn resource_mut(&mut self, id: ResourceId) -> Option<&mut Resource> {
        self.resources.iter_mut().find(|r| r.id == id)
    }

    /// Removes a resource by id, keeping the order of the remaining ones.
    pub fn remove_resource(&mut self, id: ResourceId) -> Option<Resource> {
        let pos = self.resources.iter().position(|r| r.id == id)?;
        Some(self.resources.remove(pos))
    }
}

/// Everything recorded for one calendar day, keyed by topic id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DayRecord {
    pub topics: HashMap<TopicId, Topic>,
}

impl DayRecord {
    pub fn len(&self) -> usize {
        self.topics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.topics.is_empty()
    }

    /// Topics in creation order. Ids break the (unlikely) timestamp tie so
    /// the order is stable across calls.
    pub fn ordered(&self) -> Vec<&Topic> {
        let mut topics: Vec<&Topic> = self.topics.values().collect();
        topics.sort_by_key(|t| (t.created_at, t.id));
        topics
    }
}

/// The full journal: day -> topics -> resources.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Journal {
    pub days: BTreeMap<NaiveDate, DayRecord>,
}

impl Journal {
    pub fn day(&self, date: NaiveDate) -> Option<&DayRecord> {
        self.days.get(&date)
    }

    pub fn topic_count(&self, date: NaiveDate) -> usize {
        self.days.get(&date).map_or(0, DayRecord::len)
    }

    pub fn topic(&self, date: NaiveDate, id: TopicId) -> Option<&Topic> {
        self.days.get(&date)?.topics.get(&id)
    }

    pub fn topic_mut(&mut self, date: NaiveDate, id: TopicId) -> Option<&mut Topic> {
        self.days.get_mut(&date)?.topics.get_mut(&id)
    }

    pub fn insert_topic(&mut self, date: NaiveDate, topic: Topic) {
        self.days.entry(date).or_default().topics.insert(topic.id, topic);
    }

    /// Removes a topic and drops the day record entirely once its last
    /// topic is gone, so no empty day lingers in the journal.
    pub fn remove_topic(&mut self, date: NaiveDate, id: TopicId) -> Option<Topic> {
        let day = self.days.get_mut(&date)?;
        let removed = day.topics.remove(&id);
        if removed.is_some() && day.is_empty() {
            self.days.remove(&date);
        }
        removed
    }
}
