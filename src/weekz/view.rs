use chrono::{DateTime, Datelike, NaiveDate, Utc};

use crate::model::Journal;
use crate::session::Session;

const DAY_LETTERS: [&str; 7] = ["S", "M", "T", "W", "T", "F", "S"];

/// One cell of the 7-day strip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayCell {
    pub date: NaiveDate,
    pub letter: &'static str,
    pub day_of_month: u32,
    pub topic_count: usize,
    pub selected: bool,
    pub today: bool,
}

/// The displayed week: heading range plus seven cells, Sunday first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeekStrip {
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub days: Vec<DayCell>,
}

/// A resource prepared for display, in list position order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceView {
    pub position: usize,
    pub title: String,
    pub url: Option<String>,
    pub button_text: String,
    pub description: Option<String>,
    pub time: Option<String>,
    pub screenshot: Option<String>,
    pub added_at: DateTime<Utc>,
    pub edited_at: Option<DateTime<Utc>>,
}

/// A topic prepared for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopicView {
    pub position: usize,
    pub title: String,
    pub created_at: DateTime<Utc>,
    pub resources: Vec<ResourceView>,
}

/// The topic list for the selected day. `selected` is `None` when no
/// day has been picked yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayTopics {
    pub selected: Option<NaiveDate>,
    pub topics: Vec<TopicView>,
}

pub fn week_strip(journal: &Journal, session: &Session, today: NaiveDate) -> WeekStrip {
    let window = session.window();
    let days = window
        .days()
        .map(|date| DayCell {
            date,
            letter: DAY_LETTERS[date.weekday().num_days_from_sunday() as usize],
            day_of_month: date.day(),
            topic_count: journal.topic_count(date),
            selected: session.selected_day == Some(date),
            today: date == today,
        })
        .collect();

    WeekStrip {
        start: window.start(),
        end: window.end(),
        days,
    }
}

pub fn day_topics(journal: &Journal, session: &Session) -> DayTopics {
    let Some(selected) = session.selected_day else {
        return DayTopics {
            selected: None,
            topics: Vec::new(),
        };
    };

    let topics = journal
        .day(selected)
        .map(|day| day.ordered())
        .unwrap_or_default()
        .into_iter()
        .enumerate()
        .map(|(i, topic)| TopicView {
            position: i + 1,
            title: topic.title.clone(),
            created_at: topic.created_at,
            resources: topic
                .resources
                .iter()
                .enumerate()
                .map(|(j, resource)| ResourceView {
                    position: j + 1,
                    title: resource.title.clone(),
                    url: resource.url.clone(),
                    button_text: resource.button_text.clone(),
                    description: resource.description.clone(),
                    time: resource.time.clone(),
                    screenshot: resource.screenshot.clone(),
                    added_at: resource.added_at,
                    edited_at: resource.edited_at,
                })
                .collect(),
        })
        .collect();

    DayTopics {
        selected: Some(selected),
        topics,
    }
}
