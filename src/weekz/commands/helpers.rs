use crate::error::{Result, WeekzError};
use crate::model::{DayRecord, ResourceId, Topic, TopicId};

/// Maps a 1-based display position to the topic's stable id. Positions
/// follow the rendered order (creation order for the day).
pub fn resolve_topic(day: Option<&DayRecord>, position: usize) -> Result<TopicId> {
    let topics = day.map(DayRecord::ordered).unwrap_or_default();
    position
        .checked_sub(1)
        .and_then(|i| topics.get(i))
        .map(|t| t.id)
        .ok_or_else(|| {
            WeekzError::Api(format!(
                "No topic at position {} for the selected day",
                position
            ))
        })
}

/// Maps a 1-based display position to the resource's stable id.
pub fn resolve_resource(topic: &Topic, position: usize) -> Result<ResourceId> {
    position
        .checked_sub(1)
        .and_then(|i| topic.resources.get(i))
        .map(|r| r.id)
        .ok_or_else(|| {
            WeekzError::Api(format!(
                "No resource at position {} in '{}'",
                position, topic.title
            ))
        })
}
