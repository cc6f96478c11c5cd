use crate::commands::{CmdMessage, CmdResult, ViewUpdate};
use crate::error::{Result, WeekzError};
use crate::model::{Journal, Topic};
use crate::session::Session;

/// Creates a topic under the selected day. A title that trims to empty
/// is ignored outright: no message, no mutation, no flush.
pub fn run(journal: &mut Journal, session: &Session, title: &str) -> Result<CmdResult> {
    let title = title.trim();
    if title.is_empty() {
        return Ok(CmdResult::default());
    }

    let day = session.selected_day.ok_or(WeekzError::NoDaySelected)?;
    let topic = Topic::new(title.to_string());
    let mut result = CmdResult::default()
        .with_mutation()
        .with_view(ViewUpdate::DayStrip)
        .with_view(ViewUpdate::TopicList);
    result.add_message(CmdMessage::success(format!("Topic created: {}", topic.title)));
    journal.insert_topic(day, topic);

    Ok(result)
}
