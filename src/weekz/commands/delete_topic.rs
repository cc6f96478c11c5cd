use crate::commands::{CmdMessage, CmdResult, ViewUpdate};
use crate::error::{Result, WeekzError};
use crate::model::{Journal, TopicId};
use crate::session::Session;

/// Removes a topic and everything attached to it. The confirmation
/// prompt happens in the CLI layer; by the time this runs the decision
/// is made.
pub fn run(journal: &mut Journal, session: &Session, id: TopicId) -> Result<CmdResult> {
    let day = session.selected_day.ok_or(WeekzError::NoDaySelected)?;
    let topic = journal
        .remove_topic(day, id)
        .ok_or(WeekzError::TopicNotFound(id))?;

    let mut result = CmdResult::default()
        .with_mutation()
        .with_view(ViewUpdate::DayStrip)
        .with_view(ViewUpdate::TopicList);
    result.add_message(CmdMessage::success(format!("Topic deleted: {}", topic.title)));
    Ok(result)
}
