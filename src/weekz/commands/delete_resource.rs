use crate::commands::{CmdMessage, CmdResult, ViewUpdate};
use crate::error::{Result, WeekzError};
use crate::model::{Journal, ResourceId, TopicId};
use crate::session::Session;

/// Removes one resource from a topic. Later resources keep their ids
/// and close the gap; the topic itself stays even when empty.
pub fn run(
    journal: &mut Journal,
    session: &Session,
    topic_id: TopicId,
    resource_id: ResourceId,
) -> Result<CmdResult> {
    let day = session.selected_day.ok_or(WeekzError::NoDaySelected)?;
    let topic = journal
        .topic_mut(day, topic_id)
        .ok_or(WeekzError::TopicNotFound(topic_id))?;
    let resource = topic
        .remove_resource(resource_id)
        .ok_or(WeekzError::ResourceNotFound(resource_id))?;

    let mut result = CmdResult::default()
        .with_mutation()
        .with_view(ViewUpdate::TopicList);
    result.add_message(CmdMessage::success(format!(
        "Resource deleted: {}",
        resource.title
    )));
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Resource, Topic};
    use chrono::NaiveDate;

    fn day() -> NaiveDate {
        "2026-03-04".parse().unwrap()
    }

    fn selected_session() -> Session {
        let mut session = Session::new(day());
        session.selected_day = Some(day());
        session
    }

    fn journal_with_resources(titles: &[&str]) -> (Journal, TopicId, Vec<ResourceId>) {
        let mut journal = Journal::default();
        let mut topic = Topic::new("Rust".to_string());
        let mut ids = Vec::new();
        for title in titles {
            let resource = Resource::new((*title).to_string());
            ids.push(resource.id);
            topic.resources.push(resource);
        }
        let topic_id = topic.id;
        journal.insert_topic(day(), topic);
        (journal, topic_id, ids)
    }

    #[test]
    fn removes_only_the_named_resource() {
        let (mut journal, topic_id, ids) = journal_with_resources(&["a", "b", "c"]);

        let result = run(&mut journal, &selected_session(), topic_id, ids[1]).unwrap();

        let topic = journal.topic(day(), topic_id).unwrap();
        let titles: Vec<&str> = topic.resources.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, vec!["a", "c"]);
        assert_eq!(topic.resources[0].id, ids[0]);
        assert_eq!(topic.resources[1].id, ids[2]);
        assert!(result.mutated);
        assert!(!result.repaints(ViewUpdate::DayStrip));
    }

    #[test]
    fn emptied_topic_stays_in_the_journal() {
        let (mut journal, topic_id, ids) = journal_with_resources(&["only"]);

        run(&mut journal, &selected_session(), topic_id, ids[0]).unwrap();

        let topic = journal.topic(day(), topic_id).unwrap();
        assert!(topic.resources.is_empty());
    }

    #[test]
    fn unknown_resource_is_an_error() {
        let (mut journal, topic_id, _) = journal_with_resources(&["a"]);

        let result = run(
            &mut journal,
            &selected_session(),
            topic_id,
            ResourceId::new(),
        );
        assert!(matches!(result, Err(WeekzError::ResourceNotFound(_))));
        assert_eq!(journal.topic(day(), topic_id).unwrap().resources.len(), 1);
    }
}
