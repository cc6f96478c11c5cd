use chrono::Utc;

use crate::commands::{clean, CmdMessage, CmdResult, ResourceDraft, ViewUpdate};
use crate::error::{Result, WeekzError};
use crate::model::{Journal, Resource, ResourceId, TopicId};
use crate::session::Session;

/// Adds a resource to a topic, or edits one in place when `target`
/// names an existing resource. Only the title is validated; a blank
/// title makes the whole call a silent no-op. Edits keep `added_at`
/// and stamp `edited_at`.
pub fn run(
    journal: &mut Journal,
    session: &Session,
    topic_id: TopicId,
    draft: &ResourceDraft,
    target: Option<ResourceId>,
) -> Result<CmdResult> {
    let title = draft.title.trim();
    if title.is_empty() {
        return Ok(CmdResult::default());
    }

    let day = session.selected_day.ok_or(WeekzError::NoDaySelected)?;
    let topic = journal
        .topic_mut(day, topic_id)
        .ok_or(WeekzError::TopicNotFound(topic_id))?;

    let message = match target {
        None => {
            let mut resource = Resource::new(title.to_string());
            apply_draft(&mut resource, draft);
            topic.resources.push(resource);
            CmdMessage::success(format!("Resource added: {}", title))
        }
        Some(resource_id) => {
            let resource = topic
                .resource_mut(resource_id)
                .ok_or(WeekzError::ResourceNotFound(resource_id))?;
            resource.title = title.to_string();
            apply_draft(resource, draft);
            resource.edited_at = Some(Utc::now());
            CmdMessage::success(format!("Resource updated: {}", title))
        }
    };

    let mut result = CmdResult::default()
        .with_mutation()
        .with_view(ViewUpdate::TopicList);
    result.add_message(message);
    Ok(result)
}

fn apply_draft(resource: &mut Resource, draft: &ResourceDraft) {
    resource.url = clean(&draft.url);
    resource.button_text = draft.effective_button_text();
    resource.description = clean(&draft.description);
    resource.time = clean(&draft.time);
    resource.screenshot = clean(&draft.screenshot);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Topic;
    use chrono::NaiveDate;
    use std::thread;
    use std::time::Duration;

    fn day() -> NaiveDate {
        "2026-03-04".parse().unwrap()
    }

    fn selected_session() -> Session {
        let mut session = Session::new(day());
        session.selected_day = Some(day());
        session
    }

    fn journal_with_topic() -> (Journal, TopicId) {
        let mut journal = Journal::default();
        let topic = Topic::new("Rust traits".to_string());
        let id = topic.id;
        journal.insert_topic(day(), topic);
        (journal, id)
    }

    #[test]
    fn add_appends_a_resource() {
        let (mut journal, topic_id) = journal_with_topic();
        let mut draft = ResourceDraft::new("The Book");
        draft.url = Some("https://doc.rust-lang.org/book/".to_string());
        draft.time = Some("1 hour 30 mins".to_string());

        let result = run(&mut journal, &selected_session(), topic_id, &draft, None).unwrap();

        let topic = journal.topic(day(), topic_id).unwrap();
        assert_eq!(topic.resources.len(), 1);
        let resource = &topic.resources[0];
        assert_eq!(resource.title, "The Book");
        assert_eq!(resource.url.as_deref(), Some("https://doc.rust-lang.org/book/"));
        assert_eq!(resource.button_text, "Link");
        assert_eq!(resource.edited_at, None);
        assert!(result.mutated);
        assert!(result.repaints(ViewUpdate::TopicList));
        assert!(!result.repaints(ViewUpdate::DayStrip));
    }

    #[test]
    fn blank_title_is_a_silent_no_op() {
        let (mut journal, topic_id) = journal_with_topic();
        let before = journal.clone();

        let result = run(
            &mut journal,
            &selected_session(),
            topic_id,
            &ResourceDraft::new("   "),
            None,
        )
        .unwrap();

        assert_eq!(journal, before);
        assert!(!result.mutated);
        assert!(result.messages.is_empty());
    }

    #[test]
    fn blank_optional_fields_become_none() {
        let (mut journal, topic_id) = journal_with_topic();
        let mut draft = ResourceDraft::new("notes");
        draft.url = Some("  ".to_string());
        draft.description = Some(" why it matters ".to_string());

        run(&mut journal, &selected_session(), topic_id, &draft, None).unwrap();

        let resource = &journal.topic(day(), topic_id).unwrap().resources[0];
        assert_eq!(resource.url, None);
        assert_eq!(resource.description.as_deref(), Some("why it matters"));
    }

    #[test]
    fn edit_preserves_added_at_and_stamps_edited_at() {
        let (mut journal, topic_id) = journal_with_topic();
        run(
            &mut journal,
            &selected_session(),
            topic_id,
            &ResourceDraft::new("old title"),
            None,
        )
        .unwrap();
        let resource_id = journal.topic(day(), topic_id).unwrap().resources[0].id;
        let added_at = journal.topic(day(), topic_id).unwrap().resources[0].added_at;

        thread::sleep(Duration::from_millis(5));
        let mut draft = ResourceDraft::new("new title");
        draft.url = Some("https://example.com".to_string());
        run(
            &mut journal,
            &selected_session(),
            topic_id,
            &draft,
            Some(resource_id),
        )
        .unwrap();

        let resource = &journal.topic(day(), topic_id).unwrap().resources[0];
        assert_eq!(resource.title, "new title");
        assert_eq!(resource.added_at, added_at);
        let edited_at = resource.edited_at.unwrap();
        assert!(edited_at > added_at);
        assert_eq!(resource.id, resource_id);
    }

    #[test]
    fn edit_replaces_every_field_from_the_draft() {
        let (mut journal, topic_id) = journal_with_topic();
        let mut draft = ResourceDraft::new("full");
        draft.url = Some("https://example.com".to_string());
        draft.description = Some("desc".to_string());
        draft.time = Some("45 mins".to_string());
        run(&mut journal, &selected_session(), topic_id, &draft, None).unwrap();
        let resource_id = journal.topic(day(), topic_id).unwrap().resources[0].id;

        // An edit that clears the optional fields really clears them.
        run(
            &mut journal,
            &selected_session(),
            topic_id,
            &ResourceDraft::new("bare"),
            Some(resource_id),
        )
        .unwrap();

        let resource = &journal.topic(day(), topic_id).unwrap().resources[0];
        assert_eq!(resource.url, None);
        assert_eq!(resource.description, None);
        assert_eq!(resource.time, None);
    }

    #[test]
    fn unknown_topic_is_an_error() {
        let (mut journal, _) = journal_with_topic();
        let result = run(
            &mut journal,
            &selected_session(),
            TopicId::new(),
            &ResourceDraft::new("x"),
            None,
        );
        assert!(matches!(result, Err(WeekzError::TopicNotFound(_))));
    }

    #[test]
    fn unknown_resource_is_an_error() {
        let (mut journal, topic_id) = journal_with_topic();
        let result = run(
            &mut journal,
            &selected_session(),
            topic_id,
            &ResourceDraft::new("x"),
            Some(ResourceId::new()),
        );
        assert!(matches!(result, Err(WeekzError::ResourceNotFound(_))));
    }
}
