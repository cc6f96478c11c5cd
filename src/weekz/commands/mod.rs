use crate::model::DEFAULT_BUTTON_TEXT;

pub mod change_week;
pub mod create_topic;
pub mod delete_resource;
pub mod delete_topic;
pub mod helpers;
pub mod save_resource;
pub mod select_day;

#[derive(Debug, Clone)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// Which views a command invalidated. The CLI repaints exactly these.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewUpdate {
    /// The 7-day strip with its week heading and topic-count badges.
    DayStrip,
    /// The topic/resource list for the selected day.
    TopicList,
}

/// What a command did: feedback for the user, views to repaint, and
/// whether the journal changed and needs a flush.
#[derive(Debug, Default)]
pub struct CmdResult {
    pub messages: Vec<CmdMessage>,
    pub view_updates: Vec<ViewUpdate>,
    pub mutated: bool,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_view(mut self, view: ViewUpdate) -> Self {
        self.view_updates.push(view);
        self
    }

    pub fn with_mutation(mut self) -> Self {
        self.mutated = true;
        self
    }

    pub fn repaints(&self, view: ViewUpdate) -> bool {
        self.view_updates.contains(&view)
    }
}

/// Incoming resource fields for add and edit, straight from user input.
/// Blank optional fields are dropped; a blank button text falls back to
/// the default at apply time.
#[derive(Debug, Clone, Default)]
pub struct ResourceDraft {
    pub title: String,
    pub url: Option<String>,
    pub button_text: Option<String>,
    pub description: Option<String>,
    pub time: Option<String>,
    pub screenshot: Option<String>,
}

impl ResourceDraft {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    pub(crate) fn effective_button_text(&self) -> String {
        clean(&self.button_text).unwrap_or_else(|| DEFAULT_BUTTON_TEXT.to_string())
    }
}

/// Trims a free-form optional field, turning whitespace into `None`.
pub(crate) fn clean(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
}
