//! Styled terminal output for the two weekz views.
//!
//! Layout math (column widths, truncation, padding) stays in Rust because it
//! needs Unicode-aware width handling. The templates pick styles off semantic
//! fields and decide which lines to emit, nothing more.

use super::styles::{names, WEEKZ_THEME};
use super::templates::{MESSAGES_TEMPLATE, STRIP_TEMPLATE, TOPICS_TEMPLATE};
use chrono::{DateTime, Utc};
use outstanding::{render, render_with_color, ThemeChoice};
use serde::Serialize;
use unicode_width::UnicodeWidthStr;
use weekz::api::{CmdMessage, MessageLevel};
use weekz::view::{DayTopics, ResourceView, TopicView, WeekStrip};

/// Configuration for list rendering.
pub const LINE_WIDTH: usize = 100;
pub const TIME_WIDTH: usize = 14;
pub const COL_WIDTH: usize = 7;
pub const TODAY_MARKER: &str = "•";

/// One column of the weekday-letter row.
#[derive(Serialize)]
struct LetterCell {
    text: String,
    style: String,
    pad: String,
}

/// One column of the day-of-month row. `badge` is empty when the day has
/// no topics; `pad` is empty on the last column.
#[derive(Serialize)]
struct DayCellData {
    day: String,
    style: String,
    badge: String,
    pad: String,
}

#[derive(Serialize)]
struct StripData {
    heading: String,
    letters: Vec<LetterCell>,
    days: Vec<DayCellData>,
}

/// A resource line plus its detail lines, pre-formatted.
#[derive(Serialize)]
struct ResourceLineData {
    index: String,
    title: String,
    edited: bool,
    has_link: bool,
    button_text: String,
    url: String,
    has_description: bool,
    description: String,
    has_time: bool,
    time: String,
    has_screenshot: bool,
    screenshot: String,
}

#[derive(Serialize)]
struct TopicLineData {
    index: String,
    title: String,
    padding: String,
    time_ago: String,
    has_resources: bool,
    resources: Vec<ResourceLineData>,
}

#[derive(Serialize)]
struct TopicsData {
    has_selection: bool,
    heading: String,
    empty: bool,
    topics: Vec<TopicLineData>,
}

#[derive(Serialize)]
struct MessageData {
    content: String,
    style: String,
}

#[derive(Serialize)]
struct MessagesData {
    messages: Vec<MessageData>,
}

/// Renders the 7-day strip with its week heading.
pub fn render_week_strip(strip: &WeekStrip) -> String {
    render_week_strip_internal(strip, None)
}

fn render_week_strip_internal(strip: &WeekStrip, use_color: Option<bool>) -> String {
    let heading = format!(
        "{} - {}",
        strip.start.format("%b %-d"),
        strip.end.format("%b %-d")
    );

    let last = strip.days.len().saturating_sub(1);
    let mut letters = Vec::new();
    let mut days = Vec::new();

    for (i, cell) in strip.days.iter().enumerate() {
        let text = if cell.today {
            format!("{}{}", cell.letter, TODAY_MARKER)
        } else {
            cell.letter.to_string()
        };
        let letter_style = if cell.today {
            names::TODAY
        } else {
            names::LETTER
        };
        let letter_pad = column_pad(text.width(), i == last);
        letters.push(LetterCell {
            text,
            style: letter_style.to_string(),
            pad: letter_pad,
        });

        let day = if cell.selected {
            format!("[{}]", cell.day_of_month)
        } else {
            cell.day_of_month.to_string()
        };
        let style = if cell.selected {
            names::SELECTED
        } else if cell.today {
            names::TODAY
        } else {
            names::REGULAR
        };
        let badge = if cell.topic_count > 0 {
            format!("·{}", cell.topic_count)
        } else {
            String::new()
        };
        let pad = column_pad(day.width() + badge.width(), i == last);
        days.push(DayCellData {
            day,
            style: style.to_string(),
            badge,
            pad,
        });
    }

    let data = StripData {
        heading,
        letters,
        days,
    };

    render_template(STRIP_TEMPLATE, &data, use_color)
}

/// Renders the topic/resource list for the selected day.
pub fn render_day_topics(view: &DayTopics) -> String {
    render_day_topics_internal(view, None)
}

fn render_day_topics_internal(view: &DayTopics, use_color: Option<bool>) -> String {
    let heading = view
        .selected
        .map(|d| d.format("%a, %b %-d").to_string())
        .unwrap_or_default();

    let data = TopicsData {
        has_selection: view.selected.is_some(),
        heading,
        empty: view.topics.is_empty(),
        topics: view.topics.iter().map(topic_line).collect(),
    };

    render_template(TOPICS_TEMPLATE, &data, use_color)
}

fn topic_line(topic: &TopicView) -> TopicLineData {
    let index = format!("{}. ", topic.position);
    let fixed = index.width() + 2 + TIME_WIDTH;
    let available = LINE_WIDTH.saturating_sub(fixed);
    let title = truncate_to_width(&topic.title, available);
    let padding = " ".repeat(available.saturating_sub(title.width()) + 2);

    TopicLineData {
        index,
        title,
        padding,
        time_ago: format_time_ago(topic.created_at),
        has_resources: !topic.resources.is_empty(),
        resources: topic.resources.iter().map(resource_line).collect(),
    }
}

fn resource_line(res: &ResourceView) -> ResourceLineData {
    let index = format!("   {}) ", res.position);
    let edited = res.edited_at.is_some();
    let suffix = if edited { " (edited)".width() } else { 0 };
    let available = LINE_WIDTH.saturating_sub(index.width() + suffix);
    let title = truncate_to_width(&res.title, available);

    ResourceLineData {
        index,
        title,
        edited,
        has_link: res.url.is_some(),
        button_text: res.button_text.clone(),
        url: res.url.clone().unwrap_or_default(),
        has_description: res.description.is_some(),
        description: res.description.clone().unwrap_or_default(),
        has_time: res.time.is_some(),
        time: res.time.clone().unwrap_or_default(),
        has_screenshot: res.screenshot.is_some(),
        screenshot: res.screenshot.clone().unwrap_or_default(),
    }
}

/// Renders command messages with level styling.
pub fn render_messages(messages: &[CmdMessage]) -> String {
    if messages.is_empty() {
        return String::new();
    }

    let message_data: Vec<MessageData> = messages
        .iter()
        .map(|msg| {
            let style = match msg.level {
                MessageLevel::Info => names::INFO,
                MessageLevel::Success => names::SUCCESS,
                MessageLevel::Warning => names::WARNING,
                MessageLevel::Error => names::ERROR,
            };
            MessageData {
                content: msg.content.clone(),
                style: style.to_string(),
            }
        })
        .collect();

    let data = MessagesData {
        messages: message_data,
    };

    render(MESSAGES_TEMPLATE, &data, ThemeChoice::from(&*WEEKZ_THEME)).unwrap_or_else(|_| {
        messages
            .iter()
            .map(|m| format!("{}\n", m.content))
            .collect()
    })
}

/// Prints command messages to stdout.
pub fn print_messages(messages: &[CmdMessage]) {
    let output = render_messages(messages);
    if !output.is_empty() {
        print!("{}", output);
    }
}

fn render_template<T: Serialize>(template: &str, data: &T, use_color: Option<bool>) -> String {
    match use_color {
        Some(c) => render_with_color(template, data, ThemeChoice::from(&*WEEKZ_THEME), c),
        None => render(template, data, ThemeChoice::from(&*WEEKZ_THEME)),
    }
    .unwrap_or_else(|e| format!("Render error: {}\n", e))
}

fn column_pad(used: usize, is_last: bool) -> String {
    if is_last {
        String::new()
    } else {
        " ".repeat(COL_WIDTH.saturating_sub(used).max(1))
    }
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    use unicode_width::UnicodeWidthChar;

    let mut result = String::new();
    let mut current_width = 0;
    let limit = max_width.saturating_sub(1);

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > limit {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}

fn format_time_ago(timestamp: DateTime<Utc>) -> String {
    let now = Utc::now();
    let duration = now.signed_duration_since(timestamp);

    let formatter = timeago::Formatter::new();
    let time_str = formatter.convert(duration.to_std().unwrap_or_default());

    // Right-aligned so the "ago" suffixes stack in one column
    format!("{:>width$}", time_str, width = TIME_WIDTH)
}
