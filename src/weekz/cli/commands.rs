//! Command handlers wiring the CLI to the tracker.
//!
//! Each handler calls the tracker, repaints whatever views the command
//! reported stale, and prints the structured messages that came back. This is
//! the only layer that touches stdout, stderr, or the prompt.

use std::io::{self, Write};
use std::path::PathBuf;

use chrono::{Local, NaiveDate};
use clap::Parser;
use directories::ProjectDirs;

use weekz::api::{CmdMessage, CmdResult, ResourceDraft, Tracker, ViewUpdate};
use weekz::config::WeekzConfig;
use weekz::error::{Result, WeekzError};
use weekz::store::fs::FileStore;
use weekz::timespan::{TimeWheel, MAX_HOUR};

use super::render;
use super::setup::{Cli, Commands, EntryCommands, MiscCommands, NavCommands};

struct AppContext {
    tracker: Tracker<FileStore>,
    config: WeekzConfig,
    data_dir: PathBuf,
}

/// Optional resource fields shared by `link` and `edit`.
struct ResourceFlags {
    url: Option<String>,
    button_text: Option<String>,
    description: Option<String>,
    time: Option<String>,
    hours: Option<u32>,
    minutes: Option<u32>,
    screenshot: Option<String>,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let mut ctx = init_context()?;

    match cli.command {
        Some(Commands::Nav(NavCommands::Show)) | None => handle_show(&ctx),
        Some(Commands::Nav(NavCommands::Day { date })) => handle_day(&mut ctx, &date),
        Some(Commands::Nav(NavCommands::Next)) => handle_week_shift(&mut ctx, 1),
        Some(Commands::Nav(NavCommands::Prev)) => handle_week_shift(&mut ctx, -1),
        Some(Commands::Entry(EntryCommands::Add { title })) => handle_add(&mut ctx, title),
        Some(Commands::Entry(EntryCommands::Rm { topic, yes })) => handle_rm(&mut ctx, topic, yes),
        Some(Commands::Entry(EntryCommands::Link {
            topic,
            url,
            button_text,
            description,
            time,
            hours,
            minutes,
            screenshot,
            title,
        })) => handle_link(
            &mut ctx,
            topic,
            title,
            ResourceFlags {
                url,
                button_text,
                description,
                time,
                hours,
                minutes,
                screenshot,
            },
        ),
        Some(Commands::Entry(EntryCommands::Edit {
            topic,
            resource,
            url,
            button_text,
            description,
            time,
            hours,
            minutes,
            screenshot,
            title,
        })) => handle_edit(
            &mut ctx,
            topic,
            resource,
            title,
            ResourceFlags {
                url,
                button_text,
                description,
                time,
                hours,
                minutes,
                screenshot,
            },
        ),
        Some(Commands::Entry(EntryCommands::Unlink {
            topic,
            resource,
            yes,
        })) => handle_unlink(&mut ctx, topic, resource, yes),
        Some(Commands::Misc(MiscCommands::Config { key, value })) => {
            handle_config(&mut ctx, key, value)
        }
    }
}

fn init_context() -> Result<AppContext> {
    let data_dir = match std::env::var_os("WEEKZ_HOME") {
        Some(dir) => PathBuf::from(dir),
        None => ProjectDirs::from("com", "weekz", "weekz")
            .expect("Could not determine data dir")
            .data_dir()
            .to_path_buf(),
    };

    let config = WeekzConfig::load(&data_dir).unwrap_or_default();
    let tracker = Tracker::open(FileStore::new(data_dir.clone()))?;

    Ok(AppContext {
        tracker,
        config,
        data_dir,
    })
}

fn handle_show(ctx: &AppContext) -> Result<()> {
    let strip = render::render_week_strip(&ctx.tracker.week_strip());
    let topics = render::render_day_topics(&ctx.tracker.day_topics());
    print!("{}\n{}", strip, topics);
    Ok(())
}

fn handle_day(ctx: &mut AppContext, date: &str) -> Result<()> {
    let date = parse_day(date)?;
    let result = ctx.tracker.select_day(date)?;
    present(ctx, &result);
    Ok(())
}

fn handle_week_shift(ctx: &mut AppContext, weeks: i64) -> Result<()> {
    let result = ctx.tracker.change_week(weeks)?;
    present(ctx, &result);
    Ok(())
}

fn handle_add(ctx: &mut AppContext, title: Vec<String>) -> Result<()> {
    let result = ctx.tracker.create_topic(&title.join(" "))?;
    present(ctx, &result);
    Ok(())
}

fn handle_rm(ctx: &mut AppContext, topic: usize, yes: bool) -> Result<()> {
    let title = ctx.tracker.topic_at(topic)?.title.clone();
    let prompt = format!("Delete \"{}\" and all its resources?", title);
    if !confirmed(ctx, yes, &prompt)? {
        render::print_messages(&[CmdMessage::info("Operation cancelled.")]);
        return Ok(());
    }

    let result = ctx.tracker.delete_topic(topic)?;
    present(ctx, &result);
    Ok(())
}

fn handle_link(
    ctx: &mut AppContext,
    topic: usize,
    title: Vec<String>,
    flags: ResourceFlags,
) -> Result<()> {
    let mut draft = ResourceDraft::new(title.join(" "));
    draft.url = flags.url;
    draft.button_text = flags
        .button_text
        .or_else(|| Some(ctx.config.default_button_text.clone()));
    draft.description = flags.description;
    draft.time = resolve_time(flags.time, flags.hours, flags.minutes, None)?;
    draft.screenshot = flags.screenshot;

    let result = ctx.tracker.add_resource(topic, &draft)?;
    present(ctx, &result);
    Ok(())
}

fn handle_edit(
    ctx: &mut AppContext,
    topic: usize,
    resource: usize,
    title: Vec<String>,
    flags: ResourceFlags,
) -> Result<()> {
    let current = ctx.tracker.resource_at(topic, resource)?.clone();

    let title = if title.is_empty() {
        current.title.clone()
    } else {
        title.join(" ")
    };

    let mut draft = ResourceDraft::new(title);
    draft.url = flags.url.or(current.url);
    draft.button_text = flags.button_text.or(Some(current.button_text));
    draft.description = flags.description.or(current.description);
    draft.time = resolve_time(
        flags.time,
        flags.hours,
        flags.minutes,
        current.time.as_deref(),
    )?;
    draft.screenshot = flags.screenshot.or(current.screenshot);

    let result = ctx.tracker.edit_resource(topic, resource, &draft)?;
    present(ctx, &result);
    Ok(())
}

fn handle_unlink(ctx: &mut AppContext, topic: usize, resource: usize, yes: bool) -> Result<()> {
    let title = ctx.tracker.resource_at(topic, resource)?.title.clone();
    let prompt = format!("Delete resource \"{}\"?", title);
    if !confirmed(ctx, yes, &prompt)? {
        render::print_messages(&[CmdMessage::info("Operation cancelled.")]);
        return Ok(());
    }

    let result = ctx.tracker.delete_resource(topic, resource)?;
    present(ctx, &result);
    Ok(())
}

fn handle_config(ctx: &mut AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    match (key, value) {
        (None, _) => {
            for (name, value) in ctx.config.entries() {
                println!("{} = {}", name, value);
            }
        }
        (Some(key), None) => match ctx.config.get(&key) {
            Some(value) => println!("{} = {}", key, value),
            None => println!("Unknown config key: {}", key),
        },
        (Some(key), Some(value)) => {
            ctx.config.set(&key, &value)?;
            ctx.config.save(&ctx.data_dir)?;
            render::print_messages(&[CmdMessage::success(format!("{} set to {}", key, value))]);
        }
    }
    Ok(())
}

/// Paints the views a command invalidated, then its messages.
fn present(ctx: &AppContext, result: &CmdResult) {
    let sections: Vec<String> = result
        .view_updates
        .iter()
        .map(|update| match update {
            ViewUpdate::DayStrip => render::render_week_strip(&ctx.tracker.week_strip()),
            ViewUpdate::TopicList => render::render_day_topics(&ctx.tracker.day_topics()),
        })
        .collect();

    if !sections.is_empty() {
        print!("{}", sections.join("\n"));
    }
    render::print_messages(&result.messages);
}

fn confirmed(ctx: &AppContext, yes: bool, prompt: &str) -> Result<bool> {
    if yes || !ctx.config.confirm_deletes {
        return Ok(true);
    }

    print!("{} [y/N] ", prompt);
    io::stdout().flush().map_err(WeekzError::Io)?;

    let mut input = String::new();
    io::stdin().read_line(&mut input).map_err(WeekzError::Io)?;
    Ok(matches!(input.trim(), "y" | "Y"))
}

fn parse_day(input: &str) -> Result<NaiveDate> {
    if input.eq_ignore_ascii_case("today") {
        return Ok(Local::now().date_naive());
    }
    NaiveDate::parse_from_str(input, "%Y-%m-%d").map_err(|_| {
        WeekzError::Api(format!(
            "Invalid date: {} (expected YYYY-MM-DD or \"today\")",
            input
        ))
    })
}

/// Resolves the three time inputs into one stored label. A free-form
/// `--time` wins; `--hours`/`--minutes` turn the wheel, re-seeded from the
/// current label when editing.
fn resolve_time(
    time: Option<String>,
    hours: Option<u32>,
    minutes: Option<u32>,
    current: Option<&str>,
) -> Result<Option<String>> {
    if let Some(text) = time {
        return Ok(Some(text));
    }
    if hours.is_none() && minutes.is_none() {
        return Ok(current.map(str::to_string));
    }

    if let Some(h) = hours {
        if h > MAX_HOUR {
            return Err(WeekzError::Api(format!(
                "Hours must be between 0 and {}",
                MAX_HOUR
            )));
        }
    }
    if let Some(m) = minutes {
        if m > 59 {
            return Err(WeekzError::Api("Minutes must be between 0 and 59".into()));
        }
    }

    let mut wheel = match current {
        Some(label) => TimeWheel::from_label(label),
        None => TimeWheel::new(),
    };
    if let Some(h) = hours {
        wheel.select_hour(h);
    }
    if let Some(m) = minutes {
        wheel.select_minute(m);
    }
    // A minutes-only selection reads as zero hours
    if wheel.hour().is_none() && wheel.minute().is_some() {
        wheel.select_hour(0);
    }

    Ok(wheel.label())
}
