use console::Style;
use once_cell::sync::Lazy;
use outstanding::{rgb_to_ansi256, Theme};

/// Style identifiers shared between templates and renderers.
pub mod names {
    pub const HEADING: &str = "heading";
    pub const LETTER: &str = "letter";
    pub const TODAY: &str = "today";
    pub const SELECTED: &str = "selected";
    pub const REGULAR: &str = "regular";
    pub const BADGE: &str = "badge";
    pub const INDEX: &str = "index";
    pub const TITLE: &str = "title";
    pub const LINK: &str = "link";
    pub const MUTED: &str = "muted";
    pub const TIME: &str = "time";
    pub const INFO: &str = "info";
    pub const SUCCESS: &str = "success";
    pub const WARNING: &str = "warning";
    pub const ERROR: &str = "error";
}

pub static WEEKZ_THEME: Lazy<Theme> = Lazy::new(|| {
    let muted = Style::new().color256(rgb_to_ansi256((154, 154, 154)));

    Theme::new()
        .add(names::HEADING, Style::new().bold())
        .add(names::LETTER, muted.clone())
        .add(names::TODAY, Style::new().cyan().bold())
        .add(names::SELECTED, Style::new().black().on_yellow())
        .add(names::REGULAR, Style::new())
        .add(names::BADGE, Style::new().yellow())
        .add(names::INDEX, Style::new().yellow())
        .add(names::TITLE, Style::new().bold())
        .add(names::LINK, Style::new().cyan().underlined())
        .add(names::MUTED, muted.clone())
        .add(names::TIME, muted.italic())
        .add(names::INFO, Style::new().dim())
        .add(names::SUCCESS, Style::new().green())
        .add(names::WARNING, Style::new().yellow().bold())
        .add(names::ERROR, Style::new().red().bold())
});
