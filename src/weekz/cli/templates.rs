//! Templates for terminal output, rendered through `outstanding`.
//!
//! Templates live in stand-alone files under `templates/` and are pulled in
//! here as string constants, which keeps them easy to read and diff. They are
//! minijinja based; whitespace is significant, so every line break is written
//! exactly where the output needs one. Anything that takes real logic (widths,
//! truncation, padding, style selection) is computed in Rust and handed over
//! pre-formatted.

pub const STRIP_TEMPLATE: &str = include_str!("templates/strip.tmp");
pub const TOPICS_TEMPLATE: &str = include_str!("templates/topics.tmp");
pub const MESSAGES_TEMPLATE: &str = include_str!("templates/messages.tmp");
