use clap::{Parser, Subcommand};

/// Returns the version string, including git hash and commit date for non-release builds.
/// Format: "0.4.1" for releases, "0.4.1@abc1234 2024-01-15 14:30" for dev builds
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const GIT_COMMIT_DATE: &str = env!("GIT_COMMIT_DATE");
    const IS_RELEASE: &str = env!("IS_RELEASE");

    // Use a static to compute the version string once
    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if IS_RELEASE == "true" || GIT_HASH.is_empty() {
            VERSION.to_string()
        } else {
            format!("{}@{} {}", VERSION, GIT_HASH, GIT_COMMIT_DATE)
        }
    })
}

#[derive(Parser, Debug)]
#[command(name = "weekz", bin_name = "weekz", version = get_version())]
#[command(about = "A weekly learning journal for the command line", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    #[command(flatten)]
    Nav(NavCommands),

    #[command(flatten)]
    Entry(EntryCommands),

    #[command(flatten)]
    Misc(MiscCommands),
}

#[derive(Subcommand, Debug)]
pub enum NavCommands {
    /// Show the week strip and the selected day's entries
    #[command(alias = "s", display_order = 1)]
    Show,

    /// Select a day
    #[command(alias = "d", display_order = 2)]
    Day {
        /// Date to select (YYYY-MM-DD or "today")
        date: String,
    },

    /// Move the strip one week forward
    #[command(alias = "n", display_order = 3)]
    Next,

    /// Move the strip one week back
    #[command(alias = "p", display_order = 4)]
    Prev,
}

#[derive(Subcommand, Debug)]
pub enum EntryCommands {
    /// Create a topic on the selected day
    #[command(alias = "a", display_order = 10)]
    Add {
        /// Title words (joined with spaces)
        #[arg(required = true, trailing_var_arg = true)]
        title: Vec<String>,
    },

    /// Delete a topic and all its resources
    #[command(display_order = 11)]
    Rm {
        /// Topic position as shown in the list (e.g. 1)
        topic: usize,

        /// Skip confirmation
        #[arg(long, short = 'y')]
        yes: bool,
    },

    /// Attach a resource to a topic
    #[command(alias = "l", display_order = 12)]
    Link {
        /// Topic position as shown in the list (e.g. 1)
        topic: usize,

        /// Resource URL
        #[arg(long)]
        url: Option<String>,

        /// Label for the link button
        #[arg(long, value_name = "TEXT")]
        button_text: Option<String>,

        /// Short description
        #[arg(long = "desc", value_name = "TEXT")]
        description: Option<String>,

        /// Time spent, free form (e.g. "1 hour 30 mins")
        #[arg(long, conflicts_with_all = ["hours", "minutes"])]
        time: Option<String>,

        /// Hours spent (0-12)
        #[arg(long, value_name = "N")]
        hours: Option<u32>,

        /// Minutes spent, snapped down to steps of 5
        #[arg(long, value_name = "N")]
        minutes: Option<u32>,

        /// Screenshot path or URI
        #[arg(long, value_name = "URI")]
        screenshot: Option<String>,

        /// Resource title words (joined with spaces)
        #[arg(required = true, trailing_var_arg = true)]
        title: Vec<String>,
    },

    /// Edit a resource in place
    #[command(alias = "e", display_order = 13)]
    Edit {
        /// Topic position as shown in the list (e.g. 1)
        topic: usize,

        /// Resource position within the topic (e.g. 2)
        resource: usize,

        /// Resource URL (pass "" to clear)
        #[arg(long)]
        url: Option<String>,

        /// Label for the link button
        #[arg(long, value_name = "TEXT")]
        button_text: Option<String>,

        /// Short description (pass "" to clear)
        #[arg(long = "desc", value_name = "TEXT")]
        description: Option<String>,

        /// Time spent, free form (e.g. "1 hour 30 mins")
        #[arg(long, conflicts_with_all = ["hours", "minutes"])]
        time: Option<String>,

        /// Hours spent (0-12)
        #[arg(long, value_name = "N")]
        hours: Option<u32>,

        /// Minutes spent, snapped down to steps of 5
        #[arg(long, value_name = "N")]
        minutes: Option<u32>,

        /// Screenshot path or URI (pass "" to clear)
        #[arg(long, value_name = "URI")]
        screenshot: Option<String>,

        /// New title words (current title kept when omitted)
        #[arg(trailing_var_arg = true)]
        title: Vec<String>,
    },

    /// Remove a resource from a topic
    #[command(display_order = 14)]
    Unlink {
        /// Topic position as shown in the list (e.g. 1)
        topic: usize,

        /// Resource position within the topic (e.g. 2)
        resource: usize,

        /// Skip confirmation
        #[arg(long, short = 'y')]
        yes: bool,
    },
}

#[derive(Subcommand, Debug)]
pub enum MiscCommands {
    /// Get or set configuration
    #[command(display_order = 20)]
    Config {
        /// Configuration key (e.g. button-text, confirm)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn naked_invocation_has_no_command() {
        let cli = Cli::parse_from(["weekz"]);
        assert!(cli.command.is_none());
    }

    #[test]
    fn day_alias_resolves() {
        let cli = Cli::parse_from(["weekz", "d", "today"]);
        match cli.command {
            Some(Commands::Nav(NavCommands::Day { date })) => assert_eq!(date, "today"),
            other => panic!("unexpected parse: {:?}", other),
        }
    }

    #[test]
    fn add_joins_trailing_title_words() {
        let cli = Cli::parse_from(["weekz", "add", "Rust", "borrow", "checker"]);
        match cli.command {
            Some(Commands::Entry(EntryCommands::Add { title })) => {
                assert_eq!(title, vec!["Rust", "borrow", "checker"]);
            }
            other => panic!("unexpected parse: {:?}", other),
        }
    }

    #[test]
    fn link_takes_flags_before_trailing_title() {
        let cli = Cli::parse_from([
            "weekz",
            "link",
            "1",
            "--url",
            "https://example.com",
            "--hours",
            "1",
            "--minutes",
            "30",
            "Rust",
            "book",
        ]);
        match cli.command {
            Some(Commands::Entry(EntryCommands::Link {
                topic,
                url,
                hours,
                minutes,
                title,
                ..
            })) => {
                assert_eq!(topic, 1);
                assert_eq!(url.as_deref(), Some("https://example.com"));
                assert_eq!(hours, Some(1));
                assert_eq!(minutes, Some(30));
                assert_eq!(title, vec!["Rust", "book"]);
            }
            other => panic!("unexpected parse: {:?}", other),
        }
    }

    #[test]
    fn time_flag_conflicts_with_wheel_flags() {
        let result = Cli::try_parse_from([
            "weekz", "link", "1", "--time", "1 hour", "--hours", "2", "title",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn rm_takes_a_yes_shorthand() {
        let cli = Cli::parse_from(["weekz", "rm", "2", "-y"]);
        match cli.command {
            Some(Commands::Entry(EntryCommands::Rm { topic, yes })) => {
                assert_eq!(topic, 2);
                assert!(yes);
            }
            other => panic!("unexpected parse: {:?}", other),
        }
    }
}
