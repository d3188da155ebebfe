//! CLI command definitions

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Output format for one-shot commands
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Colored, human-readable text
    #[default]
    Text,
    /// JSON on stdout
    Json,
}

/// CLI arguments for votestream
#[derive(Parser, Debug)]
#[command(name = "votestream")]
#[command(author, version, about = "Terminal client and load tester for a live polling API")]
#[command(long_about = r#"
votestream browses themed polls, casts votes and follows live results from
the terminal. When the backend cannot be reached it keeps working on built-in
demo data.

Without a subcommand the interactive TUI starts.

Configuration is layered (later sources win):
1. Built-in defaults
2. ~/.config/votestream/config.toml       Global config
3. ./votestream.toml or ./.votestream.toml  Project-level config
4. --config <path>                        Explicit config file
5. VOTESTREAM_* environment variables     e.g. VOTESTREAM_API__BASE_URL

Example:
  votestream
  votestream themes
  votestream vote 3 1
  votestream load --scenario constant_load --target http://staging.local
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Output format for one-shot commands
    #[arg(short, long, value_enum, default_value = "text", global = true)]
    pub output: OutputFormat,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long, global = true)]
    pub no_config: bool,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Interactive terminal UI (default)
    Tui,

    /// List themes
    Themes,

    /// List polls, optionally limited to one theme
    Polls {
        /// Theme key, e.g. "tech"
        #[arg(long, value_name = "KEY")]
        theme: Option<String>,
    },

    /// Show one poll with its options
    Show {
        /// Poll id
        id: u64,
    },

    /// Show the current results of a poll
    Results {
        /// Poll id
        id: u64,
    },

    /// Vote on a poll
    Vote {
        /// Poll id
        id: u64,
        /// Option position (0-based) or letter (A, B, ...)
        choice: String,
    },

    /// Create a poll
    Create {
        /// Poll question
        #[arg(long)]
        question: String,
        /// Theme key the poll belongs to
        #[arg(long)]
        theme: String,
        /// Option text (repeat at least twice)
        #[arg(long = "option", value_name = "TEXT")]
        options: Vec<String>,
    },

    /// Run a vote load test against the API
    Load {
        /// Scenario to run (repeatable; default: all configured)
        #[arg(long, value_name = "NAME")]
        scenario: Vec<String>,

        /// Base URL of the target, overrides `[load] target`
        #[arg(long, value_name = "URL")]
        target: Option<String>,

        /// Write one JSON line per vote request to this file
        #[arg(long, value_name = "PATH")]
        samples: Option<PathBuf>,
    },

    /// Show configuration file locations
    Config,
}

impl Cli {
    /// Subcommand to run, `tui` when none was given
    pub fn command(&self) -> Command {
        self.command.clone().unwrap_or(Command::Tui)
    }
}

/// Parse a vote choice typed by the user.
///
/// Accepts a 0-based position (`"2"`) or an option letter (`"c"`, `"C"`).
pub fn parse_choice(input: &str) -> Option<usize> {
    let input = input.trim();
    if let Ok(index) = input.parse::<usize>() {
        return Some(index);
    }
    let mut chars = input.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if c.is_ascii_alphabetic() => {
            Some((c.to_ascii_uppercase() as u8 - b'A') as usize)
        }
        _ => None,
    }
}
