//! Presentation layer for votestream
//!
//! This crate contains CLI definitions, pure view renderers, console and
//! JSON formatters, load-test progress reporters and the interactive TUI.

pub mod cli;
pub mod output;
pub mod progress;
pub mod tui;
pub mod view;

// Re-export commonly used types
pub use cli::commands::{Cli, Command, OutputFormat, parse_choice};
pub use output::{console::ConsoleFormatter, json::JsonFormatter};
pub use progress::reporter::{LoadProgressReporter, SimpleLoadProgress};
pub use tui::TuiApp;
