//! Presentation layer for req-clarifier
//!
//! This crate contains the CLI definition, the console prompter,
//! the progress reporter and output formatting.

pub mod cli;
pub mod interaction;
pub mod output;
pub mod progress;

// Re-export commonly used types
pub use cli::commands::Cli;
pub use interaction::ConsoleInteraction;
pub use output::console::ConsoleFormatter;
pub use progress::reporter::ProgressReporter;
