//! Interactive prompts

pub mod console;

pub use console::ConsoleInteraction;
