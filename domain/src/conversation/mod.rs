//! Conversation messages exchanged with agents.

pub mod entities;

pub use entities::{Message, Role};
