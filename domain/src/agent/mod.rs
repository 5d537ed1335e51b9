//! Agent profiles (Reader, Clarifier, Finalizer, Standardizer).

pub mod profile;

pub use profile::{AgentProfile, AgentRole};
