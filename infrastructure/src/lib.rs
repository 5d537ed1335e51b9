//! Infrastructure layer for req-clarifier
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod logging;
pub mod providers;
pub mod storage;
pub mod tools;

// Re-export commonly used types
pub use config::{ConfigLoader, FileConfig, FileModelsConfig, FileOpenAiConfig};
pub use logging::{JsonlConversationLogger, RunLog};
pub use providers::OpenAiAgentGateway;
pub use storage::{FsArtifactStore, SourceError, read_requirements};
pub use tools::RequirementsFileTool;
