//! Logging infrastructure.
//!
//! - [`RunLog`]: the human-readable run log file fed by `tracing`
//! - [`JsonlConversationLogger`]: the JSONL transcript implementing the
//!   [`ConversationLogger`](clarifier_application::ConversationLogger) port

mod jsonl_logger;
mod run_log;

pub use jsonl_logger::JsonlConversationLogger;
pub use run_log::{
    RunLog, RunLogFormat, line_prefix, log_file_name, parse_level, run_log_layer, run_stamp,
    transcript_file_name,
};
