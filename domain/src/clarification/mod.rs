//! Clarification subdomain.
//!
//! - [`question`]: questions, answers and their prompt rendering
//! - [`parsing`]: the Clarifier reply grammar
//! - [`session`]: loop state for one clarification stage

pub mod parsing;
pub mod question;
pub mod session;

pub use parsing::{NO_FURTHER_CLARIFICATION, parse_clarification_response};
pub use question::{ClarificationQuestion, ClarificationRecord, render_records};
pub use session::{
    ClarificationOutcome, ClarificationSession, DEFAULT_MAX_ITERATIONS, TerminationReason,
};
