//! Application-level configuration.
//!
//! - [`PipelineParams`]: stage order, round budget and release switches

pub mod pipeline_params;

pub use pipeline_params::{PipelineParams, RELEASE_STEM};
