//! Use cases (application services)

pub mod agent_runner;
pub mod assemble_document;
pub mod clarify_requirements;
pub mod run_pipeline;

#[cfg(test)]
pub(crate) mod testing;
