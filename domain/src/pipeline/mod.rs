//! Pipeline stages and the document snapshots they produce.

pub mod stage;

pub use stage::{DocumentStage, RequirementDocument, Stage};
