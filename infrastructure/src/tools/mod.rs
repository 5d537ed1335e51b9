//! Tool implementations for agent tool calls
//!
//! - [`RequirementsFileTool`]: `read_requirements`, restricted to the input file

mod requirements_file;

pub use requirements_file::RequirementsFileTool;
