//! `read_requirements` tool
//!
//! Serves the configured requirements file to the Reader agent. Any other
//! path is refused; the refusal is returned to the model as a tool error.

use crate::storage::{SourceError, read_requirements};
use async_trait::async_trait;
use clarifier_application::{ToolError, ToolExecutorPort};
use clarifier_domain::{READ_REQUIREMENTS_TOOL, ToolCall};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Maximum file size to serve (10 MB)
const MAX_READ_SIZE: u64 = 10 * 1024 * 1024;

/// Tool executor that only knows `read_requirements`
pub struct RequirementsFileTool {
    allowed: PathBuf,
}

impl RequirementsFileTool {
    pub fn new(allowed: impl Into<PathBuf>) -> Self {
        Self {
            allowed: allowed.into(),
        }
    }

    /// Whether `requested` names the configured file
    fn is_allowed(&self, requested: &Path) -> bool {
        match (requested.canonicalize(), self.allowed.canonicalize()) {
            (Ok(requested), Ok(allowed)) => requested == allowed,
            _ => normalize(requested) == normalize(&self.allowed),
        }
    }

    fn read(&self, path_str: &str) -> Result<String, ToolError> {
        let path = Path::new(path_str);
        if !self.is_allowed(path) {
            warn!("Refused read_requirements for {}", path_str);
            return Err(ToolError::AccessDenied(format!(
                "only {} can be read",
                self.allowed.display()
            )));
        }

        let size = std::fs::metadata(&self.allowed)
            .map(|m| m.len())
            .map_err(|e| ToolError::ExecutionFailed(e.to_string()))?;
        if size > MAX_READ_SIZE {
            return Err(ToolError::ExecutionFailed(format!(
                "file is too large ({} bytes, max {} bytes)",
                size, MAX_READ_SIZE
            )));
        }

        read_requirements(&self.allowed).map_err(|e| match e {
            SourceError::NotFound(p) => {
                ToolError::ExecutionFailed(format!("file not found: {}", p.display()))
            }
            other => ToolError::ExecutionFailed(other.to_string()),
        })
    }
}

/// Lexical form used when a path cannot be canonicalized
fn normalize(path: &Path) -> PathBuf {
    path.components()
        .filter(|c| !matches!(c, std::path::Component::CurDir))
        .collect()
}

#[async_trait]
impl ToolExecutorPort for RequirementsFileTool {
    async fn execute(&self, call: &ToolCall) -> Result<String, ToolError> {
        if call.name != READ_REQUIREMENTS_TOOL {
            return Err(ToolError::UnknownTool(call.name.clone()));
        }
        let path = call
            .get_string("file_path")
            .ok_or_else(|| ToolError::InvalidArguments("missing 'file_path'".to_string()))?;
        debug!("read_requirements({})", path);
        self.read(path)
    }
}
