//! Tool domain entities

use serde::{Deserialize, Serialize};

/// Name of the tool the Reader agent uses to load the source document
pub const READ_REQUIREMENTS_TOOL: &str = "read_requirements";

/// Parameter specification for a tool
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolParameter {
    pub name: String,
    pub description: String,
    pub required: bool,
    /// JSON schema type (e.g. "string")
    pub param_type: String,
}

impl ToolParameter {
    pub fn string(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            required: true,
            param_type: "string".to_string(),
        }
    }
}

/// A callable tool bound to an agent profile
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolBinding {
    pub name: String,
    pub description: String,
    pub parameters: Vec<ToolParameter>,
}

impl ToolBinding {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            parameters: Vec::new(),
        }
    }

    pub fn with_parameter(mut self, param: ToolParameter) -> Self {
        self.parameters.push(param);
        self
    }

    /// Tool that returns the contents of the requirements file
    pub fn read_requirements() -> Self {
        Self::new(
            READ_REQUIREMENTS_TOOL,
            "Reads the contents of the specified requirements file.",
        )
        .with_parameter(ToolParameter::string(
            "file_path",
            "The path to the requirements file.",
        ))
    }

    /// JSON schema of the tool arguments
    pub fn parameters_schema(&self) -> serde_json::Value {
        let properties: serde_json::Map<String, serde_json::Value> = self
            .parameters
            .iter()
            .map(|p| {
                (
                    p.name.clone(),
                    serde_json::json!({ "type": p.param_type, "description": p.description }),
                )
            })
            .collect();
        let required: Vec<&str> = self
            .parameters
            .iter()
            .filter(|p| p.required)
            .map(|p| p.name.as_str())
            .collect();

        serde_json::json!({
            "type": "object",
            "properties": properties,
            "required": required,
        })
    }
}

/// A tool invocation requested by an agent
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolCall {
    /// Provider-assigned call id, echoed back with the result
    pub id: String,
    pub name: String,
    pub arguments: serde_json::Value,
}

impl ToolCall {
    pub fn new(id: impl Into<String>, name: impl Into<String>, arguments: serde_json::Value) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            arguments,
        }
    }

    /// Get a string argument by name
    pub fn get_string(&self, key: &str) -> Option<&str> {
        self.arguments.get(key).and_then(|v| v.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_requirements_schema() {
        let schema = ToolBinding::read_requirements().parameters_schema();
        assert_eq!(schema["type"], "object");
        assert_eq!(schema["properties"]["file_path"]["type"], "string");
        assert_eq!(schema["required"][0], "file_path");
    }

    #[test]
    fn test_tool_call_get_string() {
        let call = ToolCall::new(
            "call_1",
            READ_REQUIREMENTS_TOOL,
            serde_json::json!({ "file_path": "requirements.txt", "n": 3 }),
        );
        assert_eq!(call.get_string("file_path"), Some("requirements.txt"));
        assert_eq!(call.get_string("n"), None);
        assert_eq!(call.get_string("missing"), None);
    }
}
