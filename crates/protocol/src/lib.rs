//! Shared vocabulary of the dev-helper MCP server: capabilities and their declared input
//! shapes, call requests, call results, and the project tree produced by directory walks.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

pub mod shape;

pub use shape::{Field, FieldKind, FieldSpec, Shape, ShapeError};

/// Prefix carried by every in-band failure message.
pub const ERROR_PREFIX: &str = "Error: ";

/// One named, independently invocable operation.
#[derive(Debug, Clone, PartialEq)]
pub struct Capability {
    pub name: String,
    pub description: String,
    pub input_shape: Shape,
}

impl Capability {
    pub fn new(name: impl Into<String>, description: impl Into<String>, input_shape: Shape) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            input_shape,
        }
    }

    pub fn to_json(&self) -> Value {
        json!({
            "name": self.name,
            "description": self.description,
            "inputSchema": Value::Object(self.input_shape.to_json_schema()),
        })
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct CallRequest {
    pub capability: String,
    #[serde(default)]
    pub arguments: Map<String, Value>,
}

impl CallRequest {
    pub fn new(capability: impl Into<String>, arguments: Map<String, Value>) -> Self {
        Self {
            capability: capability.into(),
            arguments,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ContentBlock {
    Text { text: String },
}

impl ContentBlock {
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text { text: text.into() }
    }

    pub fn as_text(&self) -> &str {
        match self {
            Self::Text { text } => text,
        }
    }
}

/// Outcome of one dispatch. Failures stay structured until the transport edge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum CallResult {
    Success { content: Vec<ContentBlock> },
    Failure { message: String },
}

impl CallResult {
    pub fn text(text: impl Into<String>) -> Self {
        Self::Success {
            content: vec![ContentBlock::text(text)],
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self::Failure {
            message: message.into(),
        }
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Failure { .. })
    }

    /// Flatten to the uniform envelope: a failure becomes one `Error: `-prefixed text block.
    pub fn into_content(self) -> Vec<ContentBlock> {
        match self {
            Self::Success { content } => content,
            Self::Failure { message } => vec![ContentBlock::text(format!("{ERROR_PREFIX}{message}"))],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum EntryKind {
    File,
    Directory,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ProjectEntry {
    pub name: String,
    pub kind: EntryKind,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<ProjectEntry>,
}

impl ProjectEntry {
    pub fn file(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: EntryKind::File,
            children: Vec::new(),
        }
    }

    pub fn directory(name: impl Into<String>, children: Vec<ProjectEntry>) -> Self {
        Self {
            name: name.into(),
            kind: EntryKind::Directory,
            children,
        }
    }

    pub fn is_dir(&self) -> bool {
        self.kind == EntryKind::Directory
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn failure_flattens_to_prefixed_text() {
        let content = CallResult::failure("Unknown tool: nope").into_content();
        assert_eq!(content, vec![ContentBlock::text("Error: Unknown tool: nope")]);
    }

    #[test]
    fn success_flattens_unchanged() {
        let content = CallResult::text("done").into_content();
        assert_eq!(content.len(), 1);
        assert_eq!(content[0].as_text(), "done");
    }

    #[test]
    fn content_block_serializes_as_tagged_text() {
        let raw = serde_json::to_value(ContentBlock::text("hi")).unwrap();
        assert_eq!(raw, json!({ "type": "text", "text": "hi" }));
    }

    #[test]
    fn capability_json_carries_input_schema() {
        let cap = Capability::new(
            "project_status",
            "Get current project structure and status",
            Shape::new().field(
                "projectPath",
                FieldSpec::new(FieldKind::String, "Path to the project").required(),
            ),
        );
        let raw = cap.to_json();
        assert_eq!(raw["name"], "project_status");
        assert_eq!(raw["inputSchema"]["required"], json!(["projectPath"]));
    }
}
