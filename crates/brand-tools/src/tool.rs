//! Tool trait definition

use async_trait::async_trait;
use brand_api::Endpoint;
use brand_core::Result;
use serde::Serialize;
use serde_json::Value;
use std::fmt;

/// Trait for tools exposed to calling agents
///
/// Each tool must provide a name, description, and JSON schema for its input,
/// and runs exactly one collaborator request per execution.
#[async_trait]
pub trait Tool: Send + Sync {
    /// Execute the tool with given arguments
    ///
    /// # Arguments
    ///
    /// * `args` - Tool input as JSON value (should match input_schema)
    ///
    /// # Returns
    ///
    /// Passthrough JSON or formatted text, depending on [`Tool::output_kind`]
    async fn execute(&self, args: Value) -> Result<ToolOutput>;

    /// Get the tool's name
    ///
    /// Must be unique within a ToolRegistry
    fn name(&self) -> &str;

    /// Short human-readable title
    fn title(&self) -> &str;

    /// Get the tool's description
    ///
    /// This description helps the calling agent decide when to use this tool
    fn description(&self) -> &str;

    /// Get the tool's input schema (JSON Schema format)
    fn input_schema(&self) -> Value;

    /// Collaborator endpoint this tool calls
    fn endpoint(&self) -> Endpoint;

    /// Shape of a successful result
    fn output_kind(&self) -> OutputKind;

    /// Behavior hints advertised to callers
    ///
    /// Every brand tool only reads remote state, so the default is the same
    /// for all of them. Nothing in the adapter enforces these.
    fn annotations(&self) -> ToolAnnotations {
        ToolAnnotations::read_only(self.title())
    }
}

/// Result of a successful tool execution
#[derive(Debug, Clone, PartialEq)]
pub enum ToolOutput {
    /// Collaborator body, unmodified
    Json(Value),
    /// Human-readable summary
    Text(String),
}

impl ToolOutput {
    pub fn kind(&self) -> OutputKind {
        match self {
            Self::Json(_) => OutputKind::Passthrough,
            Self::Text(_) => OutputKind::Text,
        }
    }

    /// Render as text; JSON is pretty-printed
    pub fn into_text(self) -> String {
        match self {
            Self::Json(value) => {
                serde_json::to_string_pretty(&value).unwrap_or_else(|_| value.to_string())
            }
            Self::Text(text) => text,
        }
    }
}

/// Output shape of a tool
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputKind {
    Passthrough,
    Text,
}

impl fmt::Display for OutputKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Passthrough => f.write_str("JSON passthrough"),
            Self::Text => f.write_str("formatted text"),
        }
    }
}

/// Tool behavior hints, serialized in the protocol's camelCase form
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolAnnotations {
    pub title: String,
    pub read_only_hint: bool,
    pub destructive_hint: bool,
    pub idempotent_hint: bool,
    pub open_world_hint: bool,
}

impl ToolAnnotations {
    /// Read-only, non-destructive, idempotent, open-world
    pub fn read_only(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            read_only_hint: true,
            destructive_hint: false,
            idempotent_hint: true,
            open_world_hint: true,
        }
    }
}
