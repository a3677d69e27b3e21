//! Error types for MCP operations

use thiserror::Error;

/// Errors that stop the transport
///
/// Anything that goes wrong inside a single request is answered on the wire
/// instead, as a JSON-RPC error or a tool result with `isError` set.
#[derive(Error, Debug)]
pub enum MCPError {
    /// Reading from or writing to the transport failed
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// A response could not be serialized
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}
