//! Model Context Protocol (MCP) server for brandcheck
//!
//! Exposes a [`brand_tools::ToolRegistry`] to MCP clients:
//! - [`protocol`] holds the JSON-RPC 2.0 message shapes and error codes
//! - [`BrandServer`] answers `initialize`, `ping`, `tools/list` and `tools/call`
//! - [`stdio::serve`] runs the newline-delimited transport, one task per request
//!
//! # Example
//!
//! ```no_run
//! use brand_api::{ApiConfig, HttpBrandApi};
//! use brand_mcp::BrandServer;
//! use brand_tools::ToolRegistry;
//! use std::sync::Arc;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let api = Arc::new(HttpBrandApi::new(ApiConfig::from_env()?)?);
//! let server = Arc::new(BrandServer::new(ToolRegistry::with_brand_tools(api)));
//!
//! let stdin = tokio::io::BufReader::new(tokio::io::stdin());
//! brand_mcp::stdio::serve(server, stdin, tokio::io::stdout()).await?;
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod protocol;
pub mod server;
pub mod stdio;

// Re-export commonly used types
pub use error::MCPError;
pub use protocol::{MCP_PROTOCOL_VERSION, RpcError};
pub use server::BrandServer;

/// Result type for MCP operations
pub type Result<T> = std::result::Result<T, MCPError>;
