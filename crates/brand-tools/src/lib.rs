//! Brand availability tools
//!
//! Each tool binds a name, an input schema and one pipeline:
//! validate the arguments, make one call through [`brand_api::BrandApi`],
//! then either hand the JSON body back untouched or render it as text.

pub mod format;
pub mod registry;
pub mod schema;
pub mod tool;
pub mod tools;
pub mod validate;

pub use registry::ToolRegistry;
pub use tool::{OutputKind, Tool, ToolAnnotations, ToolOutput};
