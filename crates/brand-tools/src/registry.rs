//! Tool registry for managing available tools

use crate::Tool;
use crate::format::Channel;
use crate::tools::{ChannelTool, LookupTool, MultiBrandTool};
use brand_api::BrandApi;
use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

/// Registry for managing tools
pub struct ToolRegistry {
    tools: RwLock<HashMap<String, Arc<dyn Tool>>>,
}

impl Default for ToolRegistry {
    fn default() -> Self {
        Self {
            tools: RwLock::new(HashMap::new()),
        }
    }
}

impl ToolRegistry {
    /// Create a new tool registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding every brand tool, all sharing one API client
    pub fn with_brand_tools(api: Arc<dyn BrandApi>) -> Self {
        let registry = Self::new();

        registry.register(Arc::new(LookupTool::check_all(api.clone())));
        registry.register(Arc::new(LookupTool::assess_safety(api.clone())));
        registry.register(Arc::new(LookupTool::filing_readiness(api.clone())));
        registry.register(Arc::new(LookupTool::brand_report(api.clone())));
        registry.register(Arc::new(MultiBrandTool::compare_brands(api.clone())));
        registry.register(Arc::new(MultiBrandTool::batch_check(api.clone())));

        for channel in Channel::ALL {
            registry.register(Arc::new(ChannelTool::new(api.clone(), channel)));
        }

        registry
    }

    /// Register a tool
    ///
    /// A tool with the same name replaces the earlier one.
    pub fn register(&self, tool: Arc<dyn Tool>) {
        let mut tools = self.tools.write().unwrap_or_else(PoisonError::into_inner);
        tools.insert(tool.name().to_string(), tool);
    }

    /// Get a tool by name
    pub fn get(&self, name: &str) -> Option<Arc<dyn Tool>> {
        let tools = self.tools.read().unwrap_or_else(PoisonError::into_inner);
        tools.get(name).cloned()
    }

    /// List all registered tools, sorted by name
    pub fn list_tools(&self) -> Vec<Arc<dyn Tool>> {
        let tools = self.tools.read().unwrap_or_else(PoisonError::into_inner);
        let mut list: Vec<_> = tools.values().cloned().collect();
        list.sort_by(|a, b| a.name().cmp(b.name()));
        list
    }

    /// Get the number of registered tools
    pub fn len(&self) -> usize {
        let tools = self.tools.read().unwrap_or_else(PoisonError::into_inner);
        tools.len()
    }

    /// Check if the registry is empty
    pub fn is_empty(&self) -> bool {
        let tools = self.tools.read().unwrap_or_else(PoisonError::into_inner);
        tools.is_empty()
    }
}
