//! Multi-brand tools: one POST carrying every name

use async_trait::async_trait;
use brand_api::{BrandApi, Endpoint};
use brand_core::{CheckMode, Result};
use serde_json::{Value, json};
use std::sync::Arc;
use tracing::{debug, instrument};

use crate::schema;
use crate::tool::{OutputKind, Tool, ToolOutput};
use crate::validate;

/// Compare or batch several brand names in a single request
pub struct MultiBrandTool {
    api: Arc<dyn BrandApi>,
    name: &'static str,
    title: &'static str,
    description: &'static str,
    endpoint: Endpoint,
    min_names: usize,
    max_names: usize,
    /// `None` when the body carries no `mode`
    default_mode: Option<CheckMode>,
}

impl MultiBrandTool {
    pub fn compare_brands(api: Arc<dyn BrandApi>) -> Self {
        Self {
            api,
            name: "compare_brands",
            title: "Compare brand names",
            description: "Compare 2 to 5 candidate brand names side by side and rank them by \
                          availability score, with the main conflicts for each.",
            endpoint: Endpoint::CompareBrands,
            min_names: 2,
            max_names: 5,
            default_mode: None,
        }
    }

    pub fn batch_check(api: Arc<dyn BrandApi>) -> Self {
        Self {
            api,
            name: "batch_check",
            title: "Batch check brand names",
            description: "Check 2 to 10 brand names in one call. Defaults to quick mode; pass \
                          mode 'full' for complete per-name reports.",
            endpoint: Endpoint::BatchCheck,
            min_names: 2,
            max_names: 10,
            default_mode: Some(CheckMode::Quick),
        }
    }
}

#[async_trait]
impl Tool for MultiBrandTool {
    #[instrument(skip(self, args), fields(tool = self.name))]
    async fn execute(&self, args: Value) -> Result<ToolOutput> {
        let args = validate::arguments(args)?;
        let names = validate::brand_names(&args, "names", self.min_names, self.max_names)?;

        let mut body = json!({ "names": names });
        if let Some(default) = self.default_mode {
            let mode = validate::check_mode(&args)?.unwrap_or(default);
            body["mode"] = json!(mode);
        }

        debug!(count = names.len(), "Sending multi-brand request");
        let response = self.api.post(self.endpoint, body).await?;
        Ok(ToolOutput::Json(response))
    }

    fn name(&self) -> &str {
        self.name
    }

    fn title(&self) -> &str {
        self.title
    }

    fn description(&self) -> &str {
        self.description
    }

    fn input_schema(&self) -> Value {
        let mut properties = json!({
            "names": schema::brand_names(
                self.min_names,
                self.max_names,
                &format!("{} to {} brand names", self.min_names, self.max_names),
            ),
        });
        if let Some(default) = self.default_mode {
            properties["mode"] = schema::mode(default);
        }
        schema::object(properties, &["names"])
    }

    fn endpoint(&self) -> Endpoint {
        self.endpoint
    }

    fn output_kind(&self) -> OutputKind {
        OutputKind::Passthrough
    }
}
