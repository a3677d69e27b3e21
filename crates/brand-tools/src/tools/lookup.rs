//! Single-brand tools that hand back the API's JSON

use async_trait::async_trait;
use brand_api::{BrandApi, Endpoint};
use brand_core::{CheckMode, Error, Result};
use serde_json::{Value, json};
use std::sync::Arc;
use tracing::{debug, instrument};

use crate::schema;
use crate::tool::{OutputKind, Tool, ToolOutput};
use crate::validate;

/// One GET for one brand name, JSON passthrough
pub struct LookupTool {
    api: Arc<dyn BrandApi>,
    name: &'static str,
    title: &'static str,
    description: &'static str,
    endpoint: Endpoint,
    /// `None` when the tool takes no `mode` argument
    default_mode: Option<CheckMode>,
    /// Return only this member of the response body
    member: Option<&'static str>,
}

impl LookupTool {
    pub fn check_all(api: Arc<dyn BrandApi>) -> Self {
        Self {
            api,
            name: "check_all",
            title: "Check all channels",
            description: "Check a brand name across every channel at once: domains, social \
                          handles, trademarks, app stores, SaaS platforms and web search. \
                          Returns the full report with the 0-10 availability score, confidence \
                          and decision gates.",
            endpoint: Endpoint::CheckAll,
            default_mode: Some(CheckMode::Full),
            member: None,
        }
    }

    pub fn assess_safety(api: Arc<dyn BrandApi>) -> Self {
        Self {
            api,
            name: "assess_safety",
            title: "Assess brand safety",
            description: "Assess how safe a brand name is to adopt. Returns only the safety \
                          assessment: a 0-100 safety score, risk level, blockers and the \
                          per-signal breakdown.",
            endpoint: Endpoint::CheckAll,
            default_mode: Some(CheckMode::Quick),
            member: Some("safety"),
        }
    }

    pub fn filing_readiness(api: Arc<dyn BrandApi>) -> Self {
        Self {
            api,
            name: "filing_readiness",
            title: "Trademark filing readiness",
            description: "Summarize whether a brand name is ready for a trademark filing: \
                          conflicts found, recommended classes and the remaining steps.",
            endpoint: Endpoint::FilingReadiness,
            default_mode: Some(CheckMode::Full),
            member: None,
        }
    }

    pub fn brand_report(api: Arc<dyn BrandApi>) -> Self {
        Self {
            api,
            name: "brand_report",
            title: "Brand report",
            description: "Produce a shareable report for a brand name combining availability, \
                          trademark and web presence findings.",
            endpoint: Endpoint::BrandReport,
            default_mode: None,
            member: None,
        }
    }

    fn extract(&self, body: Value) -> Result<Value> {
        let Some(member) = self.member else {
            return Ok(body);
        };

        match body {
            Value::Object(mut map) => match map.remove(member) {
                Some(Value::Null) | None => Err(Error::InvalidResponse(format!(
                    "{} response has no \"{member}\" field",
                    self.endpoint
                ))),
                Some(value) => Ok(value),
            },
            _ => Err(Error::InvalidResponse(format!(
                "{} response is not an object",
                self.endpoint
            ))),
        }
    }
}

#[async_trait]
impl Tool for LookupTool {
    #[instrument(skip(self, args), fields(tool = self.name))]
    async fn execute(&self, args: Value) -> Result<ToolOutput> {
        let args = validate::arguments(args)?;
        let name = validate::brand_name(&args, "name")?;

        let mode = match self.default_mode {
            Some(default) => Some(validate::check_mode(&args)?.unwrap_or(default)),
            None => None,
        };

        debug!(%name, ?mode, "Looking up brand");
        let body = self.api.get(self.endpoint, &name, mode).await?;
        self.extract(body).map(ToolOutput::Json)
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
            "name": schema::brand_name("Brand name to check (lowercase letters, digits and hyphens)"),
        });
        if let Some(default) = self.default_mode {
            properties["mode"] = schema::mode(default);
        }
        schema::object(properties, &["name"])
    }

    fn endpoint(&self) -> Endpoint {
        self.endpoint
    }

    fn output_kind(&self) -> OutputKind {
        OutputKind::Passthrough
    }
}
