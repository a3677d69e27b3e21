//! Per-channel tools that render text

use async_trait::async_trait;
use brand_api::{BrandApi, Endpoint};
use brand_core::Result;
use serde_json::{Value, json};
use std::sync::Arc;
use tracing::{debug, instrument};

use crate::format::Channel;
use crate::schema;
use crate::tool::{OutputKind, Tool, ToolOutput};
use crate::validate;

/// One channel check for one brand name
pub struct ChannelTool {
    api: Arc<dyn BrandApi>,
    channel: Channel,
}

impl ChannelTool {
    pub fn new(api: Arc<dyn BrandApi>, channel: Channel) -> Self {
        Self { api, channel }
    }
}

#[async_trait]
impl Tool for ChannelTool {
    #[instrument(skip(self, args), fields(tool = self.name()))]
    async fn execute(&self, args: Value) -> Result<ToolOutput> {
        let args = validate::arguments(args)?;
        let name = validate::brand_name(&args, "name")?;

        debug!(%name, "Checking channel");
        let body = self.api.get(self.channel.endpoint(), &name, None).await?;
        self.channel.render(&name, body).map(ToolOutput::Text)
    }

    fn name(&self) -> &str {
        match self.channel {
            Channel::Domains => "check_domains",
            Channel::Social => "check_social",
            Channel::Trademarks => "check_trademarks",
            Channel::AppStores => "check_appstores",
            Channel::Saas => "check_saas",
            Channel::Google => "check_google",
        }
    }

    fn title(&self) -> &str {
        match self.channel {
            Channel::Domains => "Check domains",
            Channel::Social => "Check social handles",
            Channel::Trademarks => "Check trademarks",
            Channel::AppStores => "Check app stores",
            Channel::Saas => "Check SaaS platforms",
            Channel::Google => "Check Google search",
        }
    }

    fn description(&self) -> &str {
        match self.channel {
            Channel::Domains => {
                "Check domain availability for a brand name across common TLDs, with first \
                 year price, renewal price and 3-year cost of ownership for open domains."
            }
            Channel::Social => {
                "Check whether the brand name is free as a handle on social networks and \
                 developer platforms."
            }
            Channel::Trademarks => {
                "Search trademark registries for marks matching the brand name. Results \
                 the registries could not answer are marked for manual checking."
            }
            Channel::AppStores => {
                "Search the mobile app stores for apps already using the brand name."
            }
            Channel::Saas => {
                "Check whether the brand name is free on package registries and SaaS \
                 platforms."
            }
            Channel::Google => {
                "Search the web for existing businesses using the brand name, including \
                 knowledge graph presence and the top results."
            }
        }
    }

    fn input_schema(&self) -> Value {
        schema::object(
            json!({
                "name": schema::brand_name("Brand name to check (lowercase letters, digits and hyphens)"),
            }),
            &["name"],
        )
    }

    fn endpoint(&self) -> Endpoint {
        self.channel.endpoint()
    }

    fn output_kind(&self) -> OutputKind {
        OutputKind::Text
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use brand_api::MockBrandApi;
    use brand_core::{BrandName, CheckMode, Error};

    fn tool_with(endpoint: Endpoint, body: Value, channel: Channel) -> ChannelTool {
        let mut api = MockBrandApi::new();
        api.expect_get()
            .withf(move |e: &Endpoint, name: &BrandName, mode: &Option<CheckMode>| {
                *e == endpoint && name.as_str() == "acme" && mode.is_none()
            })
            .times(1)
            .returning(move |_, _, _| Ok(body.clone()));
        ChannelTool::new(Arc::new(api), channel)
    }

    #[tokio::test]
    async fn test_domains_rendered_as_text() {
        let tool = tool_with(
            Endpoint::CheckDomains,
            json!({
                "results": [
                    {
                        "domain": "acme.com",
                        "available": true,
                        "purchasePrice": 12,
                        "renewalPrice": 15,
                        "minimumRegistrationYears": 1
                    },
                    { "domain": "acme.io", "available": false }
                ]
            }),
            Channel::Domains,
        );

        let output = tool.execute(json!({"name": "acme"})).await.unwrap();
        assert_eq!(
            output,
            ToolOutput::Text(
                "Domain availability for \"acme\":\n\
                 - acme.com: Available — year 1 $12, renewal $15/yr, 3Y TCO $42\n\
                 - acme.io: Taken"
                    .to_string()
            )
        );
    }

    #[tokio::test]
    async fn test_google_rendered_as_text() {
        let tool = tool_with(
            Endpoint::CheckGoogle,
            json!({
                "results": [{
                    "platform": "Google",
                    "found": true,
                    "resultCount": 5,
                    "topResults": [{ "title": "Acme Inc" }],
                    "hasKnowledgeGraph": true
                }]
            }),
            Channel::Google,
        );

        let text = tool
            .execute(json!({"name": "acme"}))
            .await
            .unwrap()
            .into_text();
        assert!(text.starts_with("Google search for \"acme\":\n"));
        assert!(text.contains("Competitors found (5 results)"));
        assert!(text.contains("[Knowledge Graph]"));
        assert!(text.contains("Top: Acme Inc"));
    }

    #[tokio::test]
    async fn test_malformed_body_is_invalid_response() {
        let tool = tool_with(
            Endpoint::CheckSocial,
            json!({"results": "nope"}),
            Channel::Social,
        );

        let err = tool.execute(json!({"name": "acme"})).await.unwrap_err();
        assert!(matches!(err, Error::InvalidResponse(_)));
    }

    #[tokio::test]
    async fn test_server_error_is_surfaced() {
        let mut api = MockBrandApi::new();
        api.expect_get().times(1).returning(|_, _, _| {
            Err(Error::Api {
                status: 500,
                body: String::new(),
            })
        });
        let tool = ChannelTool::new(Arc::new(api), Channel::Trademarks);

        let err = tool.execute(json!({"name": "acme"})).await.unwrap_err();
        assert_eq!(err.status(), Some(500));
    }

    #[tokio::test]
    async fn test_invalid_name_never_calls_api() {
        let mut api = MockBrandApi::new();
        api.expect_get().never();
        let tool = ChannelTool::new(Arc::new(api), Channel::AppStores);

        let err = tool
            .execute(json!({"name": "acme_corp"}))
            .await
            .unwrap_err();
        assert!(err.is_validation());
        assert!(err.to_string().contains("name"));
    }

    #[test]
    fn test_names_match_endpoints() {
        for channel in Channel::ALL {
            let tool = ChannelTool::new(Arc::new(MockBrandApi::new()), channel);
            assert_eq!(tool.name().replace('_', "-"), tool.endpoint().path());
            assert_eq!(tool.output_kind(), OutputKind::Text);
        }
    }
}
