//! HTTP client for the collaborator API
//!
//! One tool invocation is exactly one request. Nothing here retries: a
//! non-success status becomes [`Error::Api`] and goes straight back to the
//! caller.

use async_trait::async_trait;
use brand_core::{BrandName, CheckMode, Error, Result};
use reqwest::{Client, RequestBuilder};
use serde_json::Value;
use tracing::{debug, instrument, warn};

use crate::config::ApiConfig;
use crate::endpoint::Endpoint;

/// Seam between tools and the collaborator API
///
/// Note: methods take `&self` so one client can be shared through an `Arc`
/// by every tool and every in-flight invocation.
#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
#[async_trait]
pub trait BrandApi: Send + Sync {
    /// `GET <base>/<endpoint>?name=<name>[&mode=<mode>]`
    ///
    /// `mode` is only sent when it is not `full`.
    async fn get(
        &self,
        endpoint: Endpoint,
        name: &BrandName,
        mode: Option<CheckMode>,
    ) -> Result<Value>;

    /// `POST <base>/<endpoint>` with a JSON body
    async fn post(&self, endpoint: Endpoint, body: Value) -> Result<Value>;
}

/// [`BrandApi`] over reqwest
#[derive(Debug, Clone)]
pub struct HttpBrandApi {
    client: Client,
    config: ApiConfig,
}

impl HttpBrandApi {
    /// Create a client from validated configuration
    pub fn new(config: ApiConfig) -> Result<Self> {
        config.validate()?;

        let mut builder = Client::builder().user_agent(config.user_agent.clone());
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }

        let client = builder
            .build()
            .map_err(|e| Error::Config(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self { client, config })
    }

    /// Create a client around an existing reqwest client
    ///
    /// `config.timeout` and `config.user_agent` are ignored; the given client's
    /// own settings apply.
    pub fn with_client(config: ApiConfig, client: Client) -> Result<Self> {
        config.validate()?;
        Ok(Self { client, config })
    }

    /// Configuration this client was built from
    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    fn url(&self, endpoint: Endpoint) -> String {
        format!("{}/{}", self.config.base_url, endpoint.path())
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.config.api_key {
            Some(key) => request.bearer_auth(key),
            None => request,
        }
    }

    async fn send(&self, endpoint: Endpoint, request: RequestBuilder) -> Result<Value> {
        let response = self
            .authorize(request)
            .send()
            .await
            .map_err(|e| Error::Transport(format!("{endpoint} request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(%endpoint, status = status.as_u16(), "API returned an error status");
            return Err(Error::Api {
                status: status.as_u16(),
                body,
            });
        }

        let body: Value = response
            .json()
            .await
            .map_err(|e| Error::Transport(format!("Failed to parse {endpoint} response: {e}")))?;

        debug!(%endpoint, "Received API response");
        Ok(body)
    }
}

#[async_trait]
impl BrandApi for HttpBrandApi {
    #[instrument(skip(self, name), fields(name = %name))]
    async fn get(
        &self,
        endpoint: Endpoint,
        name: &BrandName,
        mode: Option<CheckMode>,
    ) -> Result<Value> {
        let mut query = vec![("name", name.as_str())];
        if let Some(mode) = mode.filter(|m| m.is_forwarded()) {
            query.push(("mode", mode.as_str()));
        }

        debug!(url = %self.url(endpoint), "Sending GET request");
        let request = self.client.get(self.url(endpoint)).query(&query);
        self.send(endpoint, request).await
    }

    #[instrument(skip(self, body))]
    async fn post(&self, endpoint: Endpoint, body: Value) -> Result<Value> {
        debug!(url = %self.url(endpoint), "Sending POST request");
        let request = self.client.post(self.url(endpoint)).json(&body);
        self.send(endpoint, request).await
    }
}
