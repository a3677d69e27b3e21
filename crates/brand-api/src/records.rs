//! Typed views of per-channel API responses
//!
//! Only the fields the text formatters read are modelled. Anything else in a
//! record is ignored here and stays available in the raw JSON body.

use brand_core::TriState;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Body of every per-channel endpoint: `{"results": [...]}`
#[derive(Debug, Clone, Deserialize)]
#[serde(bound = "T: DeserializeOwned")]
pub struct ChannelResponse<T> {
    #[serde(default = "Vec::new")]
    pub results: Vec<T>,
}

impl<T: DeserializeOwned> ChannelResponse<T> {
    /// Decode a channel body
    pub fn from_value(body: Value) -> brand_core::Result<Self> {
        serde_json::from_value(body).map_err(|e| {
            brand_core::Error::InvalidResponse(format!("unexpected channel response shape: {e}"))
        })
    }
}

/// One domain/TLD check
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DomainResult {
    pub domain: String,
    #[serde(default)]
    pub available: TriState,
    pub purchase_price: Option<f64>,
    pub renewal_price: Option<f64>,
    pub minimum_registration_years: Option<u32>,
    /// Registrar/data source that answered
    pub provider: Option<String>,
}

/// One social platform handle check
#[derive(Debug, Clone, Deserialize)]
pub struct SocialResult {
    pub platform: String,
    #[serde(default)]
    pub available: TriState,
    pub url: Option<String>,
}

/// One trademark register search
#[derive(Debug, Clone, Deserialize)]
pub struct TrademarkResult {
    pub source: String,
    /// `true` when conflicting marks were found
    #[serde(default)]
    pub found: TriState,
    pub count: Option<u64>,
    pub provider: Option<String>,
    pub url: Option<String>,
}

/// One app store search
#[derive(Debug, Clone, Deserialize)]
pub struct AppStoreResult {
    pub platform: String,
    /// `true` when apps matching the name exist
    #[serde(default)]
    pub found: TriState,
    pub matches: Option<Vec<String>>,
    pub url: Option<String>,
}

/// One SaaS platform (package registry, workspace slug, ...) check
#[derive(Debug, Clone, Deserialize)]
pub struct SaasResult {
    pub platform: String,
    #[serde(default)]
    pub available: TriState,
    pub url: Option<String>,
}

/// One web search for competing uses of the name
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoogleSearchResult {
    pub platform: String,
    /// `true` when competitors were found
    #[serde(default)]
    pub found: TriState,
    pub result_count: Option<u64>,
    pub has_knowledge_graph: Option<bool>,
    pub top_results: Option<Vec<TopResult>>,
    pub url: Option<String>,
}

/// A single search hit
#[derive(Debug, Clone, Deserialize)]
pub struct TopResult {
    pub title: String,
    pub url: Option<String>,
}
