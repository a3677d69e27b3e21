//! Text rendering for per-channel results
//!
//! One heading, then one `- ` line per record. `TriState::Unknown` always
//! renders as its own label and never as an available/taken answer.

use brand_api::Endpoint;
use brand_api::records::{
    AppStoreResult, ChannelResponse, DomainResult, GoogleSearchResult, SaasResult, SocialResult,
    TrademarkResult,
};
use brand_core::{BrandName, Result};
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Label for indeterminate results
pub const UNKNOWN: &str = "Unknown (check manually)";

/// Domain data source that only answers when the primary registrar lookup failed
pub const FALLBACK_PROVIDER: &str = "WhoisXML";

/// Number of search hit titles shown on a Google line
const TOP_RESULTS_SHOWN: usize = 3;

/// Channels that render as text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    Domains,
    Social,
    Trademarks,
    AppStores,
    Saas,
    Google,
}

impl Channel {
    /// Every channel
    pub const ALL: [Channel; 6] = [
        Channel::Domains,
        Channel::Social,
        Channel::Trademarks,
        Channel::AppStores,
        Channel::Saas,
        Channel::Google,
    ];

    /// Endpoint that answers this channel
    pub fn endpoint(self) -> Endpoint {
        match self {
            Self::Domains => Endpoint::CheckDomains,
            Self::Social => Endpoint::CheckSocial,
            Self::Trademarks => Endpoint::CheckTrademarks,
            Self::AppStores => Endpoint::CheckAppStores,
            Self::Saas => Endpoint::CheckSaas,
            Self::Google => Endpoint::CheckGoogle,
        }
    }

    /// First line of the rendered text, e.g. `Social handles for "acme":`
    pub fn heading(self, name: &BrandName) -> String {
        let subject = match self {
            Self::Domains => "Domain availability",
            Self::Social => "Social handles",
            Self::Trademarks => "Trademark search",
            Self::AppStores => "App stores",
            Self::Saas => "SaaS platforms",
            Self::Google => "Google search",
        };
        format!("{subject} for \"{name}\":")
    }

    /// Decode a channel body and render it
    pub fn render(self, name: &BrandName, body: Value) -> Result<String> {
        let lines = match self {
            Self::Domains => lines(body, domain_line)?,
            Self::Social => lines(body, social_line)?,
            Self::Trademarks => lines(body, trademark_line)?,
            Self::AppStores => lines(body, appstore_line)?,
            Self::Saas => lines(body, saas_line)?,
            Self::Google => lines(body, google_line)?,
        };
        Ok(render(&self.heading(name), &lines))
    }
}

fn lines<T: DeserializeOwned>(body: Value, line: fn(&T) -> String) -> Result<Vec<String>> {
    let response = ChannelResponse::<T>::from_value(body)?;
    Ok(response.results.iter().map(line).collect())
}

fn render(heading: &str, lines: &[String]) -> String {
    if lines.is_empty() {
        format!("{heading}\nNo results returned.")
    } else {
        format!("{heading}\n{}", lines.join("\n"))
    }
}

/// Dollar amount without decimals when whole
pub fn money(amount: f64) -> String {
    if amount.fract().abs() < f64::EPSILON {
        format!("{amount:.0}")
    } else {
        format!("{amount:.2}")
    }
}

fn with_url(mut line: String, url: Option<&str>) -> String {
    if let Some(url) = url {
        line.push_str(" — ");
        line.push_str(url);
    }
    line
}

/// Domain status, with pricing when available
pub fn domain_line(result: &DomainResult) -> String {
    let status = result.available.label("Available", "Taken", UNKNOWN);
    let mut line = format!("- {}: {status}", result.domain);

    if result.available.is_positive() {
        if let (Some(purchase), Some(renewal)) = (result.purchase_price, result.renewal_price) {
            let three_year = purchase + 2.0 * renewal;
            line.push_str(&format!(
                " — year 1 ${}, renewal ${}/yr, 3Y TCO ${}",
                money(purchase),
                money(renewal),
                money(three_year)
            ));

            if let Some(years) = result.minimum_registration_years.filter(|y| *y > 1) {
                let due_today = purchase + renewal * f64::from(years.saturating_sub(1));
                line.push_str(&format!(
                    ", due today ${} ({years}y minimum)",
                    money(due_today)
                ));
            }
        }
    }

    if result.provider.as_deref() == Some(FALLBACK_PROVIDER) {
        line.push_str(&format!(" [via {FALLBACK_PROVIDER} fallback]"));
    }

    line
}

/// Handle status on one platform
pub fn social_line(result: &SocialResult) -> String {
    let status = result.available.label("Available", "Taken", UNKNOWN);
    with_url(format!("- {}: {status}", result.platform), result.url.as_deref())
}

/// Registry hit count, or `Check manually` when the registry gave no answer
pub fn trademark_line(result: &TrademarkResult) -> String {
    let found = match result.count {
        Some(count) => format!("Found ({count} results)"),
        None => "Found".to_string(),
    };
    let status = result.found.label(&found, "Clear", "Check manually");

    let mut line = format!("- {}: {status}", result.source);
    if let Some(provider) = &result.provider {
        line.push_str(&format!(" [via {provider}]"));
    }
    with_url(line, result.url.as_deref())
}

/// App store hits, naming the matching apps
pub fn appstore_line(result: &AppStoreResult) -> String {
    let found = match result.matches.as_deref() {
        Some(matches) if !matches.is_empty() => format!("Found ({})", matches.join(", ")),
        _ => "Found (matches)".to_string(),
    };
    let status = result.found.label(&found, "Clear", UNKNOWN);
    with_url(format!("- {}: {status}", result.platform), result.url.as_deref())
}

/// Name status on one registry or SaaS platform
pub fn saas_line(result: &SaasResult) -> String {
    let status = result.available.label("Available", "Taken", UNKNOWN);
    with_url(format!("- {}: {status}", result.platform), result.url.as_deref())
}

/// Competitor count, plus knowledge graph and top titles when found
pub fn google_line(result: &GoogleSearchResult) -> String {
    let found = match result.result_count {
        Some(count) => format!("Competitors found ({count} results)"),
        None => "Competitors found".to_string(),
    };
    let status = result.found.label(&found, "No competitors found", UNKNOWN);

    let mut line = format!("- {}: {status}", result.platform);
    if result.has_knowledge_graph == Some(true) {
        line.push_str(" [Knowledge Graph]");
    }

    if result.found.is_positive() {
        let titles: Vec<&str> = result
            .top_results
            .iter()
            .flatten()
            .take(TOP_RESULTS_SHOWN)
            .map(|hit| hit.title.as_str())
            .collect();
        if !titles.is_empty() {
            line.push_str(&format!(" — Top: {}", titles.join(", ")));
        }
    }

    with_url(line, result.url.as_deref())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record<T: DeserializeOwned>(value: Value) -> T {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_domain_pricing() {
        let result: DomainResult = record(json!({
            "domain": "acme.com",
            "available": true,
            "purchasePrice": 12,
            "renewalPrice": 15,
            "minimumRegistrationYears": 1
        }));
        assert_eq!(
            domain_line(&result),
            "- acme.com: Available — year 1 $12, renewal $15/yr, 3Y TCO $42"
        );
    }

    #[test]
    fn test_domain_minimum_term() {
        let result: DomainResult = record(json!({
            "domain": "acme.ai",
            "available": true,
            "purchasePrice": 12,
            "renewalPrice": 15,
            "minimumRegistrationYears": 2
        }));
        let line = domain_line(&result);
        assert!(line.contains("3Y TCO $42"));
        assert!(line.ends_with(", due today $27 (2y minimum)"), "{line}");
    }

    #[test]
    fn test_domain_fractional_prices() {
        let result: DomainResult = record(json!({
            "domain": "acme.io",
            "available": true,
            "purchasePrice": 29.99,
            "renewalPrice": 39.5
        }));
        assert_eq!(
            domain_line(&result),
            "- acme.io: Available — year 1 $29.99, renewal $39.50/yr, 3Y TCO $108.99"
        );
    }

    #[test]
    fn test_domain_without_pricing_or_available() {
        let taken: DomainResult = record(json!({
            "domain": "acme.com",
            "available": false,
            "purchasePrice": 12,
            "renewalPrice": 15
        }));
        assert_eq!(domain_line(&taken), "- acme.com: Taken");

        let partial: DomainResult = record(json!({
            "domain": "acme.net",
            "available": true,
            "purchasePrice": 12
        }));
        assert_eq!(domain_line(&partial), "- acme.net: Available");

        let unknown: DomainResult = record(json!({ "domain": "acme.dev", "available": null }));
        assert_eq!(domain_line(&unknown), "- acme.dev: Unknown (check manually)");
    }

    #[test]
    fn test_domain_fallback_provider() {
        let result: DomainResult = record(json!({
            "domain": "acme.co",
            "available": false,
            "provider": "WhoisXML"
        }));
        assert_eq!(domain_line(&result), "- acme.co: Taken [via WhoisXML fallback]");

        let other: DomainResult = record(json!({
            "domain": "acme.co",
            "available": false,
            "provider": "Porkbun"
        }));
        assert_eq!(domain_line(&other), "- acme.co: Taken");
    }

    #[test]
    fn test_social_unknown() {
        let result: SocialResult = record(json!({
            "platform": "GitHub",
            "available": null,
            "url": "https://github.com/acme"
        }));
        assert_eq!(
            social_line(&result),
            "- GitHub: Unknown (check manually) — https://github.com/acme"
        );

        let taken: SocialResult = record(json!({ "platform": "X", "available": false }));
        assert_eq!(social_line(&taken), "- X: Taken");
    }

    #[test]
    fn test_trademark_lines() {
        let found: TrademarkResult = record(json!({
            "source": "USPTO",
            "found": true,
            "count": 3,
            "provider": "Markbase",
            "url": "https://tmsearch.uspto.gov/?q=acme"
        }));
        assert_eq!(
            trademark_line(&found),
            "- USPTO: Found (3 results) [via Markbase] — https://tmsearch.uspto.gov/?q=acme"
        );

        let clear: TrademarkResult = record(json!({ "source": "EUIPO", "found": false }));
        assert_eq!(trademark_line(&clear), "- EUIPO: Clear");

        let unknown: TrademarkResult = record(json!({ "source": "WIPO", "found": null }));
        assert_eq!(trademark_line(&unknown), "- WIPO: Check manually");
    }

    #[test]
    fn test_appstore_lines() {
        let found: AppStoreResult = record(json!({
            "platform": "App Store",
            "found": true,
            "matches": ["Acme Notes", "Acme Pay"],
            "url": "https://apps.apple.com/search?term=acme"
        }));
        assert_eq!(
            appstore_line(&found),
            "- App Store: Found (Acme Notes, Acme Pay) — https://apps.apple.com/search?term=acme"
        );

        let no_list: AppStoreResult = record(json!({ "platform": "Google Play", "found": true }));
        assert_eq!(appstore_line(&no_list), "- Google Play: Found (matches)");

        let clear: AppStoreResult = record(json!({ "platform": "Google Play", "found": false }));
        assert_eq!(appstore_line(&clear), "- Google Play: Clear");

        let unknown: AppStoreResult = record(json!({ "platform": "App Store" }));
        assert_eq!(appstore_line(&unknown), "- App Store: Unknown (check manually)");
    }

    #[test]
    fn test_saas_line() {
        let result: SaasResult = record(json!({
            "platform": "npm",
            "available": true,
            "url": "https://www.npmjs.com/package/acme"
        }));
        assert_eq!(
            saas_line(&result),
            "- npm: Available — https://www.npmjs.com/package/acme"
        );
    }

    #[test]
    fn test_google_competitors() {
        let result: GoogleSearchResult = record(json!({
            "platform": "Google",
            "found": true,
            "resultCount": 5,
            "topResults": [{ "title": "Acme Inc" }],
            "hasKnowledgeGraph": true,
            "url": "https://www.google.com/search?q=acme"
        }));
        let line = google_line(&result);
        assert!(line.contains("Competitors found (5 results)"));
        assert!(line.contains("[Knowledge Graph]"));
        assert!(line.contains("Top: Acme Inc"));
        assert!(line.ends_with(" — https://www.google.com/search?q=acme"));
    }

    #[test]
    fn test_google_top_results_only_when_found() {
        let clear: GoogleSearchResult = record(json!({
            "platform": "Google",
            "found": false,
            "topResults": [{ "title": "Unrelated" }]
        }));
        assert_eq!(google_line(&clear), "- Google: No competitors found");

        let many: GoogleSearchResult = record(json!({
            "platform": "Google",
            "found": true,
            "resultCount": 40,
            "topResults": [
                { "title": "One" }, { "title": "Two" }, { "title": "Three" }, { "title": "Four" }
            ]
        }));
        assert_eq!(
            google_line(&many),
            "- Google: Competitors found (40 results) — Top: One, Two, Three"
        );

        let unknown: GoogleSearchResult = record(json!({ "platform": "Google", "found": null }));
        assert_eq!(google_line(&unknown), "- Google: Unknown (check manually)");
    }

    #[test]
    fn test_render_channel_with_heading() {
        let name = BrandName::parse("name", "acme").unwrap();
        let body = json!({
            "results": [
                { "platform": "GitHub", "available": true, "url": "https://github.com/acme" },
                { "platform": "Instagram", "available": null }
            ]
        });

        let text = Channel::Social.render(&name, body).unwrap();
        assert_eq!(
            text,
            "Social handles for \"acme\":\n\
             - GitHub: Available — https://github.com/acme\n\
             - Instagram: Unknown (check manually)"
        );
    }

    #[test]
    fn test_render_empty_channel() {
        let name = BrandName::parse("name", "acme").unwrap();
        let text = Channel::Saas.render(&name, json!({})).unwrap();
        assert_eq!(text, "SaaS platforms for \"acme\":\nNo results returned.");
    }
}
