//! brandcheck MCP server
//!
//! Serves the brand availability tools over stdio. Logs go to stderr.

use anyhow::Context;
use brand_api::{ApiConfig, BrandApi, HttpBrandApi};
use brand_mcp::BrandServer;
use brand_tools::ToolRegistry;
use brand_utils::LogFormat;
use clap::Parser;
use comfy_table::{Table, presets::UTF8_FULL};
use std::sync::Arc;
use std::time::Duration;
use tokio::io::BufReader;
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "brandcheck-mcp")]
#[command(version, about = "MCP server for brand name availability checks", long_about = None)]
struct Args {
    /// API base URL (overrides BRANDCHECK_API_URL)
    #[arg(long)]
    base_url: Option<String>,

    /// API key sent as a bearer token (overrides BRANDCHECK_API_KEY)
    #[arg(long)]
    api_key: Option<String>,

    /// Request timeout in seconds (overrides BRANDCHECK_TIMEOUT_SECS)
    #[arg(long)]
    timeout_secs: Option<u64>,

    /// Log output format: pretty or json
    #[arg(long, default_value_t = LogFormat::Pretty)]
    log_format: LogFormat,

    /// Print the available tools and exit
    #[arg(long)]
    list_tools: bool,
}

impl Args {
    fn api_config(&self) -> anyhow::Result<ApiConfig> {
        let mut config = ApiConfig::from_env().context("Invalid API configuration")?;

        if let Some(url) = &self.base_url {
            config = config.with_base_url(url);
        }
        if let Some(key) = &self.api_key {
            config = config.with_api_key(key);
        }
        if let Some(secs) = self.timeout_secs {
            config = config.with_timeout(Duration::from_secs(secs));
        }

        Ok(config)
    }

    /// Registry backed by the configured API
    ///
    /// `--list-tools` only reads tool metadata, so it gets a registry over the
    /// default config and never consults the environment.
    fn registry(&self) -> anyhow::Result<ToolRegistry> {
        let config = if self.list_tools {
            ApiConfig::default()
        } else {
            let config = self.api_config()?;
            info!(base_url = %config.base_url, "Starting brandcheck-mcp");
            config
        };

        let api: Arc<dyn BrandApi> =
            Arc::new(HttpBrandApi::new(config).context("Failed to create API client")?);
        Ok(ToolRegistry::with_brand_tools(api))
    }
}

fn tools_table(registry: &ToolRegistry) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_header(vec!["Tool", "Method", "Endpoint", "Output"]);

    for tool in registry.list_tools() {
        let endpoint = tool.endpoint();
        table.add_row(vec![
            tool.name().to_string(),
            endpoint.method().to_string(),
            endpoint.path().to_string(),
            tool.output_kind().to_string(),
        ]);
    }

    table
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Initialize tracing
    brand_utils::init_tracing(args.log_format);

    let registry = args.registry()?;

    if args.list_tools {
        println!("{}", tools_table(&registry));
        return Ok(());
    }

    let server = Arc::new(BrandServer::new(registry));
    let stdin = BufReader::new(tokio::io::stdin());
    brand_mcp::stdio::serve(server, stdin, tokio::io::stdout())
        .await
        .context("MCP transport failed")?;

    Ok(())
}
