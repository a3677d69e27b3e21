//! HTTP client for the brandcheck availability API
//!
//! All availability, scoring and safety logic lives in the remote API. This
//! crate only knows how to reach it:
//! - [`ApiConfig`] holds the base URL and transport settings
//! - [`Endpoint`] names the API paths
//! - [`BrandApi`] is the seam tools call through; [`HttpBrandApi`] is the
//!   reqwest implementation
//! - [`records`] types the few response fields the text formatters read
//!
//! # Example
//!
//! ```no_run
//! use brand_api::{ApiConfig, BrandApi, Endpoint, HttpBrandApi};
//! use brand_core::BrandName;
//!
//! # async fn example() -> brand_core::Result<()> {
//! let api = HttpBrandApi::new(ApiConfig::from_env()?)?;
//! let name = BrandName::parse("name", "acme")?;
//! let body = api.get(Endpoint::CheckDomains, &name, None).await?;
//! println!("{body}");
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod endpoint;
pub mod records;

pub use client::{BrandApi, HttpBrandApi};
#[cfg(any(test, feature = "mock"))]
pub use client::MockBrandApi;
pub use config::ApiConfig;
pub use endpoint::Endpoint;
