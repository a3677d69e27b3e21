//! Collaborator API endpoints

use std::fmt;

/// A path on the collaborator API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    CheckAll,
    FilingReadiness,
    CompareBrands,
    BrandReport,
    CheckDomains,
    CheckSocial,
    CheckTrademarks,
    CheckAppStores,
    CheckSaas,
    CheckGoogle,
    BatchCheck,
}

impl Endpoint {
    /// Path segment appended to the base URL
    pub fn path(self) -> &'static str {
        match self {
            Self::CheckAll => "check-all",
            Self::FilingReadiness => "filing-readiness",
            Self::CompareBrands => "compare-brands",
            Self::BrandReport => "brand-report",
            Self::CheckDomains => "check-domains",
            Self::CheckSocial => "check-social",
            Self::CheckTrademarks => "check-trademarks",
            Self::CheckAppStores => "check-appstores",
            Self::CheckSaas => "check-saas",
            Self::CheckGoogle => "check-google",
            Self::BatchCheck => "batch-check",
        }
    }

    /// HTTP method the endpoint expects
    ///
    /// Multi-brand endpoints take a JSON body; everything else is a GET.
    pub fn method(self) -> &'static str {
        match self {
            Self::CompareBrands | Self::BatchCheck => "POST",
            _ => "GET",
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}
