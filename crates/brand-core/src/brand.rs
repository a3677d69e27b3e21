//! Brand names and check modes

use crate::{Error, Result};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::LazyLock;

/// Lexical rule every brand name must satisfy
pub const BRAND_NAME_PATTERN: &str = "^[a-z0-9]([a-z0-9-]{0,61}[a-z0-9])?$";

/// Maximum length of a brand name
pub const BRAND_NAME_MAX_LEN: usize = 63;

static BRAND_NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(BRAND_NAME_PATTERN).expect("brand name pattern compiles"));

/// A validated brand name
///
/// 1-63 characters of lowercase ASCII letters, digits and hyphens, with no
/// leading or trailing hyphen. The only way to get one is through
/// [`BrandName::parse`], so holding a `BrandName` means the check has passed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct BrandName(String);

impl BrandName {
    /// Validate `value`, naming `field` in the error if it is rejected
    ///
    /// # Example
    ///
    /// ```
    /// use brand_core::BrandName;
    ///
    /// let name = BrandName::parse("name", "acme-labs")?;
    /// assert_eq!(name.as_str(), "acme-labs");
    /// assert!(BrandName::parse("name", "-acme").is_err());
    /// # Ok::<(), brand_core::Error>(())
    /// ```
    pub fn parse(field: &str, value: &str) -> Result<Self> {
        if BRAND_NAME_RE.is_match(value) {
            Ok(Self(value.to_string()))
        } else {
            Err(Error::validation(field, expected_pattern(value)))
        }
    }

    /// The name as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

fn expected_pattern(value: &str) -> String {
    format!(
        "{value:?} is not a valid brand name; expected 1-{BRAND_NAME_MAX_LEN} lowercase \
         letters, digits or hyphens with no leading or trailing hyphen \
         (pattern {BRAND_NAME_PATTERN})"
    )
}

impl fmt::Display for BrandName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for BrandName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Depth/cost of a remote check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckMode {
    /// Every channel, slowest
    #[default]
    Full,
    /// Cheap subset of channels
    Quick,
}

impl CheckMode {
    /// Wire value of the mode
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Full => "full",
            Self::Quick => "quick",
        }
    }

    /// Whether the collaborator needs to be told about this mode
    ///
    /// `full` is the collaborator's own default and is never sent.
    pub fn is_forwarded(self) -> bool {
        self != Self::Full
    }
}

impl fmt::Display for CheckMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
