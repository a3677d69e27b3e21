//! Tri-state availability

use serde::{Deserialize, Serialize};

/// Outcome of a single channel check
///
/// The collaborator reports `true`, `false` or `null`. `null` means the data
/// source had no coverage for the name. It is kept as its own variant so no
/// formatter can mistake it for either definitive answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "Option<bool>", into = "Option<bool>")]
pub enum TriState {
    /// `true` on the wire
    Positive,
    /// `false` on the wire
    Negative,
    /// `null` or missing on the wire
    #[default]
    Unknown,
}

impl TriState {
    /// Pick the label for this state
    pub fn label<'a>(self, positive: &'a str, negative: &'a str, unknown: &'a str) -> &'a str {
        match self {
            Self::Positive => positive,
            Self::Negative => negative,
            Self::Unknown => unknown,
        }
    }

    /// True only for a definite yes
    pub fn is_positive(self) -> bool {
        self == Self::Positive
    }
}

impl From<Option<bool>> for TriState {
    fn from(value: Option<bool>) -> Self {
        match value {
            Some(true) => Self::Positive,
            Some(false) => Self::Negative,
            None => Self::Unknown,
        }
    }
}

impl From<TriState> for Option<bool> {
    fn from(value: TriState) -> Self {
        match value {
            TriState::Positive => Some(true),
            TriState::Negative => Some(false),
            TriState::Unknown => None,
        }
    }
}
