//! Release status of a tracked product.

use serde::{Deserialize, Serialize};
use statusboard_common::title_case;

/// Marker shown for statuses this version does not recognise.
pub const UNKNOWN_SYMBOL: &str = "⚪";

/// Release status of a tracked entry.
///
/// Persisted as its snake_case string. Strings outside the five known values
/// (written by older versions or by hand) are kept verbatim in
/// [`Status::Unknown`] so they survive a load/save cycle and still render.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Status {
    /// Safe to use.
    Undetected,
    /// Being updated after a game patch.
    Updating,
    /// Usable, at elevated risk.
    HighRisk,
    /// Under internal testing.
    Testing,
    /// Detected; do not use.
    Detected,
    /// Any other stored value.
    Unknown(String),
}

impl Status {
    /// The statuses offered to admins, in display order.
    pub const KNOWN: [Self; 5] = [
        Self::Undetected,
        Self::Updating,
        Self::HighRisk,
        Self::Testing,
        Self::Detected,
    ];

    /// Parses a stored status string. Never fails.
    pub fn parse(raw: &str) -> Self {
        match raw {
            "undetected" => Self::Undetected,
            "updating" => Self::Updating,
            "high_risk" => Self::HighRisk,
            "testing" => Self::Testing,
            "detected" => Self::Detected,
            other => Self::Unknown(other.to_string()),
        }
    }

    /// The string written to storage.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Undetected => "undetected",
            Self::Updating => "updating",
            Self::HighRisk => "high_risk",
            Self::Testing => "testing",
            Self::Detected => "detected",
            Self::Unknown(raw) => raw,
        }
    }

    /// Coloured marker shown next to the entry name.
    pub const fn symbol(&self) -> &'static str {
        match self {
            Self::Undetected => "🟢",
            Self::Updating => "🔵",
            Self::HighRisk => "🟠",
            Self::Testing => "🟡",
            Self::Detected => "🔴",
            Self::Unknown(_) => UNKNOWN_SYMBOL,
        }
    }

    /// Human-readable label, e.g. `High Risk`.
    pub fn label(&self) -> String {
        title_case(self.as_str())
    }

    /// Whether this is one of the five offered statuses.
    pub const fn is_known(&self) -> bool {
        !matches!(self, Self::Unknown(_))
    }
}

impl From<String> for Status {
    fn from(raw: String) -> Self {
        match Self::parse(&raw) {
            Self::Unknown(_) => Self::Unknown(raw),
            known => known,
        }
    }
}

impl From<Status> for String {
    fn from(status: Status) -> Self {
        match status {
            Status::Unknown(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}
