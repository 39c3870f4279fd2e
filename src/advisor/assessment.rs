//! Assessment output types

use std::fmt;

use serde::{Serialize, Serializer};

use super::season::{Season, SEASON_NOT_APPLICABLE};
use crate::knowledge_base::RiskLevel;

/// Justification returned when no rule matches
pub const UNKNOWN_JUSTIFICATION: &str = "No data available for this combination.";

/// Recommendation returned when no rule matches
pub const UNKNOWN_RECOMMENDATION: &str =
    "Consider using cold storage or consult an extension agent.";

/// Recommendation shown when a stored rule has none
pub const DEFAULT_RECOMMENDATION: &str = "No additional recommendation.";

/// Query-time risk rating: a stored level, or `Unknown` on a lookup miss
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum AssessedRisk {
    Low,
    Medium,
    High,
    Unknown,
}

impl AssessedRisk {
    /// Display order used by reports (most severe first)
    pub const REPORT_ORDER: [AssessedRisk; 4] = [
        AssessedRisk::High,
        AssessedRisk::Medium,
        AssessedRisk::Low,
        AssessedRisk::Unknown,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AssessedRisk::Low => "Low",
            AssessedRisk::Medium => "Medium",
            AssessedRisk::High => "High",
            AssessedRisk::Unknown => "Unknown",
        }
    }

    /// Conventional colour for dashboards and charts
    pub fn display_color(&self) -> &'static str {
        match self {
            AssessedRisk::High => "red",
            AssessedRisk::Medium => "orange",
            AssessedRisk::Low => "green",
            AssessedRisk::Unknown => "gray",
        }
    }
}

impl From<RiskLevel> for AssessedRisk {
    fn from(level: RiskLevel) -> Self {
        match level {
            RiskLevel::Low => AssessedRisk::Low,
            RiskLevel::Medium => AssessedRisk::Medium,
            RiskLevel::High => AssessedRisk::High,
        }
    }
}

impl fmt::Display for AssessedRisk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of one storage risk query
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Assessment {
    /// Display-capitalized crop name
    pub crop: String,
    pub storage_method: String,
    #[serde(serialize_with = "serialize_season")]
    pub season: Option<Season>,
    pub risk_level: AssessedRisk,
    pub justification: String,
    /// Never empty: falls back to a fixed default text
    pub recommendation: String,
}

impl Assessment {
    /// Season label, or "N/A" when no region was given
    pub fn season_label(&self) -> &'static str {
        self.season.map(|s| s.as_str()).unwrap_or(SEASON_NOT_APPLICABLE)
    }
}

fn serialize_season<S: Serializer>(season: &Option<Season>, serializer: S) -> Result<S::Ok, S::Error> {
    match season {
        Some(s) => s.serialize(serializer),
        None => serializer.serialize_str(SEASON_NOT_APPLICABLE),
    }
}
