//! Storage Risk Advisor
//!
//! Answers "what is the spoilage risk of storing crop C using method M?"
//! against a read-only [`KnowledgeBase`].
//!
//! ## Key Concept
//! A missing (crop, method) pair is a normal answer, not an error: both an
//! unknown crop and an unknown method under a known crop collapse to the
//! same `Unknown` assessment with fixed fallback advice.
//!
//! ## Architecture
//! - `assessment.rs` - Assessment output struct and `AssessedRisk`
//! - `season.rs` - Region → season label mapping
//! - `report.rs` - Batch tallies, reports, cross-crop comparisons

pub mod assessment;
pub mod report;
pub mod season;

use std::path::Path;
use std::sync::Arc;

use rayon::prelude::*;
use serde::Serialize;

use crate::error::Result;
use crate::knowledge_base::builtin_table::SAMPLE_BATCH;
use crate::knowledge_base::{Crop, KnowledgeBase, Lookup, RiskLevel};
use crate::utils::capitalize;

pub use assessment::{
    AssessedRisk, Assessment, DEFAULT_RECOMMENDATION, UNKNOWN_JUSTIFICATION,
    UNKNOWN_RECOMMENDATION,
};
pub use report::{CropComparison, LevelShare, RiskReport, RiskTally};
pub use season::{season_for_region, Season};

/// Catalog row: a crop with the storage methods it defines
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CropSummary {
    pub crop: Crop,
    pub display_name: String,
    pub sensitivity: RiskLevel,
    pub storage_methods: Vec<String>,
}

/// Query front-end over a shared, immutable knowledge base
#[derive(Debug, Clone)]
pub struct RiskAdvisor {
    kb: Arc<KnowledgeBase>,
}

impl RiskAdvisor {
    pub fn new(kb: KnowledgeBase) -> Self {
        Self { kb: Arc::new(kb) }
    }

    /// Advisor over the process-wide built-in table
    pub fn builtin() -> Self {
        Self {
            kb: KnowledgeBase::builtin_shared(),
        }
    }

    /// Advisor over a table loaded from a JSON file
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        Ok(Self::new(KnowledgeBase::from_json_file(path)?))
    }

    /// Assess one (crop, method) pair.
    ///
    /// Exact, case-sensitive lookup. `region` only sets the season label.
    pub fn assess_risk(&self, crop: &str, method: &str, region: Option<&str>) -> Assessment {
        let season = season_for_region(region);

        let (risk_level, justification, recommendation) = match self.kb.lookup(crop, method) {
            Lookup::Hit(entry) => (
                AssessedRisk::from(entry.risk),
                entry.justification.clone(),
                entry
                    .recommendation
                    .clone()
                    .unwrap_or_else(|| DEFAULT_RECOMMENDATION.to_string()),
            ),
            Lookup::Miss(reason) => {
                tracing::debug!(crop, method, ?reason, "No storage rule for combination");
                (
                    AssessedRisk::Unknown,
                    UNKNOWN_JUSTIFICATION.to_string(),
                    UNKNOWN_RECOMMENDATION.to_string(),
                )
            }
        };

        Assessment {
            crop: capitalize(crop),
            storage_method: method.to_string(),
            season,
            risk_level,
            justification,
            recommendation,
        }
    }

    /// Ratings of every crop that defines `method`, in table order.
    ///
    /// Crops without the method are left out rather than reported as Unknown.
    pub fn compare_crops(&self, method: &str) -> Vec<CropComparison> {
        self.kb
            .entries_for_method(method)
            .map(|(crop, entry)| CropComparison {
                crop,
                risk_level: entry.risk,
            })
            .collect()
    }

    /// Assess a batch in parallel; output keeps input order.
    pub fn assess_batch<S>(&self, pairs: &[(S, S)], region: Option<&str>) -> Vec<Assessment>
    where
        S: AsRef<str> + Sync,
    {
        pairs
            .par_iter()
            .map(|(crop, method)| self.assess_risk(crop.as_ref(), method.as_ref(), region))
            .collect()
    }

    /// Count assessed risk levels over a batch
    pub fn tally<S>(&self, pairs: &[(S, S)]) -> RiskTally
    where
        S: AsRef<str> + Sync,
    {
        pairs
            .par_iter()
            .fold(RiskTally::default, |mut tally, (crop, method)| {
                tally.record(self.assess_risk(crop.as_ref(), method.as_ref(), None).risk_level);
                tally
            })
            .reduce(RiskTally::default, RiskTally::merge)
    }

    /// Assess a batch and summarize it
    pub fn report<S>(&self, pairs: &[(S, S)], region: Option<&str>) -> RiskReport
    where
        S: AsRef<str> + Sync,
    {
        RiskReport::from_assessments(self.assess_batch(pairs, region))
    }

    /// Report over the built-in demonstration batch
    pub fn sample_report(&self) -> RiskReport {
        self.report(SAMPLE_BATCH, None)
    }

    /// Crops with their sensitivity and storage methods, in table order
    pub fn catalog(&self) -> Vec<CropSummary> {
        self.kb
            .profiles()
            .map(|p| CropSummary {
                crop: p.crop,
                display_name: capitalize(p.crop.key()),
                sensitivity: p.sensitivity,
                storage_methods: p.rules.iter().map(|r| r.method.clone()).collect(),
            })
            .collect()
    }

    /// Intrinsic perishability of a crop (exact key match)
    pub fn crop_sensitivity(&self, crop: &str) -> Option<RiskLevel> {
        self.kb.sensitivity(crop)
    }

    /// Storage methods defined for a crop, in table order
    pub fn storage_methods(&self, crop: &str) -> Option<Vec<&str>> {
        self.kb.storage_methods(crop)
    }

    /// Number of crops in the underlying table
    pub fn crop_count(&self) -> usize {
        self.kb.len()
    }
}

impl Default for RiskAdvisor {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Assess one pair against the built-in table.
///
/// ```
/// use harvest_risk_advisor::{assess_risk, AssessedRisk};
///
/// let result = assess_risk("tomato", "cold room", Some("south"));
/// assert_eq!(result.risk_level, AssessedRisk::Low);
/// assert_eq!(result.season_label(), "Wet");
///
/// let miss = assess_risk("durian", "box", None);
/// assert_eq!(miss.risk_level, AssessedRisk::Unknown);
/// ```
pub fn assess_risk(crop: &str, method: &str, region: Option<&str>) -> Assessment {
    RiskAdvisor::builtin().assess_risk(crop, method, region)
}
