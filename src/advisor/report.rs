//! Batch summaries: risk tallies, reports, and cross-crop comparisons

use serde::Serialize;

use super::assessment::{AssessedRisk, Assessment};
use crate::knowledge_base::{Crop, RiskLevel};

/// Count of assessments per risk level
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RiskTally {
    pub total: usize,
    pub high: usize,
    pub medium: usize,
    pub low: usize,
    pub unknown: usize,
}

impl RiskTally {
    pub fn record(&mut self, level: AssessedRisk) {
        self.total += 1;
        match level {
            AssessedRisk::High => self.high += 1,
            AssessedRisk::Medium => self.medium += 1,
            AssessedRisk::Low => self.low += 1,
            AssessedRisk::Unknown => self.unknown += 1,
        }
    }

    pub fn count(&self, level: AssessedRisk) -> usize {
        match level {
            AssessedRisk::High => self.high,
            AssessedRisk::Medium => self.medium,
            AssessedRisk::Low => self.low,
            AssessedRisk::Unknown => self.unknown,
        }
    }

    /// Fraction of the total at `level` (0.0 for an empty tally)
    pub fn share(&self, level: AssessedRisk) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.count(level) as f64 / self.total as f64
    }

    /// Merge two partial tallies
    pub fn merge(mut self, other: RiskTally) -> RiskTally {
        self.total += other.total;
        self.high += other.high;
        self.medium += other.medium;
        self.low += other.low;
        self.unknown += other.unknown;
        self
    }
}

impl<'a> FromIterator<&'a Assessment> for RiskTally {
    fn from_iter<I: IntoIterator<Item = &'a Assessment>>(iter: I) -> Self {
        let mut tally = RiskTally::default();
        for assessment in iter {
            tally.record(assessment.risk_level);
        }
        tally
    }
}

/// One row of the per-level summary
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LevelShare {
    pub level: AssessedRisk,
    pub count: usize,
    /// Fraction of the total (0.0..=1.0)
    pub share: f64,
}

/// Assessments for a batch plus their summary
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RiskReport {
    /// Input order preserved
    pub assessments: Vec<Assessment>,
    pub tally: RiskTally,
    /// High, Medium, Low, Unknown
    pub levels: Vec<LevelShare>,
}

impl RiskReport {
    pub fn from_assessments(assessments: Vec<Assessment>) -> Self {
        let tally: RiskTally = assessments.iter().collect();
        let levels = AssessedRisk::REPORT_ORDER
            .iter()
            .map(|&level| LevelShare {
                level,
                count: tally.count(level),
                share: tally.share(level),
            })
            .collect();

        Self {
            assessments,
            tally,
            levels,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.assessments.is_empty()
    }
}

/// A crop's rating for one storage method
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CropComparison {
    pub crop: Crop,
    pub risk_level: RiskLevel,
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn assessment(level: AssessedRisk) -> Assessment {
        Assessment {
            crop: "Tomato".to_string(),
            storage_method: "sack".to_string(),
            season: None,
            risk_level: level,
            justification: String::new(),
            recommendation: String::new(),
        }
    }

    #[test]
    fn test_tally_counts_each_level() {
        let batch = vec![
            assessment(AssessedRisk::High),
            assessment(AssessedRisk::High),
            assessment(AssessedRisk::Low),
            assessment(AssessedRisk::Unknown),
        ];
        let tally: RiskTally = batch.iter().collect();

        assert_eq!(tally.total, 4);
        assert_eq!(tally.high, 2);
        assert_eq!(tally.medium, 0);
        assert_eq!(tally.low, 1);
        assert_eq!(tally.unknown, 1);
        assert_relative_eq!(tally.share(AssessedRisk::High), 0.5);
        assert_relative_eq!(tally.share(AssessedRisk::Unknown), 0.25);
    }

    #[test]
    fn test_empty_tally_has_zero_shares() {
        let tally = RiskTally::default();
        assert_eq!(tally.total, 0);
        assert_relative_eq!(tally.share(AssessedRisk::High), 0.0);
    }

    #[test]
    fn test_merge_matches_single_pass() {
        let mut a = RiskTally::default();
        a.record(AssessedRisk::High);
        a.record(AssessedRisk::Medium);
        let mut b = RiskTally::default();
        b.record(AssessedRisk::Unknown);

        let mut all = RiskTally::default();
        for level in [AssessedRisk::Unknown, AssessedRisk::Medium, AssessedRisk::High] {
            all.record(level);
        }
        assert_eq!(a.merge(b), all);
    }

    #[test]
    fn test_report_levels_in_severity_order() {
        let report = RiskReport::from_assessments(vec![
            assessment(AssessedRisk::Medium),
            assessment(AssessedRisk::Unknown),
        ]);
        let order: Vec<AssessedRisk> = report.levels.iter().map(|l| l.level).collect();
        assert_eq!(order, AssessedRisk::REPORT_ORDER.to_vec());
        assert_eq!(report.levels[1].count, 1);
        assert_relative_eq!(report.levels[1].share, 0.5);
        assert_eq!(report.levels[0].count, 0);
    }
}
