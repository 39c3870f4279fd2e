use crate::advisor::{Assessment, CropComparison, RiskReport};
use crate::utils::capitalize;

/// Markdown formatter for assessments and reports
pub struct MarkdownFormatter;

impl MarkdownFormatter {
    /// Format a single assessment as a short advice block
    pub fn format_assessment(assessment: &Assessment) -> String {
        let mut md = String::with_capacity(512);

        md.push_str(&format!(
            "**{}** stored in **{}**: {} Risk\n\n",
            assessment.crop, assessment.storage_method, assessment.risk_level
        ));
        if assessment.season.is_some() {
            md.push_str(&format!("*Season:* {}\n\n", assessment.season_label()));
        }
        md.push_str(&format!("*Why:* {}\n\n", assessment.justification));
        md.push_str(&format!("**Recommendation:** {}\n", assessment.recommendation));

        md
    }

    /// Format a batch report: results table, then level summary
    pub fn format_report(report: &RiskReport) -> String {
        let mut md = String::with_capacity(2048);

        md.push_str("# Storage Risk Assessment\n\n");

        md.push_str("## Results\n\n");
        if report.is_empty() {
            md.push_str("No assessments.\n\n");
        } else {
            md.push_str("| Crop | Storage Method | Season | Risk Level | Justification | Recommendation |\n");
            md.push_str("|------|----------------|--------|------------|---------------|----------------|\n");
            for a in &report.assessments {
                md.push_str(&format!(
                    "| {} | {} | {} | {} | {} | {} |\n",
                    cell(&a.crop),
                    cell(&a.storage_method),
                    a.season_label(),
                    a.risk_level,
                    cell(&a.justification),
                    cell(&a.recommendation)
                ));
            }
            md.push('\n');
        }

        md.push_str("## Summary\n\n");
        md.push_str(&format!("**Total Assessments:** {}\n\n", report.tally.total));
        md.push_str("| Risk Level | Count | Share |\n");
        md.push_str("|------------|-------|-------|\n");
        for level in &report.levels {
            md.push_str(&format!(
                "| {} | {} | {:.1}% |\n",
                level.level,
                level.count,
                level.share * 100.0
            ));
        }

        md
    }

    /// Format the cross-crop comparison for one storage method
    pub fn format_comparison(method: &str, rows: &[CropComparison]) -> String {
        let mut md = String::with_capacity(256);

        md.push_str(&format!("## Risk Across Crops for '{}'\n\n", cell(method)));
        if rows.is_empty() {
            md.push_str("No crop defines this storage method.\n");
            return md;
        }

        md.push_str("| Crop | Risk |\n");
        md.push_str("|------|------|\n");
        for row in rows {
            md.push_str(&format!(
                "| {} | {} |\n",
                capitalize(row.crop.key()),
                row.risk_level
            ));
        }

        md
    }
}

/// Table cell text: `|` escaped, line breaks flattened to spaces
fn cell(text: &str) -> String {
    text.replace('|', "\\|").replace("\r\n", " ").replace(['\n', '\r'], " ")
}
