//! Sample Storage Risk Report
//!
//! Assesses the demonstration batch (one common storage choice per crop)
//! and prints the report, followed by a cross-crop comparison for cold rooms.
//!
//! Run with: cargo run --bin sample_report [-- --json]
//! KNOWLEDGE_BASE_PATH selects an alternative JSON rule table.

use harvest_risk_advisor::{JsonFormatter, MarkdownFormatter, RiskAdvisor};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const COMPARISON_METHOD: &str = "cold room";

fn main() -> anyhow::Result<()> {
    // Logs go to stderr so the report on stdout stays clean
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "harvest_risk_advisor=info,warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let as_json = std::env::args().skip(1).any(|arg| arg == "--json");

    let advisor = match std::env::var("KNOWLEDGE_BASE_PATH") {
        Ok(path) => RiskAdvisor::from_json_file(&path)?,
        Err(_) => RiskAdvisor::builtin(),
    };

    let report = advisor.sample_report();
    tracing::info!(
        "Assessed {} sample pairs ({} unknown)",
        report.tally.total,
        report.tally.unknown
    );

    if as_json {
        println!("{}", JsonFormatter::format(&report)?);
        return Ok(());
    }

    println!("{}", MarkdownFormatter::format_report(&report));
    let rows = advisor.compare_crops(COMPARISON_METHOD);
    println!("{}", MarkdownFormatter::format_comparison(COMPARISON_METHOD, &rows));

    Ok(())
}
