//! Post-Harvest Storage Risk Advisor
//!
//! Looks up the spoilage risk of storing a crop with a given storage method
//! and returns the rating, a justification, and a recommendation for
//! reducing post-harvest losses.
//!
//! Module layout:
//! - `knowledge_base/`: Immutable crop → storage method → rule table
//! - `advisor/`: Point assessments, comparisons, batch reports
//! - `formatters/`: Markdown and JSON report output
//! - `api_server`: Axum REST API (feature `api`)

pub mod error;
pub mod utils;
pub mod knowledge_base;
pub mod advisor;
pub mod formatters;
pub mod api_server;

// Re-export commonly used types
pub use error::{KnowledgeBaseError, Result};
pub use knowledge_base::{Crop, KnowledgeBase, Lookup, MissReason, RiskEntry, RiskLevel};
pub use advisor::{
    assess_risk, AssessedRisk, Assessment, CropComparison, CropSummary, RiskAdvisor, RiskReport,
    RiskTally, Season,
};
pub use formatters::{JsonFormatter, MarkdownFormatter};

#[cfg(feature = "api")]
pub use api_server::{AppState, create_router};
