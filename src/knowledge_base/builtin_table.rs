//! Built-in storage risk rules
//!
//! Six crops commonly lost after harvest in West African supply chains,
//! each with the storage methods smallholders actually use.
//! Data source: post-harvest decision support dashboard rule table.

use super::{Crop, CropProfile, KnowledgeBase, RiskEntry, RiskLevel, StorageRule};

/// A single embedded rule
struct Rule {
    method: &'static str,
    risk: RiskLevel,
    justification: &'static str,
    recommendation: Option<&'static str>,
}

use super::RiskLevel::{High, Low, Medium};

// ============================================================================
// EMBEDDED RULE DATA
// ============================================================================

const TOMATO: &[Rule] = &[
    Rule { method: "open shed", risk: High, justification: "Tomatoes are highly perishable and degrade fast in open-air storage.", recommendation: Some("Use evaporative cooling or cold storage.") },
    Rule { method: "sack", risk: High, justification: "Sacks retain heat and moisture, accelerating spoilage for tomatoes.", recommendation: Some("Use ventilated crates or shaded baskets.") },
    Rule { method: "evap. cooler", risk: Medium, justification: "Evaporative coolers reduce temperature but need constant water and shade.", recommendation: Some("Ensure cooler is well-maintained.") },
    Rule { method: "cold room", risk: Low, justification: "Cold storage preserves tomato freshness and extends shelf life.", recommendation: None },
];

const CASSAVA: &[Rule] = &[
    Rule { method: "open shed", risk: High, justification: "Cassava ferments within 2-3 days if not processed or cooled.", recommendation: Some("Process quickly or use evaporative cooling.") },
    Rule { method: "sack", risk: High, justification: "Sacks speed up fermentation and limit airflow.", recommendation: Some("Use ventilated containers or immediate processing.") },
    Rule { method: "evap. cooler", risk: Medium, justification: "Slows fermentation but doesn't stop it.", recommendation: Some("Process as soon as possible.") },
    Rule { method: "cold room", risk: Low, justification: "Cold slows microbial action and keeps cassava usable longer.", recommendation: None },
];

const YAM: &[Rule] = &[
    Rule { method: "open shed", risk: Medium, justification: "Yam is less sensitive but can sprout or rot in moist environments.", recommendation: Some("Store on raised wooden racks.") },
    Rule { method: "sack", risk: Medium, justification: "Risk of physical bruising and airflow restriction.", recommendation: Some("Use ventilated stacks.") },
    Rule { method: "warehouse (well-ventilated)", risk: Low, justification: "Properly stored yam in ventilated warehouse lasts several weeks.", recommendation: None },
];

const PLANTAIN: &[Rule] = &[
    Rule { method: "open shed", risk: High, justification: "Ripens fast in heat and becomes mushy.", recommendation: Some("Use cool ventilated area.") },
    Rule { method: "sack", risk: High, justification: "Promotes heat and bruising.", recommendation: Some("Use shallow trays or hanging bunches.") },
    Rule { method: "evap. cooler", risk: Medium, justification: "Slows ripening but needs constant monitoring.", recommendation: None },
    Rule { method: "cold room", risk: Low, justification: "Best option to delay ripening significantly.", recommendation: None },
];

const ONION: &[Rule] = &[
    Rule { method: "open shed", risk: Medium, justification: "Dry onion stores well in open shade but needs airflow.", recommendation: Some("Hang in mesh bags.") },
    Rule { method: "sack", risk: Medium, justification: "Can trap moisture if not stored dry.", recommendation: Some("Ensure proper ventilation.") },
    Rule { method: "warehouse (well-ventilated)", risk: Low, justification: "Ideal for storing dry onions.", recommendation: None },
];

const MAIZE: &[Rule] = &[
    Rule { method: "open shed", risk: Medium, justification: "Shelled maize risks mold if humidity is high.", recommendation: Some("Ensure dry conditions.") },
    Rule { method: "sack", risk: High, justification: "Sacks retain moisture if maize is not well dried.", recommendation: Some("Use hermetic bags.") },
    Rule { method: "warehouse (well-ventilated)", risk: Low, justification: "Dry maize stores well in ventilated space.", recommendation: None },
];

/// (crop, intrinsic sensitivity, rules)
static TABLE: &[(Crop, RiskLevel, &[Rule])] = &[
    (Crop::Tomato, High, TOMATO),
    (Crop::Cassava, High, CASSAVA),
    (Crop::Yam, Medium, YAM),
    (Crop::Plantain, High, PLANTAIN),
    (Crop::Onion, Low, ONION),
    (Crop::Maize, Medium, MAIZE),
];

/// Demonstration batch: one common storage choice per crop
pub static SAMPLE_BATCH: &[(&str, &str)] = &[
    ("tomato", "sack"),
    ("cassava", "open shed"),
    ("yam", "warehouse (well-ventilated)"),
    ("plantain", "evap. cooler"),
    ("onion", "sack"),
    ("maize", "warehouse (well-ventilated)"),
];

// ============================================================================
// CONSTRUCTION
// ============================================================================

pub(crate) fn build() -> KnowledgeBase {
    let profiles = TABLE
        .iter()
        .map(|&(crop, sensitivity, rules)| CropProfile {
            crop,
            sensitivity,
            rules: rules
                .iter()
                .map(|r| StorageRule {
                    method: r.method.to_string(),
                    entry: RiskEntry {
                        risk: r.risk,
                        justification: r.justification.to_string(),
                        recommendation: r.recommendation.map(str::to_string),
                    },
                })
                .collect(),
        })
        .collect();

    KnowledgeBase::assemble(profiles)
}
