//! Storage Risk Advisor Integration Tests
//!
//! Exercises the public API end to end against the built-in table and a
//! table loaded from disk.

use harvest_risk_advisor::advisor::{
    DEFAULT_RECOMMENDATION, UNKNOWN_JUSTIFICATION, UNKNOWN_RECOMMENDATION,
};
use harvest_risk_advisor::{
    assess_risk, AssessedRisk, Crop, JsonFormatter, KnowledgeBase, RiskAdvisor, RiskLevel, Season,
};
use std::io::Write;

// =========================================================================
// Section 1: Stored entries
// =========================================================================

#[test]
fn test_every_stored_pair_returns_its_entry() {
    let kb = KnowledgeBase::builtin();
    let advisor = RiskAdvisor::builtin();

    let mut checked = 0;
    for (crop, method, entry) in kb.entries() {
        let result = advisor.assess_risk(crop.key(), method, None);

        assert_eq!(result.risk_level, AssessedRisk::from(entry.risk), "{}/{}", crop, method);
        assert_eq!(result.justification, entry.justification);
        match &entry.recommendation {
            Some(rec) => assert_eq!(&result.recommendation, rec),
            None => assert_eq!(result.recommendation, DEFAULT_RECOMMENDATION),
        }
        assert!(!result.recommendation.is_empty());
        checked += 1;
    }

    assert_eq!(checked, 21, "built-in table should hold 21 rules");
}

// =========================================================================
// Section 2: Lookup misses
// =========================================================================

#[test]
fn test_unknown_crop_any_method() {
    for method in ["sack", "cold room", "box", ""] {
        let result = assess_risk("durian", method, None);
        assert_eq!(result.risk_level, AssessedRisk::Unknown);
        assert_eq!(result.justification, UNKNOWN_JUSTIFICATION);
        assert_eq!(result.recommendation, UNKNOWN_RECOMMENDATION);
        assert_eq!(result.storage_method, method);
    }
}

#[test]
fn test_known_crop_unknown_method() {
    let result = assess_risk("tomato", "backyard pit", None);
    assert_eq!(result.risk_level, AssessedRisk::Unknown);
    assert_eq!(result.justification, UNKNOWN_JUSTIFICATION);
    assert_eq!(result.recommendation, UNKNOWN_RECOMMENDATION);
}

#[test]
fn test_lookup_performs_no_normalization() {
    assert_eq!(assess_risk("tomato", "sack", None).risk_level, AssessedRisk::High);
    assert_eq!(assess_risk("Tomato", "sack", None).risk_level, AssessedRisk::Unknown);
    assert_eq!(assess_risk("TOMATO", "sack", None).risk_level, AssessedRisk::Unknown);
    assert_eq!(assess_risk("tomato", "sack ", None).risk_level, AssessedRisk::Unknown);
    assert_eq!(assess_risk("tomato", "Cold Room", None).risk_level, AssessedRisk::Unknown);
}

// =========================================================================
// Section 3: Region → season
// =========================================================================

#[test]
fn test_region_season_labels() {
    assert_eq!(assess_risk("tomato", "sack", Some("north")).season_label(), "Dry");
    assert_eq!(assess_risk("tomato", "sack", Some("south")).season_label(), "Wet");
    assert_eq!(
        assess_risk("tomato", "sack", Some("middle-belt")).season,
        Some(Season::Transition)
    );
    assert_eq!(assess_risk("tomato", "sack", Some("atlantis")).season, Some(Season::Dry));

    let no_region = assess_risk("tomato", "sack", None);
    assert_eq!(no_region.season, None);
    assert_eq!(no_region.season_label(), "N/A");
}

#[test]
fn test_region_does_not_change_rating() {
    let dry = assess_risk("plantain", "open shed", Some("north"));
    let wet = assess_risk("plantain", "open shed", Some("south"));
    assert_eq!(dry.risk_level, wet.risk_level);
    assert_eq!(dry.justification, wet.justification);
}

// =========================================================================
// Section 4: Tally and reports
// =========================================================================

#[test]
fn test_tally_mixed_batch() {
    let advisor = RiskAdvisor::builtin();
    let tally = advisor.tally(&[("tomato", "sack"), ("cassava", "open shed"), ("durian", "box")]);

    assert_eq!(tally.total, 3);
    assert_eq!(tally.high, 2);
    assert_eq!(tally.unknown, 1);
    assert_eq!(tally.medium + tally.low, 0);
}

#[test]
fn test_tally_is_order_independent() {
    let advisor = RiskAdvisor::builtin();
    let forward = [
        ("onion", "sack"),
        ("yam", "warehouse (well-ventilated)"),
        ("durian", "box"),
        ("maize", "sack"),
    ];
    let mut reversed = forward;
    reversed.reverse();

    assert_eq!(advisor.tally(&forward), advisor.tally(&reversed));
}

#[test]
fn test_report_from_owned_pairs() {
    let advisor = RiskAdvisor::builtin();
    let pairs = vec![
        ("maize".to_string(), "sack".to_string()),
        ("maize".to_string(), "cold room".to_string()),
    ];
    let report = advisor.report(&pairs, Some("south"));

    assert_eq!(report.assessments.len(), 2);
    assert_eq!(report.assessments[0].risk_level, AssessedRisk::High);
    assert_eq!(report.assessments[1].risk_level, AssessedRisk::Unknown);
    assert!(report.assessments.iter().all(|a| a.season == Some(Season::Wet)));
    assert_eq!(report.tally, advisor.tally(&pairs));
}

// =========================================================================
// Section 5: Comparison across crops
// =========================================================================

#[test]
fn test_compare_cold_room_excludes_maize() {
    let rows = RiskAdvisor::builtin().compare_crops("cold room");
    let crops: Vec<Crop> = rows.iter().map(|r| r.crop).collect();

    assert_eq!(crops, vec![Crop::Tomato, Crop::Cassava, Crop::Plantain]);
    assert!(!crops.contains(&Crop::Maize));
    assert!(rows.iter().all(|r| r.risk_level == RiskLevel::Low));
}

#[test]
fn test_compare_sack_covers_all_crops() {
    let rows = RiskAdvisor::builtin().compare_crops("sack");
    assert_eq!(rows.len(), 6);
}

// =========================================================================
// Section 6: Purity
// =========================================================================

#[test]
fn test_repeat_queries_are_identical() {
    let first = assess_risk("cassava", "evap. cooler", Some("middle-belt"));
    let second = assess_risk("cassava", "evap. cooler", Some("middle-belt"));
    assert_eq!(first, second);

    let a = serde_json::to_vec(&first).unwrap();
    let b = serde_json::to_vec(&second).unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_shared_across_threads() {
    let advisor = RiskAdvisor::builtin();
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let advisor = advisor.clone();
            std::thread::spawn(move || advisor.assess_risk("onion", "warehouse (well-ventilated)", None))
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap().risk_level, AssessedRisk::Low);
    }
}

// =========================================================================
// Section 7: Alternative tables
// =========================================================================

#[test]
fn test_advisor_from_json_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"{{ "crops": [ {{ "crop": "yam", "sensitivity": "Medium", "storage": [
            {{ "method": "warehouse", "risk": "Low",
               "justification": "Lasts several weeks when properly stored." }} ] }} ] }}"#
    )
    .unwrap();

    let advisor = RiskAdvisor::from_json_file(file.path()).unwrap();
    assert_eq!(advisor.crop_count(), 1);

    let hit = advisor.assess_risk("yam", "warehouse", None);
    assert_eq!(hit.risk_level, AssessedRisk::Low);
    assert_eq!(hit.recommendation, DEFAULT_RECOMMENDATION);

    // Not in this table, although the built-in one has it
    let miss = advisor.assess_risk("tomato", "sack", None);
    assert_eq!(miss.risk_level, AssessedRisk::Unknown);
}

#[test]
fn test_loaded_table_keeps_file_order() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"{{ "crops": [
            {{ "crop": "maize", "sensitivity": "Medium", "storage": [
                {{ "method": "cold room", "risk": "Low", "justification": "Dry grain keeps." }} ] }},
            {{ "crop": "tomato", "sensitivity": "High", "storage": [
                {{ "method": "cold room", "risk": "Low", "justification": "Preserves freshness." }} ] }}
        ] }}"#
    )
    .unwrap();

    let advisor = RiskAdvisor::from_json_file(file.path()).unwrap();

    let compared: Vec<Crop> = advisor.compare_crops("cold room").iter().map(|r| r.crop).collect();
    assert_eq!(compared, vec![Crop::Maize, Crop::Tomato]);

    let listed: Vec<Crop> = advisor.catalog().iter().map(|c| c.crop).collect();
    assert_eq!(listed, vec![Crop::Maize, Crop::Tomato]);
}

#[test]
fn test_sample_report_json_shape() {
    let report = RiskAdvisor::builtin().sample_report();
    let json: serde_json::Value =
        serde_json::from_str(&JsonFormatter::format(&report).unwrap()).unwrap();

    assert_eq!(json["assessments"].as_array().unwrap().len(), 6);
    assert_eq!(json["assessments"][0]["crop"], "Tomato");
    assert_eq!(json["tally"]["total"], 6);
    assert_eq!(json["levels"][0]["level"], "High");
    assert_eq!(json["levels"][3]["level"], "Unknown");
}
